use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand_congruential::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Full-period tables of congruential generators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Read a JSON generator configuration instead of subcommand arguments
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table, global = true)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mixed generator X <- (a * X + c) mod m with a = 1 + 4K
    Linear {
        #[command(flatten)]
        inputs: Inputs,

        /// Increment c
        #[arg(short = 'c', long, allow_hyphen_values = true)]
        increment: String,
    },
    /// Multiplicative generator X <- (a * X) mod m with a = 3 + 8K or 5 + 8K
    Multiplicative {
        #[command(flatten)]
        inputs: Inputs,

        /// Multiplier formula
        #[arg(short = 'f', long, value_enum, default_value_t = Formula::Odd3)]
        formula: Formula,
    },
}

// Numbers are kept as text so that unreadable values are reported with every other violation.
#[derive(Args, Debug)]
struct Inputs {
    /// Seed X0
    #[arg(short = 'x', long, allow_hyphen_values = true)]
    seed: String,

    /// Multiplier seed K
    #[arg(short = 'k', long, allow_hyphen_values = true)]
    multiplier_seed: String,

    /// Requested period P
    #[arg(short = 'p', long, allow_hyphen_values = true)]
    period: String,

    /// Decimal digits of the ratio, 0 to 15
    #[arg(short = 'd', long, default_value = "4", allow_hyphen_values = true)]
    precision: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

impl Command {
    fn raw_config(&self) -> RawConfig {
        let (inputs, family, increment) = match self {
            Command::Linear { inputs, increment } => (inputs, Family::Linear, increment.clone()),
            Command::Multiplicative { inputs, formula } => (inputs, Family::Multiplicative(*formula), String::new()),
        };
        RawConfig {
            seed: inputs.seed.clone(),
            multiplier_seed: inputs.multiplier_seed.clone(),
            increment,
            period: inputs.period.clone(),
            precision: inputs.precision.clone(),
            family,
        }
    }
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig> {
    match (&cli.command, &cli.config) {
        (Some(command), None) => Ok(command.raw_config().parse()?),
        (None, Some(path)) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            let config: GeneratorConfig =
                serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
            tracing::info!(path = %path.display(), "loaded configuration");
            Ok(config)
        }
        (Some(_), Some(_)) => bail!("give either a subcommand or --config, not both"),
        (None, None) => bail!("give a subcommand (linear, multiplicative) or --config"),
    }
}

fn render_table(table: &Table) -> String {
    let header = export::HEADER.map(String::from);
    let rows: Vec<[String; 5]> = table
        .records
        .iter()
        .map(|r| [r.index.to_string(), r.previous.to_string(), r.operation.clone(), r.value.to_string(), r.ratio.clone()])
        .collect();

    let mut widths = [0usize; 5];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |row: &[String; 5]| -> String {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{}{}", cell, " ".repeat(width - cell.chars().count())))
            .collect();
        cells.join("  ").trim_end().to_string()
    };

    let mut out = format!("{}\n\n{}\n", table.summary, line(&header));
    for (row, record) in rows.iter().zip(table.records.iter()) {
        out.push_str(&line(row));
        if record.is_closure {
            out.push_str("  <- period closes");
        }
        out.push('\n');
    }
    out
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let table = tabulate(&config)?;
    tracing::info!(rows = table.records.len(), m = %table.derived.modulus, "generated table");

    let rendered = match cli.format {
        Format::Table => render_table(&table),
        Format::Csv => export::to_csv_string(&table.records)?,
        Format::Json => serde_json::to_string_pretty(&table)? + "\n",
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => io::stdout().lock().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ValidationFailure>() {
                Some(failure) => {
                    eprintln!("Check the inputs:");
                    for violation in failure.violations() {
                        eprintln!("  - {}", violation);
                    }
                }
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}
