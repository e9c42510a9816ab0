pub mod error;
pub mod export;
pub mod format;
pub mod generator;
pub mod lcg;
pub mod params;
pub mod sequence;
pub mod validate;

pub use error::{Error, ValidationFailure};
pub use format::{DisplayRecord, RowFormatter, Summary};
pub use generator::Congruential;
pub use params::*;
pub use sequence::{Sequence, SequenceRow};
pub use validate::{RawConfig, Violation};
pub use rand_core::RngCore;

#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

// Two generator families share one pipeline:
// config -> derived parameters -> checks -> sequence -> display records.
// Nothing is kept between calls.

/// Returns every precondition the configuration violates. Empty means valid.
pub fn validate(config: &GeneratorConfig) -> Vec<Violation> {
    let violations = validate::check(config, &config.derive());
    if !violations.is_empty() {
        tracing::debug!(?violations, "configuration rejected");
    }
    violations
}

/// A generated table with the parameters it was generated from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Table {
    pub derived: DerivedParameters,
    pub summary: Summary,
    pub records: Vec<DisplayRecord>,
}

/// Validates, then generates one full period as display records.
pub fn tabulate(config: &GeneratorConfig) -> Result<Table, ValidationFailure> {
    let derived = config.derive();
    if let Some(failure) = ValidationFailure::new(validate::check(config, &derived)) {
        tracing::debug!(violations = ?failure.violations(), "configuration rejected");
        return Err(failure);
    }
    let formatter = RowFormatter::new(config, &derived);
    let records: Vec<DisplayRecord> = Sequence::new(config, &derived).map(|row| formatter.format(&row)).collect();
    tracing::debug!(rows = records.len(), m = %derived.modulus, "generated sequence");
    Ok(Table { derived, summary: Summary::new(config, &derived), records })
}

/// Validates, then generates the first min(P, m) rows and the closure row m + 1.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<DisplayRecord>, ValidationFailure> {
    tabulate(config).map(|table| table.records)
}
