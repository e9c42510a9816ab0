use rand_congruential::*;
use rstest::rstest;

fn cells(records: &[DisplayRecord]) -> Vec<(u128, u128, u128, &str)> {
    records.iter().map(|r| (r.index, r.previous, r.value, r.ratio.as_str())).collect()
}

// === Concrete scenarios ===

#[rstest]
fn linear_scenario() {
    let config = GeneratorConfig::linear(7, 1, 5, 4).with_precision(4);
    assert_eq!(DerivedParameters { exponent: 2, modulus: 4, multiplier: 5 }, config.derive());
    let records = generate(&config).expect("valid configuration");
    assert_eq!(
        vec![(1, 7, 0, "0"), (2, 0, 1, "0.3333"), (3, 1, 2, "0.6667"), (4, 2, 3, "1"), (5, 3, 0, "0")],
        cells(&records)
    );
    assert_eq!("(5 * 7 + 5) MOD(4)", records[0].operation);
    assert!(records[4].is_closure);
    assert!(records[.. 4].iter().all(|r| !r.is_closure));
}

#[rstest]
fn multiplicative_scenario() {
    let config = GeneratorConfig::multiplicative(1, 0, 1, Formula::Odd3).with_precision(4);
    assert_eq!(DerivedParameters { exponent: 2, modulus: 4, multiplier: 3 }, config.derive());
    let records = generate(&config).expect("valid configuration");
    assert_eq!(vec![(1, 1, 3, "1"), (5, 1, 3, "1")], cells(&records));
    assert_eq!("(3 * 1) MOD(4)", records[1].operation);
    assert_eq!("rᵢ = 3 / (3)", records[1].tooltip);
}

#[rstest]
#[case("linear negative seed", GeneratorConfig::linear(-1, 0, 1, 4), Violation::SeedNotPositive)]
#[case("multiplicative even seed", GeneratorConfig::multiplicative(4, 0, 4, Formula::Odd5), Violation::SeedEven)]
#[case("linear shared factor", GeneratorConfig::linear(7, 1, 10, 8), Violation::IncrementNotCoprime)]
#[case("linear zero period", GeneratorConfig::linear(7, 1, 5, 0), Violation::PeriodNotPositive)]
#[case("multiplicative negative K", GeneratorConfig::multiplicative(3, -1, 4, Formula::Odd3), Violation::MultiplierSeedNegative)]
fn rejected(#[case] name: &str, #[case] config: GeneratorConfig, #[case] expected: Violation) {
    let violations = validate(&config);
    assert!(violations.contains(&expected), "{}: {:?}", name, violations);
    let failure = generate(&config).expect_err("generation must be refused");
    assert_eq!(violations, failure.violations());
}

#[rstest]
fn violations_are_batched() {
    let config = GeneratorConfig::multiplicative(-4, -2, -8, Formula::Odd5);
    assert_eq!(
        vec![Violation::SeedNotPositive, Violation::MultiplierSeedNegative, Violation::PeriodNotPositive, Violation::SeedEven],
        validate(&config)
    );
}

// === Properties over many configurations ===

fn configurations() -> Vec<GeneratorConfig> {
    let mut r: u64 = 7;
    let mut rnd = move || -> u64 { r = r.wrapping_mul(0xb564ef22ec7aece5).wrapping_add(0x9e37); r >> 29 };
    let mut configs = Vec::new();
    for _ in 0 .. 200 {
        let seed = 1 + (rnd() & 0x7fff) as i64;
        let k = (rnd() & 0x3ff) as i64;
        let period = 1 + (rnd() & 0x1ff) as i64;
        let precision = (rnd() % 16) as i64;
        let config = match rnd() % 3 {
            0 => GeneratorConfig::linear(seed, k, 1 + 2 * (rnd() & 0xff) as i64, period),
            1 => GeneratorConfig::multiplicative(seed | 1, k, period, Formula::Odd3),
            _ => GeneratorConfig::multiplicative(seed | 1, k, period, Formula::Odd5),
        };
        configs.push(config.with_precision(precision));
    }
    configs
}

#[rstest]
fn row_count_and_closure() {
    for config in configurations() {
        let derived = config.derive();
        let records = generate(&config).expect("valid configuration");
        let shown = (config.period as u128).min(derived.modulus);
        assert_eq!(shown + 1, records.len() as u128);
        let closure = records.last().unwrap();
        assert_eq!(derived.modulus + 1, closure.index);
        assert!(closure.is_closure);
        for (i, record) in records[.. records.len() - 1].iter().enumerate() {
            assert_eq!(i as u128 + 1, record.index);
            assert!(!record.is_closure);
        }
    }
}

#[rstest]
fn values_and_ratios_in_range() {
    for config in configurations() {
        let derived = config.derive();
        for row in Sequence::new(&config, &derived) {
            assert!(row.value < derived.modulus);
            assert!((0.0 ..= 1.0).contains(&row.ratio));
        }
    }
}

#[rstest]
fn rows_chain_together() {
    for config in configurations() {
        let records = generate(&config).unwrap();
        assert_eq!(config.seed as u128, records[0].previous);
        let ordinary = &records[.. records.len() - 1];
        for pair in ordinary.windows(2) {
            assert_eq!(pair[0].value, pair[1].previous);
        }
    }
}

#[rstest]
fn deterministic_and_idempotent() {
    for config in configurations() {
        assert_eq!(validate(&config), validate(&config));
        assert_eq!(generate(&config), generate(&config));
    }
}

#[rstest]
#[case(GeneratorConfig::linear(7, 1, 5, 4))]
#[case(GeneratorConfig::linear(9, 2, 3, 16))]
#[case(GeneratorConfig::linear(5, 0, 1, 1))]
fn full_display_has_no_hidden_steps(#[case] config: GeneratorConfig) {
    assert_eq!(config.period as u128, config.derive().modulus);
    let records = generate(&config).unwrap();
    let n = records.len();
    assert_eq!(records[n - 2].value, records[n - 1].previous);
}

#[rstest]
fn even_seed_always_rejected() {
    for config in configurations().into_iter().filter(|c| !c.family.is_linear()) {
        let even = GeneratorConfig { seed: config.seed + 1, ..config };
        assert!(validate(&even).contains(&Violation::SeedEven));
    }
}

#[rstest]
fn shared_factor_always_rejected() {
    for config in configurations().into_iter().filter(|c| c.family.is_linear()) {
        let modulus = config.derive().modulus;
        if modulus < 2 {
            continue;
        }
        let even = GeneratorConfig { increment: config.increment + 1, ..config };
        assert!(!validate(&even).is_empty());
    }
}

// === Surrounding surfaces ===

#[rstest]
fn raw_inputs_report_everything_at_once() {
    let raw = RawConfig {
        seed: "-1".into(),
        multiplier_seed: "0".into(),
        increment: "one".into(),
        period: "4".into(),
        precision: "4".into(),
        family: Family::Linear,
    };
    let failure = raw.parse().expect_err("must be rejected");
    assert_eq!(&[Violation::NotInteger, Violation::SeedNotPositive], failure.violations());
}

#[rstest]
fn table_summary_and_export() {
    let table = tabulate(&GeneratorConfig::linear(7, 1, 5, 4)).unwrap();
    assert_eq!("a: 5  c: 5  g: 2  m: 4", table.summary.to_string());
    let csv = export::to_csv_string(&table.records).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(6, lines.len());
    assert_eq!("i,X(i-1),Operation,Xi,rᵢ", lines[0]);
    assert_eq!("5,3,(5 * 3 + 5) MOD(4),0,0", lines[5]);
}

#[rstest]
fn rng_stream_matches_table() {
    let config = GeneratorConfig::multiplicative(3, 2, 64, Formula::Odd5);
    let records = generate(&config).unwrap();
    let mut rng = Congruential::from_config(&config).unwrap();
    for record in &records[.. records.len() - 1] {
        assert_eq!(record.value as u64, rng.next_u64());
    }
}
