#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ValidationFailure;
use crate::lcg::gcd;
use crate::params::{DerivedParameters, Family, GeneratorConfig, DEFAULT_PRECISION, MAX_PRECISION};

/// A violated generator precondition. Display is the message shown to the user.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum Violation {
    #[error("all parameters must be integers")]
    NotInteger,

    #[error("X₀ must be a positive integer")]
    SeedNotPositive,

    #[error("K must be an integer (≥ 0)")]
    MultiplierSeedNegative,

    #[error("c must be a positive integer")]
    IncrementNotPositive,

    #[error("P (period) must be a positive integer")]
    PeriodNotPositive,

    #[error("a must be positive (a = 1 + 4K)")]
    MultiplierNotPositive,

    #[error("m must be a positive integer (m = 2^g)")]
    ModulusNotPositive,

    #[error("c must be relatively prime to m")]
    IncrementNotCoprime,

    #[error("the seed X₀ must be an odd number")]
    SeedEven,
}

/// Inputs as far as they could be read. None marks a value that is not an integer.
#[derive(Clone, Copy, Debug, Default)]
struct Inputs {
    seed: Option<i64>,
    multiplier_seed: Option<i64>,
    increment: Option<i64>,
    period: Option<i64>,
}

/// Runs every check. Checks on unreadable inputs are skipped;
/// those inputs are reported once as NotInteger.
fn collect(family: Family, inputs: Inputs) -> Vec<Violation> {
    let mut violations = Vec::new();
    let linear = family.is_linear();
    let negative = |x: Option<i64>| x.map_or(false, |x| x < 0);
    let not_positive = |x: Option<i64>| x.map_or(false, |x| x <= 0);

    let readable = inputs.seed.is_some()
        && inputs.multiplier_seed.is_some()
        && inputs.period.is_some()
        && (!linear || inputs.increment.is_some());
    if !readable {
        violations.push(Violation::NotInteger);
    }
    if not_positive(inputs.seed) {
        violations.push(Violation::SeedNotPositive);
    }
    if negative(inputs.multiplier_seed) {
        violations.push(Violation::MultiplierSeedNegative);
    }
    if linear && not_positive(inputs.increment) {
        violations.push(Violation::IncrementNotPositive);
    }
    if not_positive(inputs.period) {
        violations.push(Violation::PeriodNotPositive);
    }

    match family {
        Family::Linear => {
            if let Some(k) = inputs.multiplier_seed {
                if family.multiplier(k) <= 0 {
                    violations.push(Violation::MultiplierNotPositive);
                }
            }
            if let Some(period) = inputs.period {
                match family.exponent(period) {
                    None => violations.push(Violation::ModulusNotPositive),
                    Some(g) => {
                        // Hull-Dobell: c and m relatively prime.
                        // a = 1 (mod 4) holds by construction of a.
                        if let Some(c) = inputs.increment {
                            if gcd(c.unsigned_abs() as u128, 1u128 << g) != 1 {
                                violations.push(Violation::IncrementNotCoprime);
                            }
                        }
                    }
                }
            }
        }
        Family::Multiplicative(_) => {
            // Full period of a multiplicative generator mod 2**g needs an odd seed.
            if inputs.seed.map_or(false, |x| x.rem_euclid(2) == 0) {
                violations.push(Violation::SeedEven);
            }
        }
    }
    violations
}

/// Checks a configuration and its derived parameters.
/// Returns every violated precondition in check order; empty means valid.
pub fn check(config: &GeneratorConfig, derived: &DerivedParameters) -> Vec<Violation> {
    debug_assert_eq!(*derived, config.derive());
    collect(config.family, Inputs {
        seed: Some(config.seed),
        multiplier_seed: Some(config.multiplier_seed),
        increment: Some(config.increment),
        period: Some(config.period),
    })
}

fn parse_integer(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Generator inputs as entered, before any parsing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawConfig {
    pub seed: String,
    pub multiplier_seed: String,
    /// Increment c. Only read for the linear family.
    pub increment: String,
    pub period: String,
    /// Ratio digits. Blank or unreadable text selects the default.
    pub precision: String,
    pub family: Family,
}

impl RawConfig {
    pub fn new(family: Family) -> Self {
        RawConfig {
            seed: String::new(),
            multiplier_seed: String::new(),
            increment: String::new(),
            period: String::new(),
            precision: String::new(),
            family,
        }
    }

    fn inputs(&self) -> Inputs {
        Inputs {
            seed: parse_integer(&self.seed),
            multiplier_seed: parse_integer(&self.multiplier_seed),
            increment: if self.family.is_linear() { parse_integer(&self.increment) } else { Some(0) },
            period: parse_integer(&self.period),
        }
    }

    fn precision(&self) -> i64 {
        parse_integer(&self.precision).unwrap_or(DEFAULT_PRECISION as i64).clamp(0, MAX_PRECISION as i64)
    }

    /// Returns every violated precondition, including unreadable numbers.
    pub fn validate(&self) -> Vec<Violation> {
        collect(self.family, self.inputs())
    }

    /// Parses and validates in one pass.
    pub fn parse(&self) -> Result<GeneratorConfig, ValidationFailure> {
        let inputs = self.inputs();
        if let Some(failure) = ValidationFailure::new(collect(self.family, inputs)) {
            tracing::debug!(violations = failure.violations().len(), "rejected raw configuration");
            return Err(failure);
        }
        // Every input is present once NotInteger was not reported.
        Ok(GeneratorConfig {
            seed: inputs.seed.unwrap_or_default(),
            multiplier_seed: inputs.multiplier_seed.unwrap_or_default(),
            increment: inputs.increment.unwrap_or_default(),
            period: inputs.period.unwrap_or_default(),
            precision: self.precision() as u8,
            family: self.family,
        })
    }
}
