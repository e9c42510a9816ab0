use core::fmt;

#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use crate::params::{DerivedParameters, GeneratorConfig};
use crate::sequence::SequenceRow;

/// A generated step ready for display or export.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DisplayRecord {
    pub index: u128,
    pub previous: u128,
    /// The recurrence with numbers substituted, e.g. "(5 * 7 + 5) MOD(4)".
    pub operation: String,
    pub value: u128,
    /// Formatted ratio. Exactly 0 and 1 are written without decimals.
    pub ratio: String,
    /// How the ratio was computed, e.g. "rᵢ = 2 / (3)".
    pub tooltip: String,
    pub is_closure: bool,
}

/// Formats ratio value / (m - 1) with the given number of decimals.
pub fn format_ratio(value: u128, modulus: u128, precision: usize) -> String {
    if value == 0 || modulus <= 1 {
        String::from("0")
    } else if value == modulus - 1 {
        String::from("1")
    } else {
        format!("{:.*}", precision, crate::sequence::ratio(value, modulus))
    }
}

/// Turns sequence rows into display records for one configuration.
#[derive(Clone, Copy, Debug)]
pub struct RowFormatter {
    multiplier: i128,
    /// Present for the linear family only.
    increment: Option<i64>,
    modulus: u128,
    precision: usize,
}

impl RowFormatter {
    pub fn new(config: &GeneratorConfig, derived: &DerivedParameters) -> Self {
        RowFormatter {
            multiplier: derived.multiplier,
            increment: config.family.is_linear().then_some(config.increment),
            modulus: derived.modulus,
            precision: config.precision(),
        }
    }

    pub fn operation(&self, previous: u128) -> String {
        match self.increment {
            Some(c) => format!("({} * {} + {}) MOD({})", self.multiplier, previous, c, self.modulus),
            None => format!("({} * {}) MOD({})", self.multiplier, previous, self.modulus),
        }
    }

    pub fn tooltip(&self, value: u128) -> String {
        format!("rᵢ = {} / ({})", value, self.modulus.saturating_sub(1))
    }

    pub fn format(&self, row: &SequenceRow) -> DisplayRecord {
        DisplayRecord {
            index: row.index,
            previous: row.previous,
            operation: self.operation(row.previous),
            value: row.value,
            ratio: format_ratio(row.value, self.modulus, self.precision),
            tooltip: self.tooltip(row.value),
            is_closure: row.is_closure,
        }
    }
}

/// Derived variables shown above a table: a, c (linear only), g and m.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Summary {
    pub multiplier: i128,
    pub increment: Option<i64>,
    pub exponent: u32,
    pub modulus: u128,
}

impl Summary {
    pub fn new(config: &GeneratorConfig, derived: &DerivedParameters) -> Self {
        Summary {
            multiplier: derived.multiplier,
            increment: config.family.is_linear().then_some(config.increment),
            exponent: derived.exponent,
            modulus: derived.modulus,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a: {}", self.multiplier)?;
        if let Some(c) = self.increment {
            write!(f, "  c: {}", c)?;
        }
        write!(f, "  g: {}  m: {}", self.exponent, self.modulus)
    }
}
