#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use crate::generator::Congruential;
use crate::params::{DerivedParameters, GeneratorConfig};

/// One generated step.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceRow {
    /// 1-based step number. The closure row has index m + 1.
    pub index: u128,
    /// X(i-1).
    pub previous: u128,
    /// X(i), in 0 .. m.
    pub value: u128,
    /// X(i) / (m - 1), in [0, 1].
    pub ratio: f64,
    pub is_closure: bool,
}

/// Returns value / (m - 1). The single-state modulus m = 1 maps to 0.
pub fn ratio(value: u128, modulus: u128) -> f64 {
    if modulus <= 1 { 0.0 } else { value as f64 / (modulus - 1) as f64 }
}

/// Rows of one full period: the first min(P, m) steps followed by the closure row m + 1.
/// Steps between the two are skipped with a jump, so only emitted rows cost time.
#[derive(Clone, Debug)]
pub struct Sequence {
    rng: Congruential,
    modulus: u128,
    /// Number of ordinary rows, min(P, m).
    shown: u128,
    /// Index of the last emitted row.
    index: u128,
    closed: bool,
}

impl Sequence {
    /// Starts a sequence. The configuration must already have passed `check`.
    pub fn new(config: &GeneratorConfig, derived: &DerivedParameters) -> Self {
        let period = config.period.max(0) as u128;
        Sequence {
            rng: Congruential::from_parts(config, derived),
            modulus: derived.modulus,
            shown: period.min(derived.modulus),
            index: 0,
            closed: false,
        }
    }

    #[inline]
    pub fn modulus(&self) -> u128 {
        self.modulus
    }

    fn row(&mut self, index: u128, is_closure: bool) -> SequenceRow {
        let previous = self.rng.state();
        let value = self.rng.step();
        SequenceRow { index, previous, value, ratio: ratio(value, self.modulus), is_closure }
    }
}

impl Iterator for Sequence {
    type Item = SequenceRow;

    fn next(&mut self) -> Option<SequenceRow> {
        if self.closed {
            return None;
        }
        if self.index < self.shown {
            self.index += 1;
            return Some(self.row(self.index, false));
        }
        // Reach the state at step m, then wrap around once more.
        let hidden = self.modulus - self.shown;
        if hidden > 0 {
            tracing::trace!(hidden = %hidden, "skipping to the end of the period");
            self.rng.jump(hidden);
        }
        self.closed = true;
        Some(self.row(self.modulus + 1, true))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.closed { 0 } else { self.shown - self.index + 1 };
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
