#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Ratio digits used when none are given.
pub const DEFAULT_PRECISION: u8 = 4;

/// Ratio digits are clamped to 0 ..= MAX_PRECISION.
pub const MAX_PRECISION: u8 = 15;

/// Multiplier formula of the multiplicative generator: a = base + 8K.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Formula {
    /// a = 3 + 8K.
    Odd3,
    /// a = 5 + 8K.
    Odd5,
}

impl Formula {
    #[inline]
    pub fn base(self) -> i128 {
        match self {
            Formula::Odd3 => 3,
            Formula::Odd5 => 5,
        }
    }
}

/// Generator family.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Family {
    /// Mixed generator X <- (a * X + c) mod m, checked against Hull-Dobell.
    Linear,
    /// Multiplicative generator X <- (a * X) mod m.
    Multiplicative(Formula),
}

impl Family {
    /// Returns the modulus exponent g for the requested period,
    /// or None if the period is not positive and no exponent exists.
    ///
    /// Linear: g = ceil(log2(P)). Multiplicative: g = ceil(log2(P) + 2).
    pub fn exponent(self, period: i64) -> Option<u32> {
        if period <= 0 {
            return None;
        }
        // ceil(log2(P)) for integer P is the exponent of the next power of two.
        let g = (period as u64).next_power_of_two().trailing_zeros();
        Some(match self {
            Family::Linear => g,
            Family::Multiplicative(_) => g + 2,
        })
    }

    /// Returns the multiplier a derived from the multiplier seed K.
    /// Linear: a = 1 + 4K. Multiplicative: a = base + 8K.
    pub fn multiplier(self, multiplier_seed: i64) -> i128 {
        let k = multiplier_seed as i128;
        match self {
            // a = 1 (mod 4) holds for every K, which is the second Hull-Dobell condition.
            Family::Linear => 1 + 4 * k,
            Family::Multiplicative(formula) => formula.base() + 8 * k,
        }
    }

    #[inline]
    pub fn is_linear(self) -> bool {
        self == Family::Linear
    }
}

/// Inputs of one generation request.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct GeneratorConfig {
    /// Seed X0.
    pub seed: i64,
    /// Multiplier seed K.
    pub multiplier_seed: i64,
    /// Increment c. Ignored by the multiplicative family.
    #[cfg_attr(feature = "serde", serde(default))]
    pub increment: i64,
    /// Requested number of rows P.
    pub period: i64,
    /// Ratio digits. Values above MAX_PRECISION are clamped on use.
    #[cfg_attr(feature = "serde", serde(default = "default_precision"))]
    pub precision: u8,
    pub family: Family,
}

#[cfg(feature = "serde")]
fn default_precision() -> u8 {
    DEFAULT_PRECISION
}

impl GeneratorConfig {

    /// Creates a mixed linear generator configuration.
    pub fn linear(seed: i64, multiplier_seed: i64, increment: i64, period: i64) -> Self {
        GeneratorConfig { seed, multiplier_seed, increment, period, precision: DEFAULT_PRECISION, family: Family::Linear }
    }

    /// Creates a multiplicative generator configuration.
    pub fn multiplicative(seed: i64, multiplier_seed: i64, period: i64, formula: Formula) -> Self {
        GeneratorConfig { seed, multiplier_seed, increment: 0, period, precision: DEFAULT_PRECISION, family: Family::Multiplicative(formula) }
    }

    /// Sets ratio digits, clamped to 0 ..= MAX_PRECISION.
    pub fn with_precision(mut self, digits: i64) -> Self {
        self.precision = digits.clamp(0, MAX_PRECISION as i64) as u8;
        self
    }

    /// Ratio digits in effect.
    #[inline]
    pub fn precision(&self) -> usize {
        self.precision.min(MAX_PRECISION) as usize
    }

    /// Computes the generator parameters. Never fails; see `validate`.
    pub fn derive(&self) -> DerivedParameters {
        DerivedParameters::derive(self.family, self.multiplier_seed, self.period)
    }
}

/// Parameters computed from a configuration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DerivedParameters {
    /// Exponent g of the modulus.
    pub exponent: u32,
    /// Modulus m = 2**g, or 0 if the period admits no exponent.
    pub modulus: u128,
    /// Multiplier a.
    pub multiplier: i128,
}

impl DerivedParameters {
    pub fn derive(family: Family, multiplier_seed: i64, period: i64) -> Self {
        let (exponent, modulus) = match family.exponent(period) {
            Some(g) => (g, 1u128 << g),
            None => (0, 0),
        };
        let parameters = DerivedParameters { exponent, modulus, multiplier: family.multiplier(multiplier_seed) };
        tracing::debug!(?family, period, multiplier_seed, g = exponent, m = %modulus, a = %parameters.multiplier, "derived parameters");
        parameters
    }

    /// Mask reducing values modulo m.
    #[inline]
    pub fn mask(&self) -> u128 {
        crate::lcg::mask(self.exponent)
    }
}
