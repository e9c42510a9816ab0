#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use crate::error::ValidationFailure;
use crate::lcg;
use crate::params::{DerivedParameters, GeneratorConfig};

/// Congruential generator X <- (a * X + c) mod m over a power-of-two modulus m.
/// The multiplicative family is the case c = 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Congruential {
    /// Current state. Starts at the seed, which is not reduced modulo m.
    state: u128,
    multiplier: u128,
    increment: u128,
    /// m - 1.
    mask: u128,
}

impl Congruential {

    /// Creates a generator from a validated configuration.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, ValidationFailure> {
        let derived = config.derive();
        match ValidationFailure::new(crate::validate::check(config, &derived)) {
            Some(failure) => Err(failure),
            None => Ok(Self::from_parts(config, &derived)),
        }
    }

    /// Creates a generator without checking preconditions.
    pub(crate) fn from_parts(config: &GeneratorConfig, derived: &DerivedParameters) -> Self {
        // Casts keep residues mod 2**128, so reducing by the mask afterwards is exact.
        let increment = if config.family.is_linear() { config.increment as u128 } else { 0 };
        Congruential {
            state: config.seed as u128,
            multiplier: derived.multiplier as u128,
            increment,
            mask: derived.mask(),
        }
    }

    /// Returns the current state.
    #[inline]
    pub fn state(&self) -> u128 {
        self.state
    }

    /// Advances to the next state and returns it.
    #[inline]
    pub fn step(&mut self) -> u128 {
        self.state = lcg::step(self.multiplier, self.increment, self.state, self.mask);
        self.state
    }

    /// Advances by the given number of steps at once.
    pub fn jump(&mut self, steps: u128) {
        self.state = lcg::get_state(self.multiplier, self.increment, self.state, steps, self.mask);
    }
}

use rand_core::{Error, RngCore};

// Output is the raw state, so only the low g bits vary.
impl RngCore for Congruential {
    fn next_u32(&mut self) -> u32 {
        self.step() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = dest.len();
        let mut i = 0;
        while i < bytes {
            let x = self.next_u64();
            let j = bytes.min(i + 8);
            // Always use Little-Endian.
            dest[i .. j].copy_from_slice(&x.to_le_bytes()[0 .. (j - i)]);
            i = j;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
