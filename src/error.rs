use thiserror::Error;

use crate::validate::Violation;

/// Result type used by `rand_congruential`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced outside of generation proper.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("generate the table before exporting")]
    EmptyTable,

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Every precondition a configuration violates, in check order.
/// Never empty.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid generator parameters: {}", join(.violations))]
pub struct ValidationFailure {
    violations: Vec<Violation>,
}

fn join(violations: &[Violation]) -> String {
    violations.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("; ")
}

impl ValidationFailure {
    /// Wraps a violation list. Returns None if the list is empty.
    pub fn new(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() { None } else { Some(ValidationFailure { violations }) }
    }

    #[inline]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }
}
