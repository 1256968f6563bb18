//! # Error reporting for malformed linear programs
//!
//! A linear program that is infeasible or unbounded is not an error; these are ordinary outcomes
//! of the algorithm. The errors in this module describe input that doesn't form a linear program in
//! standard form at all.
use std::error::Error;
use std::fmt;

/// A `ProblemError` is created when the dimensions or values of `(c, A, b)` are inconsistent.
#[derive(PartialEq, Clone, Debug)]
pub enum ProblemError {
    /// The objective function has no coefficients, so there are no variables.
    NoVariables,
    /// The number of right-hand side values differs from the number of constraint rows.
    BoundsLength {
        /// Number of constraint rows.
        expected: usize,
        /// Number of right-hand side values.
        found: usize,
    },
    /// A row of the constraint matrix has a different number of coefficients than the objective.
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Number of variables.
        expected: usize,
        /// Length of the row.
        found: usize,
    },
    /// A value given as a float is infinite or not a number.
    NotFinite(f64),
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProblemError::NoVariables => write!(f, "the objective function has no variables"),
            ProblemError::BoundsLength { expected, found } => write!(
                f, "expected {} right-hand side values, one per constraint, but found {}",
                expected, found,
            ),
            ProblemError::RowLength { row, expected, found } => write!(
                f, "constraint row {} has {} coefficients, but there are {} variables",
                row, found, expected,
            ),
            ProblemError::NotFinite(value) => write!(f, "value {} is not finite", value),
        }
    }
}

impl Error for ProblemError {
}
