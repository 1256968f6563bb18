//! # Algorithms
use std::fmt;

use crate::algorithm::two_phase::dictionary::Dictionary;

pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum OptimizationResult<F> {
    /// The final dictionary, from which the optimal value and solution can be read.
    Optimal(Dictionary<F>),
    /// No point satisfies the constraints.
    Infeasible,
    /// The objective function can be increased without limit.
    Unbounded,
}

impl<F> OptimizationResult<F> {
    /// Outcome without the dictionary.
    pub fn status(&self) -> Status {
        match self {
            OptimizationResult::Optimal(_) => Status::Optimal,
            OptimizationResult::Infeasible => Status::Infeasible,
            OptimizationResult::Unbounded => Status::Unbounded,
        }
    }

    /// The optimal dictionary, if there is one.
    pub fn dictionary(&self) -> Option<&Dictionary<F>> {
        match self {
            OptimizationResult::Optimal(dictionary) => Some(dictionary),
            OptimizationResult::Infeasible | OptimizationResult::Unbounded => None,
        }
    }
}

/// Outcome of a solve, or of a part of it.
#[allow(missing_docs)]
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Status {
    Optimal,
    Infeasible,
    Unbounded,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Status::Optimal => "OPTIMAL",
            Status::Infeasible => "INFEASIBLE",
            Status::Unbounded => "UNBOUNDED",
        })
    }
}
