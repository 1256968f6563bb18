//! # The two-phase Simplex method
//!
//! This module contains all data structures and logic specific to the dictionary based simplex
//! algorithm, as described in chapters 2 and 5 of Vanderbei's "Linear Programming: Foundations and
//! Extensions".
//!
//! If the origin is not strictly feasible, a feasible dictionary is found first. By default this
//! happens by solving the dual of a modified problem (see the `dual` module), alternatively with
//! the auxiliary variable method of the `phase_one` module. Phase two then improves the feasible
//! dictionary until it is optimal or an unbounded direction is found.
use std::fmt;
use std::str::FromStr;

use enum_map::EnumMap;
use log::debug;

use crate::algorithm::{OptimizationResult, Status};
use crate::algorithm::two_phase::dictionary::Dictionary;
use crate::algorithm::two_phase::dual::{from_dual, to_dual};
use crate::algorithm::two_phase::phase_two::primal;
use crate::algorithm::two_phase::strategy::Rule;
use crate::data::linear_program::LinearProgram;
use crate::data::number_types::{ConversionError, Representation, UnknownName};
use crate::data::number_types::traits::Number;

pub mod dictionary;
pub mod strategy;
mod dual;
mod phase_one;
mod phase_two;

#[cfg(test)]
mod test;

/// How a feasible dictionary is found when the origin is not strictly feasible.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Bootstrap {
    /// Solve the dual of the problem with all objective coefficients replaced by `-1`.
    Dual,
    /// Maximize `-x0` with every constraint relaxed by the auxiliary variable `x0`.
    Auxiliary,
}

impl Bootstrap {
    /// All bootstraps.
    pub const ALL: [Bootstrap; 2] = [Bootstrap::Dual, Bootstrap::Auxiliary];
}

impl Default for Bootstrap {
    fn default() -> Self {
        Bootstrap::Dual
    }
}

impl fmt::Display for Bootstrap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Bootstrap::Dual => "dual",
            Bootstrap::Auxiliary => "auxiliary",
        })
    }
}

impl FromStr for Bootstrap {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dual" => Ok(Bootstrap::Dual),
            "auxiliary" | "aux" => Ok(Bootstrap::Auxiliary),
            other => Err(UnknownName::new("bootstrap", other)),
        }
    }
}

/// Configuration of a solve.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Options {
    /// Tolerance for sign tests. Has to be zero for the integer representation.
    ///
    /// Without a value, the default tolerance of the representation that is solved with is used.
    pub epsilon: Option<f64>,
    /// Pivot rule used whenever the dictionary is not degenerate.
    pub rule: Rule,
    /// Method used to find a feasible dictionary.
    pub bootstrap: Bootstrap,
}

impl Default for Options {
    /// The default tolerance of the representation, Bland's rule and the dual bootstrap.
    fn default() -> Self {
        Self {
            epsilon: None,
            rule: Rule::default(),
            bootstrap: Bootstrap::default(),
        }
    }
}

impl Options {
    /// Default options with the default tolerance of a representation.
    pub fn for_representation(representation: Representation) -> Self {
        Self {
            epsilon: Some(representation.default_epsilon()),
            ..Self::default()
        }
    }

    /// Use another pivot rule.
    pub fn with_rule(self, rule: Rule) -> Self {
        Self { rule, ..self }
    }

    /// Use another bootstrap.
    pub fn with_bootstrap(self, bootstrap: Bootstrap) -> Self {
        Self { bootstrap, ..self }
    }

    /// Use another tolerance.
    pub fn with_epsilon(self, epsilon: f64) -> Self {
        Self { epsilon: Some(epsilon), ..self }
    }
}

/// What happened during a solve.
#[derive(Eq, PartialEq, Clone, Debug, Default)]
pub struct Statistics {
    /// Number of pivots selected by each rule.
    ///
    /// Pivots on degenerate dictionaries are counted for Bland's rule, as that rule selected them.
    /// The pivots moving the auxiliary variable in and out of the basis are not counted.
    pub pivots: EnumMap<Rule, usize>,
    /// The bootstrap that was needed, if any.
    pub bootstrap: Option<Bootstrap>,
}

impl Statistics {
    /// Total number of pivots.
    pub fn nr_pivots(&self) -> usize {
        self.pivots.values().sum()
    }
}

/// Steps of the two-phase method.
enum State<F> {
    CheckFeasible(Dictionary<F>),
    SolveDual(Dictionary<F>),
    SolveAuxiliary,
    SolvePrimal(Dictionary<F>),
    Done(OptimizationResult<F>),
}

/// Solve a linear program with the two-phase Simplex method.
///
/// # Arguments
///
/// * `program`: Problem to solve.
/// * `options`: Tolerance, pivot rule and bootstrap to use.
///
/// # Return value
///
/// The optimal dictionary, or whether the problem is infeasible or unbounded.
///
/// # Errors
///
/// If the problem or the tolerance can't be represented with `F`. This is checked before any
/// pivoting takes place.
pub fn solve<F: Number>(
    program: &LinearProgram,
    options: &Options,
) -> Result<OptimizationResult<F>, ConversionError> {
    solve_with_statistics(program, options).map(|(result, _)| result)
}

/// Solve a linear program, and report how many pivots were needed.
///
/// See `solve`.
pub fn solve_with_statistics<F: Number>(
    program: &LinearProgram,
    options: &Options,
) -> Result<(OptimizationResult<F>, Statistics), ConversionError> {
    let epsilon = options.epsilon.unwrap_or_else(|| F::REPRESENTATION.default_epsilon());
    let epsilon = F::tolerance(epsilon)?;
    let mut statistics = Statistics::default();

    let dictionary = Dictionary::<F>::new(program)?;
    let costs = dictionary.tableau()[0][1..].to_vec();
    debug!(
        "solving {} variables and {} constraints with {} numbers, {} rule",
        program.nr_variables(), program.nr_constraints(), F::REPRESENTATION, options.rule,
    );

    let mut state = State::CheckFeasible(dictionary);
    let result = loop {
        state = match state {
            State::CheckFeasible(dictionary) => {
                if dictionary.is_strictly_feasible(&epsilon) {
                    State::SolvePrimal(dictionary)
                } else {
                    debug!("origin is not strictly feasible, bootstrapping with {}", options.bootstrap);
                    statistics.bootstrap = Some(options.bootstrap);
                    match options.bootstrap {
                        Bootstrap::Dual => State::SolveDual(dictionary),
                        Bootstrap::Auxiliary => State::SolveAuxiliary,
                    }
                }
            },
            State::SolveDual(dictionary) => {
                let mut dual = to_dual(dictionary);
                match primal(&mut dual, options.rule, &epsilon, &mut statistics) {
                    Status::Unbounded => {
                        debug!("dual is unbounded");
                        State::Done(OptimizationResult::Infeasible)
                    },
                    _ => State::SolvePrimal(from_dual(dual, &costs)),
                }
            },
            State::SolveAuxiliary => {
                match phase_one::auxiliary(program, &costs, options.rule, &epsilon, &mut statistics)? {
                    Some(dictionary) => State::SolvePrimal(dictionary),
                    None => State::Done(OptimizationResult::Infeasible),
                }
            },
            State::SolvePrimal(mut dictionary) => {
                debug!("phase two from objective value {}", dictionary.objective_value());
                match primal(&mut dictionary, options.rule, &epsilon, &mut statistics) {
                    Status::Unbounded => State::Done(OptimizationResult::Unbounded),
                    _ => State::Done(OptimizationResult::Optimal(dictionary)),
                }
            },
            State::Done(result) => break result,
        };
    };

    debug!("{} after {} pivots", result.status(), statistics.nr_pivots());
    Ok((result, statistics))
}
