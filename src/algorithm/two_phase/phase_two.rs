//! # Phase two: improving a feasible dictionary
//!
//! The pivot loop shared by all phases. It is used on the primal dictionary in phase two, and on
//! the dual and auxiliary dictionaries during the bootstrap.
use log::trace;

use crate::algorithm::Status;
use crate::algorithm::two_phase::dictionary::Dictionary;
use crate::algorithm::two_phase::Statistics;
use crate::algorithm::two_phase::strategy::pivot_rule::Selection;
use crate::algorithm::two_phase::strategy::Rule;
use crate::data::number_types::traits::Number;

/// Increases the objective value of a feasible dictionary up to the maximum.
///
/// Whenever the dictionary is degenerate, the pivot is selected with Bland's rule instead of the
/// configured rule, which rules out cycling.
///
/// # Arguments
///
/// * `dictionary`: A dictionary of which all basic variables are nonnegative.
/// * `rule`: Pivot rule to use on nondegenerate dictionaries.
/// * `epsilon`: Tolerance for sign tests.
/// * `statistics`: Pivots are counted here, by the rule that selected them.
///
/// # Return value
///
/// `Status::Optimal` with the dictionary in its optimal state, or `Status::Unbounded`. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<F: Number>(
    dictionary: &mut Dictionary<F>,
    rule: Rule,
    epsilon: &F,
    statistics: &mut Statistics,
) -> Status {
    loop {
        let current_rule = if dictionary.is_degenerate(epsilon) { Rule::Bland } else { rule };

        match current_rule.select_pivot(dictionary, epsilon) {
            Selection::Optimal => break Status::Optimal,
            Selection::Unbounded { column } => {
                trace!(
                    "{} can increase without limit",
                    dictionary.variable_name(dictionary.nonbasic()[column]),
                );
                break Status::Unbounded;
            },
            Selection::Pivot { column, row } => {
                trace!(
                    "{}: {} entering, {} leaving",
                    current_rule,
                    dictionary.variable_name(dictionary.nonbasic()[column]),
                    dictionary.variable_name(dictionary.basic()[row]),
                );
                dictionary.bring_into_basis(column, row);
                statistics.pivots[current_rule] += 1;
                trace!("\n{}", dictionary);
            },
        }
    }
}
