//! # Phase one with an auxiliary variable
//!
//! The classical alternative to the dual bootstrap. Every constraint is relaxed by a single
//! auxiliary variable `x0`, and `-x0` is maximized. The problem is feasible if and only if that
//! maximum is zero, in which case the final dictionary, without `x0`, is a feasible dictionary of
//! the original problem.
use log::{debug, trace};

use crate::algorithm::Status;
use crate::algorithm::two_phase::dictionary::Dictionary;
use crate::algorithm::two_phase::phase_two::primal;
use crate::algorithm::two_phase::Statistics;
use crate::algorithm::two_phase::strategy::Rule;
use crate::data::linear_program::LinearProgram;
use crate::data::number_types::ConversionError;
use crate::data::number_types::traits::{is_negligible, Number};

/// Computing a feasible solution: the first phase of the two phase method.
///
/// # Arguments
///
/// * `program`: Problem of which the origin is not (strictly) feasible.
/// * `costs`: Objective coefficients of the decision variables, in the representation.
/// * `rule`: Pivot rule used to maximize `-x0`.
/// * `epsilon`: Tolerance for sign tests.
/// * `statistics`: Pivots are counted here.
///
/// # Return value
///
/// A feasible dictionary of the original problem with the original objective function, or `None`
/// if the problem is infeasible.
///
/// # Errors
///
/// If the problem can't be represented.
pub(crate) fn auxiliary<F: Number>(
    program: &LinearProgram,
    costs: &[F],
    rule: Rule,
    epsilon: &F,
    statistics: &mut Statistics,
) -> Result<Option<Dictionary<F>>, ConversionError> {
    let mut dictionary = Dictionary::<F>::auxiliary(program)?;
    let x0 = dictionary.nr_decision_variables() + 1;
    let x0_column = dictionary.nr_columns() - 1;
    debug_assert_eq!(dictionary.nonbasic()[x0_column], x0);

    // Most negative constant, ties broken by smallest basic variable index
    let mut leaving_row = 0;
    for row in 1..dictionary.nr_rows() {
        let (candidate, current) = (&dictionary.tableau()[row + 1][0], &dictionary.tableau()[leaving_row + 1][0]);
        if candidate < current || (candidate == current && dictionary.basic()[row] < dictionary.basic()[leaving_row]) {
            leaving_row = row;
        }
    }
    trace!("x0 entering, {} leaving", dictionary.variable_name(dictionary.basic()[leaving_row]));
    dictionary.bring_into_basis(x0_column, leaving_row);

    let status = primal(&mut dictionary, rule, epsilon, statistics);
    debug_assert_eq!(status, Status::Optimal, "-x0 is bounded from above by zero");

    if dictionary.tableau()[0][0] < -dictionary.threshold(epsilon) {
        debug!("auxiliary problem has optimal value {}, problem is infeasible", dictionary.objective_value());
        return Ok(None);
    }

    drive_out_auxiliary(&mut dictionary, epsilon);
    dictionary.remove_auxiliary();
    dictionary.set_objective(costs);

    Ok(Some(dictionary))
}

/// Make sure the auxiliary variable `x0` is nonbasic, after the auxiliary problem was solved with
/// optimal value zero.
///
/// If `x0` is basic, it is basic at value zero, and any coefficient in its row that is not
/// negligible can replace it. When there is none, the row is redundant and removed.
fn drive_out_auxiliary<F: Number>(dictionary: &mut Dictionary<F>, epsilon: &F) {
    let x0 = dictionary.nr_decision_variables() + 1;
    if let Some(row) = dictionary.basic_row_of(x0) {
        let threshold = dictionary.threshold(epsilon);
        let column = (0..dictionary.nr_columns())
            .filter(|&column| !is_negligible(&dictionary.tableau()[row + 1][column + 1], &threshold))
            .min_by_key(|&column| dictionary.nonbasic()[column]);
        match column {
            Some(column) => {
                trace!("x0 leaving at value zero");
                dictionary.bring_into_basis(column, row);
            },
            None => {
                trace!("removing redundant row of x0");
                dictionary.remove_row(row);
            },
        }
    }
}
