//! # Dual transforms
//!
//! If the origin is not feasible, the dual of the problem with objective function `-1` for every
//! variable is feasible: its constants are all one. Solving that dual with the ordinary pivot loop
//! gives a dual optimal dictionary, which, transformed back, is a feasible primal dictionary. If the
//! dual is unbounded instead, the primal problem is infeasible.
use crate::algorithm::two_phase::dictionary::Dictionary;
use crate::data::number_types::traits::Number;

/// Replace the objective by `-1` for every nonbasic variable and take the dual.
///
/// The constants of the resulting dictionary are all positive.
pub(crate) fn to_dual<F: Number>(mut dictionary: Dictionary<F>) -> Dictionary<F> {
    dictionary.set_uniform_objective(-F::one());
    dictionary.negated_transpose()
}

/// Transform a dual dictionary back, and restore the original objective function.
///
/// # Arguments
///
/// * `dictionary`: Dual dictionary, as created by `to_dual` and possibly pivoted.
/// * `costs`: Objective coefficients of the decision variables.
pub(crate) fn from_dual<F: Number>(dictionary: Dictionary<F>, costs: &[F]) -> Dictionary<F> {
    let mut primal = dictionary.negated_transpose();
    primal.set_objective(costs);
    primal
}
