//! # Pivot rules
//!
//! Strategies for moving from basis to basis. A rule decides which nonbasic variable enters the
//! basis; the leaving variable follows from the ratio test, which is shared by all rules.
//!
//! Signs are decided with a tolerance: a coefficient counts as improving only if it is larger than
//! `epsilon`, and a row only binds if its entry in the entering column is smaller than `-epsilon`.
//! The tolerance is relative to the pivot scale of the dictionary.
//!
//! No division happens during selection. Ratios are compared by cross-multiplication, which is
//! valid because their denominators are positive.
use crate::algorithm::two_phase::dictionary::Dictionary;
use crate::data::number_types::traits::Number;

/// The outcome of a pivot rule.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Selection {
    /// No nonbasic variable can improve the objective.
    Optimal,
    /// The variable of this column can increase without limit while improving the objective.
    Unbounded {
        /// Column of the unbounded direction.
        column: usize,
    },
    /// Pivot with the variable of this column entering and the one of this row leaving.
    Pivot {
        /// Column of the entering variable.
        column: usize,
        /// Constraint row of the leaving variable.
        row: usize,
    },
}

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, except for `LargestIncrease`, which needs the ratio test for every column.
pub trait PivotRule<F: Number> {
    /// Select the entering and leaving variables.
    ///
    /// # Arguments
    ///
    /// * `dictionary`: Feasible dictionary to pivot.
    /// * `epsilon`: Tolerance for sign tests, zero for exact arithmetic.
    ///
    /// # Return value
    ///
    /// `Optimal` if no objective coefficient exceeds `epsilon`, `Unbounded` if the selected column
    /// has no binding row, the pivot otherwise.
    fn select_pivot(&self, dictionary: &Dictionary<F>, epsilon: &F) -> Selection;
}

/// Smallest index rule.
///
/// The entering variable is the improving one with the smallest variable index. Together with the
/// ratio test breaking ties by smallest index, this rule never cycles.
pub struct Bland;
impl<F: Number> PivotRule<F> for Bland {
    fn select_pivot(&self, dictionary: &Dictionary<F>, epsilon: &F) -> Selection {
        let threshold = dictionary.threshold(epsilon);

        improving_columns(dictionary, &threshold)
            .min_by_key(|&(column, _)| dictionary.nonbasic()[column])
            .map_or(Selection::Optimal, |(column, _)| with_ratio_test(dictionary, column, &threshold))
    }
}

/// Dantzig's rule: pivot on the column with the largest objective coefficient.
///
/// Ties are broken by smallest variable index. May cycle on degenerate dictionaries.
pub struct LargestCoefficient;
impl<F: Number> PivotRule<F> for LargestCoefficient {
    fn select_pivot(&self, dictionary: &Dictionary<F>, epsilon: &F) -> Selection {
        let threshold = dictionary.threshold(epsilon);

        largest_coefficient(dictionary, improving_columns(dictionary, &threshold))
            .map_or(Selection::Optimal, |column| with_ratio_test(dictionary, column, &threshold))
    }
}

/// Pivot on the column giving the largest increase of the objective value.
///
/// The increase of a column is its coefficient times the minimum ratio of the ratio test. Ties are
/// broken by the larger coefficient, then by smallest variable index. If any improving column has
/// no binding row at all, the objective increases without limit along it; among such columns the
/// one with the largest coefficient is reported.
pub struct LargestIncrease;
impl<F: Number> PivotRule<F> for LargestIncrease {
    fn select_pivot(&self, dictionary: &Dictionary<F>, epsilon: &F) -> Selection {
        let threshold = dictionary.threshold(epsilon);
        let tableau = dictionary.tableau();

        let mut unbounded = Vec::new();
        // Column, leaving row and increase as numerator and positive denominator
        let mut best: Option<(usize, usize, F, F)> = None;
        for (column, coefficient) in improving_columns(dictionary, &threshold) {
            let row = match select_leaving_row(dictionary, column, &threshold) {
                Some(row) => row,
                None => {
                    unbounded.push((column, coefficient));
                    continue;
                },
            };

            let numerator = coefficient.clone() * &tableau[row + 1][0];
            let denominator = -tableau[row + 1][column + 1].clone();
            let is_better = match &best {
                None => true,
                Some((best_column, _, best_numerator, best_denominator)) => {
                    let candidate = numerator.clone() * best_denominator;
                    let current = best_numerator.clone() * &denominator;
                    if candidate != current {
                        candidate > current
                    } else {
                        let best_coefficient = &tableau[0][best_column + 1];
                        if coefficient != best_coefficient {
                            coefficient > best_coefficient
                        } else {
                            dictionary.nonbasic()[column] < dictionary.nonbasic()[*best_column]
                        }
                    }
                },
            };

            if is_better {
                best = Some((column, row, numerator, denominator));
            }
        }

        if let Some(column) = largest_coefficient(dictionary, unbounded.into_iter()) {
            Selection::Unbounded { column }
        } else {
            best.map_or(Selection::Optimal, |(column, row, _, _)| Selection::Pivot { column, row })
        }
    }
}

/// Columns with an objective coefficient larger than the threshold, with that coefficient.
fn improving_columns<'a, F: Number>(
    dictionary: &'a Dictionary<F>,
    threshold: &'a F,
) -> impl Iterator<Item=(usize, &'a F)> + 'a {
    dictionary.tableau()[0][1..].iter()
        .enumerate()
        .filter(move |&(_, coefficient)| coefficient > threshold)
}

/// Column with the largest coefficient, ties broken by smallest variable index.
fn largest_coefficient<'a, F: Number + 'a>(
    dictionary: &Dictionary<F>,
    columns: impl Iterator<Item=(usize, &'a F)>,
) -> Option<usize> {
    let mut largest: Option<(usize, &F)> = None;
    for (column, coefficient) in columns {
        let is_better = match largest {
            None => true,
            Some((existing_column, existing_coefficient)) => {
                coefficient > existing_coefficient || (
                    coefficient == existing_coefficient &&
                        dictionary.nonbasic()[column] < dictionary.nonbasic()[existing_column]
                )
            },
        };
        if is_better {
            largest = Some((column, coefficient));
        }
    }

    largest.map(|(column, _)| column)
}

fn with_ratio_test<F: Number>(dictionary: &Dictionary<F>, column: usize, threshold: &F) -> Selection {
    match select_leaving_row(dictionary, column, threshold) {
        Some(row) => Selection::Pivot { column, row },
        None => Selection::Unbounded { column },
    }
}

/// Ratio test: the constraint row that limits the increase of the entering variable first.
///
/// Only rows with an entry smaller than `-threshold` in the entering column bind. Among those, the
/// one with the smallest ratio `b_i / -a_i` is selected, ties broken by smallest basic variable
/// index.
///
/// # Return value
///
/// `None` if no row binds, meaning that the variable can increase without limit.
pub fn select_leaving_row<F: Number>(
    dictionary: &Dictionary<F>,
    column: usize,
    threshold: &F,
) -> Option<usize> {
    let tableau = dictionary.tableau();
    let lower = -threshold.clone();

    let mut leaving: Option<(usize, &F, F)> = None;
    for (row, values) in tableau[1..].iter().enumerate() {
        let entry = &values[column + 1];
        if entry >= &lower {
            continue;
        }

        let constant = &values[0];
        let denominator = -entry.clone();
        let is_better = match &leaving {
            None => true,
            Some((existing_row, existing_constant, existing_denominator)) => {
                let candidate = constant.clone() * existing_denominator;
                let current = (*existing_constant).clone() * &denominator;
                candidate < current || (
                    candidate == current &&
                        dictionary.basic()[row] < dictionary.basic()[*existing_row]
                )
            },
        };
        if is_better {
            leaving = Some((row, constant, denominator));
        }
    }

    leaving.map(|(row, _, _)| row)
}
