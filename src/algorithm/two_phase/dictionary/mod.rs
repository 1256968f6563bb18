//! # Dictionaries
//!
//! The data structure on which the Simplex method operates, as described in chapter 2 of
//! Vanderbei's "Linear Programming: Foundations and Extensions". A dictionary expresses the basic
//! variables and the objective in terms of the nonbasic variables:
//!
//! ```text
//! z      = tableau[0][0] + sum_j tableau[0][j + 1] * nonbasic[j]
//! x_B[i] = tableau[i + 1][0] + sum_j tableau[i + 1][j + 1] * nonbasic[j]
//! ```
//!
//! Variables are indexed as follows: `0` is the objective `z`, `1..=n` are the decision variables,
//! `n + 1` is the auxiliary variable `x0` if the dictionary is an auxiliary dictionary, and the
//! remaining indices are the slack variables, one per constraint.
use std::mem;

use crate::data::linear_program::LinearProgram;
use crate::data::number_types::{ConversionError, Representation};
use crate::data::number_types::traits::{Field, is_negligible, Number};

mod display;

/// A dense Simplex dictionary.
///
/// It owns the tableau, and is modified in place by pivoting.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Dictionary<F> {
    /// Matrix of size (m + 1) x (nr nonbasic + 1).
    ///
    /// Row zero is the objective row, column zero holds the constants.
    tableau: Vec<Vec<F>>,
    /// Variable index of the basic variable of each constraint row.
    basic: Vec<usize>,
    /// Variable index of the nonbasic variable of each column.
    nonbasic: Vec<usize>,
    /// Common denominator of all tableau entries.
    ///
    /// Stays one unless the dictionary is pivoted with `integer_pivot`. Always positive.
    pivot_scale: F,
    /// Number of decision variables `n`.
    nr_decision_variables: usize,
    /// Whether variable `n + 1` is the auxiliary variable `x0`.
    has_auxiliary: bool,
}

impl<F: Number> Dictionary<F> {
    /// Create the initial dictionary of a linear program.
    ///
    /// The slack variables are basic, the decision variables nonbasic.
    ///
    /// # Errors
    ///
    /// If any of the values can't be represented.
    pub fn new(program: &LinearProgram) -> Result<Self, ConversionError> {
        Self::build(program, false)
    }

    /// Create the auxiliary dictionary used in the classical first phase.
    ///
    /// The objective is to maximize `-x0`, and every constraint is relaxed by `x0`.
    ///
    /// # Errors
    ///
    /// If any of the values can't be represented.
    pub fn auxiliary(program: &LinearProgram) -> Result<Self, ConversionError> {
        Self::build(program, true)
    }

    fn build(program: &LinearProgram, has_auxiliary: bool) -> Result<Self, ConversionError> {
        let n = program.nr_variables();
        let nr_columns = n + usize::from(has_auxiliary);

        let mut objective_row = Vec::with_capacity(nr_columns + 1);
        objective_row.push(F::zero());
        if has_auxiliary {
            objective_row.extend((0..n).map(|_| F::zero()));
            objective_row.push(-F::one());
        } else {
            for cost in program.objective() {
                objective_row.push(F::from_rational(cost)?);
            }
        }

        let mut tableau = Vec::with_capacity(program.nr_constraints() + 1);
        tableau.push(objective_row);
        for (constraint, bound) in program.constraints().iter().zip(program.bounds()) {
            let mut row = Vec::with_capacity(nr_columns + 1);
            row.push(F::from_rational(bound)?);
            for coefficient in constraint {
                row.push(-F::from_rational(coefficient)?);
            }
            if has_auxiliary {
                row.push(F::one());
            }
            tableau.push(row);
        }

        Ok(Self {
            tableau,
            basic: (nr_columns + 1..=nr_columns + program.nr_constraints()).collect(),
            nonbasic: (1..=nr_columns).collect(),
            pivot_scale: F::one(),
            nr_decision_variables: n,
            has_auxiliary,
        })
    }

    /// Pivot such that the entries stay in the representation.
    ///
    /// Integers are pivoted with `integer_pivot`, all other representations with the exact pivot.
    pub fn bring_into_basis(&mut self, entering_column: usize, leaving_row: usize) {
        match F::REPRESENTATION {
            Representation::Integer => self.integer_pivot(entering_column, leaving_row),
            Representation::Rational | Representation::Float => {
                self.exact_pivot(entering_column, leaving_row)
            },
        }
    }

    /// Gauss-Jordan pivot dividing by the pivot coefficient.
    fn exact_pivot(&mut self, entering_column: usize, leaving_row: usize) {
        let (row, column) = self.pivot_position(entering_column, leaving_row);

        let mut pivot_row = mem::take(&mut self.tableau[row]);
        let divisor = -mem::replace(&mut pivot_row[column], -F::one());
        for value in &mut pivot_row {
            *value = mem::replace(value, F::zero()).exact_quotient(&divisor);
        }

        for (i, values) in self.tableau.iter_mut().enumerate() {
            if i == row {
                continue;
            }

            let factor = mem::replace(&mut values[column], F::zero());
            if factor.is_zero() {
                continue;
            }
            for (value, pivot_value) in values.iter_mut().zip(&pivot_row) {
                *value = mem::replace(value, F::zero()) + factor.clone() * pivot_value;
            }
        }

        self.tableau[row] = pivot_row;
        self.swap_indices(entering_column, leaving_row);
    }

    /// Pivot that keeps every entry integral.
    ///
    /// With `P` the pivot entry and `s` the previous pivot scale, every non-pivot entry becomes
    /// `(P * a_ij - a_ik * a_rj) / s` (up to the sign of `P`), a division that is always exact. The
    /// new pivot scale is `|P|`. Dividing all entries by the pivot scale gives the same dictionary
    /// as `pivot` does.
    ///
    /// # Arguments
    ///
    /// * `entering_column`: Column of the nonbasic variable that becomes basic.
    /// * `leaving_row`: Constraint row (zero based, excluding the objective row) of the basic
    /// variable that becomes nonbasic.
    pub fn integer_pivot(&mut self, entering_column: usize, leaving_row: usize) {
        let (row, column) = self.pivot_position(entering_column, leaving_row);

        let pivot = self.tableau[row][column].clone();
        let negative = pivot < F::zero();
        let new_scale = if negative { -pivot.clone() } else { pivot.clone() };
        let previous_scale = mem::replace(&mut self.pivot_scale, new_scale);
        let oriented = |value: F| if negative { -value } else { value };

        let mut pivot_row = mem::take(&mut self.tableau[row]);
        for (i, values) in self.tableau.iter_mut().enumerate() {
            if i == row {
                continue;
            }

            let factor = values[column].clone();
            for (j, value) in values.iter_mut().enumerate() {
                let updated = if j == column {
                    factor.clone()
                } else {
                    (pivot.clone() * &*value - factor.clone() * &pivot_row[j])
                        .exact_quotient(&previous_scale)
                };
                *value = oriented(updated);
            }
        }

        for (j, value) in pivot_row.iter_mut().enumerate() {
            *value = if j == column {
                oriented(previous_scale.clone())
            } else {
                // The new scale absorbs the pivot, only the orientation changes
                oriented(-mem::replace(value, F::zero()))
            };
        }

        self.tableau[row] = pivot_row;
        self.swap_indices(entering_column, leaving_row);
    }

    /// Validate indices and translate them to tableau coordinates.
    ///
    /// # Panics
    ///
    /// If the indices are out of range or the pivot coefficient is zero.
    fn pivot_position(&self, entering_column: usize, leaving_row: usize) -> (usize, usize) {
        assert!(entering_column < self.nr_columns(), "no column {} to pivot on", entering_column);
        assert!(leaving_row < self.nr_rows(), "no row {} to pivot on", leaving_row);

        let (row, column) = (leaving_row + 1, entering_column + 1);
        assert!(
            !self.tableau[row][column].is_zero(),
            "pivot coefficient in row {} and column {} is zero", leaving_row, entering_column,
        );

        (row, column)
    }

    fn swap_indices(&mut self, entering_column: usize, leaving_row: usize) {
        mem::swap(&mut self.nonbasic[entering_column], &mut self.basic[leaving_row]);
    }

    /// Value of the objective function in the current basic solution.
    pub fn objective_value(&self) -> F::Value {
        self.tableau[0][0].scaled_value(&self.pivot_scale)
    }

    /// Values of the decision variables `x1..=xn` in the current basic solution.
    ///
    /// Nonbasic variables have value zero.
    pub fn basic_solution(&self) -> Vec<F::Value> {
        let n = self.nr_decision_variables;
        let mut solution = vec![F::zero().scaled_value(&self.pivot_scale); n];
        for (row, &variable) in self.basic.iter().enumerate() {
            if (1..=n).contains(&variable) {
                solution[variable - 1] = self.tableau[row + 1][0].scaled_value(&self.pivot_scale);
            }
        }

        solution
    }

    /// Whether any basic variable has a value within `epsilon` of zero.
    ///
    /// Pivots in a degenerate dictionary may not increase the objective, which is what makes
    /// cycling possible.
    pub fn is_degenerate(&self, epsilon: &F) -> bool {
        let threshold = self.threshold(epsilon);
        self.tableau[1..].iter().any(|row| is_negligible(&row[0], &threshold))
    }

    /// Whether every basic variable has a value larger than `epsilon`.
    pub fn is_strictly_feasible(&self, epsilon: &F) -> bool {
        let threshold = self.threshold(epsilon);
        self.tableau[1..].iter().all(|row| row[0] > threshold)
    }

    /// Tolerance in the scale of the tableau entries.
    pub(crate) fn threshold(&self, epsilon: &F) -> F {
        epsilon.clone() * &self.pivot_scale
    }

    /// Rewrite the objective row for the given decision variable costs.
    ///
    /// Basic decision variables are substituted by their rows; nonbasic ones keep their cost as a
    /// coefficient.
    pub(crate) fn set_objective(&mut self, costs: &[F]) {
        debug_assert_eq!(costs.len(), self.nr_decision_variables);

        let mut objective_row = vec![F::zero(); self.nr_columns() + 1];
        for (j, cost) in costs.iter().enumerate().filter(|(_, cost)| !cost.is_zero()) {
            let variable = j + 1;
            if let Some(row) = self.basic_row_of(variable) {
                for (target, value) in objective_row.iter_mut().zip(&self.tableau[row + 1]) {
                    *target = mem::replace(target, F::zero()) + cost.clone() * value;
                }
            } else if let Some(column) = self.nonbasic_column_of(variable) {
                let target = &mut objective_row[column + 1];
                *target = mem::replace(target, F::zero()) + cost.clone() * &self.pivot_scale;
            }
        }

        self.tableau[0] = objective_row;
    }

    /// Overwrite the objective row with a single coefficient for every nonbasic variable.
    pub(crate) fn set_uniform_objective(&mut self, coefficient: F) {
        let scaled = coefficient * &self.pivot_scale;
        let mut objective_row = vec![scaled; self.nr_columns() + 1];
        objective_row[0] = F::zero();

        self.tableau[0] = objective_row;
    }

    /// Negate and transpose the tableau, and exchange the roles of basic and nonbasic variables.
    ///
    /// Applied to a primal dictionary, this gives the dual dictionary, and vice versa.
    pub(crate) fn negated_transpose(self) -> Self {
        let nr_rows = self.tableau.len();
        let nr_columns = self.tableau[0].len();
        let tableau = (0..nr_columns)
            .map(|j| (0..nr_rows).map(|i| -self.tableau[i][j].clone()).collect())
            .collect();

        Self {
            tableau,
            basic: self.nonbasic,
            nonbasic: self.basic,
            ..self
        }
    }

    /// Remove the auxiliary variable `x0`, and renumber the slacks such that the dictionary reads
    /// like one created with `Dictionary::new`.
    ///
    /// The auxiliary variable should not be basic; its column is dropped if it is nonbasic.
    pub(crate) fn remove_auxiliary(&mut self) {
        debug_assert!(self.has_auxiliary);

        let auxiliary = self.nr_decision_variables + 1;
        debug_assert!(self.basic_row_of(auxiliary).is_none());
        if let Some(column) = self.nonbasic_column_of(auxiliary) {
            for row in &mut self.tableau {
                row.remove(column + 1);
            }
            self.nonbasic.remove(column);
        }

        for index in self.basic.iter_mut().chain(self.nonbasic.iter_mut()) {
            if *index > auxiliary {
                *index -= 1;
            }
        }
        self.has_auxiliary = false;
    }

    /// Remove a constraint row, for a basic variable that is identically zero.
    pub(crate) fn remove_row(&mut self, row: usize) {
        self.tableau.remove(row + 1);
        self.basic.remove(row);
    }

    /// Row in which a variable is basic, if it is.
    pub fn basic_row_of(&self, variable: usize) -> Option<usize> {
        self.basic.iter().position(|&index| index == variable)
    }

    /// Column in which a variable is nonbasic, if it is.
    pub fn nonbasic_column_of(&self, variable: usize) -> Option<usize> {
        self.nonbasic.iter().position(|&index| index == variable)
    }

    /// Name of a variable, as it is printed.
    ///
    /// Slacks are named `x{n + 1}` up to `x{n + m}` also when the auxiliary variable is present;
    /// that one is called `x0`.
    pub fn variable_name(&self, index: usize) -> String {
        let n = self.nr_decision_variables;
        match index {
            0 => "z".to_string(),
            i if i <= n => format!("x{}", i),
            i if self.has_auxiliary && i == n + 1 => "x0".to_string(),
            i if self.has_auxiliary => format!("x{}", i - 1),
            i => format!("x{}", i),
        }
    }

    /// True value of an entry, taking the pivot scale into account.
    pub fn value(&self, row: usize, column: usize) -> F::Value {
        self.tableau[row][column].scaled_value(&self.pivot_scale)
    }

    /// All entries, including the objective row and the constant column.
    pub fn tableau(&self) -> &[Vec<F>] {
        &self.tableau
    }

    #[cfg(test)]
    pub(crate) fn tableau_mut(&mut self) -> &mut [Vec<F>] {
        &mut self.tableau
    }

    /// Variable indices of the basic variables, by row.
    pub fn basic(&self) -> &[usize] {
        &self.basic
    }

    /// Variable indices of the nonbasic variables, by column.
    pub fn nonbasic(&self) -> &[usize] {
        &self.nonbasic
    }

    /// Common denominator of all tableau entries.
    pub fn pivot_scale(&self) -> &F {
        &self.pivot_scale
    }

    /// Number of constraint rows `m`, excluding the objective row.
    pub fn nr_rows(&self) -> usize {
        self.basic.len()
    }

    /// Number of nonbasic columns, excluding the constant column.
    pub fn nr_columns(&self) -> usize {
        self.nonbasic.len()
    }

    /// Number of decision variables `n`.
    pub fn nr_decision_variables(&self) -> usize {
        self.nr_decision_variables
    }

    /// Whether this is an auxiliary dictionary containing `x0`.
    pub fn has_auxiliary(&self) -> bool {
        self.has_auxiliary
    }
}

impl<F: Field> Dictionary<F> {
    /// Pivot with `nonbasic[entering_column]` entering and `basic[leaving_row]` leaving.
    ///
    /// The pivot entry becomes `-1`, the pivot row is divided by minus the pivot coefficient and
    /// every other row gets the new pivot row added, times its entry in the entering column.
    ///
    /// # Panics
    ///
    /// If the indices are out of range or the pivot coefficient is zero.
    pub fn pivot(&mut self, entering_column: usize, leaving_row: usize) {
        self.exact_pivot(entering_column, leaving_row)
    }
}
