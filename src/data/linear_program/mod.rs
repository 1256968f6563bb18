//! # Representing linear programs
//!
//! Linear programs are given in standard form:
//!
//! ```text
//! maximize    c^T x
//! subject to  A x <= b
//!             x >= 0
//! ```
//!
//! The data is stored as exact rationals, and only converted to the representation of the
//! dictionary when solving.
use std::fmt;

use itertools::Itertools;
use num_traits::Zero;

use crate::data::number_types::Rational;

pub use error::ProblemError;

pub mod error;
pub mod catalog;
pub mod random;

/// A linear program in standard form.
///
/// The dimensions are checked on construction; an existing instance always has an objective
/// function of length `n`, a constraint matrix of size `m x n` and a right-hand side of length
/// `m`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct LinearProgram {
    /// Cost vector `c` with the coefficients of the objective function, to be maximized.
    objective: Vec<Rational>,
    /// Constraint matrix `A`, row major.
    constraints: Vec<Vec<Rational>>,
    /// Right-hand side `b`.
    bounds: Vec<Rational>,
}

impl LinearProgram {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `objective`: Coefficients `c` of the objective function, one per variable.
    /// * `constraints`: Rows of the constraint matrix `A`, one per constraint.
    /// * `bounds`: Right-hand side `b`, one per constraint.
    ///
    /// # Errors
    ///
    /// If there are no variables, or if the dimensions don't match.
    pub fn new(
        objective: Vec<Rational>,
        constraints: Vec<Vec<Rational>>,
        bounds: Vec<Rational>,
    ) -> Result<Self, ProblemError> {
        if objective.is_empty() {
            return Err(ProblemError::NoVariables);
        }
        if constraints.len() != bounds.len() {
            return Err(ProblemError::BoundsLength {
                expected: constraints.len(),
                found: bounds.len(),
            });
        }
        if let Some((row, found)) = constraints.iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, length)| length != objective.len()) {
            return Err(ProblemError::RowLength { row, expected: objective.len(), found });
        }

        Ok(Self { objective, constraints, bounds })
    }

    /// Create a new instance from integral data.
    ///
    /// See `LinearProgram::new`.
    pub fn from_integers<R: AsRef<[i64]>>(
        objective: &[i64],
        constraints: &[R],
        bounds: &[i64],
    ) -> Result<Self, ProblemError> {
        let convert = |values: &[i64]| values.iter()
            .map(|&value| Rational::from_integer(value.into()))
            .collect::<Vec<_>>();

        Self::new(
            convert(objective),
            constraints.iter().map(|row| convert(row.as_ref())).collect(),
            convert(bounds),
        )
    }

    /// Create a new instance from floating point data.
    ///
    /// Every value is converted exactly, so `0.1` becomes the rational closest to it in binary.
    ///
    /// # Errors
    ///
    /// If any of the values is not finite, or if the dimensions don't match.
    pub fn from_floats<R: AsRef<[f64]>>(
        objective: &[f64],
        constraints: &[R],
        bounds: &[f64],
    ) -> Result<Self, ProblemError> {
        let convert = |values: &[f64]| values.iter()
            .map(|&value| Rational::from_float(value).ok_or(ProblemError::NotFinite(value)))
            .collect::<Result<Vec<_>, _>>();

        Self::new(
            convert(objective)?,
            constraints.iter().map(|row| convert(row.as_ref())).collect::<Result<_, _>>()?,
            convert(bounds)?,
        )
    }

    /// Coefficients of the objective function.
    pub fn objective(&self) -> &[Rational] {
        &self.objective
    }

    /// Rows of the constraint matrix.
    pub fn constraints(&self) -> &[Vec<Rational>] {
        &self.constraints
    }

    /// Right-hand side of the constraints.
    pub fn bounds(&self) -> &[Rational] {
        &self.bounds
    }

    /// Number of decision variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.objective.len()
    }

    /// Number of constraints `m`.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Whether `x = 0` satisfies all constraints.
    pub fn origin_is_feasible(&self) -> bool {
        self.bounds.iter().all(|bound| bound >= &Rational::zero())
    }

    /// Whether a point satisfies all constraints, including nonnegativity.
    pub fn is_feasible(&self, x: &[Rational]) -> bool {
        debug_assert_eq!(x.len(), self.nr_variables());

        x.iter().all(|value| value >= &Rational::zero()) &&
            self.constraints.iter().zip(&self.bounds).all(|(row, bound)| {
                let lhs = row.iter().zip(x).map(|(a, value)| a * value).sum::<Rational>();
                &lhs <= bound
            })
    }

    /// Objective function value of a point.
    pub fn objective_value(&self, x: &[Rational]) -> Rational {
        debug_assert_eq!(x.len(), self.nr_variables());

        self.objective.iter().zip(x).map(|(c, value)| c * value).sum()
    }
}

impl fmt::Display for LinearProgram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let term = |(j, coefficient): (usize, &Rational)| format!("{}*x{}", coefficient, j + 1);

        writeln!(f, "maximize   {}", self.objective.iter().enumerate().map(term).join(" + "))?;
        for (i, (row, bound)) in self.constraints.iter().zip(&self.bounds).enumerate() {
            let prefix = if i == 0 { "subject to" } else { "          " };
            writeln!(f, "{} {} <= {}", prefix, row.iter().enumerate().map(term).join(" + "), bound)?;
        }
        write!(f, "           x >= 0")
    }
}
