//! # Brute force reference
//!
//! Solves small problems by enumerating all basic solutions: every choice of `n` tight constraints
//! out of the `m` constraints and the `n` nonnegativity constraints. Only feasible for a handful of
//! variables and constraints, but independent of the Simplex method.
use itertools::Itertools;
use num_traits::{One, Zero};

use dictlp::data::linear_program::LinearProgram;
use dictlp::data::number_types::{Integer, Rational};

/// Outcome of the reference method.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum Outcome {
    Optimal(Rational),
    Infeasible,
    Unbounded,
}

/// Bound on the variables that is larger than any vertex coordinate of the small test problems.
fn large_bound() -> Rational {
    Rational::from_integer(Integer::from(1_000_000_000_i64))
}

/// Solve by enumerating vertices.
///
/// A problem is unbounded exactly when bounding every variable by a large value gives a vertex
/// that is better than every vertex of the original problem.
pub fn solve(program: &LinearProgram) -> Outcome {
    let n = program.nr_variables();

    let mut rows = program.constraints().iter().cloned()
        .zip(program.bounds().iter().cloned())
        .collect::<Vec<_>>();
    rows.extend((0..n).map(|j| (unit(n, j, -Rational::one()), Rational::zero())));

    let original = best_vertex(program.objective(), &rows);

    let mut boxed = rows.clone();
    boxed.extend((0..n).map(|j| (unit(n, j, Rational::one()), large_bound())));
    let bounded = best_vertex(program.objective(), &boxed);

    match (original, bounded) {
        (None, _) => Outcome::Infeasible,
        (Some(value), Some(bounded)) if bounded > value => Outcome::Unbounded,
        (Some(value), _) => Outcome::Optimal(value),
    }
}

fn unit(n: usize, j: usize, value: Rational) -> Vec<Rational> {
    let mut row = vec![Rational::zero(); n];
    row[j] = value;
    row
}

/// Largest objective value over all vertices of `{x | a x <= b for all rows (a, b)}`.
fn best_vertex(objective: &[Rational], rows: &[(Vec<Rational>, Rational)]) -> Option<Rational> {
    let n = objective.len();

    (0..rows.len()).combinations(n)
        .filter_map(|tight| {
            let system = tight.iter().map(|&i| rows[i].clone()).collect::<Vec<_>>();
            solve_system(system)
        })
        .filter(|x| rows.iter().all(|(a, b)| &dot(a, x) <= b))
        .map(|x| dot(objective, &x))
        .max()
}

fn dot(left: &[Rational], right: &[Rational]) -> Rational {
    left.iter().zip(right).map(|(a, b)| a * b).sum()
}

/// Gaussian elimination on a square system given as rows `(a, b)` of `a x = b`.
///
/// Returns `None` if the system is singular.
fn solve_system(mut system: Vec<(Vec<Rational>, Rational)>) -> Option<Vec<Rational>> {
    let n = system.len();

    for column in 0..n {
        let pivot_row = (column..n).find(|&i| !system[i].0[column].is_zero())?;
        system.swap(column, pivot_row);

        let (pivot_coefficients, pivot_value) = system[column].clone();
        for i in (0..n).filter(|&i| i != column) {
            let factor = &system[i].0[column] / &pivot_coefficients[column];
            if factor.is_zero() {
                continue;
            }
            for (value, pivot) in system[i].0.iter_mut().zip(&pivot_coefficients) {
                *value -= &factor * pivot;
            }
            system[i].1 -= &factor * &pivot_value;
        }
    }

    Some(system.iter().enumerate().map(|(i, (a, b))| b / &a[i]).collect())
}

#[test]
fn reference_on_catalog() {
    use dictlp::data::linear_program::catalog::{self, Expected};

    for entry in catalog::all() {
        let expected = match entry.expected {
            Expected::Optimal(numerator, denominator) => Outcome::Optimal(Rational::new(numerator.into(), denominator.into())),
            Expected::Infeasible => Outcome::Infeasible,
            Expected::Unbounded => Outcome::Unbounded,
        };
        assert_eq!(solve(&entry.program), expected, "{}", entry.name);
    }
}
