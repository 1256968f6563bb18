//! # Random linear programs
//!
//! Seeded generation of small integral problems, used to compare representations and pivot rules
//! against each other.
use std::ops::RangeInclusive;

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::data::linear_program::LinearProgram;

/// Ranges from which the dimensions and the coefficients of a problem are drawn uniformly.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Generator {
    /// Number of variables `n`.
    pub variables: RangeInclusive<usize>,
    /// Number of constraints `m`.
    pub constraints: RangeInclusive<usize>,
    /// Objective coefficients.
    pub objective: RangeInclusive<i64>,
    /// Constraint matrix coefficients.
    pub matrix: RangeInclusive<i64>,
    /// Right-hand side values.
    pub bounds: RangeInclusive<i64>,
}

impl Default for Generator {
    /// Problems that are always feasible at the origin.
    fn default() -> Self {
        Self {
            variables: 2..=3,
            constraints: 2..=3,
            objective: 0..=19,
            matrix: -10..=9,
            bounds: 1..=9,
        }
    }
}

impl Generator {
    /// Problems whose right-hand side may be negative, such that a bootstrap is often needed.
    pub fn mixed_signs() -> Self {
        Self {
            variables: 1..=4,
            constraints: 1..=4,
            objective: -5..=10,
            matrix: -6..=6,
            bounds: -5..=8,
        }
    }

    /// Draw a problem.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> LinearProgram {
        let n = rng.gen_range(self.variables.clone());
        let m = rng.gen_range(self.constraints.clone());

        let objective = (0..n).map(|_| rng.gen_range(self.objective.clone())).collect::<Vec<_>>();
        let constraints = (0..m)
            .map(|_| (0..n).map(|_| rng.gen_range(self.matrix.clone())).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let bounds = (0..m).map(|_| rng.gen_range(self.bounds.clone())).collect::<Vec<_>>();

        LinearProgram::from_integers(&objective, &constraints, &bounds)
            .expect("generated dimensions are consistent")
    }

    /// Draw `count` problems from a generator seeded with `seed`.
    ///
    /// The same seed always gives the same problems.
    pub fn generate_seeded(&self, seed: u64, count: usize) -> Vec<LinearProgram> {
        let mut rng = Pcg64::seed_from_u64(seed);
        (0..count).map(|_| self.generate(&mut rng)).collect()
    }
}
