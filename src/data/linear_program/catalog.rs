//! # Textbook problems
//!
//! Small linear programs with known outcomes, mostly from chapter 2 of Vanderbei's "Linear
//! Programming: Foundations and Extensions". They are used by the command line front-end and by
//! the tests.
use crate::data::linear_program::LinearProgram;

/// A named problem with its known optimal value, if it has one.
#[derive(Clone, Debug)]
pub struct Entry {
    /// Short identifier.
    pub name: &'static str,
    /// The problem itself.
    pub program: LinearProgram,
    /// What solving the problem should give.
    pub expected: Expected,
}

/// Known outcome of a catalog problem.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Expected {
    /// Finite optimum, given as numerator and denominator.
    Optimal(i64, i64),
    /// No point satisfies the constraints.
    Infeasible,
    /// The objective function can be increased without limit.
    Unbounded,
}

fn program<const N: usize, const M: usize>(
    objective: [i64; N],
    constraints: [[i64; N]; M],
    bounds: [i64; M],
) -> LinearProgram {
    LinearProgram::from_integers(&objective, &constraints, &bounds)
        .expect("catalog problems have consistent dimensions")
}

/// Feasible at the origin, optimal value 13.
pub fn example_1() -> LinearProgram {
    program([5, 4, 3], [[2, 3, 1], [4, 1, 2], [3, 4, 2]], [5, 11, 8])
}

/// Infeasible at the origin, optimal value -3.
pub fn example_2() -> LinearProgram {
    program([-2, -1], [[-1, 1], [-1, -2], [0, 1]], [-1, -2, 1])
}

/// Small problem showing the growth of the pivot scale with integer pivoting.
pub fn integer_pivoting() -> LinearProgram {
    program([5, 2], [[3, 1], [2, 5]], [7, 5])
}

/// Feasible at the origin, four variables and two constraints.
pub fn exercise_2_1() -> LinearProgram {
    program([6, 8, 5, 9], [[2, 1, 1, 3], [1, 3, 1, 2]], [5, 3])
}

/// Infeasible at the origin, optimal value 5.
pub fn exercise_2_5() -> LinearProgram {
    program([1, 3], [[-1, -1], [-1, 1], [1, 2]], [-3, -1, 4])
}

/// Infeasible.
pub fn exercise_2_6() -> LinearProgram {
    program([1, 3], [[-1, -1], [-1, 1], [1, 2]], [-3, -1, 2])
}

/// Infeasible at the origin and unbounded.
pub fn exercise_2_7() -> LinearProgram {
    program([1, 3], [[-1, -1], [-1, 1], [-1, 2]], [-3, -1, 2])
}

/// Feasible at the origin and unbounded.
pub fn exercise_2_7_shifted() -> LinearProgram {
    program([1, 2], [[-1, -1], [-1, 2], [-1, 3]], [3, 2, 5])
}

/// Degenerate at the origin: the largest coefficient rule alone cycles on this problem.
///
/// From Chvátal's "Linear Programming", chapter 3.
pub fn cycling() -> LinearProgram {
    LinearProgram::from_floats(
        &[10_f64, -57_f64, -9_f64, -24_f64],
        &[
            [0.5, -5.5, -2.5, 9_f64],
            [0.5, -1.5, -0.5, 1_f64],
            [1_f64, 0_f64, 0_f64, 0_f64],
        ],
        &[0_f64, 0_f64, 1_f64],
    ).expect("catalog problems have consistent dimensions")
}

/// All problems in the catalog.
pub fn all() -> Vec<Entry> {
    vec![
        Entry { name: "example 1", program: example_1(), expected: Expected::Optimal(13, 1) },
        Entry { name: "example 2", program: example_2(), expected: Expected::Optimal(-3, 1) },
        Entry { name: "integer pivoting", program: integer_pivoting(), expected: Expected::Optimal(152, 13) },
        Entry { name: "exercise 2.1", program: exercise_2_1(), expected: Expected::Optimal(17, 1) },
        Entry { name: "exercise 2.5", program: exercise_2_5(), expected: Expected::Optimal(5, 1) },
        Entry { name: "exercise 2.6", program: exercise_2_6(), expected: Expected::Infeasible },
        Entry { name: "exercise 2.7", program: exercise_2_7(), expected: Expected::Unbounded },
        Entry { name: "exercise 2.7 shifted", program: exercise_2_7_shifted(), expected: Expected::Unbounded },
        Entry { name: "cycling", program: cycling(), expected: Expected::Optimal(1, 1) },
    ]
}
