use approx::assert_relative_eq;

use crate::algorithm::{OptimizationResult, Status};
use crate::algorithm::two_phase::{Bootstrap, Options, solve, solve_with_statistics};
use crate::algorithm::two_phase::strategy::Rule;
use crate::data::linear_program::{catalog, LinearProgram};
use crate::data::number_types::{ConversionError, Float, Integer, Rational, Representation};
use crate::RB;

fn all_options() -> Vec<Options> {
    Rule::ALL.iter()
        .flat_map(|&rule| Bootstrap::ALL.iter().map(move |&bootstrap| {
            Options::default().with_rule(rule).with_bootstrap(bootstrap)
        }))
        .collect()
}

#[test]
fn feasible_origin() {
    for options in all_options() {
        let (result, statistics) = solve_with_statistics::<Rational>(&catalog::example_1(), &options).unwrap();
        match result {
            OptimizationResult::Optimal(dictionary) => {
                assert_eq!(dictionary.objective_value(), RB!(13));
                assert_eq!(dictionary.basic_solution(), vec![RB!(2), RB!(0), RB!(1)]);
            },
            other => panic!("expected an optimum, got {:?}", other.status()),
        }
        assert_eq!(statistics.bootstrap, None);
        assert_eq!(statistics.nr_pivots(), 2);
    }
}

#[test]
fn bootstrap() {
    for options in all_options() {
        let (result, statistics) = solve_with_statistics::<Rational>(&catalog::example_2(), &options).unwrap();
        let dictionary = result.dictionary().unwrap();
        assert_eq!(dictionary.objective_value(), RB!(-3));
        assert_eq!(dictionary.basic_solution(), vec![RB!(4, 3), RB!(1, 3)]);
        assert_eq!(statistics.bootstrap, Some(options.bootstrap));

        let result = solve::<Integer>(&catalog::exercise_2_5(), &options).unwrap();
        assert_eq!(result.dictionary().map(|d| d.objective_value()), Some(RB!(5)));
    }
}

#[test]
fn infeasible() {
    for options in all_options() {
        assert_eq!(solve::<Rational>(&catalog::exercise_2_6(), &options), Ok(OptimizationResult::Infeasible));
        assert_eq!(solve::<Integer>(&catalog::exercise_2_6(), &options), Ok(OptimizationResult::Infeasible));
    }
}

#[test]
fn unbounded() {
    for options in all_options() {
        assert_eq!(solve::<Rational>(&catalog::exercise_2_7(), &options), Ok(OptimizationResult::Unbounded));
        assert_eq!(solve::<Rational>(&catalog::exercise_2_7_shifted(), &options), Ok(OptimizationResult::Unbounded));
    }
}

#[test]
fn integer_pivoting() {
    let result = solve::<Integer>(&catalog::integer_pivoting(), &Options::default()).unwrap();
    let dictionary = result.dictionary().unwrap();
    assert_eq!(dictionary.pivot_scale(), &Integer::from(13));
    assert_eq!(dictionary.objective_value(), RB!(152, 13));
    assert_eq!(dictionary.basic_solution(), vec![RB!(30, 13), RB!(1, 13)]);
}

#[test]
fn float() {
    let options = Options::for_representation(Representation::Float).with_rule(Rule::LargestIncrease);
    let result = solve::<Float>(&catalog::example_2(), &options).unwrap();
    assert_eq!(result.status(), Status::Optimal);
    let dictionary = result.dictionary().unwrap();
    assert_relative_eq!(dictionary.objective_value(), -3_f64, max_relative = 1e-9);

    let solution = dictionary.basic_solution();
    assert_relative_eq!(solution[0], 4_f64 / 3_f64, max_relative = 1e-9);
    assert_relative_eq!(solution[1], 1_f64 / 3_f64, max_relative = 1e-9);
}

#[test]
fn float_default_tolerance() {
    // The first constant is positive, but below the float tolerance
    let program = LinearProgram::from_floats(&[1_f64, 1_f64], &[[1_f64, 1_f64], [1_f64, 0_f64]], &[1e-9, 1_f64])
        .unwrap();

    let (result, statistics) = solve_with_statistics::<Float>(&program, &Options::default()).unwrap();
    assert_eq!(statistics.bootstrap, Some(Bootstrap::Dual));
    assert_eq!(result.status(), Status::Optimal);
    assert_relative_eq!(result.dictionary().unwrap().objective_value(), 1e-9, max_relative = 1e-9);

    let explicit = Options::for_representation(Representation::Float);
    assert_eq!(solve_with_statistics::<Float>(&program, &explicit).unwrap(), (result, statistics));

    // Exact sign tests see a strictly feasible origin
    let (_, statistics) = solve_with_statistics::<Float>(&program, &Options::default().with_epsilon(0_f64)).unwrap();
    assert_eq!(statistics.bootstrap, None);
    let (_, statistics) = solve_with_statistics::<Rational>(&program, &Options::default()).unwrap();
    assert_eq!(statistics.bootstrap, None);
}

#[test]
fn cycling() {
    for rule in Rule::ALL {
        let options = Options::default().with_rule(rule);
        let (result, statistics) = solve_with_statistics::<Rational>(&catalog::cycling(), &options).unwrap();
        assert_eq!(result.dictionary().map(|d| d.objective_value()), Some(RB!(1)));
        assert!(statistics.nr_pivots() <= 3 * (4 + 3));
    }
}

#[test]
fn conversion_errors() {
    assert_eq!(
        solve::<Integer>(&catalog::cycling(), &Options::default()),
        Err(ConversionError::NotIntegral(RB!(1, 2))),
    );
    assert_eq!(
        solve::<Integer>(&catalog::example_1(), &Options::default().with_epsilon(1e-6)),
        Err(ConversionError::Tolerance { epsilon: 1e-6, representation: Representation::Integer }),
    );
    assert!(solve::<Float>(&catalog::example_1(), &Options::default().with_epsilon(-1_f64)).is_err());
    assert!(solve::<Rational>(&catalog::example_1(), &Options::default().with_epsilon(f64::NAN)).is_err());
}
