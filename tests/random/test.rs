use num_traits::ToPrimitive;

use dictlp::algorithm::OptimizationResult;
use dictlp::algorithm::two_phase::{Bootstrap, Options, solve, solve_with_statistics};
use dictlp::algorithm::two_phase::strategy::Rule;
use dictlp::data::linear_program::LinearProgram;
use dictlp::data::linear_program::random::Generator;
use dictlp::data::number_types::{Float, Integer, Rational, Representation};

use crate::init_logging;
use crate::reference::{self, Outcome};

fn outcome<F>(result: &OptimizationResult<F>, value: impl Fn(&F::Value) -> Rational) -> Outcome
where
    F: dictlp::data::number_types::traits::Number,
{
    match result {
        OptimizationResult::Optimal(dictionary) => Outcome::Optimal(value(&dictionary.objective_value())),
        OptimizationResult::Infeasible => Outcome::Infeasible,
        OptimizationResult::Unbounded => Outcome::Unbounded,
    }
}

fn check_exact(program: &LinearProgram, expected: &Outcome) {
    for rule in Rule::ALL {
        for bootstrap in Bootstrap::ALL {
            let options = Options::default().with_rule(rule).with_bootstrap(bootstrap);

            let (result, statistics) = solve_with_statistics::<Rational>(program, &options).unwrap();
            assert_eq!(&outcome(&result, Clone::clone), expected, "{}\n{:?}", program, options);
            if let Some(dictionary) = result.dictionary() {
                let solution = dictionary.basic_solution();
                assert!(program.is_feasible(&solution));
                assert_eq!(program.objective_value(&solution), dictionary.objective_value());
            }
            let size = program.nr_variables() + program.nr_constraints();
            assert!(statistics.nr_pivots() <= 4 * size, "{} pivots for\n{}", statistics.nr_pivots(), program);

            let integral = solve::<Integer>(program, &options).unwrap();
            assert_eq!(&outcome(&integral, Clone::clone), expected, "{}\n{:?}", program, options);
            if let (Some(integral), Some(exact)) = (integral.dictionary(), result.dictionary()) {
                assert_eq!(integral.basic_solution(), exact.basic_solution());
            }
        }
    }
}

fn check_float(program: &LinearProgram, expected: &Outcome) {
    for rule in Rule::ALL {
        let options = Options::for_representation(Representation::Float).with_rule(rule);
        let result = solve::<Float>(program, &options).unwrap();

        match (&result, expected) {
            (OptimizationResult::Optimal(dictionary), Outcome::Optimal(value)) => {
                let value = value.to_f64().unwrap();
                assert!((dictionary.objective_value() - value).abs() <= 1e-6 * (1_f64 + value.abs()));
            },
            (OptimizationResult::Infeasible, Outcome::Infeasible) => (),
            (OptimizationResult::Unbounded, Outcome::Unbounded) => (),
            (other, _) => panic!("float solve gave {} instead of {:?} for\n{}", other.status(), expected, program),
        }
    }
}

#[test]
fn feasible_origin() {
    init_logging();

    for program in Generator::default().generate_seeded(2024, 150) {
        let expected = reference::solve(&program);
        assert_ne!(expected, Outcome::Infeasible);
        check_exact(&program, &expected);
        check_float(&program, &expected);
    }
}

#[test]
fn mixed_signs() {
    init_logging();

    let programs = Generator::mixed_signs().generate_seeded(17, 300);
    let mut outcomes = [0; 3];
    for program in &programs {
        let expected = reference::solve(program);
        outcomes[match expected {
            Outcome::Optimal(_) => 0,
            Outcome::Infeasible => 1,
            Outcome::Unbounded => 2,
        }] += 1;

        check_exact(program, &expected);
        check_float(program, &expected);
    }

    // The generator produces every kind of outcome
    assert!(outcomes.iter().all(|&count| count > 0), "{:?}", outcomes);
}

#[test]
fn seeded_runs_are_identical() {
    let generator = Generator::mixed_signs();
    let options = Options::default().with_rule(Rule::LargestIncrease);

    let first = generator.generate_seeded(5, 20).iter()
        .map(|program| solve_with_statistics::<Rational>(program, &options).unwrap())
        .collect::<Vec<_>>();
    let second = generator.generate_seeded(5, 20).iter()
        .map(|program| solve_with_statistics::<Rational>(program, &options).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(first, second);
}
