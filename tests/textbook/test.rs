use approx::assert_relative_eq;
use num_traits::ToPrimitive;

use dictlp::algorithm::{OptimizationResult, Status};
use dictlp::algorithm::two_phase::{Bootstrap, Options, solve, solve_with_statistics};
use dictlp::algorithm::two_phase::strategy::Rule;
use dictlp::data::linear_program::catalog::{self, Expected};
use dictlp::data::number_types::{ConversionError, Float, Integer, Rational, Representation};

use crate::init_logging;

fn options(representation: Representation) -> Vec<Options> {
    Rule::ALL.iter()
        .flat_map(|&rule| Bootstrap::ALL.iter().map(move |&bootstrap| {
            Options::for_representation(representation)
                .with_rule(rule)
                .with_bootstrap(bootstrap)
        }))
        .collect()
}

fn expected_status(expected: Expected) -> Status {
    match expected {
        Expected::Optimal(_, _) => Status::Optimal,
        Expected::Infeasible => Status::Infeasible,
        Expected::Unbounded => Status::Unbounded,
    }
}

#[test]
fn rational() {
    init_logging();

    for entry in catalog::all() {
        for options in options(Representation::Rational) {
            let result = solve::<Rational>(&entry.program, &options).unwrap();
            assert_eq!(result.status(), expected_status(entry.expected), "{} with {:?}", entry.name, options);

            if let (Expected::Optimal(numerator, denominator), OptimizationResult::Optimal(dictionary)) = (entry.expected, &result) {
                assert_eq!(dictionary.objective_value(), Rational::new(numerator.into(), denominator.into()));

                let solution = dictionary.basic_solution();
                assert!(entry.program.is_feasible(&solution));
                assert_eq!(entry.program.objective_value(&solution), dictionary.objective_value());
            }
        }
    }
}

#[test]
fn integer() {
    init_logging();

    for entry in catalog::all() {
        for options in options(Representation::Integer) {
            match solve::<Integer>(&entry.program, &options) {
                Ok(result) => {
                    assert_eq!(result.status(), expected_status(entry.expected), "{}", entry.name);
                    if let Expected::Optimal(numerator, denominator) = entry.expected {
                        let dictionary = result.dictionary().unwrap();
                        assert_eq!(dictionary.objective_value(), Rational::new(numerator.into(), denominator.into()));
                        assert!(entry.program.is_feasible(&dictionary.basic_solution()));
                    }
                },
                Err(error) => {
                    // Only the problem with fractional data can't be represented
                    assert_eq!(entry.name, "cycling");
                    assert!(matches!(error, ConversionError::NotIntegral(_)));
                },
            }
        }
    }
}

#[test]
fn float() {
    init_logging();

    for entry in catalog::all() {
        for options in options(Representation::Float) {
            let result = solve::<Float>(&entry.program, &options).unwrap();
            assert_eq!(result.status(), expected_status(entry.expected), "{}", entry.name);

            if let (Expected::Optimal(numerator, denominator), Some(dictionary)) = (entry.expected, result.dictionary()) {
                assert_relative_eq!(
                    dictionary.objective_value(),
                    numerator as f64 / denominator as f64,
                    epsilon = 1e-9,
                    max_relative = 1e-9,
                );
            }
        }
    }
}

#[test]
fn representations_agree_on_solution() {
    let program = catalog::integer_pivoting();
    let options = Options::default().with_rule(Rule::LargestIncrease);

    let exact = solve::<Rational>(&program, &options).unwrap();
    let integral = solve::<Integer>(&program, &options).unwrap();
    let float = solve::<Float>(&program, &Options::for_representation(Representation::Float)).unwrap();

    let exact = exact.dictionary().unwrap().basic_solution();
    assert_eq!(integral.dictionary().unwrap().basic_solution(), exact);
    for (approximate, exact) in float.dictionary().unwrap().basic_solution().into_iter().zip(exact) {
        assert_relative_eq!(approximate, exact.to_f64().unwrap(), max_relative = 1e-9);
    }
}

#[test]
fn bootstrap_is_reported() {
    let options = Options::default();

    let (_, statistics) = solve_with_statistics::<Rational>(&catalog::example_1(), &options).unwrap();
    assert_eq!(statistics.bootstrap, None);

    let (_, statistics) = solve_with_statistics::<Rational>(&catalog::exercise_2_6(), &options).unwrap();
    assert_eq!(statistics.bootstrap, Some(Bootstrap::Dual));

    let options = options.with_bootstrap(Bootstrap::Auxiliary);
    let (_, statistics) = solve_with_statistics::<Rational>(&catalog::exercise_2_7(), &options).unwrap();
    assert_eq!(statistics.bootstrap, Some(Bootstrap::Auxiliary));
}

#[test]
fn final_dictionary_display() {
    let result = solve::<Rational>(&catalog::example_1(), &Options::default()).unwrap();
    assert_eq!(
        result.dictionary().unwrap().to_string(),
        [
            " z = 13 -  1*x4 -  3*x2 -  1*x6",
            "x1 =  2 -  2*x4 -  2*x2 +  1*x6",
            "x5 =  1 +  2*x4 +  5*x2 -  0*x6",
            "x3 =  1 +  3*x4 +  1*x2 -  2*x6",
        ].join("\n"),
    );
}
