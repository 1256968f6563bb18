use std::fmt::Display;
use std::process::exit;
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use num_traits::ToPrimitive;

use dictlp::algorithm::OptimizationResult;
use dictlp::algorithm::two_phase::{Bootstrap, Options, solve, solve_with_statistics};
use dictlp::algorithm::two_phase::strategy::Rule;
use dictlp::data::linear_program::{LinearProgram, ProblemError};
use dictlp::data::linear_program::catalog::{self, Expected};
use dictlp::data::linear_program::random::Generator;
use dictlp::data::number_types::{ConversionError, Float, Integer, Rational, Representation};
use dictlp::data::number_types::traits::Number;

/// An exact dictionary Simplex solver written in rust.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a problem given on the command line
    Solve(SolveArgs),
    /// Solve the textbook problems
    Catalog(SolverArgs),
    /// Solve random problems with every representation and pivot rule
    Experiment(ExperimentArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Objective coefficients, separated by commas
    #[arg(long, allow_hyphen_values = true)]
    objective: String,
    /// Constraint matrix, rows separated by semicolons and values by commas
    #[arg(long, allow_hyphen_values = true)]
    constraints: String,
    /// Right-hand side, separated by commas
    #[arg(long, allow_hyphen_values = true)]
    bounds: String,
    #[command(flatten)]
    solver: SolverArgs,
}

#[derive(Args)]
struct SolverArgs {
    /// Number representation: rational, integer or float
    #[arg(long, default_value_t = Representation::Rational)]
    representation: Representation,
    /// Pivot rule: bland, largest-coefficient or largest-increase
    #[arg(long, default_value_t = Rule::Bland)]
    rule: Rule,
    /// Tolerance for sign tests, defaults to zero for exact representations and 1e-6 for floats
    #[arg(long)]
    epsilon: Option<f64>,
    /// How to find a feasible dictionary: dual or auxiliary
    #[arg(long, default_value_t = Bootstrap::Dual)]
    bootstrap: Bootstrap,
}

impl SolverArgs {
    fn options(&self) -> Options {
        let options = Options::for_representation(self.representation)
            .with_rule(self.rule)
            .with_bootstrap(self.bootstrap);
        match self.epsilon {
            Some(epsilon) => options.with_epsilon(epsilon),
            None => options,
        }
    }
}

#[derive(Args)]
struct ExperimentArgs {
    /// Number of problems
    #[arg(long, default_value_t = 1000)]
    count: usize,
    /// Seed of the problem generator
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Also generate problems that are infeasible at the origin
    #[arg(long)]
    mixed_signs: bool,
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();

    match opts.command {
        Command::Solve(args) => {
            let program = match parse_program(&args.objective, &args.constraints, &args.bounds) {
                Ok(program) => program,
                Err(message) => {
                    eprintln!("Problem is inconsistent: {}", message);
                    exit(2);
                },
            };
            println!("{}\n", program);

            let options = args.solver.options();
            let outcome = match args.solver.representation {
                Representation::Rational => report::<Rational>(&program, &options),
                Representation::Integer => report::<Integer>(&program, &options),
                Representation::Float => report::<Float>(&program, &options),
            };
            if let Err(error) = outcome {
                eprintln!("Can't solve with {} numbers: {}", args.solver.representation, error);
                exit(1);
            }
        },
        Command::Catalog(args) => {
            let options = args.options();
            for entry in catalog::all() {
                let outcome = match args.representation {
                    Representation::Rational => catalog_line::<Rational>(&entry.program, &options),
                    Representation::Integer => catalog_line::<Integer>(&entry.program, &options),
                    Representation::Float => catalog_line::<Float>(&entry.program, &options),
                };
                let expected = match entry.expected {
                    Expected::Optimal(numerator, denominator) => format!("OPTIMAL {}", Rational::new(numerator.into(), denominator.into())),
                    Expected::Infeasible => "INFEASIBLE".to_string(),
                    Expected::Unbounded => "UNBOUNDED".to_string(),
                };
                match outcome {
                    Ok(line) => println!("{:<22} {:<30} (expected {})", entry.name, line, expected),
                    Err(error) => println!("{:<22} {:<30} (expected {})", entry.name, error, expected),
                }
            }
        },
        Command::Experiment(args) => experiment(&args),
    }
}

/// Parse a problem given as comma and semicolon separated values.
fn parse_program(objective: &str, constraints: &str, bounds: &str) -> Result<LinearProgram, String> {
    let objective = parse_values(objective)?;
    let constraints = constraints.split(';')
        .filter(|row| !row.trim().is_empty())
        .map(parse_values)
        .collect::<Result<Vec<_>, _>>()?;
    let bounds = parse_values(bounds)?;

    LinearProgram::new(objective, constraints, bounds).map_err(|error: ProblemError| error.to_string())
}

/// Values can be written as integers, fractions like `3/2` or decimals like `1.5`.
fn parse_values(text: &str) -> Result<Vec<Rational>, String> {
    text.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            value.parse::<Rational>()
                .ok()
                .or_else(|| value.parse::<f64>().ok().and_then(Rational::from_float))
                .ok_or_else(|| format!("can't read \"{}\" as a number", value))
        })
        .collect()
}

fn report<F: Number>(program: &LinearProgram, options: &Options) -> Result<(), ConversionError> {
    let (result, statistics) = solve_with_statistics::<F>(program, options)?;

    println!("Status: {}", result.status());
    if let OptimizationResult::Optimal(dictionary) = &result {
        println!("Objective value: {}", dictionary.objective_value());
        let solution = dictionary.basic_solution().iter()
            .enumerate()
            .map(|(j, value)| format!("x{} = {}", j + 1, value))
            .join(", ");
        println!("Solution: {}", solution);
        println!("\n{}\n", dictionary);
    }
    if let Some(bootstrap) = statistics.bootstrap {
        println!("Bootstrap: {}", bootstrap);
    }
    let per_rule = statistics.pivots.iter()
        .map(|(rule, count)| format!("{} {}", rule, count))
        .join(", ");
    println!("Pivots: {} ({})", statistics.nr_pivots(), per_rule);

    Ok(())
}

fn catalog_line<F: Number>(program: &LinearProgram, options: &Options) -> Result<String, ConversionError> {
    let result = solve::<F>(program, options)?;
    Ok(match result.dictionary() {
        Some(dictionary) => format!("{} {}", result.status(), dictionary.objective_value()),
        None => result.status().to_string(),
    })
}

/// Outcome of one solve reduced to something that can be compared across representations.
#[derive(PartialEq, Copy, Clone, Debug)]
enum Summary {
    Optimal(f64),
    Infeasible,
    Unbounded,
}

impl Summary {
    fn agrees_with(self, other: Summary) -> bool {
        match (self, other) {
            (Summary::Optimal(left), Summary::Optimal(right)) => {
                (left - right).abs() <= 1e-6 * (1_f64 + left.abs().max(right.abs()))
            },
            (left, right) => left == right,
        }
    }
}

fn summarize<F: Number>(program: &LinearProgram, options: &Options) -> Result<(Summary, usize), ConversionError>
where
    F::Value: ToF64,
{
    let (result, statistics) = solve_with_statistics::<F>(program, options)?;
    let summary = match &result {
        OptimizationResult::Optimal(dictionary) => Summary::Optimal(dictionary.objective_value().to_f64_lossy()),
        OptimizationResult::Infeasible => Summary::Infeasible,
        OptimizationResult::Unbounded => Summary::Unbounded,
    };

    Ok((summary, statistics.nr_pivots()))
}

/// Reported values as floats, for comparison only.
trait ToF64: Display {
    fn to_f64_lossy(&self) -> f64;
}

impl ToF64 for Rational {
    fn to_f64_lossy(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl ToF64 for Float {
    fn to_f64_lossy(&self) -> f64 {
        *self
    }
}

fn experiment(args: &ExperimentArgs) {
    let generator = if args.mixed_signs { Generator::mixed_signs() } else { Generator::default() };
    let programs = generator.generate_seeded(args.seed, args.count);
    println!("Solving {} random problems, seed {}", programs.len(), args.seed);

    let mut reference = Vec::with_capacity(programs.len());
    for program in &programs {
        let options = Options::default();
        match summarize::<Rational>(program, &options) {
            Ok((summary, _)) => reference.push(summary),
            Err(error) => {
                eprintln!("Can't solve a generated problem: {}", error);
                exit(1);
            },
        }
    }

    println!("{:<10} {:<20} {:>10} {:>10} {:>12} {:>10}", "numbers", "rule", "agree", "pivots", "time (ms)", "optimal");
    for representation in Representation::ALL {
        for rule in Rule::ALL {
            let options = Options::for_representation(representation).with_rule(rule);

            let start = Instant::now();
            let outcomes = programs.iter()
                .map(|program| match representation {
                    Representation::Rational => summarize::<Rational>(program, &options),
                    Representation::Integer => summarize::<Integer>(program, &options),
                    Representation::Float => summarize::<Float>(program, &options),
                })
                .collect::<Result<Vec<_>, _>>();
            let elapsed: Duration = start.elapsed();

            match outcomes {
                Ok(outcomes) => {
                    let agree = outcomes.iter()
                        .zip(&reference)
                        .filter(|((summary, _), expected)| summary.agrees_with(**expected))
                        .count();
                    let pivots = outcomes.iter().map(|&(_, pivots)| pivots).sum::<usize>();
                    let optimal = outcomes.iter()
                        .filter(|(summary, _)| matches!(summary, Summary::Optimal(_)))
                        .count();
                    println!(
                        "{:<10} {:<20} {:>10} {:>10} {:>12.3} {:>10}",
                        representation, rule, agree, pivots, elapsed.as_secs_f64() * 1000_f64, optimal,
                    );
                },
                Err(error) => println!("{:<10} {:<20} {}", representation, rule, error),
            }
        }
    }
}
