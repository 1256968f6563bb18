//! # Number types
//!
//! A dictionary can be stored in different representations. This module defines the `Number`
//! abstraction over those representations and provides the three implementations:
//!
//! * exact rationals, which are the reference for correctness;
//! * arbitrary precision integers, which are only pivoted with the integer preserving pivot and
//!   carry a common denominator in the dictionary;
//! * floating point numbers, which are fast but need a tolerance to decide signs.
//!
//! A benefit of this approach is that the algorithm can be tested well for correctness using
//! fractional numbers, while the same code is used without adaptation with floating point numbers.
use std::error::Error;
use std::fmt;
use std::str::FromStr;

pub mod traits;
pub mod rational;
pub mod integer;
pub mod float;

/// Arbitrary precision rational, the exact representation.
pub type Rational = num::BigRational;
/// Arbitrary precision integer, used with integer pivoting.
pub type Integer = num::BigInt;
/// Floating point representation, only accurate up to a tolerance.
pub type Float = f64;

/// The way values in a dictionary are represented.
///
/// This is fixed for the lifetime of a dictionary.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Representation {
    /// Exact rational numbers, pivoted with exact division.
    Rational,
    /// Integers with a common pivot scale, pivoted such that all entries stay integral.
    Integer,
    /// Floating point numbers, signs are decided with an epsilon tolerance.
    Float,
}

impl Representation {
    /// All representations, in the order in which they are usually reported.
    pub const ALL: [Representation; 3] = [
        Representation::Rational,
        Representation::Integer,
        Representation::Float,
    ];

    /// Tolerance to use when none is specified.
    ///
    /// Zero for the exact representations.
    pub fn default_epsilon(self) -> f64 {
        match self {
            Representation::Rational | Representation::Integer => 0_f64,
            Representation::Float => 1e-6,
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Representation::Rational => "rational",
            Representation::Integer => "integer",
            Representation::Float => "float",
        })
    }
}

impl FromStr for Representation {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rational" | "fraction" => Ok(Representation::Rational),
            "integer" | "int" => Ok(Representation::Integer),
            "float" | "f64" => Ok(Representation::Float),
            other => Err(UnknownName::new("representation", other)),
        }
    }
}

/// A value of the input could not be brought into the requested representation.
///
/// Raised before any pivoting takes place.
#[derive(PartialEq, Clone, Debug)]
pub enum ConversionError {
    /// The integer representation needs integral input data.
    NotIntegral(Rational),
    /// The value is too large to be represented as a finite float.
    NotFinite(Rational),
    /// The tolerance is negative, not finite, or not supported by the representation.
    Tolerance {
        /// Requested tolerance.
        epsilon: f64,
        /// Representation that was requested.
        representation: Representation,
    },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConversionError::NotIntegral(value) => write!(
                f, "value {} is not integral and can't be used with integer pivoting", value,
            ),
            ConversionError::NotFinite(value) => write!(
                f, "value {} can't be represented as a finite float", value,
            ),
            ConversionError::Tolerance { epsilon, representation } => write!(
                f, "tolerance {} is not valid for the {} representation", epsilon, representation,
            ),
        }
    }
}

impl Error for ConversionError {
}

/// A name given for one of the configuration enums was not recognized.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct UnknownName {
    kind: &'static str,
    name: String,
}

impl UnknownName {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `kind`: What was being parsed, for the message to the end user.
    /// * `name`: The text that didn't match any known option.
    pub fn new(kind: &'static str, name: impl Into<String>) -> Self {
        Self { kind, name: name.into() }
    }
}

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown {}: \"{}\"", self.kind, self.name)
    }
}

impl Error for UnknownName {
}
