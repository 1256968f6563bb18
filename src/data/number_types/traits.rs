//! # Traits
//!
//! The dictionary only needs a handful of operations from its entries: addition, multiplication,
//! negation, comparison with zero and a quotient that is known to be exact. Division in general is
//! not part of the contract, because the integer representation can only divide when the result is
//! known to be integral.
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::data::number_types::{ConversionError, Rational, Representation};

/// Entries of a dictionary.
///
/// The true value of an entry is the entry divided by the pivot scale of the dictionary it is
/// stored in. That scale is always positive, so signs can be read from the entries directly.
pub trait Number:
    PartialEq +
    PartialOrd +
    Zero + // Additive identity
    One + // Multiplicative identity
    Neg<Output=Self> + // Additive inverse
    Add<Self, Output=Self> +
    for<'r> Add<&'r Self, Output=Self> +
    Sub<Self, Output=Self> +
    for<'r> Sub<&'r Self, Output=Self> +
    Mul<Self, Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +
    // Practicalities
    Clone +
    Display +
    Debug +
    Sized +
{
    /// Type in which values are reported, once divided by the pivot scale.
    type Value: PartialEq + Clone + Display + Debug;

    /// How a dictionary with these entries is pivoted.
    const REPRESENTATION: Representation;

    /// Convert an exact input value.
    ///
    /// # Errors
    ///
    /// If the value can't be represented without loss that matters for the algorithm.
    fn from_rational(value: &Rational) -> Result<Self, ConversionError>;

    /// Convert a tolerance for sign tests.
    ///
    /// # Errors
    ///
    /// If the tolerance is negative or not finite, or not supported by this representation.
    fn tolerance(epsilon: f64) -> Result<Self, ConversionError>;

    /// Divide by a value that is known to divide this one.
    ///
    /// For fields, this is ordinary division.
    fn exact_quotient(self, divisor: &Self) -> Self;

    /// The value of an entry in a dictionary with the given pivot scale.
    fn scaled_value(&self, scale: &Self) -> Self::Value;
}

/// Representations in which any nonzero value can be divided by.
///
/// Only these can be pivoted with the plain Gauss-Jordan pivot.
pub trait Field:
    Number +
    Div<Self, Output=Self> +
    for<'r> Div<&'r Self, Output=Self> +
{
}

/// Absolute value of a number.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Abs: Neg<Output=Self> + PartialOrd + Zero {
    /// The absolute value of a number.
    ///
    /// Compute the additive inverse if the number is smaller than the additive identity.
    fn abs(self) -> Self {
        if self < Self::zero() {
            -self
        } else {
            self
        }
    }
}
impl<T: Neg<Output=Self> + PartialOrd + Zero> Abs for T {
}

/// Whether a value lies in the closed interval `[-threshold, threshold]`.
pub fn is_negligible<F: Number>(value: &F, threshold: &F) -> bool {
    &-threshold.clone() <= value && value <= threshold
}
