//! # Floating point numbers
//!
//! Assumed to have a better performance than rational numbers in the simplex algorithm. Correctness
//! guarantees are harder (impossible?) to give due to (accumulating) rounding errors, so every sign
//! test happens with a tolerance.
use num_traits::ToPrimitive;

use crate::data::number_types::{ConversionError, Float, Rational, Representation};
use crate::data::number_types::traits::{Field, Number};

impl Number for Float {
    type Value = Float;

    const REPRESENTATION: Representation = Representation::Float;

    fn from_rational(value: &Rational) -> Result<Self, ConversionError> {
        match value.to_f64() {
            Some(converted) if converted.is_finite() => Ok(converted),
            _ => Err(ConversionError::NotFinite(value.clone())),
        }
    }

    fn tolerance(epsilon: f64) -> Result<Self, ConversionError> {
        if epsilon.is_finite() && epsilon >= 0_f64 {
            Ok(epsilon)
        } else {
            Err(ConversionError::Tolerance { epsilon, representation: Self::REPRESENTATION })
        }
    }

    fn exact_quotient(self, divisor: &Self) -> Self {
        self / divisor
    }

    fn scaled_value(&self, scale: &Self) -> Self::Value {
        self / scale
    }
}

impl Field for Float {
}
