//! # Integers with a pivot scale
//!
//! A dictionary in this representation keeps all entries integral. Every pivot multiplies the
//! non-pivot rows by the pivot coefficient and divides by the previous pivot coefficient; that
//! division is always exact, because every entry is (up to sign) a minor of the initial
//! dictionary. The common denominator is kept in the dictionary as the pivot scale.
use num::Integer as _;
use num_traits::Zero;

use crate::data::number_types::{ConversionError, Integer, Rational, Representation};
use crate::data::number_types::traits::Number;

impl Number for Integer {
    type Value = Rational;

    const REPRESENTATION: Representation = Representation::Integer;

    fn from_rational(value: &Rational) -> Result<Self, ConversionError> {
        if value.is_integer() {
            Ok(value.to_integer())
        } else {
            Err(ConversionError::NotIntegral(value.clone()))
        }
    }

    /// Only a zero tolerance is supported.
    ///
    /// Sign tests on integers are exact; a nonzero tolerance would also have to be rescaled with
    /// every pivot.
    fn tolerance(epsilon: f64) -> Result<Self, ConversionError> {
        if epsilon == 0_f64 {
            Ok(Integer::zero())
        } else {
            Err(ConversionError::Tolerance { epsilon, representation: Self::REPRESENTATION })
        }
    }

    fn exact_quotient(self, divisor: &Self) -> Self {
        let (quotient, remainder) = self.div_rem(divisor);
        debug_assert!(remainder.is_zero(), "integer pivot left a remainder dividing by {}", divisor);

        quotient
    }

    fn scaled_value(&self, scale: &Self) -> Self::Value {
        Rational::new(self.clone(), scale.clone())
    }
}
