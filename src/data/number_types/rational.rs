//! # Rational numbers
//!
//! The exact representation. Every pivot is computed without error, at the cost of numerators and
//! denominators that may grow quickly.
use crate::data::number_types::{ConversionError, Rational, Representation};
use crate::data::number_types::traits::{Field, Number};

impl Number for Rational {
    type Value = Rational;

    const REPRESENTATION: Representation = Representation::Rational;

    fn from_rational(value: &Rational) -> Result<Self, ConversionError> {
        Ok(value.clone())
    }

    fn tolerance(epsilon: f64) -> Result<Self, ConversionError> {
        if epsilon.is_finite() && epsilon >= 0_f64 {
            Rational::from_float(epsilon)
                .ok_or(ConversionError::Tolerance { epsilon, representation: Self::REPRESENTATION })
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

impl Field for Rational {
}

/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::data::number_types::Rational::from_integer(
            $crate::data::number_types::Integer::from($value as i64)
        )
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::Rational::new(
            $crate::data::number_types::Integer::from($numer as i64),
            $crate::data::number_types::Integer::from($denom as i64),
        )
    };
}

#[cfg(test)]
mod test {
    use num_traits::{One, Zero};

    use crate::data::number_types::{ConversionError, Rational, Representation};
    use crate::data::number_types::traits::Number;

    #[test]
    fn field_identities() {
        for i in -10..0 {
            assert_eq!(RB!(0, i), Rational::zero());
            assert_eq!(RB!(i, i), Rational::one());
        }
        for i in 1..10 {
            assert_eq!(RB!(0, i), Rational::zero());
            assert_eq!(RB!(i, i), Rational::one());
        }
    }

    #[test]
    #[should_panic]
    fn panic_divide_nonzero_by_zero() {
        let _result = RB!(3, 0);
    }

    #[test]
    fn exact_quotient() {
        assert_eq!(RB!(3, 2).exact_quotient(&RB!(6, 4)), Rational::one());
        assert_eq!(RB!(1).exact_quotient(&RB!(3)), RB!(1, 3));
        assert_eq!(RB!(0, 2).exact_quotient(&RB!(2, 5)), Rational::zero());
    }

    #[test]
    fn scaled_value() {
        assert_eq!(RB!(3).scaled_value(&RB!(6)), RB!(1, 2));
        assert_eq!(RB!(7, 3).scaled_value(&Rational::one()), RB!(7, 3));
    }

    #[test]
    fn tolerance() {
        assert_eq!(Rational::tolerance(0_f64), Ok(Rational::zero()));
        assert_eq!(Rational::tolerance(0.5), Ok(RB!(1, 2)));
        assert_eq!(
            Rational::tolerance(-1_f64),
            Err(ConversionError::Tolerance { epsilon: -1_f64, representation: Representation::Rational }),
        );
        assert!(Rational::tolerance(f64::NAN).is_err());
    }
}
