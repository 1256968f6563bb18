//! # Printing dictionaries
//!
//! Dictionaries are printed as a system of equations, one line per row, with the columns aligned:
//!
//! ```text
//!  z =  0 +  5*x1 +  4*x2 +  3*x3
//! x4 =  5 -  2*x1 -  3*x2 -  1*x3
//! ```
//!
//! When the pivot scale is not one, every line is prefixed with it, such that the equations stay
//! true.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::algorithm::two_phase::dictionary::Dictionary;
use crate::data::number_types::traits::{Abs, Number};

impl<F: Number> Display for Dictionary<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        // A negative zero should not print as "-0"
        let normalized = |value: &F| if value.is_zero() { F::zero() } else { value.clone() };

        let variable_width = self.basic.iter()
            .chain(&self.nonbasic)
            .map(|&index| self.variable_name(index).len())
            .chain(Some(self.variable_name(0).len()))
            .max()
            .unwrap_or(1);
        let value_width = self.tableau.iter()
            .flat_map(|row| {
                let constant = normalized(&row[0]).to_string().len();
                let coefficients = row[1..].iter().map(move |value| Abs::abs(normalized(value)).to_string().len());
                Some(constant).into_iter().chain(coefficients)
            })
            .max()
            .unwrap_or(1);
        let prefix = if self.pivot_scale.is_one() {
            String::new()
        } else {
            format!("{}*", self.pivot_scale)
        };

        let lines = self.tableau.iter().enumerate().map(|(i, row)| {
            let variable = if i == 0 { 0 } else { self.basic[i - 1] };
            let mut line = format!(
                "{}{:>label_width$}{:>value_width$}",
                prefix,
                format!("{} = ", self.variable_name(variable)),
                normalized(&row[0]).to_string(),
                label_width = variable_width + 3,
                value_width = value_width,
            );
            for (value, &index) in row[1..].iter().zip(&self.nonbasic) {
                let value = normalized(value);
                let sign = if value > F::zero() { '+' } else { '-' };
                line.push_str(&format!(
                    " {} {:>value_width$}*{:>variable_width$}",
                    sign,
                    Abs::abs(value).to_string(),
                    self.variable_name(index),
                    value_width = value_width,
                    variable_width = variable_width,
                ));
            }

            line
        });

        write!(f, "{}", lines.format("\n"))
    }
}
