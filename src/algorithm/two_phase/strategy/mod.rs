//! # Strategies
//!
//! Decisions the Simplex method has to make that don't affect correctness, only the path taken
//! from basis to basis.
use std::fmt;
use std::str::FromStr;

use enum_map::Enum;

use crate::algorithm::two_phase::dictionary::Dictionary;
use crate::algorithm::two_phase::strategy::pivot_rule::{Bland, LargestCoefficient, LargestIncrease, PivotRule, Selection};
use crate::data::number_types::traits::Number;
use crate::data::number_types::UnknownName;

pub mod pivot_rule;

/// Pivot rules that can be selected at runtime.
#[derive(Enum, Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Rule {
    /// Smallest index, never cycles.
    Bland,
    /// Largest objective coefficient.
    LargestCoefficient,
    /// Largest increase of the objective value.
    LargestIncrease,
}

impl Rule {
    /// All rules, in the order in which they are usually reported.
    pub const ALL: [Rule; 3] = [Rule::Bland, Rule::LargestCoefficient, Rule::LargestIncrease];

    /// Select a pivot using this rule.
    ///
    /// See `PivotRule::select_pivot`.
    pub fn select_pivot<F: Number>(self, dictionary: &Dictionary<F>, epsilon: &F) -> Selection {
        match self {
            Rule::Bland => Bland.select_pivot(dictionary, epsilon),
            Rule::LargestCoefficient => LargestCoefficient.select_pivot(dictionary, epsilon),
            Rule::LargestIncrease => LargestIncrease.select_pivot(dictionary, epsilon),
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule::Bland
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Rule::Bland => "bland",
            Rule::LargestCoefficient => "largest-coefficient",
            Rule::LargestIncrease => "largest-increase",
        })
    }
}

impl FromStr for Rule {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bland" => Ok(Rule::Bland),
            "largest-coefficient" | "lc" => Ok(Rule::LargestCoefficient),
            "largest-increase" | "li" => Ok(Rule::LargestIncrease),
            other => Err(UnknownName::new("pivot rule", other)),
        }
    }
}
