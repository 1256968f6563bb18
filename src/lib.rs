//! # An exact dictionary Simplex solver
//!
//! Linear programs in standard form, `maximize c^T x subject to A x <= b, x >= 0`, are solved using
//! the two-phase Simplex method on dictionaries, as described in the book Linear Programming:
//! Foundations and Extensions by Robert J. Vanderbei.
//!
//! Dictionaries can be stored as exact rationals, as integers with a common pivot scale, or as
//! floating point numbers. The pivot rule and the way in which a feasible dictionary is found are
//! configurable through `algorithm::two_phase::Options`.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
