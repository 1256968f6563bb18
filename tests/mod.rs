//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
//!
//! Results are compared against known optimal values and against a brute force enumeration of all
//! basic solutions.

mod reference;
mod textbook;
mod random;

/// Show the log output of the solver, if requested through `RUST_LOG`.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
