//! # Random problems
//!
//! Seeded random problems, solved with every combination of options and compared with the brute
//! force reference.

/// # Execution
mod test;
