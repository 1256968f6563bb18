//! # Textbook problems
//!
//! Every problem of the catalog is solved with every representation, pivot rule and bootstrap.

/// # Execution
mod test;
