//! Candidate generation for one operation
//!
//! Strictly bottom-up: hardware spec in, per-axis candidate lists, cross
//! product merge, estimator attachment, final candidate set out. No state is
//! shared between operations, so callers may fan out one call per operation
//! with zero coordination.

mod assemble;
mod select;

#[cfg(test)]
mod tests;

pub use assemble::candidates;
pub use select::select_options;
