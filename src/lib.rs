//! # nota
//!
//! A weighted grade calculator. Combines a bounded set of weighted
//! evaluations with an attendance penalty and a teacher-consensus bonus,
//! clamps the result to `[0, 20]`, and reports figures rounded to 2 decimal
//! places.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// For the aggregation algorithm and its result types
pub mod calculator;
/// For the evaluation value type and its validation
pub mod evaluation;
/// For the stateless grading policies
pub mod policies;
/// For rendering calculation results
pub mod report;

pub use calculator::{CalculationDetails, CalculationResult, CapacityExceeded, GradeCalculator};
pub use evaluation::{Evaluation, ValidationError};
