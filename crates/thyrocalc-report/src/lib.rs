//! thyrocalc-report
//!
//! Plain-text prescription summaries rendered from a `CalculationResult`.

pub mod context;
pub mod error;
pub mod render;
