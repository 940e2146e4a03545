//! Result display and report export

pub mod formatter;
pub mod pdf;
pub mod report;

pub use report::{EvaluationResult, ResultSet};
