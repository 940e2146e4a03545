//! Submission processing module

pub mod evaluator;

pub use evaluator::{Evaluator, Submission, MAX_JOB_DESCRIPTIONS};
