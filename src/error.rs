//! Error handling for the ATS evaluator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    Extraction(String),

    #[error("Completion service error: {0}")]
    ExternalService(String),

    #[error("Could not parse model reply: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Report generation error: {0}")]
    Report(String),
}

/// Failures at the model reply boundary.
///
/// The model is only instructed to return the expected object, so each
/// way the reply can miss that shape gets its own variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("reply is not valid JSON ({0})")]
    InvalidJson(String),

    #[error("reply is JSON but not an object")]
    NotAnObject,

    #[error("reply is missing the \"{0}\" key")]
    MissingKey(&'static str),

    #[error("\"{0}\" has an unexpected type")]
    WrongType(&'static str),
}

pub type Result<T> = std::result::Result<T, AtsError>;

impl From<reqwest::Error> for AtsError {
    fn from(err: reqwest::Error) -> Self {
        AtsError::ExternalService(err.to_string())
    }
}

impl From<printpdf::Error> for AtsError {
    fn from(err: printpdf::Error) -> Self {
        AtsError::Report(err.to_string())
    }
}
