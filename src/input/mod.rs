//! Input processing module
//! Handles file detection, resume text extraction, and input loading

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::{InputManager, ResumeUpload};
pub use text_extractor::{PdfExtractor, TextExtractor};
