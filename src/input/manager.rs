//! Input manager for loading the resume upload and job description files

use crate::error::{AtsError, Result};
use crate::input::file_detector::FileType;
use log::info;
use std::path::Path;
use tokio::fs;

/// A resume file as the user handed it over, not yet parsed.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

pub struct InputManager;

impl InputManager {
    pub async fn load_resume(path: &Path) -> Result<ResumeUpload> {
        if FileType::from_path(path) != FileType::Pdf {
            return Err(AtsError::InvalidInput(format!(
                "Resume must be a PDF file: {}",
                path.display()
            )));
        }

        if !path.exists() {
            return Err(AtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        info!("Reading resume: {}", path.display());
        let bytes = fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(ResumeUpload::new(file_name, bytes))
    }

    /// Read a job description verbatim. Blank files are returned as-is and
    /// skipped later by the evaluator.
    pub async fn load_job_description(path: &Path) -> Result<String> {
        if !FileType::from_path(path).is_plain_text() {
            return Err(AtsError::InvalidInput(format!(
                "Job description must be a .txt or .md file: {}",
                path.display()
            )));
        }

        if !path.exists() {
            return Err(AtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        info!("Reading job description: {}", path.display());
        Ok(fs::read_to_string(path).await?)
    }

    pub async fn load_job_descriptions(paths: &[impl AsRef<Path>]) -> Result<Vec<String>> {
        let mut descriptions = Vec::with_capacity(paths.len());
        for path in paths {
            descriptions.push(Self::load_job_description(path.as_ref()).await?);
        }
        Ok(descriptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_job_description_is_read_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jd.txt");
        std::fs::write(&path, "  Senior Rust Engineer {jd}\n").unwrap();

        let text = InputManager::load_job_description(&path).await.unwrap();
        assert_eq!(text, "  Senior Rust Engineer {jd}\n");
    }

    #[tokio::test]
    async fn test_resume_must_be_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Jane Doe").unwrap();

        let result = InputManager::load_resume(&path).await;
        assert!(matches!(result, Err(AtsError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_resume_upload_keeps_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let upload = InputManager::load_resume(&path).await.unwrap();
        assert_eq!(upload.file_name, "resume.pdf");
        assert_eq!(upload.bytes, b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_nonexistent_job_description() {
        let result = InputManager::load_job_description(Path::new("missing/jd.txt")).await;
        assert!(result.is_err());
    }
}
