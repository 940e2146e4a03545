//! Resume text extraction from PDF documents

use crate::error::{AtsError, Result};
use log::{debug, warn};

const PDF_MAGIC: &[u8] = b"%PDF-";

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

/// Extracts the text layer of every page and joins the pages in order.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(AtsError::Extraction(
                "Document does not start with a PDF header".to_string(),
            ));
        }

        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| {
            AtsError::Extraction(format!("Failed to extract text from PDF: {}", e))
        })?;

        for (index, page) in pages.iter().enumerate() {
            if page.trim().is_empty() {
                warn!("Page {} has no extractable text layer", index + 1);
            }
        }
        debug!("Extracted {} page(s) from resume", pages.len());

        Ok(join_pages(pages))
    }
}

/// Page boundaries are not preserved: pages are concatenated as-is.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pages.into_iter().fold(String::new(), |mut text, page| {
        text.push_str(page.as_ref());
        text
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_pages_has_no_separator() {
        let text = join_pages(["Jane Doe\nEngineer", "Skills: Rust", "Go"]);
        assert_eq!(text, "Jane Doe\nEngineerSkills: RustGo");
    }

    #[test]
    fn test_join_pages_keeps_empty_pages_silent() {
        let text = join_pages(vec!["first".to_string(), String::new(), "third".to_string()]);
        assert_eq!(text, "firstthird");
    }

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let result = PdfExtractor.extract(b"plain text resume");
        assert!(matches!(result, Err(AtsError::Extraction(_))));
    }
}
