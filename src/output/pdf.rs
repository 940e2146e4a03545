//! PDF export of a result set
//!
//! Layout runs in two steps. [`ReportLayout::plan`] places every line on a
//! page with a simple cursor, and [`render_report`] draws the plan with
//! `printpdf`. A page break happens before any line whose cursor has fallen
//! below the bottom margin, even in the middle of a record. Summaries are
//! not wrapped.

use crate::error::Result;
use crate::output::report::EvaluationResult;
use log::{debug, info};
use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};
use std::path::Path;

pub const REPORT_MIME: &str = "application/pdf";
pub const REPORT_TITLE: &str = "Resume Analysis Results";

// US Letter, in points
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;

pub const FONT_SIZE: f32 = 12.0;
pub const TOP_Y: f32 = PAGE_HEIGHT - 40.0;
pub const BOTTOM_MARGIN: f32 = 100.0;
pub const LINE_HEIGHT: f32 = 20.0;
pub const TITLE_GAP: f32 = 30.0;
pub const RECORD_GAP: f32 = 20.0;
pub const HEADING_X: f32 = 30.0;
pub const BODY_X: f32 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportLayout {
    pub pages: Vec<Vec<PlacedLine>>,
}

impl ReportLayout {
    pub fn plan(results: &[EvaluationResult]) -> Self {
        let mut cursor = Cursor::new();

        cursor.emit(REPORT_TITLE, HEADING_X, TITLE_GAP);

        for (idx, result) in results.iter().enumerate() {
            cursor.emit(
                format!(
                    "Job Description {} Match Percentage: {}",
                    idx + 1,
                    result.match_percentage()
                ),
                HEADING_X,
                LINE_HEIGHT,
            );

            cursor.emit("Missing Keywords:", HEADING_X, LINE_HEIGHT);
            for keyword in &result.missing_keywords {
                cursor.emit(format!("- {}", keyword), BODY_X, LINE_HEIGHT);
            }

            cursor.emit("Profile Summary:", HEADING_X, LINE_HEIGHT);
            cursor.emit(
                result.profile_summary.as_str(),
                BODY_X,
                LINE_HEIGHT + RECORD_GAP,
            );
        }

        cursor.finish()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.pages.iter().flatten()
    }
}

struct Cursor {
    pages: Vec<Vec<PlacedLine>>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            y: TOP_Y,
        }
    }

    fn emit(&mut self, text: impl Into<String>, x: f32, advance: f32) {
        if self.y < BOTTOM_MARGIN {
            self.pages.push(Vec::new());
            self.y = TOP_Y;
        }

        if let Some(page) = self.pages.last_mut() {
            page.push(PlacedLine {
                text: text.into(),
                x,
                y: self.y,
            });
        }
        self.y -= advance;
    }

    fn finish(self) -> ReportLayout {
        ReportLayout { pages: self.pages }
    }
}

/// Render the result set to PDF bytes. `file_name` only becomes the
/// document title; nothing is written to disk.
pub fn render_report(results: &[EvaluationResult], file_name: &str) -> Result<Vec<u8>> {
    let layout = ReportLayout::plan(results);
    debug!(
        "Report layout: {} line(s) on {} page(s)",
        layout.line_count(),
        layout.page_count()
    );

    let width: Mm = Pt(PAGE_WIDTH).into();
    let height: Mm = Pt(PAGE_HEIGHT).into();

    let (doc, first_page, first_layer) = PdfDocument::new(file_name, width, height, "Layer 1");
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    for (page_idx, lines) in layout.pages.iter().enumerate() {
        let (page, layer) = if page_idx == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, "Layer 1")
        };
        let layer = doc.get_page(page).get_layer(layer);

        for line in lines {
            layer.use_text(
                line.text.as_str(),
                FONT_SIZE,
                Pt(line.x).into(),
                Pt(line.y).into(),
                &font,
            );
        }
    }

    Ok(doc.save_to_bytes()?)
}

pub fn save_report(results: &[EvaluationResult], path: &Path) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| crate::config::DEFAULT_REPORT_FILE.to_string());

    let bytes = render_report(results, &file_name)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &bytes)?;

    info!("Saved report ({} bytes) to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(keywords: usize) -> EvaluationResult {
        EvaluationResult {
            jd_match: "72%".to_string(),
            missing_keywords: (0..keywords).map(|i| format!("Keyword{}", i)).collect(),
            profile_summary: "Strong backend skills.".to_string(),
        }
    }

    fn expected_lines(results: &[EvaluationResult]) -> usize {
        1 + results
            .iter()
            .map(|r| 4 + r.missing_keywords.len())
            .sum::<usize>()
    }

    #[test]
    fn test_single_record_fits_one_page() {
        let results = vec![record(2)];
        let layout = ReportLayout::plan(&results);

        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.line_count(), expected_lines(&results));

        let texts: Vec<&str> = layout.lines().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Resume Analysis Results",
                "Job Description 1 Match Percentage: 72%",
                "Missing Keywords:",
                "- Keyword0",
                "- Keyword1",
                "Profile Summary:",
                "Strong backend skills.",
            ]
        );
    }

    #[test]
    fn test_cursor_positions() {
        let layout = ReportLayout::plan(&[record(1)]);
        let ys: Vec<f32> = layout.lines().map(|l| l.y).collect();
        assert_eq!(ys, vec![752.0, 722.0, 702.0, 682.0, 662.0, 642.0]);

        let xs: Vec<f32> = layout.lines().map(|l| l.x).collect();
        assert_eq!(xs, vec![30.0, 30.0, 30.0, 50.0, 30.0, 50.0]);
    }

    #[test]
    fn test_record_gap_before_next_record() {
        let layout = ReportLayout::plan(&[record(0), record(0)]);
        let lines: Vec<&PlacedLine> = layout.lines().collect();
        // summary of record 1 at index 4, match line of record 2 at index 5
        assert_eq!(lines[4].y - lines[5].y, LINE_HEIGHT + RECORD_GAP);
        assert_eq!(lines[5].text, "Job Description 2 Match Percentage: 72%");
    }

    #[test]
    fn test_overflow_breaks_pages_without_dropping_lines() {
        let results: Vec<EvaluationResult> = (0..3).map(|_| record(15)).collect();
        let layout = ReportLayout::plan(&results);

        assert!(layout.page_count() > 1);
        assert_eq!(layout.line_count(), expected_lines(&results));

        for page in &layout.pages {
            assert!(!page.is_empty());
            assert_eq!(page[0].y, TOP_Y);
            assert!(page.iter().all(|line| line.y >= BOTTOM_MARGIN));
        }
    }

    #[test]
    fn test_page_break_can_split_a_record() {
        let layout = ReportLayout::plan(&[record(40)]);
        assert_eq!(layout.page_count(), 2);
        assert!(layout.pages[1][0].text.starts_with("- Keyword"));
    }

    #[test]
    fn test_long_summary_is_not_wrapped() {
        let mut result = record(0);
        result.profile_summary = "word ".repeat(200);
        let layout = ReportLayout::plan(&[result.clone()]);
        assert_eq!(layout.line_count(), expected_lines(&[result]));
    }

    #[test]
    fn test_empty_result_set_has_title_only() {
        let layout = ReportLayout::plan(&[]);
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.line_count(), 1);
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_report(&[record(3)], "resume_analysis_results.pdf").unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_save_report_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.pdf");

        save_report(&[record(1)], &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
