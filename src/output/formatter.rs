//! On-screen rendering of a result set

use crate::config::OutputFormat;
use crate::error::{AtsError, Result};
use crate::output::report::EvaluationResult;
use colored::{Color, Colorize};

/// Trait for formatting a result set
pub trait OutputFormatter {
    fn format_results(&self, results: &[EvaluationResult]) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// Pretty or compact JSON, keyed the same way as the model reply
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{}\n", title.color(color).bold())
        } else {
            format!("\n{}\n", title)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_results(&self, results: &[EvaluationResult]) -> Result<String> {
        let mut output = String::new();

        for (idx, result) in results.iter().enumerate() {
            let n = idx + 1;

            output.push_str(&self.format_header(
                &format!("Job Description {} Match Percentage", n),
                1,
            ));
            output.push_str(&format!("{}\n", result.match_percentage()));

            output.push_str(&self.format_header(
                &format!("Missing Keywords for Job Description {}", n),
                2,
            ));
            output.push_str(&format!("{}\n", result.missing_keywords.join(", ")));

            output.push_str(&self.format_header(
                &format!("Profile Summary for Job Description {}", n),
                2,
            ));
            output.push_str(&format!("{}\n", result.profile_summary));

            if !result.missing_keywords.is_empty() {
                output.push_str(&self.format_header("Interactive Recommendations", 3));
                for recommendation in result.recommendations() {
                    output.push_str(&format!("{}\n", recommendation));
                }
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_results(&self, results: &[EvaluationResult]) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(results)
        } else {
            serde_json::to_string(results)
        };
        json.map_err(|e| AtsError::Report(format!("Failed to serialize results: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

pub fn formatter_for(format: OutputFormat, use_colors: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<EvaluationResult> {
        vec![
            EvaluationResult {
                jd_match: "72%".to_string(),
                missing_keywords: vec!["Kubernetes".to_string(), "Go".to_string()],
                profile_summary: "Strong backend skills.".to_string(),
            },
            EvaluationResult {
                jd_match: "90".to_string(),
                missing_keywords: vec![],
                profile_summary: "Great fit.".to_string(),
            },
        ]
    }

    #[test]
    fn test_console_output() {
        let output = ConsoleFormatter::new(false).format_results(&results()).unwrap();

        assert!(output.contains("Job Description 1 Match Percentage\n72%\n"));
        assert!(output.contains("Missing Keywords for Job Description 1\nKubernetes, Go\n"));
        assert!(output.contains("Profile Summary for Job Description 2\nGreat fit.\n"));
        assert!(output.contains("Job Description 2 Match Percentage\n90%\n"));
        assert!(output.contains(
            "Consider adding a project or experience related to 'Kubernetes' to your resume."
        ));
        assert_eq!(output.matches("Interactive Recommendations").count(), 1);
    }

    #[test]
    fn test_json_output_uses_reply_keys() {
        let output = JsonFormatter::new(false).format_results(&results()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value[0]["JD Match"], "72%");
        assert_eq!(value[0]["MissingKeywords"][1], "Go");
        assert_eq!(value[1]["Profile Summary"], "Great fit.");
    }

    #[test]
    fn test_formatter_selection() {
        assert_eq!(formatter_for(OutputFormat::Json, true).supports_format(), OutputFormat::Json);
        assert_eq!(
            formatter_for(OutputFormat::Console, false).supports_format(),
            OutputFormat::Console
        );
    }
}
