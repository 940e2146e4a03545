//! ATS evaluation prompt

use log::debug;
use serde::{Deserialize, Serialize};

pub const KEY_JD_MATCH: &str = "JD Match";
pub const KEY_MISSING_KEYWORDS: &str = "MissingKeywords";
pub const KEY_PROFILE_SUMMARY: &str = "Profile Summary";

const RESUME_PLACEHOLDER: &str = "{resume}";
const JOB_PLACEHOLDER: &str = "{jd}";

/// Prompt template with `{resume}` and `{jd}` placeholders
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub ats_evaluation: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            ats_evaluation: ATS_EVALUATION_TEMPLATE.to_string(),
        }
    }
}

/// One (resume, job description) pair to evaluate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub resume_text: String,
    pub job_description: String,
}

impl EvaluationRequest {
    pub fn new(resume_text: impl Into<String>, job_description: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            job_description: job_description.into(),
        }
    }
}

impl PromptTemplates {
    /// Substitute both texts into the template in a single pass.
    ///
    /// Only placeholders in the template itself are replaced; placeholder-like
    /// text inside the resume or job description is inserted literally.
    pub fn render_ats_evaluation(&self, request: &EvaluationRequest) -> String {
        let template = self.ats_evaluation.as_str();
        let mut prompt = String::with_capacity(
            template.len() + request.resume_text.len() + request.job_description.len(),
        );

        let mut rest = template;
        while let Some(open) = rest.find('{') {
            prompt.push_str(&rest[..open]);
            let tail = &rest[open..];

            if tail.starts_with(RESUME_PLACEHOLDER) {
                prompt.push_str(&request.resume_text);
                rest = &tail[RESUME_PLACEHOLDER.len()..];
            } else if tail.starts_with(JOB_PLACEHOLDER) {
                prompt.push_str(&request.job_description);
                rest = &tail[JOB_PLACEHOLDER.len()..];
            } else {
                prompt.push('{');
                rest = &tail[1..];
            }
        }
        prompt.push_str(rest);

        debug!(
            "Rendered prompt: {} chars (resume {}, job description {})",
            prompt.len(),
            request.resume_text.len(),
            request.job_description.len()
        );

        prompt
    }
}

const ATS_EVALUATION_TEMPLATE: &str = r#"Act as a skilled and experienced ATS (Applicant Tracking System) with deep knowledge of the tech field: software engineering, data science, data analysis, and big data engineering. Evaluate the resume below against the job description. The job market is very competitive, so give the best possible help for improving the resume. Assign a percentage match based on the job description and identify the missing keywords with high accuracy.

Resume: {resume}
Job Description: {jd}

Respond with exactly one JSON object and nothing else, no prose and no code fences, using this structure:
{"JD Match":"%", "MissingKeywords":[], "Profile Summary":""}
"#;
