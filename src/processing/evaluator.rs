//! Submission flow: resume extraction, then one completion per job description
//!
//! Job descriptions are evaluated strictly in order. The first failure ends
//! the submission and no partial result set is returned.

use crate::error::{AtsError, Result};
use crate::input::manager::ResumeUpload;
use crate::input::text_extractor::{PdfExtractor, TextExtractor};
use crate::llm::client::CompletionClient;
use crate::llm::parser::parse_evaluation;
use crate::llm::prompts::{EvaluationRequest, PromptTemplates};
use crate::output::report::ResultSet;
use log::{info, warn};

pub const MAX_JOB_DESCRIPTIONS: usize = 3;

/// Everything the user provided in one submit action.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub resume: Option<ResumeUpload>,
    pub job_descriptions: Vec<String>,
}

impl Submission {
    pub fn new(resume: Option<ResumeUpload>, job_descriptions: Vec<String>) -> Self {
        Self {
            resume,
            job_descriptions,
        }
    }

    /// Job descriptions that will be evaluated, with their 1-based input slot.
    pub fn non_blank_job_descriptions(&self) -> impl Iterator<Item = (usize, &str)> {
        self.job_descriptions
            .iter()
            .enumerate()
            .filter(|(_, jd)| !jd.trim().is_empty())
            .map(|(idx, jd)| (idx + 1, jd.as_str()))
    }
}

pub struct Evaluator<C, E = PdfExtractor> {
    client: C,
    extractor: E,
    templates: PromptTemplates,
}

impl<C: CompletionClient> Evaluator<C, PdfExtractor> {
    pub fn new(client: C) -> Self {
        Self::with_extractor(client, PdfExtractor)
    }
}

impl<C: CompletionClient, E: TextExtractor> Evaluator<C, E> {
    pub fn with_extractor(client: C, extractor: E) -> Self {
        Self {
            client,
            extractor,
            templates: PromptTemplates::default(),
        }
    }

    pub fn with_templates(mut self, templates: PromptTemplates) -> Self {
        self.templates = templates;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn evaluate(&self, submission: &Submission) -> Result<ResultSet> {
        let resume = submission
            .resume
            .as_ref()
            .ok_or_else(|| AtsError::InvalidInput("no resume uploaded".to_string()))?;

        if submission.job_descriptions.len() > MAX_JOB_DESCRIPTIONS {
            return Err(AtsError::InvalidInput(format!(
                "at most {} job descriptions can be evaluated, got {}",
                MAX_JOB_DESCRIPTIONS,
                submission.job_descriptions.len()
            )));
        }

        info!("Extracting text from {}", resume.file_name);
        let resume_text = self.extractor.extract(&resume.bytes)?;

        let mut results = ResultSet::new();
        for (slot, job_description) in submission.non_blank_job_descriptions() {
            info!("Evaluating job description {}", slot);

            let request = EvaluationRequest::new(resume_text.as_str(), job_description);
            let prompt = self.templates.render_ats_evaluation(&request);
            let reply = self.client.complete(&prompt).await?;

            let result = parse_evaluation(&reply).map_err(|e| {
                warn!("Job description {}: unusable model reply: {}", slot, e);
                AtsError::Parse(e)
            })?;
            results.push(result);
        }

        info!("Evaluated {} job description(s)", results.len());
        Ok(results)
    }
}
