//! Evaluation records produced from model replies

use serde::{Deserialize, Serialize};

/// One job description's evaluation, exactly as the model reported it.
///
/// `jd_match` is kept as text; the model decides its formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    #[serde(rename = "JD Match")]
    pub jd_match: String,

    #[serde(rename = "MissingKeywords")]
    pub missing_keywords: Vec<String>,

    #[serde(rename = "Profile Summary")]
    pub profile_summary: String,
}

impl EvaluationResult {
    /// Match value with a single trailing percent sign.
    pub fn match_percentage(&self) -> String {
        let value = self.jd_match.trim();
        if value.ends_with('%') {
            value.to_string()
        } else {
            format!("{}%", value)
        }
    }

    pub fn recommendations(&self) -> impl Iterator<Item = String> + '_ {
        self.missing_keywords.iter().map(|keyword| {
            format!(
                "Consider adding a project or experience related to '{}' to your resume.",
                keyword
            )
        })
    }
}

/// Results of one submission, in job description input order.
pub type ResultSet = Vec<EvaluationResult>;

#[cfg(test)]
mod tests {
    use super::*;

    fn result(jd_match: &str, keywords: &[&str]) -> EvaluationResult {
        EvaluationResult {
            jd_match: jd_match.to_string(),
            missing_keywords: keywords.iter().map(|k| k.to_string()).collect(),
            profile_summary: "Summary".to_string(),
        }
    }

    #[test]
    fn test_match_percentage_suffix() {
        assert_eq!(result("72%", &[]).match_percentage(), "72%");
        assert_eq!(result("72", &[]).match_percentage(), "72%");
        assert_eq!(result(" 90 % ", &[]).match_percentage(), "90 %");
    }

    #[test]
    fn test_recommendation_per_keyword() {
        let recs: Vec<String> = result("50%", &["Kubernetes", "Go"]).recommendations().collect();
        assert_eq!(
            recs,
            vec![
                "Consider adding a project or experience related to 'Kubernetes' to your resume.",
                "Consider adding a project or experience related to 'Go' to your resume.",
            ]
        );
    }
}
