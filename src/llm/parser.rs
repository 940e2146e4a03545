//! Parsing of the model's JSON reply into an `EvaluationResult`

use crate::error::ParseError;
use crate::llm::prompts::{KEY_JD_MATCH, KEY_MISSING_KEYWORDS, KEY_PROFILE_SUMMARY};
use crate::output::report::EvaluationResult;
use serde_json::{Map, Value};

/// Parse a raw completion. Every key is checked here so a malformed reply
/// fails at the boundary rather than when the result is displayed.
pub fn parse_evaluation(raw: &str) -> Result<EvaluationResult, ParseError> {
    let body = strip_code_fence(raw);

    let value: Value =
        serde_json::from_str(body).map_err(|e| ParseError::InvalidJson(e.to_string()))?;
    let object = value.as_object().ok_or(ParseError::NotAnObject)?;

    let jd_match = string_field(object, KEY_JD_MATCH)?;
    let profile_summary = string_field(object, KEY_PROFILE_SUMMARY)?;

    let missing_keywords = match object.get(KEY_MISSING_KEYWORDS) {
        None => return Err(ParseError::MissingKey(KEY_MISSING_KEYWORDS)),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or(ParseError::WrongType(KEY_MISSING_KEYWORDS))
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(ParseError::WrongType(KEY_MISSING_KEYWORDS)),
    };

    Ok(EvaluationResult {
        jd_match,
        missing_keywords,
        profile_summary,
    })
}

fn string_field(object: &Map<String, Value>, key: &'static str) -> Result<String, ParseError> {
    match object.get(key) {
        None => Err(ParseError::MissingKey(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ParseError::WrongType(key)),
    }
}

/// Remove one surrounding Markdown code fence (```` ``` ```` or ```` ```json ````).
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = inner.strip_suffix("```") else {
        return trimmed;
    };

    // Drop the info string (e.g. "json") on the opening fence line
    match inner.find('\n') {
        Some(newline) => inner[newline + 1..].trim(),
        None => inner.trim(),
    }
}
