//! Completion service client
//!
//! The evaluator only depends on [`CompletionClient`]; [`GeminiClient`] is the
//! production implementation backed by the Gemini `generateContent` endpoint.
//! Calls are made once, with no retries.

use crate::config::{ApiKey, CompletionConfig};
use crate::error::{AtsError, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` and return the model's raw text output.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

pub struct GeminiClient {
    client: Client,
    config: CompletionConfig,
    api_key: ApiKey,
}

impl GeminiClient {
    pub fn new(config: CompletionConfig, api_key: ApiKey) -> Self {
        Self {
            client: Client::new(),
            config,
            api_key,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        info!("Requesting completion from {}", self.config.model);
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| AtsError::ExternalService(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AtsError::ExternalService(format!(
                "API error {}: {}",
                status,
                body.trim()
            )));
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            AtsError::ExternalService(format!("Failed to decode response: {}", e))
        })?;

        let text = extract_text(body)?;
        debug!("Completion returned {} chars", text.len());
        Ok(text)
    }
}

fn extract_text(response: GenerateResponse) -> Result<String> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AtsError::ExternalService("Response has no candidates".to_string()))?;

    let text: String = candidate
        .content
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(AtsError::ExternalService(format!(
            "Model returned no text (finish reason: {})",
            reason
        )));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> GenerateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: "hello" }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]}));
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response = decode(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"JD"},{"text":" Match\"}"}],"role":"model"},"finishReason":"STOP"}]}"#,
        );
        assert_eq!(extract_text(response).unwrap(), "{\"JD Match\"}");
    }

    #[test]
    fn test_extract_text_without_candidates() {
        let result = extract_text(decode(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#));
        assert!(matches!(result, Err(AtsError::ExternalService(_))));
    }

    #[test]
    fn test_extract_text_reports_finish_reason() {
        let result = extract_text(decode(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#));
        match result {
            Err(AtsError::ExternalService(message)) => assert!(message.contains("SAFETY")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_url_uses_model_and_endpoint() {
        let config = CompletionConfig {
            endpoint: "http://localhost:8080/v1beta/".to_string(),
            model: "gemini-test".to_string(),
            ..CompletionConfig::default()
        };
        let client = GeminiClient::new(config, ApiKey::new("k").unwrap());
        assert_eq!(
            client.url(),
            "http://localhost:8080/v1beta/models/gemini-test:generateContent"
        );
        assert_eq!(client.model(), "gemini-test");
    }
}
