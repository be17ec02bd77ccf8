//! Google Gemini minutes generator adapter
//!
//! Implements MinutesGeneratorPort against the Gemini generateContent API.
//! Requests JSON output via `response_mime_type` so the body parses
//! directly into the minutes payload without natural-language extraction.

use crate::config::LlmConfig;
use crate::domain::{MeetingMinutes, MinutesPayload, PromptTemplates};
use crate::error::SummaryError;
use crate::ports::llm::MinutesGeneratorPort;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GOOGLE_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini service implementation.
///
/// Availability is fixed at construction: no credential means every call
/// returns `Unavailable` without a network attempt.
pub struct GeminiService {
    client: Option<Client>,
    api_key: String,
    config: LlmConfig,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    /// Enforce JSON output
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

impl GeminiService {
    /// Create a new Gemini service.
    ///
    /// `api_key: None` (or empty) marks the service unavailable; this is
    /// distinct from a transient request failure and is frozen for the
    /// process lifetime.
    pub fn initialize(api_key: Option<String>, config: LlmConfig) -> Self {
        let api_key = api_key.filter(|k| !k.is_empty());

        let client = match &api_key {
            Some(_) => match Client::builder().timeout(Duration::from_secs(120)).build() {
                Ok(client) => Some(client),
                Err(e) => {
                    log::error!("Failed to create HTTP client: {}", e);
                    None
                }
            },
            None => {
                log::warn!("No Gemini API key supplied; summarization unavailable");
                None
            }
        };

        Self {
            client,
            api_key: api_key.unwrap_or_default(),
            config,
        }
    }

    async fn request_minutes(&self, client: &Client, prompt: String) -> Result<String, SummaryError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_tokens,
                response_mime_type: "application/json".to_string(),
            },
        };

        let model_name = if self.config.model.starts_with("models/") {
            self.config.model.clone()
        } else {
            format!("models/{}", self.config.model)
        };

        log::info!("Calling Gemini generateContent with model: {}", model_name);

        let response = client
            .post(format!(
                "{}/{}:generateContent",
                GOOGLE_API_BASE, model_name
            ))
            .query(&[("key", &self.api_key)])
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummaryError::Service(format!("generateContent request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SummaryError::Service(format!(
                "generateContent failed ({}): {}",
                status, error_text
            )));
        }

        let content_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| SummaryError::MalformedResponse(format!("invalid response body: {}", e)))?;

        let text = content_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| {
                SummaryError::MalformedResponse("no candidates in response".to_string())
            })?;

        Ok(text)
    }
}

/// Parse the model's JSON payload into normalized meeting minutes.
///
/// Accepts `key_decisions` or `decisions`, and action items as strings or
/// `{task, owner}` objects. Anything that does not match the schema is a
/// `MalformedResponse`; the JSON-mime directive is a contract the model is
/// not trusted to honor.
pub fn parse_minutes(body: &str) -> Result<MeetingMinutes, SummaryError> {
    let payload: MinutesPayload = serde_json::from_str(body)
        .map_err(|e| SummaryError::MalformedResponse(e.to_string()))?;
    Ok(MeetingMinutes::from(payload))
}

#[async_trait]
impl MinutesGeneratorPort for GeminiService {
    async fn generate_minutes(&self, transcript: &str) -> Result<MeetingMinutes, SummaryError> {
        let client = match &self.client {
            Some(client) => client,
            None => return Err(SummaryError::Unavailable),
        };

        let prompt = PromptTemplates::render_minutes(transcript);
        let body = self.request_minutes(client, prompt).await?;
        let minutes = parse_minutes(&body)?;

        log::info!(
            "Minutes generated: {} decisions, {} action items",
            minutes.key_decisions.len(),
            minutes.action_items.len()
        );
        Ok(minutes)
    }

    fn is_available(&self) -> bool {
        self.client.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_without_key_is_unavailable() {
        let service = GeminiService::initialize(None, LlmConfig::default());
        assert!(!service.is_available());

        let service = GeminiService::initialize(Some(String::new()), LlmConfig::default());
        assert!(!service.is_available());
    }

    #[test]
    fn test_service_with_key_is_available() {
        let service =
            GeminiService::initialize(Some("test_api_key".to_string()), LlmConfig::default());
        assert!(service.is_available());
    }

    #[tokio::test]
    async fn test_unavailable_service_fails_without_network() {
        let service = GeminiService::initialize(None, LlmConfig::default());
        let err = service.generate_minutes("some transcript").await.unwrap_err();
        assert!(matches!(err, SummaryError::Unavailable));
    }

    #[test]
    fn test_parse_minutes_well_formed() {
        let body = r#"{
            "summary": "Quarterly planning sync.",
            "key_decisions": ["Launch Friday", "Freeze scope", "Hire one more engineer"],
            "action_items": [
                {"task": "prepare deck", "owner": "Alice"},
                {"task": "book the launch room"}
            ]
        }"#;

        let minutes = parse_minutes(body).unwrap();
        assert_eq!(
            minutes.key_decisions,
            vec!["Launch Friday", "Freeze scope", "Hire one more engineer"]
        );
        assert_eq!(minutes.action_items.len(), 2);
        assert_eq!(minutes.action_items[0], "Alice: prepare deck");
        assert_eq!(minutes.action_items[1], "TBD: book the launch room");
    }

    #[test]
    fn test_parse_minutes_string_action_items() {
        let body = r#"{
            "summary": "Standup.",
            "key_decisions": [],
            "action_items": ["Bob: fix the flaky test"]
        }"#;

        let minutes = parse_minutes(body).unwrap();
        assert_eq!(minutes.action_items, vec!["Bob: fix the flaky test"]);
    }

    #[test]
    fn test_parse_minutes_malformed_body() {
        let err = parse_minutes("I'm sorry, I can't produce JSON.").unwrap_err();
        assert!(matches!(err, SummaryError::MalformedResponse(_)));

        // Valid JSON, wrong shape
        let err = parse_minutes(r#"{"notes": "nothing useful"}"#).unwrap_err();
        assert!(matches!(err, SummaryError::MalformedResponse(_)));
    }
}
