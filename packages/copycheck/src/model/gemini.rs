//! Gemini implementation of the GenerativeModel trait.
//!
//! A reference implementation against the Generative Language REST API.
//! One request per analysis: system instruction plus a single user turn,
//! first candidate text returned verbatim.
//!
//! # Example
//!
//! ```rust,ignore
//! use copycheck::{GeminiModel, ModelCredentials};
//!
//! let model = GeminiModel::from_env()?;
//! let report = model.generate(system, prompt).await?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};
use crate::security::ModelCredentials;
use crate::traits::GenerativeModel;

/// Default model for compliance review.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini-backed generative model.
#[derive(Clone)]
pub struct GeminiModel {
    client: Client,
    credentials: ModelCredentials,
    base_url: String,
}

impl GeminiModel {
    /// Create a new Gemini client from credentials.
    pub fn new(credentials: ModelCredentials) -> Self {
        let base_url = credentials
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            client: Client::new(),
            credentials,
            base_url,
        }
    }

    /// Create from the `GEMINI_API_KEY` environment variable with the
    /// default model.
    pub fn from_env() -> AnalysisResult<Self> {
        Ok(Self::new(ModelCredentials::from_env(DEFAULT_MODEL)?))
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Get the configured model name.
    pub fn model(&self) -> &str {
        &self.credentials.model
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: InstructionBlock<'a>,
    contents: Vec<ContentBlock<'a>>,
}

#[derive(Serialize)]
struct InstructionBlock<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
struct ContentBlock<'a> {
    role: &'a str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

#[async_trait]
impl GenerativeModel for GeminiModel {
    async fn generate(&self, system: &str, prompt: &str) -> AnalysisResult<String> {
        let request = GenerateRequest {
            system_instruction: InstructionBlock {
                parts: vec![TextPart { text: system }],
            },
            contents: vec![ContentBlock {
                role: "user",
                parts: vec![TextPart { text: prompt }],
            }],
        };

        debug!(model = %self.credentials.model, prompt_chars = prompt.len(), "generate request");

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.credentials.model
        );
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.credentials.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::Service(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Service(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Service(e.to_string()))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AnalysisError::Service("no candidates in response".to_string()))
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing() {
        let json = serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": "## Report" } ], "role": "model" } }
            ]
        });

        let parsed: GenerateResponse = serde_json::from_value(json).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text);

        assert_eq!(text.as_deref(), Some("## Report"));
    }

    #[test]
    fn test_empty_response_has_no_candidates() {
        let parsed: GenerateResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(parsed.candidates.is_empty());
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateRequest {
            system_instruction: InstructionBlock {
                parts: vec![TextPart { text: "system" }],
            },
            contents: vec![ContentBlock {
                role: "user",
                parts: vec![TextPart { text: "prompt" }],
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "system");
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "prompt");
    }
}
