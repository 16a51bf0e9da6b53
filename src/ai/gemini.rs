//! Gemini API integration.
//!
//! Implements the AIProvider trait for Google's Gemini models. Search runs
//! the same `generateContent` call with the Google Search tool attached and
//! maps the grounding chunks to sources.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{AIError, AIProvider};
use crate::core::{AiSuggestion, GeminiConfig, Source};

/// Gemini API provider.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// Reads the API key from `GEMINI_API_KEY`, falling back to `API_KEY`.
    pub fn from_env(config: &GeminiConfig, timeout: Duration) -> anyhow::Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("GEMINI_API_KEY not set"))?;

        Self::with_api_key(api_key, config, timeout)
    }

    /// Create with an explicit API key.
    pub fn with_api_key(
        api_key: impl Into<String>,
        config: &GeminiConfig,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key: api_key.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Make a request to the Gemini API.
    async fn request(&self, prompt: &str, grounded: bool) -> anyhow::Result<AiSuggestion> {
        let request = GenerateRequest::new(prompt, grounded);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        let response: GenerateResponse = response.json().await?;
        response.into_suggestion()
    }
}

#[async_trait]
impl AIProvider for GeminiProvider {
    async fn draft(&self, prompt: &str) -> anyhow::Result<AiSuggestion> {
        self.request(prompt, false).await
    }

    async fn search(&self, query: &str) -> anyhow::Result<AiSuggestion> {
        self.request(query, true).await
    }

    fn supports_search(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "gemini"
    }

    async fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// `generateContent` request body.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

impl<'a> GenerateRequest<'a> {
    fn new(prompt: &'a str, grounded: bool) -> Self {
        let tools = if grounded { vec![Tool { google_search: GoogleSearch {} }] } else { Vec::new() };
        Self { contents: vec![Content { role: "user", parts: vec![Part { text: prompt }] }], tools }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

/// `generateContent` response body. Every field is optional on the wire.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct GroundingMetadata {
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GroundingChunk {
    web: Option<Source>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateResponse {
    fn into_suggestion(self) -> anyhow::Result<AiSuggestion> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(AIError::Blocked(reason).into());
            }
            return Err(AIError::NoResponse.into());
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        let sources = candidate
            .grounding_metadata
            .map(|m| m.grounding_chunks.into_iter().filter_map(|c| c.web).collect())
            .unwrap_or_default();

        Ok(AiSuggestion::new(text).with_sources(sources))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_request_body_without_search() {
        let body = serde_json::to_value(GenerateRequest::new("hello", false)).unwrap();
        assert_eq!(body, serde_json::json!({"contents": [{"role": "user", "parts": [{"text": "hello"}]}]}));
    }

    #[test]
    fn test_request_body_with_search_tool() {
        let body = serde_json::to_value(GenerateRequest::new("ISO 9001", true)).unwrap();
        assert_eq!(body["tools"], serde_json::json!([{"google_search": {}}]));
    }

    #[test]
    fn test_parse_grounded_response() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "ISO 9001 is "}, {"text": "a QMS standard."}], "role": "model"},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "https://www.iso.org/standard/62085.html", "title": "iso.org"}},
                        {"web": {"title": "no link"}},
                        {"retrievedContext": {}}
                    ]
                }
            }]
        }"#;

        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        let suggestion = response.into_suggestion().unwrap();

        assert_eq!(suggestion.text, "ISO 9001 is a QMS standard.");
        assert_eq!(suggestion.sources.len(), 2);
        assert_eq!(
            suggestion.links().collect::<Vec<_>>(),
            vec![("iso.org", "https://www.iso.org/standard/62085.html")]
        );
    }

    #[test]
    fn test_parse_blocked_response() {
        let json = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        let err = response.into_suggestion().unwrap_err();
        assert_eq!(err.to_string(), "Request blocked: SAFETY");
    }

    #[test]
    fn test_parse_empty_response() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_suggestion().is_err());
    }

    #[test]
    fn test_endpoint() {
        let config = GeminiConfig {
            base_url: "http://localhost:9999/v1beta/".to_string(),
            model: "gemini-test".to_string(),
        };
        let provider = GeminiProvider::with_api_key("k", &config, Duration::from_secs(1)).unwrap();
        assert_eq!(provider.endpoint(), "http://localhost:9999/v1beta/models/gemini-test:generateContent");
        assert!(provider.supports_search());
    }

    #[test]
    #[serial(env)]
    fn test_creation_fails_without_key() {
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("API_KEY");
        let result = GeminiProvider::from_env(&GeminiConfig::default(), Duration::from_secs(1));
        assert!(result.is_err());
    }

    #[test]
    #[serial(env)]
    fn test_api_key_fallback() {
        std::env::remove_var("GEMINI_API_KEY");
        std::env::set_var("API_KEY", "fallback-key");
        let provider =
            GeminiProvider::from_env(&GeminiConfig::default(), Duration::from_secs(1)).unwrap();
        assert_eq!(provider.api_key, "fallback-key");
        std::env::remove_var("API_KEY");
    }
}
