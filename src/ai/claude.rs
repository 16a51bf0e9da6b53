//! Claude API integration.
//!
//! Implements the AIProvider trait for Claude. Drafting only.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::AIProvider;
use crate::core::AiSuggestion;

const SYSTEM_PROMPT: &str = "You are an assistant helping a company document its ISO 9001 \
Quality Management System. Write clear, professional text suitable for inclusion in a \
controlled QMS document. Do not include markdown code fences.";

/// Claude API provider.
pub struct ClaudeProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl ClaudeProvider {
    /// Create a new Claude provider.
    ///
    /// Reads API key from ANTHROPIC_API_KEY environment variable.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| anyhow::anyhow!("ANTHROPIC_API_KEY not set"))?;

        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            model: "claude-sonnet-4-20250514".to_string(),
        })
    }

    /// Create with a specific model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Make a request to the Claude API.
    async fn request(&self, user_message: &str) -> anyhow::Result<String> {
        let request = ClaudeRequest {
            model: &self.model,
            max_tokens: 2048,
            system: SYSTEM_PROMPT,
            messages: vec![Message { role: "user", content: user_message }],
        };

        let response = self
            .client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        let response: ClaudeResponse = response.json().await?;
        response.text().ok_or_else(|| anyhow::anyhow!("No response from Claude"))
    }
}

#[async_trait]
impl AIProvider for ClaudeProvider {
    async fn draft(&self, prompt: &str) -> anyhow::Result<AiSuggestion> {
        self.request(prompt).await.map(AiSuggestion::new)
    }

    fn name(&self) -> &str {
        "claude"
    }

    async fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Claude API request structure.
#[derive(Debug, Serialize)]
struct ClaudeRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

/// Message in a Claude request.
#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

/// Claude API response structure.
#[derive(Debug, Deserialize)]
struct ClaudeResponse {
    content: Vec<ContentBlock>,
}

/// Content block in a Claude response.
#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

impl ClaudeResponse {
    /// Concatenated text blocks, or `None` if there were none.
    fn text(self) -> Option<String> {
        let text: String = self.content.into_iter().filter_map(|c| c.text).collect();
        (!text.is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(env)]
    fn test_claude_provider_creation_fails_without_key() {
        std::env::remove_var("ANTHROPIC_API_KEY");
        let result = ClaudeProvider::new(Duration::from_secs(1));
        assert!(result.is_err());
    }

    #[test]
    #[serial(env)]
    fn test_claude_is_draft_only() {
        std::env::set_var("ANTHROPIC_API_KEY", "test-key");
        let provider = ClaudeProvider::new(Duration::from_secs(1)).unwrap().with_model("claude-x");
        std::env::remove_var("ANTHROPIC_API_KEY");

        assert_eq!(provider.name(), "claude");
        assert_eq!(provider.model, "claude-x");
        assert!(!provider.supports_search());
    }

    #[test]
    fn test_response_text_joins_blocks() {
        let json = r#"{"content": [{"type": "text", "text": "Our "}, {"type": "text", "text": "purpose."}]}"#;
        let response: ClaudeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("Our purpose."));

        let empty: ClaudeResponse = serde_json::from_str(r#"{"content": []}"#).unwrap();
        assert!(empty.text().is_none());
    }
}
