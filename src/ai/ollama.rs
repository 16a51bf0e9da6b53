//! Ollama local LLM integration.
//!
//! Implements the AIProvider trait for Ollama (local LLM). Drafting only.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::AIProvider;
use crate::core::{AiSuggestion, OllamaConfig};

/// Ollama API provider for local LLM.
pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider.
    ///
    /// `OLLAMA_HOST` and `OLLAMA_MODEL` override the configured values.
    pub fn new(config: &OllamaConfig, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: std::env::var("OLLAMA_HOST").unwrap_or_else(|_| config.base_url.clone()),
            model: std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| config.model.clone()),
        })
    }

    /// Create with a specific base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Create with a specific model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Make a request to the Ollama API.
    async fn request(&self, prompt: &str) -> anyhow::Result<String> {
        let request = OllamaRequest { model: &self.model, prompt, stream: false };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url.trim_end_matches('/')))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Ollama API error ({}): {}", status, body);
        }

        let response: OllamaResponse = response.json().await?;
        Ok(response.response.trim().to_string())
    }
}

#[async_trait]
impl AIProvider for OllamaProvider {
    async fn draft(&self, prompt: &str) -> anyhow::Result<AiSuggestion> {
        self.request(prompt).await.map(AiSuggestion::new)
    }

    fn name(&self) -> &str {
        "ollama"
    }

    async fn is_available(&self) -> bool {
        // Try to reach the Ollama API
        let result = self
            .client
            .get(format!("{}/api/tags", self.base_url.trim_end_matches('/')))
            .timeout(Duration::from_secs(2))
            .send()
            .await;

        result.is_ok()
    }
}

/// Ollama API request structure.
#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Ollama API response structure.
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
}
