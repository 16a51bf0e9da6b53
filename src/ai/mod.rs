//! AI integration module.
//!
//! Drafts document text and researches questions using Gemini, Claude or a
//! local Ollama server.
//!
//! ## Features
//!
//! - Drafting from a rendered prompt
//! - Web-grounded search with cited sources (Gemini)
//! - Provider fallback chain built from configuration
//! - Per-key background requests with latest-wins semantics

#[cfg(feature = "ai")]
mod claude;
#[cfg(feature = "ai")]
mod gemini;
#[cfg(feature = "ai")]
mod ollama;
mod tasks;

#[cfg(feature = "ai")]
pub use claude::ClaudeProvider;
#[cfg(feature = "ai")]
pub use gemini::GeminiProvider;
#[cfg(feature = "ai")]
pub use ollama::OllamaProvider;
pub use tasks::{Completion, RequestTracker};

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{AiConfig, AiSuggestion};

/// Shown in place of a draft when no provider is configured.
pub const DRAFT_DISABLED: &str = "API Key not configured. AI drafting disabled.";

/// Shown in place of search results when no search-capable provider is configured.
pub const SEARCH_DISABLED: &str = "API Key not configured. AI search disabled.";

/// Trait for AI providers.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Generate text for a prompt.
    async fn draft(&self, prompt: &str) -> anyhow::Result<AiSuggestion>;

    /// Answer a query with web grounding, returning cited sources.
    async fn search(&self, _query: &str) -> anyhow::Result<AiSuggestion> {
        Err(AIError::Unsupported(self.name().to_string()).into())
    }

    /// Whether `search` is implemented.
    fn supports_search(&self) -> bool {
        false
    }

    /// Get the provider name.
    fn name(&self) -> &str;

    /// Check if the provider is available.
    async fn is_available(&self) -> bool;
}

/// AI error types.
#[derive(Debug, thiserror::Error)]
pub enum AIError {
    #[error("Provider not available: {0}")]
    ProviderNotAvailable(String),

    #[error("Search is not supported by {0}")]
    Unsupported(String),

    #[error("Request blocked: {0}")]
    Blocked(String),

    #[error("No response from AI")]
    NoResponse,
}

/// AI gateway with fallback support.
///
/// Both operations are total: a missing configuration yields a fixed
/// disabled message and a failure yields an `Error from AI...` message, so
/// callers can store whatever comes back.
#[derive(Clone, Default)]
pub struct AiGateway {
    providers: Vec<Arc<dyn AIProvider>>,
}

impl std::fmt::Debug for AiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("AiGateway").field("providers", &names).finish()
    }
}

impl AiGateway {
    /// A gateway with no providers. Every call returns the disabled text.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Build a gateway from an explicit provider list, tried in order.
    pub fn with_providers(providers: Vec<Arc<dyn AIProvider>>) -> Self {
        Self { providers }
    }

    /// Build the provider chain from configuration.
    ///
    /// Loads `.env` first so API keys can live next to the project. Providers
    /// without credentials, or that are unreachable, are skipped.
    pub async fn from_config(config: &AiConfig) -> Self {
        if !config.enabled {
            tracing::debug!("AI disabled in configuration");
            return Self::disabled();
        }

        let _ = dotenvy::dotenv();

        let mut providers: Vec<Arc<dyn AIProvider>> = Vec::new();
        for name in &config.providers {
            match build_provider(name, config) {
                Ok(Some(provider)) => {
                    if provider.is_available().await {
                        providers.push(provider);
                    } else {
                        tracing::debug!(provider = %name, "Provider not available, skipping");
                    }
                }
                Ok(None) => tracing::warn!(provider = %name, "Unknown AI provider in config"),
                Err(e) => tracing::debug!(provider = %name, error = %e, "Provider not configured"),
            }
        }

        Self { providers }
    }

    /// Check if any AI provider is available.
    pub fn is_available(&self) -> bool {
        !self.providers.is_empty()
    }

    /// Check if any provider can run web-grounded searches.
    pub fn can_search(&self) -> bool {
        self.providers.iter().any(|p| p.supports_search())
    }

    /// Get the active provider name.
    pub fn active_provider(&self) -> Option<&str> {
        self.providers.first().map(|p| p.name())
    }

    /// Names of all configured providers, in fallback order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Draft text for a prompt. Never fails.
    pub async fn draft(&self, prompt: &str) -> AiSuggestion {
        if self.providers.is_empty() {
            return AiSuggestion::new(DRAFT_DISABLED);
        }

        let mut last_error = None;
        for provider in &self.providers {
            match provider.draft(prompt).await {
                Ok(result) => return result,
                Err(e) => {
                    tracing::warn!(provider = provider.name(), error = %e, "Provider failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        AiSuggestion::new(format!("Error from AI: {}", describe(last_error)))
    }

    /// Search with web grounding. Never fails.
    pub async fn search(&self, query: &str) -> AiSuggestion {
        let searchers: Vec<_> = self.providers.iter().filter(|p| p.supports_search()).collect();
        if searchers.is_empty() {
            return AiSuggestion::new(SEARCH_DISABLED);
        }

        let mut last_error = None;
        for provider in searchers {
            match provider.search(query).await {
                Ok(result) => return result,
                Err(e) => {
                    tracing::warn!(provider = provider.name(), error = %e, "Provider failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        AiSuggestion::new(format!("Error from AI search: {}", describe(last_error)))
    }
}

fn describe(error: Option<anyhow::Error>) -> String {
    error.map_or_else(|| AIError::NoResponse.to_string(), |e| e.to_string())
}

#[cfg(feature = "ai")]
fn build_provider(name: &str, config: &AiConfig) -> anyhow::Result<Option<Arc<dyn AIProvider>>> {
    let timeout = std::time::Duration::from_secs(config.timeout_secs);
    let provider: Arc<dyn AIProvider> = match name.to_ascii_lowercase().as_str() {
        "gemini" => Arc::new(GeminiProvider::from_env(&config.gemini, timeout)?),
        "claude" => {
            let mut claude = ClaudeProvider::new(timeout)?;
            if let Some(model) = &config.model {
                claude = claude.with_model(model.clone());
            }
            Arc::new(claude)
        }
        "ollama" => Arc::new(OllamaProvider::new(&config.ollama, timeout)?),
        _ => return Ok(None),
    };
    Ok(Some(provider))
}

#[cfg(not(feature = "ai"))]
fn build_provider(name: &str, _config: &AiConfig) -> anyhow::Result<Option<Arc<dyn AIProvider>>> {
    Err(AIError::ProviderNotAvailable(format!("{name} (built without the `ai` feature)")).into())
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted providers for gateway and tracker tests.

    use std::time::Duration;

    use super::*;
    use crate::core::Source;

    /// Echoes the prompt back after an optional delay.
    pub struct EchoProvider {
        pub name: &'static str,
        pub delay: Duration,
        pub search: bool,
    }

    impl EchoProvider {
        pub fn new(name: &'static str) -> Self {
            Self { name, delay: Duration::ZERO, search: false }
        }
    }

    #[async_trait]
    impl AIProvider for EchoProvider {
        async fn draft(&self, prompt: &str) -> anyhow::Result<AiSuggestion> {
            tokio::time::sleep(self.delay).await;
            Ok(AiSuggestion::new(format!("{}: {prompt}", self.name)))
        }

        async fn search(&self, query: &str) -> anyhow::Result<AiSuggestion> {
            tokio::time::sleep(self.delay).await;
            Ok(AiSuggestion::new(format!("found {query}"))
                .with_sources(vec![Source::new("https://iso.org", "ISO")]))
        }

        fn supports_search(&self) -> bool {
            self.search
        }

        fn name(&self) -> &str {
            self.name
        }

        async fn is_available(&self) -> bool {
            true
        }
    }

    /// Always fails with the given message.
    pub struct FailingProvider(pub &'static str);

    #[async_trait]
    impl AIProvider for FailingProvider {
        async fn draft(&self, _prompt: &str) -> anyhow::Result<AiSuggestion> {
            anyhow::bail!("{}", self.0)
        }

        async fn search(&self, _query: &str) -> anyhow::Result<AiSuggestion> {
            anyhow::bail!("{}", self.0)
        }

        fn supports_search(&self) -> bool {
            true
        }

        fn name(&self) -> &str {
            "failing"
        }

        async fn is_available(&self) -> bool {
            true
        }
    }
}
