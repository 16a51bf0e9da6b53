//! Configuration management for QMSDraft.
//!
//! Handles loading and saving configuration from TOML files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::profile::DEFAULT_EFFECTIVE_DATE;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// UI/TUI settings
    pub ui: UiConfig,

    /// Document export settings
    pub export: ExportConfig,

    /// AI settings
    pub ai: AiConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Effective date prefilled into new sessions
    pub default_effective_date: String,
}

/// UI/TUI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme name (built-in: default, dracula, nord)
    pub theme: String,
}

/// Where and how compiled documents are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output directory (`~` is expanded)
    pub dir: String,

    /// File extension without the dot
    pub extension: String,
}

/// AI integration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Whether AI features are enabled
    pub enabled: bool,

    /// Providers to try, in order (gemini, claude, ollama)
    pub providers: Vec<String>,

    /// Claude model override
    pub model: Option<String>,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,

    /// Gemini-specific settings
    pub gemini: GeminiConfig,

    /// Ollama-specific settings
    pub ollama: OllamaConfig,
}

/// Gemini configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API base URL
    pub base_url: String,

    /// Model to use
    pub model: String,
}

/// Ollama configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    /// Ollama server URL
    pub base_url: String,

    /// Model to use
    pub model: String,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Looks for config in:
    /// 1. `.qmsdraft.toml` in current directory
    /// 2. `~/.config/qmsdraft/config.toml`
    /// 3. Falls back to defaults
    pub fn load() -> anyhow::Result<Self> {
        let local_config = PathBuf::from(".qmsdraft.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(config_dir) = Self::config_dir() {
            let global_config = config_dir.join("config.toml");
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("qmsdraft"))
    }

    /// Resolved export directory.
    pub fn export_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.export.dir).into_owned())
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { default_effective_date: DEFAULT_EFFECTIVE_DATE.to_string() }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { theme: "default".to_string() }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { dir: ".".to_string(), extension: "md".to_string() }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            providers: vec!["gemini".to_string(), "claude".to_string(), "ollama".to_string()],
            model: None,
            timeout_secs: 60,
            gemini: GeminiConfig::default(),
            ollama: OllamaConfig::default(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self { base_url: "http://localhost:11434".to_string(), model: "llama3.2".to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.default_effective_date, "To be determined");
        assert_eq!(config.ui.theme, "default");
        assert_eq!(config.export.extension, "md");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[export]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            default_effective_date = "2026-01-01"

            [ui]
            theme = "nord"

            [export]
            dir = "out"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_effective_date, "2026-01-01");
        assert_eq!(config.ui.theme, "nord");
        assert_eq!(config.export.dir, "out");
        assert_eq!(config.export.extension, "md");
    }

    #[test]
    fn test_export_dir_expands_tilde() {
        let mut config = Config::default();
        config.export.dir = "~/qms".to_string();
        let dir = config.export_dir();
        assert!(!dir.to_string_lossy().starts_with('~'));
        assert!(dir.ends_with("qms"));
    }

    #[test]
    fn test_ai_config_deserialization() {
        let toml_str = r#"
            [ai]
            providers = ["ollama"]
            timeout_secs = 5

            [ai.ollama]
            model = "mistral"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ai.providers, vec!["ollama"]);
        assert_eq!(config.ai.timeout_secs, 5);
        assert_eq!(config.ai.ollama.model, "mistral");
        assert_eq!(config.ai.ollama.base_url, "http://localhost:11434");
        assert!(config.ai.enabled);
    }
}
