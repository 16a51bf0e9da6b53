//! Answers files.
//!
//! A TOML or YAML file holding a profile, answers and (optionally) suggestions,
//! used to seed a store for batch compilation. The tool only reads these files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::profile::OrganizationProfile;
use super::store::AnswerStore;
use super::suggestion::AiSuggestion;

/// Errors reading an answers file.
#[derive(Debug, thiserror::Error)]
pub enum AnswersFileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported answers file format: {0} (expected .toml, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),
}

/// Contents of an answers file.
///
/// ```toml
/// [profile]
/// company_name = "Acme Ltd"
///
/// [answers]
/// "1.1.a" = "To be the preferred supplier of ..."
///
/// [suggestions."1.1.a_ai_draft"]
/// text = "..."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswersFile {
    /// Profile fields; blank fields leave the store's values alone
    pub profile: OrganizationProfile,

    /// Answers keyed by question id
    pub answers: BTreeMap<String, String>,

    /// Previously obtained suggestions keyed by request key
    pub suggestions: BTreeMap<String, AiSuggestion>,
}

impl AnswersFile {
    /// Load from disk, picking the format from the file extension.
    pub fn load(path: &Path) -> Result<Self, AnswersFileError> {
        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| AnswersFileError::UnsupportedFormat(path.to_path_buf()))?;

        let content = std::fs::read_to_string(path)
            .map_err(|source| AnswersFileError::Io { path: path.to_path_buf(), source })?;

        match format.as_str() {
            "toml" => toml::from_str(&content)
                .map_err(|source| AnswersFileError::Toml { path: path.to_path_buf(), source }),
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|source| AnswersFileError::Yaml { path: path.to_path_buf(), source }),
            _ => Err(AnswersFileError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Copy the file's contents into a store.
    pub fn apply_to(&self, store: &mut AnswerStore) {
        store.profile_mut().merge_from(&self.profile);
        for (id, text) in &self.answers {
            store.set_answer(id.clone(), text.clone());
        }
        for (key, suggestion) in &self.suggestions {
            store.set_suggestion(key.clone(), suggestion.clone());
        }
        tracing::debug!(
            answers = self.answers.len(),
            suggestions = self.suggestions.len(),
            "Seeded store from answers file"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers.toml");
        std::fs::write(
            &path,
            r#"
                [profile]
                company_name = "Acme Ltd"

                [answers]
                "1.1.a" = "Be the best"

                [suggestions."1.1.a_ai_draft"]
                text = "Drafted"
                sources = [{ uri = "https://iso.org", title = "ISO" }]
            "#,
        )
        .unwrap();

        let file = AnswersFile::load(&path).unwrap();
        assert_eq!(file.profile.company_name, "Acme Ltd");
        assert_eq!(file.answers.get("1.1.a").map(String::as_str), Some("Be the best"));
        assert_eq!(file.suggestions["1.1.a_ai_draft"].sources.len(), 1);
    }

    #[test]
    fn test_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers.yml");
        std::fs::write(
            &path,
            "profile:\n  company_name: Acme Ltd\nanswers:\n  \"1.2.a\": Widgets at Springfield\n",
        )
        .unwrap();

        let file = AnswersFile::load(&path).unwrap();
        assert_eq!(file.profile.company_name, "Acme Ltd");
        assert_eq!(file.answers["1.2.a"], "Widgets at Springfield");
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, "{}").unwrap();

        let err = AnswersFile::load(&path).unwrap_err();
        assert!(matches!(err, AnswersFileError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AnswersFile::load(Path::new("/nonexistent/answers.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/answers.toml"));
    }

    #[test]
    fn test_apply_to_store() {
        let mut file = AnswersFile::default();
        file.profile.company_name = "Acme Ltd".to_string();
        file.answers.insert("2.1.a".to_string(), "Integrity".to_string());

        let mut store = AnswerStore::new();
        store.profile_mut().set_document_effective_date("2026-01-01");
        file.apply_to(&mut store);

        assert_eq!(store.answer("2.1.a"), Some("Integrity"));
        assert_eq!(store.profile().company_name, "Acme Ltd");
        assert_eq!(store.profile().document_effective_date, "2026-01-01");
    }
}
