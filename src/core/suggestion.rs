//! AI suggestion types and request keys.
//!
//! A suggestion is whatever the AI gateway handed back for one request key.
//! Keys are plain strings built from a question id and a request kind suffix.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A citation attached to a search-grounded suggestion.
///
/// Both fields are optional because the remote API does not guarantee either.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    /// Link to the cited page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Human-readable page title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Source {
    /// Create a source with both fields set.
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self { uri: Some(uri.into()), title: Some(title.into()) }
    }

    /// The uri and a display label, or `None` if the source has no uri.
    ///
    /// The label is the title when present and the uri otherwise.
    pub fn link(&self) -> Option<(&str, &str)> {
        let uri = self.uri.as_deref().filter(|u| !u.is_empty())?;
        let label = self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or(uri);
        Some((label, uri))
    }
}

/// Text produced by the AI gateway, with optional ordered sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSuggestion {
    /// Generated text, or an explanatory message when the call failed
    pub text: String,

    /// Citations, in the order the provider returned them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}

impl AiSuggestion {
    /// Create a suggestion with no sources.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), sources: Vec::new() }
    }

    /// Attach sources.
    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }

    /// Sources that can be rendered as links (those with a uri).
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sources.iter().filter_map(Source::link)
    }
}

/// The kind of AI action a request key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Draft document text from the answer
    Draft,
    /// Research the topic with web-grounded search
    Search,
    /// Rewrite a plan-like answer into a strategic statement
    RefineStrategy,
}

impl RequestKind {
    /// Key suffix appended to the question id.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Draft => "_ai_draft",
            Self::Search => "_ai_search",
            Self::RefineStrategy => "_ai_refine_strategy",
        }
    }

    /// Build the store key for a question.
    pub fn key(self, question_id: &str) -> String {
        format!("{question_id}{}", self.suffix())
    }

    /// Whether the request goes through the gateway's search operation.
    pub const fn uses_search(self) -> bool {
        matches!(self, Self::Search)
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Search => write!(f, "search"),
            Self::RefineStrategy => write!(f, "refine"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_keys() {
        assert_eq!(RequestKind::Draft.key("1.1.a"), "1.1.a_ai_draft");
        assert_eq!(RequestKind::Search.key("1.1.a"), "1.1.a_ai_search");
        assert_eq!(RequestKind::RefineStrategy.key("1.1.a"), "1.1.a_ai_refine_strategy");
    }

    #[test]
    fn test_source_without_uri_has_no_link() {
        let source = Source { uri: None, title: Some("Orphan".to_string()) };
        assert!(source.link().is_none());
    }

    #[test]
    fn test_source_label_falls_back_to_uri() {
        let source = Source { uri: Some("https://iso.org".to_string()), title: None };
        assert_eq!(source.link(), Some(("https://iso.org", "https://iso.org")));
    }

    #[test]
    fn test_links_skip_uriless_sources() {
        let suggestion = AiSuggestion::new("text").with_sources(vec![
            Source::new("https://a.example", "A"),
            Source { uri: None, title: Some("B".to_string()) },
            Source::new("https://c.example", ""),
        ]);

        let links: Vec<_> = suggestion.links().collect();
        assert_eq!(links, vec![("A", "https://a.example"), ("https://c.example", "https://c.example")]);
    }
}
