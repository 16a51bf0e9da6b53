//! The answer store.
//!
//! Holds everything the user has entered during a session: answers keyed by
//! question id, AI suggestions keyed by request key, busy flags keyed by
//! action key, and the organization profile. Every operation is synchronous
//! and total; the store is owned by whoever drives the session and lent out
//! by reference.

use std::collections::HashMap;

use super::profile::OrganizationProfile;
use super::suggestion::AiSuggestion;

/// Session state for one drafting session.
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    answers: HashMap<String, String>,
    suggestions: HashMap<String, AiSuggestion>,
    loading: HashMap<String, bool>,
    profile: OrganizationProfile,
}

impl AnswerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a prefilled profile.
    pub fn with_profile(profile: OrganizationProfile) -> Self {
        Self { profile, ..Self::default() }
    }

    /// Create or replace the answer for a question.
    pub fn set_answer(&mut self, question_id: impl Into<String>, text: impl Into<String>) {
        self.answers.insert(question_id.into(), text.into());
    }

    /// The stored answer for a question, if any.
    pub fn answer(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    /// Number of questions with a non-blank answer.
    pub fn answered_count<'a>(&self, question_ids: impl IntoIterator<Item = &'a str>) -> usize {
        question_ids
            .into_iter()
            .filter(|id| self.answer(id).is_some_and(|a| !a.trim().is_empty()))
            .count()
    }

    /// Create or replace the suggestion stored under a key.
    pub fn set_suggestion(&mut self, key: impl Into<String>, suggestion: AiSuggestion) {
        self.suggestions.insert(key.into(), suggestion);
    }

    /// The suggestion stored under a key, if any.
    pub fn suggestion(&self, key: &str) -> Option<&AiSuggestion> {
        self.suggestions.get(key)
    }

    /// Mark an action as busy or idle.
    pub fn set_loading(&mut self, key: impl Into<String>, loading: bool) {
        self.loading.insert(key.into(), loading);
    }

    /// Whether an action is busy. Unknown keys are idle.
    pub fn is_loading(&self, key: &str) -> bool {
        self.loading.get(key).copied().unwrap_or(false)
    }

    /// Whether any action is busy.
    pub fn any_loading(&self) -> bool {
        self.loading.values().any(|busy| *busy)
    }

    /// The organization profile.
    pub fn profile(&self) -> &OrganizationProfile {
        &self.profile
    }

    /// Mutable access to the organization profile.
    pub fn profile_mut(&mut self) -> &mut OrganizationProfile {
        &mut self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::suggestion::Source;

    #[test]
    fn test_answer_read_after_write() {
        let mut store = AnswerStore::new();
        assert_eq!(store.answer("1.1.a"), None);

        store.set_answer("1.1.a", "first");
        assert_eq!(store.answer("1.1.a"), Some("first"));

        store.set_answer("1.1.a", "second");
        assert_eq!(store.answer("1.1.a"), Some("second"));
    }

    #[test]
    fn test_empty_answer_is_stored_verbatim() {
        let mut store = AnswerStore::new();
        store.set_answer("1.2.a", "");
        assert_eq!(store.answer("1.2.a"), Some(""));
    }

    #[test]
    fn test_suggestions_are_independent_per_key() {
        let mut store = AnswerStore::new();
        store.set_suggestion("1.1.a_ai_draft", AiSuggestion::new("draft"));
        store.set_suggestion(
            "1.1.a_ai_search",
            AiSuggestion::new("search").with_sources(vec![Source::new("https://iso.org", "ISO")]),
        );

        assert_eq!(store.suggestion("1.1.a_ai_draft").map(|s| s.text.as_str()), Some("draft"));
        assert_eq!(store.suggestion("1.1.a_ai_search").map(|s| s.sources.len()), Some(1));
        assert!(store.suggestion("1.1.b_ai_draft").is_none());
    }

    #[test]
    fn test_loading_defaults_to_idle() {
        let mut store = AnswerStore::new();
        assert!(!store.is_loading("1.1.a_ai_draft"));
        assert!(!store.any_loading());

        store.set_loading("1.1.a_ai_draft", true);
        assert!(store.is_loading("1.1.a_ai_draft"));
        assert!(!store.is_loading("1.1.a_ai_search"));
        assert!(store.any_loading());

        store.set_loading("1.1.a_ai_draft", false);
        assert!(!store.is_loading("1.1.a_ai_draft"));
        assert!(!store.any_loading());
    }

    #[test]
    fn test_answered_count_ignores_blank_answers() {
        let mut store = AnswerStore::new();
        store.set_answer("a", "yes");
        store.set_answer("b", "  ");
        assert_eq!(store.answered_count(["a", "b", "c"]), 1);
    }

    #[test]
    fn test_profile_setters_visible_through_store() {
        let mut store = AnswerStore::new();
        store.profile_mut().set_company_name("Acme Ltd");
        assert_eq!(store.profile().company_name, "Acme Ltd");
    }
}
