//! Static question and document catalog.
//!
//! Sections group the questions a user answers and name the documents those
//! answers feed. Prompt templates and document compile strategies are plain
//! data (format strings and enum tags) rather than stored closures.

mod guidance;
mod sections;

pub use guidance::{
    DASHBOARD_GETTING_STARTED, DASHBOARD_TIPS, ISO_BENEFITS, ISO_OVERVIEW, ISO_PRINCIPLES,
    REFINE_STRATEGY_PROMPT, STRATEGY_VS_PLAN_EXPLANATION,
};
pub use sections::{CODE_OF_CONDUCT, QUALITY_MANUAL, SECTIONS};

use crate::core::RequestKind;

/// Placeholder substituted into prompt templates.
const ANSWER_SLOT: &str = "{answer}";

/// Errors looking things up in the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown question id: {0}")]
    UnknownQuestion(String),

    #[error("unknown document id: {0}")]
    UnknownDocument(String),

    #[error("unknown section id: {0}")]
    UnknownSection(String),
}

/// Input widget shape for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Single line
    Text,
    /// Multi-line
    TextArea,
}

/// A format string with an `{answer}` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate(&'static str);

impl PromptTemplate {
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// Substitute the answer into the template.
    pub fn render(&self, answer: &str) -> String {
        self.0.replace(ANSWER_SLOT, answer)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// One question in a section.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// Identifier, e.g. "1.1.a"
    pub id: &'static str,
    /// Question text
    pub text: &'static str,
    /// Input shape
    pub input: InputKind,
    /// Guidance shown under the question
    pub help_text: Option<&'static str>,
    /// Example answer shown while empty
    pub placeholder: Option<&'static str>,
    /// Prompt for AI drafting
    pub draft_prompt: Option<PromptTemplate>,
    /// Query for AI web search
    pub search_query: Option<PromptTemplate>,
    /// Whether the answer is checked for plan-like wording
    pub checks_strategy: bool,
}

impl Question {
    /// Drafting prompt for the current answer, if the question supports drafting.
    pub fn draft_prompt_for(&self, answer: &str) -> Option<String> {
        self.draft_prompt.map(|t| t.render(answer))
    }

    /// Search query for the current answer. An empty answer searches on the
    /// question text instead.
    pub fn search_query_for(&self, answer: &str) -> Option<String> {
        let subject = if answer.is_empty() { self.text } else { answer };
        self.search_query.map(|t| t.render(subject))
    }

    /// Strategy refinement prompt, for strategy-checked questions with an answer.
    pub fn refine_prompt_for(&self, answer: &str) -> Option<String> {
        (self.checks_strategy && !answer.is_empty()).then(|| REFINE_STRATEGY_PROMPT.render(answer))
    }

    /// Gateway input for a request kind, or `None` if the question does not offer it.
    pub fn request_input(&self, kind: RequestKind, answer: &str) -> Option<String> {
        match kind {
            RequestKind::Draft => self.draft_prompt_for(answer),
            RequestKind::Search => self.search_query_for(answer),
            RequestKind::RefineStrategy => self.refine_prompt_for(answer),
        }
    }
}

/// Which compile strategy a document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    QualityManual,
    CodeOfConduct,
}

/// A document assembled from stored answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentDefinition {
    /// Identifier, e.g. "L1-MAN-001"
    pub id: &'static str,
    /// Title, e.g. "Quality Manual"
    pub title: &'static str,
    /// Revision label, e.g. "Rev 0"
    pub revision: &'static str,
    /// Compile strategy
    pub kind: DocumentKind,
}

/// A group of questions and the documents they feed.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub questions: &'static [Question],
    pub documents: &'static [DocumentDefinition],
}

/// All sections in presentation order.
pub fn sections() -> &'static [Section] {
    SECTIONS
}

/// Look up a section.
pub fn section(id: &str) -> Result<&'static Section, CatalogError> {
    SECTIONS.iter().find(|s| s.id == id).ok_or_else(|| CatalogError::UnknownSection(id.to_string()))
}

/// Look up a question in any section.
pub fn question(id: &str) -> Result<&'static Question, CatalogError> {
    SECTIONS
        .iter()
        .flat_map(|s| s.questions.iter())
        .find(|q| q.id == id)
        .ok_or_else(|| CatalogError::UnknownQuestion(id.to_string()))
}

/// Every document fed by any section, first occurrence wins on duplicate ids.
pub fn all_documents() -> Vec<&'static DocumentDefinition> {
    let mut documents: Vec<&'static DocumentDefinition> = Vec::new();
    for doc in SECTIONS.iter().flat_map(|s| s.documents.iter()) {
        if !documents.iter().any(|d| d.id == doc.id) {
            documents.push(doc);
        }
    }
    documents
}

/// Look up a document definition.
pub fn document(id: &str) -> Result<&'static DocumentDefinition, CatalogError> {
    all_documents()
        .into_iter()
        .find(|d| d.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| CatalogError::UnknownDocument(id.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_document_ids_unique() {
        let docs = all_documents();
        let ids: HashSet<_> = docs.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), docs.len());
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn test_question_ids_unique() {
        let ids: Vec<_> = sections().iter().flat_map(|s| s.questions.iter().map(|q| q.id)).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_lookups() {
        assert_eq!(question("1.3.a").unwrap().input, InputKind::TextArea);
        assert_eq!(section("s2").unwrap().questions.len(), 2);
        assert_eq!(document("l1-man-001").unwrap().title, "Quality Manual");
        assert!(matches!(question("9.9.z"), Err(CatalogError::UnknownQuestion(_))));
        assert!(matches!(document("nope"), Err(CatalogError::UnknownDocument(_))));
    }

    #[test]
    fn test_draft_prompt_interpolates_answer() {
        let q = question("1.2.b").unwrap();
        let prompt = q.draft_prompt_for("ISO 9001:2015").unwrap();
        assert!(prompt.contains("\"ISO 9001:2015\""));
        assert!(!prompt.contains("{answer}"));
    }

    #[test]
    fn test_search_falls_back_to_question_text() {
        let q = question("1.1.a").unwrap();
        let query = q.search_query_for("").unwrap();
        assert!(query.ends_with(q.text));
    }

    #[test]
    fn test_questions_without_search_template() {
        assert!(question("1.1.b").unwrap().search_query_for("x").is_none());
    }

    #[test]
    fn test_refine_only_for_strategy_question_with_answer() {
        let purpose = question("1.1.a").unwrap();
        assert!(purpose.refine_prompt_for("").is_none());
        assert!(purpose.refine_prompt_for("We will launch things").unwrap().contains("We will launch things"));
        assert!(question("1.1.b").unwrap().refine_prompt_for("anything").is_none());
    }
}
