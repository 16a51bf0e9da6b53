//! Document compiler.
//!
//! Turns a document definition and the current answer store into markdown-like
//! text. Compilation is pure: the same store contents always produce the same
//! text, and missing data becomes a bracketed placeholder instead of an error.

mod blocks;
mod export;
mod templates;

pub use blocks::{missing_answer, ContentBlock, ContentItem};
pub use export::{export_filename, write_document, CONTENT_TYPE};
pub use templates::{
    content_blocks, COMPANY_ADDRESS, COMPANY_NAME, EFFECTIVE_DATE, QMS_REP_TITLE,
    TOP_MANAGEMENT_NAME, TOP_MANAGEMENT_TITLE,
};

use crate::catalog::{self, DocumentDefinition, DocumentKind};
use crate::core::AnswerStore;

/// Compile one document.
pub fn compile(def: &DocumentDefinition, store: &AnswerStore) -> String {
    match def.kind {
        DocumentKind::QualityManual => templates::quality_manual(def, store),
        DocumentKind::CodeOfConduct => templates::code_of_conduct(def, store),
    }
}

/// A document together with its compiled text.
#[derive(Debug, Clone)]
pub struct CompiledDocument {
    pub definition: &'static DocumentDefinition,
    pub content: String,
}

impl CompiledDocument {
    /// Export filename for this document.
    pub fn filename(&self, extension: &str) -> String {
        export_filename(self.definition.title, self.definition.revision, extension)
    }
}

/// Compile every document in the catalog.
pub fn compile_all(store: &AnswerStore) -> Vec<CompiledDocument> {
    catalog::all_documents()
        .into_iter()
        .map(|definition| CompiledDocument { definition, content: compile(definition, store) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CODE_OF_CONDUCT, QUALITY_MANUAL};
    use crate::core::AiSuggestion;

    fn filled_store() -> AnswerStore {
        let mut store = AnswerStore::new();
        let profile = store.profile_mut();
        profile.set_company_name("Acme Ltd");
        profile.set_company_abbreviation("ACME");
        profile.set_company_address("1 Road, Town");
        profile.set_top_management_name("Jane Doe");
        profile.set_top_management_title("CEO");
        profile.set_document_effective_date("2026-01-01");
        store.set_answer("1.1.a", "Win on service");
        store.set_answer("2.1.a", "Integrity");
        store
    }

    #[test]
    fn test_compile_is_deterministic() {
        let store = filled_store();
        for def in catalog::all_documents() {
            assert_eq!(compile(def, &store), compile(def, &store));
        }
    }

    #[test]
    fn test_header_with_missing_effective_date() {
        let mut store = AnswerStore::new();
        store.profile_mut().set_company_name("Acme Ltd");

        for def in catalog::all_documents() {
            let text = compile(def, &store);
            assert!(text.contains("Acme Ltd"), "{}", def.id);
            assert!(text.contains("[Effective Date]"), "{}", def.id);
        }
    }

    #[test]
    fn test_empty_store_uses_placeholders() {
        let store = AnswerStore::new();
        let text = compile(&QUALITY_MANUAL, &store);

        assert!(text.starts_with("# Quality Manual\n## [Company Name]\n"));
        assert!(text.contains("**Document ID:** L1-MAN-001\n"));
        assert!(text.contains("**Revision:** Rev 0\n"));
        assert!(text.contains("**Address:** [Company Address]"));
        assert!(text.contains("**Approved By:** [Top Management Name], [Top Management Title]"));
        assert!(!text.contains("QMS Representative"));
    }

    #[test]
    fn test_every_declared_item_present() {
        let store = filled_store();
        for def in catalog::all_documents() {
            let text = compile(def, &store);
            for block in content_blocks(def) {
                assert!(text.contains(&format!("### {}", block.title)));
                for item in block.items {
                    let found = match store.answer(item.question_id) {
                        Some(answer) => text.contains(answer),
                        None => text.contains(&missing_answer(item.label)),
                    };
                    assert!(found, "{} / {}", def.id, item.question_id);
                }
            }
        }
    }

    #[test]
    fn test_blocks_in_declared_order() {
        let text = compile(&QUALITY_MANUAL, &AnswerStore::new());
        let positions: Vec<usize> = [
            "### 1. Context of the Organization",
            "### 2. Scope of the QMS",
            "### 3. QMS Processes & Interactions",
            "### 4. Leadership Commitment",
            "### 5. Planning for the QMS",
        ]
        .iter()
        .map(|h| text.find(h).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("[Details about QMS planning, risk management, objectives to be populated...]"));
    }

    #[test]
    fn test_qms_representative_line() {
        let mut store = filled_store();
        store.profile_mut().set_qms_representative_name("John Smith");

        let text = compile(&QUALITY_MANUAL, &store);
        assert!(text.contains("**QMS Representative:** John Smith, [QMS Rep Title]\n"));
        assert!(text.contains("(ACME)\n"));
    }

    #[test]
    fn test_code_of_conduct_layout() {
        let mut store = filled_store();
        store.set_suggestion("2.1.a_ai_draft", AiSuggestion::new("Be honest."));

        let text = compile(&CODE_OF_CONDUCT, &store);
        assert!(text.starts_with("# Code of Conduct and Business Ethics\n## For Acme Ltd\n"));
        assert!(text.contains("**Core Ethical Values & Principles:** Integrity\n"));
        assert!(text.contains("*AI Draft for Core Ethical Values & Principles:*\nBe honest.\n"));
        assert!(text.contains(
            "[Specific Conduct Standards (e.g., conflicts of interest, gifts) not yet provided]"
        ));
        assert!(text.contains("### 3. Reporting Violations\n[Procedure for reporting violations to be populated...]"));
        assert!(text.trim_end().ends_with("suspected violations of this Code."));
    }

    #[test]
    fn test_compile_all_covers_catalog() {
        let docs = compile_all(&AnswerStore::new());
        let ids: Vec<_> = docs.iter().map(|d| d.definition.id).collect();
        assert_eq!(ids, vec!["L1-MAN-001", "L1-POL-001"]);
        assert_eq!(docs[0].filename("md"), "Quality_Manual_Rev 0.md");
    }
}
