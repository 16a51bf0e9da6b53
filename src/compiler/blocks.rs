//! Building blocks shared by the document templates.

use crate::core::{AnswerStore, RequestKind};

/// One labelled answer inside a content block.
#[derive(Debug, Clone, Copy)]
pub struct ContentItem {
    pub question_id: &'static str,
    pub label: &'static str,
}

/// A headed group of answers.
#[derive(Debug, Clone, Copy)]
pub struct ContentBlock {
    pub title: &'static str,
    pub items: &'static [ContentItem],
    /// Append stored AI drafts (and their sources) after each answer
    pub include_ai_draft: bool,
}

/// Placeholder text for a missing answer.
pub fn missing_answer(label: &str) -> String {
    format!("[{label} not yet provided]")
}

/// `value`, or `placeholder` when `value` is blank.
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Append a content block.
pub fn render_block(out: &mut String, block: &ContentBlock, store: &AnswerStore) {
    out.push_str(&format!("### {}\n", block.title));

    for item in block.items {
        match store.answer(item.question_id).filter(|a| !a.trim().is_empty()) {
            Some(answer) => out.push_str(&format!("**{}:** {}\n", item.label, answer)),
            None => out.push_str(&format!("**{}:** {}\n", item.label, missing_answer(item.label))),
        }

        if block.include_ai_draft {
            render_ai_draft(out, item, store);
        }

        out.push('\n');
    }
}

fn render_ai_draft(out: &mut String, item: &ContentItem, store: &AnswerStore) {
    let Some(draft) = store.suggestion(&RequestKind::Draft.key(item.question_id)) else {
        return;
    };

    out.push_str(&format!("\n*AI Draft for {}:*\n{}\n", item.label, draft.text));

    if !draft.sources.is_empty() {
        out.push_str("\n*Sources from AI Search:*\n");
        for (label, uri) in draft.links() {
            out.push_str(&format!("- {label} ({uri})\n"));
        }
    }
}

/// Append a block whose content is not generated yet.
pub fn render_pending_block(out: &mut String, title: &str, pending: &str) {
    out.push_str(&format!("\n### {title}\n{pending}\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AiSuggestion, Source};

    const ITEMS: &[ContentItem] = &[
        ContentItem { question_id: "q1", label: "First" },
        ContentItem { question_id: "q2", label: "Second" },
    ];

    #[test]
    fn test_missing_answers_get_placeholders() {
        let mut store = AnswerStore::new();
        store.set_answer("q1", "Answered");

        let mut out = String::new();
        render_block(
            &mut out,
            &ContentBlock { title: "Block", items: ITEMS, include_ai_draft: false },
            &store,
        );

        assert!(out.starts_with("### Block\n"));
        assert!(out.contains("**First:** Answered\n"));
        assert!(out.contains("**Second:** [Second not yet provided]\n"));
    }

    #[test]
    fn test_ai_draft_included_only_when_flagged() {
        let mut store = AnswerStore::new();
        store.set_suggestion(
            "q1_ai_draft",
            AiSuggestion::new("Drafted text").with_sources(vec![
                Source::new("https://iso.org", "ISO"),
                Source { uri: None, title: Some("Dropped".to_string()) },
            ]),
        );

        let mut without = String::new();
        render_block(
            &mut without,
            &ContentBlock { title: "Block", items: ITEMS, include_ai_draft: false },
            &store,
        );
        assert!(!without.contains("Drafted text"));

        let mut with = String::new();
        render_block(
            &mut with,
            &ContentBlock { title: "Block", items: ITEMS, include_ai_draft: true },
            &store,
        );
        assert!(with.contains("*AI Draft for First:*\nDrafted text\n"));
        assert!(with.contains("*Sources from AI Search:*\n- ISO (https://iso.org)\n"));
        assert!(!with.contains("Dropped"));
        assert!(!with.contains("AI Draft for Second"));
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder("", "[X]"), "[X]");
        assert_eq!(or_placeholder("  ", "[X]"), "[X]");
        assert_eq!(or_placeholder("value", "[X]"), "value");
    }
}
