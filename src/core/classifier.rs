//! Plan vs strategy heuristic.
//!
//! Flags answers that read like a list of tasks rather than a strategic
//! statement. This is a fixed-keyword count, not language understanding, and
//! is only used to show guidance next to an answer.

use once_cell::sync::Lazy;
use regex::Regex;

/// Terms typical of an activity plan.
pub const PLAN_INDICATIVE_VERBS: &[&str] = &[
    "implement",
    "develop",
    "launch",
    "create",
    "initiate",
    "roll out",
    "build",
    "execute",
    "manage",
    "conduct",
    "perform",
    "complete",
    "deliver",
    "set up",
    "install",
    "organize",
    "undertake",
    "pursue activities",
];

/// Terms typical of a competitive strategy.
pub const STRATEGY_INDICATIVE_KEYWORDS: &[&str] = &[
    "strategy",
    "strategic",
    "vision",
    "mission",
    "advantage",
    "differentiate",
    "positioning",
    "compete",
    "market",
    "growth",
    "leadership",
    "value proposition",
    "core focus",
    "long-term",
    "overall direction",
];

/// Shorter inputs are not classified.
pub const MIN_CLASSIFIABLE_LEN: usize = 30;

static CONNECTIVES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(and|then|also)\b").expect("connective pattern is valid"));

/// Term counts behind a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanSignals {
    /// Number of plan verbs present
    pub plan_terms: usize,
    /// Number of strategy keywords present
    pub strategy_terms: usize,
    /// Whether the text is punctuated or joined like an enumeration
    pub looks_like_list: bool,
}

impl PlanSignals {
    /// Measure a text. Matching is case-insensitive.
    pub fn measure(text: &str) -> Self {
        let lower = text.to_lowercase();

        let plan_terms = count_terms(&lower, PLAN_INDICATIVE_VERBS);
        let strategy_terms = count_terms(&lower, STRATEGY_INDICATIVE_KEYWORDS);

        let separators = lower.chars().filter(|c| matches!(c, ',' | ';' | '.')).count();
        let connectives = CONNECTIVES.find_iter(&lower).count();

        Self { plan_terms, strategy_terms, looks_like_list: separators >= 2 || connectives >= 2 }
    }
}

/// Each term counts once, however often it appears.
fn count_terms(lower: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| lower.contains(*term)).count()
}

/// Whether `text` reads more like a plan than a strategy.
pub fn looks_like_plan(text: &str) -> bool {
    if text.trim().chars().count() < MIN_CLASSIFIABLE_LEN {
        return false;
    }

    let signals = PlanSignals::measure(text);
    let PlanSignals { plan_terms, strategy_terms, looks_like_list } = signals;

    if plan_terms >= 2
        && strategy_terms <= 1
        && (looks_like_list || plan_terms > strategy_terms + 1)
    {
        return true;
    }

    // Long and action-heavy without strategic framing
    text.chars().count() > 150 && plan_terms >= 3 && strategy_terms <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_never_a_plan() {
        assert!(!looks_like_plan("ok"));
        assert!(!looks_like_plan("launch, build, deliver"));
        assert!(!looks_like_plan("                                   launch it"));
    }

    #[test]
    fn test_task_list_is_a_plan() {
        let text = "We will implement a new CRM, launch a rewards program, and roll out training sessions for staff.";
        let signals = PlanSignals::measure(text);
        assert_eq!(signals.plan_terms, 3);
        assert_eq!(signals.strategy_terms, 0);
        assert!(signals.looks_like_list);
        assert!(looks_like_plan(text));
    }

    #[test]
    fn test_strategic_statement_is_not_a_plan() {
        let text = "Our strategy is to win through a differentiated value proposition focused on long-term customer advantage.";
        let signals = PlanSignals::measure(text);
        assert_eq!(signals.plan_terms, 0);
        assert!(signals.strategy_terms >= 2);
        assert!(!looks_like_plan(text));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let text = "IMPLEMENT the ERP system AND LAUNCH the new website AND hire.";
        assert!(looks_like_plan(text));
    }

    #[test]
    fn test_connectives_must_be_whole_words() {
        // "band" and "brand" must not count as "and"
        let signals = PlanSignals::measure("band brand thence");
        assert!(!signals.looks_like_list);

        let signals = PlanSignals::measure("this and that then more");
        assert!(signals.looks_like_list);
    }

    #[test]
    fn test_strategy_terms_suppress_plan_flag() {
        let text = "We implement and deliver our strategy for market growth and leadership.";
        assert!(!looks_like_plan(text));
    }

    #[test]
    fn test_two_verbs_without_list_shape() {
        // No separators or connectives, but plan terms outnumber strategy terms by two
        let text = "Our team will implement software to deliver reliable services";
        let signals = PlanSignals::measure(text);
        assert!(!signals.looks_like_list);
        assert!(looks_like_plan(text));
    }

    #[test]
    fn test_long_action_text_flagged() {
        let text = format!(
            "{} we will build a plant in the north region with modern equipment \
             we will install new presses and we will conduct training for operators \
             with a view to our vision",
            "x".repeat(40)
        );
        let signals = PlanSignals::measure(&text);
        assert!(signals.plan_terms >= 3);
        assert!(signals.strategy_terms <= 1);
        assert!(looks_like_plan(&text));
    }
}
