//! Core types and functionality for QMSDraft.
//!
//! This module contains the session state (answer store and organization
//! profile), the plan/strategy classifier, view navigation, answers-file
//! input, and configuration.

mod answers_file;
mod classifier;
mod config;
mod navigation;
mod profile;
mod store;
mod suggestion;

pub use answers_file::{AnswersFile, AnswersFileError};
pub use classifier::{
    looks_like_plan, PlanSignals, MIN_CLASSIFIABLE_LEN, PLAN_INDICATIVE_VERBS,
    STRATEGY_INDICATIVE_KEYWORDS,
};
pub use config::{AiConfig, Config, ExportConfig, GeminiConfig, GeneralConfig, OllamaConfig, UiConfig};
pub use navigation::{Navigator, View};
pub use profile::{OrganizationProfile, ProfileField, DEFAULT_EFFECTIVE_DATE};
pub use store::AnswerStore;
pub use suggestion::{AiSuggestion, RequestKind, Source};
