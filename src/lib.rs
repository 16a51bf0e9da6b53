#![allow(clippy::cast_possible_truncation)]

//! # QMSDraft
//!
//! Guided ISO 9001:2015 quality-management documentation for your terminal.
//!
//! QMSDraft walks you through questions about your organization section by
//! section, optionally asks an AI provider to draft or research answers, and
//! assembles what you wrote into QMS documents such as the Quality Manual.
//!
//! ## Features
//!
//! - **Guided form**: Sections and questions aligned with ISO 9001 clauses
//! - **AI assistance**: Draft, web-grounded search and plan-to-strategy refinement (optional)
//! - **Plan vs. strategy check**: Flags answers that read like action lists
//! - **Document compiler**: Markdown documents with placeholders for anything missing
//!
//! ## Quick Start
//!
//! ```bash
//! # Install
//! cargo install qmsdraft
//!
//! # Start a guided session
//! qmsdraft
//!
//! # Compile documents from an answers file
//! qmsdraft compile --answers answers.toml --out docs/
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::derivable_impls)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::map_unwrap_or)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod ai;
pub mod app;
pub mod catalog;
pub mod compiler;
pub mod core;
pub mod tui;

pub use ai::{AIError, AIProvider, AiGateway, RequestTracker};
pub use app::App;
pub use compiler::{compile, compile_all, CompiledDocument};
pub use core::{AiSuggestion, AnswerStore, Config, OrganizationProfile, RequestKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "qmsdraft";
