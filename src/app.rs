//! Application state and lifecycle management.
//!
//! This module contains the `App` struct that owns the answer store and the
//! navigation state for one interactive session, and coordinates between the
//! TUI, the document compiler and background AI requests.

use std::path::PathBuf;

use crate::ai::RequestTracker;
use crate::catalog::{self, DocumentDefinition, InputKind, Question, Section};
use crate::compiler::{self, CompiledDocument};
use crate::core::{
    looks_like_plan, AiSuggestion, AnswerStore, Config, Navigator, ProfileField, RequestKind,
    View,
};
use crate::tui::Theme;

/// Main application state.
///
/// The `App` is the single owner of session state. It manages:
/// - The answer store and organization profile
/// - Which view is showing and which field has focus
/// - The inline field editor
/// - In-flight AI requests
pub struct App {
    /// Answers, suggestions, busy flags and the organization profile
    pub store: AnswerStore,

    /// Current view and section
    pub nav: Navigator,

    /// Application configuration
    pub config: Config,

    /// Current UI theme
    pub theme: Theme,

    /// Current mode of the application
    pub mode: AppMode,

    /// Which pane receives navigation keys
    pub focus: Focus,

    /// Highlighted sidebar entry
    pub sidebar_selected: usize,

    /// Highlighted field, question or document in the content pane
    pub content_selected: usize,

    /// Scroll offset for long content
    pub scroll: u16,

    /// Inline editor, present while editing
    pub editor: Option<Editor>,

    /// Popup shown over the current view
    pub modal: Option<Modal>,

    /// Status message to display (if any)
    pub status_message: Option<String>,

    /// Whether the application should quit
    pub should_quit: bool,

    tracker: Option<RequestTracker>,
}

/// Application modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Moving around views and fields
    #[default]
    Normal,

    /// Typing into a field
    Editing,

    /// A popup is open
    Modal,

    /// Showing help screen with keyboard shortcuts
    Help,
}

/// Pane that owns the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Content,
}

/// One row in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub view: View,
    pub section_id: Option<&'static str>,
    pub label: &'static str,
}

/// What the editor writes back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Profile(ProfileField),
    Answer(&'static str),
}

/// Inline text editor. The cursor counts characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    pub target: EditTarget,
    pub buffer: String,
    pub cursor: usize,
    pub multiline: bool,
}

impl Editor {
    fn new(target: EditTarget, value: &str, multiline: bool) -> Self {
        Self { target, buffer: value.to_string(), cursor: value.chars().count(), multiline }
    }

    fn byte_index(&self) -> usize {
        self.buffer.char_indices().nth(self.cursor).map_or(self.buffer.len(), |(i, _)| i)
    }

    fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.buffer.remove(at);
        true
    }

    fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_index();
        self.buffer.remove(at);
        true
    }
}

/// Popup content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub body: ModalBody,
    pub scroll: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalBody {
    /// An AI result with its sources
    Suggestion(AiSuggestion),
    /// Static guidance text
    Guidance(&'static str),
}

impl App {
    /// Create a new application instance.
    ///
    /// The effective date falls back to the configured default when the
    /// store does not carry one.
    pub fn new(config: Config, mut store: AnswerStore) -> Self {
        if store.profile().document_effective_date.trim().is_empty() {
            let default_date = config.general.default_effective_date.clone();
            store.profile_mut().set_document_effective_date(default_date);
        }

        let theme = Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.ui.theme, "Unknown theme, using default");
            Theme::default()
        });

        Self {
            store,
            nav: Navigator::new(),
            config,
            theme,
            mode: AppMode::default(),
            focus: Focus::default(),
            sidebar_selected: 0,
            content_selected: 0,
            scroll: 0,
            editor: None,
            modal: None,
            status_message: None,
            should_quit: false,
            tracker: None,
        }
    }

    /// Enable AI actions by handing over a request tracker.
    pub fn with_tracker(mut self, tracker: RequestTracker) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// Name of the AI provider in use, if any.
    pub fn ai_provider(&self) -> Option<&str> {
        self.tracker.as_ref().and_then(|t| t.gateway().active_provider())
    }

    // ----- navigation -------------------------------------------------------

    /// Sidebar rows in display order.
    pub fn sidebar_entries() -> Vec<SidebarEntry> {
        let mut entries = vec![
            SidebarEntry { view: View::CompanyInfo, section_id: None, label: View::CompanyInfo.title() },
            SidebarEntry { view: View::Dashboard, section_id: None, label: View::Dashboard.title() },
        ];
        entries.extend(catalog::sections().iter().map(|s| SidebarEntry {
            view: View::Section,
            section_id: Some(s.id),
            label: s.title,
        }));
        entries.push(SidebarEntry { view: View::Documents, section_id: None, label: View::Documents.title() });
        entries.push(SidebarEntry { view: View::IsoInfo, section_id: None, label: View::IsoInfo.title() });
        entries
    }

    /// Whether a sidebar entry is the current view.
    pub fn is_active(&self, entry: &SidebarEntry) -> bool {
        self.nav.view() == entry.view && self.nav.section_id() == entry.section_id
    }

    /// Switch view and reset the content cursor.
    pub fn navigate(&mut self, view: View, section_id: Option<&str>) {
        self.nav.navigate(view, section_id);
        self.content_selected = 0;
        self.scroll = 0;
        if let Some(index) = Self::sidebar_entries().iter().position(|e| self.is_active(e)) {
            self.sidebar_selected = index;
        }
    }

    /// Open the highlighted sidebar entry.
    pub fn open_sidebar_selection(&mut self) {
        if let Some(entry) = Self::sidebar_entries().get(self.sidebar_selected) {
            self.navigate(entry.view, entry.section_id);
            self.focus = Focus::Content;
        }
    }

    pub fn sidebar_next(&mut self) {
        let last = Self::sidebar_entries().len().saturating_sub(1);
        self.sidebar_selected = (self.sidebar_selected + 1).min(last);
    }

    pub fn sidebar_previous(&mut self) {
        self.sidebar_selected = self.sidebar_selected.saturating_sub(1);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Content,
            Focus::Content => Focus::Sidebar,
        };
    }

    /// The section being shown, if the view is a section view.
    pub fn current_section(&self) -> Option<&'static Section> {
        match self.nav.view() {
            View::Section => self.nav.section_id().and_then(|id| catalog::section(id).ok()),
            _ => None,
        }
    }

    /// Number of selectable rows in the content pane.
    pub fn content_len(&self) -> usize {
        match self.nav.view() {
            View::CompanyInfo => ProfileField::ALL.len(),
            View::Section => self.current_section().map_or(0, |s| s.questions.len()),
            View::Documents => catalog::all_documents().len(),
            View::Dashboard | View::IsoInfo => 0,
        }
    }

    /// Move the content cursor down, or scroll text views.
    pub fn content_next(&mut self) {
        match self.content_len() {
            0 => self.scroll = self.scroll.saturating_add(1),
            len => {
                self.content_selected = (self.content_selected + 1).min(len - 1);
                self.scroll = 0;
            }
        }
    }

    /// Move the content cursor up, or scroll text views.
    pub fn content_previous(&mut self) {
        if self.content_len() == 0 {
            self.scroll = self.scroll.saturating_sub(1);
        } else {
            self.content_selected = self.content_selected.saturating_sub(1);
            self.scroll = 0;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(5);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(5);
    }

    // ----- company info -----------------------------------------------------

    /// The profile field under the cursor on the company form.
    pub fn focused_profile_field(&self) -> Option<ProfileField> {
        match self.nav.view() {
            View::CompanyInfo => ProfileField::ALL.get(self.content_selected).copied(),
            _ => None,
        }
    }

    /// Validate the company form and continue to the dashboard.
    ///
    /// Returns `false` and leaves the view unchanged if a required field is blank.
    pub fn save_company_info(&mut self) -> bool {
        let missing = self.store.profile().missing_required();
        if let Some(first) = missing.first() {
            let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
            self.set_status(format!("Please fill in: {}", labels.join(", ")));
            if let Some(index) = ProfileField::ALL.iter().position(|f| f == first) {
                self.content_selected = index;
            }
            return false;
        }

        self.navigate(View::Dashboard, None);
        self.set_status("Company information saved");
        true
    }

    // ----- questions --------------------------------------------------------

    /// The question under the cursor on a section view.
    pub fn focused_question(&self) -> Option<&'static Question> {
        self.current_section().and_then(|s| s.questions.get(self.content_selected))
    }

    /// The stored answer for a question, or an empty string.
    pub fn answer(&self, question_id: &str) -> &str {
        self.store.answer(question_id).unwrap_or("")
    }

    /// Whether a strategy-checked question currently reads like a plan.
    pub fn shows_plan_warning(&self, question: &Question) -> bool {
        question.checks_strategy && looks_like_plan(self.answer(question.id))
    }

    /// Progress for a section as (answered, total).
    pub fn section_progress(&self, section: &Section) -> (usize, usize) {
        let answered = self.store.answered_count(section.questions.iter().map(|q| q.id));
        (answered, section.questions.len())
    }

    // ----- editing ----------------------------------------------------------

    /// Start editing the focused field or question.
    pub fn begin_edit(&mut self) {
        let editor = if let Some(field) = self.focused_profile_field() {
            Editor::new(EditTarget::Profile(field), self.store.profile().get(field), field.is_multiline())
        } else if let Some(question) = self.focused_question() {
            Editor::new(
                EditTarget::Answer(question.id),
                self.answer(question.id),
                question.input == InputKind::TextArea,
            )
        } else {
            return;
        };

        self.editor = Some(editor);
        self.mode = AppMode::Editing;
    }

    /// Leave edit mode. The value is already stored.
    pub fn finish_edit(&mut self) {
        self.editor = None;
        self.mode = AppMode::Normal;
    }

    pub fn editor_insert(&mut self, c: char) {
        if let Some(editor) = self.editor.as_mut() {
            if c == '\n' && !editor.multiline {
                return;
            }
            editor.insert(c);
            self.commit_edit();
        }
    }

    pub fn editor_backspace(&mut self) {
        if self.editor.as_mut().is_some_and(Editor::backspace) {
            self.commit_edit();
        }
    }

    pub fn editor_delete(&mut self) {
        if self.editor.as_mut().is_some_and(Editor::delete) {
            self.commit_edit();
        }
    }

    pub fn editor_left(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.cursor = editor.cursor.saturating_sub(1);
        }
    }

    pub fn editor_right(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.cursor = (editor.cursor + 1).min(editor.len());
        }
    }

    pub fn editor_home(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.cursor = 0;
        }
    }

    pub fn editor_end(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.cursor = editor.len();
        }
    }

    /// Write the editor buffer into the store. Called on every keystroke.
    fn commit_edit(&mut self) {
        let Some(editor) = self.editor.as_ref() else {
            return;
        };
        match editor.target {
            EditTarget::Profile(field) => self.store.profile_mut().set(field, editor.buffer.clone()),
            EditTarget::Answer(question_id) => self.store.set_answer(question_id, editor.buffer.clone()),
        }
    }

    // ----- AI ---------------------------------------------------------------

    /// Issue an AI request for the focused question.
    pub fn request_ai(&mut self, kind: RequestKind) {
        let Some(question) = self.focused_question() else {
            return;
        };
        let Some(input) = question.request_input(kind, self.answer(question.id)) else {
            let message = match kind {
                RequestKind::RefineStrategy if question.checks_strategy => {
                    "Write an answer first, then ask for a strategic refinement"
                }
                _ => "That AI action is not available for this question",
            };
            self.set_status(message);
            return;
        };

        let Some(tracker) = self.tracker.as_mut() else {
            self.set_status("AI is not available in this session");
            return;
        };

        tracker.submit(&mut self.store, kind.key(question.id), kind, input);
        self.set_status(format!("AI {kind} requested for {}", question.id));
    }

    /// Show the stored suggestion of a kind for the focused question.
    pub fn view_suggestion(&mut self, kind: RequestKind) {
        let Some(question) = self.focused_question() else {
            return;
        };
        match self.store.suggestion(&kind.key(question.id)).cloned() {
            Some(suggestion) => {
                self.open_modal(suggestion_title(kind, question), ModalBody::Suggestion(suggestion));
            }
            None => self.set_status(format!("No AI {kind} yet for {}", question.id)),
        }
    }

    /// Whether a request of a kind is running for a question.
    pub fn is_loading(&self, question_id: &str, kind: RequestKind) -> bool {
        self.store.is_loading(&kind.key(question_id))
    }

    /// Show the plan vs strategy explanation.
    pub fn show_strategy_explanation(&mut self) {
        self.open_modal(
            "Understanding Plan vs. Strategy".to_string(),
            ModalBody::Guidance(catalog::STRATEGY_VS_PLAN_EXPLANATION),
        );
    }

    fn open_modal(&mut self, title: String, body: ModalBody) {
        self.modal = Some(Modal { title, body, scroll: 0 });
        self.mode = AppMode::Modal;
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.mode = AppMode::Normal;
    }

    pub fn modal_scroll(&mut self, down: bool) {
        if let Some(modal) = self.modal.as_mut() {
            modal.scroll = if down { modal.scroll.saturating_add(1) } else { modal.scroll.saturating_sub(1) };
        }
    }

    /// Apply finished AI requests. A result for the focused question opens
    /// in a popup unless the user is typing.
    fn apply_completions(&mut self) {
        let Some(tracker) = self.tracker.as_mut() else {
            return;
        };
        let keys = tracker.poll(&mut self.store);

        for key in keys {
            let focused = self.focused_question().and_then(|q| {
                [RequestKind::Draft, RequestKind::Search, RequestKind::RefineStrategy]
                    .into_iter()
                    .find(|kind| kind.key(q.id) == key)
                    .map(|kind| (q, kind))
            });

            match focused {
                Some((question, kind)) if self.mode == AppMode::Normal => {
                    if let Some(suggestion) = self.store.suggestion(&key).cloned() {
                        self.open_modal(suggestion_title(kind, question), ModalBody::Suggestion(suggestion));
                    }
                }
                _ => self.set_status(format!("AI result ready: {key}")),
            }
        }
    }

    // ----- documents --------------------------------------------------------

    /// The document under the cursor on the documents view.
    pub fn selected_document(&self) -> Option<&'static DocumentDefinition> {
        match self.nav.view() {
            View::Documents => catalog::all_documents().get(self.content_selected).copied(),
            _ => None,
        }
    }

    /// Compile the selected document against the current store.
    pub fn preview(&self) -> Option<CompiledDocument> {
        self.selected_document().map(|definition| CompiledDocument {
            definition,
            content: compiler::compile(definition, &self.store),
        })
    }

    /// Write the selected document to the export directory.
    pub fn export_selected(&mut self) -> Option<PathBuf> {
        let document = self.preview()?;
        let dir = self.config.export_dir();
        match compiler::write_document(&dir, &document, &self.config.export.extension) {
            Ok(path) => {
                self.set_status(format!("Exported {}", path.display()));
                Some(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Export failed");
                self.set_status(format!("Export failed: {e}"));
                None
            }
        }
    }

    /// Write every document to the export directory.
    pub fn export_all(&mut self) -> usize {
        let dir = self.config.export_dir();
        let mut written = 0;
        for document in compiler::compile_all(&self.store) {
            match compiler::write_document(&dir, &document, &self.config.export.extension) {
                Ok(_) => written += 1,
                Err(e) => {
                    tracing::warn!(id = document.definition.id, error = %e, "Export failed");
                    self.set_status(format!("Export failed: {e}"));
                    return written;
                }
            }
        }
        self.set_status(format!("Exported {written} documents to {}", dir.display()));
        written
    }

    // ----- lifecycle --------------------------------------------------------

    /// Set a status message to display temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Request the application to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Perform periodic updates (called on tick).
    pub fn tick(&mut self) {
        self.apply_completions();
    }
}

fn suggestion_title(kind: RequestKind, question: &Question) -> String {
    let short: String = question.text.chars().take(30).collect();
    match kind {
        RequestKind::Draft => format!("AI Draft for: {short}..."),
        RequestKind::Search => format!("AI Search Results for: {short}..."),
        RequestKind::RefineStrategy => "AI Suggestion: Refining to Strategic Direction".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::ai::testing::EchoProvider;
    use crate::ai::AiGateway;
    use tempfile::TempDir;

    fn app() -> App {
        App::new(Config::default(), AnswerStore::new())
    }

    fn open_section(app: &mut App, id: &str) {
        app.navigate(View::Section, Some(id));
        app.focus = Focus::Content;
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.nav.view(), View::CompanyInfo);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.store.profile().document_effective_date, "To be determined");
    }

    #[test]
    fn test_existing_effective_date_kept() {
        let mut store = AnswerStore::new();
        store.profile_mut().set_document_effective_date("2026-03-01");
        let app = App::new(Config::default(), store);
        assert_eq!(app.store.profile().document_effective_date, "2026-03-01");
    }

    #[test]
    fn test_sidebar_lists_sections_between_dashboard_and_documents() {
        let entries = App::sidebar_entries();
        assert_eq!(entries.first().unwrap().view, View::CompanyInfo);
        assert_eq!(entries[2].section_id, Some("s1"));
        assert_eq!(entries[3].section_id, Some("s2"));
        assert_eq!(entries.last().unwrap().view, View::IsoInfo);
    }

    #[test]
    fn test_open_sidebar_selection() {
        let mut app = app();
        app.sidebar_selected = 3;
        app.open_sidebar_selection();
        assert_eq!(app.nav.view(), View::Section);
        assert_eq!(app.nav.section_id(), Some("s2"));
        assert_eq!(app.focus, Focus::Content);

        app.navigate(View::Documents, Some("s2"));
        assert_eq!(app.nav.section_id(), None);
        assert_eq!(app.sidebar_selected, 4);
    }

    #[test]
    fn test_every_keystroke_updates_store() {
        let mut app = app();
        open_section(&mut app, "s1");
        app.begin_edit();
        assert_eq!(app.mode, AppMode::Editing);

        app.editor_insert('W');
        assert_eq!(app.store.answer("1.1.a"), Some("W"));
        app.editor_insert('e');
        assert_eq!(app.store.answer("1.1.a"), Some("We"));
        app.editor_backspace();
        assert_eq!(app.store.answer("1.1.a"), Some("W"));

        app.finish_edit();
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.store.answer("1.1.a"), Some("W"));
    }

    #[test]
    fn test_editor_handles_multibyte_text() {
        let mut app = app();
        app.store.profile_mut().set_company_name("Café");
        app.begin_edit();
        app.editor_left();
        app.editor_insert('f');
        assert_eq!(app.store.profile().company_name, "Caffé");
        app.editor_end();
        app.editor_backspace();
        assert_eq!(app.store.profile().company_name, "Caff");
        app.editor_home();
        app.editor_delete();
        assert_eq!(app.store.profile().company_name, "aff");
    }

    #[test]
    fn test_single_line_fields_ignore_newline() {
        let mut app = app();
        app.begin_edit();
        app.editor_insert('\n');
        assert_eq!(app.store.profile().company_name, "");

        app.finish_edit();
        app.content_selected = 2; // address
        app.begin_edit();
        app.editor_insert('a');
        app.editor_insert('\n');
        app.editor_insert('b');
        assert_eq!(app.store.profile().company_address, "a\nb");
    }

    #[test]
    fn test_save_company_info_requires_fields() {
        let mut app = app();
        app.content_selected = 5;
        assert!(!app.save_company_info());
        assert_eq!(app.nav.view(), View::CompanyInfo);
        assert_eq!(app.content_selected, 0);
        assert!(app.status_message.as_deref().unwrap().contains("Company Full Legal Name"));

        let profile = app.store.profile_mut();
        profile.set_company_name("Acme Ltd");
        profile.set_company_address("1 Road");
        profile.set_top_management_name("Jane Doe");
        profile.set_top_management_title("CEO");
        assert!(app.save_company_info());
        assert_eq!(app.nav.view(), View::Dashboard);
    }

    #[test]
    fn test_plan_warning_only_for_strategy_question() {
        let mut app = app();
        let plan = "We will implement a new CRM, launch a customer rewards program, and develop staff training.";
        app.store.set_answer("1.1.a", plan);
        app.store.set_answer("1.1.b", plan);

        assert!(app.shows_plan_warning(catalog::question("1.1.a").unwrap()));
        assert!(!app.shows_plan_warning(catalog::question("1.1.b").unwrap()));
    }

    #[test]
    fn test_request_without_tracker_sets_status() {
        let mut app = app();
        open_section(&mut app, "s1");
        app.request_ai(RequestKind::Draft);
        assert_eq!(app.status_message.as_deref(), Some("AI is not available in this session"));
        assert!(!app.is_loading("1.1.a", RequestKind::Draft));
    }

    #[test]
    fn test_refine_requires_answer() {
        let mut app = app();
        open_section(&mut app, "s1");
        app.request_ai(RequestKind::RefineStrategy);
        assert!(app.status_message.as_deref().unwrap().starts_with("Write an answer first"));

        app.content_selected = 1;
        app.request_ai(RequestKind::Search);
        assert_eq!(
            app.status_message.as_deref(),
            Some("That AI action is not available for this question")
        );
    }

    #[tokio::test]
    async fn test_ai_result_opens_modal_for_focused_question() {
        let gateway = AiGateway::with_providers(vec![Arc::new(EchoProvider::new("echo"))]);
        let tracker = RequestTracker::new(Arc::new(gateway), tokio::runtime::Handle::current());
        let mut app = app().with_tracker(tracker);
        open_section(&mut app, "s1");
        app.store.set_answer("1.1.a", "Be the best");

        app.request_ai(RequestKind::Draft);
        assert!(app.is_loading("1.1.a", RequestKind::Draft));

        for _ in 0..50 {
            tokio::time::sleep(Duration::from_millis(5)).await;
            app.tick();
            if app.modal.is_some() {
                break;
            }
        }

        let modal = app.modal.as_ref().unwrap();
        assert!(modal.title.starts_with("AI Draft for: "));
        let ModalBody::Suggestion(suggestion) = &modal.body else { panic!("expected suggestion") };
        assert!(suggestion.text.starts_with("echo: "));
        assert!(suggestion.text.contains("\"Be the best\""));
        assert!(!app.is_loading("1.1.a", RequestKind::Draft));
        assert_eq!(app.mode, AppMode::Modal);
    }

    #[test]
    fn test_view_suggestion() {
        let mut app = app();
        open_section(&mut app, "s1");
        app.view_suggestion(RequestKind::Draft);
        assert!(app.modal.is_none());

        app.store.set_suggestion("1.1.a_ai_refine_strategy", AiSuggestion::new("Win on service"));
        app.view_suggestion(RequestKind::RefineStrategy);
        let modal = app.modal.as_ref().unwrap();
        assert_eq!(modal.title, "AI Suggestion: Refining to Strategic Direction");

        app.close_modal();
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_section_progress() {
        let mut app = app();
        app.store.set_answer("2.1.a", "Integrity");
        app.store.set_answer("2.1.b", "   ");
        let section = catalog::section("s2").unwrap();
        assert_eq!(app.section_progress(section), (1, 2));
    }

    #[test]
    fn test_export_selected_document() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.export.dir = dir.path().to_string_lossy().into_owned();

        let mut app = App::new(config, AnswerStore::new());
        app.navigate(View::Documents, None);
        app.content_selected = 1;

        let path = app.export_selected().unwrap();
        assert!(path.ends_with("Code_of_Conduct_and_Business_Ethics_Rev 0.md"));
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("# Code of Conduct and Business Ethics"));
        assert!(content.contains("**Effective Date:** To be determined"));

        assert_eq!(app.export_all(), 2);
    }

    #[test]
    fn test_text_views_scroll() {
        let mut app = app();
        app.navigate(View::IsoInfo, None);
        app.content_next();
        app.content_next();
        assert_eq!(app.scroll, 2);
        app.content_previous();
        assert_eq!(app.scroll, 1);
    }
}
