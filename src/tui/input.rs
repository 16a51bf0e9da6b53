//! Input handling for the TUI.
//!
//! Processes keyboard events and updates application state.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppMode, Focus};
use crate::core::{RequestKind, View};
use crate::App;

/// Handle keyboard events.
pub fn handle_events(key: KeyEvent, app: &mut App) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.mode {
        AppMode::Editing => handle_editing_mode(key, app),
        AppMode::Modal => handle_modal_mode(key, app),
        AppMode::Help => handle_help_mode(key, app),
        AppMode::Normal => handle_normal_mode(key, app),
    }
}

/// Handle input while a field is being edited.
fn handle_editing_mode(key: KeyEvent, app: &mut App) {
    let multiline = app.editor.as_ref().is_some_and(|e| e.multiline);

    match key.code {
        KeyCode::Esc => app.finish_edit(),
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => app.finish_edit(),
        KeyCode::Enter if multiline => app.editor_insert('\n'),
        KeyCode::Enter | KeyCode::Tab => app.finish_edit(),
        KeyCode::Backspace => app.editor_backspace(),
        KeyCode::Delete => app.editor_delete(),
        KeyCode::Left => app.editor_left(),
        KeyCode::Right => app.editor_right(),
        KeyCode::Home => app.editor_home(),
        KeyCode::End => app.editor_end(),
        KeyCode::Char(c) => app.editor_insert(c),
        _ => {}
    }
}

/// Handle input while a popup is open.
fn handle_modal_mode(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_modal(),
        KeyCode::Down | KeyCode::Char('j') => app.modal_scroll(true),
        KeyCode::Up | KeyCode::Char('k') => app.modal_scroll(false),
        _ => {}
    }
}

/// Handle input in help mode.
fn handle_help_mode(key: KeyEvent, app: &mut App) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::Enter) {
        app.dismiss_help();
    }
}

/// Handle input in normal mode.
fn handle_normal_mode(key: KeyEvent, app: &mut App) {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.show_help(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Esc if app.focus == Focus::Content => app.focus = Focus::Sidebar,
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.nav.view() == View::CompanyInfo {
                app.save_company_info();
            }
        }
        _ => match app.focus {
            Focus::Sidebar => handle_sidebar_keys(key, app),
            Focus::Content => handle_content_keys(key, app),
        },
    }
}

fn handle_sidebar_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.sidebar_next(),
        KeyCode::Up | KeyCode::Char('k') => app.sidebar_previous(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.open_sidebar_selection(),
        _ => {}
    }
}

fn handle_content_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.content_next(),
        KeyCode::Up | KeyCode::Char('k') => app.content_previous(),
        KeyCode::Left | KeyCode::Char('h') => app.focus = Focus::Sidebar,
        _ => match app.nav.view() {
            View::CompanyInfo => handle_company_keys(key, app),
            View::Section => handle_section_keys(key, app),
            View::Documents => handle_document_keys(key, app),
            View::Dashboard | View::IsoInfo => {}
        },
    }
}

fn handle_company_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('e' | 'i') => app.begin_edit(),
        KeyCode::Char('s') => {
            app.save_company_info();
        }
        _ => {}
    }
}

fn handle_section_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('e' | 'i') => app.begin_edit(),
        KeyCode::Char('d') => app.request_ai(RequestKind::Draft),
        KeyCode::Char('f') => app.request_ai(RequestKind::Search),
        KeyCode::Char('r') => app.request_ai(RequestKind::RefineStrategy),
        KeyCode::Char('D') => app.view_suggestion(RequestKind::Draft),
        KeyCode::Char('F') => app.view_suggestion(RequestKind::Search),
        KeyCode::Char('R') => app.view_suggestion(RequestKind::RefineStrategy),
        KeyCode::Char('p') => app.show_strategy_explanation(),
        _ => {}
    }
}

fn handle_document_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('x') => {
            app.export_selected();
        }
        KeyCode::Char('X') => {
            app.export_all();
        }
        _ => {}
    }
}
