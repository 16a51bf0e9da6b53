//! UI rendering for the TUI.
//!
//! Handles layout and widget rendering using ratatui.
//! Supports customizable themes via the Theme struct.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppMode, EditTarget, Editor, Focus, ModalBody};
use crate::catalog::{self, Question};
use crate::core::{ProfileField, RequestKind, View};
use crate::tui::Theme;
use crate::App;

/// Draw the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(app.theme.background)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Sidebar + content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(30)])
        .split(chunks[1]);

    draw_header(frame, app, chunks[0]);
    draw_sidebar(frame, app, body[0]);
    draw_content(frame, app, body[1]);
    draw_status_bar(frame, app, chunks[2]);

    match app.mode {
        AppMode::Modal => draw_modal(frame, app),
        AppMode::Help => draw_help_overlay(frame, app),
        AppMode::Normal | AppMode::Editing => {}
    }
}

/// Draw the title bar.
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let company = app.store.profile().company_name.trim();

    let mut spans = vec![Span::styled(
        " QMS Draft ",
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
    )];
    if !company.is_empty() {
        spans.push(Span::styled("│ ", Style::default().fg(theme.border)));
        spans.push(Span::styled(company.to_string(), Style::default().fg(theme.text)));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" ISO 9001:2015 guided drafting ")
            .title_style(Style::default().fg(theme.text_muted))
            .title_alignment(Alignment::Right),
    );
    frame.render_widget(header, area);
}

/// Draw the view list.
fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let entries = App::sidebar_entries();

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let active = app.is_active(entry);
            let marker = if active { "▸ " } else { "  " };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(theme.primary)),
                Span::styled(
                    entry.label,
                    if active {
                        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(theme.text)
                    },
                ),
            ];
            if let Some(section) = entry.section_id.and_then(|id| catalog::section(id).ok()) {
                let (answered, total) = app.section_progress(section);
                spans.push(Span::styled(
                    format!(" {answered}/{total}"),
                    Style::default().fg(if answered == total { theme.success } else { theme.text_muted }),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let focused = app.focus == Focus::Sidebar && app.mode == AppMode::Normal;
    let list = List::new(items)
        .block(pane_block(" Navigation ", focused, theme))
        .highlight_style(Style::default().bg(theme.selected_bg));

    let mut state = ListState::default();
    state.select(Some(app.sidebar_selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the current view.
fn draw_content(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Content;
    let theme = &app.theme;

    let view = app.nav.view();

    let (lines, anchor) = match view {
        View::Documents => return draw_documents(frame, app, area),
        View::CompanyInfo => company_lines(app),
        View::Section => section_lines(app),
        View::Dashboard => (dashboard_lines(app), 0),
        View::IsoInfo => (iso_lines(theme), 0),
    };

    // Keep the selected item in the upper third of the pane.
    let inner_height = area.height.saturating_sub(2);
    let scroll = anchor.saturating_sub(inner_height / 3).saturating_add(app.scroll);
    let title = app
        .current_section()
        .map_or_else(|| format!(" {} ", view.title()), |s| format!(" {} ", s.title));

    let paragraph = Paragraph::new(lines)
        .block(pane_block(&title, focused, theme).padding(Padding::horizontal(1)))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn pane_block<'a>(title: &str, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused { theme.primary } else { theme.border };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title.to_string())
        .title_style(Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
}

/// Company form. Returns the lines and the line index of the focused field.
fn company_lines(app: &App) -> (Vec<Line<'static>>, u16) {
    let theme = &app.theme;
    let profile = app.store.profile();
    let mut lines = vec![
        Line::from(Span::styled(
            "Please provide some basic details about your organization. This information will be used to prefill your QMS documents.",
            Style::default().fg(theme.text_dim),
        )),
        Line::from(""),
    ];
    let mut anchor = 0;

    for (index, field) in ProfileField::ALL.into_iter().enumerate() {
        let selected = app.focus == Focus::Content && index == app.content_selected;
        if selected {
            anchor = lines.len() as u16;
        }

        let mut label = vec![Span::styled(
            if selected { "▸ " } else { "  " },
            Style::default().fg(theme.primary),
        )];
        label.push(Span::styled(field.label(), label_style(selected, theme)));
        if field.is_required() {
            label.push(Span::styled(" *", Style::default().fg(theme.error)));
        }
        lines.push(Line::from(label));

        match app.editor.as_ref() {
            Some(editor) if editor.target == EditTarget::Profile(field) => {
                lines.extend(indent(editor_lines(editor, theme)));
            }
            _ => lines.extend(value_lines(profile.get(field), field.placeholder(), theme)),
        }

        if field == ProfileField::DocumentEffectiveDate {
            lines.push(Line::from(Span::styled(
                "    This will be used as a default effective date in your documents. You can use \"To be determined\" or a specific date.",
                Style::default().fg(theme.text_muted),
            )));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("  [s] ", Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD)),
        Span::styled("Save & Continue to Dashboard", Style::default().fg(theme.secondary)),
    ]));

    (lines, anchor)
}

/// Questions of the current section.
fn section_lines(app: &App) -> (Vec<Line<'static>>, u16) {
    let theme = &app.theme;
    let Some(section) = app.current_section() else {
        return (vec![Line::from("Section not found.")], 0);
    };

    let mut lines = vec![
        Line::from(Span::styled(section.description, Style::default().fg(theme.text_dim))),
        Line::from(""),
    ];
    let mut anchor = 0;

    for (index, question) in section.questions.iter().enumerate() {
        let selected = app.focus == Focus::Content && index == app.content_selected;
        if selected {
            anchor = lines.len() as u16;
        }
        question_lines(app, question, selected, &mut lines);
        lines.push(Line::from(""));
    }

    (lines, anchor)
}

fn question_lines(app: &App, question: &Question, selected: bool, lines: &mut Vec<Line<'static>>) {
    let theme = &app.theme;

    lines.push(Line::from(vec![
        Span::styled(if selected { "▸ " } else { "  " }, Style::default().fg(theme.primary)),
        Span::styled(format!("{} ", question.id), Style::default().fg(theme.accent)),
        Span::styled(question.text, label_style(selected, theme)),
    ]));
    if let Some(help) = question.help_text {
        lines.push(Line::from(Span::styled(format!("    {help}"), Style::default().fg(theme.text_muted))));
    }

    match app.editor.as_ref() {
        Some(editor) if editor.target == EditTarget::Answer(question.id) => {
            lines.extend(indent(editor_lines(editor, theme)));
        }
        _ => lines.extend(value_lines(
            app.answer(question.id),
            question.placeholder.unwrap_or("Your answer..."),
            theme,
        )),
    }

    if app.shows_plan_warning(question) {
        lines.push(Line::from(Span::styled(
            "    ⚠ This reads more like a list of plans than a strategy. [p] learn more  [r] refine with AI",
            Style::default().fg(theme.warning),
        )));
    }

    let mut actions = vec![Span::raw("    ")];
    let kinds: &[(RequestKind, bool, &str, &str)] = &[
        (RequestKind::Draft, question.draft_prompt.is_some(), "[d] AI Draft Assist", "D"),
        (RequestKind::Search, question.search_query.is_some(), "[f] AI Search Info", "F"),
        (RequestKind::RefineStrategy, question.checks_strategy, "[r] Refine to Strategy", "R"),
    ];
    for &(kind, offered, label, view_key) in kinds {
        if !offered {
            continue;
        }
        if app.is_loading(question.id, kind) {
            actions.push(Span::styled(format!("{label} …working  "), Style::default().fg(theme.warning)));
        } else if app.store.suggestion(&kind.key(question.id)).is_some() {
            actions.push(Span::styled(format!("{label} ✓ [{view_key}] view  "), Style::default().fg(theme.success)));
        } else {
            actions.push(Span::styled(format!("{label}  "), Style::default().fg(theme.text_dim)));
        }
    }
    if actions.len() > 1 {
        lines.push(Line::from(actions));
    }
}

fn dashboard_lines(app: &App) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let heading = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)))
    };

    let mut lines = vec![
        heading("Welcome to the QMS Development Tool"),
        Line::from(Span::styled(
            "Answer the questions section by section and the tool assembles draft QMS documents for you.",
            Style::default().fg(theme.text_dim),
        )),
        Line::from(""),
        heading("Getting Started"),
    ];
    for (i, step) in catalog::DASHBOARD_GETTING_STARTED.iter().enumerate() {
        lines.push(Line::from(format!("  {}. {step}", i + 1)));
    }

    lines.push(Line::from(""));
    lines.push(heading("Progress"));
    for section in catalog::sections() {
        let (answered, total) = app.section_progress(section);
        lines.push(Line::from(vec![
            Span::styled(format!("  {answered}/{total} "), Style::default().fg(theme.accent)),
            Span::raw(section.title),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("Tips"));
    for tip in catalog::DASHBOARD_TIPS {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(theme.accent)),
            Span::raw(*tip),
        ]));
    }

    lines.push(Line::from(""));
    let ai = match app.ai_provider() {
        Some(name) => Span::styled(format!("AI assistance: {name}"), Style::default().fg(theme.success)),
        None => Span::styled("AI assistance: not configured", Style::default().fg(theme.text_muted)),
    };
    lines.push(Line::from(ai));
    lines
}

fn iso_lines(theme: &Theme) -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)))
    };

    let mut lines = vec![
        heading("What is ISO 9001?"),
        Line::from(catalog::ISO_OVERVIEW),
        Line::from(""),
        heading("The Seven Quality Management Principles"),
    ];
    for (i, (name, description)) in catalog::ISO_PRINCIPLES.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. {name}: ", i + 1), Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            Span::raw(*description),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("Benefits of Implementing ISO 9001"));
    for benefit in catalog::ISO_BENEFITS {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(theme.accent)),
            Span::raw(*benefit),
        ]));
    }
    lines
}

/// Document list and live preview.
fn draw_documents(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Content;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(40), Constraint::Min(30)])
        .split(area);

    let items: Vec<ListItem> = catalog::all_documents()
        .into_iter()
        .map(|doc| {
            ListItem::new(vec![
                Line::from(Span::styled(doc.title, Style::default().fg(theme.text).add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(
                    format!("  {} · {}", doc.id, doc.revision),
                    Style::default().fg(theme.text_muted),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(pane_block(" Documents ", focused, theme))
        .highlight_style(Style::default().bg(theme.selected_bg));
    let mut state = ListState::default();
    state.select(Some(app.content_selected));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let (title, lines) = match app.preview() {
        Some(document) => (
            format!(" {} [x] export  [X] export all ", document.filename(&app.config.export.extension)),
            render_markdown(&document.content, theme),
        ),
        None => (" Preview ".to_string(), Vec::new()),
    };

    let preview = Paragraph::new(lines)
        .block(pane_block(&title, false, theme).padding(Padding::horizontal(1)))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(preview, chunks[1]);
}

/// Draw the status bar.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let (badge, badge_color) = match app.mode {
        AppMode::Editing => (" EDIT ", theme.secondary),
        _ => (" NAV ", theme.primary),
    };
    let mut left_spans = vec![
        Span::styled(badge, Style::default().bg(badge_color).fg(theme.background).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
    ];

    if app.store.any_loading() {
        left_spans.push(Span::styled("AI working… ", Style::default().fg(theme.warning)));
    }

    let right_text = match (&app.status_message, app.mode) {
        (Some(message), _) => message.clone(),
        (None, AppMode::Editing) => {
            if app.editor.as_ref().is_some_and(|e| e.multiline) {
                "Enter newline • Alt+Enter/Esc done".to_string()
            } else {
                "Enter/Esc done".to_string()
            }
        }
        (None, _) => view_hint(app).to_string(),
    };

    let left_width = Line::from(left_spans.clone()).width();
    let right_width = right_text.chars().count();
    let total_width = area.width as usize;
    let padding = total_width.saturating_sub(left_width + right_width + 1).max(1);
    left_spans.push(Span::raw(" ".repeat(padding)));

    let right_style = if app.status_message.is_some() {
        Style::default().fg(theme.text)
    } else {
        Style::default().fg(theme.text_muted)
    };
    left_spans.push(Span::styled(right_text, right_style));

    let status = Paragraph::new(Line::from(left_spans)).style(Style::default().bg(theme.background));
    frame.render_widget(status, area);
}

fn view_hint(app: &App) -> &'static str {
    if app.focus == Focus::Sidebar {
        return "↑↓ select • Enter open • Tab switch pane • ? help • q quit";
    }
    match app.nav.view() {
        View::CompanyInfo => "Enter edit • s save & continue • Tab sidebar",
        View::Section => "Enter edit • d draft • f search • r refine • ? help",
        View::Documents => "↑↓ select • x export • X export all • PgUp/PgDn scroll",
        View::Dashboard | View::IsoInfo => "↑↓ scroll • Tab sidebar",
    }
}

/// Draw the popup for AI results and guidance.
fn draw_modal(frame: &mut Frame, app: &App) {
    let Some(modal) = app.modal.as_ref() else {
        return;
    };
    let theme = &app.theme;
    let area = popup_area(frame.area(), 80, 80);
    frame.render_widget(Clear, area);

    let lines = match &modal.body {
        ModalBody::Suggestion(suggestion) => {
            let mut lines = render_markdown(&suggestion.text, theme);
            let links: Vec<(&str, &str)> = suggestion.links().collect();
            if !links.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Sources:",
                    Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
                )));
                for (label, uri) in links {
                    lines.push(Line::from(vec![
                        Span::styled("  • ", Style::default().fg(theme.accent)),
                        Span::styled(label.to_string(), Style::default().fg(theme.text)),
                        Span::styled(format!(" ({uri})"), Style::default().fg(theme.text_muted)),
                    ]));
                }
            }
            lines
        }
        ModalBody::Guidance(text) => render_markdown(text, theme),
    };

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(format!(" {} ", modal.title))
                .title_style(Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
                .title_bottom(Line::from(" Esc close • ↑↓ scroll ").right_aligned())
                .padding(Padding::horizontal(1))
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: false })
        .scroll((modal.scroll, 0));
    frame.render_widget(popup, area);
}

/// Draw the keyboard shortcut overlay.
fn draw_help_overlay(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = popup_area(frame.area(), 60, 80);
    frame.render_widget(Clear, area);

    let category = |name: &'static str| {
        Line::from(Span::styled(name, Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)))
    };

    let lines = vec![
        category("Navigation"),
        help_line("↑ / k, ↓ / j", "Move selection", theme),
        help_line("Enter", "Open view / edit field", theme),
        help_line("Tab", "Switch between sidebar and content", theme),
        help_line("PgUp / PgDn", "Scroll content", theme),
        Line::from(""),
        category("Editing"),
        help_line("Esc", "Finish editing (answers save as you type)", theme),
        help_line("Alt+Enter", "Finish editing a multi-line answer", theme),
        help_line("s / Ctrl+S", "Save company information", theme),
        Line::from(""),
        category("AI assistance"),
        help_line("d", "Draft with AI", theme),
        help_line("f", "Search with AI (web sources)", theme),
        help_line("r", "Refine a plan into a strategy", theme),
        help_line("D / F / R", "View the last draft / search / refinement", theme),
        help_line("p", "Plan vs. strategy explained", theme),
        Line::from(""),
        category("Documents"),
        help_line("x", "Export selected document", theme),
        help_line("X", "Export all documents", theme),
        Line::from(""),
        category("General"),
        help_line("?", "Show this help", theme),
        help_line("q / Ctrl+C", "Quit", theme),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Keyboard Shortcuts ")
            .title_style(Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(2))
            .style(Style::default().bg(theme.background)),
    );
    frame.render_widget(help, area);
}

fn help_line(key: &'static str, description: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:16}"), Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD)),
        Span::styled(description, Style::default().fg(theme.text)),
    ])
}

/// A rectangle centred in `area` taking the given percentages.
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}

fn label_style(selected: bool, theme: &Theme) -> Style {
    if selected {
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    }
}

/// A stored value, or its placeholder in muted text when blank.
fn value_lines(value: &str, placeholder: &str, theme: &Theme) -> Vec<Line<'static>> {
    if value.trim().is_empty() {
        return vec![Line::from(Span::styled(
            format!("    {placeholder}"),
            Style::default().fg(theme.text_muted).add_modifier(Modifier::ITALIC),
        ))];
    }
    value
        .lines()
        .map(|line| Line::from(Span::styled(format!("    {line}"), Style::default().fg(theme.text))))
        .collect()
}

fn indent(lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .map(|mut line| {
            line.spans.insert(0, Span::raw("    "));
            line
        })
        .collect()
}

/// Editor buffer with a block cursor.
fn editor_lines(editor: &Editor, theme: &Theme) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(theme.text).bg(theme.selected_bg);
    let cursor_style = text_style.add_modifier(Modifier::REVERSED);

    let mut lines = Vec::new();
    let mut spans = Vec::new();
    let mut current = String::new();

    for (i, c) in editor.buffer.chars().enumerate() {
        if i == editor.cursor {
            spans.push(Span::styled(std::mem::take(&mut current), text_style));
            let shown = if c == '\n' { ' ' } else { c };
            spans.push(Span::styled(shown.to_string(), cursor_style));
            if c == '\n' {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
            continue;
        }
        if c == '\n' {
            spans.push(Span::styled(std::mem::take(&mut current), text_style));
            lines.push(Line::from(std::mem::take(&mut spans)));
        } else {
            current.push(c);
        }
    }

    spans.push(Span::styled(current, text_style));
    if editor.cursor >= editor.buffer.chars().count() {
        spans.push(Span::styled(" ", cursor_style));
    }
    lines.push(Line::from(spans));
    lines
}

/// Style compiled documents and AI text: headings, bullets, rules and
/// `**bold**` runs.
fn render_markdown(text: &str, theme: &Theme) -> Vec<Line<'static>> {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = line.len() - trimmed.len();

            if let Some(heading) = trimmed.strip_prefix("### ") {
                Line::from(Span::styled(
                    heading.to_string(),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ))
            } else if let Some(heading) = trimmed.strip_prefix("## ") {
                Line::from(Span::styled(
                    heading.to_string(),
                    Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
                ))
            } else if let Some(heading) = trimmed.strip_prefix("# ") {
                Line::from(Span::styled(
                    heading.to_uppercase(),
                    Style::default().fg(theme.primary).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ))
            } else if trimmed == "---" {
                Line::from(Span::styled("─".repeat(40), Style::default().fg(theme.border)))
            } else if let Some(item) = trimmed.strip_prefix("* ").or_else(|| trimmed.strip_prefix("- ")) {
                let mut spans = vec![Span::styled(
                    format!("{}• ", " ".repeat(indent + 2)),
                    Style::default().fg(theme.accent),
                )];
                spans.extend(inline_spans(item.trim_start(), theme));
                Line::from(spans)
            } else if trimmed.len() > 2 && trimmed.starts_with('*') && trimmed.ends_with('*') && !trimmed.starts_with("**") {
                Line::from(Span::styled(
                    trimmed.trim_matches('*').to_string(),
                    Style::default().fg(theme.text_dim).add_modifier(Modifier::ITALIC),
                ))
            } else {
                Line::from(inline_spans(line, theme))
            }
        })
        .collect()
}

/// Split on `**` markers, alternating plain and bold.
fn inline_spans(text: &str, theme: &Theme) -> Vec<Span<'static>> {
    text.split("**")
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| {
            let style = if i % 2 == 1 {
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            Span::styled(part.to_string(), style)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::core::{AnswerStore, Config};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_renders_company_form() {
        let app = App::new(Config::default(), AnswerStore::new());
        let screen = render(&app);
        assert!(screen.contains("Company Full Legal Name"));
        assert!(screen.contains("Navigation"));
    }

    #[test]
    fn test_renders_every_view() {
        let mut app = App::new(Config::default(), AnswerStore::new());
        for entry in App::sidebar_entries() {
            app.navigate(entry.view, entry.section_id);
            app.focus = Focus::Content;
            let screen = render(&app);
            assert!(!screen.trim().is_empty(), "{:?}", entry.view);
        }
    }

    #[test]
    fn test_render_markdown_styles() {
        let theme = Theme::default();
        let lines = render_markdown("# Title\n**Label:** value\n- item\n---", &theme);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].spans[0].content, "TITLE");
        assert_eq!(lines[1].spans[0].content, "Label:");
        assert!(lines[1].spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(lines[1].spans[1].content, " value");
    }

    #[test]
    fn test_editor_cursor_at_end() {
        let theme = Theme::default();
        let editor = Editor {
            target: EditTarget::Answer("1.1.a"),
            buffer: "ab\ncd".to_string(),
            cursor: 5,
            multiline: true,
        };
        let lines = editor_lines(&editor, &theme);
        assert_eq!(lines.len(), 2);
        let last: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(last, "cd ");
    }
}
