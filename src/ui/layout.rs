use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::{editor_view, help_overlay, prompt_modal, search_overlay, sidebar, theme};
use crate::app::{App, SessionMode};
use crate::model::notice::NoticeKind;

pub fn draw_layout(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    // Content area: sidebar + editor/preview
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[0]);

    sidebar::draw_sidebar(f, panes[0], app);
    editor_view::draw_editor(f, panes[1], app);

    // Status bar
    draw_status_bar(f, chunks[1], app);

    // Delete confirmation overlay
    if app.confirm_delete {
        draw_delete_confirm(f, f.area(), &app.delete_target_name);
    }

    // Search overlay
    if app.search_open {
        search_overlay::draw_search(f, f.area(), app);
    }

    // Input prompt (on top of everything but help)
    if app.prompt.is_some() {
        prompt_modal::draw_prompt(f, f.area(), app);
    }

    // Help overlay (on top of everything)
    if app.show_help {
        help_overlay::draw_help(f, f.area());
    }
}

fn draw_delete_confirm(f: &mut Frame, area: Rect, name: &str) {
    let width = 50u16.min(area.width.saturating_sub(4));
    let height = 5u16;

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1]);

    let popup_area = horiz[1];

    f.render_widget(Clear, popup_area);

    let display_name = if name.chars().count() > 36 {
        let truncated: String = name.chars().take(33).collect();
        format!("{}...", truncated)
    } else {
        name.to_string()
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Delete {}?", display_name),
            Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                "  y",
                Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" yes  "),
            Span::styled(
                "n",
                Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" no"),
        ]),
    ];

    let block = Block::default()
        .title(" Confirm Delete ")
        .borders(Borders::ALL)
        .border_style(Style::new().fg(Color::Red));

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, popup_area);
}

fn hint_text(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints: Vec<(&str, &str)> = if app.prompt.is_some() {
        vec![("Enter", "confirm"), ("Esc", "cancel")]
    } else if app.search_open {
        vec![("Enter", "open"), ("Esc", "close")]
    } else if app.session.as_ref().is_some_and(|s| s.mode == SessionMode::Edit) {
        vec![("^S", "save"), ("^E", "preview"), ("Esc", "preview")]
    } else {
        vec![
            ("j/k", "nav"),
            ("Enter", "open"),
            ("e", "edit"),
            ("n", "new"),
            ("d", "delete"),
            ("/", "search"),
            ("o", "folder"),
        ]
    };
    hints.push(("?", "help"));
    hints
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut left_spans: Vec<Span> = Vec::new();

    // Mode badges
    if let Some(session) = app.session.as_ref() {
        match session.mode {
            SessionMode::Edit => left_spans.push(Span::styled(" EDIT ", theme::MODE_EDIT)),
            SessionMode::Preview => {
                left_spans.push(Span::styled(" PREVIEW ", theme::MODE_PREVIEW))
            }
        }
        if session.is_dirty() {
            left_spans.push(Span::styled(" UNSAVED ", theme::MODE_DIRTY));
        }
    }

    // Latest notice
    if let Some(notice) = app.latest_notice() {
        let style = match notice.kind {
            NoticeKind::Success => theme::NOTICE_SUCCESS,
            NoticeKind::Error => theme::NOTICE_ERROR,
        };
        let text = format!(" {}: {} ", notice.title, notice.message);
        // Keep the badge from swallowing the whole bar on long messages.
        let text = if text.width() > 60 {
            let truncated: String = text.chars().take(57).collect();
            format!("{}...", truncated)
        } else {
            text
        };
        left_spans.push(Span::styled(text, style));
    }

    // Build right-aligned hint spans
    let hints = hint_text(app);
    let mut hint_spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            hint_spans.push(Span::styled("  ", theme::STATUS_BAR));
        }
        hint_spans.push(Span::styled(*key, theme::HINT_KEY));
        hint_spans.push(Span::styled(":", theme::HINT_DESC));
        hint_spans.push(Span::styled(*desc, theme::HINT_DESC));
    }
    hint_spans.push(Span::styled(" ", theme::STATUS_BAR));

    let left_width: usize = left_spans.iter().map(|s| s.width()).sum();
    let hint_width: usize = hint_spans.iter().map(|s| s.width()).sum();
    let total = area.width as usize;
    let gap = total.saturating_sub(left_width + hint_width);

    let mut spans = left_spans;
    spans.push(Span::styled(" ".repeat(gap), theme::STATUS_BAR));
    spans.extend(hint_spans);

    let line = Line::from(spans);
    f.render_widget(Paragraph::new(line), area);
}
