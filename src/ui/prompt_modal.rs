use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::theme;
use crate::app::{App, PromptKind};

/// Draw the one-line input modal (folder selection / new note name).
pub fn draw_prompt(f: &mut Frame, area: Rect, app: &App) {
    let Some(prompt) = app.prompt.as_ref() else {
        return;
    };

    let width = 60u16.min(area.width.saturating_sub(4));
    let height = 6u16;

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

    let title = match prompt.kind {
        PromptKind::SelectFolder => " Select Folder ",
        PromptKind::NewNote => " New Note ",
    };
    let label = match prompt.kind {
        PromptKind::SelectFolder => "Path to your notes folder:",
        PromptKind::NewNote => "File name:",
    };

    let lines = vec![
        Line::from(""),
        Line::from(format!("  {label}")),
        Line::from(vec![
            Span::raw("  > "),
            Span::styled(prompt.input.clone(), theme::PROMPT_INPUT),
            Span::styled("_", theme::PROMPT_INPUT),
        ]),
        Line::from(vec![
            Span::styled("  Enter", theme::HELP_KEY),
            Span::styled(": Confirm  ", theme::HELP_DESC),
            Span::styled("Esc", theme::HELP_KEY),
            Span::styled(": Cancel", theme::HELP_DESC),
        ]),
    ];

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme::PROMPT_BORDER);
    f.render_widget(Paragraph::new(lines).block(block), popup_area);
}
