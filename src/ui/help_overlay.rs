use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::theme;

pub fn draw_help(f: &mut Frame, area: Rect) {
    // Center a box
    let width = 58u16.min(area.width.saturating_sub(4));
    let height = 22u16.min(area.height.saturating_sub(4));

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1]);

    let popup_area = horiz[1];

    // Clear background
    f.render_widget(Clear, popup_area);

    let bindings = [
        ("j/k or Up/Down", "Navigate list / scroll preview"),
        ("h/l or Left/Right", "Switch panes"),
        ("Enter", "Open selected note"),
        ("g / G", "Jump to top / bottom"),
        ("e / Ctrl+E", "Toggle edit / preview"),
        ("Ctrl+S", "Save note"),
        ("Esc", "Leave edit mode (keeps changes)"),
        ("n", "New note"),
        ("d / Del", "Delete open note"),
        ("r", "Refresh file list"),
        ("o / Ctrl+O", "Select notes folder"),
        ("/ or Ctrl+K", "Search notes"),
        ("? / Ctrl+H", "Toggle this help"),
        ("q / Ctrl+C", "Quit"),
    ];

    let mut lines = vec![
        Line::from(Span::styled(" Keybindings", theme::HELP_TITLE)),
        Line::from(""),
    ];

    for (key, desc) in &bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:20}", key), theme::HELP_KEY),
            Span::styled(*desc, theme::HELP_DESC),
        ]));
    }

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(theme::BORDER_ACTIVE);

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, popup_area);
}
