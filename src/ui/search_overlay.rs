use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::theme;
use crate::app::App;

/// Draw the filename search overlay.
pub fn draw_search(f: &mut Frame, area: Rect, app: &App) {
    let width = 70u16.min(area.width.saturating_sub(4));
    let height = 20u16.min(area.height.saturating_sub(4));

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

    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // input
            Constraint::Min(3),    // results
            Constraint::Length(2), // hints
        ])
        .split(popup_area);

    let input_block = Block::default()
        .title(" Search notes ")
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(theme::SEARCH_BORDER);
    let input_line = Line::from(vec![
        Span::raw(" > "),
        Span::styled(app.search_input.clone(), theme::SEARCH_INPUT),
        Span::styled("_", theme::SEARCH_INPUT),
    ]);
    f.render_widget(Paragraph::new(input_line).block(input_block), inner_chunks[0]);

    let results_block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(theme::SEARCH_BORDER);

    let results = app.search_results();
    if results.is_empty() {
        let msg = if app.search_input.is_empty() {
            "Type to search markdown files..."
        } else {
            "No results found."
        };
        let p = Paragraph::new(msg)
            .style(theme::EMPTY_STATE)
            .block(results_block);
        f.render_widget(p, inner_chunks[1]);
    } else {
        let items: Vec<ListItem> = results
            .iter()
            .enumerate()
            .map(|(i, note)| {
                let prefix = if i == app.search_index { ">" } else { " " };
                let line = Line::from(vec![
                    Span::raw(format!(" {} ", prefix)),
                    Span::styled(note.name.clone(), theme::LIST_NORMAL),
                ]);
                ListItem::new(line)
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(app.search_index.min(results.len() - 1)));

        let list = List::new(items)
            .block(results_block)
            .highlight_style(theme::LIST_SELECTED);
        f.render_stateful_widget(list, inner_chunks[1], &mut state);
    }

    let hints = Line::from(vec![
        Span::styled(" Up/Down", theme::HELP_KEY),
        Span::styled(": Navigate  ", theme::HELP_DESC),
        Span::styled("Enter", theme::HELP_KEY),
        Span::styled(": Open  ", theme::HELP_DESC),
        Span::styled("Esc", theme::HELP_KEY),
        Span::styled(": Close ", theme::HELP_DESC),
    ]);
    let hint_block = Block::default()
        .borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT)
        .border_style(theme::SEARCH_BORDER);
    f.render_widget(Paragraph::new(hints).block(hint_block), inner_chunks[2]);
}
