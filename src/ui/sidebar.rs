use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::theme;
use crate::app::{App, Pane};

pub fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let is_active = app.pane == Pane::Sidebar;
    let border_style = if is_active {
        theme::BORDER_ACTIVE
    } else {
        theme::BORDER_INACTIVE
    };

    let count = app
        .workspace
        .as_ref()
        .map(|ws| ws.notes.len())
        .unwrap_or(0);
    let title = format!(" Notes [{}] ", count);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(ws) = app.workspace.as_ref() else {
        let p = Paragraph::new("No folder selected\n\nPress o to choose a notes folder")
            .style(theme::EMPTY_STATE)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(p, area);
        return;
    };

    if ws.notes.is_empty() {
        let msg = format!("No markdown files found in\n{}", ws.root.display());
        let p = Paragraph::new(msg)
            .style(theme::EMPTY_STATE)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(p, area);
        return;
    }

    let open_name = app.session.as_ref().map(|s| s.entry.name.as_str());
    let items: Vec<ListItem> = ws
        .notes
        .iter()
        .enumerate()
        .map(|(i, note)| {
            let prefix = if i == app.note_index { ">" } else { " " };
            let marker = if Some(note.name.as_str()) == open_name {
                "*"
            } else {
                " "
            };
            let line = Line::from(vec![
                Span::raw(format!("{}{} ", prefix, marker)),
                Span::styled(note.display_name().to_string(), theme::LIST_NORMAL),
            ]);
            ListItem::new(line)
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.note_index.min(ws.notes.len() - 1)));

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::LIST_SELECTED);

    f.render_stateful_widget(list, area, &mut state);
}
