use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::theme;
use crate::app::{App, Pane, SessionMode};

pub fn draw_editor(f: &mut Frame, area: Rect, app: &App) {
    let is_active = app.pane == Pane::Content;

    let Some(session) = app.session.as_ref() else {
        let block = Block::default()
            .title(" Preview ")
            .borders(Borders::ALL)
            .border_style(if is_active {
                theme::BORDER_ACTIVE
            } else {
                theme::BORDER_INACTIVE
            });
        let msg = if app.workspace.is_some() {
            "Select a note to view"
        } else {
            "Select a folder to view your notes."
        };
        let p = Paragraph::new(msg).style(theme::EMPTY_STATE).block(block);
        f.render_widget(p, area);
        return;
    };

    let editing = session.mode == SessionMode::Edit;
    let border_style = if editing {
        theme::EDIT_BORDER
    } else if is_active {
        theme::BORDER_ACTIVE
    } else {
        theme::BORDER_INACTIVE
    };

    // created may equal modified on platforms without a birth time.
    let created: DateTime<Local> = session.entry.created.into();
    let modified: DateTime<Local> = session.entry.modified.into();
    let title = format!(
        " {}{} - created {} - edited {} ",
        session.entry.display_name(),
        if session.is_dirty() { " *" } else { "" },
        created.format("%Y-%m-%d"),
        modified.format("%Y-%m-%d %H:%M")
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if editing {
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(&session.editor, inner);
        return;
    }

    // Preview: slice the cached rendered lines into the visible window.
    let inner = block.inner(area);
    f.render_widget(block, area);

    let inner_height = inner.height as usize;
    let total = session.preview.len();
    let scroll_offset = session
        .preview_scroll
        .min(total.saturating_sub(inner_height));
    let visible_end = (scroll_offset + inner_height).min(total);

    let rendered: Vec<Line> = session.preview[scroll_offset..visible_end].to_vec();
    let paragraph = Paragraph::new(rendered);
    f.render_widget(paragraph, inner);
}
