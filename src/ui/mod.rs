pub mod editor_view;
pub mod help_overlay;
pub mod highlight;
pub mod layout;
pub mod markdown;
pub mod prompt_modal;
pub mod search_overlay;
pub mod sidebar;
pub mod theme;

use ratatui::Frame;

use crate::app::App;

/// Main draw dispatcher.
pub fn draw(f: &mut Frame, app: &App) {
    layout::draw_layout(f, app);
}
