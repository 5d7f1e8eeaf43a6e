use ratatui::style::{Color, Modifier, Style};

// Status bar
pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

// List items
pub const LIST_SELECTED: Style = Style::new()
    .fg(Color::White)
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);
pub const LIST_NORMAL: Style = Style::new().fg(Color::White);

// Borders
pub const BORDER_ACTIVE: Style = Style::new().fg(Color::Cyan);
pub const BORDER_INACTIVE: Style = Style::new().fg(Color::DarkGray);
pub const EDIT_BORDER: Style = Style::new().fg(Color::Yellow);

// Help overlay
pub const HELP_TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const HELP_KEY: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
pub const HELP_DESC: Style = Style::new().fg(Color::White);

// Footer hints
pub const HINT_KEY: Style = Style::new().fg(Color::Yellow).bg(Color::DarkGray);
pub const HINT_DESC: Style = Style::new().fg(Color::Gray).bg(Color::DarkGray);

// Empty state
pub const EMPTY_STATE: Style = Style::new().fg(Color::DarkGray);

// Mode badges
pub const MODE_EDIT: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Red)
    .add_modifier(Modifier::BOLD);
pub const MODE_PREVIEW: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);
pub const MODE_DIRTY: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

// Notices
pub const NOTICE_SUCCESS: Style = Style::new().fg(Color::Green).bg(Color::DarkGray);
pub const NOTICE_ERROR: Style = Style::new().fg(Color::Red).bg(Color::DarkGray);

// Search overlay
pub const SEARCH_INPUT: Style = Style::new().fg(Color::Yellow);
pub const SEARCH_BORDER: Style = Style::new().fg(Color::Cyan);

// Prompt modal
pub const PROMPT_BORDER: Style = Style::new().fg(Color::Cyan);
pub const PROMPT_INPUT: Style = Style::new().fg(Color::Yellow);

// Markdown styles
pub const MD_HEADING: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const MD_CODE_FENCE: Style = Style::new().fg(Color::DarkGray);
pub const MD_CODE_BLOCK: Style = Style::new().fg(Color::Yellow);
pub const MD_NORMAL: Style = Style::new().fg(Color::White);
pub const MD_QUOTE: Style = Style::new().fg(Color::Green);
pub const MD_RULE: Style = Style::new().fg(Color::DarkGray);
pub const MD_IMAGE: Style = Style::new().fg(Color::Magenta);
pub const MD_IMAGE_ERR: Style = Style::new().fg(Color::Red);
