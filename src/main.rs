mod app;
mod command;
mod config;
mod data;
mod error;
mod logging;
mod model;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self as ct_event, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::{App, SessionMode};
use crate::command::Command;

#[derive(Parser)]
#[command(
    name = "notemark",
    version,
    about = "Notemark - folder-backed markdown notes in the terminal",
    override_help = HELP_TEXT,
)]
struct Cli {
    /// Notes folder to open at startup
    folder: Option<PathBuf>,
}

const HELP_TEXT: &str = "\
Notemark - folder-backed markdown notes in the terminal

USAGE:
  notemark [FOLDER]

ARGS:
  [FOLDER]    Notes folder to open at startup (or pick one with 'o')

OPTIONS:
  -h, --help        Print this help
  -V, --version     Print version

KEYBINDINGS:
  j/k  Up/Down       Navigate list / scroll preview
  h/l  Left/Right    Switch panes
  Enter              Open selected note
  g / G              Jump to top / bottom
  e / Ctrl+E         Toggle edit / preview
  Ctrl+S             Save note
  Esc                Leave edit mode (keeps changes)
  n                  New note
  d / Del            Delete open note
  r                  Refresh file list
  o / Ctrl+O         Select notes folder
  / or Ctrl+K        Search notes
  ? / Ctrl+H         Toggle help overlay
  q / Ctrl+C         Quit

CONFIG:
  Reads .notemark.toml from the launch directory:
    [display] tick_rate = 250
    [editor]  open_in_edit = false

EXAMPLES:
  notemark ~/notes
  notemark";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init().ok();

    let launch_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let launch_config = config::load_launch_config(&launch_dir);

    run_tui(cli.folder, launch_config)
}

fn run_tui(folder: Option<PathBuf>, launch_config: config::LaunchConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, folder, launch_config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {}", e);
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    folder: Option<PathBuf>,
    launch_config: config::LaunchConfig,
) -> Result<()> {
    let mut app = App::new(launch_config);
    if let Some(folder) = folder {
        app.select_workspace(&folder);
    }

    let tick_rate = Duration::from_millis(app.config.tick_rate());
    let mut last_tick = Instant::now();

    loop {
        // Draw only when dirty
        if app.dirty {
            terminal.draw(|f| ui::draw(f, &app))?;
            app.dirty = false;
        }

        // Handle events
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if ct_event::poll(timeout)? {
            if let Event::Key(key) = ct_event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key);
                    app.mark_dirty();
                }
            }
        }

        // Tick
        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
            app.tick();
            app.mark_dirty();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keybindings (always active)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows everything else while shown
    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => app.show_help = false,
            KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.show_help = false
            }
            _ => {}
        }
        return;
    }

    // Delete confirmation dialog
    if app.confirm_delete {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.execute_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
        return;
    }

    // Input prompt (folder select / new note)
    if app.prompt.is_some() {
        handle_prompt_key(app, key);
        return;
    }

    // Search overlay
    if app.search_open {
        handle_search_key(app, key);
        return;
    }

    // Command shortcuts, active in every remaining context
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => {
                app.dispatch(Command::Save);
                return;
            }
            KeyCode::Char('e') => {
                app.dispatch(Command::ToggleMode);
                return;
            }
            KeyCode::Char('o') => {
                app.dispatch(Command::OpenFolder);
                return;
            }
            KeyCode::Char('k') => {
                app.open_search();
                return;
            }
            KeyCode::Char('h') => {
                app.show_help = true;
                return;
            }
            _ => {}
        }
    }

    // Edit mode: every other key belongs to the TextArea
    if app
        .session
        .as_ref()
        .is_some_and(|s| s.mode == SessionMode::Edit)
    {
        if key.code == KeyCode::Esc {
            app.dispatch(Command::ToggleMode);
            return;
        }
        if let Some(session) = app.session.as_mut() {
            session.editor.input(key);
        }
        return;
    }

    // Quit
    if key.code == KeyCode::Char('q') {
        app.should_quit = true;
        return;
    }

    match key.code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.navigate_down(),
        KeyCode::Char('k') | KeyCode::Up => app.navigate_up(),
        KeyCode::Char('h') | KeyCode::Left => app.navigate_left(),
        KeyCode::Char('l') | KeyCode::Right => app.navigate_right(),
        KeyCode::Enter => app.select_item(),

        // Jump
        KeyCode::Char('g') => app.jump_top(),
        KeyCode::Char('G') => app.jump_bottom(),

        // Session
        KeyCode::Char('e') => app.dispatch(Command::ToggleMode),
        KeyCode::Char('n') => app.open_new_note_prompt(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),

        // Workspace
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('o') => app.dispatch(Command::OpenFolder),

        // Search
        KeyCode::Char('/') => app.open_search(),

        // Help
        KeyCode::Char('?') => app.show_help = true,

        _ => {}
    }
}

fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.cancel_prompt();
        }
        KeyCode::Enter => {
            app.confirm_prompt();
        }
        KeyCode::Backspace => {
            if let Some(prompt) = app.prompt.as_mut() {
                prompt.input.pop();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(prompt) = app.prompt.as_mut() {
                prompt.input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_search();
        }
        KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.close_search();
        }
        KeyCode::Enter => {
            app.confirm_search();
        }
        KeyCode::Down => {
            let len = app.search_results().len();
            if len > 0 && app.search_index + 1 < len {
                app.search_index += 1;
            }
        }
        KeyCode::Up => {
            app.search_index = app.search_index.saturating_sub(1);
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.search_index = 0;
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input.push(c);
            app.search_index = 0;
        }
        _ => {}
    }
}
