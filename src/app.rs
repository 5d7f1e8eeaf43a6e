use std::path::{Path, PathBuf};
use std::time::Duration;

use tui_textarea::{CursorMove, TextArea};

use crate::command::Command;
use crate::config::{self, LaunchConfig};
use crate::data::{notes, search, workspace};
use crate::model::note::NoteEntry;
use crate::model::notice::Notice;
use crate::ui::highlight::Highlighter;
use crate::ui::markdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Sidebar,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Edit,
    Preview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SelectFolder,
    NewNote,
}

/// A one-line text input modal (folder selection, new-note name).
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

/// The selected root folder and its enumerated markdown children. Replaced
/// wholesale on each selection, never mutated in place.
pub struct Workspace {
    pub root: PathBuf,
    pub notes: Vec<NoteEntry>,
}

/// The in-memory editable state for the currently open note. At most one
/// exists at a time; it owns the buffer exclusively.
pub struct EditorSession {
    pub entry: NoteEntry,
    pub editor: TextArea<'static>,
    pub mode: SessionMode,
    /// Last successfully persisted content; the session is dirty whenever
    /// the buffer differs from it.
    pub saved_text: String,
    pub preview: Vec<ratatui::text::Line<'static>>,
    pub preview_scroll: usize,
}

impl EditorSession {
    pub fn text(&self) -> String {
        self.editor.lines().join("\n")
    }

    pub fn is_dirty(&self) -> bool {
        self.text() != self.saved_text
    }
}

pub struct App {
    pub should_quit: bool,
    pub dirty: bool,

    pub config: LaunchConfig,
    pub highlighter: Highlighter,

    pub workspace: Option<Workspace>,
    pub note_index: usize,
    pub session: Option<EditorSession>,
    pub pane: Pane,

    // Search overlay
    pub search_open: bool,
    pub search_input: String,
    pub search_index: usize,

    // Input prompt (folder select / new note)
    pub prompt: Option<Prompt>,

    // Delete confirmation
    pub confirm_delete: bool,
    pub delete_target_name: String,

    pub show_help: bool,

    pub notices: Vec<Notice>,
}

impl App {
    pub fn new(config: LaunchConfig) -> Self {
        App {
            should_quit: false,
            dirty: true,
            config,
            highlighter: Highlighter::new(),
            workspace: None,
            note_index: 0,
            session: None,
            pane: Pane::Sidebar,
            search_open: false,
            search_input: String::new(),
            search_index: 0,
            prompt: None,
            confirm_delete: false,
            delete_target_name: String::new(),
            show_help: false,
            notices: Vec::new(),
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn latest_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Drop notices past their display window.
    pub fn tick(&mut self) {
        let ttl = Duration::from_millis(config::NOTICE_TTL_MS);
        self.notices.retain(|n| n.created.elapsed() < ttl);
    }

    // --- Command intake ---

    /// Single entry point for the keyboard layer's commands.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Save => self.save(),
            Command::ToggleMode => self.toggle_mode(),
            Command::OpenFolder => self.open_folder_prompt(),
        }
    }

    // --- Workspace ---

    /// Replace the workspace with `path` and enumerate its notes. On failure
    /// the previous workspace, file list, and open session stay intact.
    pub fn select_workspace(&mut self, path: &Path) {
        match workspace::list_notes(path) {
            Ok(entries) => {
                tracing::info!("workspace: {} ({} notes)", path.display(), entries.len());
                self.workspace = Some(Workspace {
                    root: path.to_path_buf(),
                    notes: entries,
                });
                self.note_index = 0;
                self.session = None;
                self.pane = Pane::Sidebar;
            }
            Err(e) => {
                tracing::warn!("{e}");
                self.push_notice(Notice::error("Folder unavailable", e.to_string()));
            }
        }
    }

    /// Re-enumerate the current workspace. No-op without one. The open
    /// session never survives a refresh: whatever prompted it may have
    /// invalidated the open file's entry.
    pub fn refresh(&mut self) {
        let Some(root) = self.workspace.as_ref().map(|w| w.root.clone()) else {
            return;
        };
        self.session = None;
        match workspace::list_notes(&root) {
            Ok(entries) => {
                if let Some(ws) = self.workspace.as_mut() {
                    ws.notes = entries;
                    if self.note_index >= ws.notes.len() {
                        self.note_index = ws.notes.len().saturating_sub(1);
                    }
                }
            }
            Err(e) => {
                tracing::warn!("refresh: {e}");
                self.push_notice(Notice::error("Refresh failed", e.to_string()));
            }
        }
    }

    /// Re-enumerate after a save so listed timestamps catch up, re-pointing
    /// the open session's entry instead of clearing it.
    fn reload_entries_keeping_session(&mut self) {
        let Some(root) = self.workspace.as_ref().map(|w| w.root.clone()) else {
            return;
        };
        match workspace::list_notes(&root) {
            Ok(entries) => {
                if let Some(session) = self.session.as_mut() {
                    if let Some(updated) = entries.iter().find(|n| n.name == session.entry.name) {
                        session.entry = updated.clone();
                    }
                }
                if let Some(ws) = self.workspace.as_mut() {
                    ws.notes = entries;
                    if self.note_index >= ws.notes.len() {
                        self.note_index = ws.notes.len().saturating_sub(1);
                    }
                }
            }
            Err(e) => tracing::warn!("relist: {e}"),
        }
    }

    /// Create a note under the currently tracked workspace root and open it.
    /// An existing file of the same name is opened as-is, not truncated.
    pub fn create_note(&mut self, name: &str) {
        let Some(root) = self.workspace.as_ref().map(|w| w.root.clone()) else {
            return;
        };
        if name.trim().is_empty() {
            return;
        }
        match workspace::create_note(&root, name) {
            Ok(final_name) => {
                tracing::info!("created {}", final_name);
                self.reload_entries_keeping_session();
                let found = self.workspace.as_ref().and_then(|ws| {
                    ws.notes
                        .iter()
                        .position(|n| n.name == final_name)
                        .map(|i| (i, ws.notes[i].clone()))
                });
                if let Some((idx, entry)) = found {
                    self.note_index = idx;
                    self.open_entry(entry);
                }
                self.push_notice(Notice::success("Created", final_name));
            }
            Err(e) => {
                tracing::warn!("create {}: {e}", name);
                self.push_notice(Notice::error("Create failed", e.to_string()));
            }
        }
    }

    // --- Session ---

    /// Open `entry` as a fresh session. A failed read leaves the session
    /// open with an empty buffer.
    pub fn open_entry(&mut self, entry: NoteEntry) {
        let text = match notes::read_note(&entry) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("open {}: {e}", entry.name);
                self.push_notice(Notice::error("Load failed", e.to_string()));
                String::new()
            }
        };
        let mut editor = TextArea::default();
        editor.insert_str(&text);
        editor.move_cursor(CursorMove::Top);
        editor.move_cursor(CursorMove::Head);
        let mode = if self.config.open_in_edit() {
            SessionMode::Edit
        } else {
            SessionMode::Preview
        };
        self.session = Some(EditorSession {
            entry,
            editor,
            mode,
            saved_text: text,
            preview: Vec::new(),
            preview_scroll: 0,
        });
        self.refresh_preview();
        self.pane = Pane::Content;
    }

    /// Persist the buffer verbatim in one whole-file write. On failure the
    /// buffer and dirty state are untouched so the user can retry.
    pub fn save(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let text = session.text();
        match notes::save_note(&session.entry, &text) {
            Ok(()) => {
                session.saved_text = text;
                let name = session.entry.name.clone();
                tracing::info!("saved {}", name);
                self.push_notice(Notice::success("Saved", name));
                self.reload_entries_keeping_session();
            }
            Err(e) => {
                tracing::warn!("save: {e}");
                self.push_notice(Notice::error("Save failed", e.to_string()));
            }
        }
    }

    /// Flip edit/preview. No I/O; preview always renders the buffer.
    pub fn toggle_mode(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.mode = match session.mode {
            SessionMode::Edit => SessionMode::Preview,
            SessionMode::Preview => SessionMode::Edit,
        };
        let now_preview = session.mode == SessionMode::Preview;
        if now_preview {
            self.refresh_preview();
        }
    }

    fn refresh_preview(&mut self) {
        if let Some(session) = self.session.as_mut() {
            let text = session.text();
            session.preview =
                markdown::render(&text, session.entry.folder.as_deref(), &self.highlighter);
            let max = session.preview.len().saturating_sub(1);
            session.preview_scroll = session.preview_scroll.min(max);
        }
    }

    // --- Delete ---

    pub fn request_delete(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        self.delete_target_name = session.entry.name.clone();
        self.confirm_delete = true;
    }

    pub fn execute_delete(&mut self) {
        self.confirm_delete = false;
        self.delete_target_name.clear();
        let Some(entry) = self.session.as_ref().map(|s| s.entry.clone()) else {
            return;
        };
        match notes::delete_note(&entry) {
            Ok(()) => {
                tracing::info!("deleted {}", entry.name);
                self.refresh();
                self.push_notice(Notice::success("Deleted", entry.name));
            }
            Err(e) => {
                tracing::warn!("delete {}: {e}", entry.name);
                self.push_notice(Notice::error("Delete failed", e.to_string()));
            }
        }
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = false;
        self.delete_target_name.clear();
    }

    // --- Prompts ---

    pub fn open_folder_prompt(&mut self) {
        let current = self
            .workspace
            .as_ref()
            .map(|w| w.root.display().to_string())
            .unwrap_or_default();
        self.prompt = Some(Prompt {
            kind: PromptKind::SelectFolder,
            input: current,
        });
    }

    pub fn open_new_note_prompt(&mut self) {
        if self.workspace.is_none() {
            self.push_notice(Notice::error("No folder", "Select a notes folder first"));
            return;
        }
        let suggested = format!("{}.md", chrono::Local::now().format("%Y-%m-%d"));
        self.prompt = Some(Prompt {
            kind: PromptKind::NewNote,
            input: suggested,
        });
    }

    pub fn confirm_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        let input = prompt.input.trim().to_string();
        if input.is_empty() {
            return;
        }
        match prompt.kind {
            PromptKind::SelectFolder => self.select_workspace(Path::new(&input)),
            PromptKind::NewNote => self.create_note(&input),
        }
    }

    /// Dismissal is a clean no-op, not an error.
    pub fn cancel_prompt(&mut self) {
        tracing::debug!("prompt dismissed");
        self.prompt = None;
    }

    // --- Search ---

    pub fn open_search(&mut self) {
        self.search_open = true;
        self.search_input.clear();
        self.search_index = 0;
    }

    pub fn close_search(&mut self) {
        self.search_open = false;
    }

    pub fn search_results(&self) -> Vec<&NoteEntry> {
        self.workspace
            .as_ref()
            .map(|ws| search::filter(&ws.notes, &self.search_input))
            .unwrap_or_default()
    }

    pub fn confirm_search(&mut self) {
        let picked = self
            .search_results()
            .get(self.search_index)
            .map(|e| (*e).clone());
        let Some(entry) = picked else {
            return;
        };
        if let Some(ws) = self.workspace.as_ref() {
            if let Some(idx) = ws.notes.iter().position(|n| n.name == entry.name) {
                self.note_index = idx;
            }
        }
        self.search_open = false;
        self.open_entry(entry);
    }

    // --- Navigation ---

    pub fn navigate_down(&mut self) {
        match self.pane {
            Pane::Sidebar => {
                if let Some(ws) = self.workspace.as_ref() {
                    if !ws.notes.is_empty() {
                        self.note_index = (self.note_index + 1).min(ws.notes.len() - 1);
                    }
                }
            }
            Pane::Content => {
                if let Some(session) = self.session.as_mut() {
                    if session.mode == SessionMode::Preview {
                        session.preview_scroll = session.preview_scroll.saturating_add(1);
                    }
                }
            }
        }
    }

    pub fn navigate_up(&mut self) {
        match self.pane {
            Pane::Sidebar => {
                self.note_index = self.note_index.saturating_sub(1);
            }
            Pane::Content => {
                if let Some(session) = self.session.as_mut() {
                    if session.mode == SessionMode::Preview {
                        session.preview_scroll = session.preview_scroll.saturating_sub(1);
                    }
                }
            }
        }
    }

    pub fn navigate_left(&mut self) {
        self.pane = Pane::Sidebar;
    }

    pub fn navigate_right(&mut self) {
        if self.session.is_some() {
            self.pane = Pane::Content;
        }
    }

    pub fn jump_top(&mut self) {
        match self.pane {
            Pane::Sidebar => self.note_index = 0,
            Pane::Content => {
                if let Some(session) = self.session.as_mut() {
                    session.preview_scroll = 0;
                }
            }
        }
    }

    pub fn jump_bottom(&mut self) {
        match self.pane {
            Pane::Sidebar => {
                if let Some(ws) = self.workspace.as_ref() {
                    self.note_index = ws.notes.len().saturating_sub(1);
                }
            }
            Pane::Content => {
                if let Some(session) = self.session.as_mut() {
                    session.preview_scroll = session.preview.len().saturating_sub(1);
                }
            }
        }
    }

    /// Open the note currently selected in the sidebar.
    pub fn select_item(&mut self) {
        let picked = self.workspace.as_ref().and_then(|ws| {
            if ws.notes.is_empty() {
                None
            } else {
                Some(ws.notes[self.note_index.min(ws.notes.len() - 1)].clone())
            }
        });
        if let Some(entry) = picked {
            self.open_entry(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::notice::NoticeKind;
    use std::time::{Duration, Instant};

    fn app_with_workspace(dir: &Path) -> App {
        let mut app = App::new(LaunchConfig::default());
        app.select_workspace(dir);
        app
    }

    fn note_names(app: &App) -> Vec<String> {
        app.workspace
            .as_ref()
            .map(|ws| ws.notes.iter().map(|n| n.name.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn selecting_a_workspace_lists_md_files_and_clears_session() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "alpha").unwrap();
        std::fs::write(dir.path().join("skip.txt"), "").unwrap();

        let mut app = app_with_workspace(dir.path());
        assert_eq!(note_names(&app), ["a.md"]);

        app.select_item();
        assert!(app.session.is_some());

        app.select_workspace(dir.path());
        assert!(app.session.is_none());
    }

    #[test]
    fn failed_selection_leaves_previous_workspace_intact() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "alpha").unwrap();

        let mut app = app_with_workspace(dir.path());
        app.select_item();

        app.select_workspace(&dir.path().join("missing"));
        assert_eq!(note_names(&app), ["a.md"]);
        assert!(app.session.is_some());
        assert_eq!(app.latest_notice().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn dismissing_the_folder_prompt_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "alpha").unwrap();

        let mut app = app_with_workspace(dir.path());
        app.select_item();

        app.dispatch(Command::OpenFolder);
        assert!(app.prompt.is_some());
        app.cancel_prompt();

        assert!(app.prompt.is_none());
        assert_eq!(note_names(&app), ["a.md"]);
        assert!(app.session.is_some());
        assert!(app.notices.is_empty());
    }

    #[test]
    fn opening_a_note_loads_its_content_clean() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "# Hello\n").unwrap();

        let mut app = app_with_workspace(dir.path());
        app.select_item();

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.text(), "# Hello\n");
        assert!(!session.is_dirty());
        assert_eq!(session.mode, SessionMode::Preview);
        assert!(!session.preview.is_empty());
    }

    #[test]
    fn load_failure_still_opens_a_session_with_empty_buffer() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "alpha").unwrap();

        let mut app = app_with_workspace(dir.path());
        // Invalidate the entry out-of-band between listing and open.
        std::fs::remove_file(dir.path().join("a.md")).unwrap();
        app.select_item();

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.text(), "");
        assert!(!session.is_dirty());
        assert_eq!(app.latest_notice().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn save_round_trips_the_buffer_and_clears_dirty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "old").unwrap();

        let mut app = app_with_workspace(dir.path());
        app.select_item();

        {
            let session = app.session.as_mut().unwrap();
            session.editor.insert_str(" new words");
            assert!(session.is_dirty());
        }
        app.dispatch(Command::Save);

        let session = app.session.as_ref().unwrap();
        assert!(!session.is_dirty());
        let on_disk = std::fs::read_to_string(dir.path().join("a.md")).unwrap();
        assert_eq!(on_disk, session.text());
        assert_eq!(app.latest_notice().unwrap().kind, NoticeKind::Success);

        // Reopening reproduces exactly what was saved.
        let saved = session.text();
        app.select_item();
        assert_eq!(app.session.as_ref().unwrap().text(), saved);
    }

    #[test]
    fn failed_save_keeps_buffer_and_dirty_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.md");
        std::fs::write(&path, "old").unwrap();

        let mut app = app_with_workspace(dir.path());
        app.select_item();
        {
            let session = app.session.as_mut().unwrap();
            session.editor.insert_str("edited ");
        }

        // Swap the file for a directory so the write fails regardless of
        // the uid the tests run under.
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        app.dispatch(Command::Save);

        let session = app.session.as_ref().unwrap();
        assert!(session.is_dirty());
        assert!(session.text().starts_with("edited "));
        assert_eq!(app.latest_notice().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn delete_removes_entry_and_clears_session() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "").unwrap();
        std::fs::write(dir.path().join("b.md"), "").unwrap();

        let mut app = app_with_workspace(dir.path());
        app.select_item();

        app.request_delete();
        assert!(app.confirm_delete);
        app.execute_delete();

        assert!(app.session.is_none());
        assert_eq!(note_names(&app), ["b.md"]);
        assert!(!dir.path().join("a.md").exists());
    }

    #[test]
    fn cancelling_delete_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "").unwrap();

        let mut app = app_with_workspace(dir.path());
        app.select_item();
        app.request_delete();
        app.cancel_delete();

        assert!(!app.confirm_delete);
        assert!(app.session.is_some());
        assert!(dir.path().join("a.md").exists());
    }

    #[test]
    fn created_note_joins_the_list_and_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("z.md"), "").unwrap();

        let mut app = app_with_workspace(dir.path());
        app.create_note("2024-01-01");

        assert!(note_names(&app).contains(&"2024-01-01.md".to_string()));
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.entry.name, "2024-01-01.md");
        assert_eq!(session.text(), "");
        // New files attach to the workspace root, so delete works.
        assert_eq!(session.entry.folder.as_deref(), Some(dir.path()));
    }

    #[test]
    fn creating_over_an_existing_name_opens_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("keep.md"), "existing body").unwrap();

        let mut app = app_with_workspace(dir.path());
        app.create_note("keep");

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.entry.name, "keep.md");
        assert_eq!(session.text(), "existing body");
    }

    #[test]
    fn refresh_picks_up_external_changes_and_clears_session() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "").unwrap();

        let mut app = app_with_workspace(dir.path());
        app.select_item();

        std::fs::write(dir.path().join("later.md"), "").unwrap();
        app.refresh();

        assert!(app.session.is_none());
        assert_eq!(note_names(&app), ["a.md", "later.md"]);
    }

    #[test]
    fn toggle_mode_flips_without_io_and_preview_tracks_buffer() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "start").unwrap();

        let mut app = app_with_workspace(dir.path());
        app.select_item();
        app.dispatch(Command::ToggleMode);
        assert_eq!(app.session.as_ref().unwrap().mode, SessionMode::Edit);

        app.session
            .as_mut()
            .unwrap()
            .editor
            .insert_str(" unsaved tail");
        app.dispatch(Command::ToggleMode);

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.mode, SessionMode::Preview);
        let preview_text: String = session
            .preview
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(preview_text.contains("unsaved tail"));
        // Disk still has the old content; preview came from the buffer.
        assert_eq!(
            std::fs::read_to_string(dir.path().join("a.md")).unwrap(),
            "start"
        );
    }

    #[test]
    fn commands_without_a_session_are_no_ops() {
        let mut app = App::new(LaunchConfig::default());
        app.dispatch(Command::Save);
        app.dispatch(Command::ToggleMode);
        assert!(app.session.is_none());
        assert!(app.notices.is_empty());
    }

    #[test]
    fn search_selection_opens_the_picked_note() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Daily.md"), "one").unwrap();
        std::fs::write(dir.path().join("daily-2.md"), "two").unwrap();
        std::fs::write(dir.path().join("other.md"), "").unwrap();

        let mut app = app_with_workspace(dir.path());
        app.open_search();
        app.search_input.push_str("DAILY");

        // The listing sorts case-insensitively and '-' orders before '.',
        // so daily-2.md precedes Daily.md; matches keep that order.
        let names: Vec<_> = app
            .search_results()
            .iter()
            .map(|n| n.name.clone())
            .collect();
        assert_eq!(names, ["daily-2.md", "Daily.md"]);

        app.search_index = 1;
        app.confirm_search();
        assert!(!app.search_open);
        assert_eq!(app.session.as_ref().unwrap().entry.name, "Daily.md");
    }

    #[test]
    fn notices_expire_on_tick() {
        let mut app = App::new(LaunchConfig::default());
        let mut stale = Notice::success("Saved", "a.md");
        stale.created = Instant::now() - Duration::from_millis(config::NOTICE_TTL_MS + 100);
        app.notices.push(stale);
        app.notices.push(Notice::success("Saved", "b.md"));

        app.tick();
        assert_eq!(app.notices.len(), 1);
        assert_eq!(app.notices[0].message, "b.md");
    }
}
