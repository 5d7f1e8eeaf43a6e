/// Commands the keyboard layer dispatches to the core. Each dispatch is
/// handled at most once by the current session/workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Persist the open session's buffer to disk.
    Save,
    /// Flip the open session between edit and preview.
    ToggleMode,
    /// Open the folder-selection prompt.
    OpenFolder,
}
