use std::path::PathBuf;
use std::time::SystemTime;

/// One discoverable markdown document in the workspace.
///
/// Entries are derived by enumeration and go stale the moment the folder
/// changes out-of-band; an explicit refresh is the only way to catch up.
#[derive(Debug, Clone)]
pub struct NoteEntry {
    /// File name including the `.md` extension, unique within the workspace.
    pub name: String,
    /// Full path used for read/write.
    pub path: PathBuf,
    /// Owning folder. Delete is directory-relative (`folder/name`), so an
    /// entry without this reference cannot be deleted.
    pub folder: Option<PathBuf>,
    /// Best-effort creation time. Platforms without a birth time report
    /// `created == modified`; no creation time is ever fabricated.
    pub created: SystemTime,
    pub modified: SystemTime,
}

impl NoteEntry {
    /// Name without the `.md` suffix, for display.
    pub fn display_name(&self) -> &str {
        self.name.strip_suffix(".md").unwrap_or(&self.name)
    }
}
