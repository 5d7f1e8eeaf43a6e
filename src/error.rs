use std::io;
use std::path::PathBuf;

/// Failures of the note/workspace operations. Cancellation of a prompt is
/// not an error; the modal simply closes without dispatching anything.
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("cannot open {dir} as a notes folder: {1}", dir = .0.display())]
    WorkspaceUnavailable(PathBuf, #[source] io::Error),
    #[error("failed to read note: {0}")]
    Load(#[source] io::Error),
    #[error("failed to write note: {0}")]
    Save(#[source] io::Error),
    #[error("failed to delete note: {0}")]
    Delete(#[source] io::Error),
    #[error("note has no owning folder reference")]
    MissingParent,
}
