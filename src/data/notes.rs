use std::fs;

use crate::error::NoteError;
use crate::model::note::NoteEntry;

/// Read a note's full text.
pub fn read_note(entry: &NoteEntry) -> Result<String, NoteError> {
    fs::read_to_string(&entry.path).map_err(NoteError::Load)
}

/// Write `content` verbatim, replacing the previous file content in a single
/// whole-file write.
pub fn save_note(entry: &NoteEntry, content: &str) -> Result<(), NoteError> {
    fs::write(&entry.path, content).map_err(NoteError::Save)
}

/// Remove the note from its owning folder. Removal is directory-relative,
/// so an entry without a folder reference is refused.
pub fn delete_note(entry: &NoteEntry) -> Result<(), NoteError> {
    let folder = entry.folder.as_ref().ok_or(NoteError::MissingParent)?;
    fs::remove_file(folder.join(&entry.name)).map_err(NoteError::Delete)
}
