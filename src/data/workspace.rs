use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::config::NOTE_EXTENSION;
use crate::error::NoteError;
use crate::model::note::NoteEntry;

/// Enumerate `root` and build entries for its markdown files. Subdirectories
/// and files without the `.md` extension (case-sensitive) are skipped.
/// Entries are sorted case-insensitively by name.
pub fn list_notes(root: &Path) -> Result<Vec<NoteEntry>, NoteError> {
    let read_dir =
        fs::read_dir(root).map_err(|e| NoteError::WorkspaceUnavailable(root.to_path_buf(), e))?;

    let mut notes = Vec::new();
    for entry in read_dir {
        let entry =
            entry.map_err(|e| NoteError::WorkspaceUnavailable(root.to_path_buf(), e))?;
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.ends_with(NOTE_EXTENSION) {
            continue;
        }
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!("skipping {}: {}", name, e);
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        // Platforms without a birth time report created == modified.
        let created = metadata.created().unwrap_or(modified);
        notes.push(NoteEntry {
            name,
            path: entry.path(),
            folder: Some(root.to_path_buf()),
            created,
            modified,
        });
    }

    notes.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(notes)
}

/// Create `name` under `root` without truncating an existing file of that
/// name. Returns the final file name with the `.md` extension applied.
pub fn create_note(root: &Path, name: &str) -> Result<String, NoteError> {
    let name = ensure_extension(name.trim());
    let path = root.join(&name);
    fs::OpenOptions::new()
        .create(true)
        .write(true)
        .open(&path)
        .map_err(NoteError::Save)?;
    Ok(name)
}

/// Append the note extension unless the name already carries it.
pub fn ensure_extension(name: &str) -> String {
    if name.ends_with(NOTE_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{NOTE_EXTENSION}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_keeps_only_md_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "a").unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        std::fs::write(dir.path().join("c.MD"), "c").unwrap();
        std::fs::create_dir(dir.path().join("sub.md")).unwrap();

        let notes = list_notes(dir.path()).unwrap();
        let names: Vec<_> = notes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["a.md"]);
    }

    #[test]
    fn listing_sorts_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["Zebra.md", "alpha.md", "Beta.md"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }

        let notes = list_notes(dir.path()).unwrap();
        let names: Vec<_> = notes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["alpha.md", "Beta.md", "Zebra.md"]);
    }

    #[test]
    fn entries_carry_owning_folder_and_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("note.md"), "hi").unwrap();

        let notes = list_notes(dir.path()).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].folder.as_deref(), Some(dir.path()));
        // created is best-effort and never later than now; modified is real.
        assert!(notes[0].modified > std::time::SystemTime::UNIX_EPOCH);
        assert!(notes[0].created <= std::time::SystemTime::now());
    }

    #[test]
    fn missing_root_is_a_workspace_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("nope");
        assert!(matches!(
            list_notes(&gone),
            Err(NoteError::WorkspaceUnavailable(_, _))
        ));
    }

    #[test]
    fn create_appends_extension_and_leaves_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let name = create_note(dir.path(), "2024-01-01").unwrap();
        assert_eq!(name, "2024-01-01.md");
        assert_eq!(
            std::fs::read_to_string(dir.path().join(&name)).unwrap(),
            ""
        );

        std::fs::write(dir.path().join("keep.md"), "existing").unwrap();
        let name = create_note(dir.path(), "keep.md").unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join(&name)).unwrap(),
            "existing"
        );
    }
}
