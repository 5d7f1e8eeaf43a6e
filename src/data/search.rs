use crate::model::note::NoteEntry;

/// Case-insensitive substring filter over the current file list. An empty
/// query yields no results; matches keep the list's existing order.
pub fn filter<'a>(notes: &'a [NoteEntry], query: &str) -> Vec<&'a NoteEntry> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|n| n.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::SystemTime;

    fn entry(name: &str) -> NoteEntry {
        NoteEntry {
            name: name.to_string(),
            path: PathBuf::from(name),
            folder: None,
            created: SystemTime::UNIX_EPOCH,
            modified: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn empty_query_yields_no_results() {
        let notes = vec![entry("Daily.md"), entry("daily-2.md")];
        assert!(filter(&notes, "").is_empty());
    }

    #[test]
    fn match_is_case_insensitive_and_keeps_order() {
        let notes = vec![entry("Daily.md"), entry("daily-2.md")];
        let hits = filter(&notes, "DAILY");
        let names: Vec<_> = hits.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["Daily.md", "daily-2.md"]);
    }

    #[test]
    fn substring_matches_anywhere_in_the_name() {
        let notes = vec![entry("2024-01-01.md"), entry("meeting-notes.md")];
        let hits = filter(&notes, "note");
        let names: Vec<_> = hits.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["meeting-notes.md"]);
    }

    #[test]
    fn no_match_yields_empty() {
        let notes = vec![entry("a.md")];
        assert!(filter(&notes, "zzz").is_empty());
    }
}
