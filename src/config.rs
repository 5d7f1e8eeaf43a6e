use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Base path for notemark state (log files).
pub fn state_home() -> PathBuf {
    dirs_base().join(".notemark")
}

fn dirs_base() -> PathBuf {
    std::env::var("USERPROFILE")
        .or_else(|_| std::env::var("HOME"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// How often the tick event fires (ms).
pub const TICK_RATE_MS: u64 = 250;

/// How long a notice stays in the status bar (ms).
pub const NOTICE_TTL_MS: u64 = 4000;

/// Recognized note extension, matched case-sensitively.
pub const NOTE_EXTENSION: &str = ".md";

// ---------------------------------------------------------------------------
// Launch config (.notemark.toml)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct LaunchConfig {
    pub display: Option<DisplayConfig>,
    pub editor: Option<EditorConfig>,
}

#[derive(Debug, Deserialize)]
pub struct DisplayConfig {
    pub tick_rate: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct EditorConfig {
    /// Open notes in edit mode instead of preview. Default: false.
    pub open_in_edit: Option<bool>,
}

impl LaunchConfig {
    pub fn tick_rate(&self) -> u64 {
        self.display
            .as_ref()
            .and_then(|d| d.tick_rate)
            .unwrap_or(TICK_RATE_MS)
    }

    pub fn open_in_edit(&self) -> bool {
        self.editor
            .as_ref()
            .and_then(|e| e.open_in_edit)
            .unwrap_or(false)
    }
}

/// Load launch config from `.notemark.toml` in the given directory.
/// Returns default config if the file doesn't exist or can't be parsed.
pub fn load_launch_config(cwd: &Path) -> LaunchConfig {
    let path = cwd.join(".notemark.toml");
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        toml::from_str(&content).unwrap_or_default()
    } else {
        LaunchConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_launch_config(dir.path());
        assert_eq!(config.tick_rate(), TICK_RATE_MS);
        assert!(!config.open_in_edit());
    }

    #[test]
    fn config_overrides_tick_rate_and_editor_mode() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".notemark.toml"),
            "[display]\ntick_rate = 100\n[editor]\nopen_in_edit = true\n",
        )
        .unwrap();
        let config = load_launch_config(dir.path());
        assert_eq!(config.tick_rate(), 100);
        assert!(config.open_in_edit());
    }

    #[test]
    fn malformed_config_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".notemark.toml"), "not [valid toml").unwrap();
        let config = load_launch_config(dir.path());
        assert_eq!(config.tick_rate(), TICK_RATE_MS);
    }
}
