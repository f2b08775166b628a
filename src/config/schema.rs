use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/kaudiobooks/config.toml` or `~/.config/kaudiobooks/config.toml`
///
/// Precedence (highest wins):
/// 1) Command line flags
/// 2) Environment variables (prefix `KAUDIOBOOKS__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub audible: AudibleSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Extensions (without dot) that `purge` removes from audiobook directories.
    pub clutter_extensions: Vec<String>,
    /// Whether to follow symlinks while walking the tree.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            clutter_extensions: vec!["jpg".into(), "m3u".into()],
            follow_links: false,
            include_hidden: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudibleSettings {
    /// Directory holding downloaded `.aax`/`.aaxc` containers.
    pub dir: Option<PathBuf>,
    /// The `audible` command line client.
    pub cli: String,
    /// Tool that turns a container into chapter files.
    pub decoder: String,
    /// Number of conversions running at the same time.
    pub jobs: usize,
    /// Passed to `audible download --quality`.
    pub quality: String,
}

impl Default for AudibleSettings {
    fn default() -> Self {
        Self {
            dir: None,
            cli: "audible".to_string(),
            decoder: "aaxtomp3".to_string(),
            jobs: 2,
            quality: "best".to_string(),
        }
    }
}
