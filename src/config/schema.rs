use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/sbplay/config.toml` or
/// `~/.config/sbplay/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SBPLAY__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: LibrarySettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory scanned for audio files. Defaults to `~/.sb/audios`.
    pub root: Option<PathBuf>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            root: None,
            follow_links: false,
        }
    }
}
