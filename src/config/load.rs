use std::{env, path::PathBuf};

use crate::error::Error;

use super::schema::{LibrarySettings, Settings};

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `SBPLAY__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("SBPLAY")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }
}

impl LibrarySettings {
    /// Effective soundboard directory: the configured override, or `~/.sb/audios`.
    pub fn audios_root(&self) -> Result<PathBuf, Error> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }
        home_dir()
            .map(|home| home.join(".sb").join("audios"))
            .ok_or(Error::NoHomeDir)
    }
}

/// Resolve the config path from `SBPLAY_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("SBPLAY_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/sbplay/config.toml`
/// or `~/.config/sbplay/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        home_dir().map(|home| home.join(".config"))
    };

    config_home.map(|d| d.join("sbplay").join("config.toml"))
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}
