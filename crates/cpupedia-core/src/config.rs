//! Configuration management for cpupedia.
//!
//! Loads configuration from ${CPUPEDIA_HOME}/config.toml with sensible
//! defaults. A missing file is not an error; a malformed one is.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// UI accent color choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Cyan,
    Magenta,
    Green,
    Yellow,
    Blue,
}

impl Accent {
    /// Returns the lowercase name used in config files.
    pub fn name(self) -> &'static str {
        match self {
            Accent::Cyan => "cyan",
            Accent::Magenta => "magenta",
            Accent::Green => "green",
            Accent::Yellow => "yellow",
            Accent::Blue => "blue",
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI accent color.
    pub accent: Accent,

    /// Capture mouse input (click to open a topic, wheel to scroll).
    pub mouse: bool,

    /// Render tick cadence in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accent: Accent::default(),
            mouse: true,
            tick_rate_ms: Self::DEFAULT_TICK_RATE_MS,
        }
    }
}

impl Config {
    const DEFAULT_TICK_RATE_MS: u64 = 33;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default template to `path` unless a config
    /// already exists there. Returns true if a file was written.
    pub fn init_at(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(true)
    }
}

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time; edit that file to
/// change the template.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for cpupedia configuration and log directories.
    //!
    //! CPUPEDIA_HOME resolution order:
    //! 1. CPUPEDIA_HOME environment variable (if set)
    //! 2. ~/.config/cpupedia (default)

    use std::path::PathBuf;

    /// Returns the cpupedia home directory.
    pub fn cpupedia_home() -> PathBuf {
        if let Ok(home) = std::env::var("CPUPEDIA_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("cpupedia"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        cpupedia_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        cpupedia_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.accent, Accent::Cyan);
        assert!(config.mouse);
        assert_eq!(config.tick_rate_ms, 33);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "accent = \"magenta\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.accent, Accent::Magenta);
        assert!(config.mouse);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "accent = \"chartreuse\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn init_writes_template_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert!(Config::init_at(&path).unwrap());
        assert!(!Config::init_at(&path).unwrap());

        // The template must parse back to the defaults.
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.accent, Config::default().accent);
        assert_eq!(config.tick_rate_ms, Config::default().tick_rate_ms);
    }

    #[test]
    fn template_default_roundtrip() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(config.accent, Accent::Cyan);
    }
}
