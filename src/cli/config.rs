//! Where notes live: `config.toml` defaults under `--dir`/`--slot` overrides.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::infra::DEFAULT_SLOT;

/// Optional defaults read from `~/.config/jot/config.toml`.
///
/// ```toml
/// dir = "/srv/notes"
/// slot = "work"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub dir: Option<PathBuf>,
    pub slot: Option<String>,
}

/// The data directory and slot one invocation works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub data_dir: PathBuf,
    pub slot: String,
}

impl Config {
    /// Reads the config file from its platform location.
    pub fn load() -> Result<Self> {
        Self::read(&config_file())
    }

    /// Reads `path`; a missing file yields the empty config.
    pub fn read(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read config file: {}", path.display()));
            }
        };

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Layers command-line overrides over the file's values.
    ///
    /// Anything still unset falls back to the platform data directory
    /// (`~/.local/share/jot` on Linux) and the `notes` slot.
    pub fn locate(self, dir: Option<PathBuf>, slot: Option<String>) -> Location {
        Location {
            data_dir: dir.or(self.dir).unwrap_or_else(default_data_dir),
            slot: slot
                .or(self.slot)
                .unwrap_or_else(|| DEFAULT_SLOT.to_string()),
        }
    }
}

fn config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jot")
        .join("config.toml")
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jot")
}
