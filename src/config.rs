use crate::maze::CycleDetection;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the configuration file, if the platform has a config directory.
pub fn path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("mazerunner").join("config.toml"))
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How a traversal decides it is looping.
    pub cycle_detection: CycleDetection,

    /// Log the grid, with the traveler marked, before traversal starts.
    pub dump_grid: bool,
}

impl Config {
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = toml::ser::to_string_pretty(self)?;
        std::fs::write(path, serialized.as_bytes()).map_err(Into::into)
    }

    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path)?;
        toml::from_str(&data).map_err(Into::into)
    }

    /// Load the configuration from its default location.
    ///
    /// A missing file is not an error; it yields the default configuration.
    pub fn load() -> Result<Self, Error> {
        match path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
}
