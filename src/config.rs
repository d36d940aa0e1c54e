// src/config.rs
// Optional YAML config for the dataset directory and history file locations.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

pub const CONFIG_FILE: &str = "cityrisk.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the seven category CSV files.
    pub data_dir: PathBuf,
    /// Flat JSON file the conversation store is rewritten to.
    pub history_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            history_file: PathBuf::from("./history.json"),
        }
    }
}

impl AppConfig {
    /// Load `cityrisk.yaml` from the working directory, falling back to
    /// defaults when the file does not exist. A present-but-malformed config
    /// is a startup error, not a silent fallback.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&raw)?;
        Ok(config)
    }
}
