use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::data::DataConfig;
use self::ui::UiConfig;

pub mod data;
pub mod ui;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Build a config from environment variables and built-in defaults.
    pub fn new() -> Self {
        Config {
            data: DataConfig::new(),
            ui: UiConfig::new(),
        }
    }

    /// Load a JSON config file, falling back to env-derived defaults when
    /// the file does not exist. A present-but-malformed file is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::new());
        }
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}
