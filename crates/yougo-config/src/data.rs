use std::env;

use serde::{Deserialize, Serialize};

/// Where the glossary data comes from. When both are unset the embedded
/// dataset is used.
#[derive(Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DataConfig {
    /// Path to a glossary JSON file
    pub path: Option<String>,
    /// URL serving the glossary JSON
    pub url: Option<String>,
}

impl DataConfig {
    pub fn new() -> Self {
        let path = env::var("YOUGO_DATA").ok().filter(|v| !v.is_empty());
        let url = env::var("YOUGO_URL").ok().filter(|v| !v.is_empty());

        Self { path, url }
    }
}
