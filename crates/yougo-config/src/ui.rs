use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Force highlight color on/off; unset means auto-detect from the tty.
    pub color: Option<bool>,
}

impl UiConfig {
    pub fn new() -> Self {
        let color = env::var("YOUGO_COLOR")
            .ok()
            .and_then(|v| v.parse().ok());

        Self { color }
    }
}
