use engine::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BackgroundConfig {
    /// Whether to fetch and show the rotating background image at all.
    pub enabled: bool,
}

impl Validate for BackgroundConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
