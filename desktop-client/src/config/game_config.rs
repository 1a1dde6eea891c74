use std::time::Duration;

use engine::config::Validate;
use engine::game::{FieldSize, GameSettings};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    /// Side length of the square play field, in cells.
    pub mesh_length: u32,
    pub tick_interval_ms: u32,
    pub initial_snake_length: u32,
}

impl GameConfig {
    pub fn to_settings(&self) -> GameSettings {
        GameSettings {
            field_size: FieldSize::square(self.mesh_length as usize),
            initial_snake_length: self.initial_snake_length as usize,
            tick_interval: Duration::from_millis(self.tick_interval_ms as u64),
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.mesh_length < 10 || self.mesh_length > 100 {
            return Err("mesh_length must be between 10 and 100".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("tick_interval_ms must be between 50 and 5000".to_string());
        }
        if self.initial_snake_length < 2 || self.initial_snake_length > 10 {
            return Err("initial_snake_length must be between 2 and 10".to_string());
        }
        if self.initial_snake_length >= self.mesh_length {
            return Err("initial_snake_length must be shorter than the mesh side".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mesh_length: 20,
            tick_interval_ms: 100,
            initial_snake_length: 3,
        }
    }
}
