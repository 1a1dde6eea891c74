use std::time::Duration;

use super::types::FieldSize;

#[derive(Clone, Copy, Debug)]
pub struct GameSettings {
    pub field_size: FieldSize,
    pub initial_snake_length: usize,
    pub tick_interval: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_size: FieldSize::square(20),
            initial_snake_length: 3,
            tick_interval: Duration::from_millis(100),
        }
    }
}
