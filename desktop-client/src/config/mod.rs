mod background_config;
mod game_config;
mod main_config;

pub use background_config::BackgroundConfig;
pub use game_config::GameConfig;
pub use main_config::{get_config_manager, Config};
