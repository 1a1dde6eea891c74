use engine::config::{ConfigManager, Validate};
use serde::{Deserialize, Serialize};

use super::{BackgroundConfig, GameConfig};

const CONFIG_FILE_NAME: &str = "snake_game_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<Config> {
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    pub background: BackgroundConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.background.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_game_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized() {
        let default_config = Config::default();

        let serialized = serde_yaml_ng::to_string(&default_config).unwrap();
        let deserialized: Config = serde_yaml_ng::from_str(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_default_config_roundtrips_through_manager() {
        let config = Config {
            game: GameConfig {
                mesh_length: 30,
                ..GameConfig::default()
            },
            ..Config::default()
        };
        let manager: ConfigManager<Config> = ConfigManager::from_yaml_file(&get_temp_file_path());

        manager.set_config(&config).unwrap();
        let loaded = manager.get_config().unwrap();

        assert_eq!(config, loaded);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager: ConfigManager<Config> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");

        let loaded = manager.get_config().unwrap();

        assert_eq!(Config::default(), loaded);
    }

    #[test]
    fn test_out_of_range_values_cant_be_read() {
        let invalid_config_content = r#"
            game:
              mesh_length: 4
              tick_interval_ms: 100
              initial_snake_length: 3
            background:
              enabled: true
        "#;

        let path = get_temp_file_path();
        std::fs::write(&path, invalid_config_content).unwrap();
        let manager: ConfigManager<Config> = ConfigManager::from_yaml_file(&path);

        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_snake_longer_than_mesh_is_rejected() {
        let config = Config {
            game: GameConfig {
                mesh_length: 10,
                tick_interval_ms: 100,
                initial_snake_length: 10,
            },
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_settings_match_the_classic_board() {
        let settings = GameConfig::default().to_settings();

        assert_eq!(settings.field_size.width, 20);
        assert_eq!(settings.field_size.height, 20);
        assert_eq!(settings.initial_snake_length, 3);
        assert_eq!(settings.tick_interval.as_millis(), 100);
    }
}
