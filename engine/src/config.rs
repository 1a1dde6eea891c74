use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

/// Semantic checks a config type runs after deserialization and before
/// serialization.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Loads and stores a YAML config file. A missing file yields the default
/// config; a file that exists but fails to parse or validate is an error.
pub struct ConfigManager<TConfig> {
    path: PathBuf,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
            config: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        if !self.path.exists() {
            return Ok(TConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        let config: TConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&self.path, content)
            .map_err(|e| format!("Failed to write config file: {}", e))?;

        let mut current = self.config.lock().unwrap();
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
    struct TestConfig {
        name: String,
        count: u32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                name: "default".to_string(),
                count: 3,
            }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.count == 0 {
                return Err("count must be greater than 0".to_string());
            }
            Ok(())
        }
    }

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_engine_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_config_roundtrips_through_file() {
        let config = TestConfig {
            name: "roundtrip".to_string(),
            count: 9,
        };
        let manager: ConfigManager<TestConfig> =
            ConfigManager::from_yaml_file(&get_temp_file_path());

        manager.set_config(&config).unwrap();
        let loaded = manager.get_config().unwrap();

        assert_eq!(config, loaded);
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let manager: ConfigManager<TestConfig> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");

        let loaded = manager.get_config().unwrap();

        assert_eq!(TestConfig::default(), loaded);
    }

    #[test]
    fn test_unparseable_file_is_an_error() {
        let path = get_temp_file_path();
        std::fs::write(&path, "name: [unterminated").unwrap();
        let manager: ConfigManager<TestConfig> = ConfigManager::from_yaml_file(&path);

        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_invalid_config_is_rejected_on_load_and_save() {
        let path = get_temp_file_path();
        std::fs::write(&path, "name: broken\ncount: 0\n").unwrap();
        let manager: ConfigManager<TestConfig> = ConfigManager::from_yaml_file(&path);

        assert!(manager.get_config().is_err());
        assert!(
            manager
                .set_config(&TestConfig {
                    name: "broken".to_string(),
                    count: 0,
                })
                .is_err()
        );
    }

    #[test]
    fn test_get_config_is_cached_after_first_load() {
        let path = get_temp_file_path();
        let manager: ConfigManager<TestConfig> = ConfigManager::from_yaml_file(&path);
        let config = TestConfig {
            name: "cached".to_string(),
            count: 1,
        };
        manager.set_config(&config).unwrap();

        std::fs::remove_file(&path).unwrap();

        assert_eq!(manager.get_config().unwrap(), config);
    }
}
