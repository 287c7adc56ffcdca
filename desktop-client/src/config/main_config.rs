use std::path::{Path, PathBuf};

use common::LogLevel;
use common::config::{ConfigManager, FileContentConfigProvider, Validate};
use common::games::snake::SnakeGameSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "neon_snake_config.yaml";
const DATA_FILE_NAME: &str = "neon_snake_data.yaml";

fn beside_executable(file_name: &str) -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name);
    }
    PathBuf::from(file_name)
}

pub fn get_config_manager(path: Option<&Path>) -> ConfigManager<FileContentConfigProvider, Config> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(beside_executable(CONFIG_FILE_NAME)),
    }
}

/// Where best score and theme live, unless overridden.
pub fn data_file_path(config: &Config) -> PathBuf {
    config
        .data_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| beside_executable(DATA_FILE_NAME))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub game: SnakeGameSettings,
    pub log_level: LogLevel,
    pub data_file: Option<String>,
}

impl Config {
    /// Game values out of range are clamped, not rejected.
    pub fn sanitized(self) -> Self {
        Self {
            game: self.game.sanitized(),
            ..self
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(data_file) = &self.data_file
            && data_file.trim().is_empty()
        {
            return Err("data_file must not be empty".to_string());
        }
        Ok(())
    }
}
