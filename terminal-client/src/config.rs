use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::logger::LogLevel;
use tictactoe_engine::tictactoe::{Difficulty, GameMode};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
const MAX_COMPUTER_DELAY_MS: u64 = 10_000;

fn executable_dir() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    exe_path.parent().map(Path::to_path_buf)
}

pub fn get_config_path() -> PathBuf {
    match executable_dir() {
        Some(dir) => dir.join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    }
}

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub computer_delay_ms: u64,
    pub seed: Option<u64>,
    pub stats_file: String,
    pub log_level: LogLevel,
}

impl Config {
    /// Relative statistics paths live next to the config file.
    pub fn stats_path(&self, config_path: &Path) -> PathBuf {
        let stats_file = Path::new(&self.stats_file);
        if stats_file.is_absolute() {
            return stats_file.to_path_buf();
        }
        match config_path.parent() {
            Some(dir) => dir.join(stats_file),
            None => stats_file.to_path_buf(),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must not exceed {}, got {}",
                MAX_COMPUTER_DELAY_MS, self.computer_delay_ms
            ));
        }
        if self.stats_file.trim().is_empty() {
            return Err("stats_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GameMode::TwoPlayer,
            difficulty: Difficulty::Medium,
            computer_delay_ms: 500,
            seed: None,
            stats_file: "tictactoe_stats.yaml".to_string(),
            log_level: LogLevel::Info,
        }
    }
}
