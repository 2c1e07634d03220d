use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".pantrywatch";
const CONFIG_FILE: &str = "pantrywatch.conf";
const DATABASE_FILE: &str = "pantrywatch.sqlite";
const INGREDIENTS_FILE: &str = "common_ingredients.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_notify_interval")]
    pub notify_interval_minutes: u64,
    #[serde(default = "default_startup_delay")]
    pub startup_delay_secs: u64,
    #[serde(default = "default_ingredients_file")]
    pub ingredients_file: String,
    #[serde(default = "default_unit")]
    pub default_unit: String,
    #[serde(default = "default_recipe_endpoint")]
    pub recipe_endpoint: String,
    #[serde(default = "default_recipe_model")]
    pub recipe_model: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_notify_interval() -> u64 {
    1440
}
fn default_startup_delay() -> u64 {
    5
}
fn default_ingredients_file() -> String {
    Config::config_dir()
        .join(INGREDIENTS_FILE)
        .to_string_lossy()
        .to_string()
}
fn default_unit() -> String {
    "g".to_string()
}
fn default_recipe_endpoint() -> String {
    "http://localhost:11434".to_string()
}
fn default_recipe_model() -> String {
    "llama3".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            notify_interval_minutes: default_notify_interval(),
            startup_delay_secs: default_startup_delay(),
            ingredients_file: default_ingredients_file(),
            default_unit: default_unit(),
            recipe_endpoint: default_recipe_endpoint(),
            recipe_model: default_recipe_model(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pantrywatch")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration file: {e}")))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.ingredients_file = expand_tilde(&cfg.ingredients_file)
            .to_string_lossy()
            .to_string();
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and database files.
    /// Returns the resolved database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;

        // same resolution as the global --db override
        let db_path = match custom_db {
            Some(name) => expand_tilde(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
