use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rworklogger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rworklogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworklogger.conf")
    }

    /// Return the default path of the JSON work log
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("work_log.json")
    }

    /// The store location with `~` expanded.
    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    /// Resolve a user-supplied store path: `~` is expanded and a relative
    /// path lands in the config directory.
    pub fn resolve_store(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    /// Load the configuration at `path`. A missing file gives the defaults;
    /// an unreadable or malformed one is reported and also gives the defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_yaml::from_str::<Config>(&content).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!(
                    "Cannot load configuration {} ({}). Using defaults.",
                    path.display(),
                    e
                ));
                Config::default()
            }
        }
    }

    /// Initialize configuration file and an empty store.
    /// In test mode the configuration file is left alone.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let store = match custom_store {
            Some(name) => Self::resolve_store(&name),
            None => Self::store_file(),
        };

        let config = Config {
            store: store.to_string_lossy().to_string(),
            log_level: default_log_level(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml =
                serde_yaml::to_string(&config).map_err(|e| AppError::Config(e.to_string()))?;
            fs::write(Self::config_file(), yaml)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }
}
