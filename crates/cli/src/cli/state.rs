use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

pub const APP_NAME: &str = "mbrowse";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_API_BASE: &str = "http://localhost:8096/mediabrowser";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base url of the server API, e.g. http://host:8096/mediabrowser
    #[serde(default = "default_api_base")]
    pub api_base: Url,
    /// Default log level when neither --log-level nor RUST_LOG is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

pub fn default_api_base() -> Url {
    Url::parse(DEFAULT_API_BASE).expect("hardcoded URL must parse")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the mbrowse directory (~/.mbrowse)
    pub app_dir: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the mbrowse directory path (custom or default ~/.mbrowse)
    pub fn app_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }

        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Initialize a new config directory
    pub fn init(
        custom_path: Option<PathBuf>,
        config: Option<AppConfig>,
    ) -> Result<Self, StateError> {
        let app_dir = Self::app_dir(custom_path)?;
        let config_path = app_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            return Err(StateError::AlreadyInitialized);
        }

        fs::create_dir_all(&app_dir)?;

        let config = config.unwrap_or_default();
        let config_toml = toml::to_string_pretty(&config)?;
        fs::write(&config_path, config_toml)?;

        Ok(Self {
            app_dir,
            config_path,
            config,
        })
    }

    /// Load existing state from the config directory
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let app_dir = Self::app_dir(custom_path)?;

        if !app_dir.exists() {
            return Err(StateError::NotInitialized);
        }

        let config_path = app_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Err(StateError::MissingFile(CONFIG_FILE_NAME.to_string()));
        }

        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;

        Ok(Self {
            app_dir,
            config_path,
            config,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("could not determine home directory")]
    NoHomeDirectory,
    #[error("mbrowse is already initialized")]
    AlreadyInitialized,
    #[error("mbrowse is not initialized, run `mbrowse init` first")]
    NotInitialized,
    #[error("missing file: {0}")]
    MissingFile(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to parse config: {0}")]
    Deserialize(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_then_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("mbrowse");
        let config = AppConfig {
            api_base: Url::parse("http://nas.local:8096/mediabrowser").unwrap(),
            log_level: "debug".to_string(),
        };

        let created = AppState::init(Some(dir.clone()), Some(config.clone())).unwrap();
        assert!(created.config_path.exists());

        let loaded = AppState::load(Some(dir)).unwrap();
        assert_eq!(loaded.config, config);
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_path_buf();

        AppState::init(Some(dir.clone()), None).unwrap();
        let err = AppState::init(Some(dir), None).unwrap_err();
        assert!(matches!(err, StateError::AlreadyInitialized));
    }

    #[test]
    fn test_load_missing_dir() {
        let err = AppState::load(Some(PathBuf::from("/nonexistent/mbrowse"))).unwrap_err();
        assert!(matches!(err, StateError::NotInitialized));
    }

    #[test]
    fn test_load_missing_config_file() {
        let temp = TempDir::new().unwrap();
        let err = AppState::load(Some(temp.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, StateError::MissingFile(_)));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "log_level = \"warn\"\n").unwrap();

        let loaded = AppState::load(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(loaded.config.api_base, default_api_base());
        assert_eq!(loaded.config.log_level, "warn");
    }
}
