//! Process configuration loaded once at startup.
//!
//! Settings live in a TOML file under the `.sentiboard` directory. Missing
//! files produce defaults that are written back so users have a file to edit.
//! The API base URL is validated at load time; the rest of the app treats the
//! loaded configuration as immutable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn default_api_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Settings for one dashboard process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the sentiment backend, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Bind host forwarded to the serving layer.
    #[serde(default = "default_host")]
    pub host: String,
    /// Lowers the default log filter to `debug`.
    #[serde(default)]
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            host: default_host(),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Base URL with any trailing slashes removed, ready for path joining.
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No suitable base config directory could be resolved.
    #[error("No suitable config directory available")]
    NoConfigDir,
    /// Failed to create the config directory.
    #[error("Failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read the config file.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not valid TOML for the expected shape.
    #[error("Failed to parse config file {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Settings could not be serialized back to TOML.
    #[error("Failed to serialize config for {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    /// The configured API base URL is not a valid absolute URL.
    #[error("Invalid api_base_url {value:?}: {source}")]
    InvalidApiBaseUrl {
        value: String,
        source: url::ParseError,
    },
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, writing defaults on first run.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        let config = AppConfig::default();
        save_to_path(&config, &path)?;
        return Ok(config);
    }
    load_from_path(&path)
}

/// Load and validate configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&config)?;
    Ok(config)
}

/// Persist configuration to the default location.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_path()?;
    save_to_path(config, &path)
}

/// Save configuration to a specific path, creating parent directories as needed.
///
/// The file is written to a temporary sibling and renamed into place so a
/// crash mid-write never leaves a truncated config behind.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_write(path, data.as_bytes()).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    use std::io::Write;

    let parent = path.parent().ok_or_else(|| {
        std::io::Error::other("config path has no parent directory")
    })?;
    let file_name = path
        .file_name()
        .ok_or_else(|| std::io::Error::other("config path has no file name"))?;
    let tmp_path = parent.join(format!(
        "{}.tmp-{}",
        file_name.to_string_lossy(),
        std::process::id()
    ));

    let result = (|| {
        let mut file = std::fs::File::create(&tmp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
        drop(file);
        std::fs::rename(&tmp_path, path)
    })();
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }
    result
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    Url::parse(config.api_base())
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidApiBaseUrl {
            value: config.api_base_url.clone(),
            source,
        })
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_dirs::ConfigBaseGuard;
    use tempfile::tempdir;

    #[test]
    fn first_run_writes_defaults() {
        let dir = tempdir().unwrap();
        let _guard = ConfigBaseGuard::set(dir.path().to_path_buf());
        let config = load_or_default().unwrap();
        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert!(!config.debug);
        assert!(config_path().unwrap().exists());
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        let config = AppConfig {
            api_base_url: "http://reviews.example:8000/api/".into(),
            host: "0.0.0.0".into(),
            debug: true,
        };
        save_to_path(&config, &path).unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded.api_base_url, "http://reviews.example:8000/api/");
        assert_eq!(loaded.host, "0.0.0.0");
        assert!(loaded.debug);
    }

    #[test]
    fn api_base_strips_trailing_slash() {
        let config = AppConfig {
            api_base_url: "http://reviews.example/api/".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_base(), "http://reviews.example/api");
    }

    #[test]
    fn rejects_unparseable_api_base_url() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "api_base_url = \"not a url\"\n").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidApiBaseUrl { .. }));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "debug = true\n").unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert!(loaded.debug);
        assert_eq!(loaded.host, "127.0.0.1");
        assert_eq!(loaded.api_base_url, "http://localhost:5000/api");
    }
}
