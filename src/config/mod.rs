use crate::attendance::{CutoffPolicy, DEFAULT_MODE};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_time;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Local time of day after which a scan is Late (`HH:MM` or `HH:MM:SS`).
    #[serde(default = "default_cutoff")]
    pub cutoff: String,
    #[serde(default = "default_mode")]
    pub default_mode: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_cutoff() -> String {
    "09:05".to_string()
}
fn default_mode() -> String {
    DEFAULT_MODE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            cutoff: default_cutoff(),
            default_mode: default_mode(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };
        let name = if cfg!(target_os = "windows") {
            "campus360"
        } else {
            ".campus360"
        };
        base.unwrap_or_else(|| PathBuf::from(".")).join(name)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("campus360.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("campus360.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            debug!(path = %path.display(), "loading configuration");
            let content = fs::read_to_string(&path)?;
            Self::from_yaml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.cutoff_policy()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Database path with `~` expanded.
    pub fn database_path(&self) -> String {
        expand_tilde(&self.database).to_string_lossy().to_string()
    }

    pub fn cutoff_policy(&self) -> AppResult<CutoffPolicy> {
        let t = parse_time(&self.cutoff).ok_or_else(|| {
            AppError::Config(format!("invalid cutoff '{}', expected HH:MM", self.cutoff))
        })?;
        Ok(CutoffPolicy::new(t))
    }

    /// Resolve a user-supplied database path: `~` is expanded and a relative
    /// name lands in the config directory.
    pub fn resolve_database(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration and database files.
    ///
    /// In test mode the configuration file is left alone.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_name {
            Some(name) => Self::resolve_database(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
