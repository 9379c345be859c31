//! Dashboard configuration.
//!
//! Settings are resolved in three layers, later ones winning:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`DASHBOARD_CONFIG`, or `dashboard.toml` in a standard location)
//! 3. Environment variables
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8050
//!
//! [data]
//! path = "data/spacex_launch_dash.csv"
//!
//! [charts]
//! zero_fill_pie = false
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: explicit config file path
//! - `DASHBOARD_DATA`: launch CSV path
//!
//! A relative data path is looked up in the current directory first and then
//! under `backend/`, so the bundled sample is found from the workspace root.
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8050)
//! - `DASHBOARD_ZERO_FILL`: `true`/`false`, zero-fill missing pie classes

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::services::PieOptions;

pub const CONFIG_PATH_ENV: &str = "DASHBOARD_CONFIG";
pub const DATA_PATH_ENV: &str = "DASHBOARD_DATA";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const ZERO_FILL_ENV: &str = "DASHBOARD_ZERO_FILL";

/// Errors raised while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value for {var}: {message}")]
    InvalidEnv { var: String, message: String },

    #[error("Invalid bind address '{0}'")]
    InvalidAddress(String),
}

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub charts: ChartSettings,
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Launch data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

/// Chart behavior switches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    #[serde(default)]
    pub zero_fill_pie: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/spacex_launch_dash.csv")
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

impl DataSettings {
    /// Locate the launch CSV relative to the working directory.
    pub fn resolve(&self) -> PathBuf {
        self.resolve_in(Path::new(""))
    }

    /// Locate the launch CSV relative to `base`.
    ///
    /// Absolute paths are returned as given. A relative path is tried as
    /// `base/<path>` and then `base/backend/<path>`; when neither exists the
    /// first candidate is returned so the load error names it.
    pub fn resolve_in(&self, base: &Path) -> PathBuf {
        if self.path.is_absolute() {
            return self.path.clone();
        }

        let search_paths = [base.join(&self.path), base.join("backend").join(&self.path)];
        for path in &search_paths {
            if path.exists() {
                log::debug!("Resolved launch data to {}", path.display());
                return path.clone();
            }
        }

        let [first, _] = search_paths;
        first
    }
}

impl DashboardConfig {
    /// Resolve configuration from file and process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_default_location()?.unwrap_or_default(),
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from the first `dashboard.toml` found in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists in any of them.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration from {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Apply overrides from a variable lookup (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(DATA_PATH_ENV) {
            self.data.path = PathBuf::from(path);
        }
        if let Some(host) = lookup(HOST_ENV) {
            self.server.host = host;
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                var: PORT_ENV.to_string(),
                message: format!("'{}' is not a valid port number", port),
            })?;
        }
        if let Some(flag) = lookup(ZERO_FILL_ENV) {
            self.charts.zero_fill_pie = parse_flag(ZERO_FILL_ENV, &flag)?;
        }
        Ok(())
    }

    /// Socket address to bind the HTTP server to.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }

    pub fn pie_options(&self) -> PieOptions {
        PieOptions {
            zero_fill: self.charts.zero_fill_pie,
        }
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnv {
            var: var.to_string(),
            message: format!("'{}' is not a boolean", other),
        }),
    }
}
