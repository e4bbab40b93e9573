use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use client_logging::{parse_level, LogDestination, LogSettings};
use resume_client::ServiceSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = "resume_client.ron";
pub const BASE_URL_ENV: &str = "RESUME_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub log_level: String,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let logging = LogSettings::default();
        Self {
            base_url: ServiceSettings::default().base_url,
            log_level: logging.level.to_string().to_lowercase(),
            log_destination: logging.destination,
            log_file: logging.file_path,
        }
    }
}

impl AppConfig {
    /// Loads `explicit`, or `./resume_client.ron` when it exists, or defaults.
    ///
    /// An explicitly named file must exist and parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(CONFIG_FILENAME);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        ron::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Applies the environment value, then the command line value, for the base URL.
    /// Blank values are ignored.
    pub fn apply_overrides(&mut self, env_base_url: Option<String>, cli_base_url: Option<String>) {
        for value in [env_base_url, cli_base_url].into_iter().flatten() {
            if !value.trim().is_empty() {
                self.base_url = value.trim().to_string();
            }
        }
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            base_url: self.base_url.clone(),
        }
    }

    pub fn log_settings(&self) -> Result<LogSettings> {
        let level = parse_level(&self.log_level)
            .ok_or_else(|| anyhow!("Unknown log level '{}'", self.log_level))?;
        Ok(LogSettings {
            level,
            destination: self.log_destination,
            file_path: self.log_file.clone(),
        })
    }
}
