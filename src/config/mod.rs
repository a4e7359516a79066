use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hostname of the page that embeds the videos (Twitch `parent`).
    pub embed_host: String,
    pub data_dir: PathBuf,
    /// Base URL to fetch the datasets from; takes precedence over `data_dir`.
    pub data_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            embed_host: "localhost".to_string(),
            data_dir: PathBuf::from("./data"),
            data_url: None,
        }
    }
}

impl Config {
    /// Reads a TOML config file, or returns the defaults when no path is given.
    /// Keys missing from the file keep their default values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
