//! Driver configuration.
//!
//! Values come from an optional TOML file (`rover.toml`, or the path in
//! `ROVER_CONFIG`), then from `ROVER_*` environment variables, which win.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "rover.toml";
pub const DEFAULT_INPUT_PATH: &str = "input/rovers-in.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value {value:?} for {key}")]
    Env { key: &'static str, value: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `"<x> <y> <heading>"` line per rover
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Mission file read when no path is given on the command line
    pub input: PathBuf,
    /// Log every command each rover executes
    pub trace: bool,
    pub format: OutputFormat,
    /// Draw the plateau in the terminal after deployment
    pub render: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            trace: true,
            format: OutputFormat::Text,
            render: false,
        }
    }
}

impl Config {
    /// Loads the config file (if present) and applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("ROVER_CONFIG")
            .map(PathBuf::from)
            .ok();

        // NOTE - an explicit ROVER_CONFIG must exist, the default file is optional
        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };

        config.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Applies `ROVER_INPUT`, `ROVER_TRACE`, `ROVER_FORMAT` and `ROVER_RENDER`
    /// as looked up through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup("ROVER_INPUT") {
            self.input = PathBuf::from(input);
        }
        if let Some(value) = lookup("ROVER_TRACE") {
            self.trace = parse_flag("ROVER_TRACE", value)?;
        }
        if let Some(value) = lookup("ROVER_FORMAT") {
            self.format = match value.to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(ConfigError::Env { key: "ROVER_FORMAT", value }),
            };
        }
        if let Some(value) = lookup("ROVER_RENDER") {
            self.render = parse_flag("ROVER_RENDER", value)?;
        }
        Ok(self)
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Env { key, value }),
    }
}
