//! Optional TOML configuration for the command-line adapter.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use hallways_core::LevelId;
use hallways_levels::FIRST_LEVEL;
use log::LevelFilter;
use serde::Deserialize;

/// Failures while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`Config`].
    #[error("failed to parse {}", path.display())]
    Parse {
        /// File that was requested.
        path: PathBuf,
        /// Underlying TOML failure.
        #[source]
        source: toml::de::Error,
    },
    /// `log_level` names no known level.
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

/// Settings of a headless session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Level entered at boot.
    pub(crate) start_level: u8,
    /// Simulated frame length applied after every script line.
    pub(crate) tick_ms: u64,
    /// Whether walker animations complete immediately.
    pub(crate) auto_arrive: bool,
    /// Log filter used when `RUST_LOG` is not set.
    pub(crate) log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_level: FIRST_LEVEL.get(),
            tick_ms: 16,
            auto_arrive: true,
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Reads `path`, or returns the defaults when no path was given.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let _ = config.log_filter()?;
        Ok(config)
    }

    fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Level entered at boot.
    pub(crate) fn start_level(&self) -> LevelId {
        LevelId::new(self.start_level)
    }

    /// Simulated frame length.
    pub(crate) fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Parsed form of `log_level`.
    pub(crate) fn log_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
