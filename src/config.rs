use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Bounds on the `turns` setting; values outside are ignored.
pub const MIN_TURNS: u32 = 1;
pub const MAX_TURNS: u32 = 8192;

const DEFAULT_MAX_ROUNDS: u32 = 50;

/// Flat `key=value` configuration. One recognized key: `turns`, the round
/// cap. Everything else in the file is ignored, as are malformed or
/// out-of-range values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_rounds: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Non-fatal loader: an unreadable file logs a diagnostic and keeps the
    /// defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}, using defaults");
                Self::default()
            }
        }
    }

    fn parse(text: &str) -> Self {
        let mut config = Self::default();
        for line in text.lines() {
            let line = line.trim();
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            if key.trim() != "turns" {
                continue;
            }
            match value.trim().parse::<u32>() {
                Ok(turns) if (MIN_TURNS..=MAX_TURNS).contains(&turns) => {
                    config.max_rounds = turns;
                }
                _ => log::warn!("ignoring invalid turns value {:?}", value.trim()),
            }
        }
        config
    }
}
