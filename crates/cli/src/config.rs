//! Optional `dungeon.toml` settings. Command-line flags override every field.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use doom_core::Difficulty;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::APP_NAME;

pub const CONFIG_FILE_NAME: &str = "dungeon.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config file {path} is not valid")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub maps_dir: PathBuf,
    pub difficulty: Option<Difficulty>,
    pub seed: Option<u64>,
    pub journal_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self { maps_dir: PathBuf::from("maps"), difficulty: None, seed: None, journal_dir: None }
    }
}

impl Config {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.config_dir().to_path_buf();
            path.push(CONFIG_FILE_NAME);
            path
        })
    }

    /// An explicit path must exist. Otherwise `./dungeon.toml`, then the
    /// platform config directory, are tried; finding neither yields defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidates = [Some(PathBuf::from(CONFIG_FILE_NAME)), Self::get_default_path()];
        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                return Self::load(&path);
            }
        }
        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::parse(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_file_means_defaults() {
        assert_eq!(Config::parse("").expect("empty config"), Config::default());
        assert_eq!(Config::default().maps_dir, PathBuf::from("maps"));
    }

    #[test]
    fn parses_every_field() {
        let config = Config::parse(
            "maps_dir = \"levels\"\ndifficulty = \"Impossible\"\nseed = 42\njournal_dir = \"runs\"\n",
        )
        .expect("valid config");
        assert_eq!(config.maps_dir, PathBuf::from("levels"));
        assert_eq!(config.difficulty, Some(Difficulty::Impossible));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.journal_dir, Some(PathBuf::from("runs")));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        assert!(Config::parse("map_dir = \"x\"").is_err());
        assert!(Config::parse("difficulty = \"Easy\"").is_err());
        assert!(Config::parse("seed = -1").is_err());
    }

    #[test]
    fn explicit_path_is_loaded_or_reported() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "seed = 7\n").expect("write config");

        let config = Config::resolve(Some(&path)).expect("load config");
        assert_eq!(config.seed, Some(7));

        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::resolve(Some(&missing)), Err(ConfigError::Read { .. })));

        fs::write(&path, "seed = \"seven\"\n").expect("write config");
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }
}
