use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{Command, Difficulty};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Every human command of one game, in order. Together with the map, the seed
/// and the difficulty this reproduces the game exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub difficulty: Difficulty,
    pub map_name: String,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub command: Command,
}

impl InputJournal {
    pub fn new(seed: u64, difficulty: Difficulty, map_name: impl Into<String>) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            seed,
            difficulty,
            map_name: map_name.into(),
            inputs: Vec::new(),
        }
    }

    pub fn append_command(&mut self, command: Command) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, command });
    }

    /// Writes pretty JSON through a temp file and a rename.
    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
