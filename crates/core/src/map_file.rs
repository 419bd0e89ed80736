//! Text map format: a `name <text>` line, a `win <gold>` line, then grid rows of
//! `#` wall, `.` floor, `G` floor holding gold and `E` exit.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::state::Map;
use crate::types::{Pos, TileKind};

#[derive(Debug, Error)]
pub enum MapFileError {
    #[error("could not read map file: {0}")]
    Io(#[from] io::Error),
    #[error("map file is empty; expected a `name <map name>` line")]
    MissingName,
    #[error("first line must look like `name <map name>`, found {0:?}")]
    InvalidName(String),
    #[error("map file ends before its `win <gold>` line")]
    MissingWinCondition,
    #[error("second line must look like `win <gold>`, found {0:?}")]
    InvalidWinCondition(String),
    #[error("map file has no grid rows")]
    EmptyGrid,
    #[error("grid row {row} has {found} tiles, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
}

pub fn load_map(path: &Path) -> Result<Map, MapFileError> {
    let text = fs::read_to_string(path)?;
    parse_map(&text)
}

pub fn parse_map(text: &str) -> Result<Map, MapFileError> {
    let mut lines = text.lines();

    let name_line = lines.next().ok_or(MapFileError::MissingName)?;
    let name = name_line
        .strip_prefix("name ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| MapFileError::InvalidName(name_line.to_string()))?;

    let win_line = lines.next().ok_or(MapFileError::MissingWinCondition)?;
    let win_gold = win_line
        .strip_prefix("win ")
        .and_then(|gold| gold.trim().parse::<u32>().ok())
        .ok_or_else(|| MapFileError::InvalidWinCondition(win_line.to_string()))?;

    let mut rows: Vec<&str> = lines.collect();
    while rows.last().is_some_and(|row| row.trim().is_empty()) {
        rows.pop();
    }
    let width = rows.first().map(|row| row.chars().count()).ok_or(MapFileError::EmptyGrid)?;
    if width == 0 {
        return Err(MapFileError::EmptyGrid);
    }

    let mut kinds = Vec::with_capacity(rows.len());
    let mut gold = Vec::new();
    for (row_idx, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(MapFileError::RaggedRow { row: row_idx, expected: width, found });
        }
        let mut row_kinds = Vec::with_capacity(width);
        for (col_idx, glyph) in row.chars().enumerate() {
            let kind = match glyph {
                '#' => TileKind::Wall,
                '.' => TileKind::Floor,
                'E' => TileKind::Exit,
                'G' => {
                    gold.push(Pos::new(row_idx as i32, col_idx as i32));
                    TileKind::Floor
                }
                other => {
                    warn!(glyph = ?other, row = row_idx, col = col_idx, "unknown map glyph read as floor");
                    TileKind::Floor
                }
            };
            row_kinds.push(kind);
        }
        kinds.push(row_kinds);
    }

    let mut map = Map::new(name, win_gold, &kinds);
    for pos in gold {
        map.add_gold(pos);
    }
    Ok(map)
}
