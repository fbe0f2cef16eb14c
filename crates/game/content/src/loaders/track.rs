//! Track layout loader.
//!
//! A track file lists the board as rows of characters, top row first:
//! `.`, `0` or a space is an empty cell, `1`-`9` is a track tile with that
//! code. The start tile and heading are given alongside:
//!
//! ```ron
//! (
//!     start: (0, 0),
//!     heading: Right,
//!     rows: [
//!         "11111",
//!         "....1",
//!         "11111",
//!     ],
//! )
//! ```

use std::path::Path;

use anyhow::bail;
use board_core::{Heading, Position, TileGrid};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TrackDataRon {
    start: (i32, i32),
    #[serde(default)]
    heading: Heading,
    rows: Vec<String>,
}

/// A board ready to walk on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackLayout {
    pub grid: TileGrid,
    pub start: Position,
    pub heading: Heading,
}

/// Loader for track layouts from RON files.
pub struct TrackLoader;

impl TrackLoader {
    pub fn load(path: &Path) -> LoadResult<TrackLayout> {
        let content = read_file(path)?;
        let layout = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid track {}: {}", path.display(), e))?;

        let dimensions = layout.grid.dimensions();
        tracing::info!(
            path = %path.display(),
            width = dimensions.width,
            height = dimensions.height,
            start = %layout.start,
            "loaded track"
        );
        Ok(layout)
    }

    pub fn parse(content: &str) -> LoadResult<TrackLayout> {
        let data: TrackDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse track RON: {}", e))?;

        let mut rows = Vec::with_capacity(data.rows.len());
        for (y, row) in data.rows.iter().enumerate() {
            let mut codes = Vec::with_capacity(row.len());
            for (x, cell) in row.chars().enumerate() {
                codes.push(match cell {
                    '.' | ' ' => TileGrid::EMPTY,
                    '0'..='9' => cell as u8 - b'0',
                    other => bail!("unexpected tile {:?} at ({}, {})", other, x, y),
                });
            }
            rows.push(codes);
        }

        Ok(TrackLayout {
            grid: TileGrid::from_rows(&rows),
            start: Position::new(data.start.0, data.start.1),
            heading: data.heading,
        })
    }
}
