//! Game configuration loader.

use std::path::Path;

use anyhow::bail;
use board_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        tracing::info!(path = %path.display(), "loaded game config");
        Ok(config)
    }

    /// Parse config TOML. Movement timing and pitch must be finite and
    /// positive.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let movement = &config.movement;
        if !(movement.move_duration.is_finite() && movement.move_duration > 0.0) {
            bail!(
                "movement.move_duration must be a positive number, got {}",
                movement.move_duration
            );
        }
        if !(movement.grid_pitch.is_finite() && movement.grid_pitch > 0.0) {
            bail!(
                "movement.grid_pitch must be a positive number, got {}",
                movement.grid_pitch
            );
        }

        Ok(config)
    }
}
