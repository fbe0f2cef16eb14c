//! Content factory for loading game content from a data directory.

use std::path::{Path, PathBuf};

use board_core::{GameConfig, ItemCard};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, TrackLayout, TrackLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── tracks/
///     └── snake.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, falling back to defaults
    /// when the file does not exist.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemCard>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load a track from `tracks/{track_name}.ron`.
    pub fn load_track(&self, track_name: &str) -> LoadResult<TrackLayout> {
        let path = self
            .data_dir
            .join("tracks")
            .join(format!("{}.ron", track_name));
        TrackLoader::load(&path)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn loads_item_catalog() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("items.ron"),
            r#"(
                items: [
                    (
                        id: 6,
                        name: "Player Turn Skip (On Board)",
                        description: "Skip a Target Players turn. Board Only",
                        scope: Board,
                    ),
                ],
            )"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(
            factory.load_items().unwrap(),
            vec![ItemCard::player_turn_skip()]
        );
    }

    #[test]
    fn missing_item_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ContentFactory::new(dir.path()).load_items().is_err());
    }

    #[test]
    fn loads_track_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("tracks")).unwrap();
        std::fs::write(
            dir.path().join("tracks").join("line.ron"),
            r#"(start: (0, 0), heading: Right, rows: ["111"])"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let layout = factory.load_track("line").unwrap();
        assert_eq!(layout.grid.dimensions().width, 3);
        assert!(factory.load_track("absent").is_err());
    }
}
