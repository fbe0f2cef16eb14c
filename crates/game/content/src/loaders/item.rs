//! Item catalog loader.

use std::path::Path;

use board_core::ItemCard;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemCard>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ItemCard>> {
        let content = read_file(path)?;
        let items = Self::parse(&content)?;
        tracing::info!(path = %path.display(), count = items.len(), "loaded item catalog");
        Ok(items)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemCard>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        Ok(catalog.items)
    }
}
