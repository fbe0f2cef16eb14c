//! Data-driven content definitions and loaders.
//!
//! This crate reads board content from data files:
//! - Track layouts (data-driven via RON)
//! - Item catalogs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! All loaders use board-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, LoadResult, TrackLayout, TrackLoader,
};
