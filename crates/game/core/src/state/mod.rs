//! Player-owned state: grid coordinates, headings and resource stats.
//!
//! Movement state lives in [`crate::movement::TrackWalker`]; everything the
//! turn rules touch lives in [`PlayerStats`].
mod common;
mod item;
mod stats;

pub use common::{Heading, PlayerId, Position, WorldPoint};
pub use item::{ItemCard, ItemId, ItemScope};
pub use stats::PlayerStats;
