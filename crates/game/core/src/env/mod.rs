//! Collaborators the player core talks to but does not own.
//!
//! The [`Board`] answers tile occupancy, [`Presentation`] receives visual
//! commands, and [`GameFlow`] receives game-over notifications. Each is a
//! trait so headless simulations and tests can plug in their own.
mod board;
mod flow;
mod presentation;

pub use board::{Board, BoardDimensions, TileGrid};
pub use flow::{GameFlow, NullGameFlow};
pub use presentation::{NullPresentation, Presentation};
