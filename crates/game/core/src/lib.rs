//! Deterministic player rules for the tile board game.
//!
//! `board-core` defines how a player walks the track ([`movement`]) and how
//! combat, rewards and turn skips change their stats ([`turn`]). Board
//! layout, rendering and the outer game loop are collaborators expressed as
//! traits in [`env`]. Both player seats share this one implementation; they
//! differ only in [`DepthSign`].
pub mod config;
pub mod env;
pub mod error;
pub mod movement;
pub mod player;
pub mod state;
pub mod turn;

pub use config::{GameConfig, MovementConfig, StartingStats};
pub use env::{
    Board, BoardDimensions, GameFlow, NullGameFlow, NullPresentation, Presentation, TileGrid,
};
pub use error::{ErrorSeverity, GameError};
pub use movement::{
    DepthSign, FinishPreview, MoveError, MovementPlan, Projection, TickOutcome, TrackWalker,
    Transition,
};
pub use player::Player;
pub use state::{Heading, ItemCard, ItemId, ItemScope, PlayerId, PlayerStats, Position, WorldPoint};
pub use turn::TurnState;
