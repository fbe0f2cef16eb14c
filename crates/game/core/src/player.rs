//! A seat at the board: one walker plus the stats the turn rules act on.

use crate::config::GameConfig;
use crate::env::{Board, GameFlow, Presentation};
use crate::movement::{MoveError, TickOutcome, TrackWalker};
use crate::state::{Heading, ItemCard, PlayerId, PlayerStats, Position};
use crate::turn::TurnState;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    id: PlayerId,
    pub walker: TrackWalker,
    pub stats: PlayerStats,
}

impl Player {
    /// Creates a player on `start` with the configured starting stats and
    /// an empty hand.
    pub fn new(id: PlayerId, config: &GameConfig, start: Position, heading: Heading) -> Self {
        Self {
            id,
            walker: TrackWalker::new(config.movement, start, heading),
            stats: PlayerStats::from_starting(&config.starting),
        }
    }

    /// Same as [`Self::new`] but holding `hand`.
    pub fn with_hand(
        id: PlayerId,
        config: &GameConfig,
        start: Position,
        heading: Heading,
        hand: Vec<ItemCard>,
    ) -> Self {
        Self {
            id,
            walker: TrackWalker::new(config.movement, start, heading),
            stats: PlayerStats::from_starting(&config.starting).with_items(hand),
        }
    }

    /// Dealt the three built-in cards.
    pub fn with_starting_hand(
        id: PlayerId,
        config: &GameConfig,
        start: Position,
        heading: Heading,
    ) -> Self {
        Self::with_hand(id, config, start, heading, ItemCard::starting_hand())
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Borrows the stats for a rule application.
    pub fn turn<'a>(&'a mut self, flow: &'a mut dyn GameFlow) -> TurnState<'a> {
        TurnState::new(&mut self.stats, flow)
    }

    /// Drives the walker for one frame.
    ///
    /// Starts the next tile when the walker is between steps, otherwise
    /// advances the current transition by `delta`. Returns `None` when the
    /// walker is idle or has only just started a tile.
    pub fn update<B, P>(
        &mut self,
        delta: f32,
        board: &B,
        presentation: &mut P,
    ) -> Result<Option<TickOutcome>, MoveError>
    where
        B: Board + ?Sized,
        P: Presentation + ?Sized,
    {
        if !self.walker.is_moving() {
            return Ok(None);
        }

        if self.walker.is_transitioning() {
            self.walker.tick(delta, presentation).map(Some)
        } else {
            self.walker.advance_one_tile(board, presentation)?;
            Ok(None)
        }
    }
}
