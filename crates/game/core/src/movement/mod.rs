//! Tile-by-tile movement along the board track.
//!
//! A [`TrackWalker`] is driven by the outer frame loop:
//!
//! ```text
//! Idle --begin_move--> Active --advance_one_tile--> Transitioning
//!                        ^                              |
//!                        +---- tick (steps left) -------+
//! Idle <---------------- tick (last step) --------------+
//! any  --commit_to_finish--> Idle
//! ```
//!
//! Calls made out of sequence return a [`MoveError`] instead of being
//! ignored.
mod direction;
mod error;
mod projection;

pub use direction::{corner_candidates, resolve_heading, step_along};
pub use error::MoveError;
pub use projection::{DepthSign, Projection};

use crate::config::MovementConfig;
use crate::env::{Board, Presentation};
use crate::state::{Heading, Position, WorldPoint};

/// Remaining work of a move in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementPlan {
    pub steps_remaining: u32,
    /// Present while travelling between two tiles.
    pub transition: Option<Transition>,
}

/// Timed interpolation between two adjacent tiles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub start: WorldPoint,
    pub target: WorldPoint,
    pub elapsed: f32,
}

/// Tile and heading a walker will end on once its remaining steps are spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinishPreview {
    pub position: Position,
    pub heading: Heading,
}

/// Result of a single [`TrackWalker::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutcome {
    pub world_position: WorldPoint,
    /// The walker reached the target tile on this tick.
    pub arrived: bool,
    pub steps_remaining: u32,
}

/// Moves one player along the track.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackWalker {
    config: MovementConfig,
    position: Position,
    heading: Heading,
    world_position: WorldPoint,
    plan: Option<MovementPlan>,
    just_stopped: bool,
}

impl TrackWalker {
    /// Places an idle walker on `position` at world height zero.
    pub fn new(config: MovementConfig, position: Position, heading: Heading) -> Self {
        let world_position =
            Projection::new(config.grid_pitch, config.depth_sign).project(position, 0.0);
        Self {
            config,
            position,
            heading,
            world_position,
            plan: None,
            just_stopped: false,
        }
    }

    /// Sets the world height the walker travels at.
    #[must_use]
    pub fn with_height(mut self, height: f32) -> Self {
        self.world_position.y = height;
        self
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Last world position issued to the presentation.
    pub fn world_position(&self) -> WorldPoint {
        self.world_position
    }

    pub fn plan(&self) -> Option<&MovementPlan> {
        self.plan.as_ref()
    }

    pub fn steps_remaining(&self) -> u32 {
        self.plan.map_or(0, |plan| plan.steps_remaining)
    }

    pub fn is_moving(&self) -> bool {
        self.plan.is_some()
    }

    pub fn is_transitioning(&self) -> bool {
        self.plan.is_some_and(|plan| plan.transition.is_some())
    }

    /// True once a tile has been reached, until the next tile is started or
    /// the flag is cleared by the game flow.
    pub fn just_stopped(&self) -> bool {
        self.just_stopped
    }

    pub fn set_just_stopped(&mut self, just_stopped: bool) {
        self.just_stopped = just_stopped;
    }

    /// Turns the walker in place.
    pub fn set_heading<P>(&mut self, heading: Heading, presentation: &mut P)
    where
        P: Presentation + ?Sized,
    {
        self.heading = heading;
        presentation.face_heading(heading);
    }

    fn projection(&self) -> Projection {
        Projection::new(self.config.grid_pitch, self.config.depth_sign)
    }

    fn project(&self, position: Position) -> WorldPoint {
        self.projection().project(position, self.world_position.y)
    }

    /// Starts a move of `steps` tiles.
    pub fn begin_move(&mut self, steps: u32) -> Result<(), MoveError> {
        if steps == 0 {
            return Err(MoveError::ZeroSteps);
        }

        tracing::debug!(
            steps,
            position = %self.position,
            heading = %self.heading,
            "move started"
        );
        self.plan = Some(MovementPlan {
            steps_remaining: steps,
            transition: None,
        });
        self.just_stopped = false;
        Ok(())
    }

    /// Resolves the heading, moves the grid position one tile and starts the
    /// timed transition towards it. Returns the transition's world target.
    ///
    /// Steps are only consumed when [`Self::tick`] completes the transition.
    pub fn advance_one_tile<B, P>(
        &mut self,
        board: &B,
        presentation: &mut P,
    ) -> Result<WorldPoint, MoveError>
    where
        B: Board + ?Sized,
        P: Presentation + ?Sized,
    {
        match self.plan {
            None => {
                return Err(MoveError::NotMoving {
                    position: self.position,
                });
            }
            Some(MovementPlan {
                transition: Some(_),
                ..
            }) => {
                return Err(MoveError::AlreadyTransitioning {
                    target: self.position,
                });
            }
            Some(_) => {}
        }

        let start = self.project(self.position);
        let (next, heading) =
            step_along(board, self.position, self.heading, self.config.depth_sign);
        if heading != self.heading {
            tracing::debug!(
                from = %self.heading,
                to = %heading,
                at = %self.position,
                "turned at corner"
            );
        }
        self.heading = heading;
        self.position = next;
        let target = self.project(next);
        presentation.face_heading(heading);

        if let Some(plan) = self.plan.as_mut() {
            plan.transition = Some(Transition {
                start,
                target,
                elapsed: 0.0,
            });
        }
        self.just_stopped = false;

        tracing::trace!(tile = %next, %target, "transition started");
        Ok(target)
    }

    /// Advances the current transition by `delta` seconds and pushes the
    /// interpolated world position to the presentation.
    pub fn tick<P>(&mut self, delta: f32, presentation: &mut P) -> Result<TickOutcome, MoveError>
    where
        P: Presentation + ?Sized,
    {
        let duration = self.config.move_duration;
        let position = self.position;
        let not_transitioning = MoveError::NotTransitioning { position };

        let plan = self.plan.as_mut().ok_or(not_transitioning)?;
        let transition = plan.transition.as_mut().ok_or(not_transitioning)?;

        transition.elapsed += delta;
        let arrived = transition.elapsed >= duration;
        let world_position = if arrived {
            transition.target
        } else {
            transition.start.lerp(transition.target, transition.elapsed / duration)
        };

        if arrived {
            plan.transition = None;
            plan.steps_remaining = plan.steps_remaining.saturating_sub(1);
            if plan.steps_remaining == 0 {
                self.plan = None;
                tracing::debug!(%position, "move finished");
            }
            self.just_stopped = true;
        }

        self.world_position = world_position;
        presentation.set_world_position(world_position);

        Ok(TickOutcome {
            world_position,
            arrived,
            steps_remaining: self.steps_remaining(),
        })
    }

    /// Computes where the remaining steps will end without touching the
    /// walker. Repeated calls return the same preview.
    pub fn preview_finish<B>(&self, board: &B) -> FinishPreview
    where
        B: Board + ?Sized,
    {
        let mut position = self.position;
        let mut heading = self.heading;
        for _ in 0..self.steps_remaining() {
            (position, heading) = step_along(board, position, heading, self.config.depth_sign);
        }
        FinishPreview { position, heading }
    }

    /// Jumps straight to `preview`, discarding any transition in flight, and
    /// leaves the walker idle.
    pub fn commit_to_finish<P>(&mut self, preview: FinishPreview, presentation: &mut P)
    where
        P: Presentation + ?Sized,
    {
        self.position = preview.position;
        self.heading = preview.heading;
        self.world_position = self.project(preview.position);
        self.plan = None;
        self.just_stopped = true;

        presentation.face_heading(self.heading);
        presentation.set_world_position(self.world_position);

        tracing::debug!(
            position = %self.position,
            heading = %self.heading,
            "skipped to finish"
        );
    }
}
