//! Replays dice rolls for one player on a loaded track.

use anyhow::{Context, Result, bail};
use board_content::TrackLayout;
use board_core::{GameError, GameFlow, Heading, MoveError, Player, Position, Presentation};

/// Frames a single move may take before the loop is declared stuck.
const MAX_FRAMES_PER_MOVE: u32 = 100_000;

/// What happened on one turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurnReport {
    /// A dead player sat the turn out and earned one turn back.
    Recovering { turn_skip_count: i32 },
    /// A dead player reached the cap, was restored and lost this turn.
    Revived { health: i32 },
    Moved {
        steps: u32,
        position: Position,
        heading: Heading,
        frames: u32,
    },
}

/// How the walk is driven once the dice are rolled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WalkMode {
    /// Step frame by frame through every tile transition.
    #[default]
    Animated,
    /// Preview the destination and jump straight to it.
    Instant,
}

pub struct Session {
    player: Player,
    layout: TrackLayout,
    frame_dt: f32,
}

impl Session {
    pub fn new(player: Player, layout: TrackLayout, frame_dt: f32) -> Self {
        Self {
            player,
            layout,
            frame_dt,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Plays one turn with `roll` steps.
    ///
    /// A player who has died passes through the turn-skip gate instead of
    /// moving until it forces the skip that revives them.
    pub fn take_turn(
        &mut self,
        roll: u32,
        mode: WalkMode,
        presentation: &mut dyn Presentation,
        flow: &mut dyn GameFlow,
    ) -> Result<TurnReport> {
        if self.player.stats.was_dead {
            let skipped = self.player.turn(flow).consume_turn_skip();
            let stats = &self.player.stats;
            return Ok(if skipped {
                TurnReport::Revived {
                    health: stats.health,
                }
            } else {
                TurnReport::Recovering {
                    turn_skip_count: stats.turn_skip_count,
                }
            });
        }

        self.player
            .walker
            .begin_move(roll)
            .map_err(log_move_error)
            .with_context(|| format!("{} cannot move {} steps", self.player.id(), roll))?;

        let frames = match mode {
            WalkMode::Animated => self.animate(presentation)?,
            WalkMode::Instant => {
                let walker = &mut self.player.walker;
                let preview = walker.preview_finish(&self.layout.grid);
                walker.commit_to_finish(preview, presentation);
                0
            }
        };

        self.player.walker.set_just_stopped(false);
        let walker = &self.player.walker;
        tracing::info!(
            player = %self.player.id(),
            steps = roll,
            position = %walker.position(),
            heading = %walker.heading(),
            frames,
            "move finished"
        );

        Ok(TurnReport::Moved {
            steps: roll,
            position: walker.position(),
            heading: walker.heading(),
            frames,
        })
    }

    fn animate(&mut self, presentation: &mut dyn Presentation) -> Result<u32> {
        let mut frames = 0;
        while self.player.walker.is_moving() {
            self.player
                .update(self.frame_dt, &self.layout.grid, &mut *presentation)
                .map_err(log_move_error)?;
            frames += 1;
            if frames >= MAX_FRAMES_PER_MOVE {
                bail!(
                    "walker did not stop after {} frames at {}",
                    frames,
                    self.player.walker.position()
                );
            }
        }
        Ok(frames)
    }

    /// Resolves a battle the player lost: `damage` to health, then the fame
    /// penalty and death check. Returns whether the player died.
    pub fn lose_battle(
        &mut self,
        damage: i32,
        fame_penalty: i32,
        flow: &mut dyn GameFlow,
    ) -> bool {
        let mut turn = self.player.turn(flow);
        turn.apply_damage(damage);
        turn.handle_combat_death(-fame_penalty);
        turn.stats().was_dead
    }
}

/// Logs a walker error at a level matching its severity and hands it back.
fn log_move_error(err: MoveError) -> MoveError {
    let severity = err.severity();
    if severity.is_internal() {
        tracing::error!(
            code = err.error_code(),
            severity = severity.as_str(),
            %err,
            "walker misuse"
        );
    } else {
        tracing::warn!(
            code = err.error_code(),
            severity = severity.as_str(),
            %err,
            "move rejected"
        );
    }
    err
}
