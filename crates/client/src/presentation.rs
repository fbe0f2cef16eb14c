//! Collaborators that report through `tracing` instead of a renderer.

use board_core::{GameFlow, Heading, Presentation, WorldPoint};

/// Presentation sink that logs every command and remembers the last one.
#[derive(Debug, Default)]
pub struct LogPresentation {
    pub facing: Option<Heading>,
    pub world_position: Option<WorldPoint>,
}

impl Presentation for LogPresentation {
    fn face_heading(&mut self, heading: Heading) {
        tracing::trace!(%heading, "face");
        self.facing = Some(heading);
    }

    fn set_world_position(&mut self, point: WorldPoint) {
        tracing::trace!(%point, "place");
        self.world_position = Some(point);
    }
}

/// Game flow that records the game-over signal.
#[derive(Debug, Default)]
pub struct LogFlow {
    pub final_fame: Option<i32>,
}

impl LogFlow {
    pub fn is_over(&self) -> bool {
        self.final_fame.is_some()
    }
}

impl GameFlow for LogFlow {
    fn game_over(&mut self, fame: i32) {
        tracing::warn!(fame, "game over");
        self.final_fame = Some(fame);
    }
}
