use crate::movement::DepthSign;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub movement: MovementConfig,
    pub starting: StartingStats,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth_sign(mut self, depth_sign: DepthSign) -> Self {
        self.movement.depth_sign = depth_sign;
        self
    }

    pub fn with_turn_skip_cap(mut self, turn_skip_cap: i32) -> Self {
        self.starting.turn_skip_cap = turn_skip_cap;
        self
    }
}

/// Timing and projection parameters of a [`crate::movement::TrackWalker`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementConfig {
    /// Seconds spent travelling between two adjacent tiles.
    pub move_duration: f32,
    /// World units per tile on both horizontal axes.
    pub grid_pitch: f32,
    pub depth_sign: DepthSign,
}

impl MovementConfig {
    pub const DEFAULT_MOVE_DURATION: f32 = 0.5;
    pub const DEFAULT_GRID_PITCH: f32 = 2.0;

    pub const fn new(depth_sign: DepthSign) -> Self {
        Self {
            move_duration: Self::DEFAULT_MOVE_DURATION,
            grid_pitch: Self::DEFAULT_GRID_PITCH,
            depth_sign,
        }
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self::new(DepthSign::Negative)
    }
}

/// Values a player starts the game with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StartingStats {
    pub max_health: i32,
    pub strength: i32,
    pub defence: i32,
    pub gold: i32,
    pub fame: i32,
    pub dice_count: i32,
    pub turn_skip_cap: i32,
}

impl StartingStats {
    pub const DEFAULT_MAX_HEALTH: i32 = 20;
    pub const DEFAULT_STRENGTH: i32 = 5;
    pub const DEFAULT_DEFENCE: i32 = 5;
    pub const DEFAULT_GOLD: i32 = 10;
    pub const DEFAULT_FAME: i32 = 200;
    /// Also the value [`crate::turn::TurnState::reset_dice_count`] restores.
    pub const DEFAULT_DICE_COUNT: i32 = 2;
    pub const DEFAULT_TURN_SKIP_CAP: i32 = 3;
}

impl Default for StartingStats {
    fn default() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            strength: Self::DEFAULT_STRENGTH,
            defence: Self::DEFAULT_DEFENCE,
            gold: Self::DEFAULT_GOLD,
            fame: Self::DEFAULT_FAME,
            dice_count: Self::DEFAULT_DICE_COUNT,
            turn_skip_cap: Self::DEFAULT_TURN_SKIP_CAP,
        }
    }
}
