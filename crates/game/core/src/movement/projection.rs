//! Mapping between grid coordinates and presentation space.

use crate::state::{Heading, Position, WorldPoint};

/// Orientation of the grid's `y` axis relative to the world depth axis.
///
/// The two player seats were authored with opposite conventions. In both,
/// [`Heading::Up`] moves towards world `+z`; they differ in whether that
/// means decreasing or increasing grid `y`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DepthSign {
    /// `depth = -pitch * y`; Up decreases `y`.
    #[default]
    Negative,
    /// `depth = +pitch * y`; Up increases `y`.
    Positive,
}

impl DepthSign {
    pub const fn factor(self) -> i32 {
        match self {
            DepthSign::Negative => -1,
            DepthSign::Positive => 1,
        }
    }

    /// Grid offset of one step in `heading`.
    pub const fn delta(self, heading: Heading) -> (i32, i32) {
        match heading {
            Heading::Up => (0, self.factor()),
            Heading::Down => (0, -self.factor()),
            Heading::Right => (1, 0),
            Heading::Left => (-1, 0),
        }
    }

    /// Tile reached by one step from `position` in `heading`.
    pub fn step(self, position: Position, heading: Heading) -> Position {
        position.offset(self.delta(heading))
    }
}

/// Projects tile coordinates into world space at a fixed pitch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pitch: f32,
    sign: DepthSign,
}

impl Projection {
    pub const fn new(pitch: f32, sign: DepthSign) -> Self {
        Self { pitch, sign }
    }

    /// World point of the tile centre; `height` is carried through unchanged.
    pub fn project(&self, position: Position, height: f32) -> WorldPoint {
        WorldPoint::new(
            self.pitch * position.x as f32,
            height,
            self.sign.factor() as f32 * self.pitch * position.y as f32,
        )
    }
}
