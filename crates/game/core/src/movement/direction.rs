//! Heading resolution along a one-tile-wide track.
//!
//! A walker keeps its heading while the tile ahead is occupiable. When the
//! tile ahead is empty it is standing on a corner and turns a quarter towards
//! whichever perpendicular neighbour is occupiable. Both perpendicular
//! neighbours are always tested, in a fixed order, and the later match
//! overrides the earlier one:
//!
//! | heading      | first test | second test (wins ties) |
//! |--------------|------------|-------------------------|
//! | Right, Left  | Down       | Up                      |
//! | Up, Down     | Left       | Right                   |
//!
//! Track corners are authored against this tie-break, so it must not be
//! replaced by a symmetric rule. When no neighbour is occupiable the heading
//! is left unchanged.

use super::DepthSign;
use crate::env::Board;
use crate::state::{Heading, Position};

/// Perpendicular headings tested at a corner, in evaluation order.
pub const fn corner_candidates(heading: Heading) -> [Heading; 2] {
    if heading.is_vertical() {
        [Heading::Left, Heading::Right]
    } else {
        [Heading::Down, Heading::Up]
    }
}

/// Heading a walker at `position` will travel in for its next step.
pub fn resolve_heading<B>(
    board: &B,
    position: Position,
    heading: Heading,
    sign: DepthSign,
) -> Heading
where
    B: Board + ?Sized,
{
    if board.is_occupiable(sign.step(position, heading)) {
        return heading;
    }

    let mut resolved = heading;
    for candidate in corner_candidates(heading) {
        if board.is_occupiable(sign.step(position, candidate)) {
            resolved = candidate;
        }
    }
    resolved
}

/// Resolves the heading and takes one step, returning the new tile and the
/// heading used to reach it.
pub fn step_along<B>(
    board: &B,
    position: Position,
    heading: Heading,
    sign: DepthSign,
) -> (Position, Heading)
where
    B: Board + ?Sized,
{
    let heading = resolve_heading(board, position, heading, sign);
    (sign.step(position, heading), heading)
}
