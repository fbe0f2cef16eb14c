use std::collections::HashSet;

use board_core::{
    Board, DepthSign, FinishPreview, GameConfig, Heading, MovementConfig, NullPresentation,
    Position, Presentation, TileGrid, TrackWalker, WorldPoint,
};
use strum::IntoEnumIterator;

/// Board made of an explicit set of occupiable tiles.
struct Tiles(HashSet<Position>);

impl Tiles {
    fn of(cells: impl IntoIterator<Item = Position>) -> Self {
        Self(cells.into_iter().collect())
    }
}

impl Board for Tiles {
    fn is_occupiable(&self, position: Position) -> bool {
        self.0.contains(&position)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Face(Heading),
    Place(WorldPoint),
}

#[derive(Default)]
struct Recorder(Vec<Command>);

impl Presentation for Recorder {
    fn face_heading(&mut self, heading: Heading) {
        self.0.push(Command::Face(heading));
    }

    fn set_world_position(&mut self, position: WorldPoint) {
        self.0.push(Command::Place(position));
    }
}

const SIGNS: [DepthSign; 2] = [DepthSign::Negative, DepthSign::Positive];

fn walker(sign: DepthSign, position: Position, heading: Heading) -> TrackWalker {
    TrackWalker::new(MovementConfig::new(sign), position, heading)
}

/// Runs one full tile: advance, then tick until arrival.
fn walk_tile<B: Board>(walker: &mut TrackWalker, board: &B) {
    walker.advance_one_tile(board, &mut NullPresentation).unwrap();
    loop {
        let outcome = walker.tick(0.2, &mut NullPresentation).unwrap();
        if outcome.arrived {
            break;
        }
    }
}

/// A snake: right along y = 0, a corner, then back left along the next row.
fn snake_rows() -> TileGrid {
    TileGrid::from_rows(&[
        [1u8, 1, 1, 1, 1],
        [0, 0, 0, 0, 1],
        [1, 1, 1, 1, 1],
        [1, 0, 0, 0, 0],
        [1, 1, 1, 1, 1],
    ])
}

#[test]
fn open_tile_ahead_keeps_heading_and_moves_one_delta() {
    for sign in SIGNS {
        for heading in Heading::iter() {
            let origin = Position::new(5, 5);
            let ahead = sign.step(origin, heading);
            let board = Tiles::of([origin, ahead]);
            let mut walker = walker(sign, origin, heading);

            walker.begin_move(1).unwrap();
            walker.advance_one_tile(&board, &mut NullPresentation).unwrap();

            assert_eq!(walker.heading(), heading, "{sign} {heading}");
            assert_eq!(walker.position(), ahead, "{sign} {heading}");
            assert_eq!(walker.steps_remaining(), 1);
        }
    }
}

#[test]
fn horizontal_corner_tie_break() {
    for sign in SIGNS {
        for heading in [Heading::Right, Heading::Left] {
            let origin = Position::new(5, 5);
            let down = sign.step(origin, Heading::Down);
            let up = sign.step(origin, Heading::Up);

            for (cells, expected) in [
                (vec![down], Heading::Down),
                (vec![up], Heading::Up),
                (vec![down, up], Heading::Up),
            ] {
                let board = Tiles::of(cells);
                let mut walker = walker(sign, origin, heading);
                walker.begin_move(1).unwrap();
                walker.advance_one_tile(&board, &mut NullPresentation).unwrap();

                assert_eq!(walker.heading(), expected, "{sign} {heading}");
                assert_eq!(walker.position(), sign.step(origin, expected));
            }
        }
    }
}

#[test]
fn vertical_corner_tie_break() {
    for sign in SIGNS {
        for heading in [Heading::Up, Heading::Down] {
            let origin = Position::new(5, 5);
            let left = Position::new(4, 5);
            let right = Position::new(6, 5);

            for (cells, expected) in [
                (vec![left], Heading::Left),
                (vec![right], Heading::Right),
                (vec![left, right], Heading::Right),
            ] {
                let board = Tiles::of(cells);
                let mut walker = walker(sign, origin, heading);
                walker.begin_move(1).unwrap();
                walker.advance_one_tile(&board, &mut NullPresentation).unwrap();

                assert_eq!(walker.heading(), expected, "{sign} {heading}");
                assert_eq!(walker.position(), sign.step(origin, expected));
            }
        }
    }
}

#[test]
fn preview_is_pure_and_idempotent() {
    let board = snake_rows();
    let mut walker = walker(DepthSign::Negative, Position::ORIGIN, Heading::Right);
    walker.begin_move(7).unwrap();
    let before = walker.clone();

    let first = walker.preview_finish(&board);
    let second = walker.preview_finish(&board);

    assert_eq!(first, second);
    assert_eq!(walker, before);
}

#[test]
fn preview_leaves_transition_untouched() {
    let board = snake_rows();
    let mut walker = walker(DepthSign::Negative, Position::ORIGIN, Heading::Right);
    walker.begin_move(4).unwrap();
    walker.advance_one_tile(&board, &mut NullPresentation).unwrap();
    walker.tick(0.1, &mut NullPresentation).unwrap();
    let before = walker.clone();

    walker.preview_finish(&board);

    assert_eq!(walker, before);
    assert_eq!(walker.plan(), before.plan());
}

#[test]
fn commit_matches_walking_every_tile() {
    let board = snake_rows();
    for sign in SIGNS {
        for steps in 1..=12 {
            let mut walked = walker(sign, Position::ORIGIN, Heading::Right);
            let mut skipped = walked.clone();
            walked.begin_move(steps).unwrap();
            skipped.begin_move(steps).unwrap();

            while walked.is_moving() {
                walk_tile(&mut walked, &board);
            }
            let preview = skipped.preview_finish(&board);
            skipped.commit_to_finish(preview, &mut NullPresentation);

            let case = format!("{sign} steps {steps}");
            assert_eq!(skipped.position(), walked.position(), "{case}");
            assert_eq!(skipped.heading(), walked.heading(), "{case}");
            assert_eq!(skipped.world_position(), walked.world_position(), "{case}");
            assert!(!skipped.is_moving(), "{case}");
        }
    }
}

#[test]
fn preview_mid_transition_counts_from_target_tile() {
    // The tile in flight is already the walker's position and its step is
    // still counted as remaining, so the preview lands one tile further
    // than walking out the move.
    let board = TileGrid::from_rows(&[[1u8; 6]]);
    let mut walker = walker(DepthSign::Negative, Position::ORIGIN, Heading::Right);
    walker.begin_move(3).unwrap();
    walker.advance_one_tile(&board, &mut NullPresentation).unwrap();
    walker.tick(0.1, &mut NullPresentation).unwrap();

    assert_eq!(walker.position(), Position::new(1, 0));
    assert_eq!(walker.steps_remaining(), 3);
    let preview = walker.preview_finish(&board);
    assert_eq!(preview.position, Position::new(4, 0));

    let mut walked = walker.clone();
    loop {
        let outcome = walked.tick(0.2, &mut NullPresentation).unwrap();
        if outcome.arrived {
            break;
        }
    }
    while walked.is_moving() {
        walk_tile(&mut walked, &board);
    }
    assert_eq!(walked.position(), Position::new(3, 0));

    walker.commit_to_finish(preview, &mut NullPresentation);
    assert_eq!(walker.position(), Position::new(4, 0));
    assert!(!walker.is_moving());
}

#[test]
fn snake_walk_turns_through_both_corners() {
    let board = snake_rows();
    let mut walker = walker(DepthSign::Negative, Position::ORIGIN, Heading::Right);
    walker.begin_move(12).unwrap();

    assert_eq!(
        walker.preview_finish(&board),
        FinishPreview {
            position: Position::new(0, 4),
            heading: Heading::Down,
        }
    );
}

#[test]
fn positive_sign_walks_mirrored_track() {
    // Same snake, but Up is +y, so the corner at (4, 0) turns Up.
    let board = snake_rows();
    let mut walker = walker(DepthSign::Positive, Position::ORIGIN, Heading::Right);
    walker.begin_move(6).unwrap();

    let preview = walker.preview_finish(&board);
    assert_eq!(preview.position, Position::new(4, 2));
    assert_eq!(preview.heading, Heading::Up);
}

#[test]
fn presentation_commands_per_phase() {
    let board = snake_rows();
    let config = GameConfig::default();
    let mut walker = TrackWalker::new(config.movement, Position::ORIGIN, Heading::Right);
    let mut recorder = Recorder::default();

    walker.begin_move(2).unwrap();
    assert!(recorder.0.is_empty());

    walker.advance_one_tile(&board, &mut recorder).unwrap();
    assert_eq!(recorder.0, vec![Command::Face(Heading::Right)]);

    walker.tick(0.25, &mut recorder).unwrap();
    assert_eq!(
        recorder.0.last(),
        Some(&Command::Place(WorldPoint::new(1.0, 0.0, 0.0)))
    );

    recorder.0.clear();
    let preview = walker.preview_finish(&board);
    assert!(recorder.0.is_empty());

    walker.commit_to_finish(preview, &mut recorder);
    assert_eq!(
        recorder.0,
        vec![
            Command::Face(preview.heading),
            Command::Place(WorldPoint::new(
                2.0 * preview.position.x as f32,
                0.0,
                -2.0 * preview.position.y as f32,
            )),
        ]
    );
}

#[test]
fn set_heading_turns_in_place() {
    let mut walker = walker(DepthSign::Negative, Position::new(2, 2), Heading::Up);
    let before = walker.world_position();
    let mut recorder = Recorder::default();

    walker.set_heading(Heading::Left, &mut recorder);

    assert_eq!(walker.heading(), Heading::Left);
    assert_eq!(walker.position(), Position::new(2, 2));
    assert_eq!(walker.world_position(), before);
    assert_eq!(recorder.0, vec![Command::Face(Heading::Left)]);
}
