use crate::state::Position;

/// Read-only view of the board consulted while resolving walker headings.
///
/// Implementations must be pure: the walker may query the same tile several
/// times per step and during previews.
pub trait Board {
    fn is_occupiable(&self, position: Position) -> bool;
}

impl<B: Board + ?Sized> Board for &B {
    fn is_occupiable(&self, position: Position) -> bool {
        (**self).is_occupiable(position)
    }
}

/// Dimensions of a rectangular tile grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardDimensions {
    pub width: u32,
    pub height: u32,
}

impl BoardDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}

/// Dense grid of tile codes. Code `0` is an empty cell; any other code is a
/// track tile a player may stand on. Cells outside the grid read as empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    dimensions: BoardDimensions,
    tiles: Vec<u8>,
}

impl TileGrid {
    pub const EMPTY: u8 = 0;

    /// Creates an all-empty grid.
    pub fn new(dimensions: BoardDimensions) -> Self {
        let len = dimensions.width as usize * dimensions.height as usize;
        Self {
            dimensions,
            tiles: vec![Self::EMPTY; len],
        }
    }

    /// Builds a grid from rows of tile codes. Short rows are padded with
    /// empty cells up to the widest row.
    pub fn from_rows<R>(rows: &[R]) -> Self
    where
        R: AsRef<[u8]>,
    {
        let width = rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0);
        let mut grid = Self::new(BoardDimensions::new(width as u32, rows.len() as u32));
        for (y, row) in rows.iter().enumerate() {
            for (x, &code) in row.as_ref().iter().enumerate() {
                grid.set(Position::new(x as i32, y as i32), code);
            }
        }
        grid
    }

    pub fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    /// Tile code at `position`, `0` when outside the grid.
    pub fn tile(&self, position: Position) -> u8 {
        self.index(position)
            .map(|index| self.tiles[index])
            .unwrap_or(Self::EMPTY)
    }

    /// Writes a tile code. Returns false when `position` is outside the grid.
    pub fn set(&mut self, position: Position, code: u8) -> bool {
        match self.index(position) {
            Some(index) => {
                self.tiles[index] = code;
                true
            }
            None => false,
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.dimensions.contains(position).then(|| {
            position.y as usize * self.dimensions.width as usize + position.x as usize
        })
    }
}

impl Board for TileGrid {
    fn is_occupiable(&self, position: Position) -> bool {
        self.tile(position) != Self::EMPTY
    }
}
