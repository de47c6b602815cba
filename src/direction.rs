use serde::{Deserialize, Serialize};

/// One of the four sides of a cell.
///
/// The discriminants match the wall bit positions used by [`crate::grid::Walls`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Direction {
    /// All directions in wall-index order
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// The side facing back (Top <-> Bottom, Left <-> Right)
    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// Row/column offset of a single step: (d_row, d_col)
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Top => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Bottom => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction from one cell to an orthogonally adjacent one.
    ///
    /// Uses the carving convention `dx = from.col - to.col`, `dy = from.row - to.row`:
    /// `dx == 1` means `to` lies on the left, `dy == 1` means `to` lies above.
    pub fn between(from: (i32, i32), to: (i32, i32)) -> Option<Self> {
        let dy = from.0 - to.0;
        let dx = from.1 - to.1;
        match (dy, dx) {
            (0, 1) => Some(Direction::Left),
            (0, -1) => Some(Direction::Right),
            (1, 0) => Some(Direction::Top),
            (-1, 0) => Some(Direction::Bottom),
            _ => None,
        }
    }
}
