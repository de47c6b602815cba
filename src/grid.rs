use crate::direction::Direction;
use crate::error::{MazeError, Result};
use serde::{Deserialize, Serialize};

/// A cell coordinate. Signed so that out-of-range queries can be expressed and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    /// The coordinate one step away in `dir` (may be outside the grid).
    ///
    /// Saturates at the `i32` limits; a saturated coordinate is never inside a grid.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.offset();
        Coord::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }
}

/// Four wall flags packed in the low bits, bit index = `Direction::index()`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walls(u8);

impl Walls {
    pub const ALL: Walls = Walls(0b1111);

    pub fn has(self, dir: Direction) -> bool {
        self.0 & (1 << dir.index()) != 0
    }

    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !(1 << dir.index());
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::ALL
    }
}

/// A maze cell: its walls and whether generation has reached it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub walls: Walls,
    pub visited: bool,
}

/// Maze storage: wall/visited state for every cell plus the passed overlay.
///
/// Cells live in a flat vector indexed by `row * cols + col`.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    passed: Vec<bool>,
    /// Incremented whenever a wall or visited flag changes
    revision: u64,
}

impl MazeGrid {
    /// Create a grid with every wall present and no cell visited.
    ///
    /// `rows * cols` must fit in an `i32` so every flat index does too.
    pub fn new(rows: i32, cols: i32) -> Result<Self> {
        if rows <= 0 || cols <= 0 {
            return Err(MazeError::InvalidDimension { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(MazeError::InvalidDimension { rows, cols })? as usize;
        Ok(MazeGrid {
            rows,
            cols,
            cells: vec![Cell::default(); len],
            passed: vec![false; len],
            revision: 0,
        })
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    fn index(&self, row: i32, col: i32) -> Result<usize> {
        if !self.in_bounds(row, col) {
            return Err(MazeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((row * self.cols + col) as usize)
    }

    /// Convert a flat index back to a coordinate
    pub fn coord_of(&self, id: usize) -> Coord {
        let id = id as i32;
        Coord::new(id / self.cols, id % self.cols)
    }

    pub fn cell_at(&self, row: i32, col: i32) -> Result<Cell> {
        let id = self.index(row, col)?;
        Ok(self.cells[id])
    }

    pub fn walls_of(&self, row: i32, col: i32) -> Result<Walls> {
        Ok(self.cell_at(row, col)?.walls)
    }

    pub fn is_visited(&self, row: i32, col: i32) -> Result<bool> {
        Ok(self.cell_at(row, col)?.visited)
    }

    pub fn is_passed(&self, row: i32, col: i32) -> Result<bool> {
        let id = self.index(row, col)?;
        Ok(self.passed[id])
    }

    /// Set the passed bit for a cell. Setting it again has no further effect.
    pub fn mark_passed(&mut self, row: i32, col: i32) -> Result<()> {
        let id = self.index(row, col)?;
        self.passed[id] = true;
        Ok(())
    }

    pub fn passed_count(&self) -> usize {
        self.passed.iter().filter(|&&p| p).count()
    }

    pub fn mark_visited(&mut self, row: i32, col: i32) -> Result<()> {
        let id = self.index(row, col)?;
        if !self.cells[id].visited {
            self.cells[id].visited = true;
            self.revision += 1;
        }
        Ok(())
    }

    /// Whether the wall of `(row, col)` on side `dir` is present
    pub fn has_wall(&self, row: i32, col: i32, dir: Direction) -> Result<bool> {
        Ok(self.walls_of(row, col)?.has(dir))
    }

    /// The in-bounds neighbor of `coord` in `dir`, if any
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        let next = coord.step(dir);
        if self.in_bounds(next.row, next.col) {
            Some(next)
        } else {
            None
        }
    }

    /// Clear the wall pair between two orthogonally adjacent cells.
    ///
    /// With `dx = current.col - next.col` and `dy = current.row - next.row`:
    /// `dx == 1` clears current's left and next's right wall, `dx == -1` the reverse,
    /// `dy == 1` clears current's top and next's bottom wall, `dy == -1` the reverse.
    /// Both sides are always cleared together so passages are never one-way.
    pub fn open_passage(&mut self, current: Coord, next: Coord) -> Result<()> {
        let current_id = self.index(current.row, current.col)?;
        let next_id = self.index(next.row, next.col)?;
        let dir = Direction::between((current.row, current.col), (next.row, next.col))
            .ok_or(MazeError::OutOfBounds {
                row: next.row,
                col: next.col,
                rows: self.rows,
                cols: self.cols,
            })?;

        self.cells[current_id].walls.remove(dir);
        self.cells[next_id].walls.remove(dir.opposite());
        self.revision += 1;
        Ok(())
    }

    /// Number of opened wall pairs between adjacent cells
    pub fn open_passage_count(&self) -> usize {
        let mut count = 0;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let walls = self.cells[(row * self.cols + col) as usize].walls;
                if col + 1 < self.cols && !walls.has(Direction::Right) {
                    count += 1;
                }
                if row + 1 < self.rows && !walls.has(Direction::Bottom) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Remove one side of a wall pair, leaving the neighbor untouched
    #[cfg(test)]
    pub(crate) fn clear_single_wall(&mut self, row: i32, col: i32, dir: Direction) {
        let id = (row * self.cols + col) as usize;
        self.cells[id].walls.remove(dir);
    }

    /// Iterate over all cells with their coordinates, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(id, cell)| (self.coord_of(id), *cell))
    }
}
