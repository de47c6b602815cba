use crate::direction::Direction;
use crate::error::{MazeError, Result};
use crate::grid::{Coord, MazeGrid};

/// Result of a single move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Passage was open; the agent left `from` and now stands on `to`
    Moved { from: Coord, to: Coord },
    /// Boundary or wall in the way; nothing changed
    Blocked { at: Coord },
    /// Agent is stopped; input ignored
    Inactive { at: Coord },
}

impl MoveOutcome {
    /// Where the agent stands after the request
    pub fn position(self) -> Coord {
        match self {
            MoveOutcome::Moved { to, .. } => to,
            MoveOutcome::Blocked { at } | MoveOutcome::Inactive { at } => at,
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// The walker: a position on a generated cell plus the start/stop flag gating movement
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    position: Coord,
    active: bool,
}

impl Agent {
    /// Place a new, inactive agent on `(row, col)`.
    ///
    /// Only cells reached during generation are valid spawn points.
    pub fn spawn(grid: &MazeGrid, row: i32, col: i32) -> Result<Self> {
        check_spawn(grid, row, col)?;
        Ok(Agent {
            position: Coord::new(row, col),
            active: false,
        })
    }

    /// Move the agent to a new spawn point and stop it
    pub fn set_spawn(&mut self, grid: &MazeGrid, row: i32, col: i32) -> Result<()> {
        check_spawn(grid, row, col)?;
        self.position = Coord::new(row, col);
        self.active = false;
        Ok(())
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flip between stopped and running; returns the new state
    pub fn toggle_active(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    /// Attempt one step in `dir` and return the resulting position.
    ///
    /// Rejected moves are silent: the returned coordinate is simply unchanged.
    pub fn try_move(&mut self, grid: &mut MazeGrid, dir: Direction) -> Coord {
        self.try_move_outcome(grid, dir).position()
    }

    /// Attempt one step in `dir`.
    ///
    /// The step is taken only while active, when the target is inside the grid, and when
    /// both the current cell's wall facing `dir` and the target's wall facing back are
    /// open. An accepted step marks the vacated cell as passed.
    pub fn try_move_outcome(&mut self, grid: &mut MazeGrid, dir: Direction) -> MoveOutcome {
        let from = self.position;
        if !self.active {
            return MoveOutcome::Inactive { at: from };
        }

        let to = match grid.neighbor(from, dir) {
            Some(to) => to,
            None => return MoveOutcome::Blocked { at: from },
        };

        let open_here = matches!(grid.has_wall(from.row, from.col, dir), Ok(false));
        let open_there = matches!(grid.has_wall(to.row, to.col, dir.opposite()), Ok(false));
        if !open_here || !open_there {
            return MoveOutcome::Blocked { at: from };
        }

        if grid.mark_passed(from.row, from.col).is_err() {
            return MoveOutcome::Blocked { at: from };
        }
        self.position = to;
        MoveOutcome::Moved { from, to }
    }
}

fn check_spawn(grid: &MazeGrid, row: i32, col: i32) -> Result<()> {
    match grid.is_visited(row, col) {
        Ok(true) => Ok(()),
        _ => Err(MazeError::InvalidSpawn { row, col }),
    }
}
