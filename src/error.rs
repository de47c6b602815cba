use std::fmt;

/// Errors reported by grid setup, coordinate queries and agent placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Non-positive row or column count at initialization
    InvalidDimension { rows: i32, cols: i32 },
    /// Coordinate outside `[0, rows) x [0, cols)`
    OutOfBounds {
        row: i32,
        col: i32,
        rows: i32,
        cols: i32,
    },
    /// Spawn coordinate was never reached by generation
    InvalidSpawn { row: i32, col: i32 },
    /// Configuration text could not be parsed
    Config(String),
    /// Reading or writing a file failed
    Io(String),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { rows, cols } => {
                write!(f, "Invalid maze dimensions {}x{}: rows and cols must be positive", rows, cols)
            }
            MazeError::OutOfBounds { row, col, rows, cols } => write!(
                f,
                "Coordinate ({}, {}) is outside the {}x{} grid",
                row, col, rows, cols
            ),
            MazeError::InvalidSpawn { row, col } => write!(
                f,
                "Cell ({}, {}) is not a valid spawn point (not visited)",
                row, col
            ),
            MazeError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MazeError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for MazeError {}

pub type Result<T> = std::result::Result<T, MazeError>;
