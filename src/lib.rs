pub mod agent;
pub mod ascii;
pub mod carver;
pub mod config;
pub mod direction;
pub mod error;
pub mod event_log;
pub mod grid;
pub mod session;

pub use agent::{Agent, MoveOutcome};
pub use ascii::render_ascii;
pub use carver::{carve, carve_with_seed};
pub use config::Config;
pub use direction::Direction;
pub use error::MazeError;
pub use event_log::{EventLog, MazeEvent};
pub use grid::{Cell, Coord, MazeGrid, Walls};
pub use session::MazeSession;
