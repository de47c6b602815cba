use crate::agent::{Agent, MoveOutcome};
use crate::carver::{carve, carve_with_seed};
use crate::config::Config;
use crate::direction::Direction;
use crate::error::Result;
use crate::event_log::{EventLog, MazeEvent};
use crate::grid::{Coord, MazeGrid};
use log::{debug, info};
use rand::Rng;

/// A generated maze with its walker.
///
/// Built once at startup (initialize, carve, spawn), then driven by directional
/// input and start/stop toggles. Transitions are reported through the `log`
/// facade and, when enabled, recorded in an [`EventLog`].
pub struct MazeSession {
    grid: MazeGrid,
    agent: Agent,
    /// Cell the agent returns to on regenerate
    spawn: Coord,
    event_log: Option<EventLog>,
}

impl MazeSession {
    /// Generate a maze from the configured dimensions and seed
    pub fn new(config: &Config) -> Result<Self> {
        let mut grid = MazeGrid::new(config.maze.rows, config.maze.cols)?;
        let passages = carve_with_seed(&mut grid, config.maze.seed)?.len();
        Self::assemble(config, grid, passages)
    }

    /// Generate a maze drawing randomness from `rng`
    pub fn with_rng<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<Self> {
        let mut grid = MazeGrid::new(config.maze.rows, config.maze.cols)?;
        let passages = carve(&mut grid, rng)?.len();
        Self::assemble(config, grid, passages)
    }

    fn assemble(config: &Config, grid: MazeGrid, passages: usize) -> Result<Self> {
        let agent = Agent::spawn(&grid, config.spawn.row, config.spawn.col)?;

        let mut session = MazeSession {
            grid,
            agent,
            spawn: Coord::new(config.spawn.row, config.spawn.col),
            event_log: if config.logging.enable_event_log {
                Some(EventLog::new())
            } else {
                None
            },
        };
        session.generated(passages);
        session.spawned();
        Ok(session)
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn position(&self) -> Coord {
        self.agent.position()
    }

    pub fn is_active(&self) -> bool {
        self.agent.is_active()
    }

    pub fn spawn(&self) -> Coord {
        self.spawn
    }

    pub fn event_log(&self) -> Option<&EventLog> {
        self.event_log.as_ref()
    }

    /// Flip the agent between stopped and running
    pub fn toggle_active(&mut self) -> bool {
        let active = self.agent.toggle_active();
        info!("Agent {}", if active { "started" } else { "stopped" });
        self.record(MazeEvent::ActiveToggled { active });
        active
    }

    /// Re-place the agent; it is stopped afterwards
    pub fn set_spawn(&mut self, row: i32, col: i32) -> Result<()> {
        self.agent.set_spawn(&self.grid, row, col)?;
        self.spawn = Coord::new(row, col);
        self.spawned();
        Ok(())
    }

    /// Try to step the agent in `dir` and return where it stands afterwards
    pub fn move_agent(&mut self, dir: Direction) -> Coord {
        let outcome = self.agent.try_move_outcome(&mut self.grid, dir);
        match outcome {
            MoveOutcome::Moved { from, to } => {
                debug!("Move {:?} accepted: ({}, {}) -> ({}, {})", dir, from.row, from.col, to.row, to.col);
                self.record(MazeEvent::MoveAccepted { direction: dir, from, to });
            }
            MoveOutcome::Blocked { at } | MoveOutcome::Inactive { at } => {
                debug!("Move {:?} rejected at ({}, {})", dir, at.row, at.col);
                self.record(MazeEvent::MoveRejected { direction: dir, at });
            }
        }
        outcome.position()
    }

    /// Carve a fresh maze of the same size and put the agent back on its spawn cell.
    ///
    /// The passed overlay starts over and the agent is stopped.
    pub fn regenerate(&mut self, seed: Option<u64>) -> Result<()> {
        let mut grid = MazeGrid::new(self.grid.rows(), self.grid.cols())?;
        let passages = carve_with_seed(&mut grid, seed)?.len();
        self.agent.set_spawn(&grid, self.spawn.row, self.spawn.col)?;
        self.grid = grid;
        self.generated(passages);
        self.spawned();
        Ok(())
    }

    fn generated(&mut self, passages: usize) {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        info!("Generated {}x{} maze ({} passages)", rows, cols, passages);
        self.record(MazeEvent::GenerationComplete { rows, cols, passages });
    }

    fn spawned(&mut self) {
        let Coord { row, col } = self.agent.position();
        info!("Agent spawned at ({}, {})", row, col);
        self.record(MazeEvent::SpawnSet { row, col });
    }

    fn record(&mut self, event: MazeEvent) {
        if let Some(log) = self.event_log.as_mut() {
            log.record(event);
        }
    }
}
