use crate::direction::Direction;
use crate::error::{MazeError, Result};
use crate::grid::Coord;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// State transitions of a maze session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MazeEvent {
    /// Carving finished (rows, cols, opened passages)
    GenerationComplete { rows: i32, cols: i32, passages: usize },
    /// Agent placed on (row, col)
    SpawnSet { row: i32, col: i32 },
    /// Start/stop flag flipped
    ActiveToggled { active: bool },
    MoveAccepted { direction: Direction, from: Coord, to: Coord },
    /// Wall, boundary or stopped agent
    MoveRejected { direction: Direction, at: Coord },
}

/// Event with milliseconds since the log was created
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedEvent {
    pub timestamp_ms: u64,
    pub event: MazeEvent,
}

/// Session event recorder
pub struct EventLog {
    start_time: Instant,
    events: Vec<LoggedEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog {
            start_time: Instant::now(),
            events: Vec::new(),
        }
    }

    pub fn record(&mut self, event: MazeEvent) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        self.events.push(LoggedEvent { timestamp_ms, event });
    }

    pub fn events(&self) -> &[LoggedEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Save log to a pretty-printed JSON file
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.events)
            .map_err(|e| MazeError::Io(format!("Failed to serialize event log: {}", e)))?;

        std::fs::write(path, json)
            .map_err(|e| MazeError::Io(format!("Failed to write event log {}: {}", path, e)))?;

        Ok(())
    }

    pub fn summary(&self) -> String {
        let mut accepted = 0;
        let mut rejected = 0;
        let mut toggles = 0;
        let mut generations = 0;

        for logged in &self.events {
            match logged.event {
                MazeEvent::MoveAccepted { .. } => accepted += 1,
                MazeEvent::MoveRejected { .. } => rejected += 1,
                MazeEvent::ActiveToggled { .. } => toggles += 1,
                MazeEvent::GenerationComplete { .. } => generations += 1,
                MazeEvent::SpawnSet { .. } => {}
            }
        }

        let duration = self.events.last().map(|e| e.timestamp_ms).unwrap_or(0);

        format!(
            "Session Duration: {}ms\n\
             Total Events: {}\n\
             Mazes Generated: {}\n\
             Moves: {} accepted, {} rejected\n\
             Start/Stop Toggles: {}",
            duration,
            self.events.len(),
            generations,
            accepted,
            rejected,
            toggles
        )
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
