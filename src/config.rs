use crate::error::{MazeError, Result};
use log::{info, warn};
use serde::Deserialize;
use std::fs;

pub const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub maze: MazeConfig,
    #[serde(default)]
    pub spawn: SpawnConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct MazeConfig {
    #[serde(default = "default_rows")]
    pub rows: i32,
    #[serde(default = "default_cols")]
    pub cols: i32,
    /// Fixed seed for reproducible mazes; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct SpawnConfig {
    #[serde(default = "default_spawn_row")]
    pub row: i32,
    #[serde(default = "default_spawn_col")]
    pub col: i32,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_enable_event_log")]
    pub enable_event_log: bool,
    #[serde(default = "default_event_log_path")]
    pub event_log_path: String,
}

// Default values
fn default_rows() -> i32 { 20 }
fn default_cols() -> i32 { 20 }
fn default_spawn_row() -> i32 { 5 }
fn default_spawn_col() -> i32 { 5 }
fn default_window_title() -> String { "Maze Walk".to_string() }
fn default_cell_size() -> f32 { 20.0 }
fn default_bg_r() -> u8 { 255 }
fn default_bg_g() -> u8 { 255 }
fn default_bg_b() -> u8 { 255 }
fn default_enable_event_log() -> bool { true }
fn default_event_log_path() -> String { "event_log.json".to_string() }

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            seed: None,
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            row: default_spawn_row(),
            col: default_spawn_col(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            cell_size: default_cell_size(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_event_log: default_enable_event_log(),
            event_log_path: default_event_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maze: MazeConfig::default(),
            spawn: SpawnConfig::default(),
            visual: VisualConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `config.toml`, or use defaults if it is missing or invalid
    pub fn load() -> Self {
        match fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded configuration from {}", CONFIG_PATH);
                    config
                }
                Err(e) => {
                    warn!("{}; using default configuration", e);
                    Config::default()
                }
            },
            Err(_) => {
                info!("No {} found, using default configuration", CONFIG_PATH);
                Config::default()
            }
        }
    }

    /// Window size in pixels: the maze plus a `hud_height` strip below it, at least `min_width` wide
    pub fn window_size(&self, hud_height: f32, min_width: f32) -> (i32, i32) {
        let size = self.visual.cell_size;
        let width = (self.maze.cols as f32 * size).max(min_width);
        let height = self.maze.rows as f32 * size + hud_height;
        (width.ceil() as i32, height.ceil() as i32)
    }

    /// Parse configuration text; missing keys take their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| MazeError::Config(format!("Failed to parse {}: {}", CONFIG_PATH, e)))
    }
}
