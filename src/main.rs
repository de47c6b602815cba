use arboard::Clipboard;
use log::{error, info, warn};
use macroquad::prelude::*;
use mazewalk::{render_ascii, Config, Direction, MazeSession};

/// Info panel height below the maze
const HUD_HEIGHT: f32 = 60.0;
/// Narrowest window that still fits the key help line
const MIN_WIDTH: f32 = 520.0;

/// Visualization state
struct VisState {
    session: MazeSession,
    config: Config,
}

impl VisState {
    fn new(config: Config) -> Result<Self, mazewalk::MazeError> {
        let session = MazeSession::new(&config)?;
        Ok(VisState { session, config })
    }

    fn handle_keys(&mut self) {
        if is_key_pressed(KeyCode::G) {
            self.session.toggle_active();
        }

        let moves = [
            (KeyCode::Up, Direction::Top),
            (KeyCode::Down, Direction::Bottom),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
        ];
        for (key, dir) in moves {
            if is_key_pressed(key) {
                self.session.move_agent(dir);
            }
        }

        if is_key_pressed(KeyCode::R) {
            if let Err(e) = self.session.regenerate(None) {
                error!("Failed to regenerate maze: {}", e);
            }
        }

        if is_key_pressed(KeyCode::C) {
            self.copy_to_clipboard();
        }
    }

    fn copy_to_clipboard(&self) {
        let text = render_ascii(self.session.grid(), Some(self.session.agent()));
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(&text) {
                    warn!("Failed to copy to clipboard: {}", e);
                } else {
                    info!("Maze copied to clipboard");
                    // Keep clipboard alive for a moment so clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                warn!("Failed to access clipboard: {}", e);
            }
        }
    }

    fn draw(&self) {
        let visual = &self.config.visual;
        clear_background(Color::from_rgba(
            visual.background_r,
            visual.background_g,
            visual.background_b,
            255,
        ));

        let size = visual.cell_size;
        let grid = self.session.grid();

        for (coord, cell) in grid.iter() {
            let x = coord.col as f32 * size;
            let y = coord.row as f32 * size;

            if grid.is_passed(coord.row, coord.col).unwrap_or(false) {
                draw_rectangle(x, y, size, size, YELLOW);
            }
            if cell.walls.has(Direction::Top) {
                draw_line(x, y, x + size, y, 1.0, BLACK);
            }
            if cell.walls.has(Direction::Right) {
                draw_line(x + size, y, x + size, y + size, 1.0, BLACK);
            }
            if cell.walls.has(Direction::Bottom) {
                draw_line(x, y + size, x + size, y + size, 1.0, BLACK);
            }
            if cell.walls.has(Direction::Left) {
                draw_line(x, y, x, y + size, 1.0, BLACK);
            }
        }

        let pos = self.session.position();
        let color = if self.session.is_active() { GREEN } else { RED };
        draw_circle(
            pos.col as f32 * size + size / 2.0,
            pos.row as f32 * size + size / 2.0,
            size / 4.0,
            color,
        );

        let info = format!(
            "Agent: ({}, {}) {}  Passed: {}",
            pos.row,
            pos.col,
            if self.session.is_active() { "running" } else { "stopped" },
            grid.passed_count()
        );
        let hud_y = grid.rows() as f32 * size + 20.0;
        draw_text(&info, 10.0, hud_y, 20.0, DARKGRAY);
        draw_text(
            "Arrows: move  G: start/stop  R: new maze  C: copy  Esc: quit",
            10.0,
            hud_y + 24.0,
            18.0,
            DARKGRAY,
        );
    }

    fn finish(&self) {
        let Some(log) = self.session.event_log() else {
            return;
        };
        println!("{}", log.summary());
        let path = &self.config.logging.event_log_path;
        match log.save_to_file(path) {
            Ok(()) => info!("Event log saved to {}", path),
            Err(e) => error!("{}", e),
        }
    }
}

fn window_conf() -> Conf {
    // Runs before main, so the logger is installed here
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    let (window_width, window_height) = config.window_size(HUD_HEIGHT, MIN_WIDTH);
    Conf {
        window_title: config.visual.window_title,
        window_width,
        window_height,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = Config::load();

    let mut state = match VisState::new(config) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to set up maze: {}", e);
            return;
        }
    };

    loop {
        state.handle_keys();

        // Close window on Escape
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        state.draw();

        next_frame().await
    }

    state.finish();
}
