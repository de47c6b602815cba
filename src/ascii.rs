use crate::agent::Agent;
use crate::direction::Direction;
use crate::grid::MazeGrid;

/// Render the maze as text, one `+---+` box per cell.
///
/// Passed cells are marked with `.`, the agent with `@`.
/// The result has `2 * rows + 1` lines of `4 * cols + 1` characters.
pub fn render_ascii(grid: &MazeGrid, agent: Option<&Agent>) -> String {
    let mut out = String::new();
    let agent_pos = agent.map(|a| a.position());

    for row in 0..grid.rows() {
        out.push('+');
        for col in 0..grid.cols() {
            out.push_str(if wall(grid, row, col, Direction::Top) { "---" } else { "   " });
            out.push('+');
        }
        out.push('\n');

        for col in 0..grid.cols() {
            out.push(if wall(grid, row, col, Direction::Left) { '|' } else { ' ' });
            let here = agent_pos.map_or(false, |p| p.row == row && p.col == col);
            let interior = if here {
                " @ "
            } else if grid.is_passed(row, col).unwrap_or(false) {
                " . "
            } else {
                "   "
            };
            out.push_str(interior);
        }
        let last = grid.cols() - 1;
        out.push(if wall(grid, row, last, Direction::Right) { '|' } else { ' ' });
        out.push('\n');
    }

    let last_row = grid.rows() - 1;
    out.push('+');
    for col in 0..grid.cols() {
        out.push_str(if wall(grid, last_row, col, Direction::Bottom) { "---" } else { "   " });
        out.push('+');
    }
    out.push('\n');

    out
}

fn wall(grid: &MazeGrid, row: i32, col: i32, dir: Direction) -> bool {
    grid.has_wall(row, col, dir).unwrap_or(true)
}
