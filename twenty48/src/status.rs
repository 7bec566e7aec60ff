use crate::{Exponent, Grid};

/// Where a game stands.
///
/// `Won` and `Stuck` are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Playing,
    Won,
    Stuck,
}

/// Is the goal tile anywhere on the grid?
pub fn has_won(grid: &Grid, goal_exponent: Exponent) -> bool {
    grid.cells().any(|value| value == goal_exponent)
}

/// The largest exponent on the grid, `0` if it is empty.
pub fn highest_exponent(grid: &Grid) -> Exponent {
    grid.cells().max().unwrap_or(0)
}

/// The number shown on a tile, `0` for an empty cell.
///
/// Panics if the value does not fit into a `u64`.
pub fn tile_value(exponent: Exponent) -> u64 {
    if exponent == 0 {
        0
    } else {
        1u64.checked_shl(u32::from(exponent))
            .unwrap_or_else(|| panic!("tile_value called with {}", exponent))
    }
}

/// Classify a single grid. Reaching the goal wins even if no move is left.
///
/// This only looks at the grid as it is now; [`GameState::status`](crate::GameState::status)
/// additionally remembers a win for the rest of the game.
pub fn status(grid: &Grid, goal_exponent: Exponent) -> Status {
    if has_won(grid, goal_exponent) {
        Status::Won
    } else if !crate::can_move(grid) {
        Status::Stuck
    } else {
        Status::Playing
    }
}
