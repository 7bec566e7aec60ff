use crate::{merge_down, merge_left, merge_right, merge_up, Direction, Grid};

/// Apply a move to the grid in place.
///
/// Returns whether the grid changed. A move that changes nothing leaves
/// the grid exactly as it was.
pub fn move_to(grid: &mut Grid, direction: Direction) -> bool {
    match direction {
        Direction::Up => merge_up(grid),
        Direction::Down => merge_down(grid),
        Direction::Left => merge_left(grid),
        Direction::Right => merge_right(grid),
    }
}

/// Would this move change the grid?
///
/// Works on a copy, the grid itself is never touched.
pub fn would_change(grid: &Grid, direction: Direction) -> bool {
    let mut probe = grid.clone();
    move_to(&mut probe, direction)
}

/// Is there any move that changes the grid?
///
/// Directions are probed in the order of [`Direction::ALL`], stopping at the
/// first one that would change something. The grid is never touched.
pub fn can_move(grid: &Grid) -> bool {
    Direction::ALL
        .into_iter()
        .any(|direction| would_change(grid, direction))
}
