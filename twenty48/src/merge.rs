use crate::{rotate_180, rotate_90, rotate_neg_90, Exponent, Grid, MAX_EXPONENT};

/// Slide all tiles of a row to the left and merge equal neighbours.
///
/// Tiles keep their relative order. Two equal tiles that meet combine into
/// one tile with the exponent increased by one, and a tile created by a
/// merge does not merge again in the same pass, so `[1, 1, 1]` becomes
/// `[2, 1, 0]` and `[1, 1, 2]` becomes `[2, 2, 0]`.
///
/// Tiles at [`MAX_EXPONENT`] or above never merge, they only slide.
///
/// Returns whether any tile moved or merged.
pub fn merge_row(row: &mut [Exponent]) -> bool {
    let mut changed = false;
    // The leftmost slot that does not hold a placed tile yet
    let mut next_free = 0;
    // The most recently placed tile, as long as it may still absorb a neighbour
    let mut open: Option<usize> = None;

    for col in 0..row.len() {
        let value = row[col];
        if value == 0 {
            continue;
        }
        if let Some(target) =
            open.filter(|&target| row[target] == value && value < MAX_EXPONENT)
        {
            row[target] += 1;
            row[col] = 0;
            open = None;
            changed = true;
            continue;
        }
        row[col] = 0;
        row[next_free] = value;
        open = Some(next_free);
        changed |= col != next_free;
        next_free += 1;
    }
    changed
}

/// Merge every row towards the left edge.
pub fn merge_left(grid: &mut Grid) -> bool {
    let mut changed = false;
    for row in 0..grid.size() {
        changed |= merge_row(grid.row_mut(row));
    }
    changed
}

pub fn merge_right(grid: &mut Grid) -> bool {
    rotate_180(grid);
    let changed = merge_left(grid);
    rotate_180(grid);
    changed
}

pub fn merge_up(grid: &mut Grid) -> bool {
    rotate_neg_90(grid);
    let changed = merge_left(grid);
    rotate_90(grid);
    changed
}

pub fn merge_down(grid: &mut Grid) -> bool {
    rotate_90(grid);
    let changed = merge_left(grid);
    rotate_neg_90(grid);
    changed
}
