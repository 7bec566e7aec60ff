use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::{Exponent, GameError, Grid};

/// The exponent of a freshly spawned tile, i.e. a 2.
pub const SPAWN_EXPONENT: Exponent = 1;

/// Place a new tile on an empty cell.
///
/// The cell is chosen uniformly among all empty cells of the grid.
/// Returns its coordinates `(row, col)`, or [`GameError::BoardFull`] without
/// touching the grid if there is no empty cell.
pub fn spawn_tile<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
) -> Result<(usize, usize), GameError> {
    let empty_cells = grid.empty_cells();
    let &(row, col) = empty_cells.choose(rng).ok_or(GameError::BoardFull)?;
    grid.set(row, col, SPAWN_EXPONENT);
    trace!(row, col, "Spawned tile");
    Ok((row, col))
}
