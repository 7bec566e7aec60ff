use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use crate::{
    can_move, decimal_digits, has_won, highest_exponent, move_to, spawn_tile, status, tile_value,
    Direction, Exponent, GameError, Grid, Status, MAX_EXPONENT,
};

/// The smallest board on which the game makes sense.
pub const MIN_BOARD_SIZE: usize = 2;

/// The largest goal exponent whose tile value still fits into a `u64`.
pub const MAX_GOAL_EXPONENT: Exponent = MAX_EXPONENT;

/// The state of one game: the grid, the goal, and the random source for
/// spawning tiles.
#[derive(Clone, Debug)]
pub struct GameState<R = StdRng> {
    grid: Grid,
    goal_exponent: Exponent,
    /// Width of the goal tile in decimal digits, for renderers to size cells.
    goal_display_digits: usize,
    /// Set once the goal tile has appeared. Winning is final, even if the
    /// goal tile is merged away afterwards.
    won: bool,
    rng: R,
}

/// What happened when playing one move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub changed: bool,
    /// Where a new tile was placed, if the move changed the board.
    pub spawned_at: Option<(usize, usize)>,
}

impl<R: Rng> GameState<R> {
    /// Start a new game on an empty `size` x `size` board with two tiles.
    pub fn new(goal_exponent: Exponent, size: usize, rng: R) -> Result<Self, GameError> {
        if size < MIN_BOARD_SIZE {
            return Err(GameError::BoardTooSmall { size });
        }
        let mut game = Self::from_grid(Grid::new(size), goal_exponent, rng)?;
        game.spawn_tile()?;
        game.spawn_tile()?;
        debug!(size, goal_exponent, "New game");
        Ok(game)
    }

    /// Continue from an existing grid, without spawning anything.
    pub fn from_grid(grid: Grid, goal_exponent: Exponent, rng: R) -> Result<Self, GameError> {
        if grid.size() < MIN_BOARD_SIZE {
            return Err(GameError::BoardTooSmall { size: grid.size() });
        }
        if goal_exponent == 0 || goal_exponent > MAX_GOAL_EXPONENT {
            return Err(GameError::GoalOutOfRange { goal_exponent });
        }
        Ok(Self {
            won: has_won(&grid, goal_exponent),
            grid,
            goal_exponent,
            goal_display_digits: decimal_digits(tile_value(goal_exponent)),
            rng,
        })
    }

    /// Slide and merge the tiles. Does not spawn a tile.
    ///
    /// Returns whether the board changed.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let changed = move_to(&mut self.grid, direction);
        self.won |= has_won(&self.grid, self.goal_exponent);
        trace!(%direction, changed, "Applied move");
        changed
    }

    /// Is there any move that would change the board? Never changes it.
    pub fn any_move_possible(&self) -> bool {
        can_move(&self.grid)
    }

    /// Place a new tile on a random empty cell.
    pub fn spawn_tile(&mut self) -> Result<(usize, usize), GameError> {
        spawn_tile(&mut self.grid, &mut self.rng)
    }

    /// Play one turn: apply the move and, if it changed the board, spawn a tile.
    pub fn play(&mut self, direction: Direction) -> Result<MoveOutcome, GameError> {
        if !self.apply_move(direction) {
            return Ok(MoveOutcome {
                changed: false,
                spawned_at: None,
            });
        }
        let spawned_at = self.spawn_tile()?;
        Ok(MoveOutcome {
            changed: true,
            spawned_at: Some(spawned_at),
        })
    }

    /// Has the goal tile been reached at any point of this game?
    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn highest_exponent(&self) -> Exponent {
        highest_exponent(&self.grid)
    }

    /// Where the game stands. `Won` and `Stuck` are never left again.
    pub fn status(&self) -> Status {
        if self.won {
            Status::Won
        } else {
            status(&self.grid, self.goal_exponent)
        }
    }
}

impl<R> GameState<R> {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// An owned copy of the grid.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    pub fn goal_exponent(&self) -> Exponent {
        self.goal_exponent
    }

    pub fn goal_display_digits(&self) -> usize {
        self.goal_display_digits
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::SPAWN_EXPONENT;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn new_game_has_two_tiles() {
        let game = GameState::new(11, 4, rng()).unwrap();
        let tiles: Vec<_> = game.grid().cells().filter(|&v| v != 0).collect();
        assert_eq!(tiles, vec![SPAWN_EXPONENT, SPAWN_EXPONENT]);
        assert_eq!(game.goal_display_digits(), 4);
        assert_eq!(game.status(), Status::Playing);
    }

    #[test]
    fn rejects_tiny_boards_and_bad_goals() {
        assert_eq!(
            GameState::new(11, 1, rng()).unwrap_err(),
            GameError::BoardTooSmall { size: 1 }
        );
        assert_eq!(
            GameState::new(0, 4, rng()).unwrap_err(),
            GameError::GoalOutOfRange { goal_exponent: 0 }
        );
        assert_eq!(
            GameState::new(64, 4, rng()).unwrap_err(),
            GameError::GoalOutOfRange { goal_exponent: 64 }
        );
        assert!(GameState::new(63, 2, rng()).is_ok());
    }

    #[test]
    fn goal_digits_are_fixed_at_construction() {
        let game = GameState::from_grid(Grid::new(4), 3, rng()).unwrap();
        assert_eq!(game.goal_display_digits(), 1);
        let game = GameState::from_grid(Grid::new(4), 17, rng()).unwrap();
        assert_eq!(game.goal_display_digits(), 6);
    }

    #[test]
    fn play_spawns_only_after_a_change() {
        let grid = Grid::from_rows(&[[1, 0, 0], [0, 0, 0], [0, 0, 0]]).unwrap();
        let mut game = GameState::from_grid(grid, 11, rng()).unwrap();

        let outcome = game.play(Direction::Left).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome {
                changed: false,
                spawned_at: None
            }
        );
        assert_eq!(game.grid().cells().filter(|&v| v != 0).count(), 1);

        let outcome = game.play(Direction::Right).unwrap();
        assert!(outcome.changed);
        let (row, col) = outcome.spawned_at.unwrap();
        assert_eq!(game.grid().get(row, col), SPAWN_EXPONENT);
        assert_eq!(game.grid().get(0, 2), 1);
        assert_eq!(game.grid().cells().filter(|&v| v != 0).count(), 2);
    }

    #[test]
    fn probing_keeps_the_visible_board() {
        let grid = Grid::from_rows(&[[0, 1], [0, 0]]).unwrap();
        let game = GameState::from_grid(grid.clone(), 11, rng()).unwrap();
        assert!(game.any_move_possible());
        assert_eq!(game.snapshot(), grid);
    }

    #[test]
    fn reaching_the_goal_wins() {
        let grid = Grid::from_rows(&[[2, 2], [0, 0]]).unwrap();
        let mut game = GameState::from_grid(grid, 3, rng()).unwrap();
        assert!(!game.has_won());
        assert!(game.play(Direction::Left).unwrap().changed);
        assert!(game.has_won());
        assert_eq!(game.highest_exponent(), 3);
        assert_eq!(game.status(), Status::Won);
    }

    #[test]
    fn winning_is_final() {
        let grid = Grid::from_rows(&[[3, 3], [0, 0]]).unwrap();
        let mut game = GameState::from_grid(grid, 3, rng()).unwrap();
        assert_eq!(game.status(), Status::Won);
        assert!(game.play(Direction::Left).unwrap().changed);
        assert_eq!(game.grid().get(0, 0), 4);
        assert!(game.has_won());
        assert_eq!(game.status(), Status::Won);
    }

    #[test]
    fn largest_tiles_stay_renderable() {
        let grid = Grid::from_rows(&[[MAX_EXPONENT, MAX_EXPONENT], [0, 0]]).unwrap();
        let mut game = GameState::from_grid(grid, 11, rng()).unwrap();
        assert!(!game.play(Direction::Left).unwrap().changed);
        assert!(game.play(Direction::Down).unwrap().changed);
        assert_eq!(game.highest_exponent(), MAX_EXPONENT);
        assert!(game.grid().to_string().contains(&(1u64 << 63).to_string()));
    }

    #[test]
    fn stuck_game() {
        let grid = Grid::from_rows(&[[1, 2], [2, 1]]).unwrap();
        let mut game = GameState::from_grid(grid, 11, rng()).unwrap();
        assert!(!game.any_move_possible());
        assert_eq!(game.status(), Status::Stuck);
        assert_eq!(
            game.spawn_tile().unwrap_err(),
            GameError::BoardFull
        );
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let play = || {
            let mut game = GameState::new(11, 4, rng()).unwrap();
            for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down]
                .into_iter()
                .cycle()
                .take(40)
            {
                if game.status() != Status::Playing {
                    break;
                }
                game.play(direction).unwrap();
            }
            game.snapshot()
        };
        assert_eq!(play(), play());
    }
}
