use crate::Exponent;

/// The error type for constructing a game and for operations whose
/// preconditions the caller violated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    BoardTooSmall { size: usize },
    GoalOutOfRange { goal_exponent: Exponent },
    NotSquare { row: usize, len: usize, size: usize },
    ExponentOutOfRange { row: usize, col: usize, exponent: Exponent },
    BoardFull,
}

impl std::error::Error for GameError {}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::BoardTooSmall { size } => {
                write!(f, "A board must be at least 2x2, but the requested size was {}", size)
            }
            GameError::GoalOutOfRange { goal_exponent } => write!(
                f,
                "The goal exponent must be between 1 and 63, but was {}",
                goal_exponent
            ),
            GameError::NotSquare { row, len, size } => write!(
                f,
                "Row {} has {} cells, but the grid has {} rows",
                row, len, size
            ),
            GameError::ExponentOutOfRange { row, col, exponent } => write!(
                f,
                "Cell ({}, {}) holds exponent {}, but the largest allowed is {}",
                row,
                col,
                exponent,
                crate::MAX_EXPONENT
            ),
            GameError::BoardFull => write!(f, "Tried to spawn a tile on a board without empty cells"),
        }
    }
}
