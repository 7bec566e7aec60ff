pub use direction::*;
pub use errors::*;
pub use game::*;
pub use grid::*;
pub use merge::*;
pub use moves::*;
pub use spawn::*;
pub use status::*;
pub use transform::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod direction;
mod errors;
mod game;
mod grid;
mod merge;
mod moves;
mod spawn;
mod status;
mod transform;
mod visualization;
