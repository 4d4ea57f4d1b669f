#![no_std]

extern crate alloc;

pub use cascade::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use hint::*;
pub use level::*;
pub use template::*;
pub use tile::*;
pub use types::*;

mod cascade;
mod engine;
mod error;
mod generator;
mod grid;
mod hint;
mod level;
mod template;
mod tile;
mod types;

/// Outcome of a player move in [`PlayEngine::play_move`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Not adjacent, or touching a wall; nothing changed.
    Rejected,
    /// Valid swap without a match, swapped back.
    Reverted,
    Cleared,
    Won,
    OutOfSteps,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            Rejected => false,
            Reverted => false,
            Cleared => true,
            Won => true,
            OutOfSteps => true,
        }
    }
}
