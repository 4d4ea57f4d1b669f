use alloc::string::String;
use thiserror::Error;

use crate::{Coord, Coord2};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size {0} is too small, at least 2 is required")]
    BoardTooSmall(Coord),
    #[error("Malformed coordinate entry {0:?}, expected \"i,j\"")]
    MalformedCoords(String),
    #[error("Coordinates {coords:?} are outside of a {size}x{size} board")]
    CoordsOutOfRange { coords: Coord2, size: Coord },
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Walls do not match the holes of the board")]
    WallMismatch,
    #[error("Unknown tile character {0:?}")]
    UnknownTileChar(char),
    #[error("Available steps must be positive")]
    NoSteps,
    #[error("Score to complete must be positive")]
    NoScoreTarget,
    #[error("Could not generate a stable board")]
    UnstableLevel,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
