use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    /// Cleared by a pop and waiting for refill.
    Empty,
    Red,
    Green,
    Blue,
    Orange,
    Purple,
    Yellow,
}

impl Color {
    /// Colors a refill may produce.
    pub const PALETTE: [Color; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Orange,
        Self::Purple,
        Self::Yellow,
    ];

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Board-state character, the first letter of the color name.
    pub const fn to_char(self) -> char {
        match self {
            Self::Empty => 'E',
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Orange => 'O',
            Self::Purple => 'P',
            Self::Yellow => 'Y',
        }
    }

    pub fn from_char(c: char) -> Result<Self> {
        Ok(match c {
            'E' => Self::Empty,
            'R' => Self::Red,
            'G' => Self::Green,
            'B' => Self::Blue,
            'O' => Self::Orange,
            'P' => Self::Purple,
            'Y' => Self::Yellow,
            _ => return Err(GameError::UnknownTileChar(c)),
        })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::Empty
    }
}

/// Content of a non-hole cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub color: Color,
    /// Set by a mark pass, cleared by the pop that follows it.
    pub marked: bool,
}

impl Tile {
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            marked: false,
        }
    }

    pub const fn empty() -> Self {
        Self::new(Color::Empty)
    }

    pub const fn is_empty(self) -> bool {
        self.color.is_empty()
    }

    /// Whether this tile can take part in a run of `color`.
    pub fn matches(self, color: Color) -> bool {
        !color.is_empty() && self.color == color
    }
}

impl From<Color> for Tile {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_chars_round_trip() {
        for color in Color::PALETTE {
            assert_eq!(Color::from_char(color.to_char()), Ok(color));
        }
        assert_eq!(Color::from_char('E'), Ok(Color::Empty));
        assert_eq!(Color::from_char('x'), Err(GameError::UnknownTileChar('x')));
        assert_eq!(Color::from_char('r'), Err(GameError::UnknownTileChar('r')));
    }

    #[test]
    fn empty_tiles_never_match() {
        assert!(!Tile::empty().matches(Color::Empty));
        assert!(Tile::new(Color::Red).matches(Color::Red));
        assert!(!Tile::new(Color::Red).matches(Color::Blue));
    }
}
