use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board size and positions.
pub type Coord = u8;

/// Count type used for cleared-cell and total-cell counts.
pub type CellCount = u16;

/// Points awarded by cascades.
pub type Score = u64;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Direction a line-based algorithm walks the board in.
///
/// Algorithms are written once in terms of `(line, position)` pairs; the axis
/// decides whether a line is a row or a column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Rows,
    Columns,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Rows, Axis::Columns];

    /// Maps a `(line, position)` pair on this axis to board coordinates.
    pub const fn resolve(self, (line, pos): Coord2) -> Coord2 {
        match self {
            Self::Rows => (line, pos),
            Self::Columns => (pos, line),
        }
    }
}

/// Manhattan distance between two coordinates.
pub const fn manhattan((ai, aj): Coord2, (bi, bj): Coord2) -> u16 {
    ai.abs_diff(bi) as u16 + aj.abs_diff(bj) as u16
}

/// A requested exchange of two cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord2,
    pub to: Coord2,
}

impl Move {
    pub const fn new(from: Coord2, to: Coord2) -> Self {
        Self { from, to }
    }

    pub const fn is_adjacent(&self) -> bool {
        manhattan(self.from, self.to) == 1
    }
}
