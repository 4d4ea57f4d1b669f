use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square board of tiles. `None` cells are permanent holes.
///
/// Serialized as its board-state string, so anything read back goes through
/// [`Grid::parse_state`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Grid {
    cells: Array2<Option<Tile>>,
}

impl Grid {
    /// Board of empty tiles without holes.
    pub fn new(size: Coord) -> Self {
        let size = usize::from(size);
        Self {
            cells: Array2::from_elem((size, size), Some(Tile::empty())),
        }
    }

    pub fn with_holes(size: Coord, holes: &[Coord2]) -> Result<Self> {
        let mut grid = Self::new(size);
        for &coords in holes {
            let coords = grid.validate_coords(coords)?;
            grid.cells[coords.to_nd_index()] = None;
        }
        Ok(grid)
    }

    pub fn size(&self) -> Coord {
        // constructors only take a `Coord` sized board
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn contains(&self, (i, j): Coord2) -> bool {
        let size = self.size();
        i < size && j < size
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::CoordsOutOfRange {
                coords,
                size: self.size(),
            })
        }
    }

    /// Tile at `coords`, `None` for holes and for anything off the board.
    pub fn get(&self, coords: Coord2) -> Option<Tile> {
        if self.contains(coords) {
            self.cells[coords.to_nd_index()]
        } else {
            None
        }
    }

    /// Writes a tile, refusing holes and coordinates off the board.
    pub fn set(&mut self, coords: Coord2, tile: Tile) -> bool {
        match self.tile_mut(coords) {
            Some(slot) => {
                *slot = tile;
                true
            }
            None => false,
        }
    }

    pub fn get_on(&self, axis: Axis, coords: Coord2) -> Option<Tile> {
        self.get(axis.resolve(coords))
    }

    pub fn set_on(&mut self, axis: Axis, coords: Coord2, tile: Tile) -> bool {
        self.set(axis.resolve(coords), tile)
    }

    pub(crate) fn tile_mut(&mut self, coords: Coord2) -> Option<&mut Tile> {
        if self.contains(coords) {
            self.cells[coords.to_nd_index()].as_mut()
        } else {
            None
        }
    }

    pub fn is_hole(&self, coords: Coord2) -> bool {
        self.contains(coords) && self.cells[coords.to_nd_index()].is_none()
    }

    pub fn holes(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.coords().filter(|&coords| self.is_hole(coords))
    }

    /// All board coordinates, row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let size = self.size();
        (0..size).flat_map(move |i| (0..size).map(move |j| (i, j)))
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn count_color(&self, color: Color) -> CellCount {
        self.tiles()
            .filter(|tile| tile.color == color)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Exchanges two 4-adjacent non-hole tiles.
    ///
    /// Returns `false` and leaves the board untouched if the cells are not
    /// adjacent, or either is a hole or off the board.
    pub fn swap(&mut self, a: Coord2, b: Coord2) -> bool {
        if !Move::new(a, b).is_adjacent() {
            return false;
        }

        let (Some(tile_a), Some(tile_b)) = (self.get(a), self.get(b)) else {
            return false;
        };

        self.set(a, tile_b);
        self.set(b, tile_a);
        true
    }

    /// Board-state string read along `axis`.
    pub fn to_state_on(&self, axis: Axis) -> String {
        let size = self.size();
        let mut out = String::with_capacity(usize::from(self.total_cells()) + usize::from(size));
        for line in 0..size {
            if line > 0 {
                out.push(';');
            }
            for pos in 0..size {
                out.push(cell_char(self.get_on(axis, (line, pos))));
            }
        }
        out
    }

    /// Board-state string: one char per cell, `x` for holes, rows joined by `;`.
    pub fn to_state(&self) -> String {
        self.to_state_on(Axis::Rows)
    }

    pub fn parse_state(state: &str) -> Result<Self> {
        let rows: Vec<&str> = state.split(';').collect();
        let size = rows.len();

        if state.is_empty() || size > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        if rows.iter().any(|row| row.chars().count() != size) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut cells = Array2::from_elem((size, size), None);
        for (i, row) in rows.iter().enumerate() {
            for (j, c) in row.chars().enumerate() {
                cells[[i, j]] = match c {
                    'x' => None,
                    c => Some(Tile::new(Color::from_char(c)?)),
                };
            }
        }

        Ok(Self { cells })
    }
}

fn cell_char(cell: Option<Tile>) -> char {
    match cell {
        Some(tile) => tile.color.to_char(),
        None => 'x',
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_state())
    }
}

impl FromStr for Grid {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_state(s)
    }
}

impl TryFrom<String> for Grid {
    type Error = GameError;

    fn try_from(state: String) -> Result<Self> {
        Self::parse_state(&state)
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> Self {
        grid.to_state()
    }
}
