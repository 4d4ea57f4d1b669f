//! Hint search: the first swap that would immediately produce a run.
//!
//! Two families of local shapes are checked, each as a fixed rule table
//! evaluated against the tiles of a small window:
//!
//! * inline: a 4-wide window on one line, `X X _ X` or `X _ X X`;
//! * rectangle: a 3-wide window over two neighboring lines where one line
//!   holds `X` in two columns and the other holds `X` in the third.
//!
//! Rows are searched before columns, inline shapes before rectangles, lines
//! top to bottom and windows left to right. The first hit wins, so the same
//! board always yields the same hint.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintKind {
    Inline,
    Rectangle,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub kind: HintKind,
    pub axis: Axis,
    /// Every cell of the matched window, in board coordinates.
    pub cells: SmallVec<[Coord2; 6]>,
    /// Exchange that completes the run.
    pub swap: Move,
}

impl Hint {
    pub fn template(&self) -> alloc::string::String {
        format_coords(&self.cells)
    }
}

const INLINE_WIDTH: Coord = 4;
const RECT_WIDTH: Coord = 3;

/// Window positions that must hold `X`, and the two positions to swap.
struct InlineRule {
    color_at: [Coord; 3],
    swap: (Coord, Coord),
}

const INLINE_RULES: [InlineRule; 2] = [
    // X X _ X
    InlineRule {
        color_at: [0, 1, 3],
        swap: (2, 3),
    },
    // X _ X X
    InlineRule {
        color_at: [0, 2, 3],
        swap: (0, 1),
    },
];

/// `(line offset, position offset)` inside a rectangle window.
type Offset = (Coord, Coord);

struct RectRule {
    color_at: [Offset; 3],
    swap: (Offset, Offset),
}

const RECT_RULES: [RectRule; 6] = [
    // X X _
    // _ _ X
    RectRule {
        color_at: [(0, 0), (0, 1), (1, 2)],
        swap: ((0, 2), (1, 2)),
    },
    // X _ X
    // _ X _
    RectRule {
        color_at: [(0, 0), (0, 2), (1, 1)],
        swap: ((0, 1), (1, 1)),
    },
    // _ X X
    // X _ _
    RectRule {
        color_at: [(0, 1), (0, 2), (1, 0)],
        swap: ((0, 0), (1, 0)),
    },
    // _ _ X
    // X X _
    RectRule {
        color_at: [(1, 0), (1, 1), (0, 2)],
        swap: ((1, 2), (0, 2)),
    },
    // _ X _
    // X _ X
    RectRule {
        color_at: [(1, 0), (1, 2), (0, 1)],
        swap: ((1, 1), (0, 1)),
    },
    // X _ _
    // _ X X
    RectRule {
        color_at: [(1, 1), (1, 2), (0, 0)],
        swap: ((1, 0), (0, 0)),
    },
];

/// Tiles of a window, or `None` if it reaches a hole or off the board.
fn window<const N: usize>(grid: &Grid, axis: Axis, cells: [Coord2; N]) -> Option<[Tile; N]> {
    let mut tiles = [Tile::empty(); N];
    for (tile, coords) in tiles.iter_mut().zip(cells) {
        *tile = grid.get_on(axis, coords)?;
    }
    Some(tiles)
}

fn inline_hint(grid: &Grid, axis: Axis) -> Option<Hint> {
    let size = grid.size();
    if size < INLINE_WIDTH {
        return None;
    }

    for line in 0..size {
        for start in 0..=size - INLINE_WIDTH {
            let cells: [Coord2; 4] = core::array::from_fn(|k| (line, start + k as Coord));
            let Some(tiles) = window(grid, axis, cells) else {
                continue;
            };

            let color = tiles[0].color;
            if color.is_empty() {
                continue;
            }

            for rule in &INLINE_RULES {
                if rule
                    .color_at
                    .iter()
                    .all(|&k| tiles[usize::from(k)].matches(color))
                {
                    let (a, b) = rule.swap;
                    return Some(Hint {
                        kind: HintKind::Inline,
                        axis,
                        cells: cells.iter().map(|&c| axis.resolve(c)).collect(),
                        swap: Move::new(
                            axis.resolve(cells[usize::from(a)]),
                            axis.resolve(cells[usize::from(b)]),
                        ),
                    });
                }
            }
        }
    }
    None
}

fn rectangle_hint(grid: &Grid, axis: Axis) -> Option<Hint> {
    let size = grid.size();
    if size < RECT_WIDTH {
        return None;
    }

    for line in 0..size - 1 {
        for start in 0..=size - RECT_WIDTH {
            let at = |(dl, dp): Offset| (line + dl, start + dp);
            // column by column, upper line first
            let cells: [Coord2; 6] = core::array::from_fn(|k| at(((k % 2) as Coord, (k / 2) as Coord)));
            let Some(tiles) = window(grid, axis, cells) else {
                continue;
            };
            let tile_at = |(dl, dp): Offset| tiles[usize::from(dp) * 2 + usize::from(dl)];

            for color in [tile_at((0, 0)).color, tile_at((1, 0)).color] {
                if color.is_empty() {
                    continue;
                }
                for rule in &RECT_RULES {
                    if rule.color_at.iter().all(|&o| tile_at(o).matches(color)) {
                        log::trace!("{axis:?} rectangle at {:?} for {color:?}", at((0, 0)));
                        let (a, b) = rule.swap;
                        return Some(Hint {
                            kind: HintKind::Rectangle,
                            axis,
                            cells: cells.iter().map(|&c| axis.resolve(c)).collect(),
                            swap: Move::new(axis.resolve(at(a)), axis.resolve(at(b))),
                        });
                    }
                }
            }
        }
    }
    None
}

/// Finds the first hint on the board, if any.
pub fn hint_for(grid: &Grid) -> Option<Hint> {
    Axis::BOTH.into_iter().find_map(|axis| {
        log::debug!("Looking for moves along {axis:?}");
        inline_hint(grid, axis).or_else(|| rectangle_hint(grid, axis))
    })
}

/// Cells of the first hint on the board, empty if there is none.
pub fn find_hint(grid: &Grid) -> Vec<Coord2> {
    hint_for(grid)
        .map(|hint| hint.cells.to_vec())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap_makes_run(grid: &Grid, hint: &Hint) -> bool {
        let mut grid = grid.clone();
        grid.swap(hint.swap.from, hint.swap.to) && has_runs(&grid)
    }

    #[test]
    fn inline_hint_is_preferred_over_rectangles() {
        let grid = Grid::parse_state("xRGBx;BBRBG;GOPYR;OYROP;xPGYx").unwrap();

        let hint = hint_for(&grid).unwrap();

        assert_eq!(hint.kind, HintKind::Inline);
        assert_eq!(hint.axis, Axis::Rows);
        assert_eq!(find_hint(&grid), [(1, 0), (1, 1), (1, 2), (1, 3)]);
        assert_eq!(hint.template(), "1,0;1,1;1,2;1,3");
        assert_eq!(hint.swap, Move::new((1, 2), (1, 3)));
        assert!(swap_makes_run(&grid, &hint));
    }

    #[test]
    fn rectangle_hint_covers_whole_window() {
        let grid = Grid::parse_state("RRG;BOR;GYB").unwrap();

        let hint = hint_for(&grid).unwrap();

        assert_eq!(hint.kind, HintKind::Rectangle);
        assert_eq!(
            hint.cells.as_slice(),
            [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]
        );
        assert_eq!(hint.swap, Move::new((0, 2), (1, 2)));
        assert!(swap_makes_run(&grid, &hint));
    }

    #[test]
    fn columns_are_searched_after_rows() {
        let grid = Grid::parse_state("RBG;ROY;GRB").unwrap();

        let hint = hint_for(&grid).unwrap();

        assert_eq!(hint.axis, Axis::Columns);
        assert_eq!(hint.kind, HintKind::Rectangle);
        assert_eq!(
            hint.cells.as_slice(),
            [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]
        );
        assert_eq!(hint.swap, Move::new((2, 0), (2, 1)));
        assert!(swap_makes_run(&grid, &hint));
    }

    #[test]
    fn inline_gap_on_the_left_swaps_first_pair() {
        let grid = Grid::parse_state("GYGG;BOPR;YRBO;OBYP").unwrap();

        let hint = hint_for(&grid).unwrap();

        assert_eq!(hint.kind, HintKind::Inline);
        assert_eq!(hint.swap, Move::new((0, 0), (0, 1)));
        assert!(swap_makes_run(&grid, &hint));
    }

    #[test]
    fn no_hint_on_locked_board() {
        let grid = Grid::parse_state("RGB;GBR;BRG").unwrap();

        assert_eq!(hint_for(&grid), None);
        assert!(find_hint(&grid).is_empty());
    }

    #[test]
    fn windows_with_holes_are_skipped() {
        let grid = Grid::parse_state("RRxR;GBOY;YOGB;BYRO").unwrap();

        assert!(find_hint(&grid).is_empty());
    }

    #[test]
    fn search_is_repeatable() {
        let grid = Grid::parse_state("RBGO;ROYP;GRBY;YPOB").unwrap();

        let first = hint_for(&grid);

        assert!(first.is_some());
        assert_eq!(hint_for(&grid), first);
    }
}
