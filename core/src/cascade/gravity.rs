use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of one gravity pass over the whole board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sweep {
    /// Emptied cells that were refilled.
    pub refilled: CellCount,
    pub score: Score,
}

/// Points for clearing `emptied` cells in a single pass: `(e / 3) * e * 60`.
pub const fn sweep_score(emptied: CellCount) -> Score {
    let e = emptied as Score;
    (e / 3) * e * 60
}

/// Lets surviving tiles fall toward row 0 and refills the gaps behind them.
///
/// Every column is compacted over its non-hole cells only: survivors keep
/// their order and slide toward the first row, empty tiles collect at the
/// last rows and are replaced by `colors.next_color()` in row order. Holes
/// are never written.
pub fn settle<C: ColorSource + ?Sized>(grid: &mut Grid, colors: &mut C) -> Sweep {
    let size = grid.size();
    let mut refilled: CellCount = 0;
    let mut slots: Vec<Coord> = Vec::with_capacity(size.into());
    let mut column: Vec<Tile> = Vec::with_capacity(size.into());

    for line in 0..size {
        slots.clear();
        column.clear();
        for pos in 0..size {
            if let Some(tile) = grid.get_on(Axis::Columns, (line, pos)) {
                slots.push(pos);
                column.push(tile);
            }
        }

        let emptied = column.iter().filter(|tile| tile.is_empty()).count();
        if emptied == 0 {
            continue;
        }
        log::trace!("column {line}: {emptied} emptied of {}", column.len());

        // stable, so survivors keep their order
        column.sort_by_key(|tile| tile.is_empty());
        let survivors = column.len() - emptied;
        for tile in column.iter_mut().skip(survivors) {
            *tile = Tile::new(colors.next_color());
        }
        for (&pos, &tile) in slots.iter().zip(column.iter()) {
            grid.set_on(Axis::Columns, (line, pos), tile);
        }

        // at most size * size cells per pass
        refilled += emptied as CellCount;
    }

    Sweep {
        refilled,
        score: sweep_score(refilled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_rewards_bigger_clears() {
        assert_eq!(sweep_score(0), 0);
        assert_eq!(sweep_score(2), 0);
        assert_eq!(sweep_score(3), 180);
        assert_eq!(sweep_score(5), 300);
        assert_eq!(sweep_score(6), 720);
        assert_eq!(sweep_score(21), 8820);
    }

    #[test]
    fn refills_every_empty_cell_of_holed_board() {
        let mut grid = Grid::parse_state("xEEEx;EEEEE;EEEEE;EEEEE;xEEEx").unwrap();
        let mut colors = RandomColors::new(3);

        let sweep = settle(&mut grid, &mut colors);

        assert_eq!(sweep.refilled, 21);
        assert_eq!(sweep.score, 8820);
        assert_eq!(grid.count_color(Color::Empty), 0);
        assert_eq!(grid.holes().count(), 4);
        for hole in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert!(grid.is_hole(hole));
        }
    }

    #[test]
    fn survivors_fall_ahead_of_refills() {
        let mut grid = Grid::parse_state("RGB;EEO;EYE").unwrap();
        let mut colors = CyclingColors::new([Color::Purple]);

        let sweep = settle(&mut grid, &mut colors);

        assert_eq!(sweep.refilled, 4);
        assert_eq!(sweep.score, 240);
        assert_eq!(grid.to_state(), "RGB;PYO;PPP");
    }

    #[test]
    fn holes_stay_put_while_tiles_pass_over_them() {
        let mut grid = Grid::parse_state("EGB;xEO;RYP").unwrap();
        let mut colors = CyclingColors::new([Color::Yellow, Color::Orange]);

        settle(&mut grid, &mut colors);

        assert_eq!(grid.to_state(), "RGB;xYO;YOP");
    }

    #[test]
    fn full_board_is_left_alone() {
        let state = "xBGPx;BGPRO;GPROB;PROBG;xGRPx";
        let mut grid = Grid::parse_state(state).unwrap();

        let sweep = settle(&mut grid, &mut RandomColors::new(0));

        assert_eq!(sweep, Sweep::default());
        assert_eq!(grid.to_state(), state);
    }
}
