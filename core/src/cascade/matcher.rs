use crate::*;

/// Shortest run that gets popped.
pub const MIN_RUN: Coord = 3;

/// Contiguous stretch of equal colors along one line.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Run {
    color: Color,
    start: Coord,
    len: Coord,
}

impl Run {
    fn starting_at(tile: Option<Tile>, pos: Coord) -> Option<Self> {
        let tile = tile?;
        if tile.is_empty() {
            return None;
        }
        Some(Self {
            color: tile.color,
            start: pos,
            len: 1,
        })
    }
}

/// Calls `on_run` for every run of [`MIN_RUN`] or more along `axis`.
fn for_each_run(grid: &Grid, axis: Axis, mut on_run: impl FnMut(Coord, Run)) {
    let size = grid.size();
    for line in 0..size {
        let mut current: Option<Run> = None;
        for pos in 0..size {
            let tile = grid.get_on(axis, (line, pos));
            if let Some(run) = current.as_mut() {
                if tile.is_some_and(|tile| tile.matches(run.color)) {
                    run.len += 1;
                    continue;
                }
            }
            if let Some(run) = current.filter(|run| run.len >= MIN_RUN) {
                on_run(line, run);
            }
            current = Run::starting_at(tile, pos);
        }
        if let Some(run) = current.filter(|run| run.len >= MIN_RUN) {
            on_run(line, run);
        }
    }
}

/// Marks every tile that belongs to a run of 3+ along rows or columns.
///
/// Empty tiles and holes break runs. Returns whether anything was marked.
pub fn mark_runs(grid: &mut Grid) -> bool {
    let mut marked = false;
    for axis in Axis::BOTH {
        let mut runs = smallvec::SmallVec::<[(Coord, Run); 8]>::new();
        for_each_run(grid, axis, |line, run| runs.push((line, run)));

        for (line, run) in runs {
            log::trace!("{axis:?} {line}: run of {} {:?} at {}", run.len, run.color, run.start);
            for pos in run.start..run.start + run.len {
                if let Some(tile) = grid.tile_mut(axis.resolve((line, pos))) {
                    tile.marked = true;
                    marked = true;
                }
            }
        }
    }
    marked
}

/// Turns marked tiles into empty ones and clears their marks.
pub fn pop_marked(grid: &mut Grid) -> CellCount {
    let mut popped: CellCount = 0;
    for coords in grid.coords() {
        if let Some(tile) = grid.tile_mut(coords) {
            if tile.marked {
                *tile = Tile::empty();
                popped += 1;
            }
        }
    }
    popped
}

/// Whether the board holds any run of 3+, without touching it.
pub fn has_runs(grid: &Grid) -> bool {
    let mut found = false;
    for axis in Axis::BOTH {
        for_each_run(grid, axis, |_, _| found = true);
    }
    found
}
