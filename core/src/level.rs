use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fresh fills tried before giving up on a board that never settles.
pub const MAX_FILL_ATTEMPTS: u32 = 8;

/// Everything needed to build a [`Level`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub size: Coord,
    pub walls: Vec<Coord2>,
    pub score_to_complete: Score,
    pub available_steps: u32,
}

impl LevelConfig {
    pub fn new(
        size: Coord,
        walls: Vec<Coord2>,
        score_to_complete: Score,
        available_steps: u32,
    ) -> Self {
        Self {
            size,
            walls,
            score_to_complete,
            available_steps,
        }
    }

    /// Same as [`LevelConfig::new`] with walls given as a coordinate template.
    pub fn from_template(
        size: Coord,
        walls: &str,
        score_to_complete: Score,
        available_steps: u32,
    ) -> Result<Self> {
        Ok(Self::new(
            size,
            parse_coords(walls)?,
            score_to_complete,
            available_steps,
        ))
    }

    /// 8x8 board with the corners cut off, 10000 points in 20 steps.
    pub fn standard() -> Self {
        Self::new(
            8,
            alloc::vec![
                (0, 0),
                (1, 0),
                (6, 0),
                (7, 0),
                (0, 7),
                (1, 7),
                (6, 7),
                (7, 7),
            ],
            10_000,
            20,
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.size < 2 {
            return Err(GameError::BoardTooSmall(self.size));
        }
        if self.score_to_complete == 0 {
            return Err(GameError::NoScoreTarget);
        }
        if self.available_steps == 0 {
            return Err(GameError::NoSteps);
        }
        for &coords in &self.walls {
            if coords.0 >= self.size || coords.1 >= self.size {
                return Err(GameError::CoordsOutOfRange {
                    coords,
                    size: self.size,
                });
            }
        }
        Ok(())
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// A board plus the goals it is played for.
///
/// The snapshot in `initial_state` is taken once, after the first fill has
/// been cascaded to a stable board, and is what [`Level::reset`] goes back to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LevelData")]
pub struct Level {
    grid: Grid,
    score_to_complete: Score,
    available_steps: u32,
    walls: BTreeSet<Coord2>,
    initial_state: Grid,
}

/// Unchecked serde form of [`Level`].
#[derive(Deserialize)]
struct LevelData {
    grid: Grid,
    score_to_complete: Score,
    available_steps: u32,
    walls: BTreeSet<Coord2>,
    initial_state: Grid,
}

impl TryFrom<LevelData> for Level {
    type Error = GameError;

    /// Walls must be exactly the holes of both boards, and both boards must
    /// have the same size.
    fn try_from(data: LevelData) -> Result<Self> {
        let config = LevelConfig::new(
            data.grid.size(),
            data.walls.iter().copied().collect(),
            data.score_to_complete,
            data.available_steps,
        );
        config.validate()?;

        if data.initial_state.size() != data.grid.size() {
            return Err(GameError::InvalidBoardShape);
        }
        for grid in [&data.grid, &data.initial_state] {
            if !grid.holes().eq(data.walls.iter().copied()) {
                return Err(GameError::WallMismatch);
            }
        }

        Ok(Self {
            grid: data.grid,
            score_to_complete: data.score_to_complete,
            available_steps: data.available_steps,
            walls: data.walls,
            initial_state: data.initial_state,
        })
    }
}

impl Level {
    /// Places the walls, fills the rest from `colors` and settles the board.
    pub fn new<C: ColorSource + ?Sized>(config: &LevelConfig, colors: &mut C) -> Result<Self> {
        config.validate()?;

        let mut grid = Grid::with_holes(config.size, &config.walls)?;
        let mut attempt = 0;
        loop {
            attempt += 1;
            fill(&mut grid, colors);
            let iterations = process(&mut grid, colors);
            if iterations < MAX_ITERATIONS {
                log::debug!("Settled new board after {iterations} iterations");
                break;
            }
            if attempt >= MAX_FILL_ATTEMPTS {
                log::warn!("Board did not settle in {attempt} fills");
                return Err(GameError::UnstableLevel);
            }
            log::warn!("Fill {attempt} did not settle, refilling");
        }

        let level = Self {
            initial_state: grid.clone(),
            grid,
            score_to_complete: config.score_to_complete,
            available_steps: config.available_steps,
            walls: config.walls.iter().copied().collect(),
        };
        log::info!("Created level:\n{}", level.initial_state);
        Ok(level)
    }

    /// Rebuilds a level from a board-state string; `x` cells become walls.
    ///
    /// The board is taken as is, runs included, and becomes the reset point.
    pub fn from_state(state: &str, score_to_complete: Score, available_steps: u32) -> Result<Self> {
        let grid = Grid::parse_state(state)?;
        let config = LevelConfig::new(
            grid.size(),
            grid.holes().collect(),
            score_to_complete,
            available_steps,
        );
        config.validate()?;

        Ok(Self {
            initial_state: grid.clone(),
            grid,
            score_to_complete,
            available_steps,
            walls: config.walls.into_iter().collect(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn size(&self) -> Coord {
        self.grid.size()
    }

    pub fn score_to_complete(&self) -> Score {
        self.score_to_complete
    }

    pub fn available_steps(&self) -> u32 {
        self.available_steps
    }

    pub fn walls(&self) -> &BTreeSet<Coord2> {
        &self.walls
    }

    pub fn initial_state(&self) -> String {
        self.initial_state.to_state()
    }

    /// Current board-state string.
    pub fn board_state(&self) -> String {
        self.grid.to_state()
    }

    /// Exchanges two adjacent non-wall tiles; see [`Grid::swap`].
    pub fn swap(&mut self, a: Coord2, b: Coord2) -> bool {
        self.grid.swap(a, b)
    }

    pub fn process<C: ColorSource + ?Sized>(&mut self, colors: &mut C) -> u32 {
        process(&mut self.grid, colors)
    }

    pub fn process_with_snapshots<C: ColorSource + ?Sized>(
        &mut self,
        colors: &mut C,
    ) -> CascadeReport {
        process_with_snapshots(&mut self.grid, colors)
    }

    pub fn find_hint(&self) -> Vec<Coord2> {
        find_hint(&self.grid)
    }

    pub fn hint(&self) -> Option<Hint> {
        hint_for(&self.grid)
    }

    /// Puts the board back to the snapshot taken at creation.
    pub fn reset(&mut self) {
        self.grid.clone_from(&self.initial_state);
    }
}

/// Puts a fresh color on every non-wall cell.
fn fill<C: ColorSource + ?Sized>(grid: &mut Grid, colors: &mut C) {
    for coords in grid.coords() {
        if !grid.is_hole(coords) {
            grid.set(coords, Tile::new(colors.next_color()));
        }
    }
}

/// Builds a level with walls given as a coordinate template.
pub fn new_level<C: ColorSource + ?Sized>(
    size: Coord,
    walls: &str,
    score_to_complete: Score,
    available_steps: u32,
    colors: &mut C,
) -> Result<Level> {
    let config = LevelConfig::from_template(size, walls, score_to_complete, available_steps)?;
    Level::new(&config, colors)
}
