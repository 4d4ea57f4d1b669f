use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use super::*;
use crate::*;

/// Upper bound on pop-and-refill iterations of a single cascade.
pub const MAX_ITERATIONS: u32 = 50;

/// How a cascade stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CascadeEnd {
    /// A scan found nothing left to pop.
    Stable,
    /// [`MAX_ITERATIONS`] was reached while matches kept appearing.
    Capped,
}

impl Default for CascadeEnd {
    fn default() -> Self {
        Self::Stable
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeReport {
    pub iterations: u32,
    pub score: Score,
    /// Board after each pop followed by the board after its refill.
    pub snapshots: Vec<String>,
    pub end: CascadeEnd,
}

impl CascadeReport {
    pub const fn is_capped(&self) -> bool {
        matches!(self.end, CascadeEnd::Capped)
    }

    pub const fn has_update(&self) -> bool {
        self.iterations > 0
    }
}

/// Runs one scan and, if it found anything, one pop and refill.
fn step<C: ColorSource + ?Sized>(
    grid: &mut Grid,
    colors: &mut C,
    snapshots: Option<&mut Vec<String>>,
) -> Option<Sweep> {
    if !mark_runs(grid) {
        return None;
    }
    pop_marked(grid);

    match snapshots {
        Some(snapshots) => {
            snapshots.push(grid.to_state());
            let sweep = settle(grid, colors);
            snapshots.push(grid.to_state());
            Some(sweep)
        }
        None => Some(settle(grid, colors)),
    }
}

fn run<C: ColorSource + ?Sized>(
    grid: &mut Grid,
    colors: &mut C,
    mut snapshots: Option<&mut Vec<String>>,
) -> (u32, Score, CascadeEnd) {
    let mut score: Score = 0;
    for iteration in 0..MAX_ITERATIONS {
        match step(grid, colors, snapshots.as_deref_mut()) {
            Some(sweep) => score += sweep.score,
            None => {
                log::debug!("Cascade stable after {iteration} iterations, score {score}");
                return (iteration, score, CascadeEnd::Stable);
            }
        }
    }

    log::warn!("Cascade capped at {MAX_ITERATIONS} iterations");
    (MAX_ITERATIONS, score, CascadeEnd::Capped)
}

/// Resolves matches until the board is stable or the cap is hit.
///
/// Returns the number of iterations that popped something; a result equal to
/// [`MAX_ITERATIONS`] means the cascade was capped.
pub fn process<C: ColorSource + ?Sized>(grid: &mut Grid, colors: &mut C) -> u32 {
    run(grid, colors, None).0
}

/// Same as [`process`], also keeping the score and two snapshots per iteration.
pub fn process_with_snapshots<C: ColorSource + ?Sized>(
    grid: &mut Grid,
    colors: &mut C,
) -> CascadeReport {
    let mut snapshots = Vec::new();
    let (iterations, score, end) = run(grid, colors, Some(&mut snapshots));
    CascadeReport {
        iterations,
        score,
        snapshots,
        end,
    }
}
