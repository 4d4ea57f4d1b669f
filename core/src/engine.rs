use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Active,
    Won,
    OutOfSteps,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::OutOfSteps)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Active
    }
}

/// Result of a single player move.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveResult {
    pub outcome: MoveOutcome,
    /// Cascade triggered by the move. For reverted moves the snapshots end
    /// with the swapped and the restored board.
    pub report: CascadeReport,
}

/// Plays a [`Level`]: applies moves, runs cascades and keeps score.
///
/// The level's own step budget is left alone; the engine counts down its own
/// copy of it.
#[derive(Clone, Debug)]
pub struct PlayEngine<C: ColorSource> {
    level: Level,
    colors: C,
    score: Score,
    steps_left: u32,
    state: EngineState,
}

impl<C: ColorSource> PlayEngine<C> {
    pub fn new(level: Level, colors: C) -> Self {
        let steps_left = level.available_steps();
        Self {
            level,
            colors,
            score: 0,
            steps_left,
            state: Default::default(),
        }
    }

    /// Builds the level from `config` with `colors` and starts playing it.
    pub fn from_config(config: &LevelConfig, mut colors: C) -> Result<Self> {
        let level = Level::new(config, &mut colors)?;
        Ok(Self::new(level, colors))
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn steps_left(&self) -> u32 {
        self.steps_left
    }

    pub fn board_state(&self) -> alloc::string::String {
        self.level.board_state()
    }

    pub fn hint(&self) -> Option<Hint> {
        self.level.hint()
    }

    /// Swaps two tiles and resolves whatever cascade follows.
    ///
    /// A swap that matches nothing is undone. A cascade that hits the
    /// iteration cap resets the level and settles it once more; its points
    /// still count.
    pub fn play_move(&mut self, from: Coord2, to: Coord2) -> Result<MoveResult> {
        self.check_active()?;

        if !self.level.swap(from, to) {
            log::debug!("Rejected swap {from:?} <-> {to:?}");
            return Ok(MoveResult {
                outcome: MoveOutcome::Rejected,
                report: CascadeReport::default(),
            });
        }

        let mut report = self.level.process_with_snapshots(&mut self.colors);

        if !report.has_update() {
            report.snapshots.push(self.level.board_state());
            self.level.swap(from, to);
            report.snapshots.push(self.level.board_state());
            return Ok(MoveResult {
                outcome: MoveOutcome::Reverted,
                report,
            });
        }

        if report.is_capped() {
            log::info!("Maximum iterations, resetting level");
            self.level.reset();
            self.level.process(&mut self.colors);
            report.snapshots.push(self.level.board_state());
        }

        self.score += report.score;
        if report.score > 0 {
            self.steps_left = self.steps_left.saturating_sub(1);
        }
        log::debug!(
            "Move {from:?} <-> {to:?} scored {}, total {}, {} steps left",
            report.score,
            self.score,
            self.steps_left
        );

        Ok(MoveResult {
            outcome: self.update_state(),
            report,
        })
    }

    /// Starts the level over from its initial board.
    pub fn restart(&mut self) {
        self.level.reset();
        self.score = 0;
        self.steps_left = self.level.available_steps();
        self.state = EngineState::Active;
    }

    fn update_state(&mut self) -> MoveOutcome {
        if self.score >= self.level.score_to_complete() {
            self.state = EngineState::Won;
            MoveOutcome::Won
        } else if self.steps_left == 0 {
            self.state = EngineState::OutOfSteps;
            MoveOutcome::OutOfSteps
        } else {
            MoveOutcome::Cleared
        }
    }

    fn check_active(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
