//! Invariants that must hold on any board, checked over generated boards.

use cascade_core::*;
use proptest::prelude::*;

const CELL_CHARS: [char; 6] = ['R', 'G', 'B', 'O', 'P', 'Y'];

/// Square board-state strings, sizes 3 to 7, with an occasional wall.
fn board_state() -> impl Strategy<Value = String> {
    (3usize..=7).prop_flat_map(|size| {
        let cell = prop_oneof![
            8 => prop::sample::select(&CELL_CHARS[..]),
            1 => Just('x'),
        ];
        prop::collection::vec(cell, size * size).prop_map(move |cells| {
            cells
                .chunks(size)
                .map(|row| row.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join(";")
        })
    })
}

fn holes(grid: &Grid) -> Vec<Coord2> {
    grid.holes().collect()
}

proptest! {
    #[test]
    fn board_state_survives_parsing(state in board_state()) {
        let grid = Grid::parse_state(&state).unwrap();

        prop_assert_eq!(grid.to_state(), state.clone());
        prop_assert_eq!(state.parse::<Grid>().unwrap(), grid);
    }

    #[test]
    fn swapping_twice_restores_board(
        state in board_state(),
        i in 0u8..7,
        j in 0u8..7,
        horizontal in any::<bool>(),
    ) {
        let mut grid = Grid::parse_state(&state).unwrap();
        let other = if horizontal { (i, j + 1) } else { (i + 1, j) };

        if grid.swap((i, j), other) {
            prop_assert!(!grid.is_hole((i, j)) && !grid.is_hole(other));
            prop_assert!(grid.swap((i, j), other));
        }
        prop_assert_eq!(grid.to_state(), state);
    }

    #[test]
    fn cascade_keeps_walls_and_fills_every_cell(state in board_state(), seed in any::<u64>()) {
        let mut grid = Grid::parse_state(&state).unwrap();
        let walls = holes(&grid);
        let had_runs = has_runs(&grid);

        let report = process_with_snapshots(&mut grid, &mut RandomColors::new(seed));

        prop_assert_eq!(holes(&grid), walls);
        prop_assert_eq!(grid.count_color(Color::Empty), 0);
        prop_assert_eq!(report.snapshots.len(), 2 * report.iterations as usize);
        prop_assert_eq!(report.has_update(), had_runs);
        if !report.is_capped() {
            prop_assert!(!has_runs(&grid));
        }
        if !had_runs {
            prop_assert_eq!(report, CascadeReport::default());
            prop_assert_eq!(grid.to_state(), state);
        }
    }

    #[test]
    fn cascade_score_adds_up_per_pass(state in board_state(), seed in any::<u64>()) {
        let mut grid = Grid::parse_state(&state).unwrap();

        let report = process_with_snapshots(&mut grid, &mut RandomColors::new(seed));

        let expected: Score = report
            .snapshots
            .iter()
            .step_by(2)
            .map(|popped| sweep_score(popped.chars().filter(|&c| c == 'E').count() as CellCount))
            .sum();
        prop_assert_eq!(report.score, expected);
    }

    #[test]
    fn hint_swap_always_makes_a_run(state in board_state()) {
        let grid = Grid::parse_state(&state).unwrap();

        let hint = hint_for(&grid);
        prop_assert_eq!(&hint_for(&grid), &hint);

        match hint {
            Some(hint) => {
                prop_assert!(hint.cells.iter().all(|&cell| !grid.is_hole(cell)));
                prop_assert!(hint.cells.contains(&hint.swap.from));
                prop_assert!(hint.cells.contains(&hint.swap.to));
                prop_assert_eq!(find_hint(&grid), hint.cells.to_vec());

                let mut swapped = grid.clone();
                prop_assert!(swapped.swap(hint.swap.from, hint.swap.to));
                prop_assert!(has_runs(&swapped));
            }
            None => prop_assert!(find_hint(&grid).is_empty()),
        }
    }

    #[test]
    fn new_levels_start_stable(seed in any::<u64>()) {
        let level = Level::new(&LevelConfig::standard(), &mut RandomColors::new(seed)).unwrap();

        prop_assert!(!has_runs(level.grid()));
        prop_assert_eq!(level.grid().holes().count(), 8);
        prop_assert_eq!(level.grid().count_color(Color::Empty), 0);
    }

    #[test]
    fn hinted_moves_always_resolve(seed in any::<u64>(), moves in 1usize..6) {
        let mut engine =
            PlayEngine::from_config(&LevelConfig::standard(), RandomColors::new(seed)).unwrap();

        for _ in 0..moves {
            if engine.is_finished() {
                break;
            }
            let Some(hint) = engine.hint() else {
                break;
            };
            let steps_before = engine.steps_left();
            let score_before = engine.score();

            let result = engine.play_move(hint.swap.from, hint.swap.to).unwrap();

            prop_assert!(result.outcome.has_update());
            prop_assert_eq!(engine.steps_left(), steps_before - 1);
            prop_assert_eq!(engine.score(), score_before + result.report.score);
        }
    }
}
