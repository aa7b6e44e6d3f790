//! Property-based invariant tests for move resolution and spawning.
//!
//! For any board (up to 6x6) and any direction:
//!
//! 1. Tile sum is conserved (v + v -> 2v).
//! 2. Tile count drops by exactly the number of merges.
//! 3. No slot ends up with an invalid tile value.
//! 4. A second move in the same direction only changes the board if the first merged.
//! 5. Tiles end packed against the far edge (no gap before a tile).
//! 6. Spawning adds at most one tile, and none on a full board.

use proptest::prelude::*;
use tui_2048::core::{Board, SimpleRng};
use tui_2048::types::{is_valid_tile, BoxSize, Direction, Tile};

// ── Helpers ─────────────────────────────────────────────────────────────

fn tile_strategy() -> impl Strategy<Value = Tile> {
    prop_oneof![
        3 => Just(0u64),
        5 => (1u32..=11).prop_map(|p| 1u64 << p),
    ]
}

fn rows_strategy() -> impl Strategy<Value = Vec<Vec<Tile>>> {
    (1usize..=6, 1usize..=6).prop_flat_map(|(w, h)| {
        prop::collection::vec(prop::collection::vec(tile_strategy(), w), h)
    })
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn build(rows: &[Vec<Tile>], seed: u32) -> Board {
    let refs: Vec<&[Tile]> = rows.iter().map(Vec::as_slice).collect();
    Board::from_rows(&refs, BoxSize::default(), SimpleRng::new(seed)).unwrap()
}

/// Tiles along each line of travel, ordered from the far edge backwards.
fn lines_from_far_edge(board: &Board, direction: Direction) -> Vec<Vec<Tile>> {
    let (w, h) = (board.width() as i32, board.height() as i32);
    let mut lines = Vec::new();
    match direction {
        Direction::Left | Direction::Right => {
            for y in 0..h {
                let mut line: Vec<Tile> = (0..w).map(|x| board.get(x, y).unwrap()).collect();
                if direction == Direction::Right {
                    line.reverse();
                }
                lines.push(line);
            }
        }
        Direction::Up | Direction::Down => {
            for x in 0..w {
                let mut line: Vec<Tile> = (0..h).map(|y| board.get(x, y).unwrap()).collect();
                if direction == Direction::Down {
                    line.reverse();
                }
                lines.push(line);
            }
        }
    }
    lines
}

proptest! {
    #[test]
    fn sum_is_conserved(rows in rows_strategy(), dir in direction_strategy()) {
        let mut board = build(&rows, 1);
        let sum_before = board.tile_sum();
        let count_before = board.tile_count();

        let summary = board.make_move(dir);

        prop_assert_eq!(board.tile_sum(), sum_before);
        prop_assert_eq!(board.tile_count(), count_before - summary.merges);
        prop_assert!(summary.merged_value <= sum_before);
        prop_assert_eq!(summary.merges == 0, summary.merged_value == 0);
    }

    #[test]
    fn tiles_stay_valid(rows in rows_strategy(), dir in direction_strategy()) {
        let mut board = build(&rows, 1);
        board.make_move(dir);
        for row in board.rows() {
            for v in row {
                prop_assert!(is_valid_tile(v), "invalid tile {}", v);
            }
        }
    }

    #[test]
    fn repeat_move_only_changes_after_merges(rows in rows_strategy(), dir in direction_strategy()) {
        let mut board = build(&rows, 1);
        let first = board.make_move(dir);
        let settled = board.rows();
        let second = board.make_move(dir);

        if first.merges == 0 {
            prop_assert!(!second.changed());
            prop_assert_eq!(board.rows(), settled);
        }
    }

    #[test]
    fn tiles_pack_against_far_edge(rows in rows_strategy(), dir in direction_strategy()) {
        let mut board = build(&rows, 1);
        board.make_move(dir);
        for line in lines_from_far_edge(&board, dir) {
            let first_gap = line.iter().position(|v| *v == 0).unwrap_or(line.len());
            prop_assert!(line[first_gap..].iter().all(|v| *v == 0), "gap in {:?}", line);
        }
    }

    #[test]
    fn spawn_adds_at_most_one(rows in rows_strategy(), seed in any::<u32>(), allow_four in any::<bool>()) {
        let mut board = build(&rows, seed);
        let before = board.tile_count();
        let was_full = board.is_full();

        let placed = board.generate_piece(allow_four);

        let after = board.tile_count();
        prop_assert!(after == before || after == before + 1);
        prop_assert_eq!(placed.is_some(), after == before + 1);
        if was_full {
            prop_assert!(placed.is_none());
            prop_assert_eq!(after, before);
        }
        if let Some((x, y)) = placed {
            let v = board.get(x as i32, y as i32).unwrap();
            prop_assert!(v == 2 || (allow_four && v == 4));
        }
    }
}
