//! Tests for the puzzle session protocol and its invariants.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snapgrid_puzzle::{GridSize, PuzzleSession, SelectOutcome, is_permutation};

fn grid(n: usize) -> GridSize {
    GridSize::new(n).unwrap()
}

fn seeded(n: usize, seed: u64) -> PuzzleSession {
    PuzzleSession::with_rng(grid(n), &mut StdRng::seed_from_u64(seed))
}

/// Current positions of all tiles, for permutation checks.
fn positions(session: &PuzzleSession) -> Vec<usize> {
    session.tiles().iter().map(|t| t.current_index()).collect()
}

/// Scrambles 2x2 sessions until one starts exactly one swap from solved.
fn two_misplaced_session() -> PuzzleSession {
    (0..1000)
        .map(|seed| seeded(2, seed))
        .find(|s| s.tiles().iter().filter(|t| !t.is_home()).count() == 2)
        .expect("some seed under 1000 yields a single transposition")
}

/// Solves a session by walking each tile home, returning the last outcome.
fn solve(session: &mut PuzzleSession) -> Option<SelectOutcome> {
    let mut last = None;
    for home in 0..session.grid().tile_count() {
        let current = session
            .tiles()
            .iter()
            .find(|t| t.identity() == home)
            .map(|t| t.current_index())
            .unwrap();
        if current != home {
            session.select_tile(home);
            last = Some(session.select_tile(current));
        }
    }
    last
}

#[test]
fn test_fresh_session_is_a_scrambled_permutation() {
    for seed in 0..50 {
        let session = seeded(4, seed);
        assert!(is_permutation(&positions(&session)), "seed {seed}");
        assert!(!session.won(), "seed {seed} started solved");
        assert!(session.tiles().iter().any(|t| !t.is_home()), "seed {seed}");
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.elapsed_seconds(), 0);
        assert_eq!(session.selection(), None);
        assert_eq!(session.last_swap(), None);
    }
}

#[test]
fn test_swaps_preserve_the_permutation() {
    let mut session = seeded(4, 7);
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..200 {
        let click = rng.gen_range(0..session.grid().tile_count());
        session.select_tile(click);
        assert!(is_permutation(&positions(&session)));
        if session.won() {
            break;
        }
    }
}

#[test]
fn test_selection_protocol() {
    let mut session = seeded(3, 1);

    assert_eq!(session.select_tile(4), SelectOutcome::Selected(4));
    assert_eq!(session.selection(), Some(4));

    // Clicking the pending tile again clears it without a move.
    assert_eq!(session.select_tile(4), SelectOutcome::Deselected);
    assert_eq!(session.selection(), None);
    assert_eq!(session.move_count(), 0);

    // Reselect works after a deselect.
    assert_eq!(session.select_tile(2), SelectOutcome::Selected(2));
}

#[test]
fn test_second_click_swaps_and_counts_one_move() {
    let mut session = seeded(3, 1);
    let before_a = session.tile_at(0).copied().unwrap();
    let before_b = session.tile_at(5).copied().unwrap();

    session.select_tile(0);
    let outcome = session.select_tile(5);

    assert_eq!(outcome, SelectOutcome::Swapped { from: 0, to: 5 });
    assert_eq!(session.move_count(), 1);
    assert_eq!(session.selection(), None);
    assert_eq!(session.last_swap(), Some((0, 5)));
    assert_eq!(session.tile_at(5).unwrap().identity(), before_a.identity());
    assert_eq!(session.tile_at(0).unwrap().identity(), before_b.identity());
}

#[test]
fn test_out_of_range_clicks_are_ignored() {
    let mut session = seeded(2, 1);

    assert_eq!(session.select_tile(4), SelectOutcome::Ignored);
    assert_eq!(session.select_tile(usize::MAX), SelectOutcome::Ignored);
    assert_eq!(session.selection(), None);
    assert_eq!(session.move_count(), 0);

    // A pending selection survives an ignored click.
    session.select_tile(1);
    assert_eq!(session.select_tile(4), SelectOutcome::Ignored);
    assert_eq!(session.selection(), Some(1));
}

#[test]
fn test_tick_counts_seconds_while_unsolved() {
    let mut session = seeded(3, 2);
    for _ in 0..5 {
        session.tick();
    }
    assert_eq!(session.elapsed_seconds(), 5);
}

#[test]
fn test_one_swap_solves_a_two_tile_scramble() {
    let mut session = two_misplaced_session();
    let misplaced: Vec<usize> = session
        .tiles()
        .iter()
        .filter(|t| !t.is_home())
        .map(|t| t.current_index())
        .collect();

    session.tick();
    session.tick();
    session.select_tile(misplaced[0]);
    let outcome = session.select_tile(misplaced[1]);

    assert_eq!(
        outcome,
        SelectOutcome::Won {
            moves: 1,
            elapsed_seconds: 2
        }
    );
    assert!(session.won());
}

#[test]
fn test_session_is_inert_after_the_win() {
    let mut session = two_misplaced_session();
    let misplaced: Vec<usize> = session
        .tiles()
        .iter()
        .filter(|t| !t.is_home())
        .map(|t| t.current_index())
        .collect();
    session.select_tile(misplaced[0]);
    session.select_tile(misplaced[1]);
    assert!(session.won());

    let moves = session.move_count();
    let elapsed = session.elapsed_seconds();

    assert_eq!(session.select_tile(0), SelectOutcome::Ignored);
    session.tick();
    session.tick();

    assert_eq!(session.move_count(), moves);
    assert_eq!(session.elapsed_seconds(), elapsed);
    assert!(session.tiles().iter().all(|t| t.is_home()));
}

#[test]
fn test_win_fires_exactly_when_every_tile_is_home() {
    for seed in 0..20 {
        let mut session = seeded(3, seed);
        let last = solve(&mut session);

        // Every solve ends on a Won carrying the final counters.
        match last {
            Some(SelectOutcome::Won { moves, .. }) => {
                assert_eq!(moves, session.move_count(), "seed {seed}");
            }
            other => panic!("seed {seed}: expected Won, got {other:?}"),
        }
        assert!(session.won(), "seed {seed}");
        assert!(session.tiles().iter().all(|t| t.is_home()), "seed {seed}");
    }
}

#[test]
fn test_moves_count_swaps_not_clicks() {
    let mut session = seeded(3, 3);

    session.select_tile(0); // select
    session.select_tile(0); // deselect
    session.select_tile(1); // select
    session.select_tile(2); // swap
    session.select_tile(9); // ignored
    session.select_tile(3); // select

    assert_eq!(session.move_count(), 1);
}
