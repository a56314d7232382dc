//! Single-player mode tests.
//!
//! In solo mode every non-terminal X move schedules one computer move for O,
//! which fires after the configured delay and picks a random empty cell.

mod common;

use common::{engine, engine_with, TestEngine};
use rust_tictactoe::core::{CellValue, Mark};
use rust_tictactoe::engine::{GameEngineBuilder, GameResult, MoveOutcome};
use rust_tictactoe::schedule::TimerAction;
use rust_tictactoe::scores::MemoryStore;

fn solo_engine() -> TestEngine {
    engine_with(GameEngineBuilder::new().solo_mode(true), MemoryStore::new())
}

fn pending_actions(engine: &TestEngine) -> Vec<TimerAction> {
    engine.pending_timers().iter().map(|&(_, a)| a).collect()
}

/// One X move schedules exactly one computer move, which plays an empty cell.
#[test]
fn test_x_move_schedules_one_computer_move() {
    let mut engine = solo_engine();

    assert_eq!(engine.apply_move(4), MoveOutcome::Continue);
    assert_eq!(pending_actions(&engine), vec![TimerAction::ComputerMove]);

    // Nothing happens before the delay
    engine.advance(499);
    assert_eq!(engine.board().empty_indices().len(), 8);
    assert_eq!(engine.turn().active_player, Mark::O);

    engine.advance(1);
    let o_cells: Vec<_> = (0..9)
        .filter(|&i| engine.board().get(i) == Some(CellValue::O))
        .collect();
    assert_eq!(o_cells.len(), 1);
    assert_ne!(o_cells[0], 4);
    assert_eq!(engine.turn().active_player, Mark::X);
    assert!(engine.pending_timers().is_empty());
}

/// The computer never schedules a move for itself after playing O.
#[test]
fn test_no_computer_move_after_o() {
    let mut engine = solo_engine();
    engine.apply_move(0);
    engine.advance(500);
    assert!(engine.pending_timers().is_empty());
}

/// Two-player mode never schedules computer moves.
#[test]
fn test_two_player_mode_schedules_nothing() {
    let mut engine = engine();
    engine.apply_move(0);
    assert!(engine.pending_timers().is_empty());
}

/// The computer only ever picks cells that were empty when it fired.
#[test]
fn test_computer_picks_only_empty_cells() {
    for seed in 0..20u64 {
        let mut engine = engine_with(
            GameEngineBuilder::new().solo_mode(true).seed(seed),
            MemoryStore::new(),
        );

        while engine.turn().active {
            let before = engine.board().clone();
            let Some(&cell) = before.empty_indices().first() else { break };
            engine.apply_move(cell);
            if !engine.turn().active {
                break;
            }

            let snapshot = engine.board().clone();
            engine.advance(500);

            let placed: Vec<_> = (0..9)
                .filter(|&i| snapshot.get(i) != engine.board().get(i))
                .collect();
            assert_eq!(placed.len(), 1, "seed {}", seed);
            assert_eq!(snapshot.get(placed[0]), Some(CellValue::Empty));
            assert_eq!(engine.board().get(placed[0]), Some(CellValue::O));
        }
    }
}

/// With the same seed and the same human moves, the computer plays the same
/// cells.
#[test]
fn test_same_seed_same_game() {
    let run = || {
        let mut engine = engine_with(
            GameEngineBuilder::new().solo_mode(true).board_size(4),
            MemoryStore::new(),
        );
        for _ in 0..4 {
            if let Some(&cell) = engine.board().empty_indices().first() {
                engine.apply_move(cell);
                engine.advance(500);
            }
        }
        engine.board().clone()
    };

    assert_eq!(run(), run());
}

/// Switching mode cancels a pending computer move and starts over.
#[test]
fn test_mode_switch_cancels_computer_move() {
    let mut engine = solo_engine();
    engine.apply_move(0);
    assert_eq!(pending_actions(&engine), vec![TimerAction::ComputerMove]);

    engine.set_solo_mode(false);
    assert!(!engine.solo_mode());
    assert!(engine.pending_timers().is_empty());
    assert!(engine.board().cells().iter().all(|c| c.is_empty()));

    engine.advance(1000);
    assert!(engine.board().cells().iter().all(|c| c.is_empty()));
}

/// A manual reset leaves the computer's move scheduled. It fires on the
/// fresh board and plays for whoever is to move there.
#[test]
fn test_reset_keeps_pending_computer_move() {
    let mut engine = solo_engine();
    engine.apply_move(4);
    engine.reset();
    assert_eq!(pending_actions(&engine), vec![TimerAction::ComputerMove]);

    engine.advance(500);
    let marked: Vec<_> = engine.board().cells().iter().filter(|c| !c.is_empty()).collect();
    assert_eq!(marked, vec![&CellValue::X]);

    // X was played by the computer, so O's reply is scheduled as usual
    assert_eq!(engine.turn().active_player, Mark::O);
    assert_eq!(pending_actions(&engine), vec![TimerAction::ComputerMove]);

    engine.advance(500);
    assert_eq!(engine.board().empty_indices().len(), 7);
    assert!(engine.pending_timers().is_empty());
}

/// Resizing cancels a pending computer move.
#[test]
fn test_resize_cancels_computer_move() {
    let mut engine = solo_engine();
    engine.apply_move(0);

    engine.set_board_size(5);
    engine.advance(1000);
    assert_eq!(engine.board().len(), 25);
    assert!(engine.board().cells().iter().all(|c| c.is_empty()));
    assert!(engine.solo_mode());
}

/// Playing out a full solo game ends in a result and an auto-reset.
#[test]
fn test_solo_game_runs_to_completion() {
    let mut engine = solo_engine();
    let mut result = None;

    for _ in 0..9 {
        let Some(&cell) = engine.board().empty_indices().first() else { break };
        if let MoveOutcome::Finished(r) = engine.apply_move(cell) {
            result = Some(r);
            break;
        }
        engine.advance(500);
        if !engine.turn().active {
            break;
        }
    }

    let scores = engine.scores();
    match result {
        Some(GameResult::Winner(Mark::X)) => assert_eq!(scores.x, 1),
        Some(GameResult::Draw) => assert_eq!(scores.x + scores.o, 0),
        // O won on a computer move
        _ => assert_eq!(scores.o, 1),
    }
    assert!(!engine.turn().active);
    assert_eq!(pending_actions(&engine), vec![TimerAction::Reset]);

    engine.advance(5000);
    assert!(engine.turn().active);
    assert_eq!(engine.board().empty_indices().len(), 9);
}

/// A direct computer move on a finished game changes nothing.
#[test]
fn test_computer_move_on_finished_game() {
    let mut engine = engine();
    for i in [0, 4, 1, 5, 2] {
        engine.apply_move(i);
    }
    let board = engine.board().clone();
    assert_eq!(engine.computer_move(), MoveOutcome::Ignored);
    assert_eq!(engine.board(), &board);
}
