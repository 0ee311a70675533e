//! Tests for the history/step-pointer state machine.

use backtrack_tictactoe::rules::{LINES, check_winner};
use backtrack_tictactoe::{
    Board, DrawPolicy, GameErrorKind, GameState, Mark, MoveOutcome, Position, Rejection, Square,
    UiEvent, reduce,
};

fn click_all(game: &mut GameState, indices: &[usize]) {
    for &i in indices {
        game.dispatch(UiEvent::SquareClicked(i)).expect("index on board");
    }
}

fn winning_game() -> GameState {
    let mut game = GameState::new();
    click_all(&mut game, &[0, 4, 1, 7, 2]);
    game
}

#[test]
fn test_any_full_line_wins() {
    for line in LINES {
        for mark in [Mark::Cross, Mark::Nought] {
            let others: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|p| !line.contains(p))
                .collect();
            // Other cells empty or held by the same mark
            for bits in 0u32..(1 << others.len()) {
                let mut board = Board::new();
                for pos in line {
                    board.set(pos, Square::Occupied(mark));
                }
                for (i, &pos) in others.iter().enumerate() {
                    if bits & (1 << i) != 0 {
                        board.set(pos, Square::Occupied(mark));
                    }
                }
                assert_eq!(check_winner(&board), Some(mark));
            }
        }
    }
    assert_eq!(check_winner(&Board::new()), None);
}

#[test]
fn test_winning_scenario() {
    let game = winning_game();
    assert_eq!(check_winner(&game.history().snapshots()[5]), Some(Mark::Cross));
    assert_eq!(game.view().status(DrawPolicy::Ignore).to_string(), "Winner: X");
}

#[test]
fn test_n_moves_without_jumps() {
    let sequence = [4, 0, 8, 2, 1, 7, 6];
    for n in 0..=sequence.len() {
        let mut game = GameState::new();
        click_all(&mut game, &sequence[..n]);
        assert_eq!(game.history().len(), n + 1);
        assert_eq!(game.step(), n);
    }
}

#[test]
fn test_occupied_click_is_noop() {
    let mut game = GameState::new();
    click_all(&mut game, &[0, 0]);
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.step(), 1);
}

#[test]
fn test_illegal_clicks_never_change_state() {
    let mut game = winning_game();
    for i in 0..9 {
        let before = game.clone();
        let outcome = game.dispatch(UiEvent::SquareClicked(i)).unwrap();
        assert_eq!(outcome, Some(MoveOutcome::Rejected(Rejection::GameWon(Mark::Cross))));
        assert_eq!(game, before);
    }

    let mut game = GameState::new();
    click_all(&mut game, &[3, 5]);
    for i in [3, 5] {
        let before = game.clone();
        game.dispatch(UiEvent::SquareClicked(i)).unwrap();
        assert_eq!(game, before);
    }
}

#[test]
fn test_click_after_win_rejected() {
    let mut game = winning_game();
    click_all(&mut game, &[3]);
    assert_eq!(game.step(), 5);
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_fork_after_win() {
    let mut game = winning_game();
    game.dispatch(UiEvent::HistoryStepClicked(2)).unwrap();
    click_all(&mut game, &[8]);
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.step(), 3);
    assert_eq!(game.winner(), None);
    assert_eq!(
        game.view().status(DrawPolicy::Ignore).to_string(),
        "Next player: O"
    );
}

#[test]
fn test_jump_then_move_truncates_for_every_step() {
    let full = winning_game();
    for k in 0..full.history().len() {
        let mut game = full.clone();
        game.jump_to(k).unwrap();
        // First empty square at step k
        let free = Position::ALL
            .into_iter()
            .find(|&p| game.current_board().is_empty(p))
            .unwrap();
        let outcome = game.apply_move(free);
        if k == 5 {
            assert!(!outcome.is_placed());
            assert_eq!(game.history().len(), 6);
        } else {
            assert!(outcome.is_placed());
            assert_eq!(game.history().len(), k + 2);
            assert_eq!(game.step(), k + 1);
        }
        assert_eq!(game.check_invariants(), Ok(()));
    }
}

#[test]
fn test_turn_alternation_across_forks() {
    let mut game = GameState::new();
    click_all(&mut game, &[0, 1, 2, 3]);
    game.jump_to(1).unwrap();
    click_all(&mut game, &[8, 7]);
    game.jump_to(0).unwrap();
    click_all(&mut game, &[4, 6, 5]);

    let history = game.history();
    for k in 0..history.len() - 1 {
        let placed = history.move_at(k + 1).expect("one new mark per step");
        assert_eq!(placed.mark, Mark::for_step(k));
    }
}

#[test]
fn test_jump_to_out_of_range() {
    let mut game = winning_game();
    let err = game.jump_to(6).unwrap_err();
    assert_eq!(err.kind(), GameErrorKind::OutOfRange { step: 6, len: 6 });
    assert_eq!(game.step(), 5);
}

#[test]
fn test_won_game_navigable() {
    let game = winning_game();
    let early = reduce(&game, UiEvent::HistoryStepClicked(4)).unwrap();
    assert_eq!(early.winner(), None);
    let back = reduce(&early, UiEvent::HistoryStepClicked(5)).unwrap();
    assert_eq!(back.winner(), Some(Mark::Cross));
    assert_eq!(back.history(), game.history());
}

#[test]
fn test_view_serializes() {
    let view = winning_game().view();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["step"], 5);
    assert_eq!(json["winner"], "Cross");
    assert_eq!(json["moves"].as_array().map(Vec::len), Some(6));
}
