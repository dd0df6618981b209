//! Tests for the rules engine state machine.

use noughts_core::{GameState, GameStatus, Move, MoveError, Player, Position, check_winner};

fn replay_numbers(numbers: &[u8]) -> GameState {
    let mut state = GameState::new();
    for &n in numbers {
        let pos = Position::from_number(n).expect("test uses valid numbers");
        state.apply_move(pos).expect("test uses legal sequences");
    }
    state
}

#[test]
fn test_fresh_game() {
    let state = GameState::new();
    assert_eq!(state.to_move(), Player::X);
    assert_eq!(state.status(), GameStatus::InProgress);
    assert!(state.history().is_empty());
    assert!(
        Position::ALL
            .iter()
            .all(|&pos| state.board().is_empty(pos))
    );
}

#[test]
fn test_turns_alternate_while_in_progress() {
    let mut state = GameState::new();
    let sequence = [
        (Position::TopLeft, Player::X),
        (Position::Center, Player::O),
        (Position::BottomRight, Player::X),
        (Position::TopCenter, Player::O),
    ];
    for (pos, expected_mover) in sequence {
        assert_eq!(state.to_move(), expected_mover);
        state.apply_move(pos).expect("square is open");
    }
    assert_eq!(state.to_move(), Player::X);
    assert_eq!(state.history().len(), 4);
}

#[test]
fn test_occupied_square_rejected_without_mutation() {
    let mut state = GameState::new();
    state.apply_move(Position::Center).expect("open square");

    let before = state.clone();
    let result = state.apply_move(Position::Center);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(state, before);
}

#[test]
fn test_win_on_top_row() {
    // X: 1, 2, 3 with O interleaved on 4, 5
    let state = replay_numbers(&[1, 4, 2, 5, 3]);
    assert_eq!(state.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_win_on_anti_diagonal() {
    // X: 3, 5, 7 with O interleaved on 1, 2
    let state = replay_numbers(&[3, 1, 5, 2, 7]);
    assert_eq!(state.status(), GameStatus::Won(Player::X));
    assert_eq!(check_winner(state.board()), Some(Player::X));
}

#[test]
fn test_winning_move_does_not_flip_turn() {
    // Status is attached for the mark that just played, so after a win
    // the state still names the winner as the mover.
    let state = replay_numbers(&[1, 4, 2, 5, 3]);
    assert_eq!(state.to_move(), Player::X);
}

#[test]
fn test_terminal_state_is_frozen() {
    let mut state = replay_numbers(&[1, 4, 2, 5, 3]);
    let before = state.clone();

    let result = state.apply_move(Position::BottomRight);
    assert_eq!(result, Err(MoveError::GameOver));
    assert_eq!(state, before);
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    // X O X / X O O / O X X
    let state = replay_numbers(&[1, 5, 3, 2, 4, 6, 8, 7, 9]);
    assert_eq!(state.status(), GameStatus::Draw);
}

#[test]
fn test_evaluate_is_pure() {
    let state = replay_numbers(&[1, 5, 9]);
    assert_eq!(state.evaluate(), state.evaluate());
    assert_eq!(state.evaluate(), state.status());
}

#[test]
fn test_move_rejects_wrong_player() {
    let mut state = GameState::new();
    let result = state.apply(Move::new(Player::O, Position::Center));
    assert_eq!(result, Err(MoveError::WrongPlayer(Player::O)));
    assert_eq!(state, GameState::new());
}

#[test]
fn test_replay_stops_at_first_error() {
    let moves = [
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::TopLeft),
    ];
    let result = GameState::replay(&moves);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::TopLeft)));
}

#[test]
fn test_replay_matches_incremental_application() {
    let moves = [
        Move::new(Player::X, Position::Center),
        Move::new(Player::O, Position::TopLeft),
        Move::new(Player::X, Position::BottomRight),
    ];
    let replayed = GameState::replay(&moves).expect("legal sequence");
    assert_eq!(replayed.history().len(), 3);
    assert_eq!(replayed.to_move(), Player::O);
    assert_eq!(replayed.status(), GameStatus::InProgress);
}
