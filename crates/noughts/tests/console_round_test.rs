//! End-to-end tests driving the console game with scripted input.

use noughts::{ComputerPlayer, Console, HumanPlayer, Outcome, ResultsLog, play_round, run};
use noughts_core::Player;
use std::io::Cursor;

fn console_over<'a>(script: &'a str, out: &'a mut Vec<u8>) -> Console<Cursor<&'a [u8]>, &'a mut Vec<u8>> {
    Console::new(Cursor::new(script.as_bytes()), out)
}

#[test]
fn test_full_session_human_as_x() {
    // Menu 1 (play as X), human plays 1, 2, 4; the computer takes the
    // center, blocks the top row, then wins on the anti-diagonal.
    // One Enter back to the menu, then 3 to exit.
    let script = "1\n1\n2\n4\n\n3\n";
    let dir = tempfile::tempdir().expect("temp dir");
    let log = ResultsLog::new(dir.path().join("results.txt"));

    let mut out = Vec::new();
    {
        let mut console = console_over(script, &mut out);
        run(&mut console, &log).expect("session runs to exit");
    }

    let transcript = String::from_utf8(out).expect("utf8 output");
    assert!(transcript.contains("========MENU========"));
    assert!(transcript.contains("Computer chose position 5"));
    assert!(transcript.contains("Computer chose position 3"));
    assert!(transcript.contains("Player O wins!"));
    assert!(transcript.contains("Result saved to"));
    assert!(transcript.contains("Thank you for playing! Goodbye!"));

    let contents =
        std::fs::read_to_string(log.path()).expect("outcome recorded");
    assert_eq!(contents, "Winner : O\n");
}

#[test]
fn test_menu_reprompts_until_valid() {
    let script = "x\n\n9\n3\n";
    let dir = tempfile::tempdir().expect("temp dir");
    let log = ResultsLog::new(dir.path().join("results.txt"));

    let mut out = Vec::new();
    {
        let mut console = console_over(script, &mut out);
        run(&mut console, &log).expect("session exits");
    }

    let transcript = String::from_utf8(out).expect("utf8 output");
    assert!(transcript.contains("Invalid choice! Enter your choice:>"));
    assert!(transcript.contains("Thank you for playing! Goodbye!"));
}

#[test]
fn test_rejected_moves_reprompt_the_same_seat() {
    // Human X: 5, then an occupied square, an out-of-range number and
    // a non-numeric line, then 9 and 7. The computer wins the top row.
    let script = "5\n5\n0\nabc\n9\n7\n";
    let mut out = Vec::new();
    let outcome = {
        let mut console = console_over(script, &mut out);
        let mut human = HumanPlayer::new("You");
        let mut computer = ComputerPlayer::new("Computer");
        play_round(&mut console, &mut human, &mut computer).expect("round completes")
    };

    assert_eq!(outcome, Outcome::Winner(Player::O));

    let transcript = String::from_utf8(out).expect("utf8 output");
    assert!(transcript.contains("Position already occupied! Choose another position."));
    assert!(transcript.contains("Invalid position! Please enter a number between 1 and 9."));
    assert!(transcript.contains("Invalid input! Please enter a number between 1 and 9."));
}

#[test]
fn test_two_humans_can_play_to_a_draw() {
    let script = "1\n5\n3\n2\n4\n6\n8\n7\n9\n";
    let mut out = Vec::new();
    let outcome = {
        let mut console = console_over(script, &mut out);
        let mut first = HumanPlayer::new("Left");
        let mut second = HumanPlayer::new("Right");
        play_round(&mut console, &mut first, &mut second).expect("round completes")
    };

    assert_eq!(outcome, Outcome::Draw);
    let transcript = String::from_utf8(out).expect("utf8 output");
    assert!(transcript.contains("Game Draw"));
}
