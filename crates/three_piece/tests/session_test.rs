//! Scripted games driven through the console session.

use std::io::Cursor;
use three_piece::{Console, GameConfig, Session, SessionEnd};

/// Runs `script` as typed input and returns how it ended, rounds played and the transcript.
fn run_script(script: &str) -> (SessionEnd, u32, String) {
    let console = Console::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        GameConfig::plain(),
    );
    let mut session = Session::new(console);
    let end = session.run().expect("in-memory I/O cannot fail");
    let rounds = session.rounds_played();
    let output = session.into_console().into_output();
    (end, rounds, String::from_utf8(output).expect("utf-8 transcript"))
}

#[test]
fn test_full_game_credits_opponent_of_mover() {
    let (end, rounds, out) = run_script("1\nAda\nX\nBob\nO\n1 2\n1,1\n3 2\n2\n");

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(rounds, 1);
    assert!(out.contains("Player: Ada's turn"));
    assert!(out.contains("Player: Bob's turn"));
    assert!(out.contains("Match ended by Vertical move!"));
    assert!(out.contains("The winner of this round is Bob!!"));
    assert!(out.contains("Would you like a rematch?"));
    assert!(out.contains("thank you for playing"));
}

#[test]
fn test_exit_from_main_menu() {
    let (end, rounds, out) = run_script("2\n");

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(rounds, 0);
    assert!(!out.contains("Enter your name"));
    assert!(out.contains("thank you for playing"));
}

#[test]
fn test_input_closed_mid_game() {
    let (end, rounds, out) = run_script("1\nAda\n\nBob\n\n2 2\n");

    assert_eq!(end, SessionEnd::InputClosed);
    assert_eq!(rounds, 0);
    assert!(out.contains("thank you for playing"));
}

#[test]
fn test_empty_answers_use_defaults() {
    let (_, _, out) = run_script("1\n\n\n\n\n2 2\n");

    assert!(out.contains("Player: Player 1's turn"));
    assert!(out.contains("Player: Player 2's turn"));
    assert!(out.contains("|  X  |"));
}

#[test]
fn test_second_player_cannot_reuse_marker() {
    let (_, _, out) = run_script("1\nAda\n#\nBob\n#\n@\n2 2\n");

    assert!(out.contains("'#' is already taken by the other player"));
    assert!(out.contains("|  #  |"));
}

#[test]
fn test_taken_cell_message() {
    let (_, _, out) = run_script("1\nAda\n\nBob\n\n2 2\n2 2\n");

    assert!(out.contains("Selected coordinate is taken!"));
    // Bob is still the one to move after the rejection.
    assert_eq!(out.matches("Player: Bob's turn").count(), 2);
}

#[test]
fn test_full_hand_message_then_relocation() {
    // Ada: (1,1) (2,2) (3,3); Bob: (2,1) (3,2) (1,3). Ada then tries a fourth
    // piece, lifts (3,3) and drops it on (2,3).
    let script = "1\nAda\n\nBob\n\n1 1\n2 1\n2 2\n3 2\n3 3\n1 3\n1 2\n3 3\n2 3\n";
    let (end, _, out) = run_script(script);

    assert_eq!(end, SessionEnd::InputClosed);
    assert!(out.contains("You already placed 3 pieces.\nTake 1 of your pieces."));
    assert!(out.contains("You picked up your piece from (3, 3). Choose where to put it."));
    assert!(out.contains(" 2 |  O  |  X  |  X  |"));
}

#[test]
fn test_rematch_plays_a_second_round() {
    let round = "1 2\n1 1\n3 2\n";
    let script = format!("1\nAda\n\nBob\n\n{round}1\n{round}2\n");
    let (end, rounds, out) = run_script(&script);

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(rounds, 2);
    assert_eq!(out.matches("Match ended by Vertical move!").count(), 2);
    // Players and markers carry over; no second name prompt.
    assert_eq!(out.matches("Enter your name").count(), 2);
}

#[test]
fn test_bad_coordinates_reprompt() {
    let (_, _, out) = run_script("1\nAda\n\nBob\n\n7 7\none two\n3\n2 2\n");

    assert!(out.contains("Both numbers must be between 1 and 3."));
    assert!(out.contains("Invalid input. Please enter 2 valid numbers."));
    assert!(out.contains("Please enter 2 numbers separated by space."));
    assert!(out.contains("Player: Bob's turn"));
}
