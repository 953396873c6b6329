//! Tests for the round controller driven through the public API.

use three_piece_rules::{
    Coordinate, Marker, Move, MoveError, MoveOutcome, Player, PlayerSlot, Round, RoundOutcome,
    RoundPhase, WinPattern,
};

fn c(row: u8, col: u8) -> Coordinate {
    Coordinate::new(row, col).expect("on the board")
}

fn new_round() -> Round {
    Round::new(
        Player::new("A", Marker::new('X').expect("marker")),
        Player::new("B", Marker::new('O').expect("marker")),
    )
}

/// Plays the given cells alternately, starting with player one.
fn play_all(round: &mut Round, cells: &[(u8, u8)]) {
    for (row, col) in cells {
        round.play(c(*row, *col)).expect("legal move");
    }
}

#[test]
fn test_scenario_a_vertical_win_for_player_one() {
    let mut round = new_round();

    round.play(c(1, 2)).expect("first placement");
    round.play(c(1, 1)).expect("opponent placement");
    let outcome = round.play(c(3, 2)).expect("second placement");

    let expected = RoundOutcome::completed(WinPattern::Vertical, PlayerSlot::One);
    assert_eq!(outcome, MoveOutcome::RoundOver(expected));
    assert_eq!(round.phase(), RoundPhase::RoundOver(expected));
    assert_eq!(*expected.completed_by(), PlayerSlot::One);
    // The announced winner is the seat to move after the final placement.
    assert_eq!(round.player(*expected.credited()).name(), "B");
}

#[test]
fn test_scenario_b_fourth_piece_rejected() {
    let mut round = new_round();
    play_all(&mut round, &[(1, 1), (2, 1), (2, 2), (3, 2), (3, 3), (1, 3)]);
    assert_eq!(round.to_move(), PlayerSlot::One);
    assert_eq!(round.player(PlayerSlot::One).placed_count(), 3);

    let result = round.play(c(1, 2));

    assert_eq!(result, Err(MoveError::NotOwnedCell(c(1, 2))));
    assert_eq!(round.player(PlayerSlot::One).placed_count(), 3);
    assert!(round.board().is_free(c(1, 2)));
    assert_eq!(round.to_move(), PlayerSlot::One);
}

#[test]
fn test_scenario_c_rematch_mid_round() {
    let mut round = new_round();
    play_all(&mut round, &[(1, 1), (2, 1), (3, 3)]);
    assert_eq!(round.player(PlayerSlot::One).placed_count(), 2);

    round.rematch();

    assert_eq!(round.player(PlayerSlot::One).placed_count(), 0);
    assert_eq!(round.player(PlayerSlot::Two).placed_count(), 0);
    assert!(Coordinate::ALL.iter().all(|coord| round.board().is_free(*coord)));
    assert_eq!(round.to_move(), PlayerSlot::One);
    assert_eq!(round.phase(), RoundPhase::AwaitingMove);
    assert_eq!(round.player(PlayerSlot::One).name(), "A");
}

#[test]
fn test_placement_on_every_free_cell() {
    for coord in Coordinate::ALL {
        let mut round = new_round();
        let mover = round.to_move();
        let before = round.player(mover).placed_count();

        round.play(coord).expect("free cell");

        assert!(!round.board().is_free(coord));
        assert_eq!(round.player(mover).placed_count(), before + 1);
        assert_eq!(round.to_move(), mover.opponent());
    }
}

#[test]
fn test_occupied_cell_never_changes_state() {
    let mut round = new_round();
    play_all(&mut round, &[(2, 2), (1, 1)]);

    for taken in [c(2, 2), c(1, 1)] {
        let before = round.clone();
        assert_eq!(round.play(taken), Err(MoveError::OccupiedCell(taken)));
        assert_eq!(round, before);
    }
}

#[test]
fn test_relocation_is_two_calls() {
    let mut round = new_round();
    play_all(&mut round, &[(1, 1), (2, 1), (2, 2), (3, 2), (3, 3), (1, 3)]);

    let lifted = round.play(c(3, 3)).expect("lift own piece");
    assert_eq!(
        lifted,
        MoveOutcome::Lifted {
            player: PlayerSlot::One,
            from: c(3, 3)
        }
    );
    assert!(round.board().is_free(c(3, 3)));
    assert_eq!(round.player(PlayerSlot::One).placed_count(), 2);
    assert_eq!(round.to_move(), PlayerSlot::One);

    // Dropping on an occupied cell is a rejected placement; the lift stands.
    assert_eq!(round.play(c(2, 1)), Err(MoveError::OccupiedCell(c(2, 1))));
    assert_eq!(round.pending_lift(), Some(c(3, 3)));

    round.play(c(2, 3)).expect("drop");
    assert_eq!(round.player(PlayerSlot::One).placed_count(), 3);
    assert_eq!(round.to_move(), PlayerSlot::Two);
}

#[test]
fn test_cannot_lift_opponent_or_blank() {
    let mut round = new_round();
    play_all(&mut round, &[(1, 1), (2, 1), (2, 2), (3, 2), (3, 3), (1, 3)]);

    let before = round.clone();
    assert_eq!(round.play(c(2, 1)), Err(MoveError::NotOwnedCell(c(2, 1))));
    assert_eq!(round.play(c(2, 3)), Err(MoveError::NotOwnedCell(c(2, 3))));
    assert_eq!(round, before);
}

#[test]
fn test_win_by_relocation() {
    let mut round = new_round();
    // X: (1,1) (2,2) (3,1); O: (2,1) (3,3) (3,2)
    play_all(&mut round, &[(1, 1), (2, 1), (2, 2), (3, 3), (3, 1), (3, 2)]);

    round.play(c(1, 1)).expect("lift");
    let outcome = round.play(c(1, 3)).expect("drop completes the diagonal");

    assert_eq!(
        outcome,
        MoveOutcome::RoundOver(RoundOutcome::completed(
            WinPattern::Diagonal,
            PlayerSlot::One
        ))
    );
}

#[test]
fn test_submit_checks_turn() {
    let mut round = new_round();
    let result = round.submit(Move::new(PlayerSlot::Two, c(2, 2)));
    assert_eq!(result, Err(MoveError::WrongPlayer(PlayerSlot::Two)));
    assert!(round.board().is_free(c(2, 2)));

    assert!(round.submit(Move::new(PlayerSlot::One, c(2, 2))).is_ok());
}

#[test]
fn test_win_pattern_counts_bounded_by_two() {
    let mut round = new_round();
    play_all(&mut round, &[(1, 2), (2, 1), (2, 2), (2, 3)]);
    for slot in [PlayerSlot::One, PlayerSlot::Two] {
        for pattern in [WinPattern::Vertical, WinPattern::Horizontal, WinPattern::Diagonal] {
            assert!(pattern.count_matching(round.player(slot).positions()) <= 2);
        }
    }
}

#[test]
fn test_outcome_serializes() {
    let outcome = RoundOutcome::completed(WinPattern::Horizontal, PlayerSlot::Two);
    let json = serde_json::to_string(&outcome).expect("serialize");
    assert_eq!(
        json,
        r#"{"pattern":"Horizontal","completed_by":"Two","credited":"One"}"#
    );
}
