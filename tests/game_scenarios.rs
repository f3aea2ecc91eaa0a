//! End-to-end games played through the app container

mod common;

use bbci::{
    ApplyError,
    game::{Action, Cell, GameState},
    state::game_address,
};
use common::{P1, P2, P3, create, fresh_app, game, take};

#[test]
fn test_player_one_wins_on_diagonal() {
    let (app, _) = fresh_app();
    create(&app, P1, "g1").unwrap();

    take(&app, P1, "g1", 5).unwrap();
    let g = game(&app, "g1");
    assert_eq!(g.board.get(4), Cell::X);
    assert_eq!(g.state, GameState::P2Next);

    take(&app, P2, "g1", 2).unwrap();
    assert_eq!(game(&app, "g1").state, GameState::P1Next);

    take(&app, P1, "g1", 1).unwrap();
    take(&app, P2, "g1", 3).unwrap();
    take(&app, P1, "g1", 9).unwrap();

    let g = game(&app, "g1");
    assert_eq!(g.state, GameState::P1Win);
    assert_eq!(g.board.encode(), "XOO-X---X");
    assert_eq!(g.player1, P1);
    assert_eq!(g.player2, P2);

    for (signer, space) in [(P2, 4), (P1, 4), (P3, 6)] {
        let err = take(&app, signer, "g1", space).unwrap_err();
        assert_eq!(
            err,
            ApplyError::InvalidTransaction("invalid action: game has ended".to_string())
        );
    }
    assert_eq!(game(&app, "g1"), g);
}

#[test]
fn test_player_two_wins_on_column() {
    let (app, _) = fresh_app();
    create(&app, P1, "g1").unwrap();

    for (signer, space) in [(P1, 1), (P2, 2), (P1, 3), (P2, 5), (P1, 9), (P2, 8)] {
        take(&app, signer, "g1", space).unwrap();
    }

    assert_eq!(game(&app, "g1").state, GameState::P2Win);
}

#[test]
fn test_tie_game() {
    let (app, _) = fresh_app();
    create(&app, P1, "g1").unwrap();

    // X O X
    // X O O
    // O X X
    let moves = [1, 2, 3, 5, 4, 7, 8, 6, 9];
    for (i, space) in moves.into_iter().enumerate() {
        let signer = if i % 2 == 0 { P1 } else { P2 };
        take(&app, signer, "g1", space).unwrap();
    }

    let g = game(&app, "g1");
    assert_eq!(g.board.encode(), "XOXXOOOXX");
    assert_eq!(g.state, GameState::Tie);
}

#[test]
fn test_occupied_space_rejected_without_change() {
    let (app, state) = fresh_app();
    create(&app, P1, "g1").unwrap();
    take(&app, P1, "g1", 5).unwrap();
    let before = game(&app, "g1");
    let entries_before = state.count();

    let err = take(&app, P2, "g1", 5).unwrap_err();
    assert_eq!(
        err,
        ApplyError::InvalidTransaction("invalid action: space 5 already taken".to_string())
    );
    assert_eq!(game(&app, "g1"), before);
    assert_eq!(state.count(), entries_before);
}

#[test]
fn test_stranger_cannot_take_bound_turn() {
    let (app, _) = fresh_app();
    create(&app, P1, "g1").unwrap();
    take(&app, P1, "g1", 5).unwrap();
    take(&app, P2, "g1", 1).unwrap();

    let err = take(&app, P3, "g1", 9).unwrap_err();
    assert!(matches!(err, ApplyError::InvalidTransaction(ref msg) if msg.starts_with("not this player's turn")));

    // The bound player is still free to move
    take(&app, P1, "g1", 9).unwrap();
}

#[test]
fn test_unbound_second_slot_accepts_anyone() {
    let (app, _) = fresh_app();
    create(&app, P1, "g1").unwrap();
    take(&app, P1, "g1", 5).unwrap();

    take(&app, P3, "g1", 1).unwrap();
    assert_eq!(game(&app, "g1").player2, P3);
}

/// One signer playing the first two moves is bound to both slots. The
/// rules only check which slots are free, not who already holds one; this
/// pins that behavior rather than endorsing it.
#[test]
fn test_single_signer_binds_both_slots() {
    let (app, _) = fresh_app();
    create(&app, P1, "g1").unwrap();
    take(&app, P1, "g1", 5).unwrap();
    take(&app, P1, "g1", 1).unwrap();

    let g = game(&app, "g1");
    assert_eq!(g.player1, P1);
    assert_eq!(g.player2, P1);
    assert_eq!(g.state, GameState::P1Next);

    // Nobody else can ever join
    assert!(take(&app, P2, "g1", 9).is_err());
    take(&app, P1, "g1", 9).unwrap();
    assert!(take(&app, P2, "g1", 3).is_err());
}

#[test]
fn test_create_twice_and_delete_missing() {
    let (app, _) = fresh_app();
    create(&app, P1, "g1").unwrap();

    assert!(matches!(
        create(&app, P2, "g1").unwrap_err(),
        ApplyError::InvalidTransaction(_)
    ));

    let err = app
        .execute(
            P1,
            &Action::Delete {
                name: "nope".to_string(),
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        ApplyError::InvalidTransaction("invalid action: game does not exist: nope".to_string())
    );
}

#[test]
fn test_delete_then_recreate() {
    let (app, state) = fresh_app();
    create(&app, P1, "g1").unwrap();
    take(&app, P1, "g1", 5).unwrap();

    app.execute(
        P2,
        &Action::Delete {
            name: "g1".to_string(),
        },
    )
    .unwrap();
    assert!(app.game("g1").unwrap().is_none());
    assert!(!state.contains(&game_address("g1")));

    create(&app, P2, "g1").unwrap();
    let g = game(&app, "g1");
    assert_eq!(g.board.occupied_count(), 0);
    assert!(g.player1.is_empty());
}

#[test]
fn test_out_of_range_space_rejected() {
    let (app, _) = fresh_app();
    create(&app, P1, "g1").unwrap();

    for space in [0, 10] {
        let err = take(&app, P1, "g1", space).unwrap_err();
        assert_eq!(
            err,
            ApplyError::InvalidTransaction(
                "invalid input: Space must be an integer from 1 to 9".to_string()
            )
        );
    }
}

#[test]
fn test_games_are_independent() {
    let (app, _) = fresh_app();
    create(&app, P1, "g1").unwrap();
    create(&app, P1, "g2").unwrap();

    take(&app, P1, "g1", 5).unwrap();
    take(&app, P2, "g2", 5).unwrap();

    assert_eq!(game(&app, "g1").player1, P1);
    assert_eq!(game(&app, "g2").player1, P2);
    assert_eq!(app.games().unwrap().len(), 2);
}
