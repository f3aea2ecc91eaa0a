//! Game transition engine
//!
//! Pure functions that decide whether an action is legal for the current
//! record and compute the record that replaces it. Nothing here touches
//! storage: callers look the record up, pass a copy in, and persist whatever
//! [`Outcome`] comes back. The same inputs always produce the same result.

use super::{
    board::{BOARD_SIZE, Board, Mark},
    display::short_id,
    lines::LineAnalyzer,
    record::{GameRecord, GameState},
};
use crate::{Error, Result};

/// A decoded request against one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create { name: String },
    Delete { name: String },
    /// Place the mover's mark on a 1-based `space`
    Take { name: String, space: usize },
}

impl Action {
    /// Name of the game the action targets
    pub fn name(&self) -> &str {
        match self {
            Action::Create { name } | Action::Delete { name } | Action::Take { name, .. } => name,
        }
    }

    /// Payload keyword for the action
    pub fn keyword(&self) -> &'static str {
        match self {
            Action::Create { .. } => "create",
            Action::Delete { .. } => "delete",
            Action::Take { .. } => "take",
        }
    }
}

/// What the caller should persist after a successful action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Write this record under its name
    Store(GameRecord),
    /// Remove the named record
    Delete(String),
}

/// Start a new game.
///
/// `existing` is whatever the caller found stored under `name`.
///
/// # Errors
///
/// Returns [`Error::AlreadyExists`] if a record is already present.
pub fn create_game(existing: Option<&GameRecord>, name: &str) -> Result<GameRecord> {
    if existing.is_some() {
        return Err(Error::AlreadyExists {
            name: name.to_string(),
        });
    }
    Ok(GameRecord::new(name))
}

/// Produce the removal directive for a game.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if nothing is stored under `name`.
pub fn delete_game(existing: Option<&GameRecord>, name: &str) -> Result<Outcome> {
    match existing {
        Some(_) => Ok(Outcome::Delete(name.to_string())),
        None => Err(Error::NotFound {
            name: name.to_string(),
        }),
    }
}

/// Apply a move by `signer` on the 1-based `space`.
///
/// Checks run in order and the first failure wins: the game must not be
/// over, the signer must own the turn (an unbound slot accepts anyone), the
/// space must be in 1..=9 and the target cell must be empty. On success the
/// first free player slot is bound to `signer`, the mover's mark is written
/// and the state is recomputed with [`next_state`].
///
/// The input record is never modified.
///
/// Binding only looks at which slots are free, so a single signer who plays
/// both the first and the second move ends up in both slots.
pub fn apply_move(record: &GameRecord, signer: &str, space: usize) -> Result<GameRecord> {
    if record.state.is_terminal() {
        return Err(Error::GameEnded);
    }

    let wrong_p1 = !record.player1.is_empty()
        && record.state == GameState::P1Next
        && record.player1 != signer;
    let wrong_p2 = !record.player2.is_empty()
        && record.state == GameState::P2Next
        && record.player2 != signer;
    if wrong_p1 || wrong_p2 {
        return Err(Error::WrongTurn {
            signer: short_id(signer).to_string(),
        });
    }

    if !(1..=BOARD_SIZE).contains(&space) {
        return Err(Error::invalid_input(
            "Space must be an integer from 1 to 9",
        ));
    }

    let index = space - 1;
    if !record.board.is_empty(index) {
        return Err(Error::CellTaken { space });
    }

    let mark = record
        .state
        .mark()
        .ok_or_else(|| Error::internal(format!("no mark for state {}", record.state)))?;

    let mut next = record.clone();
    if next.player1.is_empty() {
        next.player1 = signer.to_string();
    } else if next.player2.is_empty() {
        next.player2 = signer.to_string();
    }

    next.board = record.board.with_mark(index, mark);
    next.state = next_state(record.state, &next.board)?;
    Ok(next)
}

/// Compute the state that follows a move.
///
/// Wins are checked before a full board, so a move that completes a line on
/// the last empty cell is a win, not a tie.
///
/// # Errors
///
/// Returns [`Error::InternalInconsistency`] if both marks have a completed
/// line; no legal sequence of moves reaches such a board.
pub fn next_state(current: GameState, board: &Board) -> Result<GameState> {
    let x_wins = board.has_won(Mark::X);
    let o_wins = board.has_won(Mark::O);

    if x_wins && o_wins {
        return Err(Error::internal(format!(
            "Two winners (there can be only one): X on {:?}, O on {:?}",
            LineAnalyzer::completed_lines(&board.cells, Mark::X),
            LineAnalyzer::completed_lines(&board.cells, Mark::O),
        )));
    }

    if x_wins {
        return Ok(GameState::P1Win);
    }
    if o_wins {
        return Ok(GameState::P2Win);
    }
    if board.is_full() {
        return Ok(GameState::Tie);
    }

    Ok(match current {
        GameState::P1Next => GameState::P2Next,
        GameState::P2Next => GameState::P1Next,
        terminal => terminal,
    })
}

/// Route an action to the matching transition.
///
/// # Errors
///
/// Propagates the transition's error; a take on a missing game is
/// [`Error::NotFound`].
pub fn decide(action: &Action, existing: Option<&GameRecord>, signer: &str) -> Result<Outcome> {
    match action {
        Action::Create { name } => create_game(existing, name).map(Outcome::Store),
        Action::Delete { name } => delete_game(existing, name),
        Action::Take { name, space } => {
            let record = existing.ok_or_else(|| Error::NotFound { name: name.clone() })?;
            apply_move(record, signer, *space).map(Outcome::Store)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Cell;

    fn record_with(board: &str, state: GameState, p1: &str, p2: &str) -> GameRecord {
        GameRecord {
            name: "g1".to_string(),
            board: board.parse().unwrap(),
            state,
            player1: p1.to_string(),
            player2: p2.to_string(),
        }
    }

    #[test]
    fn test_create_game() {
        let game = create_game(None, "g1").unwrap();
        assert_eq!(game, GameRecord::new("g1"));
    }

    #[test]
    fn test_create_existing_game_fails() {
        let existing = GameRecord::new("g1");
        let err = create_game(Some(&existing), "g1").unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { ref name } if name == "g1"));
    }

    #[test]
    fn test_delete_game() {
        let existing = GameRecord::new("g1");
        assert_eq!(
            delete_game(Some(&existing), "g1").unwrap(),
            Outcome::Delete("g1".to_string())
        );
        assert!(matches!(
            delete_game(None, "g1").unwrap_err(),
            Error::NotFound { .. }
        ));
    }

    #[test]
    fn test_first_move_binds_player_one() {
        let game = GameRecord::new("g1");
        let next = apply_move(&game, "P1", 5).unwrap();

        assert_eq!(next.board.get(4), Cell::X);
        assert_eq!(next.state, GameState::P2Next);
        assert_eq!(next.player1, "P1");
        assert_eq!(next.player2, "");
        // Input untouched
        assert_eq!(game, GameRecord::new("g1"));
    }

    #[test]
    fn test_second_move_binds_player_two() {
        let game = record_with("----X----", GameState::P2Next, "P1", "");
        let next = apply_move(&game, "P2", 1).unwrap();

        assert_eq!(next.board.get(0), Cell::O);
        assert_eq!(next.state, GameState::P1Next);
        assert_eq!(next.player2, "P2");
    }

    #[test]
    fn test_terminal_state_rejected_first() {
        // Even an out-of-range space and a stranger get GameEnded
        let game = record_with("XXXOO----", GameState::P1Win, "P1", "P2");
        assert!(matches!(
            apply_move(&game, "P3", 10).unwrap_err(),
            Error::GameEnded
        ));
    }

    #[test]
    fn test_wrong_turn() {
        let game = record_with("----X-O--", GameState::P1Next, "P1", "P2");
        let err = apply_move(&game, "P3", 1).unwrap_err();
        assert!(matches!(err, Error::WrongTurn { .. }));

        let game = record_with("----X----", GameState::P2Next, "P1", "P2");
        let err = apply_move(&game, "P1", 1).unwrap_err();
        assert!(matches!(err, Error::WrongTurn { .. }));
    }

    #[test]
    fn test_wrong_turn_before_cell_check() {
        let game = record_with("----X-O--", GameState::P1Next, "P1", "P2");
        let err = apply_move(&game, "P2", 5).unwrap_err();
        assert!(matches!(err, Error::WrongTurn { .. }));
    }

    #[test]
    fn test_wrong_turn_truncates_signer() {
        let game = record_with("----X----", GameState::P2Next, "P1", "02deadbeef");
        let err = apply_move(&game, "03cafebabe", 1).unwrap_err();
        assert_eq!(err.to_string(), "not this player's turn: 03cafe");
    }

    #[test]
    fn test_cell_taken() {
        let game = record_with("----X----", GameState::P2Next, "P1", "");
        let err = apply_move(&game, "P2", 5).unwrap_err();
        assert!(matches!(err, Error::CellTaken { space: 5 }));
    }

    #[test]
    fn test_space_out_of_range() {
        let game = GameRecord::new("g1");
        for space in [0, 10, usize::MAX] {
            let err = apply_move(&game, "P1", space).unwrap_err();
            assert!(matches!(err, Error::InvalidInput { .. }), "space {space}");
        }
    }

    #[test]
    fn test_next_state_flips_turn() {
        let board: Board = "X--------".parse().unwrap();
        assert_eq!(
            next_state(GameState::P1Next, &board).unwrap(),
            GameState::P2Next
        );
        assert_eq!(
            next_state(GameState::P2Next, &board).unwrap(),
            GameState::P1Next
        );
    }

    #[test]
    fn test_next_state_wins() {
        let board: Board = "XXXOO----".parse().unwrap();
        assert_eq!(
            next_state(GameState::P1Next, &board).unwrap(),
            GameState::P1Win
        );

        let board: Board = "XX-OOOX--".parse().unwrap();
        assert_eq!(
            next_state(GameState::P2Next, &board).unwrap(),
            GameState::P2Win
        );
    }

    #[test]
    fn test_win_on_last_cell_beats_tie() {
        // X O X
        // O X O
        // O X X  <- X completes the diagonal on the last cell
        let board: Board = "XOXOXOOXX".parse().unwrap();
        assert_eq!(
            next_state(GameState::P1Next, &board).unwrap(),
            GameState::P1Win
        );
    }

    #[test]
    fn test_next_state_tie() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(next_state(GameState::P1Next, &board).unwrap(), GameState::Tie);
    }

    #[test]
    fn test_next_state_terminal_unchanged() {
        let board: Board = "X--------".parse().unwrap();
        for state in [GameState::P1Win, GameState::P2Win, GameState::Tie] {
            assert_eq!(next_state(state, &board).unwrap(), state);
        }
    }

    #[test]
    fn test_double_win_is_internal_error() {
        let board: Board = "XXXOOO---".parse().unwrap();
        let err = next_state(GameState::P1Next, &board).unwrap_err();
        assert!(matches!(err, Error::InternalInconsistency { .. }));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_decide_take_requires_game() {
        let action = Action::Take {
            name: "g1".to_string(),
            space: 1,
        };
        assert!(matches!(
            decide(&action, None, "P1").unwrap_err(),
            Error::NotFound { .. }
        ));
    }

    #[test]
    fn test_decide_routes_actions() {
        let create = Action::Create {
            name: "g1".to_string(),
        };
        let Outcome::Store(game) = decide(&create, None, "P1").unwrap() else {
            panic!("create should store a record");
        };

        let take = Action::Take {
            name: "g1".to_string(),
            space: 9,
        };
        let Outcome::Store(game) = decide(&take, Some(&game), "P1").unwrap() else {
            panic!("take should store a record");
        };
        assert_eq!(game.board.get(8), Cell::X);

        let delete = Action::Delete {
            name: "g1".to_string(),
        };
        assert_eq!(
            decide(&delete, Some(&game), "P2").unwrap(),
            Outcome::Delete("g1".to_string())
        );
    }

    #[test]
    fn test_action_accessors() {
        let take = Action::Take {
            name: "g1".to_string(),
            space: 3,
        };
        assert_eq!(take.name(), "g1");
        assert_eq!(take.keyword(), "take");
    }
}
