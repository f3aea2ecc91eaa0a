//! Game records as stored under a game's address

use std::{fmt, str::FromStr};

use super::board::{Board, Mark};

/// Progress of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Player 1 (`X`) moves next
    P1Next,
    /// Player 2 (`O`) moves next
    P2Next,
    P1Win,
    P2Win,
    Tie,
}

impl GameState {
    pub fn as_str(self) -> &'static str {
        match self {
            GameState::P1Next => "P1-NEXT",
            GameState::P2Next => "P2-NEXT",
            GameState::P1Win => "P1-WIN",
            GameState::P2Win => "P2-WIN",
            GameState::Tie => "TIE",
        }
    }

    /// Terminal states accept no further moves
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::P1Win | GameState::P2Win | GameState::Tie)
    }

    /// Mark placed by whoever moves in this state
    pub fn mark(self) -> Option<Mark> {
        match self {
            GameState::P1Next => Some(Mark::X),
            GameState::P2Next => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameState {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P1-NEXT" => Ok(GameState::P1Next),
            "P2-NEXT" => Ok(GameState::P2Next),
            "P1-WIN" => Ok(GameState::P1Win),
            "P2-WIN" => Ok(GameState::P2Win),
            "TIE" => Ok(GameState::Tie),
            other => Err(crate::Error::internal(format!("Unhandled state: {other}"))),
        }
    }
}

/// One named game.
///
/// Player slots hold the signer public key that bound them, or an empty
/// string while unbound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub name: String,
    pub board: Board,
    pub state: GameState,
    pub player1: String,
    pub player2: String,
}

impl GameRecord {
    /// A fresh game: empty board, player 1 to move, no players bound
    pub fn new(name: impl Into<String>) -> Self {
        GameRecord {
            name: name.into(),
            board: Board::new(),
            state: GameState::P1Next,
            player1: String::new(),
            player2: String::new(),
        }
    }

    /// `name,board,state,player1,player2`
    pub fn encode(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.name,
            self.board.encode(),
            self.state,
            self.player1,
            self.player2
        )
    }

    /// Parse one record from its stored form.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InternalInconsistency`] if the entry does not
    /// have exactly five fields or any field is malformed.
    pub fn decode(s: &str) -> Result<Self, crate::Error> {
        let fields: Vec<&str> = s.split(',').collect();
        let [name, board, state, player1, player2] = fields.as_slice() else {
            return Err(crate::Error::internal(format!(
                "Failed to deserialize game data: expected 5 fields, got {}",
                fields.len()
            )));
        };

        Ok(GameRecord {
            name: (*name).to_string(),
            board: board.parse()?,
            state: state.parse()?,
            player1: (*player1).to_string(),
            player2: (*player2).to_string(),
        })
    }
}
