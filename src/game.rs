//! Grid game rules and records

pub mod board;
pub mod display;
pub mod engine;
pub mod lines;
pub mod record;

pub use board::{BOARD_SIZE, Board, Cell, Mark};
pub use engine::{Action, Outcome, apply_move, create_game, decide, delete_game, next_state};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use record::{GameRecord, GameState};
