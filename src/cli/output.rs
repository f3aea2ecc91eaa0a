//! Output formatting for CLI

use serde::Serialize;

use crate::game::{GameRecord, display::short_id};

/// Flat, serializable view of a game for `--format json`
#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    pub name: String,
    pub board: String,
    pub state: String,
    pub player1: String,
    pub player2: String,
}

impl From<&GameRecord> for GameView {
    fn from(game: &GameRecord) -> Self {
        GameView {
            name: game.name.clone(),
            board: game.board.encode(),
            state: game.state.to_string(),
            player1: game.player1.clone(),
            player2: game.player2.clone(),
        }
    }
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// One line per game, column-aligned
pub fn game_row(game: &GameRecord) -> String {
    format!(
        "{:<20} {} {:<8} {:<6} {:<6}",
        game.name,
        game.board.encode(),
        game.state.as_str(),
        short_id(&game.player1),
        short_id(&game.player2)
    )
}

/// Header matching [`game_row`]
pub fn table_header() -> String {
    format!(
        "{:<20} {:<9} {:<8} {:<6} {:<6}",
        "GAME", "BOARD", "STATE", "P1", "P2"
    )
}
