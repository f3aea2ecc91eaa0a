//! Human-readable rendering of games for logs and the CLI

use super::{board::Cell, record::GameRecord};

/// First six characters of a signer key, the way keys are shown to players
pub fn short_id(key: &str) -> &str {
    key.char_indices().nth(6).map_or(key, |(i, _)| &key[..i])
}

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        other => other.to_char(),
    }
}

/// Multi-line summary of a game: header fields, then the 3x3 grid.
///
/// ```
/// use bbci::game::{GameRecord, display::summary};
///
/// let text = summary(&GameRecord::new("g1"));
/// assert!(text.starts_with("GAME: g1\n"));
/// assert!(text.ends_with("  |   |  "));
/// ```
pub fn summary(game: &GameRecord) -> String {
    let rows: Vec<String> = game
        .board
        .rows()
        .map(|row| {
            row.iter()
                .map(|&c| cell_char(c).to_string())
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format!("GAME: {}\n", game.name));
    out.push_str(&format!("PLAYER 1: {}\n", short_id(&game.player1)));
    out.push_str(&format!("PLAYER 2: {}\n", short_id(&game.player2)));
    out.push_str(&format!("STATE: {}\n", game.state));
    out.push('\n');
    out.push_str(&rows.join("\n---|---|---\n"));
    out
}

/// Frame a message in a box, centering every line to the widest one.
pub fn boxed(message: &str) -> Vec<String> {
    let lines: Vec<&str> = message.split('\n').collect();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let border = format!("+{}+", "-".repeat(width + 2));

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(border.clone());
    for line in lines {
        out.push(format!("+ {line:^width$} +"));
    }
    out.push(border);
    out
}
