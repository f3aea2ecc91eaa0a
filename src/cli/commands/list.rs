//! List command - print every game in state

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{
    app::App,
    cli::output::{GameView, game_row, print_section, table_header},
};

#[derive(Parser, Debug)]
#[command(about = "List all games")]
pub struct ListArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = ListFormat::Text)]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Aligned table
    Text,
    /// JSON array
    Json,
}

pub fn execute(args: ListArgs, app: &App) -> Result<()> {
    let games = app.games()?;

    match args.format {
        ListFormat::Json => {
            let views: Vec<GameView> = games.iter().map(GameView::from).collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        ListFormat::Text => {
            print_section(&format!("{} game(s)", games.len()));
            println!("{}", table_header());
            for game in &games {
                println!("{}", game_row(game));
            }
        }
    }

    Ok(())
}
