//! Show command - print one game

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{app::App, game::display::summary};

#[derive(Parser, Debug)]
#[command(about = "Show the board and players of a game")]
pub struct ShowArgs {
    /// Name of the game
    pub name: String,
}

pub fn execute(args: ShowArgs, app: &App) -> Result<()> {
    let game = app
        .game(&args.name)?
        .ok_or_else(|| anyhow!("no such game: {}", args.name))?;
    println!("{}", summary(&game));
    Ok(())
}
