//! Take command - place a mark on the board

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::App,
    cli::config::SignerArgs,
    game::{Action, display::summary},
};

#[derive(Parser, Debug)]
#[command(about = "Take a space in a game")]
pub struct TakeArgs {
    /// Name of the game
    pub name: String,

    /// Space to take, numbered 1-9 left to right, top to bottom
    pub space: usize,

    #[command(flatten)]
    pub signer: SignerArgs,
}

pub fn execute(args: TakeArgs, app: &App) -> Result<()> {
    let action = Action::Take {
        name: args.name,
        space: args.space,
    };
    app.execute(&args.signer.signer, &action)?;

    let game = app
        .game(action.name())?
        .with_context(|| format!("game {} missing after move", action.name()))?;
    println!("{}", summary(&game));
    Ok(())
}
