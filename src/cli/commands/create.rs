//! Create command - start a new game

use anyhow::Result;
use clap::Parser;

use crate::{app::App, cli::config::SignerArgs, game::Action};

#[derive(Parser, Debug)]
#[command(about = "Create a new game")]
pub struct CreateArgs {
    /// Unique name of the game
    pub name: String,

    #[command(flatten)]
    pub signer: SignerArgs,
}

pub fn execute(args: CreateArgs, app: &App) -> Result<()> {
    let action = Action::Create { name: args.name };
    app.execute(&args.signer.signer, &action)?;
    println!("Created game {}", action.name());
    Ok(())
}
