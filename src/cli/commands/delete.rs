//! Delete command - remove a game from state

use anyhow::Result;
use clap::Parser;

use crate::{app::App, cli::config::SignerArgs, game::Action};

#[derive(Parser, Debug)]
#[command(about = "Delete an existing game")]
pub struct DeleteArgs {
    /// Name of the game to delete
    pub name: String,

    #[command(flatten)]
    pub signer: SignerArgs,
}

pub fn execute(args: DeleteArgs, app: &App) -> Result<()> {
    let action = Action::Delete { name: args.name };
    app.execute(&args.signer.signer, &action)?;
    println!("Deleted game {}", action.name());
    Ok(())
}
