//! bbci CLI - submit bbci transactions against a local state file
//!
//! Each invocation applies one transaction (or runs one query) and exits.
//! Rejected transactions exit non-zero with the rejection reason.

use anyhow::Result;
use bbci::{
    app::App,
    cli::{
        commands::{
            create::{self, CreateArgs},
            delete::{self, DeleteArgs},
            list::{self, ListArgs},
            show::{self, ShowArgs},
            take::{self, TakeArgs},
        },
        config::GlobalArgs,
    },
    logging,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bbci")]
#[command(version, about = "Play bbci games through the transaction processor", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new game
    Create(CreateArgs),

    /// Take a space in a game
    Take(TakeArgs),

    /// Delete a game
    Delete(DeleteArgs),

    /// Show one game
    Show(ShowArgs),

    /// List all games
    List(ListArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    let app = App::from_config(&cli.global.processor_config())?;

    match cli.command {
        Commands::Create(args) => create::execute(args, &app),
        Commands::Take(args) => take::execute(args, &app),
        Commands::Delete(args) => delete::execute(args, &app),
        Commands::Show(args) => show::execute(args, &app),
        Commands::List(args) => list::execute(args, &app),
    }
}
