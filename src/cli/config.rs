//! Shared configuration for CLI commands

use std::path::PathBuf;

use clap::Args;

use crate::app::ProcessorConfig;

/// Options accepted by every command
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// MessagePack file holding global state
    #[arg(
        long,
        global = true,
        env = "BBCI_STATE",
        default_value = "bbci-state.msgpack"
    )]
    pub state: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Skip rendering the board into debug logs
    #[arg(long, global = true)]
    pub no_board: bool,
}

impl GlobalArgs {
    pub fn processor_config(&self) -> ProcessorConfig {
        ProcessorConfig::new()
            .with_state_path(self.state.clone())
            .with_show_board(!self.no_board)
    }
}

/// Identity that signs a transaction
#[derive(Args, Debug, Clone)]
pub struct SignerArgs {
    /// Public key used as the acting identity
    #[arg(long, short = 's', env = "BBCI_SIGNER")]
    pub signer: String,
}
