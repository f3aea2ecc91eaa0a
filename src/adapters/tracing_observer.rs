//! Observer that reports applied transactions as `tracing` events.

use tracing::{debug, info};

use crate::{
    game::{
        GameRecord,
        display::{boxed, short_id, summary},
    },
    ports::GameObserver,
};

/// Emits one `info` event per transaction and, when enabled, the rendered
/// board as boxed `debug` lines.
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver {
    show_board: bool,
}

impl TracingObserver {
    pub fn new(show_board: bool) -> Self {
        Self { show_board }
    }

    fn render(&self, message: &str) {
        if !self.show_board {
            return;
        }
        for line in boxed(message) {
            debug!("{line}");
        }
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new(true)
    }
}

impl GameObserver for TracingObserver {
    fn on_created(&self, game: &GameRecord, signer: &str) {
        info!(game = %game.name, signer = short_id(signer), "game created");
        self.render(&format!("Player {} created a game.", short_id(signer)));
    }

    fn on_taken(&self, game: &GameRecord, signer: &str, space: usize) {
        info!(
            game = %game.name,
            signer = short_id(signer),
            space,
            state = %game.state,
            "space taken"
        );
        self.render(&format!(
            "Player {} takes space: {space}\n\n{}",
            short_id(signer),
            summary(game)
        ));
    }

    fn on_deleted(&self, name: &str, signer: &str) {
        info!(game = name, signer = short_id(signer), "game deleted");
    }
}
