//! Configuration for assembling a processor.

use std::path::PathBuf;

/// Configuration for building an [`App`](super::App).
///
/// # Examples
///
/// ```
/// use bbci::app::ProcessorConfig;
///
/// let config = ProcessorConfig::new()
///     .with_state_path("games.msgpack")
///     .with_show_board(false);
/// assert!(config.state_path.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// MessagePack state file; `None` keeps state in memory
    pub state_path: Option<PathBuf>,
    /// Render the board into debug logs after each move
    pub show_board: bool,
}

impl ProcessorConfig {
    /// Defaults: in-memory state, board rendering on.
    pub fn new() -> Self {
        Self {
            state_path: None,
            show_board: true,
        }
    }

    /// Persist state to a MessagePack file.
    pub fn with_state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = Some(path.into());
        self
    }

    /// Enable or disable board rendering in logs.
    pub fn with_show_board(mut self, show_board: bool) -> Self {
        self.show_board = show_board;
        self
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::new()
    }
}
