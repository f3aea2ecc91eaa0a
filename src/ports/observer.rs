//! Observer port - reporting of applied transactions
//!
//! The handler calls an observer after each action it has persisted. What
//! the observer does with the notification (log it, print it, count it) is
//! not part of the transaction's outcome, so the hooks cannot fail it.

use crate::game::GameRecord;

/// Observer trait for applied transactions.
///
/// Every hook has an empty default, so implementations override only what
/// they care about.
///
/// # Event Sequence
///
/// Exactly one hook is called per successful transaction, after state has
/// been written. Rejected transactions produce no call.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use bbci::{game::GameRecord, ports::GameObserver};
///
/// #[derive(Default)]
/// struct MoveCounter {
///     moves: AtomicUsize,
/// }
///
/// impl GameObserver for MoveCounter {
///     fn on_taken(&self, _game: &GameRecord, _signer: &str, _space: usize) {
///         self.moves.fetch_add(1, Ordering::Relaxed);
///     }
/// }
/// ```
pub trait GameObserver: Send + Sync {
    /// Called after a game is created.
    fn on_created(&self, _game: &GameRecord, _signer: &str) {}

    /// Called after a move is stored.
    ///
    /// # Parameters
    ///
    /// * `game` - Record as stored after the move
    /// * `signer` - Key of the player who moved
    /// * `space` - 1-based space that was taken
    fn on_taken(&self, _game: &GameRecord, _signer: &str, _space: usize) {}

    /// Called after a game is deleted.
    fn on_deleted(&self, _name: &str, _signer: &str) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}
