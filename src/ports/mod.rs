//! Ports (trait boundaries) for external dependencies.
//!
//! The handler reaches the host runtime only through these traits: state is
//! read and written through a [`TransactionContext`], and progress is
//! reported to a [`GameObserver`]. Adapters in [`crate::adapters`]
//! implement them for local use and tests.

pub mod context;
pub mod observer;

pub use context::{StateQuery, TransactionContext};
pub use observer::{GameObserver, NoopObserver};
