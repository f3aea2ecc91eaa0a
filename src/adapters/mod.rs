//! Adapters implementing domain ports.
//!
//! Stand-ins for the host runtime: in-memory and file-backed state contexts,
//! and an observer that renders games into `tracing` events.

pub mod in_memory_context;
pub mod msgpack_context;
pub mod tracing_observer;

pub use in_memory_context::InMemoryContext;
pub use msgpack_context::MsgPackContext;
pub use tracing_observer::TracingObserver;
