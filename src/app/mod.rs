//! Application layer with dependency injection container.
//!
//! The container owns the state backend and the handler, and is the single
//! entry point the CLI and integration tests use to submit transactions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           Application Layer (app)           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │       App (DI Container)             │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ owns                      │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Infrastructure (adapters)           │   │
//! │  │  - MsgPackContext                    │   │
//! │  │  - InMemoryContext (testing)         │   │
//! │  │  - TracingObserver                   │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ implements                │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Ports                               │   │
//! │  │  - TransactionContext, StateQuery    │   │
//! │  │  - GameObserver                      │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ used by                   │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Handler + game engine               │   │
//! │  └──────────────────────────────────────┘   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use bbci::app::{App, ProcessorConfig};
//! use bbci::game::Action;
//!
//! let app = App::from_config(&ProcessorConfig::new())?;
//! app.execute("02abcdef", &Action::Create { name: "g1".to_string() })?;
//! assert!(app.game("g1")?.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod container;

pub use config::ProcessorConfig;
pub use container::{App, AppBuilder};
