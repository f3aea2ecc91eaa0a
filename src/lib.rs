//! Transaction processor for the bbci family
//!
//! bbci is a two-player game on a 3x3 grid, played through signed
//! transactions. This crate provides:
//! - The game transition engine: create, delete and move validation
//! - Payload decoding and address-based game storage
//! - A transaction handler behind host-runtime traits (ports)
//! - In-memory and file-backed adapters plus a CLI for local play

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod game;
pub mod handler;
pub mod logging;
pub mod payload;
pub mod ports;
pub mod state;

pub use error::{Error, Result};
pub use game::{Action, GameRecord, GameState, Outcome};
pub use handler::{ApplyError, BbciHandler, FamilyMetadata, Transaction, TransactionHandler};
pub use payload::BbciPayload;
pub use state::{FAMILY_NAME, FAMILY_VERSION, GameStore};
