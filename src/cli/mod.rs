//! CLI infrastructure for the bbci processor
//!
//! Each subcommand builds a transaction (or a query) and runs it against a
//! file-backed state through the [`App`](crate::app::App) container.

pub mod commands;
pub mod config;
pub mod output;
