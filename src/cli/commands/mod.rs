//! Subcommands of the `bbci` binary

pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod take;
