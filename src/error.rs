//! Error types for the bbci crate

use thiserror::Error;

/// Main error type for the bbci crate
///
/// Variants fall into two tiers. Validation errors describe a transaction
/// that is not acceptable under the current rules and must be rejected
/// without persisting anything. Everything else is fatal: the processor's
/// own invariants or its infrastructure failed.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action: game already exists: {name}")]
    AlreadyExists { name: String },

    #[error("invalid action: game does not exist: {name}")]
    NotFound { name: String },

    #[error("invalid action: game has ended")]
    GameEnded,

    #[error("not this player's turn: {signer}")]
    WrongTurn { signer: String },

    #[error("invalid action: space {space} already taken")]
    CellTaken { space: usize },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("unsupported transaction family {family} version {version}")]
    UnsupportedFamily { family: String, version: String },

    #[error("internal consistency error: {message}")]
    InternalInconsistency { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("state context error: {message}")]
    Context { message: String },
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Error::InternalInconsistency {
            message: message.into(),
        }
    }

    /// True when the error rejects the transaction rather than the processor.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::AlreadyExists { .. }
                | Error::NotFound { .. }
                | Error::GameEnded
                | Error::WrongTurn { .. }
                | Error::CellTaken { .. }
                | Error::InvalidInput { .. }
                | Error::UnsupportedFamily { .. }
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
