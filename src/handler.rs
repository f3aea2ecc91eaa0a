//! Transaction handler for the bbci family
//!
//! The handler is the seam between the host runtime and the game engine. It
//! decodes the payload, loads the target game through a [`GameStore`], asks
//! the engine for an [`Outcome`] and persists it. Nothing is written unless
//! every check has passed.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::{
    Error, Result,
    game::{Action, Outcome, engine},
    payload::BbciPayload,
    ports::{GameObserver, NoopObserver, TransactionContext},
    state::{FAMILY_NAME, FAMILY_VERSION, GameStore, namespace},
};

/// Header fields the handler relies on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionHeader {
    /// Public key of the signer; used as the acting identity
    pub signer_public_key: String,
    pub family_name: String,
    pub family_version: String,
}

/// A signed transaction as delivered by the host runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub header: TransactionHeader,
    pub payload: Vec<u8>,
}

impl Transaction {
    /// A bbci transaction carrying raw payload bytes
    pub fn new(signer_public_key: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Transaction {
            header: TransactionHeader {
                signer_public_key: signer_public_key.into(),
                family_name: FAMILY_NAME.to_string(),
                family_version: FAMILY_VERSION.to_string(),
            },
            payload: payload.into(),
        }
    }

    /// A bbci transaction for an already-built action
    pub fn for_action(signer_public_key: impl Into<String>, action: &Action) -> Self {
        Self::new(signer_public_key, BbciPayload::to_bytes(action))
    }
}

/// Failure reported back to the host runtime
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// The transaction is not valid; reject it and carry on
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),
    /// The processor itself is in a bad state; stop and surface it
    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<Error> for ApplyError {
    fn from(err: Error) -> Self {
        if err.is_validation() {
            ApplyError::InvalidTransaction(err.to_string())
        } else {
            ApplyError::InternalError(err.to_string())
        }
    }
}

/// Registration record the host runtime uses to route transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyMetadata {
    pub family_name: String,
    pub family_versions: Vec<String>,
    pub namespaces: Vec<String>,
}

impl FamilyMetadata {
    /// True if transactions with this header belong to the family
    pub fn accepts(&self, header: &TransactionHeader) -> bool {
        header.family_name == self.family_name
            && self.family_versions.contains(&header.family_version)
    }
}

/// Metadata for the bbci family
pub fn family_metadata() -> FamilyMetadata {
    FamilyMetadata {
        family_name: FAMILY_NAME.to_string(),
        family_versions: vec![FAMILY_VERSION.to_string()],
        namespaces: vec![namespace()],
    }
}

/// Contract between a transaction family and the host runtime.
pub trait TransactionHandler: Send + Sync {
    fn family_name(&self) -> String;

    fn family_versions(&self) -> Vec<String>;

    fn namespaces(&self) -> Vec<String>;

    /// Validate `transaction` and apply it to `context`.
    ///
    /// # Errors
    ///
    /// [`ApplyError::InvalidTransaction`] rejects the transaction without
    /// any state change; [`ApplyError::InternalError`] is fatal.
    fn apply(
        &self,
        transaction: &Transaction,
        context: &dyn TransactionContext,
    ) -> std::result::Result<(), ApplyError>;
}

/// Handler for the bbci family
#[derive(Clone)]
pub struct BbciHandler {
    metadata: FamilyMetadata,
    observer: Arc<dyn GameObserver>,
}

impl BbciHandler {
    /// Create a handler that reports to `observer`.
    pub fn new(observer: Arc<dyn GameObserver>) -> Self {
        Self {
            metadata: family_metadata(),
            observer,
        }
    }

    pub fn metadata(&self) -> &FamilyMetadata {
        &self.metadata
    }

    fn execute(&self, transaction: &Transaction, context: &dyn TransactionContext) -> Result<()> {
        let signer = transaction.header.signer_public_key.as_str();
        let payload = BbciPayload::from_bytes(&transaction.payload)?;
        debug!(
            game = payload.name(),
            action = payload.action.keyword(),
            "applying transaction"
        );

        let mut store = GameStore::new(context);
        let existing = store.get_game(payload.name())?;

        match engine::decide(&payload.action, existing.as_ref(), signer)? {
            Outcome::Store(game) => {
                store.set_game(&game)?;
                match payload.action {
                    Action::Take { space, .. } => self.observer.on_taken(&game, signer, space),
                    _ => self.observer.on_created(&game, signer),
                }
            }
            Outcome::Delete(name) => {
                store.delete_game(&name)?;
                self.observer.on_deleted(&name, signer);
            }
        }

        Ok(())
    }
}

impl Default for BbciHandler {
    fn default() -> Self {
        Self::new(Arc::new(NoopObserver))
    }
}

impl TransactionHandler for BbciHandler {
    fn family_name(&self) -> String {
        self.metadata.family_name.clone()
    }

    fn family_versions(&self) -> Vec<String> {
        self.metadata.family_versions.clone()
    }

    fn namespaces(&self) -> Vec<String> {
        self.metadata.namespaces.clone()
    }

    fn apply(
        &self,
        transaction: &Transaction,
        context: &dyn TransactionContext,
    ) -> std::result::Result<(), ApplyError> {
        self.execute(transaction, context).map_err(|err| {
            if err.is_validation() {
                warn!(error = %err, "transaction rejected");
            } else {
                error!(error = %err, "transaction failed");
            }
            ApplyError::from(err)
        })
    }
}
