//! Dependency injection container for the processor.
//!
//! The container owns the state backend and the handler. Everything that
//! reads or writes games from outside the handler goes through it.

use std::sync::Arc;

use tracing::debug;

use super::config::ProcessorConfig;
use crate::{
    Error, Result,
    adapters::{InMemoryContext, MsgPackContext, TracingObserver},
    game::{Action, GameRecord},
    handler::{ApplyError, BbciHandler, Transaction, TransactionHandler},
    ports::{GameObserver, StateQuery, TransactionContext},
    state::{GameStore, decode_games, namespace},
};

/// Processor with its dependencies wired in.
///
/// # Examples
///
/// ## Testing with dependency injection
///
/// ```
/// use bbci::adapters::InMemoryContext;
/// use bbci::app::App;
/// use bbci::game::Action;
///
/// let state = InMemoryContext::new();
/// let app = App::for_testing().with_state(state.clone()).build();
///
/// app.execute("02abcdef", &Action::Create { name: "g1".to_string() })?;
/// assert_eq!(state.count(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct App {
    handler: BbciHandler,
    context: Arc<dyn TransactionContext + Send + Sync>,
    query: Arc<dyn StateQuery + Send + Sync>,
}

impl App {
    /// Create an app with in-memory state and tracing output.
    pub fn new() -> Self {
        AppBuilder::new().build()
    }

    /// Assemble an app from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured state file exists but cannot be read.
    pub fn from_config(config: &ProcessorConfig) -> Result<Self> {
        let builder =
            AppBuilder::new().with_observer(TracingObserver::new(config.show_board));

        let builder = match &config.state_path {
            Some(path) => {
                debug!(path = %path.display(), "using file-backed state");
                builder.with_state(MsgPackContext::open(path)?)
            }
            None => builder,
        };

        Ok(builder.build())
    }

    /// Create a builder for constructing an app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn handler(&self) -> &BbciHandler {
        &self.handler
    }

    /// Route a transaction to the handler.
    ///
    /// # Errors
    ///
    /// Rejects transactions for another family or an unsupported version,
    /// then reports whatever the handler reports.
    pub fn submit(&self, transaction: &Transaction) -> std::result::Result<(), ApplyError> {
        if !self.handler.metadata().accepts(&transaction.header) {
            return Err(Error::UnsupportedFamily {
                family: transaction.header.family_name.clone(),
                version: transaction.header.family_version.clone(),
            }
            .into());
        }
        self.handler.apply(transaction, self.context.as_ref())
    }

    /// Build, sign as `signer` and submit a transaction for `action`.
    pub fn execute(&self, signer: &str, action: &Action) -> std::result::Result<(), ApplyError> {
        self.submit(&Transaction::for_action(signer, action))
    }

    /// Read a game from current state.
    pub fn game(&self, name: &str) -> Result<Option<GameRecord>> {
        GameStore::new(self.context.as_ref()).get_game(name)
    }

    /// All games under the family namespace, ordered by name.
    pub fn games(&self) -> Result<Vec<GameRecord>> {
        let mut games = Vec::new();
        for (_, data) in self.query.list_state_entries(&namespace())? {
            games.extend(decode_games(&data)?.into_values());
        }
        games.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(games)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing an app with custom dependencies.
///
/// # Examples
///
/// ```
/// use bbci::app::AppBuilder;
/// use bbci::adapters::InMemoryContext;
/// use bbci::ports::NoopObserver;
///
/// let app = AppBuilder::new()
///     .with_state(InMemoryContext::new())
///     .with_observer(NoopObserver)
///     .build();
/// ```
pub struct AppBuilder {
    context: Option<Arc<dyn TransactionContext + Send + Sync>>,
    query: Option<Arc<dyn StateQuery + Send + Sync>>,
    observer: Option<Arc<dyn GameObserver>>,
}

impl AppBuilder {
    /// Create a new app builder.
    pub fn new() -> Self {
        Self {
            context: None,
            query: None,
            observer: None,
        }
    }

    /// Use `state` for both transaction processing and queries.
    pub fn with_state<S>(mut self, state: S) -> Self
    where
        S: TransactionContext + StateQuery + Send + Sync + 'static,
    {
        let shared = Arc::new(state);
        let context: Arc<dyn TransactionContext + Send + Sync> = shared.clone();
        let query: Arc<dyn StateQuery + Send + Sync> = shared;
        self.context = Some(context);
        self.query = Some(query);
        self
    }

    /// Report applied transactions to `observer`.
    pub fn with_observer<O: GameObserver + 'static>(mut self, observer: O) -> Self {
        let observer: Arc<dyn GameObserver> = Arc::new(observer);
        self.observer = Some(observer);
        self
    }

    /// Report applied transactions to an observer the caller keeps a handle on.
    pub fn with_shared_observer(mut self, observer: Arc<dyn GameObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Build the app with the configured dependencies.
    ///
    /// Unset dependencies default to `InMemoryContext` and `TracingObserver`.
    pub fn build(self) -> App {
        let (context, query) = match (self.context, self.query) {
            (Some(context), Some(query)) => (context, query),
            _ => {
                let shared = Arc::new(InMemoryContext::new());
                let context: Arc<dyn TransactionContext + Send + Sync> = shared.clone();
                let query: Arc<dyn StateQuery + Send + Sync> = shared;
                (context, query)
            }
        };

        let observer = self
            .observer
            .unwrap_or_else(|| Arc::new(TracingObserver::default()));

        App {
            handler: BbciHandler::new(observer),
            context,
            query,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
