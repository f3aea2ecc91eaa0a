//! In-memory state context for testing.
//!
//! This adapter keeps global state in a shared map, so handlers can be
//! exercised without a validator or any file system I/O.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    Result,
    error::Error,
    ports::{StateQuery, TransactionContext},
};

type Entries = BTreeMap<String, Vec<u8>>;

/// In-memory state context.
///
/// # Examples
///
/// ```
/// use bbci::adapters::InMemoryContext;
/// use bbci::ports::TransactionContext;
///
/// let context = InMemoryContext::new();
/// context.set_state_entry("addr".to_string(), vec![1, 2, 3])?;
/// assert_eq!(context.count(), 1);
/// # Ok::<(), bbci::Error>(())
/// ```
///
/// # Thread Safety
///
/// This context is thread-safe and can be cloned and shared across threads.
/// All clones share the same underlying state.
#[derive(Clone, Default)]
pub struct InMemoryContext {
    entries: Arc<Mutex<Entries>>,
}

impl InMemoryContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context pre-populated with entries.
    pub fn with_entries(entries: impl IntoIterator<Item = (String, Vec<u8>)>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries.into_iter().collect())),
        }
    }

    /// Number of addresses holding data.
    pub fn count(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Check whether an address holds data.
    pub fn contains(&self, address: &str) -> bool {
        self.lock()
            .map(|entries| entries.contains_key(address))
            .unwrap_or(false)
    }

    /// Drop all state.
    pub fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Entries>> {
        self.entries.lock().map_err(|_| Error::Context {
            message: "in-memory state lock poisoned".to_string(),
        })
    }
}

impl TransactionContext for InMemoryContext {
    fn get_state_entries(&self, addresses: &[String]) -> Result<Vec<(String, Vec<u8>)>> {
        let entries = self.lock()?;
        Ok(addresses
            .iter()
            .filter_map(|address| {
                entries
                    .get(address)
                    .map(|data| (address.clone(), data.clone()))
            })
            .collect())
    }

    fn set_state_entries(&self, new_entries: Vec<(String, Vec<u8>)>) -> Result<()> {
        self.lock()?.extend(new_entries);
        Ok(())
    }

    fn delete_state_entries(&self, addresses: &[String]) -> Result<Vec<String>> {
        let mut entries = self.lock()?;
        Ok(addresses
            .iter()
            .filter(|address| entries.remove(address.as_str()).is_some())
            .cloned()
            .collect())
    }
}

impl StateQuery for InMemoryContext {
    fn list_state_entries(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>> {
        Ok(self
            .lock()?
            .range(prefix.to_string()..)
            .take_while(|(address, _)| address.starts_with(prefix))
            .map(|(address, data)| (address.clone(), data.clone()))
            .collect())
    }
}
