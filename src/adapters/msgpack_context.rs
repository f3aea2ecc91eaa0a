//! File-backed state context using MessagePack.
//!
//! Global state is kept as one MessagePack-encoded map from address to
//! entry bytes. Every write rewrites the file, so state survives between
//! separate runs of the CLI.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

use tracing::debug;

use crate::{
    Result,
    error::Error,
    ports::{StateQuery, TransactionContext},
};

type Entries = BTreeMap<String, Vec<u8>>;

/// MessagePack file state context.
///
/// # Examples
///
/// ```no_run
/// use bbci::adapters::MsgPackContext;
/// use bbci::ports::TransactionContext;
///
/// let context = MsgPackContext::open("bbci-state.msgpack")?;
/// context.set_state_entry("addr".to_string(), b"data".to_vec())?;
///
/// // A later run sees the same entry
/// let reopened = MsgPackContext::open("bbci-state.msgpack")?;
/// assert!(reopened.get_state_entry("addr")?.is_some());
/// # Ok::<(), bbci::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MsgPackContext {
    path: PathBuf,
    entries: Arc<Mutex<Entries>>,
}

impl MsgPackContext {
    /// Open the state file at `path`, starting empty if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let file = File::open(&path).map_err(|source| Error::Io {
                operation: format!("open state file {path:?}"),
                source,
            })?;
            rmp_serde::decode::from_read(file).map_err(|e| Error::SerializationContext {
                operation: "deserialize state from MessagePack".to_string(),
                message: e.to_string(),
            })?
        } else {
            debug!(path = %path.display(), "state file missing, starting empty");
            Entries::new()
        };

        Ok(Self {
            path,
            entries: Arc::new(Mutex::new(entries)),
        })
    }

    /// Location of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, Entries>> {
        self.entries.lock().map_err(|_| Error::Context {
            message: format!("state lock for {:?} poisoned", self.path),
        })
    }

    fn persist(&self, entries: &Entries) -> Result<()> {
        let file = File::create(&self.path).map_err(|source| Error::Io {
            operation: format!("create state file {:?}", self.path),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write(&mut writer, entries).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize state to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush state file {:?}", self.path),
            source,
        })?;

        debug!(path = %self.path.display(), entries = entries.len(), "state file written");
        Ok(())
    }
}

impl TransactionContext for MsgPackContext {
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
        let mut entries = self.lock()?;
        let mut staged = entries.clone();
        staged.extend(new_entries);
        self.persist(&staged)?;
        *entries = staged;
        Ok(())
    }

    fn delete_state_entries(&self, addresses: &[String]) -> Result<Vec<String>> {
        let mut entries = self.lock()?;
        let mut staged = entries.clone();
        let deleted: Vec<String> = addresses
            .iter()
            .filter(|address| staged.remove(address.as_str()).is_some())
            .cloned()
            .collect();
        if !deleted.is_empty() {
            self.persist(&staged)?;
            *entries = staged;
        }
        Ok(deleted)
    }
}

impl StateQuery for MsgPackContext {
    fn list_state_entries(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>> {
        Ok(self
            .lock()?
            .range(prefix.to_string()..)
            .take_while(|(address, _)| address.starts_with(prefix))
            .map(|(address, data)| (address.clone(), data.clone()))
            .collect())
    }
}
