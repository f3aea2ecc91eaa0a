//! State context port.
//!
//! Mirrors the key-value view of global state that the host runtime hands to
//! a transaction handler. Addresses are 70-character lowercase hex strings.

use crate::Result;

/// Key-value access to global state for the duration of one transaction.
///
/// Methods take `&self`; implementations are expected to use interior
/// mutability, as the host runtime's own context does.
///
/// # Examples
///
/// ```
/// use bbci::adapters::InMemoryContext;
/// use bbci::ports::TransactionContext;
///
/// let context = InMemoryContext::new();
/// context.set_state_entry("abc".to_string(), b"data".to_vec())?;
/// assert_eq!(context.get_state_entry("abc")?, Some(b"data".to_vec()));
/// # Ok::<(), bbci::Error>(())
/// ```
pub trait TransactionContext {
    /// Read the entries present at `addresses`.
    ///
    /// Addresses with no entry are omitted from the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying state cannot be read.
    fn get_state_entries(&self, addresses: &[String]) -> Result<Vec<(String, Vec<u8>)>>;

    /// Write entries, replacing any existing data at their addresses.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying state cannot be written.
    fn set_state_entries(&self, entries: Vec<(String, Vec<u8>)>) -> Result<()>;

    /// Remove entries, returning the addresses that actually held data.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying state cannot be written.
    fn delete_state_entries(&self, addresses: &[String]) -> Result<Vec<String>>;

    /// Read a single entry.
    fn get_state_entry(&self, address: &str) -> Result<Option<Vec<u8>>> {
        Ok(self
            .get_state_entries(&[address.to_string()])?
            .into_iter()
            .map(|(_, data)| data)
            .next())
    }

    /// Write a single entry.
    fn set_state_entry(&self, address: String, data: Vec<u8>) -> Result<()> {
        self.set_state_entries(vec![(address, data)])
    }

    /// Remove a single entry, returning whether it existed.
    fn delete_state_entry(&self, address: &str) -> Result<bool> {
        Ok(!self
            .delete_state_entries(&[address.to_string()])?
            .is_empty())
    }
}

/// Read-only listing of global state, as served to clients.
///
/// The handler never enumerates state; this exists for tools that show
/// every game under the family's namespace.
pub trait StateQuery {
    /// All entries whose address starts with `prefix`, ordered by address.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying state cannot be read.
    fn list_state_entries(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>>;
}
