//! Game storage on top of a [`TransactionContext`]
//!
//! Each game lives at an address derived from its name. Distinct names can
//! hash to the same address, so an entry holds every game at that address:
//! encoded records, sorted, joined with `|`.

use std::collections::{BTreeMap, HashMap};

use sha2::{Digest, Sha512};
use tracing::{debug, trace};

use crate::{Error, Result, game::GameRecord, ports::TransactionContext};

/// Transaction family served by this processor
pub const FAMILY_NAME: &str = "bbci";

/// Payload version understood by this processor
pub const FAMILY_VERSION: &str = "1.0";

fn sha512_hex(data: &[u8]) -> String {
    hex::encode(Sha512::digest(data))
}

/// Six-character address prefix owned by the family
pub fn namespace() -> String {
    sha512_hex(FAMILY_NAME.as_bytes())[..6].to_string()
}

/// Address of the entry that holds game `name`
pub fn game_address(name: &str) -> String {
    namespace() + &sha512_hex(name.as_bytes())[..64]
}

/// Decode every game held in one state entry.
///
/// # Errors
///
/// Returns [`Error::InternalInconsistency`] if the entry is not valid UTF-8
/// or any record in it is malformed.
pub fn decode_games(data: &[u8]) -> Result<BTreeMap<String, GameRecord>> {
    let text = std::str::from_utf8(data)
        .map_err(|e| Error::internal(format!("Failed to deserialize game data: {e}")))?;

    text.split('|')
        .map(|entry| GameRecord::decode(entry).map(|game| (game.name.clone(), game)))
        .collect()
}

/// Encode games for one state entry.
pub fn encode_games<'a>(games: impl IntoIterator<Item = &'a GameRecord>) -> Vec<u8> {
    let mut entries: Vec<String> = games.into_iter().map(GameRecord::encode).collect();
    entries.sort();
    entries.join("|").into_bytes()
}

/// Reads and writes games for a single transaction.
///
/// Entries are cached by address, so each address is read from the context
/// at most once per store.
pub struct GameStore<'a, C: TransactionContext + ?Sized> {
    context: &'a C,
    address_cache: HashMap<String, Option<Vec<u8>>>,
}

impl<'a, C: TransactionContext + ?Sized> GameStore<'a, C> {
    pub fn new(context: &'a C) -> Self {
        Self {
            context,
            address_cache: HashMap::new(),
        }
    }

    /// Look up a game by name.
    pub fn get_game(&mut self, name: &str) -> Result<Option<GameRecord>> {
        let mut games = self.load_games(&game_address(name))?;
        Ok(games.remove(name))
    }

    /// Store a game, replacing any game with the same name.
    pub fn set_game(&mut self, game: &GameRecord) -> Result<()> {
        let address = game_address(&game.name);
        let mut games = self.load_games(&address)?;
        games.insert(game.name.clone(), game.clone());
        self.store_games(address, &games)
    }

    /// Remove a game. The entry is deleted once no game is left in it.
    pub fn delete_game(&mut self, name: &str) -> Result<()> {
        let address = game_address(name);
        let mut games = self.load_games(&address)?;
        games.remove(name);
        self.store_games(address, &games)
    }

    fn load_games(&mut self, address: &str) -> Result<BTreeMap<String, GameRecord>> {
        let data = match self.address_cache.get(address) {
            Some(cached) => cached.clone(),
            None => {
                trace!(address, "reading state entry");
                let data = self.context.get_state_entry(address)?;
                self.address_cache
                    .insert(address.to_string(), data.clone());
                data
            }
        };

        match data {
            Some(bytes) => decode_games(&bytes),
            None => Ok(BTreeMap::new()),
        }
    }

    fn store_games(&mut self, address: String, games: &BTreeMap<String, GameRecord>) -> Result<()> {
        if games.is_empty() {
            debug!(address = %address, "deleting empty state entry");
            self.context.delete_state_entry(&address)?;
            self.address_cache.insert(address, None);
            return Ok(());
        }

        let data = encode_games(games.values());
        debug!(address = %address, games = games.len(), "writing state entry");
        self.context.set_state_entry(address.clone(), data.clone())?;
        self.address_cache.insert(address, Some(data));
        Ok(())
    }
}
