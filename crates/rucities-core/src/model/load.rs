// crates/rucities-core/src/model/load.rs
use super::convert::{check_ids, index_aliases, index_search_keys};
use super::flat::RecordStore;
use crate::error::Result;
use crate::traits::GeoBackend;
use bincode::Options;

/// Upper bound for decoded snapshots, to refuse data bombs.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

impl<B: GeoBackend> RecordStore<B> {
    /// Reconstructs the store from an (uncompressed) bincode snapshot.
    ///
    /// Snapshots only carry the records. The id ordering is checked again and
    /// the alias index and search keys rebuilt, so a tampered snapshot fails
    /// exactly like a bad TSV would.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut store: RecordStore<B> = bincode::DefaultOptions::new()
            .with_limit(SNAPSHOT_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)?;

        check_ids(&store.records)?;
        store.aliases = index_aliases(&store.records);
        store.search_keys = index_search_keys(&store.records);
        Ok(store)
    }

    /// Encodes the records with the same options [`RecordStore::from_bytes`] expects.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let bytes = bincode::DefaultOptions::new()
            .with_limit(SNAPSHOT_LIMIT)
            .allow_trailing_bytes()
            .serialize(self)?;
        Ok(bytes)
    }
}
