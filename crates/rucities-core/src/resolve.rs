// crates/rucities-core/src/resolve.rs
//! Name resolution with population-based disambiguation.

use crate::error::{GeoError, Result};
use crate::model::{PlaceRecord, RecordStore};
use crate::traits::GeoBackend;

/// Resolve `name` to a single record.
///
/// Candidates are all records carrying `name` as an exact alias. The most
/// populous one wins; on equal population the earliest in id order wins.
pub fn resolve_by_name<'a, B: GeoBackend>(
    store: &'a RecordStore<B>,
    name: &str,
) -> Result<&'a PlaceRecord<B>> {
    let mut best: Option<&PlaceRecord<B>> = None;

    // Positions are ascending, so a strict `>` keeps the first of equals.
    for &pos in store.positions_by_alias(name) {
        let Some(candidate) = store.record_at(pos as usize) else {
            continue;
        };
        match best {
            Some(current) if candidate.population <= current.population => {}
            _ => best = Some(candidate),
        }
    }

    best.ok_or_else(|| GeoError::not_found(format!("Couldn't find any city named {name:?}")))
}
