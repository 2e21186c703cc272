// crates/rucities-core/src/lookup.rs
//! Identifier lookup.

use crate::error::{GeoError, Result};
use crate::model::{PlaceRecord, RecordStore};
use crate::traits::GeoBackend;

/// Binary search for the record whose id is exactly `id`.
///
/// Ids outside `[first_id, last_id]` are rejected up front. Inside that range
/// the search converges on a candidate position which is then checked for
/// equality; a gap in the id sequence is `NotFound`, never a neighbour.
pub fn find_by_id<B: GeoBackend>(store: &RecordStore<B>, id: i64) -> Result<&PlaceRecord<B>> {
    let not_found = || GeoError::not_found(format!("Couldn't find any city by id {id}"));

    let (first, last) = match (store.first_id(), store.last_id()) {
        (Some(first), Some(last)) => (i64::from(first), i64::from(last)),
        _ => return Err(not_found()),
    };
    if id < first || id > last {
        return Err(not_found());
    }
    // In range, so it fits.
    let id = id as u32;

    let records = store.records();
    let (mut lo, mut hi) = (0usize, records.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if records[mid].id < id {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    match records.get(lo) {
        Some(record) if record.id == id => Ok(record),
        _ => Err(not_found()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::store_with_ids;

    #[test]
    fn finds_every_present_id() {
        let store = store_with_ids(&[3, 5, 8, 13, 21, 34]);
        for id in [3, 5, 8, 13, 21, 34] {
            assert_eq!(find_by_id(&store, id).unwrap().id, id as u32);
        }
    }

    #[test]
    fn gaps_are_not_found() {
        let store = store_with_ids(&[3, 5, 8, 13]);
        for id in [4, 6, 7, 9, 12] {
            assert!(matches!(find_by_id(&store, id), Err(GeoError::NotFound(_))));
        }
    }

    #[test]
    fn out_of_range_is_not_found() {
        let store = store_with_ids(&[3, 5, 8]);
        for id in [-1, 0, 2, 9, i64::MAX, i64::MIN] {
            assert!(matches!(find_by_id(&store, id), Err(GeoError::NotFound(_))));
        }
    }

    #[test]
    fn empty_store_finds_nothing() {
        let store = store_with_ids(&[]);
        assert!(find_by_id(&store, 1).is_err());
    }

    #[test]
    fn single_record() {
        let store = store_with_ids(&[7]);
        assert_eq!(find_by_id(&store, 7).unwrap().id, 7);
        assert!(find_by_id(&store, 6).is_err());
    }
}
