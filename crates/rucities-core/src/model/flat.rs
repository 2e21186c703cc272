// crates/rucities-core/src/model/flat.rs
use crate::traits::GeoBackend;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The master store.
///
/// One contiguous, id-sorted vector of records plus the alias index. Built
/// once by [`RecordStore::build`] (or decoded from a snapshot) and never
/// mutated afterwards, which is what makes it safe to share across threads.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RecordStore<B: GeoBackend> {
    /// Master list of all places. Sorted by id, no duplicates.
    pub(crate) records: Vec<PlaceRecord<B>>,

    /// Alias -> positions into `records`, ascending.
    /// Derived data: rebuilt on load instead of being stored in snapshots.
    #[serde(skip)]
    pub(crate) aliases: HashMap<String, Vec<u32>>,

    /// Folded search keys per record, aligned with `records`. Derived data.
    #[serde(skip)]
    pub(crate) search_keys: Vec<Vec<String>>,
}

/// A single GeoNames place.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PlaceRecord<B: GeoBackend> {
    pub id: u32,
    pub name: B::Str,
    pub ascii_name: B::Str,

    /// Alternate names in source order, empty pieces dropped.
    pub alternate_names: Vec<B::Str>,

    pub latitude: B::Float,
    pub longitude: B::Float,

    pub feature_class: B::Str,
    pub feature_code: B::Str,
    pub country_code: B::Str,
    pub cc2: B::Str,
    pub admin1_code: B::Str,
    pub admin2_code: B::Str,
    pub admin3_code: B::Str,
    pub admin4_code: B::Str,

    /// GeoNames uses 0 for "unknown"; so do we.
    pub population: u64,
    pub elevation: Option<i32>,
    /// Digital elevation model value (srtm3 / gtopo30).
    pub dem: Option<i32>,

    pub timezone: B::Str,
    pub modification_date: B::Str,
}

/// One page of [`RecordStore`] records, borrowed from the store.
#[derive(Clone, Debug)]
pub struct Page<'a, B: GeoBackend> {
    /// 1-based page number.
    pub number: usize,
    /// Requested page size; `records.len()` is smaller on the last page.
    pub size: usize,
    pub total_pages: usize,
    pub total_records: usize,
    pub records: &'a [PlaceRecord<B>],
}

impl<B: GeoBackend> RecordStore<B> {
    /// Number of records.
    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `position` in id order, if any.
    pub fn record_at(&self, position: usize) -> Option<&PlaceRecord<B>> {
        self.records.get(position)
    }

    /// All records, in id order.
    pub fn records(&self) -> &[PlaceRecord<B>] {
        &self.records
    }

    pub fn first_id(&self) -> Option<u32> {
        self.records.first().map(|r| r.id)
    }

    pub fn last_id(&self) -> Option<u32> {
        self.records.last().map(|r| r.id)
    }

    /// Positions of every record carrying `alias` (exact, case-sensitive),
    /// ascending. Empty when the alias is unknown.
    pub fn positions_by_alias(&self, alias: &str) -> &[u32] {
        self.aliases.get(alias).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct aliases in the index.
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Folded ascii name and aliases of the record at `position`.
    pub(crate) fn search_keys_at(&self, position: usize) -> &[String] {
        self.search_keys.get(position).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<B: GeoBackend> PlaceRecord<B> {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn ascii_name(&self) -> &str {
        self.ascii_name.as_ref()
    }

    pub fn alternate_names(&self) -> &[B::Str] {
        &self.alternate_names
    }

    pub fn latitude(&self) -> f64 {
        B::float_to_f64(self.latitude)
    }

    pub fn longitude(&self) -> f64 {
        B::float_to_f64(self.longitude)
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn timezone(&self) -> &str {
        self.timezone.as_ref()
    }

    pub fn country_code(&self) -> &str {
        self.country_code.as_ref()
    }

    pub fn feature_code(&self) -> &str {
        self.feature_code.as_ref()
    }

    /// The primary name followed by every alternate name.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name()).chain(
            self.alternate_names
                .iter()
                .map(<B::Str as AsRef<str>>::as_ref),
        )
    }
}

impl<B: GeoBackend> Page<'_, B> {
    pub fn is_last(&self) -> bool {
        self.number == self.total_pages
    }
}
