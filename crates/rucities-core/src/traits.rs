// crates/rucities-core/src/traits.rs
use crate::common::DbStats;
use crate::compare::CityComparison;
use crate::error::Result;
use crate::model::{Page, PlaceRecord};
use serde::{Deserialize, Serialize};

/// Storage backend for strings and floats used by the store.
///
/// This abstraction allows the crate to swap how textual and floating-point
/// data are stored internally (for example to use more compact types) without
/// changing the public API of accessors that return `&str`/`f64` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated types can be serialized/deserialized so stores can be cached
/// via bincode.
pub trait GeoBackend: Clone + Send + Sync + std::fmt::Debug + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;
    type Float: Copy + Send + Sync + std::fmt::Debug + Serialize + for<'de> Deserialize<'de>;

    fn str_from(s: &str) -> Self::Str;
    fn float_from(f: f64) -> Self::Float;
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
    fn float_to_f64(v: Self::Float) -> f64;
}

/// Read-only queries over a loaded store.
///
/// Every method is a pure function of `&self` and its arguments, so a single
/// store can be shared between any number of threads without locking.
pub trait CitySearch<B: GeoBackend> {
    fn stats(&self) -> DbStats;

    /// Exact lookup by GeoNames id.
    ///
    /// Ids outside `[first_id, last_id]` are rejected before searching, and
    /// an id that falls in a gap of the sequence is `NotFound` as well.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rucities_core::{CitySearch, DefaultStore};
    ///
    /// let store = DefaultStore::load_from_path("RU.txt").unwrap();
    /// let moscow = store.find_by_id(524901).unwrap();
    /// println!("{} ({})", moscow.name(), moscow.timezone());
    /// ```
    fn find_by_id(&self, id: i64) -> Result<&PlaceRecord<B>>;

    /// One 1-based page of the id-ordered record sequence.
    ///
    /// `page_size` must lie in `1..=size` and `page_number` in
    /// `1..=total_pages`; anything else is `InvalidArgument`. The last page
    /// may be shorter than `page_size`.
    fn page(&self, page_number: usize, page_size: usize) -> Result<Page<'_, B>>;

    /// `ceil(size / page_size)`, with the same validation as [`CitySearch::page`].
    fn total_pages(&self, page_size: usize) -> Result<usize>;

    /// Resolve an exact, case-sensitive alias to one record.
    ///
    /// Among several candidates the most populous wins; on equal population
    /// the one with the lowest id wins.
    fn resolve_by_name(&self, name: &str) -> Result<&PlaceRecord<B>>;

    /// Resolve both names, then compare the two cities.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rucities_core::{CitySearch, DefaultStore};
    ///
    /// let store = DefaultStore::load_from_path("RU.txt").unwrap();
    /// let cmp = store.compare_by_names("Москва", "Санкт-Петербург").unwrap();
    /// println!("northern: {}", cmp.northern_record().name());
    /// println!("same timezone: {}", cmp.same_timezone);
    /// ```
    fn compare_by_names<'a>(&'a self, first: &str, second: &str)
        -> Result<CityComparison<'a, B>>;

    /// Accent- and case-insensitive substring search over names and aliases.
    fn find_by_substring(&self, query: &str, limit: usize) -> Vec<&PlaceRecord<B>>;
}
