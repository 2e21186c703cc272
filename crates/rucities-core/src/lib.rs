// crates/rucities-core/src/lib.rs
//! rucities-core
//! =============
//!
//! An immutable, in-memory index over the GeoNames dump for Russia
//! (`RU.txt`), with three read-only queries:
//!
//! - exact lookup by GeoNames id ([`CitySearch::find_by_id`]),
//! - stable 1-based paging ([`CitySearch::page`]),
//! - name resolution with population-based disambiguation, feeding a
//!   two-city comparison ([`CitySearch::compare_by_names`]).
//!
//! A [`RecordStore`] is built once and then only read, so it can be shared
//! between threads (e.g. behind an `Arc`) without locking.
//!
//! ```no_run
//! use rucities_core::prelude::*;
//!
//! let store = DefaultStore::load_from_path("RU.txt")?;
//! let page = store.page(1, 10)?;
//! for city in page.records {
//!     println!("{} {}", city.id(), city.name());
//! }
//! # Ok::<(), GeoError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api; // JSON views
pub mod common;
pub mod compare;
pub mod error;
pub mod loader; // The public loader
pub mod lookup;
pub mod model;
pub mod paginate;
pub mod resolve;
pub mod text;
pub mod traits;
// Raw input rows (used by the loader and by callers building stores by hand)
#[doc(hidden)]
pub mod raw;
#[cfg(test)]
mod testutil;

// Re-exports
pub use crate::common::{DbStats, DefaultBackend};
pub use crate::compare::{compare, CityComparison, Comparison, Side};
pub use crate::error::{GeoError, Result};
pub use crate::model::{DefaultStore, Page, PlaceRecord, RecordStore};
pub use crate::raw::PlaceRaw;
pub use crate::traits::{CitySearch, GeoBackend};

pub mod prelude {
    pub use crate::api::{ComparisonView, PageView, PlaceView};
    pub use crate::{
        CitySearch, DbStats, DefaultBackend, DefaultStore, GeoError, PlaceRecord, RecordStore,
        Result, Side,
    };
}
