// crates/rucities-core/src/model/mod.rs
pub mod convert;
pub mod flat;
pub mod load;
pub mod search;

pub use crate::common::DefaultBackend;
pub use flat::{Page, PlaceRecord, RecordStore};

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "snap.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.snap.bin";

/// Convenient alias for the default backend.
pub type DefaultStore = RecordStore<DefaultBackend>;
