// crates/rucities-core/src/common.rs
use crate::traits::GeoBackend;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the store.
///
/// Returned by [`CitySearch::stats`](crate::CitySearch::stats). `first_id` and
/// `last_id` are `None` only for an empty store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub records: usize,
    pub aliases: usize,
    pub first_id: Option<u32>,
    pub last_id: Option<u32>,
}

/// Default backend: plain `String` + `f64`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl GeoBackend for DefaultBackend {
    type Str = String;
    type Float = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn float_from(f: f64) -> Self::Float {
        f
    }

    #[inline]
    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }
}
