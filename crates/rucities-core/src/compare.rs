// crates/rucities-core/src/compare.rs
//! Two-city comparison: which one lies further north, and whether they share
//! a timezone.

use crate::model::PlaceRecord;
use crate::traits::GeoBackend;
use serde::{Deserialize, Serialize};

/// Which argument of a comparison a fact refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}

/// Facts derived from two already-resolved records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub northern: Side,
    pub same_timezone: bool,
}

/// A [`Comparison`] together with the records it was computed from.
#[derive(Debug, Clone)]
pub struct CityComparison<'a, B: GeoBackend> {
    pub first: &'a PlaceRecord<B>,
    pub second: &'a PlaceRecord<B>,
    pub northern: Side,
    pub same_timezone: bool,
}

impl<'a, B: GeoBackend> CityComparison<'a, B> {
    pub fn new(first: &'a PlaceRecord<B>, second: &'a PlaceRecord<B>) -> Self {
        let Comparison {
            northern,
            same_timezone,
        } = compare(first, second);
        CityComparison {
            first,
            second,
            northern,
            same_timezone,
        }
    }

    /// The record on the [`Side`] named by `northern`.
    pub fn northern_record(&self) -> &'a PlaceRecord<B> {
        match self.northern {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }
}

/// Compare two records.
///
/// `northern` is `First` only when the first latitude is strictly greater;
/// equal latitudes go to `Second`. Latitudes are compared as numbers.
/// `same_timezone` is exact string equality of the IANA identifiers.
pub fn compare<B: GeoBackend>(first: &PlaceRecord<B>, second: &PlaceRecord<B>) -> Comparison {
    let northern = if first.latitude() > second.latitude() {
        Side::First
    } else {
        Side::Second
    };

    Comparison {
        northern,
        same_timezone: first.timezone() == second.timezone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{store_from, Row};

    #[test]
    fn moscow_vs_petersburg() {
        let store = store_from(&[
            Row::new(1, "Москва").lat(55.75).tz("Europe/Moscow"),
            Row::new(2, "Санкт-Петербург").lat(59.93).tz("Europe/St_Petersburg"),
        ]);
        let (a, b) = (store.record_at(0).unwrap(), store.record_at(1).unwrap());

        let c = compare(a, b);
        assert_eq!(c.northern, Side::Second);
        assert!(!c.same_timezone);

        assert_eq!(compare(b, a).northern, Side::First);
    }

    #[test]
    fn same_timezone() {
        let store = store_from(&[
            Row::new(1, "A").lat(55.75).tz("Europe/Moscow"),
            Row::new(2, "B").lat(59.93).tz("Europe/Moscow"),
        ]);
        let c = compare(store.record_at(0).unwrap(), store.record_at(1).unwrap());
        assert!(c.same_timezone);
    }

    #[test]
    fn negative_latitudes_compare_numerically() {
        // "-3.5" > "12.1" as strings; numerically it is further south.
        let store = store_from(&[Row::new(1, "S").lat(-3.5), Row::new(2, "N").lat(12.1)]);
        let c = compare(store.record_at(0).unwrap(), store.record_at(1).unwrap());
        assert_eq!(c.northern, Side::Second);
        let c = compare(store.record_at(1).unwrap(), store.record_at(0).unwrap());
        assert_eq!(c.northern, Side::First);
    }

    #[test]
    fn equal_latitude_goes_to_second() {
        let store = store_from(&[Row::new(1, "A").lat(60.0), Row::new(2, "B").lat(60.0)]);
        let (a, b) = (store.record_at(0).unwrap(), store.record_at(1).unwrap());
        assert_eq!(compare(a, b).northern, Side::Second);
        assert_eq!(compare(b, a).northern, Side::Second);
    }

    #[test]
    fn northern_record_follows_side() {
        let store = store_from(&[Row::new(1, "A").lat(61.0), Row::new(2, "B").lat(60.0)]);
        let cmp = CityComparison::new(store.record_at(0).unwrap(), store.record_at(1).unwrap());
        assert_eq!(cmp.northern_record().id, 1);
    }
}
