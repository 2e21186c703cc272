// crates/rucities-core/src/api.rs
//! Owned, serializable views for JSON output.
//!
//! Field names follow the GeoNames column names so the output reads like the
//! dump it came from.

use crate::compare::{CityComparison, Side};
use crate::model::{Page, PlaceRecord};
use crate::traits::GeoBackend;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceView {
    pub geonameid: u32,
    pub name: String,
    pub asciiname: String,
    pub alternatenames: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub feature_class: String,
    pub feature_code: String,
    pub country_code: String,
    pub cc2: String,
    pub admin1_code: String,
    pub admin2_code: String,
    pub admin3_code: String,
    pub admin4_code: String,
    pub population: u64,
    pub elevation: Option<i32>,
    pub dem: Option<i32>,
    pub timezone: String,
    pub modification_date: String,
}

impl<B: GeoBackend> From<&PlaceRecord<B>> for PlaceView {
    fn from(r: &PlaceRecord<B>) -> Self {
        PlaceView {
            geonameid: r.id,
            name: B::str_to_string(&r.name),
            asciiname: B::str_to_string(&r.ascii_name),
            alternatenames: r.alternate_names.iter().map(B::str_to_string).collect(),
            latitude: r.latitude(),
            longitude: r.longitude(),
            feature_class: B::str_to_string(&r.feature_class),
            feature_code: B::str_to_string(&r.feature_code),
            country_code: B::str_to_string(&r.country_code),
            cc2: B::str_to_string(&r.cc2),
            admin1_code: B::str_to_string(&r.admin1_code),
            admin2_code: B::str_to_string(&r.admin2_code),
            admin3_code: B::str_to_string(&r.admin3_code),
            admin4_code: B::str_to_string(&r.admin4_code),
            population: r.population,
            elevation: r.elevation,
            dem: r.dem,
            timezone: B::str_to_string(&r.timezone),
            modification_date: B::str_to_string(&r.modification_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub page: usize,
    pub count: usize,
    pub total_pages: usize,
    pub total_records: usize,
    pub cities: Vec<PlaceView>,
}

impl<B: GeoBackend> From<&Page<'_, B>> for PageView {
    fn from(p: &Page<'_, B>) -> Self {
        PageView {
            page: p.number,
            count: p.size,
            total_pages: p.total_pages,
            total_records: p.total_records,
            cities: p.records.iter().map(PlaceView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    pub first: PlaceView,
    pub second: PlaceView,
    pub northern: Side,
    /// Name of the northern city, as displayed in the store.
    pub northern_name: String,
    pub same_timezone: bool,
}

impl<B: GeoBackend> From<&CityComparison<'_, B>> for ComparisonView {
    fn from(c: &CityComparison<'_, B>) -> Self {
        ComparisonView {
            first: PlaceView::from(c.first),
            second: PlaceView::from(c.second),
            northern: c.northern,
            northern_name: c.northern_record().name().to_owned(),
            same_timezone: c.same_timezone,
        }
    }
}
