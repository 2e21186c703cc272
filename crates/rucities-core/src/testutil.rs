// crates/rucities-core/src/testutil.rs
//! Small builders for unit tests.

use crate::model::DefaultStore;
use crate::raw::PlaceRaw;

#[derive(Debug, Clone)]
pub(crate) struct Row {
    raw: PlaceRaw,
}

impl Row {
    pub fn new(id: u32, name: &str) -> Self {
        Row {
            raw: PlaceRaw {
                line: 0,
                geonameid: id.to_string(),
                name: name.into(),
                asciiname: name.into(),
                latitude: "55.0".into(),
                longitude: "37.0".into(),
                feature_class: "P".into(),
                feature_code: "PPL".into(),
                country_code: "RU".into(),
                population: "0".into(),
                timezone: "Europe/Moscow".into(),
                modification_date: "2020-01-01".into(),
                ..Default::default()
            },
        }
    }

    pub fn population(mut self, population: u64) -> Self {
        self.raw.population = population.to_string();
        self
    }

    pub fn alias(mut self, alias: &str) -> Self {
        if !self.raw.alternatenames.is_empty() {
            self.raw.alternatenames.push(',');
        }
        self.raw.alternatenames.push_str(alias);
        self
    }

    pub fn lat(mut self, latitude: f64) -> Self {
        self.raw.latitude = latitude.to_string();
        self
    }

    pub fn tz(mut self, timezone: &str) -> Self {
        self.raw.timezone = timezone.into();
        self
    }
}

pub(crate) fn store_from(rows: &[Row]) -> DefaultStore {
    let raws = rows.iter().enumerate().map(|(i, r)| PlaceRaw {
        line: i + 1,
        ..r.raw.clone()
    });
    DefaultStore::build(raws).expect("valid test rows")
}

pub(crate) fn store_with_ids(ids: &[u32]) -> DefaultStore {
    let rows: Vec<Row> = ids.iter().map(|&id| Row::new(id, &format!("city-{id}"))).collect();
    store_from(&rows)
}
