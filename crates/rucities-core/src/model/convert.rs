// crates/rucities-core/src/model/convert.rs
use super::flat::{PlaceRecord, RecordStore};
use crate::error::{GeoError, Result};
use crate::raw::PlaceRaw;
use crate::text::fold_key;
use crate::traits::GeoBackend;
use std::collections::HashMap;
use std::str::FromStr;

impl<B: GeoBackend> RecordStore<B> {
    /// **Standard Converter:** Raw rows -> validated store.
    ///
    /// Numeric columns are parsed here, once. The id sequence must already be
    /// strictly ascending; a duplicate or out-of-order id fails the whole load
    /// with [`GeoError::LoadInvariant`] rather than being re-sorted.
    pub fn build<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = PlaceRaw>,
    {
        let records = rows
            .into_iter()
            .map(|raw| from_raw::<B>(&raw))
            .collect::<Result<Vec<_>>>()?;

        Self::from_records(records)
    }

    /// Validates the id ordering and indexes aliases.
    pub fn from_records(records: Vec<PlaceRecord<B>>) -> Result<Self> {
        check_ids(&records)?;
        let aliases = index_aliases(&records);
        let search_keys = index_search_keys(&records);

        tracing::debug!(
            records = records.len(),
            aliases = aliases.len(),
            "record store built"
        );

        Ok(RecordStore {
            records,
            aliases,
            search_keys,
        })
    }
}

/// Convert one raw row, parsing numeric columns.
pub fn from_raw<B: GeoBackend>(raw: &PlaceRaw) -> Result<PlaceRecord<B>> {
    let line = raw.line;

    let latitude: f64 = parse_required(&raw.latitude, "latitude", line)?;
    let longitude: f64 = parse_required(&raw.longitude, "longitude", line)?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(GeoError::InvalidData(format!(
            "line {line}: coordinates must be finite"
        )));
    }

    Ok(PlaceRecord {
        id: parse_required(&raw.geonameid, "geonameid", line)?,
        name: B::str_from(&raw.name),
        ascii_name: B::str_from(&raw.asciiname),
        alternate_names: split_alternate_names(&raw.alternatenames)
            .map(B::str_from)
            .collect(),
        latitude: B::float_from(latitude),
        longitude: B::float_from(longitude),
        feature_class: B::str_from(&raw.feature_class),
        feature_code: B::str_from(&raw.feature_code),
        country_code: B::str_from(&raw.country_code),
        cc2: B::str_from(&raw.cc2),
        admin1_code: B::str_from(&raw.admin1_code),
        admin2_code: B::str_from(&raw.admin2_code),
        admin3_code: B::str_from(&raw.admin3_code),
        admin4_code: B::str_from(&raw.admin4_code),
        population: parse_optional(&raw.population, "population", line)?.unwrap_or(0),
        elevation: parse_optional(&raw.elevation, "elevation", line)?,
        dem: parse_optional(&raw.dem, "dem", line)?,
        timezone: B::str_from(raw.timezone.trim()),
        modification_date: B::str_from(raw.modification_date.trim_end()),
    })
}

fn parse_required<T: FromStr>(value: &str, field: &str, line: usize) -> Result<T> {
    value.trim().parse().map_err(|_| {
        GeoError::InvalidData(format!("line {line}: {field} {value:?} is not a valid number"))
    })
}

fn parse_optional<T: FromStr>(value: &str, field: &str, line: usize) -> Result<Option<T>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_required(value, field, line).map(Some)
}

fn split_alternate_names(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|a| !a.is_empty())
}

/// Ids must be strictly ascending (which also rules out duplicates).
pub(crate) fn check_ids<B: GeoBackend>(records: &[PlaceRecord<B>]) -> Result<()> {
    for (i, pair) in records.windows(2).enumerate() {
        let (prev, next) = (pair[0].id, pair[1].id);
        if next == prev {
            return Err(GeoError::LoadInvariant(format!(
                "duplicate id {next} at position {}",
                i + 1
            )));
        }
        if next < prev {
            return Err(GeoError::LoadInvariant(format!(
                "id {next} at position {} follows {prev}; ids must be ascending",
                i + 1
            )));
        }
    }
    Ok(())
}

/// Alias -> ascending record positions. A record that repeats an alias
/// (or lists its own name as an alternate) is indexed once.
pub(crate) fn index_aliases<B: GeoBackend>(records: &[PlaceRecord<B>]) -> HashMap<String, Vec<u32>> {
    let mut index: HashMap<String, Vec<u32>> = HashMap::new();
    for (pos, record) in records.iter().enumerate() {
        let pos = pos as u32;
        for alias in record.aliases() {
            let slot = index.entry(alias.to_owned()).or_default();
            if slot.last() != Some(&pos) {
                slot.push(pos);
            }
        }
    }
    index
}

/// Folded ascii name and aliases of every record, each list deduplicated.
pub(crate) fn index_search_keys<B: GeoBackend>(records: &[PlaceRecord<B>]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| {
            let mut keys: Vec<String> = Vec::new();
            for key in std::iter::once(record.ascii_name())
                .chain(record.aliases())
                .map(fold_key)
            {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
            keys
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DefaultBackend;
    use crate::model::DefaultStore;

    fn raw(line: usize, id: &str, name: &str, alts: &str) -> PlaceRaw {
        PlaceRaw {
            line,
            geonameid: id.into(),
            name: name.into(),
            asciiname: name.into(),
            alternatenames: alts.into(),
            latitude: "55.5".into(),
            longitude: "37.5".into(),
            population: "100".into(),
            timezone: "Europe/Moscow".into(),
            modification_date: "2020-01-01 ".into(),
            ..Default::default()
        }
    }

    #[test]
    fn parses_numeric_columns() {
        let mut r = raw(1, "42", "Город", "");
        r.latitude = "-3.5".into();
        r.elevation = "".into();
        r.dem = "-9999".into();
        let rec = from_raw::<DefaultBackend>(&r).unwrap();
        assert_eq!(rec.id, 42);
        assert_eq!(rec.latitude(), -3.5);
        assert_eq!(rec.elevation, None);
        assert_eq!(rec.dem, Some(-9999));
        assert_eq!(rec.modification_date, "2020-01-01");
    }

    #[test]
    fn empty_population_defaults_to_zero() {
        let mut r = raw(1, "1", "A", "");
        r.population = String::new();
        assert_eq!(from_raw::<DefaultBackend>(&r).unwrap().population, 0);
    }

    #[test]
    fn bad_latitude_names_the_line() {
        let mut r = raw(9, "1", "A", "");
        r.latitude = "north".into();
        let err = from_raw::<DefaultBackend>(&r).unwrap_err();
        assert!(matches!(&err, GeoError::InvalidData(m) if m.contains("line 9")));
    }

    #[test]
    fn non_finite_latitude_is_rejected() {
        let mut r = raw(1, "1", "A", "");
        r.latitude = "NaN".into();
        assert!(matches!(
            from_raw::<DefaultBackend>(&r),
            Err(GeoError::InvalidData(_))
        ));
    }

    #[test]
    fn unsorted_ids_fail_the_load() {
        let rows = vec![raw(1, "10", "A", ""), raw(2, "5", "B", "")];
        let err = DefaultStore::build(rows).unwrap_err();
        assert!(matches!(err, GeoError::LoadInvariant(_)));
    }

    #[test]
    fn duplicate_ids_fail_the_load() {
        let rows = vec![raw(1, "10", "A", ""), raw(2, "10", "B", "")];
        let err = DefaultStore::build(rows).unwrap_err();
        assert!(matches!(&err, GeoError::LoadInvariant(m) if m.contains("duplicate")));
    }

    #[test]
    fn alias_index_covers_name_and_alternates_once() {
        let rows = vec![
            raw(1, "1", "Alpha", "Альфа,Alpha,, Альфа "),
            raw(2, "2", "Beta", "Альфа"),
        ];
        let store = DefaultStore::build(rows).unwrap();
        assert_eq!(store.positions_by_alias("Alpha"), &[0]);
        assert_eq!(store.positions_by_alias("Альфа"), &[0, 1]);
        assert_eq!(store.positions_by_alias("alpha"), &[] as &[u32]);
        assert_eq!(store.record_at(0).unwrap().alternate_names().len(), 3);
    }

    #[test]
    fn search_keys_are_folded_once_per_record() {
        let rows = vec![
            raw(1, "1", "Moscow", "Москва,Moskva,MOSCOW"),
            raw(2, "2", "Omsk", ""),
        ];
        let store = DefaultStore::build(rows).unwrap();
        assert_eq!(store.search_keys_at(0), &["moscow", "moskva"]);
        assert_eq!(store.search_keys_at(1), &["omsk"]);
        assert!(store.search_keys_at(2).is_empty());
    }
}
