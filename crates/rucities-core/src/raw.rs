// crates/rucities-core/src/raw.rs
//! Raw GeoNames rows, exactly as they appear in the tab-delimited dump.
//!
//! NOTE: This type mirrors the external dataset and may be subject to that
//! dataset's license. Nothing here is validated; conversion into
//! [`PlaceRecord`](crate::PlaceRecord) happens in `model::convert`.

/// Number of tab-separated columns in a GeoNames row.
pub const FIELD_COUNT: usize = 19;

/// One row of the dump, split but not parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceRaw {
    /// 1-based line number in the source, for error messages.
    pub line: usize,
    pub geonameid: String,
    pub name: String,
    pub asciiname: String,
    pub alternatenames: String,
    pub latitude: String,
    pub longitude: String,
    pub feature_class: String,
    pub feature_code: String,
    pub country_code: String,
    pub cc2: String,
    pub admin1_code: String,
    pub admin2_code: String,
    pub admin3_code: String,
    pub admin4_code: String,
    pub population: String,
    pub elevation: String,
    pub dem: String,
    pub timezone: String,
    pub modification_date: String,
}

impl PlaceRaw {
    /// Split one line on tabs. Returns `None` when the line has fewer than
    /// [`FIELD_COUNT`] columns; extra trailing columns are ignored.
    pub fn from_line(line_no: usize, line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let mut it = line.split('\t');
        let mut next = || it.next().map(str::to_owned);

        Some(PlaceRaw {
            line: line_no,
            geonameid: next()?,
            name: next()?,
            asciiname: next()?,
            alternatenames: next()?,
            latitude: next()?,
            longitude: next()?,
            feature_class: next()?,
            feature_code: next()?,
            country_code: next()?,
            cc2: next()?,
            admin1_code: next()?,
            admin2_code: next()?,
            admin3_code: next()?,
            admin4_code: next()?,
            population: next()?,
            elevation: next()?,
            dem: next()?,
            timezone: next()?,
            modification_date: next()?.trim_end().to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_all_columns_and_strips_newline() {
        let line = "524901\tMoscow\tMoscow\tMoskva,Москва\t55.75222\t37.61556\tP\tPPLC\tRU\t\t48\t\t\t\t10381222\t\t144\tEurope/Moscow\t2022-12-10\r\n";
        let raw = PlaceRaw::from_line(7, line).unwrap();
        assert_eq!(raw.line, 7);
        assert_eq!(raw.geonameid, "524901");
        assert_eq!(raw.alternatenames, "Moskva,Москва");
        assert_eq!(raw.cc2, "");
        assert_eq!(raw.timezone, "Europe/Moscow");
        assert_eq!(raw.modification_date, "2022-12-10");
    }

    #[test]
    fn short_line_is_rejected() {
        assert!(PlaceRaw::from_line(1, "1\tA\tA").is_none());
        assert!(PlaceRaw::from_line(1, "").is_none());
    }
}
