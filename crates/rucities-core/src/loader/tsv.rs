// crates/rucities-core/src/loader/tsv.rs
use crate::error::{GeoError, Result};
use crate::raw::{PlaceRaw, FIELD_COUNT};
use std::io::BufRead;

/// Split every non-blank line of a GeoNames dump into a [`PlaceRaw`].
///
/// Line numbers are 1-based and refer to the physical line in the input.
pub fn parse_rows<R: BufRead>(reader: R) -> Result<Vec<PlaceRaw>> {
    let mut rows = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        let row = PlaceRaw::from_line(line_no, &line).ok_or_else(|| {
            GeoError::InvalidData(format!(
                "line {line_no}: expected {FIELD_COUNT} tab-separated fields, found {}",
                line.split('\t').count()
            ))
        })?;
        rows.push(row);
    }
    Ok(rows)
}
