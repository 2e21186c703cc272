// crates/rucities-core/src/paginate.rs
//! Fixed-size, 1-based paging over the id-ordered record sequence.

use crate::error::{GeoError, Result};
use crate::model::{Page, RecordStore};
use crate::traits::GeoBackend;

/// `ceil(size / page_size)` after checking `page_size` is in `1..=size`.
pub fn total_pages<B: GeoBackend>(store: &RecordStore<B>, page_size: usize) -> Result<usize> {
    let size = store.size();
    if page_size == 0 || page_size > size {
        return Err(GeoError::invalid_argument(format!(
            "page size must be between 1 and {size}, got {page_size}"
        )));
    }
    Ok(size.div_ceil(page_size))
}

/// The contiguous slice starting at `page_size * (page_number - 1)`.
pub fn page<B: GeoBackend>(
    store: &RecordStore<B>,
    page_number: usize,
    page_size: usize,
) -> Result<Page<'_, B>> {
    let total = total_pages(store, page_size)?;
    if page_number == 0 || page_number > total {
        return Err(GeoError::invalid_argument(format!(
            "page must be between 1 and {total}, got {page_number}"
        )));
    }

    let size = store.size();
    let start = page_size * (page_number - 1);
    let end = (start + page_size).min(size);

    Ok(Page {
        number: page_number,
        size: page_size,
        total_pages: total,
        total_records: size,
        records: &store.records()[start..end],
    })
}
