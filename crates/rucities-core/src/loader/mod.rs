// crates/rucities-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (GeoNames TSV vs bincode snapshot).

use crate::error::Result;
use crate::model::{DefaultBackend, RecordStore};
use std::io::BufRead;
use std::path::{Path, PathBuf};

pub mod common_io;
pub mod tsv;

#[cfg(feature = "builder")]
pub mod builder;

pub use tsv::parse_rows;

pub const DATA_DUMP_URL: &str = "https://download.geonames.org/export/dump/RU.zip";

impl RecordStore<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "RU.txt"
    }

    pub fn get_3rd_party_data_url() -> &'static str {
        DATA_DUMP_URL
    }

    /// **Standard Loader:** picks the parser from the file name.
    ///
    /// - `*.bin` is read as a snapshot written by `save_as`.
    /// - Anything else is a GeoNames TSV dump (optionally gzip-compressed).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let store = if is_snapshot(path) {
            let data = common_io::read_all(path)?;
            Self::from_bytes(&data)?
        } else {
            Self::load_tsv(common_io::open_stream(path)?)?
        };

        tracing::info!(
            path = %path.display(),
            records = store.size(),
            aliases = store.alias_count(),
            "dataset loaded"
        );
        Ok(store)
    }

    /// Parse a GeoNames dump from any buffered reader and build the store.
    pub fn load_tsv<R: BufRead>(reader: R) -> Result<Self> {
        Self::build(parse_rows(reader)?)
    }
}

pub(crate) fn is_snapshot(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "bin")
}
