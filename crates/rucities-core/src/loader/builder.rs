// crates/rucities-core/src/loader/builder.rs
#![cfg(feature = "builder")]

use super::common_io;
use crate::error::Result;
#[cfg(not(feature = "compact"))]
use crate::error::GeoError;
use crate::model::{DefaultBackend, RecordStore, CACHE_SUFFIX};

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip when the `compact` feature is on.
    pub fn preferred() -> Self {
        #[cfg(feature = "compact")]
        return CompressionMode::Gzip;
        #[cfg(not(feature = "compact"))]
        return CompressionMode::None;
    }
}

// -----------------------------------------------------------------------------
// RUNTIME HELPERS
// -----------------------------------------------------------------------------

impl RecordStore<DefaultBackend> {
    /// **Smart Load:** uses the snapshot next to `path` when it is newer
    /// than the dataset, otherwise parses the TSV and refreshes the snapshot.
    ///
    /// Writing the snapshot is best-effort; a read-only data directory only
    /// costs the speed-up.
    pub fn load_cached(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if super::is_snapshot(path) {
            return Self::load_from_path(path);
        }
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);

        // 1. Check Cache
        if is_cache_fresh(path, &cache_path) {
            match Self::load_from_path(&cache_path) {
                Ok(store) => return Ok(store),
                Err(e) => tracing::debug!(
                    cache = %cache_path.display(),
                    error = %e,
                    "snapshot unusable, rebuilding"
                ),
            }
        }

        // 2. Build
        let store = Self::load_from_path(path)?;

        // 3. Cache
        if let Err(e) = write_snapshot(&cache_path, &store, CompressionMode::preferred()) {
            tracing::warn!(cache = %cache_path.display(), error = %e, "could not write snapshot");
        }

        Ok(store)
    }

    /// Write a snapshot readable by `load_from_path` (give it a `.bin` name).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write_snapshot(path.as_ref(), self, CompressionMode::preferred())
    }

    pub fn save_as_with(&self, path: impl AsRef<Path>, compression: CompressionMode) -> Result<()> {
        write_snapshot(path.as_ref(), self, compression)
    }
}

/// The cache is fresh when it exists and is not older than the dataset.
fn is_cache_fresh(dataset: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(dataset).and_then(|m| m.modified()) {
        Ok(dataset_time) => dataset_time <= cache_time,
        // Dataset gone but snapshot present: the snapshot is all we have.
        Err(_) => true,
    }
}

// -----------------------------------------------------------------------------
// WRITER
// -----------------------------------------------------------------------------

fn write_snapshot(
    path: &Path,
    store: &RecordStore<DefaultBackend>,
    compression: CompressionMode,
) -> Result<()> {
    let bytes = store.to_bytes()?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                encoder.write_all(&bytes)?;
                // finish() writes the gzip trailer; dropping would swallow errors.
                encoder.finish()?.flush()?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(GeoError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => {
            writer.write_all(&bytes)?;
            writer.flush()?;
        }
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), ?compression, "snapshot written");
    Ok(())
}
