#![cfg(feature = "builder")]

use rucities_core::api::PlaceView;
use rucities_core::loader::builder::CompressionMode;
use rucities_core::loader::common_io::get_cache_path;
use rucities_core::model::CACHE_SUFFIX;
use rucities_core::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("ru_sample.txt")
}

fn set_mtime(path: &Path, time: SystemTime) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}

fn mtime(path: &Path) -> SystemTime {
    std::fs::metadata(path).unwrap().modified().unwrap()
}

fn all_views(store: &DefaultStore) -> Vec<PlaceView> {
    store.records().iter().map(PlaceView::from).collect()
}

#[test]
fn snapshot_round_trip_preserves_records_and_aliases() {
    let dir = tempfile::tempdir().unwrap();
    let original = DefaultStore::load_from_path(fixture_path()).unwrap();

    for (name, mode) in [
        ("plain.bin", CompressionMode::None),
        ("default.bin", CompressionMode::preferred()),
    ] {
        let out = dir.path().join(name);
        original.save_as_with(&out, mode).unwrap();

        let loaded = DefaultStore::load_from_path(&out).unwrap();
        assert_eq!(all_views(&loaded), all_views(&original));
        assert_eq!(loaded.stats(), original.stats());
        assert_eq!(loaded.resolve_by_name("Троицк").unwrap().id(), 1489209);
    }
}

#[test]
fn load_cached_writes_and_reuses_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("RU.txt");
    std::fs::copy(fixture_path(), &dataset).unwrap();
    let cache = get_cache_path(&dataset, CACHE_SUFFIX);
    assert!(!cache.exists());

    let first = DefaultStore::load_cached(&dataset).unwrap();
    assert!(cache.exists());

    let second = DefaultStore::load_cached(&dataset).unwrap();
    assert_eq!(all_views(&first), all_views(&second));
}

#[test]
fn fresh_snapshot_is_used_instead_of_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("RU.txt");
    std::fs::copy(fixture_path(), &dataset).unwrap();
    DefaultStore::load_cached(&dataset).unwrap();

    // Unparseable dataset, but older than the snapshot: never read.
    std::fs::write(&dataset, "not\ta\tgeonames\trow\n").unwrap();
    set_mtime(&dataset, SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000));

    let store = DefaultStore::load_cached(&dataset).unwrap();
    assert_eq!(store.size(), 11);
    assert_eq!(store.find_by_id(524901).unwrap().name(), "Moscow");
}

#[test]
fn stale_snapshot_is_rebuilt_from_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("RU.txt");
    std::fs::copy(fixture_path(), &dataset).unwrap();
    let cache = get_cache_path(&dataset, CACHE_SUFFIX);

    let first = DefaultStore::load_cached(&dataset).unwrap();
    assert_eq!(first.size(), 11);

    // Age the snapshot, then shrink the dataset to its first three rows.
    let old = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
    set_mtime(&cache, old);
    let text = std::fs::read_to_string(fixture_path()).unwrap();
    let head: String = text.lines().take(3).map(|l| format!("{l}\n")).collect();
    std::fs::write(&dataset, head).unwrap();

    let second = DefaultStore::load_cached(&dataset).unwrap();
    assert_eq!(second.size(), 3);
    assert_eq!(second.last_id(), Some(481964));
    assert!(mtime(&cache) > old, "snapshot should be rewritten");

    let third = DefaultStore::load_from_path(&cache).unwrap();
    assert_eq!(third.size(), 3);
}

#[test]
fn corrupt_snapshot_falls_back_to_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("RU.txt");
    std::fs::copy(fixture_path(), &dataset).unwrap();
    let cache = get_cache_path(&dataset, CACHE_SUFFIX);
    std::fs::write(&cache, b"not a snapshot").unwrap();

    let store = DefaultStore::load_cached(&dataset).unwrap();
    assert_eq!(store.size(), 11);
}

#[cfg(feature = "compact")]
#[test]
fn gzip_dataset_is_decoded() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let gz_path = dir.path().join("RU.txt.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(&std::fs::read(fixture_path()).unwrap()).unwrap();
    std::fs::write(&gz_path, enc.finish().unwrap()).unwrap();

    let store = DefaultStore::load_from_path(&gz_path).unwrap();
    assert_eq!(store.size(), 11);
    assert_eq!(store.find_by_id(524901).unwrap().name(), "Moscow");
}
