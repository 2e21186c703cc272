//! Error handling example for rucities
//!
//! Every query returns a `Result`; the error variant tells you what kind of
//! failure it was without looking at the message.
//!
//! Run with: `cargo run --example error_handling -- path/to/RU.txt`

use rucities::prelude::*;

fn main() -> Result<()> {
    println!("=== rucities Error Handling Example ===\n");

    // Example 1: Handling load errors
    println!("--- Example 1: Loading a dataset that doesn't exist ---");
    match DefaultStore::load_from_path("/nowhere/RU.txt") {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(GeoError::NotFound(msg)) => println!("  ✗ {msg}"),
        Err(e) => println!("  ✗ other load error: {e}"),
    }
    println!();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DefaultStore::default_dataset_filename().to_string());
    let store = DefaultStore::load_from_path(&path)?;

    // Example 2: Ids that don't exist
    println!("--- Example 2: Missing ids ---");
    for id in [-1, 0, 524902, i64::MAX] {
        match store.find_by_id(id) {
            Ok(place) => println!("  Found: {} ({id})", place.name()),
            Err(GeoError::NotFound(_)) => println!("  Not found: {id}"),
            Err(e) => return Err(e),
        }
    }
    println!();

    // Example 3: Invalid paging
    println!("--- Example 3: Invalid paging arguments ---");
    for (page, count) in [(1, 0), (0, 10), (usize::MAX, 10)] {
        match store.page(page, count) {
            Ok(p) => println!("  page {page}/{count}: {} places", p.records.len()),
            Err(GeoError::InvalidArgument(msg)) => println!("  page {page}/{count}: {msg}"),
            Err(e) => return Err(e),
        }
    }
    println!();

    // Example 4: Unknown names
    println!("--- Example 4: Unknown city names ---");
    match store.compare_by_names("Москва", "Китеж") {
        Ok(cmp) => println!("  northern: {:?}", cmp.northern),
        Err(e) => println!("  ✗ {e}"),
    }

    Ok(())
}
