//! Basic usage example for rucities
//!
//! This example demonstrates how to:
//! - Load the GeoNames dump (with the snapshot cache)
//! - Look places up by id
//! - Page through the dataset
//! - Resolve names and compare two cities
//!
//! Run with: `cargo run --example basic_usage -- path/to/RU.txt`

use rucities::prelude::*;

fn main() -> Result<()> {
    println!("=== rucities Basic Usage Example ===\n");

    let path = std::env::args().nth(1).unwrap_or_else(|| {
        DefaultStore::default_data_dir()
            .join(DefaultStore::default_dataset_filename())
            .to_string_lossy()
            .into_owned()
    });

    // Load the dataset
    println!("Loading {path}...");
    let store = DefaultStore::load_cached(&path)?;
    let stats = store.stats();
    println!("✓ Loaded {} places\n", stats.records);

    // Example 1: Lookup by id
    println!("--- Example 1: Find a place by GeoNames id ---");
    match store.find_by_id(524901) {
        Ok(place) => println!(
            "{}: {:.4}, {:.4}, population {}",
            place.name(),
            place.latitude(),
            place.longitude(),
            place.population()
        ),
        Err(e) => println!("{e}"),
    }
    println!();

    // Example 2: First page
    println!("--- Example 2: First page of 5 ---");
    let page = store.page(1, 5.min(store.size()).max(1))?;
    for (i, place) in page.records.iter().enumerate() {
        println!("{}. {} ({})", i + 1, place.name(), place.id());
    }
    println!("... {} pages in total\n", page.total_pages);

    // Example 3: Compare two cities
    println!("--- Example 3: Compare Москва and Санкт-Петербург ---");
    let cmp = store.compare_by_names("Москва", "Санкт-Петербург")?;
    println!("Further north: {}", cmp.northern_record().name());
    println!("Same timezone: {}", cmp.same_timezone);

    Ok(())
}
