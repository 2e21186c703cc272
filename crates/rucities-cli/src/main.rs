//! rucities: command-line interface for rucities-core
//!
//! Inspect a GeoNames dump of Russian places from the terminal: look places
//! up by id, page through them, resolve names, and compare two cities.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ rucities -i RU.txt stats
//!
//! - Look up Moscow by id
//!   $ rucities -i RU.txt id 524901
//!
//! - Third page of 20 places, as JSON
//!   $ rucities -i RU.txt --json page 3 20
//!
//! - Which is further north?
//!   $ rucities -i RU.txt compare Москва Санкт-Петербург
//!
//! Data source
//! -----------
//!
//! By default the CLI reads `data/RU.txt` inside the `rucities-core` crate and
//! caches a binary snapshot next to it for fast subsequent runs. Use
//! `--input <path>` (or `RUCITIES_DATASET`) to point elsewhere; a path ending
//! in `.bin` is read as a snapshot directly.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use rucities_core::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    // Determine input file (default RU.txt inside rucities-core/data)
    let input_path = args.input.unwrap_or_else(|| {
        let dir = DefaultStore::default_data_dir();
        let filename = DefaultStore::default_dataset_filename();
        dir.join(filename).to_string_lossy().to_string()
    });

    let store = load(&input_path).with_context(|| {
        format!(
            "loading {input_path} (GeoNames dump: {})",
            DefaultStore::get_3rd_party_data_url()
        )
    })?;
    let json = args.json;

    match args.command {
        Commands::Stats => {
            let stats = store.stats();
            if json {
                return print_json(&stats);
            }
            println!("Dataset statistics:");
            println!("  Places: {}", stats.records);
            println!("  Distinct names: {}", stats.aliases);
            if let (Some(first), Some(last)) = (stats.first_id, stats.last_id) {
                println!("  Id range: {first}..={last}");
            }
        }

        Commands::Id { id } => {
            let place = store.find_by_id(id)?;
            if json {
                return print_json(&PlaceView::from(place));
            }
            print_place(place);
        }

        Commands::Page { page, count } => {
            let page = store.page(page, count)?;
            if json {
                return print_json(&PageView::from(&page));
            }
            println!(
                "Page {}/{} ({} places total):",
                page.number, page.total_pages, page.total_records
            );
            for p in page.records {
                println!("{:>9}  {}", p.id(), p.name());
            }
        }

        Commands::City { name } => {
            let place = store.resolve_by_name(&name)?;
            if json {
                return print_json(&PlaceView::from(place));
            }
            print_place(place);
        }

        Commands::Compare { city1, city2 } => {
            let cmp = store.compare_by_names(&city1, &city2)?;
            if json {
                return print_json(&ComparisonView::from(&cmp));
            }
            for (query, p) in [(&city1, cmp.first), (&city2, cmp.second)] {
                println!(
                    "{query}: {} ({:.5}, {})",
                    p.name(),
                    p.latitude(),
                    p.timezone()
                );
            }
            let northern = match cmp.northern {
                Side::First => &city1,
                Side::Second => &city2,
            };
            println!("Further north: {northern}");
            println!(
                "Same timezone: {}",
                if cmp.same_timezone { "yes" } else { "no" }
            );
        }

        Commands::Search { query, limit } => {
            let matches = store.find_by_substring(&query, limit);
            if json {
                let views: Vec<PlaceView> = matches.into_iter().map(PlaceView::from).collect();
                return print_json(&views);
            }
            if matches.is_empty() {
                println!("No places found matching: {query}");
            } else {
                for p in matches {
                    println!("{:>9}  {} ({})", p.id(), p.name(), p.timezone());
                }
            }
        }

        #[cfg(feature = "builder")]
        Commands::Build { out } => {
            store.save_as(&out).with_context(|| format!("writing {out}"))?;
            println!("Wrote snapshot of {} places to {out}", store.size());
        }
    }

    Ok(())
}

fn load(path: &str) -> rucities_core::Result<DefaultStore> {
    #[cfg(feature = "builder")]
    return DefaultStore::load_cached(path);
    #[cfg(not(feature = "builder"))]
    return DefaultStore::load_from_path(path);
}

fn print_place(p: &PlaceRecord<DefaultBackend>) {
    println!("Place: {} ({})", p.name(), p.ascii_name());
    println!("GeoNames id: {}", p.id());
    println!("Coordinates: {:.5}, {:.5}", p.latitude(), p.longitude());
    println!("Feature: {}", p.feature_code());
    println!("Population: {}", p.population());
    println!("Timezone: {}", p.timezone());
    if !p.alternate_names().is_empty() {
        println!("Also known as: {}", p.alternate_names().join(", "));
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
