use clap::{Parser, Subcommand};

/// CLI arguments for rucities
#[derive(Debug, Parser)]
#[command(
    name = "rucities",
    version,
    about = "CLI for querying the GeoNames index of Russian places"
)]
pub struct CliArgs {
    /// Path to the GeoNames dump (RU.txt, RU.txt.gz) or a .bin snapshot
    #[arg(short = 'i', long = "input", global = true, env = "RUCITIES_DATASET")]
    pub input: Option<String>,

    /// Print results as pretty JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded dataset
    Stats,

    /// Look up a place by its GeoNames id
    Id {
        /// GeoNames id (e.g. 524901)
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// List one page of places in id order
    Page {
        /// 1-based page number
        page: usize,
        /// Places per page
        count: usize,
    },

    /// Resolve a name (exact, case-sensitive) to a single place
    City {
        /// Name or alternate name (e.g. Москва)
        name: String,
    },

    /// Compare two cities: which is further north, and do they share a timezone
    Compare {
        city1: String,
        city2: String,
    },

    /// Search places whose names contain a substring (case/accent-insensitive)
    Search {
        query: String,
        /// Maximum number of results
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Write a binary snapshot of the dataset for fast loading
    #[cfg(feature = "builder")]
    Build {
        /// Output path; should end in .bin
        out: String,
    },
}
