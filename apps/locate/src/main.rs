//! locate — command-line host for the partner locator.
//!
//! Loads a GeoJSON partner file into an in-memory catalog, then answers one
//! command:
//!
//! ```text
//! locate data/partners.json find --lon -46.66 --lat -23.55
//! locate data/partners.json get --id 1
//! locate data/partners.json batch queries.csv > matches.csv
//! locate --config data/locator.toml data/partners.json check
//! ```
//!
//! `find` prints the matching partner as a JSON document, or `{}` when no
//! partner covers the coordinate.  Set `RUST_LOG=info` to see load progress.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pl_io::{PartnerDocument, load_partners_json, load_queries_csv, locate_batch, populate};
use pl_locator::{LocatorConfig, PartnerId, PartnerLocator, Point};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "path to TOML file with locator settings")]
    config: Option<PathBuf>,

    #[arg(help = "path to JSON file with partner documents")]
    partners: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Closest partner whose coverage area contains the coordinate.
    Find {
        #[arg(long, allow_negative_numbers = true, help = "longitude in degrees")]
        lon: f64,
        #[arg(long, allow_negative_numbers = true, help = "latitude in degrees")]
        lat: f64,
    },
    /// Partner by id.
    Get {
        #[arg(long)]
        id: String,
    },
    /// Run every `lon,lat` row of a CSV file; results go to stdout as CSV.
    Batch {
        #[arg(help = "path to CSV file with lon,lat columns")]
        queries: PathBuf,
    },
    /// Load and validate the partner file, then report the partner count.
    Check,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        None => LocatorConfig::default(),
        Some(path) => {
            log::info!("reading locator configuration from {}", path.display());
            read_config(path)?
        }
    };
    log::debug!("{config:?}");

    let locator = PartnerLocator::new(config);
    let records = load_partners_json(&args.partners)
        .with_context(|| format!("loading partners from {}", args.partners.display()))?;
    populate(&locator, records)?;

    match args.command {
        Command::Find { lon, lat } => {
            let found = locator.find_closest_containing(Point::new(lon, lat))?;
            match found {
                Some(record) => {
                    let doc = PartnerDocument::from(record.as_ref());
                    println!("{}", serde_json::to_string_pretty(&doc)?);
                }
                None => println!("{{}}"),
            }
        }
        Command::Get { id } => {
            let record = locator.get_by_id(&PartnerId::from(id))?;
            let doc = PartnerDocument::from(record.as_ref());
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        Command::Batch { queries } => {
            let queries = load_queries_csv(&queries)
                .with_context(|| format!("loading queries from {}", queries.display()))?;
            locate_batch(&locator, &queries, std::io::stdout().lock())?;
        }
        Command::Check => {
            println!(
                "{} partners loaded (metric: {}, spatial index: {})",
                locator.len(),
                locator.locator().metric(),
                locator.catalog().is_indexed(),
            );
        }
    }

    Ok(())
}

fn read_config(path: &Path) -> Result<LocatorConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
