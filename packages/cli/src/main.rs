#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the WA sales tax address resolver.
//!
//! ```text
//! wa_sales_tax parse "6500 Linderson Way SW"
//! wa_sales_tax score "6500 Linderson Way SW" "LINDERSON WAY SW" --lower 6000 --upper 7000 --parity E
//! wa_sales_tax lookup --zip 98501 "6500 Linderson Way SW"
//! ```
//!
//! `lookup` reads the Department of Revenue rate files from the directory
//! named in the configuration (`--config`), which `--data-dir` overrides.
//! Set `RUST_LOG=debug` to see which grammar rule or repair matched.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use wa_sales_tax_address::{score, tokenize};
use wa_sales_tax_address_models::{AddressRange, Parity};
use wa_sales_tax_rates::{RateStore, RatesConfig};

#[derive(Parser)]
#[command(
    name = "wa_sales_tax",
    about = "Parse street addresses and look up Washington State sales tax rates"
)]
struct Cli {
    /// TOML file naming the rate files (defaults to the built-in settings)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the rate files, overriding the configuration
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the postal components of an address line as JSON
    Parse {
        /// Address line, e.g. "6500 Linderson Way SW"
        address: String,
    },
    /// Score an address against one published street range
    Score {
        /// Address line to match
        address: String,
        /// Street text of the range, e.g. "LINDERSON WAY SW"
        street: String,
        /// Lowest house number of the range
        #[arg(long)]
        lower: Option<i64>,
        /// Highest house number of the range
        #[arg(long)]
        upper: Option<i64>,
        /// Side of the street the range covers: O, E or B
        #[arg(long, default_value = "B", value_parser = Parity::from_str)]
        parity: Parity,
    },
    /// Look up the rate for an address (or just a ZIP code)
    Lookup {
        /// Five-digit ZIP or ZIP+4
        #[arg(long)]
        zip: String,
        /// Address line; omit for the ZIP code's own rate
        address: Option<String>,
    },
}

fn load_config(cli: &Cli) -> Result<RatesConfig, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => RatesConfig::from_path(path)?,
        None => RatesConfig::embedded()?,
    };

    Ok(match &cli.data_dir {
        Some(dir) => config.with_data_dir(dir.clone()),
        None => config,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    match &cli.command {
        Commands::Parse { address } => {
            let parsed = tokenize(address);
            println!("{}", serde_json::to_string_pretty(&parsed.to_components())?);
        }
        Commands::Score {
            address,
            street,
            lower,
            upper,
            parity,
        } => {
            let candidate = AddressRange {
                lower_bound: *lower,
                upper_bound: *upper,
                parity: *parity,
                street: street.clone(),
                state: "WA".to_string(),
                zip: String::new(),
                plus4: None,
                period: None,
                location_code: 0,
                rta: false,
                ptba_name: None,
                cez_name: None,
            };
            println!("{}", score(&tokenize(address), &candidate));
        }
        Commands::Lookup { zip, address } => {
            let config = load_config(&cli)?;
            log::debug!("Loading rate files from {}", config.data_dir.display());
            let store = RateStore::load(&config)?;

            let outcome = store.lookup(address.as_deref().unwrap_or_default(), zip);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}
