#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Washington State sales tax rate lookup.
//!
//! Loads the Department of Revenue rate files ([`ingest`]) into an
//! in-memory [`RateStore`] and answers "what rate applies at this address
//! and ZIP code" using the address parser and scorer from
//! `wa_sales_tax_address`.
//!
//! File locations come from a [`RatesConfig`], which defaults to the
//! settings embedded from `config/default.toml`.

pub mod config;
pub mod ingest;
pub mod store;
pub mod zip;

use std::path::PathBuf;

pub use config::RatesConfig;
pub use store::{LookupOutcome, RateStore};
pub use zip::ZipCode;

/// Errors that can occur while reading rate files.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// A configured rate file does not exist.
    #[error("Rate file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A date field was not in `YYYYMMDD` form.
    #[error("Invalid date {value:?}: {source}")]
    Date {
        /// The offending field text.
        value: String,
        /// Underlying parse error.
        source: chrono::ParseError,
    },
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path that caused the error.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration was not valid TOML for [`RatesConfig`].
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
