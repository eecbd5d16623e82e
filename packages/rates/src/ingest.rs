//! Department of Revenue rate file ingestion.
//!
//! Three files are read:
//!
//! - the address-range file (`State.txt`), a headered CSV of block-faces
//!   with the location code that applies to each;
//! - the tax-rate file (`Rates.csv`), a headered CSV of rates by location
//!   code;
//! - the short ZIP file (`Zip4.csv`), a header-less CSV of ZIP+4 ranges by
//!   location code.
//!
//! Malformed rows are skipped with a warning; only I/O and reader-level
//! CSV failures abort a load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use wa_sales_tax_address_models::{AddressRange, Parity, ShortZip, TaxRate};

use crate::IngestError;

/// Date format used throughout the rate files.
const DATE_FORMAT: &str = "%Y%m%d";

/// A raw row from the address-range file.
#[derive(Debug, Deserialize)]
struct RawAddressRange {
    #[serde(rename = "ADDR_LOW", default)]
    addr_low: Option<i64>,
    #[serde(rename = "ADDR_HIGH", default)]
    addr_high: Option<i64>,
    #[serde(rename = "ODD_EVEN", default)]
    odd_even: String,
    #[serde(rename = "STREET", default)]
    street: String,
    #[serde(rename = "STATE", default)]
    state: String,
    #[serde(rename = "ZIP", default)]
    zip: String,
    #[serde(rename = "PLUS4", default)]
    plus4: Option<String>,
    #[serde(rename = "PERIOD", default)]
    period: Option<String>,
    #[serde(rename = "CODE")]
    code: u32,
    #[serde(rename = "RTA", default)]
    rta: String,
    #[serde(rename = "PTBA_NAME", default)]
    ptba_name: Option<String>,
    #[serde(rename = "CEZ_NAME", default)]
    cez_name: Option<String>,
}

impl RawAddressRange {
    fn into_range(self) -> AddressRange {
        AddressRange {
            lower_bound: self.addr_low,
            upper_bound: self.addr_high,
            parity: self
                .odd_even
                .chars()
                .next()
                .map_or(Parity::Both, Parity::from_flag),
            street: self.street,
            state: self.state,
            zip: self.zip,
            plus4: self.plus4,
            period: self.period,
            location_code: self.code,
            rta: self.rta.eq_ignore_ascii_case("Y"),
            ptba_name: self.ptba_name,
            cez_name: self.cez_name,
        }
    }
}

/// A raw row from the tax-rate file.
#[derive(Debug, Deserialize)]
struct RawTaxRate {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Code")]
    code: u32,
    #[serde(rename = "State")]
    state: f64,
    #[serde(rename = "Local")]
    local: f64,
    #[serde(rename = "RTA")]
    rta: f64,
    #[serde(rename = "Rate")]
    rate: f64,
    #[serde(rename = "Effective Date")]
    effective_date: String,
    #[serde(rename = "Expiration Date")]
    expiration_date: String,
}

impl RawTaxRate {
    fn into_rate(self) -> Result<TaxRate, IngestError> {
        Ok(TaxRate {
            name: self.name,
            location_code: self.code,
            state: self.state,
            local: self.local,
            rta: self.rta,
            rate: self.rate,
            effective_date: parse_date(&self.effective_date)?,
            expiration_date: parse_date(&self.expiration_date)?,
        })
    }
}

/// A raw row from the short ZIP file. Columns are positional.
#[derive(Debug, Deserialize)]
struct RawShortZip {
    zip: String,
    plus4_low: Option<String>,
    plus4_high: Option<String>,
    code: u32,
    state: Option<String>,
    local: Option<String>,
    total: Option<String>,
    start_date: String,
    end_date: String,
}

impl RawShortZip {
    fn into_short_zip(self) -> Result<ShortZip, IngestError> {
        Ok(ShortZip {
            zip: self.zip,
            plus4_lower_bound: self.plus4_low,
            plus4_upper_bound: self.plus4_high,
            location_code: self.code,
            state: self.state,
            local: self.local,
            total_rate: self.total,
            effective_start_date: parse_date(&self.start_date)?,
            effective_end_date: parse_date(&self.end_date)?,
        })
    }
}

/// Parses a `YYYYMMDD` date.
///
/// # Errors
///
/// Returns [`IngestError::Date`] if `value` is not a valid date in that
/// form.
pub fn parse_date(value: &str) -> Result<NaiveDate, IngestError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| IngestError::Date {
        value: value.to_string(),
        source: e,
    })
}

/// Deserializes every row, converting good rows and skipping bad ones.
fn read_rows<R, T, F>(
    reader: impl Read,
    has_headers: bool,
    label: &str,
    convert: F,
) -> Result<Vec<T>, IngestError>
where
    R: DeserializeOwned,
    F: Fn(R) -> Result<T, IngestError>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped = 0u64;

    for (index, result) in csv_reader.deserialize::<R>().enumerate() {
        match result.map_err(IngestError::from).and_then(&convert) {
            Ok(row) => rows.push(row),
            Err(e) => {
                skipped += 1;
                log::warn!("  {label}: skipping row {}: {e}", index + 1);
            }
        }
    }

    log::info!("  {label}: loaded {} rows, skipped {skipped}", rows.len());

    Ok(rows)
}

/// Reads the address-range file from any `Read` source.
///
/// # Errors
///
/// Returns an error if the header row cannot be read.
pub fn read_address_ranges(reader: impl Read) -> Result<Vec<AddressRange>, IngestError> {
    read_rows(reader, true, "address ranges", |raw: RawAddressRange| {
        Ok(raw.into_range())
    })
}

/// Reads the tax-rate file from any `Read` source.
///
/// # Errors
///
/// Returns an error if the header row cannot be read.
pub fn read_tax_rates(reader: impl Read) -> Result<Vec<TaxRate>, IngestError> {
    read_rows(reader, true, "tax rates", RawTaxRate::into_rate)
}

/// Reads the header-less short ZIP file from any `Read` source.
///
/// # Errors
///
/// Returns an error if the source cannot be read.
pub fn read_short_zips(reader: impl Read) -> Result<Vec<ShortZip>, IngestError> {
    read_rows(reader, false, "short zips", RawShortZip::into_short_zip)
}

fn open(path: &Path) -> Result<File, IngestError> {
    if !path.exists() {
        return Err(IngestError::MissingFile(path.to_path_buf()));
    }
    log::info!("Reading {}", path.display());
    Ok(File::open(path)?)
}

/// Loads the address-range file at `path`.
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be read.
pub fn load_address_ranges(path: &Path) -> Result<Vec<AddressRange>, IngestError> {
    read_address_ranges(open(path)?)
}

/// Loads the tax-rate file at `path`.
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be read.
pub fn load_tax_rates(path: &Path) -> Result<Vec<TaxRate>, IngestError> {
    read_tax_rates(open(path)?)
}

/// Loads the short ZIP file at `path`.
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be read.
pub fn load_short_zips(path: &Path) -> Result<Vec<ShortZip>, IngestError> {
    read_short_zips(open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS_RANGES: &str = "\
ADDR_LOW,ADDR_HIGH,ODD_EVEN,STREET,STATE,ZIP,PLUS4,PERIOD,CODE,RTA,PTBA_NAME,CEZ_NAME
6000,7000,E,LINDERSON WAY SW,WA,98501,6561,Q12024,3406,N,Intercity Transit,
,,B,CAPITOL WAY S,WA,98501,,Q12024,3406,Y,,
1,2,O,BROKEN ROW,WA,98501,,Q12024,not-a-code,N,,
";

    const TAX_RATES: &str = "\
Name,Code,State,Local,RTA,Rate,Effective Date,Expiration Date
Olympia,3406,0.065,0.031,0,0.096,20240101,20240331
Bad Date,3407,0.065,0.031,0,0.096,2024-01-01,20240331
";

    const SHORT_ZIPS: &str = "\
98501,0001,9999,3406,0.065,0.031,0.096,20240101,20240331
98502,,,3407,,,,20240101,20240331
";

    #[test]
    fn reads_address_ranges() {
        let ranges = read_address_ranges(ADDRESS_RANGES.as_bytes()).unwrap();
        assert_eq!(ranges.len(), 2);

        let first = &ranges[0];
        assert_eq!(first.lower_bound, Some(6000));
        assert_eq!(first.upper_bound, Some(7000));
        assert_eq!(first.parity, Parity::Even);
        assert_eq!(first.street, "LINDERSON WAY SW");
        assert_eq!(first.plus4.as_deref(), Some("6561"));
        assert_eq!(first.location_code, 3406);
        assert!(!first.rta);
        assert_eq!(first.ptba_name.as_deref(), Some("Intercity Transit"));
        assert!(first.cez_name.is_none());

        let second = &ranges[1];
        assert_eq!(second.lower_bound, None);
        assert_eq!(second.upper_bound, None);
        assert_eq!(second.parity, Parity::Both);
        assert!(second.plus4.is_none());
        assert!(second.rta);
    }

    #[test]
    fn reads_tax_rates_and_skips_bad_dates() {
        let rates = read_tax_rates(TAX_RATES.as_bytes()).unwrap();
        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].name, "Olympia");
        assert_eq!(rates[0].location_code, 3406);
        assert!((rates[0].rate - 0.096).abs() < f64::EPSILON);
        assert_eq!(
            rates[0].effective_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(
            rates[0].expiration_date,
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
        );
    }

    #[test]
    fn reads_headerless_short_zips() {
        let zips = read_short_zips(SHORT_ZIPS.as_bytes()).unwrap();
        assert_eq!(zips.len(), 2);
        assert_eq!(zips[0].zip, "98501");
        assert_eq!(zips[0].plus4_lower_bound.as_deref(), Some("0001"));
        assert_eq!(zips[0].total_rate.as_deref(), Some("0.096"));
        assert_eq!(zips[1].location_code, 3407);
        assert!(zips[1].plus4_lower_bound.is_none());
    }

    #[test]
    fn date_errors_carry_the_text() {
        let err = parse_date("2024-13-01").unwrap_err();
        assert!(err.to_string().contains("2024-13-01"));
        assert!(parse_date("20240229").is_ok());
    }

    #[test]
    fn missing_file() {
        let err = load_tax_rates(Path::new("/nonexistent/Rates.csv")).unwrap_err();
        assert!(matches!(err, IngestError::MissingFile(_)));
    }
}
