//! In-memory rate tables and the address lookup flow.

use std::collections::BTreeMap;

use serde::Serialize;
use wa_sales_tax_address::{best_match, tokenize};
use wa_sales_tax_address_models::{AddressRange, ShortZip, TaxRate};

use crate::config::RatesConfig;
use crate::zip::ZipCode;
use crate::{IngestError, ingest};

/// The result of a rate lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum LookupOutcome {
    /// The ZIP code is malformed, unknown, or has no address ranges.
    InvalidZip,
    /// No address was given; the rate is the ZIP code's own.
    #[serde(rename_all = "camelCase")]
    ZipOnly {
        /// The five-digit ZIP.
        zip: String,
        /// Rate for the ZIP's location code.
        rate: TaxRate,
    },
    /// The address matched an address range.
    #[serde(rename_all = "camelCase")]
    Found {
        /// The matching block-face.
        range: AddressRange,
        /// Rate for the range's location code.
        rate: TaxRate,
        /// Match score, absent when the ZIP+4 alone picked the range.
        score: Option<f64>,
    },
    /// No address range matched well enough.
    AddressNotFound,
}

/// Rate tables indexed for lookup.
#[derive(Debug, Clone, Default)]
pub struct RateStore {
    ranges_by_zip: BTreeMap<String, Vec<AddressRange>>,
    rates_by_code: BTreeMap<u32, TaxRate>,
    short_zips_by_zip: BTreeMap<String, Vec<ShortZip>>,
}

impl RateStore {
    /// Indexes already-loaded records. When several rates share a location
    /// code the first one is kept.
    #[must_use]
    pub fn new(ranges: Vec<AddressRange>, rates: Vec<TaxRate>, short_zips: Vec<ShortZip>) -> Self {
        let mut store = Self::default();

        for range in ranges {
            store
                .ranges_by_zip
                .entry(range.zip.clone())
                .or_default()
                .push(range);
        }
        for rate in rates {
            store.rates_by_code.entry(rate.location_code).or_insert(rate);
        }
        for short_zip in short_zips {
            store
                .short_zips_by_zip
                .entry(short_zip.zip.clone())
                .or_default()
                .push(short_zip);
        }

        store
    }

    /// Loads all three rate files named by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if any file is missing or cannot be read.
    pub fn load(config: &RatesConfig) -> Result<Self, IngestError> {
        let ranges = ingest::load_address_ranges(&config.address_ranges_path())?;
        let rates = ingest::load_tax_rates(&config.tax_rates_path())?;
        let short_zips = ingest::load_short_zips(&config.short_zips_path())?;

        let store = Self::new(ranges, rates, short_zips);
        log::info!(
            "Indexed {} ZIP codes with address ranges, {} location codes",
            store.ranges_by_zip.len(),
            store.rates_by_code.len()
        );
        Ok(store)
    }

    /// Address ranges published for a five-digit ZIP.
    #[must_use]
    pub fn ranges_for(&self, zip: &str) -> &[AddressRange] {
        self.ranges_by_zip
            .get(zip)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn rate_for(&self, location_code: u32) -> Option<&TaxRate> {
        self.rates_by_code.get(&location_code)
    }

    /// The first short ZIP record for a five-digit ZIP.
    #[must_use]
    pub fn short_zip(&self, zip: &str) -> Option<&ShortZip> {
        self.short_zips_by_zip.get(zip).and_then(|zips| zips.first())
    }

    /// Finds the rate that applies to `address` in `zip`.
    ///
    /// A blank address with a five-digit ZIP answers with the ZIP's own
    /// rate. A ZIP+4 narrows the candidate ranges and, if exactly one
    /// remains, answers without parsing the address.
    #[must_use]
    pub fn lookup(&self, address: &str, zip: &str) -> LookupOutcome {
        let Some(zip) = ZipCode::parse(zip) else {
            log::debug!("lookup: malformed ZIP {zip:?}");
            return LookupOutcome::InvalidZip;
        };
        let Some(short_zip) = self.short_zip(zip.zip()) else {
            log::debug!("lookup: unknown ZIP {zip}");
            return LookupOutcome::InvalidZip;
        };

        if address.trim().is_empty() && zip.is_five_digit() {
            return self.rate_for(short_zip.location_code).map_or_else(
                || {
                    log::warn!(
                        "lookup: no rate for location code {} of ZIP {zip}",
                        short_zip.location_code
                    );
                    LookupOutcome::AddressNotFound
                },
                |rate| LookupOutcome::ZipOnly {
                    zip: zip.zip().to_string(),
                    rate: rate.clone(),
                },
            );
        }

        let ranges = self.ranges_for(zip.zip());
        let candidates: Vec<AddressRange> = match zip.plus4() {
            Some(plus4) => ranges
                .iter()
                .filter(|range| range.plus4.as_deref() == Some(plus4))
                .cloned()
                .collect(),
            None => ranges.to_vec(),
        };

        if let [only] = candidates.as_slice()
            && zip.plus4().is_some()
        {
            log::debug!("lookup: ZIP+4 {zip} has a single range");
            return self.found(only, None);
        }

        if candidates.is_empty() {
            log::debug!("lookup: no address ranges for {zip}");
            return LookupOutcome::InvalidZip;
        }

        let query = tokenize(address);
        if !query.has_street() {
            log::debug!("lookup: no street in {address:?}");
            return LookupOutcome::AddressNotFound;
        }

        match best_match(&query, &candidates) {
            Some((range, score)) => self.found(range, Some(score)),
            None => {
                log::debug!(
                    "lookup: no range in {zip} matched {address:?} ({} candidates)",
                    candidates.len()
                );
                LookupOutcome::AddressNotFound
            }
        }
    }

    fn found(&self, range: &AddressRange, score: Option<f64>) -> LookupOutcome {
        self.rate_for(range.location_code).map_or_else(
            || {
                log::warn!(
                    "lookup: no rate for location code {} of {:?}",
                    range.location_code,
                    range.street
                );
                LookupOutcome::AddressNotFound
            },
            |rate| LookupOutcome::Found {
                range: range.clone(),
                rate: rate.clone(),
                score,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use wa_sales_tax_address_models::Parity;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(street: &str, lower: i64, upper: i64, plus4: &str, code: u32) -> AddressRange {
        AddressRange {
            lower_bound: Some(lower),
            upper_bound: Some(upper),
            parity: Parity::Even,
            street: street.to_string(),
            state: "WA".to_string(),
            zip: "98501".to_string(),
            plus4: Some(plus4.to_string()),
            period: Some("Q12024".to_string()),
            location_code: code,
            rta: false,
            ptba_name: None,
            cez_name: None,
        }
    }

    fn rate(name: &str, code: u32, total: f64) -> TaxRate {
        TaxRate {
            name: name.to_string(),
            location_code: code,
            state: 0.065,
            local: total - 0.065,
            rta: 0.0,
            rate: total,
            effective_date: date(2024, 1, 1),
            expiration_date: date(2024, 3, 31),
        }
    }

    fn short_zip(zip: &str, code: u32) -> ShortZip {
        ShortZip {
            zip: zip.to_string(),
            plus4_lower_bound: None,
            plus4_upper_bound: None,
            location_code: code,
            state: None,
            local: None,
            total_rate: None,
            effective_start_date: date(2024, 1, 1),
            effective_end_date: date(2024, 3, 31),
        }
    }

    fn store() -> RateStore {
        RateStore::new(
            vec![
                range("LINDERSON WAY SW", 6000, 7000, "6561", 3406),
                range("CAPITOL WAY S", 100, 2000, "1234", 3407),
            ],
            vec![
                rate("Olympia", 3406, 0.096),
                rate("Tumwater", 3407, 0.095),
                rate("Olympia later", 3406, 0.099),
            ],
            vec![short_zip("98501", 3406), short_zip("98502", 3499)],
        )
    }

    #[test]
    fn malformed_and_unknown_zips_are_invalid() {
        let store = store();
        assert_eq!(store.lookup("6500 Linderson Way SW", "985"), LookupOutcome::InvalidZip);
        assert_eq!(store.lookup("6500 Linderson Way SW", "99999"), LookupOutcome::InvalidZip);
    }

    #[test]
    fn blank_address_uses_zip_rate() {
        let outcome = store().lookup("  ", "98501");
        let LookupOutcome::ZipOnly { zip, rate } = outcome else {
            panic!("expected a ZIP-only answer, got {outcome:?}");
        };
        assert_eq!(zip, "98501");
        assert_eq!(rate.name, "Olympia");
    }

    #[test]
    fn address_picks_best_range() {
        let outcome = store().lookup("6500 Linderson Way SW", "98501");
        let LookupOutcome::Found { range, rate, score } = outcome else {
            panic!("expected a match, got {outcome:?}");
        };
        assert_eq!(range.street, "LINDERSON WAY SW");
        assert_eq!(rate.location_code, 3406);
        assert!(score.is_some_and(|score| score > 0.0));
    }

    #[test]
    fn single_plus4_range_skips_parsing() {
        let outcome = store().lookup("anything at all", "98501-1234");
        let LookupOutcome::Found { range, score, .. } = outcome else {
            panic!("expected a match, got {outcome:?}");
        };
        assert_eq!(range.street, "CAPITOL WAY S");
        assert!(score.is_none());
    }

    #[test]
    fn plus4_without_ranges_is_invalid() {
        assert_eq!(
            store().lookup("6500 Linderson Way SW", "985010000"),
            LookupOutcome::InvalidZip
        );
    }

    #[test]
    fn known_zip_without_ranges_is_invalid() {
        assert_eq!(store().lookup("1 Main St", "98502"), LookupOutcome::InvalidZip);
    }

    #[test]
    fn poorly_matching_range_is_not_found() {
        let store = RateStore::new(
            vec![range("LINDERSON WAY SW", 6000, 7000, "6561", 3406)],
            vec![rate("Olympia", 3406, 0.096)],
            vec![short_zip("98501", 3406)],
        );
        // Prefix directional missing (-0.3) and street type differs (-0.05).
        assert_eq!(
            store.lookup("6500 N Linderson Ave", "98501"),
            LookupOutcome::AddressNotFound
        );
    }

    #[test]
    fn other_street_still_clears_threshold() {
        // A street mismatch scores zero, which is not below the threshold.
        let outcome = store().lookup("6500 Evergreen Pkwy", "98501");
        let LookupOutcome::Found { range, score, .. } = outcome else {
            panic!("expected a match, got {outcome:?}");
        };
        assert_eq!(range.street, "LINDERSON WAY SW");
        assert!(score.is_some_and(|score| score.abs() < f64::EPSILON));
    }

    #[test]
    fn blank_address_with_plus4_is_not_found() {
        let store = RateStore::new(
            vec![
                range("LINDERSON WAY SW", 6000, 7000, "6561", 3406),
                range("LINDERSON WAY SW", 7002, 8000, "6561", 3406),
            ],
            vec![rate("Olympia", 3406, 0.096)],
            vec![short_zip("98501", 3406)],
        );
        assert_eq!(store.lookup("", "98501-6561"), LookupOutcome::AddressNotFound);
    }

    #[test]
    fn missing_rate_is_not_found() {
        let store = RateStore::new(
            vec![range("LINDERSON WAY SW", 6000, 7000, "6561", 9999)],
            vec![],
            vec![short_zip("98501", 9999)],
        );
        assert_eq!(store.lookup("6500 Linderson Way SW", "98501"), LookupOutcome::AddressNotFound);
        assert_eq!(store.lookup("", "98501"), LookupOutcome::AddressNotFound);
    }

    #[test]
    fn first_rate_per_code_wins() {
        let store = store();
        assert_eq!(store.rate_for(3406).map(|rate| rate.name.as_str()), Some("Olympia"));
        assert_eq!(store.ranges_for("98501").len(), 2);
        assert!(store.ranges_for("00000").is_empty());
    }
}
