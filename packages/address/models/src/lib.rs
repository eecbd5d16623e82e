#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Reference data and parsed-address types for the WA sales tax resolver.
//!
//! This crate contains only data types and simple conversions. The
//! address-range, tax-rate and short-ZIP records mirror the Department of
//! Revenue rate files; [`AddressComponents`] is the owned, serializable
//! view of a parsed street address.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Which side of the street an address range covers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Parity {
    /// Odd house numbers only.
    #[serde(rename = "O")]
    #[strum(serialize = "O")]
    Odd,
    /// Even house numbers only.
    #[serde(rename = "E")]
    #[strum(serialize = "E")]
    Even,
    /// Both sides of the street.
    #[serde(rename = "B")]
    #[strum(serialize = "B")]
    Both,
}

impl Parity {
    /// Maps the single-character `ODD_EVEN` flag from the rate files.
    ///
    /// Anything other than `O` or `E` covers both sides.
    #[must_use]
    pub const fn from_flag(flag: char) -> Self {
        match flag.to_ascii_uppercase() {
            'O' => Self::Odd,
            'E' => Self::Even,
            _ => Self::Both,
        }
    }

    /// The single-character flag as written in the rate files.
    #[must_use]
    pub const fn flag(self) -> char {
        match self {
            Self::Odd => 'O',
            Self::Even => 'E',
            Self::Both => 'B',
        }
    }
}

/// A block-face of a street mapped to a taxing jurisdiction.
///
/// See <https://dor.wa.gov/taxes-rates/datafield-descriptions>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRange {
    /// Lowest house number on the block-face, if bounded.
    pub lower_bound: Option<i64>,
    /// Highest house number on the block-face, if bounded.
    pub upper_bound: Option<i64>,
    /// Which house numbers the range covers.
    pub parity: Parity,
    /// Street text as published, e.g. `"LINDERSON WAY SW"`.
    pub street: String,
    /// Two-letter state code.
    pub state: String,
    /// Five-digit ZIP.
    pub zip: String,
    /// ZIP+4 suffix, if the range is narrowed to one.
    pub plus4: Option<String>,
    /// Rate period literal (e.g. `"Q12024"`).
    pub period: Option<String>,
    /// DOR location code of the taxing jurisdiction.
    pub location_code: u32,
    /// Whether the range falls in a Regional Transit Authority area.
    pub rta: bool,
    /// Public Transportation Benefit Area name.
    pub ptba_name: Option<String>,
    /// Community Empowerment Zone name.
    pub cez_name: Option<String>,
}

/// A combined sales tax rate for one location code.
///
/// See <https://dor.wa.gov/taxes-rates/location-codes-and-rate-tables-field-descriptions>.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRate {
    /// Jurisdiction name.
    pub name: String,
    /// DOR location code.
    pub location_code: u32,
    /// State share of the rate.
    pub state: f64,
    /// Local share of the rate.
    pub local: f64,
    /// Regional Transit Authority share of the rate.
    pub rta: f64,
    /// Total rate to collect.
    pub rate: f64,
    /// First day the rate applies.
    pub effective_date: NaiveDate,
    /// Last day the rate applies.
    pub expiration_date: NaiveDate,
}

/// A ZIP code (with an optional plus-4 range) mapped to a location code.
///
/// See <https://dor.wa.gov/taxes-rates/zip-plus-4-short-data-field-descriptions>.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortZip {
    /// Five-digit ZIP.
    pub zip: String,
    /// Lower plus-4 bound, if any.
    pub plus4_lower_bound: Option<String>,
    /// Upper plus-4 bound, if any.
    pub plus4_upper_bound: Option<String>,
    /// DOR location code.
    pub location_code: u32,
    /// State rate as published.
    pub state: Option<String>,
    /// Local rate as published.
    pub local: Option<String>,
    /// Total rate as published.
    pub total_rate: Option<String>,
    /// First day the mapping applies.
    pub effective_start_date: NaiveDate,
    /// Last day the mapping applies.
    pub effective_end_date: NaiveDate,
}

/// Owned postal components of a parsed street address.
///
/// Every field is optional; a usable parse has at least `street`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressComponents {
    /// Civic house number, e.g. `"6500"`.
    pub house: Option<String>,
    /// Directional before the street name, e.g. `"W"`.
    pub prefix_dir: Option<String>,
    /// Qualifier such as `"OLD"`.
    pub street_qualifier: Option<String>,
    /// Street type preceding the name, e.g. `"HIGHWAY"` in `HIGHWAY 99`.
    pub street_prefix: Option<String>,
    /// Root street name.
    pub street: Option<String>,
    /// Street type suffix, e.g. `"AVE"`.
    pub street_type: Option<String>,
    /// Directional after the street name, e.g. `"SW"`.
    pub suffix_dir: Option<String>,
}

impl AddressComponents {
    /// Returns `true` if a street name was identified.
    #[must_use]
    pub fn has_street(&self) -> bool {
        self.street.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parity_from_flag() {
        assert_eq!(Parity::from_flag('E'), Parity::Even);
        assert_eq!(Parity::from_flag('o'), Parity::Odd);
        assert_eq!(Parity::from_flag('B'), Parity::Both);
        assert_eq!(Parity::from_flag(' '), Parity::Both);
    }

    #[test]
    fn parity_string_round_trip() {
        assert_eq!(Parity::Even.to_string(), "E");
        assert_eq!(Parity::from_str("O").ok(), Some(Parity::Odd));
        assert_eq!(Parity::Odd.flag(), 'O');
    }

    #[test]
    fn components_require_street() {
        assert!(!AddressComponents::default().has_street());

        let parsed = AddressComponents {
            street: Some("MAIN".to_string()),
            ..AddressComponents::default()
        };
        assert!(parsed.has_street());

        let blank = AddressComponents {
            street: Some("  ".to_string()),
            ..AddressComponents::default()
        };
        assert!(!blank.has_street());
    }
}
