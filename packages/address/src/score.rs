//! Scoring a parsed address against published address ranges.
//!
//! A candidate range only scores when its street name matches the query's
//! exactly. Beyond that, the score rewards agreeing directionals and street
//! types and penalizes a house number on the wrong side of the street or
//! outside the range.

use wa_sales_tax_address_models::{AddressRange, Parity};

use crate::parsed::ParsedAddress;
use crate::tokenizer::tokenize;

/// Best scores below this are treated as no match.
pub const ACCEPT_THRESHOLD: f64 = -0.1;

/// Tie breaker for an odd house number against an even-only range.
const WRONG_PARITY: f64 = -0.0001;
const OUT_OF_RANGE: f64 = -0.1;
const BOTH_ABSENT: f64 = 0.1;

/// Lower bounds above this use a wider distance scale.
const WIDE_RANGE_FLOOR: i64 = 10_000;
const WIDE_DISTANCE_SCALE: f64 = 1_000_000.0;
const NARROW_DISTANCE_SCALE: f64 = 10_000.0;

/// Scores `candidate` against `query`. Higher is better and `0.0` means
/// the street names differ.
#[must_use]
pub fn score(query: &ParsedAddress, candidate: &AddressRange) -> f64 {
    let parsed = tokenize(&candidate.street);

    match (query.street(), parsed.street()) {
        (Some(wanted), Some(found)) if wanted == found => {}
        _ => return 0.0,
    }

    let mut score = house_score(query.house(), candidate);

    score += match (query.prefix_dir(), parsed.prefix_dir()) {
        (None, None) => BOTH_ABSENT,
        (Some(wanted), Some(found)) if wanted == found => 0.25,
        (Some(wanted), Some(found)) if found.contains(wanted) => 0.05,
        (Some(_), Some(_)) => -0.2,
        (Some(_), None) => -0.3,
        (None, Some(_)) => 0.0,
    };

    score += match (query.street_type(), parsed.street_type()) {
        (None, None) => BOTH_ABSENT,
        (Some(wanted), Some(found)) if wanted == found => 0.2,
        (Some(_), Some(_)) => -0.05,
        (Some(_), None) => -0.1,
        (None, Some(_)) => 0.0,
    };

    score += match (query.suffix_dir(), parsed.suffix_dir()) {
        (None, None) => BOTH_ABSENT,
        (Some(wanted), Some(found)) if wanted == found => 0.25,
        (Some(wanted), Some(found)) if found.contains(wanted) => 0.05,
        (Some(_), Some(_)) => -0.2,
        (Some(_), None) => -0.1,
        (None, Some(_)) => 0.0,
    };

    score
}

fn house_score(house: Option<&str>, candidate: &AddressRange) -> f64 {
    let Some(house) = house else {
        return 0.0;
    };
    let house = match house.parse::<i64>() {
        Ok(house) => house,
        Err(e) => {
            log::warn!("score: ignoring house number {house:?}: {e}");
            return 0.0;
        }
    };

    let mut score = 0.0;
    if house % 2 != 0 && candidate.parity == Parity::Even {
        score = WRONG_PARITY;
    }

    let below = candidate.lower_bound.is_some_and(|lower| house < lower);
    let above = candidate.upper_bound.is_some_and(|upper| house > upper);
    if below || above {
        // Half of the upper bound (or the lower one when unbounded above),
        // not the centre of the range.
        let mid = candidate.upper_bound.or(candidate.lower_bound).unwrap_or(0) / 2;
        let scale = if candidate.lower_bound.is_some_and(|lower| lower > WIDE_RANGE_FLOOR) {
            WIDE_DISTANCE_SCALE
        } else {
            NARROW_DISTANCE_SCALE
        };
        #[allow(clippy::cast_precision_loss)]
        let distance = house.abs_diff(mid) as f64;
        score += OUT_OF_RANGE - distance / scale;
    }

    score
}

/// Picks the highest scoring candidate. The first of equally scored
/// candidates wins. Returns `None` when there are no candidates or the best
/// score is below [`ACCEPT_THRESHOLD`].
#[must_use]
pub fn best_match<'a>(
    query: &ParsedAddress,
    candidates: &'a [AddressRange],
) -> Option<(&'a AddressRange, f64)> {
    let mut best: Option<(&AddressRange, f64)> = None;

    for candidate in candidates {
        let score = score(query, candidate);
        log::trace!("best_match: {:?} scored {score}", candidate.street);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }

    best.filter(|(_, top)| *top >= ACCEPT_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(street: &str, lower: Option<i64>, upper: Option<i64>, parity: Parity) -> AddressRange {
        AddressRange {
            lower_bound: lower,
            upper_bound: upper,
            parity,
            street: street.to_string(),
            state: "WA".to_string(),
            zip: "98501".to_string(),
            plus4: None,
            period: None,
            location_code: 3406,
            rta: false,
            ptba_name: None,
            cez_name: None,
        }
    }

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn matching_street_beats_other_streets() {
        let query = tokenize("6500 Linderson Way SW");
        let candidates = [
            range("LINDERSON WAY", Some(6000), Some(7000), Parity::Even),
            range("CAPITOL WAY", Some(6000), Some(7000), Parity::Even),
        ];

        assert!(score(&query, &candidates[0]) > 0.0);
        assert!(close(score(&query, &candidates[1]), 0.0));

        let (found, _) = best_match(&query, &candidates).unwrap();
        assert_eq!(found.street, "LINDERSON WAY");
    }

    #[test]
    fn odd_house_on_even_side_scores_lower() {
        let query = tokenize("6501 Linderson Way");
        let even = range("LINDERSON WAY", Some(6000), Some(7000), Parity::Even);
        let odd = range("LINDERSON WAY", Some(6000), Some(7000), Parity::Odd);

        assert!(score(&query, &even) < score(&query, &odd));
        assert!(close(score(&query, &odd) - score(&query, &even), 0.0001));
    }

    #[test]
    fn components_add_up() {
        // Street and type match, nothing else present.
        let query = tokenize("6500 Linderson Way");
        let candidate = range("LINDERSON WAY", Some(6000), Some(7000), Parity::Both);
        assert!(close(score(&query, &candidate), 0.1 + 0.2 + 0.1));

        // Prefix directional present only in the query.
        let query = tokenize("6500 N Linderson Way");
        assert!(close(score(&query, &candidate), -0.3 + 0.2 + 0.1));

        // Suffix directional in both.
        let query = tokenize("6500 Linderson Way SW");
        let candidate = range("LINDERSON WAY SW", Some(6000), Some(7000), Parity::Both);
        assert!(close(score(&query, &candidate), 0.1 + 0.2 + 0.25));
    }

    #[test]
    fn out_of_range_distance_uses_half_the_upper_bound() {
        let query = tokenize("500 MAIN");
        let candidate = range("MAIN", Some(100), Some(200), Parity::Both);
        // mid = 200 / 2 = 100, distance 400 on the narrow scale.
        assert!(close(
            score(&query, &candidate),
            -0.1 - 400.0 / 10_000.0 + 0.3
        ));
    }

    #[test]
    fn out_of_range_without_upper_bound() {
        let query = tokenize("10000 MAIN");
        let candidate = range("MAIN", Some(20_000), None, Parity::Both);
        // mid = 20000 / 2 = 10000, so only the flat penalty applies.
        assert!(close(score(&query, &candidate), -0.1 + 0.3));

        let candidate = range("MAIN", None, None, Parity::Both);
        assert!(close(score(&query, &candidate), 0.3));
    }

    #[test]
    fn extreme_bounds_do_not_overflow() {
        let query = tokenize("9000000000000000000 MAIN");
        assert_eq!(query.house(), Some("9000000000000000000"));

        for (lower, upper) in [
            (Some(i64::MIN), Some(i64::MIN)),
            (Some(i64::MAX), Some(i64::MAX)),
            (None, Some(i64::MIN)),
        ] {
            let candidate = range("MAIN", lower, upper, Parity::Both);
            let value = score(&query, &candidate);
            assert!(value.is_finite(), "{lower:?}..{upper:?}");
            assert!(value < ACCEPT_THRESHOLD, "{lower:?}..{upper:?}");
        }
    }

    #[test]
    fn different_street_scores_zero() {
        let query = tokenize("6500 N Linderson Way SW");
        let candidate = range("CAPITOL WAY SW", Some(6000), Some(7000), Parity::Odd);
        assert!(close(score(&query, &candidate), 0.0));
    }

    #[test]
    fn unparseable_house_is_ignored() {
        let query = tokenize("99999999999999999999999 MAIN");
        let candidate = range("MAIN", Some(1), Some(2), Parity::Even);
        assert!(close(score(&query, &candidate), 0.3));
    }

    #[test]
    fn best_match_threshold_and_ties() {
        let query = tokenize("123 N MAIN ST");
        assert!(best_match(&query, &[]).is_none());

        // -0.3 (prefix missing) - 0.05 (type differs) + 0.1 (no suffix)
        let weak = [range("MAIN AVE", None, None, Parity::Both)];
        assert!(best_match(&query, &weak).is_none());

        let mut first = range("N MAIN ST", None, None, Parity::Both);
        first.location_code = 1;
        let mut second = first.clone();
        second.location_code = 2;
        let tied = [first, second];
        let (found, top) = best_match(&query, &tied).unwrap();
        assert_eq!(found.location_code, 1);
        assert!(close(top, 0.25 + 0.2 + 0.1));
    }
}
