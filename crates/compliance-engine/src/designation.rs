//! Quick-designation shorthand parser
//!
//! Breakers are commonly written as a curve letter glued to the rated
//! current, e.g. "B32" on a consumer unit schedule. Parsing one gives a
//! breaker selection ready for a threshold lookup.

use lazy_static::lazy_static;
use regex::Regex;

use shared_types::{CurveType, DeviceSelection};

lazy_static! {
    /// Exactly one curve letter followed by the rating, nothing else
    static ref DESIGNATION_PATTERN: Regex = Regex::new(r"^(?i)([BCD])([0-9]+)$").unwrap();
}

/// Parse shorthand like "B32" into a circuit-breaker selection
///
/// Case-insensitive on the curve letter. Anything that is not exactly
/// one valid curve letter followed by one or more digits yields `None`,
/// so garbled input never produces a wrong descriptor.
pub fn parse_quick_designation(code: &str) -> Option<DeviceSelection> {
    let caps = DESIGNATION_PATTERN.captures(code)?;

    let curve = match caps.get(1)?.as_str().to_ascii_uppercase().as_str() {
        "B" => CurveType::B,
        "C" => CurveType::C,
        "D" => CurveType::D,
        _ => return None,
    };
    let rating: u32 = caps.get(2)?.as_str().parse().ok()?;

    Some(DeviceSelection::breaker(curve, rating))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_standard_designations() {
        assert_eq!(
            parse_quick_designation("B32"),
            Some(DeviceSelection::breaker(CurveType::B, 32))
        );
        assert_eq!(
            parse_quick_designation("C6"),
            Some(DeviceSelection::breaker(CurveType::C, 6))
        );
        assert_eq!(
            parse_quick_designation("D125"),
            Some(DeviceSelection::breaker(CurveType::D, 125))
        );
    }

    #[test]
    fn test_curve_letter_is_case_insensitive() {
        assert_eq!(
            parse_quick_designation("b32"),
            parse_quick_designation("B32")
        );
        assert_eq!(
            parse_quick_designation("d63"),
            Some(DeviceSelection::breaker(CurveType::D, 63))
        );
    }

    #[test]
    fn test_rejects_garbled_input() {
        assert_eq!(parse_quick_designation("32B"), None);
        assert_eq!(parse_quick_designation("X32"), None);
        assert_eq!(parse_quick_designation("B"), None);
        assert_eq!(parse_quick_designation(""), None);
        assert_eq!(parse_quick_designation("B 32"), None);
        assert_eq!(parse_quick_designation("B32A"), None);
        assert_eq!(parse_quick_designation("BC32"), None);
    }

    #[test]
    fn test_oversized_rating_is_no_match() {
        // Digits beyond u32 range parse as no match, not a panic
        assert_eq!(parse_quick_designation("B99999999999999999999"), None);
    }
}
