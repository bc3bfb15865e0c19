//! Derived values: test thresholds, table citations, rating lists
//!
//! On-site Zs measurements are compared against 80 % of the tabulated
//! maximum because conductor resistance rises with temperature under
//! fault conditions while testing happens near ambient.

use shared_types::{DeviceFamily, DeviceSelection, DisconnectionTime, ProtectiveDevice};

use crate::error::EngineError;
use crate::tables;

/// Fraction of the tabulated maximum used as the measurement limit
pub const TEST_FACTOR: f64 = 0.8;

/// 80 % of a tabulated maximum, rounded once to three decimal places
///
/// Rounding is half-away-from-zero and applied exactly once, so the
/// derived value is stable however often it is recomputed.
pub fn test_threshold(max_impedance: f64) -> f64 {
    round_3dp(max_impedance * TEST_FACTOR)
}

fn round_3dp(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// The BS 7671 table a device's maximum Zs is drawn from
///
/// Total over resolved devices: breakers cite Table 41.3 whatever the
/// disconnection time, fuses cite the table for their time, RCDs cite
/// Table 41.5.
pub fn citation(device: ProtectiveDevice, time: DisconnectionTime) -> &'static str {
    match device {
        ProtectiveDevice::CircuitBreaker { .. } => "BS 7671:2018 Table 41.3",
        ProtectiveDevice::Fuse { .. } => match time {
            DisconnectionTime::Ms400 => "BS 7671:2018 Table 41.2",
            DisconnectionTime::S5 => "BS 7671:2018 Table 41.4",
        },
        ProtectiveDevice::Rcd { .. } => "BS 7671:2018 Table 41.5",
    }
}

/// Rated currents available for a selection's family and sub-type
///
/// Drives rating dropdowns: a breaker selection needs its curve, a fuse
/// selection needs its standard (the list then depends on the
/// disconnection time), an RCD selection lists residual ratings in mA.
pub fn available_ratings(
    selection: &DeviceSelection,
    time: DisconnectionTime,
) -> Result<Vec<u32>, EngineError> {
    match selection.family {
        DeviceFamily::CircuitBreaker => {
            let curve = selection
                .curve
                .ok_or(EngineError::IncompleteDescriptor("curve"))?;
            Ok(tables::breakers::ratings(curve))
        }
        DeviceFamily::Fuse => {
            let standard = selection
                .fuse_standard
                .ok_or(EngineError::IncompleteDescriptor("fuse standard"))?;
            Ok(tables::fuses::ratings(standard, time))
        }
        DeviceFamily::Rcd => Ok(tables::rcd::RESIDUAL_RATINGS_MA.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{CurveType, FuseStandard};

    #[test]
    fn test_threshold_of_reference_breaker() {
        assert_eq!(test_threshold(1.37), 1.096);
    }

    #[test]
    fn test_threshold_rounds_to_three_decimals() {
        assert_eq!(test_threshold(1.99), 1.592);
        assert_eq!(test_threshold(0.27), 0.216);
        assert_eq!(test_threshold(1666.67), 1333.336);
    }

    #[test]
    fn test_threshold_never_exceeds_tabulated_value() {
        for time in [DisconnectionTime::Ms400, DisconnectionTime::S5] {
            for (device, zs) in crate::tables::entries(time) {
                assert!(test_threshold(zs) <= zs, "{}", device);
            }
        }
    }

    #[test]
    fn test_citations_per_family() {
        let breaker = ProtectiveDevice::CircuitBreaker {
            curve: CurveType::B,
            rating: 32,
        };
        let fuse = ProtectiveDevice::Fuse {
            standard: FuseStandard::Bs88_2,
            rating: 20,
        };
        let rcd = ProtectiveDevice::Rcd { residual_ma: 30 };

        // Breakers and RCDs cite one table regardless of time
        for time in [DisconnectionTime::Ms400, DisconnectionTime::S5] {
            assert_eq!(citation(breaker, time), "BS 7671:2018 Table 41.3");
            assert_eq!(citation(rcd, time), "BS 7671:2018 Table 41.5");
        }
        assert_eq!(
            citation(fuse, DisconnectionTime::Ms400),
            "BS 7671:2018 Table 41.2"
        );
        assert_eq!(
            citation(fuse, DisconnectionTime::S5),
            "BS 7671:2018 Table 41.4"
        );
    }

    #[test]
    fn test_available_ratings_for_breaker_curve() {
        let sel = DeviceSelection::breaker(CurveType::B, 32);
        let ratings = available_ratings(&sel, DisconnectionTime::Ms400).unwrap();
        assert_eq!(ratings.first(), Some(&3));
        assert_eq!(ratings.last(), Some(&125));
    }

    #[test]
    fn test_available_ratings_require_sub_type() {
        let sel = DeviceSelection {
            family: DeviceFamily::CircuitBreaker,
            curve: None,
            fuse_standard: None,
            rating: None,
        };
        assert_eq!(
            available_ratings(&sel, DisconnectionTime::Ms400),
            Err(EngineError::IncompleteDescriptor("curve"))
        );
    }

    #[test]
    fn test_available_ratings_empty_for_plug_top_at_five_seconds() {
        let sel = DeviceSelection::fuse(FuseStandard::Bs1362, 13);
        assert!(available_ratings(&sel, DisconnectionTime::S5)
            .unwrap()
            .is_empty());
    }
}
