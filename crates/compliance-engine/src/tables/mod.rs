//! Reference data store: the maximum-Zs tables of BS 7671 Chapter 41
//!
//! One module per device family, dispatched here by tagged variant so
//! adding a family is a compile-time-checked change. Raw tables stay
//! crate-private; the derivation and matching layers are the only
//! consumers, which keeps a seam for swapping the data source later.
//!
//! Lookup contract: `Some(zs)` with a positive finite value, or `None`
//! when the cell is absent. Absence is never encoded as zero.

pub(crate) mod breakers;
pub(crate) mod fuses;
pub(crate) mod rcd;

use shared_types::{CurveType, DisconnectionTime, FuseStandard, ProtectiveDevice};

/// Maximum tabulated Zs for a device under a disconnection time
pub(crate) fn max_impedance(device: ProtectiveDevice, time: DisconnectionTime) -> Option<f64> {
    match device {
        ProtectiveDevice::CircuitBreaker { curve, rating } => {
            breakers::max_impedance(curve, rating)
        }
        ProtectiveDevice::Fuse { standard, rating } => {
            fuses::max_impedance(standard, rating, time)
        }
        ProtectiveDevice::Rcd { residual_ma } => rcd::max_impedance(residual_ma),
    }
}

/// Every tabulated (device, maximum Zs) pair for one disconnection time
///
/// Breakers appear across all curves and ratings, fuses across the
/// standards and ratings present in that time's table, RCDs always.
pub(crate) fn entries(time: DisconnectionTime) -> Vec<(ProtectiveDevice, f64)> {
    let mut entries = Vec::new();

    for curve in CurveType::all() {
        for (rating, zs) in breakers::table(curve) {
            entries.push((
                ProtectiveDevice::CircuitBreaker {
                    curve,
                    rating: *rating,
                },
                *zs,
            ));
        }
    }

    for standard in FuseStandard::all() {
        for (rating, zs) in fuses::table(standard, time) {
            entries.push((
                ProtectiveDevice::Fuse {
                    standard,
                    rating: *rating,
                },
                *zs,
            ));
        }
    }

    for residual_ma in rcd::RESIDUAL_RATINGS_MA {
        if let Some(zs) = rcd::max_impedance(*residual_ma) {
            entries.push((
                ProtectiveDevice::Rcd {
                    residual_ma: *residual_ma,
                },
                zs,
            ));
        }
    }

    entries
}
