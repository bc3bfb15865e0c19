//! Maximum Zs for circuit breakers, BS 7671:2018 Table 41.3
//!
//! Values assume U0 = 230 V with the Cmin factor of 0.95 applied, so a
//! breaker's limit is 218.5 V divided by its instantaneous trip current.
//! Table 41.3 tabulates the same figures for 0.4 s and 5 s disconnection
//! because magnetic tripping governs both times.

use shared_types::CurveType;

/// (rated current in amperes, maximum Zs in ohms)
pub(crate) type Row = (u32, f64);

/// Type B: instantaneous disconnection at 5 In
#[rustfmt::skip]
const TYPE_B: &[Row] = &[
    (3, 14.57), (6, 7.28), (10, 4.37), (16, 2.73), (20, 2.19),
    (25, 1.75), (32, 1.37), (40, 1.09), (45, 0.97), (50, 0.87),
    (63, 0.69), (80, 0.55), (100, 0.44), (125, 0.35),
];

/// Type C: instantaneous disconnection at 10 In
#[rustfmt::skip]
const TYPE_C: &[Row] = &[
    (6, 3.64), (10, 2.19), (16, 1.37), (20, 1.09), (25, 0.87),
    (32, 0.68), (40, 0.55), (45, 0.49), (50, 0.44), (63, 0.35),
    (80, 0.27), (100, 0.22), (125, 0.17),
];

/// Type D: instantaneous disconnection at 20 In
#[rustfmt::skip]
const TYPE_D: &[Row] = &[
    (6, 1.82), (10, 1.09), (16, 0.68), (20, 0.55), (25, 0.44),
    (32, 0.34), (40, 0.27), (45, 0.24), (50, 0.22), (63, 0.17),
    (80, 0.14), (100, 0.11), (125, 0.09),
];

/// The Table 41.3 partition for one tripping curve
pub(crate) fn table(curve: CurveType) -> &'static [Row] {
    match curve {
        CurveType::B => TYPE_B,
        CurveType::C => TYPE_C,
        CurveType::D => TYPE_D,
    }
}

/// Maximum Zs for a breaker, identical for both disconnection times
pub(crate) fn max_impedance(curve: CurveType, rating: u32) -> Option<f64> {
    table(curve)
        .iter()
        .find(|(amps, _)| *amps == rating)
        .map(|(_, zs)| *zs)
}

/// Rated currents tabulated for one curve, ascending
pub(crate) fn ratings(curve: CurveType) -> Vec<u32> {
    table(curve).iter().map(|(amps, _)| *amps).collect()
}
