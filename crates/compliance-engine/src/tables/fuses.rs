//! Maximum Zs for fuses, BS 7671:2018 Tables 41.2 and 41.4
//!
//! Table 41.2 covers 0.4 s disconnection (final circuits), Table 41.4
//! covers 5 s disconnection (distribution circuits). Values assume
//! U0 = 230 V with the Cmin factor of 0.95 applied.
//!
//! BS 1362 plug-top fuses protect final circuits only, so they have no
//! 5 s entries; a 5 s query for them is an unknown device, never a
//! silent fall back to the 0.4 s figures.

use shared_types::{DisconnectionTime, FuseStandard};

use super::breakers::Row;

#[rustfmt::skip]
const BS88_2_MS400: &[Row] = &[
    (6, 8.45), (10, 4.85), (16, 2.68), (20, 1.76),
    (25, 1.43), (32, 1.04), (40, 0.82), (50, 0.60),
];

#[rustfmt::skip]
const BS88_2_S5: &[Row] = &[
    (6, 12.83), (10, 7.05), (16, 3.97), (20, 2.76), (25, 2.19),
    (32, 1.75), (40, 1.28), (50, 0.99), (63, 0.78), (80, 0.57),
    (100, 0.43), (125, 0.32), (160, 0.25), (200, 0.18),
];

#[rustfmt::skip]
const BS88_3_MS400: &[Row] = &[
    (5, 10.36), (16, 2.53), (20, 1.66), (32, 0.92), (45, 0.57), (63, 0.34),
];

#[rustfmt::skip]
const BS88_3_S5: &[Row] = &[
    (5, 16.35), (16, 5.15), (20, 3.79), (32, 1.92), (45, 1.25), (63, 0.73),
];

#[rustfmt::skip]
const BS3036_MS400: &[Row] = &[
    (5, 9.10), (15, 2.42), (20, 1.68), (30, 1.04), (45, 0.57),
];

#[rustfmt::skip]
const BS3036_S5: &[Row] = &[
    (5, 16.25), (15, 5.30), (20, 3.80), (30, 2.62), (45, 1.58),
    (60, 1.11), (100, 0.50),
];

#[rustfmt::skip]
const BS1362_MS400: &[Row] = &[
    (3, 15.58), (13, 2.30),
];

/// The table partition for one fuse standard under one disconnection
/// time. Empty when the standard has no entries for that time.
pub(crate) fn table(standard: FuseStandard, time: DisconnectionTime) -> &'static [Row] {
    match (standard, time) {
        (FuseStandard::Bs88_2, DisconnectionTime::Ms400) => BS88_2_MS400,
        (FuseStandard::Bs88_2, DisconnectionTime::S5) => BS88_2_S5,
        (FuseStandard::Bs88_3, DisconnectionTime::Ms400) => BS88_3_MS400,
        (FuseStandard::Bs88_3, DisconnectionTime::S5) => BS88_3_S5,
        (FuseStandard::Bs3036, DisconnectionTime::Ms400) => BS3036_MS400,
        (FuseStandard::Bs3036, DisconnectionTime::S5) => BS3036_S5,
        (FuseStandard::Bs1362, DisconnectionTime::Ms400) => BS1362_MS400,
        (FuseStandard::Bs1362, DisconnectionTime::S5) => &[],
    }
}

/// Maximum Zs for a fuse under a disconnection time
pub(crate) fn max_impedance(
    standard: FuseStandard,
    rating: u32,
    time: DisconnectionTime,
) -> Option<f64> {
    table(standard, time)
        .iter()
        .find(|(amps, _)| *amps == rating)
        .map(|(_, zs)| *zs)
}

/// Rated currents tabulated for one standard under one time, ascending
pub(crate) fn ratings(standard: FuseStandard, time: DisconnectionTime) -> Vec<u32> {
    table(standard, time).iter().map(|(amps, _)| *amps).collect()
}
