//! Maximum Zs for RCDs, BS 7671:2018 Table 41.5
//!
//! For TT systems the product of Zs and rated residual current must not
//! exceed the 50 V touch-voltage limit, so each limit is 50 V divided by
//! the rated residual current. Independent of disconnection time.

/// Touch-voltage limit from which every RCD entry is derived
const TOUCH_VOLTAGE_V: f64 = 50.0;

/// Rated residual operating currents with tabulated limits, in mA
pub(crate) const RESIDUAL_RATINGS_MA: &[u32] = &[10, 30, 100, 300, 500];

/// Maximum Zs for an RCD rated residual current
pub(crate) fn max_impedance(residual_ma: u32) -> Option<f64> {
    if !RESIDUAL_RATINGS_MA.contains(&residual_ma) {
        return None;
    }
    let amps = f64::from(residual_ma) / 1000.0;
    Some(round_2dp(TOUCH_VOLTAGE_V / amps))
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
