//! Signal to interference plus noise ratio

use cellbudget_common::round2;

/// Converts a power in dBm to watts.
pub fn dbm_to_watts(power_dbm: f64) -> f64 {
    1e-3 * 10f64.powf(power_dbm / 10.0)
}

/// SINR in dB from signal, noise and interference powers in dBm.
///
/// The three powers are combined in the linear domain:
/// `10·log10(S / (N + I))`.
pub fn sinr(signal_dbm: f64, noise_dbm: f64, interference_dbm: f64) -> f64 {
    let signal = dbm_to_watts(signal_dbm);
    let noise = dbm_to_watts(noise_dbm);
    let interference = dbm_to_watts(interference_dbm);

    round2(10.0 * (signal / (noise + interference)).log10())
}
