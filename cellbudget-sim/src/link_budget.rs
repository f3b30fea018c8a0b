//! Single-link budget arithmetic
//!
//! EIRP, received power, Johnson-Nyquist noise, SNR and Shannon capacity.
//! Every result is rounded to 2 decimals.

use cellbudget_common::{round2, LinkParameters};

/// Boltzmann constant (J/K)
pub const BOLTZMANN_CONSTANT: f64 = 1.38e-23;

/// Reference power for dBm (W)
const MILLIWATT: f64 = 1e-3;

/// EIRP and received power of one link, both in dBm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceivedPower {
    /// Effective isotropic radiated power (dBm)
    pub eirp: f64,
    /// Power at the receiver input (dBm)
    pub received_power: f64,
}

/// Transmit and receive chain of a link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkBudget {
    /// Transmitter output power (dBm)
    pub tx_power: f64,
    /// Transmitter antenna gain (dBi)
    pub tx_gain: f64,
    /// Transmitter losses (dB)
    pub tx_losses: f64,
    /// Receiver antenna gain (dBi)
    pub rx_gain: f64,
    /// Receiver losses (dB)
    pub rx_losses: f64,
}

impl LinkBudget {
    /// Extracts the power chain from the run parameters
    pub fn from_params(params: &LinkParameters) -> Self {
        Self {
            tx_power: params.tx_power,
            tx_gain: params.tx_gain,
            tx_losses: params.tx_losses,
            rx_gain: params.rx_gain,
            rx_losses: params.rx_losses,
        }
    }

    /// EIRP = P_tx + G_tx - L_tx (unrounded)
    fn eirp(&self) -> f64 {
        self.tx_power + self.tx_gain - self.tx_losses
    }

    /// EIRP and received power for a path loss in dB.
    ///
    /// Received power = EIRP - path loss + G_rx - L_rx. Rounding is
    /// applied to each output, not to the intermediate EIRP.
    pub fn received_power(&self, path_loss: f64) -> ReceivedPower {
        let eirp = self.eirp();
        let received_power = eirp - path_loss + self.rx_gain - self.rx_losses;
        ReceivedPower {
            eirp: round2(eirp),
            received_power: round2(received_power),
        }
    }
}

impl From<&LinkParameters> for LinkBudget {
    fn from(params: &LinkParameters) -> Self {
        Self::from_params(params)
    }
}

/// Thermal noise power in dBm for a bandwidth in MHz.
///
/// `10·log10(k·T·B / 1 mW)`. Callers validate that bandwidth and
/// temperature are positive.
pub fn thermal_noise(bandwidth_mhz: f64, temperature_k: f64) -> f64 {
    let bandwidth_hz = bandwidth_mhz * 1e6;
    round2(10.0 * (BOLTZMANN_CONSTANT * temperature_k * bandwidth_hz / MILLIWATT).log10())
}

/// Signal-to-noise ratio in dB, floored at 0.
pub fn snr(signal: f64, noise: f64) -> f64 {
    round2((signal - noise).max(0.0))
}

/// Shannon capacity in kbit/s.
///
/// The SNR is used as given inside `log2(1 + snr)`; no dB to linear
/// conversion is applied.
pub fn capacity(bandwidth_mhz: f64, snr_db: f64) -> f64 {
    let bandwidth_hz = bandwidth_mhz * 1e6;
    round2(bandwidth_hz * (1.0 + snr_db).log2() / 1e3)
}
