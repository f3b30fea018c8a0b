//! ETSI TR 38.901 path loss scenarios
//!
//! All three scenarios share the same evaluation shape:
//!
//! 1. 3D distance from the 2D ground distance and the antenna height
//!    difference.
//! 2. LOS/NLOS decision from a distance-dependent probability compared
//!    against 0.5; LOS is unconditional below a near-field cutoff.
//! 3. Breakpoint distance from effective antenna heights and frequency.
//! 4. Near-field formula on `[10 m, breakpoint]`, far-field formula on
//!    `[breakpoint, upper bound]`, scenario fallback elsewhere.
//! 5. NLOS links take the larger of the LOS loss and the NLOS formula,
//!    within a 5 km envelope.

mod rural_macro;
mod urban_macro;
mod urban_micro;

pub use rural_macro::EtsiRuralMacro;
pub use urban_macro::EtsiUrbanMacro;
pub use urban_micro::EtsiUrbanMicro;

use cellbudget_common::{ensure_positive, Result};

/// Model family name shared by every scenario
pub const NAME: &str = "ETSI-TR-38-901";

/// Frequency multiplier used in the breakpoint distance.
///
/// Note: this is 10×10⁹, not the GHz→Hz factor 1×10⁹, so breakpoints come
/// out ten times larger than the textbook value. Kept as-is pending
/// confirmation from the model owners.
pub const FREQUENCY_SCALE: f64 = 10e9;

/// Speed of light used by the breakpoint formulas (m/s)
const SPEED_OF_LIGHT: f64 = 3e8;

/// Effective environment height for the urban breakpoint (m)
const EFFECTIVE_ENVIRONMENT_HEIGHT: f64 = 1.0;

/// Shortest distance covered by the near-field formula (m)
const NEAR_FIELD_MIN_DISTANCE: f64 = 10.0;

/// Longest distance for which the NLOS floor is applied (m)
const NLOS_ENVELOPE: f64 = 5000.0;

/// Distance regime of a link relative to the breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Regime {
    /// `[10 m, breakpoint]`
    NearField,
    /// `[breakpoint, upper bound]`
    FarField,
    /// Anywhere else
    Outside,
}

/// Validated link geometry shared by the scenarios
#[derive(Debug, Clone, Copy)]
struct LinkGeometry {
    frequency_ghz: f64,
    distance_2d: f64,
    distance_3d: f64,
    tx_height: f64,
    rx_height: f64,
}

impl LinkGeometry {
    fn new(frequency_ghz: f64, distance_m: f64, tx_height: f64, rx_height: f64) -> Result<Self> {
        ensure_positive("frequency", frequency_ghz)?;
        ensure_positive("distance", distance_m)?;
        ensure_positive("tx_height", tx_height)?;
        ensure_positive("rx_height", rx_height)?;

        let distance_3d = (distance_m.powi(2) + (tx_height - rx_height).powi(2)).sqrt();
        Ok(Self {
            frequency_ghz,
            distance_2d: distance_m,
            distance_3d,
            tx_height,
            rx_height,
        })
    }

    fn regime(&self, breakpoint: f64, upper_bound: f64) -> Regime {
        let d = self.distance_2d;
        if NEAR_FIELD_MIN_DISTANCE <= d && d <= breakpoint {
            Regime::NearField
        } else if breakpoint <= d && d <= upper_bound {
            Regime::FarField
        } else {
            Regime::Outside
        }
    }

    fn within_nlos_envelope(&self) -> bool {
        NEAR_FIELD_MIN_DISTANCE <= self.distance_2d && self.distance_2d <= NLOS_ENVELOPE
    }

    /// Squared antenna height difference, used by the urban far-field terms
    fn height_difference_squared(&self) -> f64 {
        (self.tx_height - self.rx_height).powi(2)
    }

    /// Urban breakpoint distance d'_BP from effective antenna heights
    fn urban_breakpoint(&self) -> f64 {
        4.0 * (self.tx_height - EFFECTIVE_ENVIRONMENT_HEIGHT)
            * (self.rx_height - EFFECTIVE_ENVIRONMENT_HEIGHT)
            * (self.frequency_ghz * FREQUENCY_SCALE)
            / SPEED_OF_LIGHT
    }
}
