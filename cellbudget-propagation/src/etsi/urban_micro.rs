//! Urban Micro (UMi) street canyon scenario

use cellbudget_common::{round2, Result};

use super::{LinkGeometry, Regime, NLOS_ENVELOPE};
use crate::model::ValidityWindow;

/// LOS is assumed unconditionally up to this 2D distance (m)
const LOS_CUTOFF: f64 = 18.0;

/// ETSI TR 38.901 Urban Micro.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EtsiUrbanMicro;

impl EtsiUrbanMicro {
    /// Calibrated link distances: 10 m to 5 km
    pub const VALIDITY: ValidityWindow = ValidityWindow::new(10.0, 5000.0);

    /// Path loss in dB without validity gating.
    ///
    /// Same shape as Urban Macro with street-canyon coefficients.
    pub fn loss(
        &self,
        frequency_ghz: f64,
        distance_m: f64,
        tx_height: f64,
        rx_height: f64,
    ) -> Result<f64> {
        let link = LinkGeometry::new(frequency_ghz, distance_m, tx_height, rx_height)?;
        let log_d3 = link.distance_3d.log10();
        let log_f = frequency_ghz.log10();

        let breakpoint = link.urban_breakpoint();
        let los_loss = match link.regime(breakpoint, NLOS_ENVELOPE) {
            Regime::NearField => 32.4 + 21.0 * log_d3 + 20.0 * log_f,
            Regime::FarField => {
                32.4 + 40.0 * log_d3 + 20.0 * log_f
                    - 9.5 * (breakpoint.powi(2) + link.height_difference_squared()).log10()
            }
            Regime::Outside => return Ok(fallback_loss(&link)),
        };

        if is_line_of_sight(&link) {
            return Ok(round2(los_loss));
        }

        if link.within_nlos_envelope() {
            let nlos_loss = 35.3 * log_d3 + 22.4 + 21.3 * log_f - 0.3 * (rx_height - 1.5);
            Ok(round2(los_loss.max(nlos_loss)))
        } else {
            Ok(round2(fallback_loss(&link)))
        }
    }
}

fn fallback_loss(link: &LinkGeometry) -> f64 {
    32.4 + 20.0 * link.frequency_ghz.log10() + 31.9 * link.distance_3d.log10()
}

fn is_line_of_sight(link: &LinkGeometry) -> bool {
    let d = link.distance_2d;
    if d <= LOS_CUTOFF {
        return true;
    }
    LOS_CUTOFF / d + ((-d / 36.0) * (1.0 - LOS_CUTOFF / d)).exp() >= 0.5
}
