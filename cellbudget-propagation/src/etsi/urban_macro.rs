//! Urban Macro (UMa) scenario

use cellbudget_common::{round2, Result};

use super::{LinkGeometry, Regime, NLOS_ENVELOPE};
use crate::model::ValidityWindow;

/// LOS is assumed unconditionally up to this 2D distance (m)
const LOS_CUTOFF: f64 = 18.0;

/// ETSI TR 38.901 Urban Macro.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EtsiUrbanMacro;

impl EtsiUrbanMacro {
    /// Calibrated link distances: 10 m to 5 km
    pub const VALIDITY: ValidityWindow = ValidityWindow::new(10.0, 5000.0);

    /// Path loss in dB without validity gating.
    ///
    /// Inside the near/far-field regimes the result is rounded to 2
    /// decimals. Outside them the simplified fallback formula is returned
    /// unrounded.
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
            Regime::NearField => 28.0 + 22.0 * log_d3 + 20.0 * log_f,
            Regime::FarField => {
                28.0 + 40.0 * log_d3 + 20.0 * log_f
                    - 9.0 * (breakpoint.powi(2) + link.height_difference_squared()).log10()
            }
            Regime::Outside => return Ok(fallback_loss(&link)),
        };

        if is_line_of_sight(&link) {
            return Ok(round2(los_loss));
        }

        if link.within_nlos_envelope() {
            let nlos_loss =
                13.54 + 39.08 * log_d3 + 20.0 * log_f - 0.6 * (rx_height - 1.5);
            Ok(round2(los_loss.max(nlos_loss)))
        } else {
            Ok(round2(fallback_loss(&link)))
        }
    }
}

/// Simplified loss used outside the modelled regimes
fn fallback_loss(link: &LinkGeometry) -> f64 {
    32.4 + 20.0 * link.frequency_ghz.log10() + 30.0 * link.distance_3d.log10()
}

fn is_line_of_sight(link: &LinkGeometry) -> bool {
    let d = link.distance_2d;
    if d <= LOS_CUTOFF {
        return true;
    }

    let c = if link.rx_height <= 13.0 {
        0.0
    } else {
        ((link.rx_height - 13.0) / 10.0).powf(1.5)
    };

    let probability = LOS_CUTOFF / d
        + ((-d / 63.0) * (1.0 - LOS_CUTOFF / d)).exp()
            * (1.0 + c * (5.0 / 4.0) * (d / 100.0).powi(3) * (-d / 150.0).exp());

    probability >= 0.5
}
