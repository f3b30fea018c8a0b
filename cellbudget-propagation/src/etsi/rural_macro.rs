//! Rural Macro (RMa) scenario

use std::f64::consts::PI;

use cellbudget_common::{
    ensure_positive, round2, Result, DEFAULT_AVG_BUILDING_HEIGHT_M, DEFAULT_AVG_STREET_WIDTH_M,
};

use super::{LinkGeometry, Regime, FREQUENCY_SCALE, SPEED_OF_LIGHT};
use crate::model::ValidityWindow;

/// LOS is assumed unconditionally up to this 2D distance (m)
const LOS_CUTOFF: f64 = 10.0;

/// Upper bound of the far-field formula (m)
const FAR_FIELD_MAX_DISTANCE: f64 = 10000.0;

/// ETSI TR 38.901 Rural Macro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EtsiRuralMacro {
    /// Average building height h (m)
    pub avg_building_height: f64,
    /// Average street width W (m)
    pub avg_street_width: f64,
}

impl Default for EtsiRuralMacro {
    fn default() -> Self {
        Self {
            avg_building_height: DEFAULT_AVG_BUILDING_HEIGHT_M,
            avg_street_width: DEFAULT_AVG_STREET_WIDTH_M,
        }
    }
}

impl EtsiRuralMacro {
    /// Calibrated link distances: 10 m to 10 km
    pub const VALIDITY: ValidityWindow = ValidityWindow::new(10.0, 10000.0);

    /// Creates the scenario for the given environment dimensions.
    ///
    /// Both dimensions enter logarithms and must be strictly positive.
    pub fn new(avg_building_height: f64, avg_street_width: f64) -> Result<Self> {
        Ok(Self {
            avg_building_height: ensure_positive("avg_building_height", avg_building_height)?,
            avg_street_width: ensure_positive("avg_street_width", avg_street_width)?,
        })
    }

    /// Path loss in dB without validity gating.
    ///
    /// Returns `Ok(None)` where the scenario defines no loss: outside both
    /// the near and far-field regimes, and for NLOS links beyond 5 km.
    /// Unlike the urban scenarios there is no fallback formula.
    pub fn loss(
        &self,
        frequency_ghz: f64,
        distance_m: f64,
        tx_height: f64,
        rx_height: f64,
    ) -> Result<Option<f64>> {
        let link = LinkGeometry::new(frequency_ghz, distance_m, tx_height, rx_height)?;
        let h = ensure_positive("avg_building_height", self.avg_building_height)?;
        let w = ensure_positive("avg_street_width", self.avg_street_width)?;
        let d3 = link.distance_3d;
        let log_f = frequency_ghz.log10();

        let breakpoint =
            2.0 * PI * tx_height * rx_height * (frequency_ghz * FREQUENCY_SCALE) / SPEED_OF_LIGHT;

        let pl1 = |d: f64| {
            20.0 * (40.0 * PI * d * frequency_ghz / 3.0).log10()
                + (0.03 * h.powf(1.72)).min(10.0) * d.log10()
                - (0.044 * h.powf(1.72)).min(14.77)
                + 0.002 * h.log10() * d
        };

        let los_loss = match link.regime(breakpoint, FAR_FIELD_MAX_DISTANCE) {
            Regime::NearField => Some(pl1(d3)),
            Regime::FarField => Some(pl1(breakpoint) + 40.0 * (d3 / breakpoint).log10()),
            Regime::Outside => None,
        };

        if is_line_of_sight(&link) {
            return Ok(los_loss.map(round2));
        }

        if !link.within_nlos_envelope() {
            return Ok(None);
        }

        let nlos_loss = 161.04 - 7.1 * w.log10() + 7.5 * h.log10()
            - (24.37 - 3.7 * (h / tx_height).powi(2)) * tx_height.log10()
            + (43.42 - 3.1 * tx_height.log10()) * (d3.log10() - 3.0)
            + 20.0 * log_f
            - (3.2 * (11.75 * rx_height).log10().powi(2) - 4.97);

        // Inside the envelope one of the LOS regimes always applies
        Ok(los_loss.map(|los| round2(los.max(nlos_loss))))
    }
}

fn is_line_of_sight(link: &LinkGeometry) -> bool {
    let d = link.distance_2d;
    d <= LOS_CUTOFF || (-(d - 10.0) / 1000.0).exp() >= 0.5
}
