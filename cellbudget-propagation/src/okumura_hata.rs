//! Okumura-Hata empirical path loss model
//!
//! Classic macro-cell model for 150–1500 MHz, used here up to 2 GHz.
//! Frequencies are converted to MHz and distances to km internally.

use cellbudget_common::{ensure_positive, round2, AreaType, CityType, Error, Result};

use crate::model::ValidityWindow;

/// Okumura-Hata configured for an environment and city size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OkumuraHata {
    /// Propagation environment
    pub area_type: AreaType,
    /// City size for the mobile antenna height correction
    pub city_type: CityType,
}

impl OkumuraHata {
    /// Model family name
    pub const NAME: &'static str = "Okumura-Hata";

    /// Calibrated link distances: 1 km to 10 km
    pub const VALIDITY: ValidityWindow = ValidityWindow::new(1000.0, 10000.0);

    /// Creates the model.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCityType`] when no city size is given; the height
    /// correction factor is undefined without one.
    pub fn new(area_type: AreaType, city_type: Option<CityType>) -> Result<Self> {
        let city_type = city_type
            .ok_or_else(|| Error::InvalidCityType("city type is required for Okumura-Hata".into()))?;
        Ok(Self {
            area_type,
            city_type,
        })
    }

    /// Mobile antenna height correction a(h_rx) in dB.
    fn correction_factor(&self, frequency_mhz: f64, rx_height: f64) -> f64 {
        match self.city_type {
            CityType::Small | CityType::Medium => {
                0.8 + (1.1 * frequency_mhz.log10() - 0.7) * rx_height
                    - 1.56 * frequency_mhz.log10()
            }
            CityType::Large => {
                if (150.0..=200.0).contains(&frequency_mhz) {
                    8.29 * (1.54 * rx_height).log10().powi(2) - 1.1
                } else if (200.0..=1500.0).contains(&frequency_mhz) {
                    3.2 * (11.75 * rx_height).log10().powi(2) - 4.97
                } else {
                    0.0
                }
            }
        }
    }

    /// Path loss in dB, rounded to 2 decimals, without validity gating.
    ///
    /// # Arguments
    /// * `frequency_ghz` - Carrier frequency (GHz)
    /// * `distance_m` - 2D link distance (m)
    /// * `tx_height` - Base station antenna height (m)
    /// * `rx_height` - Mobile antenna height (m)
    pub fn loss(
        &self,
        frequency_ghz: f64,
        distance_m: f64,
        tx_height: f64,
        rx_height: f64,
    ) -> Result<f64> {
        let frequency_mhz = ensure_positive("frequency", frequency_ghz)? * 1000.0;
        let distance_km = ensure_positive("distance", distance_m)? / 1000.0;
        ensure_positive("tx_height", tx_height)?;
        ensure_positive("rx_height", rx_height)?;

        let log_f = frequency_mhz.log10();
        let log_tx = tx_height.log10();

        let loss = 69.55 + 26.16 * log_f - 13.82 * log_tx
            - self.correction_factor(frequency_mhz, rx_height)
            + (44.9 - 6.55 * log_tx) * distance_km.log10();

        let loss = match self.area_type {
            AreaType::Urban => loss,
            AreaType::Suburban => loss - 2.0 * (frequency_mhz / 28.0).log10().powi(2) - 5.4,
            AreaType::Rural => loss - 4.78 * log_f.powi(2) + 18.33 * log_f - 40.94,
        };

        Ok(round2(loss))
    }
}
