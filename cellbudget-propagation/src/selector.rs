//! Loss model selection by carrier frequency and environment

use std::ops::{Range, RangeInclusive};

use tracing::debug;

use cellbudget_common::{
    AntennaType, AreaType, CityType, Error, LinkParameters, Result, DEFAULT_AVG_BUILDING_HEIGHT_M,
    DEFAULT_AVG_STREET_WIDTH_M,
};

use crate::etsi::{EtsiRuralMacro, EtsiUrbanMacro, EtsiUrbanMicro};
use crate::model::PropagationModel;
use crate::okumura_hata::OkumuraHata;

/// Carrier frequencies served by Okumura-Hata (GHz, upper bound exclusive)
pub const OKUMURA_HATA_FREQUENCY_RANGE_GHZ: Range<f64> = 0.15..2.0;

/// Carrier frequencies served by ETSI TR 38.901 (GHz, inclusive)
pub const ETSI_FREQUENCY_RANGE_GHZ: RangeInclusive<f64> = 2.0..=100.0;

/// Picks the propagation model for a carrier frequency.
///
/// - `[0.15, 2)` GHz → Okumura-Hata for `area_type`/`city_type`
/// - `[2, 100]` GHz → the ETSI scenario for `area_type`/`antenna_type`;
///   building height and street width default to 5 m and 20 m
///
/// # Errors
///
/// - [`Error::InvalidFrequency`] outside `[0.15, 100]` GHz
/// - [`Error::InvalidCityType`] for Okumura-Hata without a city type
/// - [`Error::UnsupportedEnvironment`] for ETSI combinations other than
///   urban+macro, urban+micro and rural+macro
/// - [`Error::InvalidParameter`] for non-positive environment dimensions
pub fn select_model(
    frequency_ghz: f64,
    area_type: AreaType,
    city_type: Option<CityType>,
    antenna_type: Option<AntennaType>,
    avg_building_height: Option<f64>,
    avg_street_width: Option<f64>,
) -> Result<PropagationModel> {
    let model = if OKUMURA_HATA_FREQUENCY_RANGE_GHZ.contains(&frequency_ghz) {
        PropagationModel::OkumuraHata(OkumuraHata::new(area_type, city_type)?)
    } else if ETSI_FREQUENCY_RANGE_GHZ.contains(&frequency_ghz) {
        match (area_type, antenna_type) {
            (AreaType::Urban, Some(AntennaType::Macro)) => {
                PropagationModel::EtsiUrbanMacro(EtsiUrbanMacro)
            }
            (AreaType::Urban, Some(AntennaType::Micro)) => {
                PropagationModel::EtsiUrbanMicro(EtsiUrbanMicro)
            }
            (AreaType::Rural, Some(AntennaType::Macro)) => {
                PropagationModel::EtsiRuralMacro(EtsiRuralMacro::new(
                    avg_building_height.unwrap_or(DEFAULT_AVG_BUILDING_HEIGHT_M),
                    avg_street_width.unwrap_or(DEFAULT_AVG_STREET_WIDTH_M),
                )?)
            }
            (area_type, antenna_type) => {
                return Err(Error::UnsupportedEnvironment {
                    area_type: area_type.to_string(),
                    antenna_type: antenna_type
                        .map_or_else(|| "none".to_string(), |a| a.to_string()),
                });
            }
        }
    } else {
        return Err(Error::InvalidFrequency(frequency_ghz));
    };

    debug!(frequency_ghz, model = %model, "Selected propagation model");
    Ok(model)
}

impl PropagationModel {
    /// Selects the model for a frequency using the environment fields of
    /// `params`. See [`select_model`].
    pub fn for_link(frequency_ghz: f64, params: &LinkParameters) -> Result<Self> {
        select_model(
            frequency_ghz,
            params.area_type,
            params.city_type,
            params.antenna_type,
            params.avg_building_height,
            params.avg_street_width,
        )
    }
}
