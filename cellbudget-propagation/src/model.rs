//! The closed family of propagation models and their validity windows.

use std::fmt;

use serde::{Deserialize, Serialize};

use cellbudget_common::{AreaType, Result};

use crate::etsi::{EtsiRuralMacro, EtsiUrbanMacro, EtsiUrbanMicro};
use crate::okumura_hata::OkumuraHata;

/// Range of 2D link distances (metres, inclusive) a model is calibrated for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidityWindow {
    /// Shortest valid distance (m)
    pub min_distance: f64,
    /// Longest valid distance (m)
    pub max_distance: f64,
}

impl ValidityWindow {
    /// Creates a new window
    pub const fn new(min_distance: f64, max_distance: f64) -> Self {
        Self {
            min_distance,
            max_distance,
        }
    }

    /// Returns true if `distance` lies inside the window, bounds included.
    pub fn contains(&self, distance: f64) -> bool {
        self.min_distance <= distance && distance <= self.max_distance
    }
}

impl fmt::Display for ValidityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] m", self.min_distance, self.max_distance)
    }
}

/// A configured propagation model.
///
/// Built by [`crate::select_model`] (or [`PropagationModel::for_link`]);
/// carries only construction-time configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum PropagationModel {
    /// Okumura-Hata, 150 MHz – 2 GHz
    OkumuraHata(OkumuraHata),
    /// ETSI TR 38.901 Urban Macro
    EtsiUrbanMacro(EtsiUrbanMacro),
    /// ETSI TR 38.901 Urban Micro (street canyon)
    EtsiUrbanMicro(EtsiUrbanMicro),
    /// ETSI TR 38.901 Rural Macro
    EtsiRuralMacro(EtsiRuralMacro),
}

impl PropagationModel {
    /// Model family name as reported to consumers
    pub fn name(&self) -> &'static str {
        match self {
            PropagationModel::OkumuraHata(_) => OkumuraHata::NAME,
            PropagationModel::EtsiUrbanMacro(_)
            | PropagationModel::EtsiUrbanMicro(_)
            | PropagationModel::EtsiRuralMacro(_) => crate::etsi::NAME,
        }
    }

    /// Environment the model was configured for
    pub fn area_type(&self) -> AreaType {
        match self {
            PropagationModel::OkumuraHata(model) => model.area_type,
            PropagationModel::EtsiUrbanMacro(_) | PropagationModel::EtsiUrbanMicro(_) => {
                AreaType::Urban
            }
            PropagationModel::EtsiRuralMacro(_) => AreaType::Rural,
        }
    }

    /// Distance window the model is calibrated for
    pub fn validity(&self) -> ValidityWindow {
        match self {
            PropagationModel::OkumuraHata(_) => OkumuraHata::VALIDITY,
            PropagationModel::EtsiUrbanMacro(_) => EtsiUrbanMacro::VALIDITY,
            PropagationModel::EtsiUrbanMicro(_) => EtsiUrbanMicro::VALIDITY,
            PropagationModel::EtsiRuralMacro(_) => EtsiRuralMacro::VALIDITY,
        }
    }

    /// Path loss in dB for a serving link.
    ///
    /// Returns `Ok(None)` when `distance_m` lies outside [`Self::validity`]
    /// or the model has no value for this geometry; such receivers are
    /// excluded from results rather than reported as errors.
    pub fn path_loss(
        &self,
        frequency_ghz: f64,
        distance_m: f64,
        tx_height: f64,
        rx_height: f64,
    ) -> Result<Option<f64>> {
        if !self.validity().contains(distance_m) {
            return Ok(None);
        }
        self.unguarded_loss(frequency_ghz, distance_m, tx_height, rx_height)
    }

    /// Path loss in dB ignoring the validity window.
    ///
    /// Interference aggregation evaluates neighbour links well beyond the
    /// calibrated range; outside the near/far-field regimes the ETSI models
    /// answer with their simplified fallback formula (unrounded). Rural
    /// Macro still returns `None` where it has no formula at all.
    ///
    /// # Errors
    ///
    /// [`cellbudget_common::Error::InvalidParameter`] if the frequency,
    /// distance or a height is not strictly positive.
    pub fn unguarded_loss(
        &self,
        frequency_ghz: f64,
        distance_m: f64,
        tx_height: f64,
        rx_height: f64,
    ) -> Result<Option<f64>> {
        match self {
            PropagationModel::OkumuraHata(model) => model
                .loss(frequency_ghz, distance_m, tx_height, rx_height)
                .map(Some),
            PropagationModel::EtsiUrbanMacro(model) => {
                model.loss(frequency_ghz, distance_m, tx_height, rx_height).map(Some)
            }
            PropagationModel::EtsiUrbanMicro(model) => {
                model.loss(frequency_ghz, distance_m, tx_height, rx_height).map(Some)
            }
            PropagationModel::EtsiRuralMacro(model) => {
                model.loss(frequency_ghz, distance_m, tx_height, rx_height)
            }
        }
    }
}

impl fmt::Display for PropagationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        let window = self.validity();
        match self {
            PropagationModel::OkumuraHata(model) => write!(
                f,
                "{name} ({}, {} city, {window})",
                model.area_type, model.city_type
            ),
            PropagationModel::EtsiUrbanMacro(_) => write!(f, "{name} UMa ({window})"),
            PropagationModel::EtsiUrbanMicro(_) => write!(f, "{name} UMi ({window})"),
            PropagationModel::EtsiRuralMacro(_) => write!(f, "{name} RMa ({window})"),
        }
    }
}
