//! Link configuration: environment classification and radio parameters
//!
//! `LinkParameters` is the immutable configuration shared by every receiver
//! of a run. Optional environment fields fall back to the documented
//! defaults at the point where a propagation model is selected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::numeric::ensure_positive;

/// Average building height used by the ETSI models when none is configured (m)
pub const DEFAULT_AVG_BUILDING_HEIGHT_M: f64 = 5.0;

/// Average street width used by the ETSI models when none is configured (m)
pub const DEFAULT_AVG_STREET_WIDTH_M: f64 = 20.0;

/// Receiver noise temperature used for thermal noise (K)
pub const DEFAULT_NOISE_TEMPERATURE_K: f64 = 300.0;

/// Propagation environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AreaType {
    /// Dense built-up area
    Urban,
    /// Residential outskirts
    Suburban,
    /// Open country
    Rural,
}

impl fmt::Display for AreaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaType::Urban => write!(f, "urban"),
            AreaType::Suburban => write!(f, "suburban"),
            AreaType::Rural => write!(f, "rural"),
        }
    }
}

impl FromStr for AreaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "urban" => Ok(AreaType::Urban),
            "suburban" => Ok(AreaType::Suburban),
            "rural" => Ok(AreaType::Rural),
            _ => Err(Error::InvalidParameter(format!("unknown area type: {s}"))),
        }
    }
}

impl TryFrom<String> for AreaType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// City size, used by the Okumura-Hata mobile antenna height correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CityType {
    /// Small city
    Small,
    /// Medium-sized city
    Medium,
    /// Large city
    Large,
}

impl fmt::Display for CityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityType::Small => write!(f, "small"),
            CityType::Medium => write!(f, "medium"),
            CityType::Large => write!(f, "large"),
        }
    }
}

impl FromStr for CityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "small" => Ok(CityType::Small),
            "medium" => Ok(CityType::Medium),
            "large" => Ok(CityType::Large),
            _ => Err(Error::InvalidCityType(s.to_string())),
        }
    }
}

impl TryFrom<String> for CityType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Base station antenna deployment, used by the ETSI TR 38.901 scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AntennaType {
    /// Above-rooftop macro cell
    Macro,
    /// Below-rooftop street-level micro cell
    Micro,
}

impl fmt::Display for AntennaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AntennaType::Macro => write!(f, "macro"),
            AntennaType::Micro => write!(f, "micro"),
        }
    }
}

impl FromStr for AntennaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "macro" => Ok(AntennaType::Macro),
            "micro" => Ok(AntennaType::Micro),
            _ => Err(Error::InvalidParameter(format!("unknown antenna type: {s}"))),
        }
    }
}

impl TryFrom<String> for AntennaType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

fn default_noise_temperature() -> f64 {
    DEFAULT_NOISE_TEMPERATURE_K
}

/// Radio and environment parameters for one simulation run.
///
/// Powers are in dBm, gains in dBi, losses in dB, lengths in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkParameters {
    /// Propagation environment
    pub area_type: AreaType,
    /// City size (Okumura-Hata only)
    #[serde(default)]
    pub city_type: Option<CityType>,
    /// Antenna deployment (ETSI only)
    #[serde(default)]
    pub antenna_type: Option<AntennaType>,
    /// Average building height; [`DEFAULT_AVG_BUILDING_HEIGHT_M`] when absent
    #[serde(default)]
    pub avg_building_height: Option<f64>,
    /// Average street width; [`DEFAULT_AVG_STREET_WIDTH_M`] when absent
    #[serde(default)]
    pub avg_street_width: Option<f64>,
    /// Transmitter antenna height
    pub tx_height: f64,
    /// Receiver antenna height
    pub rx_height: f64,
    /// Transmitter output power
    pub tx_power: f64,
    /// Transmitter antenna gain
    pub tx_gain: f64,
    /// Transmitter feeder/cable losses
    pub tx_losses: f64,
    /// Receiver antenna gain
    pub rx_gain: f64,
    /// Receiver losses
    pub rx_losses: f64,
    /// Noise temperature for thermal noise (K, default 300)
    #[serde(default = "default_noise_temperature")]
    pub noise_temperature_k: f64,
}

impl LinkParameters {
    /// Average building height with the default applied
    pub fn building_height(&self) -> f64 {
        self.avg_building_height
            .unwrap_or(DEFAULT_AVG_BUILDING_HEIGHT_M)
    }

    /// Average street width with the default applied
    pub fn street_width(&self) -> f64 {
        self.avg_street_width.unwrap_or(DEFAULT_AVG_STREET_WIDTH_M)
    }

    /// Validates the parameters.
    ///
    /// Heights, environment dimensions and the noise temperature feed
    /// logarithms and must be strictly positive; power budget terms only
    /// need to be finite.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("tx_height", self.tx_height)?;
        ensure_positive("rx_height", self.rx_height)?;
        ensure_positive("avg_building_height", self.building_height())?;
        ensure_positive("avg_street_width", self.street_width())?;
        ensure_positive("noise_temperature_k", self.noise_temperature_k)?;

        for (name, value) in [
            ("tx_power", self.tx_power),
            ("tx_gain", self.tx_gain),
            ("tx_losses", self.tx_losses),
            ("rx_gain", self.rx_gain),
            ("rx_losses", self.rx_losses),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for LinkParameters {
    /// Urban macro cell with a 40 m mast and a handheld receiver.
    fn default() -> Self {
        Self {
            area_type: AreaType::Urban,
            city_type: Some(CityType::Large),
            antenna_type: Some(AntennaType::Macro),
            avg_building_height: Some(DEFAULT_AVG_BUILDING_HEIGHT_M),
            avg_street_width: Some(DEFAULT_AVG_STREET_WIDTH_M),
            tx_height: 40.0,
            rx_height: 1.5,
            tx_power: 46.0,
            tx_gain: 18.0,
            tx_losses: 2.0,
            rx_gain: 4.0,
            rx_losses: 1.0,
            noise_temperature_k: DEFAULT_NOISE_TEMPERATURE_K,
        }
    }
}
