//! Simulation run configuration
//!
//! A run is described by a YAML document:
//!
//! ```yaml
//! frequency_ghz: 2.0
//! bandwidth_mhz: 20.0
//! log_level: info
//! link:
//!   area_type: urban
//!   antenna_type: macro
//!   tx_height: 25.0
//!   rx_height: 1.5
//!   tx_power: 46.0
//!   tx_gain: 18.0
//!   tx_losses: 2.0
//!   rx_gain: 4.0
//!   rx_losses: 1.0
//! geometry:
//!   antenna: { x: 458000.0, y: 5069000.0 }
//!   radius_m: 4000.0
//!   num_receivers: 20
//!   layout: line
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use cellbudget_sim::{load_and_validate_simulation_config, simulate};
//!
//! let config = load_and_validate_simulation_config("config/urban-macro.yaml")?;
//! let geometry = config.build_geometry()?;
//! let table = simulate(config.frequency_ghz, config.bandwidth_mhz, &config.link, &geometry)?;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cellbudget_common::{GeometrySet, LinkParameters, LogLevel};
use cellbudget_propagation::{
    PropagationModel, ETSI_FREQUENCY_RANGE_GHZ, OKUMURA_HATA_FREQUENCY_RANGE_GHZ,
};

use crate::geometry::{generate_geometry, GeometryConfig};

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ConfigValidationError),
}

/// Errors that can occur during configuration validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Carrier frequency outside every model's range
    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    /// Non-positive bandwidth
    #[error("Invalid bandwidth: {0}")]
    InvalidBandwidth(String),

    /// Bad link parameters or no model for the environment
    #[error("Invalid link parameters: {0}")]
    InvalidLink(String),

    /// Bad cluster layout
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// One simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Carrier frequency (GHz)
    pub frequency_ghz: f64,
    /// Channel bandwidth (MHz)
    pub bandwidth_mhz: f64,
    /// Radio link parameters
    pub link: LinkParameters,
    /// Cell cluster and receiver layout
    pub geometry: GeometryConfig,
    /// Log verbosity, overridden by `RUST_LOG`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
}

impl SimulationConfig {
    /// Generates the cell cluster described by `geometry`.
    pub fn build_geometry(&self) -> cellbudget_common::Result<GeometrySet> {
        generate_geometry(&self.geometry)
    }
}

/// Loads a simulation configuration from a YAML file.
///
/// The configuration is only parsed; call [`validate_simulation_config`]
/// to check the values.
pub fn load_simulation_config<P: AsRef<Path>>(path: P) -> Result<SimulationConfig, ConfigError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    load_simulation_config_from_str(&contents)
}

/// Loads a simulation configuration from a YAML string.
pub fn load_simulation_config_from_str(yaml: &str) -> Result<SimulationConfig, ConfigError> {
    serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Validates a simulation configuration.
///
/// # Validation Rules
///
/// - Frequency must lie in [0.15, 100] GHz
/// - Bandwidth must be positive
/// - Heights, environment dimensions and noise temperature must be positive
/// - A propagation model must exist for the frequency and environment
///   (Okumura-Hata needs a city type, ETSI needs a supported antenna type)
/// - Radius must be positive and at least one receiver requested
pub fn validate_simulation_config(config: &SimulationConfig) -> Result<(), ConfigValidationError> {
    let min_frequency = OKUMURA_HATA_FREQUENCY_RANGE_GHZ.start;
    let max_frequency = *ETSI_FREQUENCY_RANGE_GHZ.end();
    if !(min_frequency..=max_frequency).contains(&config.frequency_ghz) {
        return Err(ConfigValidationError::InvalidFrequency(format!(
            "{} GHz is outside [{}, {}] GHz",
            config.frequency_ghz, min_frequency, max_frequency
        )));
    }

    if !(config.bandwidth_mhz.is_finite() && config.bandwidth_mhz > 0.0) {
        return Err(ConfigValidationError::InvalidBandwidth(format!(
            "bandwidth must be positive, got {} MHz",
            config.bandwidth_mhz
        )));
    }

    config
        .link
        .validate()
        .map_err(|e| ConfigValidationError::InvalidLink(e.to_string()))?;
    PropagationModel::for_link(config.frequency_ghz, &config.link)
        .map_err(|e| ConfigValidationError::InvalidLink(e.to_string()))?;

    config
        .geometry
        .validate()
        .map_err(|e| ConfigValidationError::InvalidGeometry(e.to_string()))?;

    Ok(())
}

/// Loads and validates a simulation configuration in one step.
pub fn load_and_validate_simulation_config<P: AsRef<Path>>(
    path: P,
) -> Result<SimulationConfig, ConfigError> {
    let config = load_simulation_config(path)?;
    validate_simulation_config(&config)?;
    Ok(config)
}
