//! Error types for cellbudget

use thiserror::Error;

/// Result alias used throughout the cellbudget crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the cellbudget library.
///
/// A receiver that falls outside a model's validity window is not an error:
/// loss computations report it as `None` and the receiver is dropped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Carrier frequency outside the supported [0.15, 100] GHz range.
    #[error("Invalid frequency: {0} GHz is outside the supported range [0.15, 100] GHz")]
    InvalidFrequency(f64),

    /// Okumura-Hata requires a known city size.
    #[error("Invalid city type: {0}")]
    InvalidCityType(String),

    /// ETSI TR 38.901 has no scenario for this area/antenna combination.
    #[error("Unsupported environment: area type {area_type} with antenna type {antenna_type}")]
    UnsupportedEnvironment {
        /// Requested area type
        area_type: String,
        /// Requested antenna type, or "none"
        antenna_type: String,
    },

    /// A parameter would drive a formula out of its domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed geometry set.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}
