//! Common types and utilities for cellbudget
//!
//! This crate provides the planar geometry types, link configuration,
//! error type and logging bootstrap shared by the propagation models,
//! the link-budget pipeline and the command line driver.

pub mod config;
pub mod error;
pub mod logging;
pub mod numeric;
pub mod types;

pub use config::{
    AntennaType, AreaType, CityType, LinkParameters, DEFAULT_AVG_BUILDING_HEIGHT_M,
    DEFAULT_AVG_STREET_WIDTH_M, DEFAULT_NOISE_TEMPERATURE_K,
};
pub use error::{Error, Result};
pub use logging::{init_logging, init_logging_with_filter, LogLevel};
pub use numeric::{ensure_positive, round2};
pub use types::{GeometrySet, Point, CELL_COUNT, SERVING_CELL_INDEX};
