//! Integration test framework for cellbudget
#![allow(missing_docs)]
//!
//! Shared fixtures and helpers for tests that drive the whole pipeline,
//! from configuration through geometry generation to the result table.
//!
//! # Components
//!
//! - [`test_fixtures`] - Link parameter presets and cell layouts
//! - [`test_utils`] - Logging setup and float assertions
//!
//! # Test Categories
//!
//! 1. **End-to-end scenarios** - One run per propagation model against
//!    reference values
//! 2. **Cross-crate checks** - Simulator output agrees with the
//!    propagation and link budget building blocks; sample configs load

pub mod test_fixtures;
pub mod test_utils;

pub use test_fixtures::{
    hata_link, reference_geometry, rural_macro_link, urban_macro_link, urban_micro_link,
    TestScenario, REFERENCE_RADIUS_M, REFERENCE_RECEIVERS,
};
pub use test_utils::{assert_close, init_test_logging, TestResult, DEFAULT_TOLERANCE};
