//! Test utility functions for integration tests
//!
//! Provides common utilities for test setup, logging, and assertions.

use tracing_subscriber::{fmt, EnvFilter};

/// Result type for integration tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Tolerance for values that are rounded to 2 decimals
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Initialize logging for tests
///
/// Uses RUST_LOG environment variable if set, otherwise defaults to "info"
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Asserts that `actual` is within `tolerance` of `expected`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_close_within_tolerance() {
        assert_close(1.0, 1.0 + 1e-12, DEFAULT_TOLERANCE);
        assert_close(-100.82, -100.8, 0.05);
    }

    #[test]
    #[should_panic(expected = "expected 1")]
    fn test_assert_close_outside_tolerance() {
        assert_close(1.1, 1.0, DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_init_logging_twice() {
        init_test_logging();
        init_test_logging();
    }
}
