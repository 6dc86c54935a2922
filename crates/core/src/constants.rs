//! Constants used throughout the symcheck core crate.

/// Conditions must score strictly above this confidence (percent) to be reported.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 5.0;

/// Maximum number of ranked conditions returned by a single evaluation.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Environment variable naming a YAML catalog that replaces the built-in tables.
pub const CATALOG_ENV: &str = "SYMCHECK_CATALOG";

/// Environment variable overriding [`DEFAULT_MIN_CONFIDENCE`].
pub const MIN_CONFIDENCE_ENV: &str = "SYMCHECK_MIN_CONFIDENCE";

/// Environment variable overriding [`DEFAULT_MAX_RESULTS`].
pub const MAX_RESULTS_ENV: &str = "SYMCHECK_MAX_RESULTS";

/// Shown by every front end next to ranked results.
pub const DISCLAIMER: &str = "Disclaimer: This tool is for informational purposes only and is NOT a substitute for professional medical advice, diagnosis, or treatment.";
