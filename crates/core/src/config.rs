//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into [`crate::SymptomChecker`]. Parsing helpers take the raw environment values as
//! arguments and never read process-wide environment variables themselves, which keeps them
//! deterministic under parallel test harnesses.

use crate::constants::{DEFAULT_MAX_RESULTS, DEFAULT_MIN_CONFIDENCE};
use crate::engine::ScoringPolicy;
use crate::{CheckerError, CheckerResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoreConfig {
    catalog_path: Option<PathBuf>,
    policy: ScoringPolicy,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `catalog_path` of `None` selects the built-in tables.
    pub fn new(catalog_path: Option<PathBuf>, policy: ScoringPolicy) -> Self {
        Self {
            catalog_path,
            policy,
        }
    }

    /// Build a config from raw environment values (`SYMCHECK_CATALOG`,
    /// `SYMCHECK_MIN_CONFIDENCE`, `SYMCHECK_MAX_RESULTS`).
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::InvalidInput`] if a numeric value does not parse or the resulting
    /// policy is invalid.
    pub fn from_env_values(
        catalog: Option<String>,
        min_confidence: Option<String>,
        max_results: Option<String>,
    ) -> CheckerResult<Self> {
        let policy = ScoringPolicy::new(
            min_confidence_from_env_value(min_confidence)?,
            max_results_from_env_value(max_results)?,
        )?;
        Ok(Self::new(catalog_path_from_env_value(catalog), policy))
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Replace the catalog path, e.g. from a command-line flag.
    pub fn with_catalog_path(mut self, catalog_path: Option<PathBuf>) -> Self {
        if catalog_path.is_some() {
            self.catalog_path = catalog_path;
        }
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the catalog path from an optional string value. Empty/whitespace means "built-in".
pub fn catalog_path_from_env_value(value: Option<String>) -> Option<PathBuf> {
    non_blank(value).map(PathBuf::from)
}

/// Parse the minimum confidence from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_MIN_CONFIDENCE`].
pub fn min_confidence_from_env_value(value: Option<String>) -> CheckerResult<f64> {
    non_blank(value)
        .map(|v| {
            v.parse::<f64>().map_err(|_| {
                CheckerError::InvalidInput(format!("minimum confidence is not a number: {v}"))
            })
        })
        .transpose()
        .map(|parsed| parsed.unwrap_or(DEFAULT_MIN_CONFIDENCE))
}

/// Parse the result limit from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_MAX_RESULTS`].
pub fn max_results_from_env_value(value: Option<String>) -> CheckerResult<usize> {
    non_blank(value)
        .map(|v| {
            v.parse::<usize>().map_err(|_| {
                CheckerError::InvalidInput(format!(
                    "maximum results is not a positive integer: {v}"
                ))
            })
        })
        .transpose()
        .map(|parsed| parsed.unwrap_or(DEFAULT_MAX_RESULTS))
}
