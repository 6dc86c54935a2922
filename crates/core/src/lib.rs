//! # symcheck Core
//!
//! Core logic for the rule-based symptom checker.
//!
//! This crate contains the data model and the matching algorithm:
//! - Body region taxonomy used to constrain symptom selection
//! - Condition profiles mapping symptoms to weights
//! - The matching engine that ranks conditions for a selection
//! - Catalog consistency checks
//!
//! **No presentation concerns**: region pickers, progress bars and disclaimers belong in the
//! `symcheck-cli` crate and the `symcheck-run` session runner. The core never holds a selection;
//! callers own a [`SymptomSelection`] and pass it into every call.

pub mod builtin;
pub mod config;
pub mod constants;
pub mod engine;
mod error;
pub mod profiles;
pub mod selection;
pub mod taxonomy;
pub mod validation;

pub use config::CoreConfig;
pub use engine::{score, score_with_policy, Confidence, ScoredCondition, ScoringPolicy};
pub use error::{CheckerError, CheckerResult};
pub use profiles::{ConditionProfile, ProfileStore};
pub use selection::SymptomSelection;
pub use taxonomy::Taxonomy;
pub use validation::{check_consistency, ConsistencyReport};

pub use symcheck_catalog::{Catalog, CatalogData};
pub use symcheck_types::{BodyRegion, ConditionName, Symptom, Weight};

use std::sync::Arc;

/// Loaded catalog plus scoring policy.
///
/// Built once at startup and immutable afterwards. Cloning is cheap and the value can be shared
/// across threads.
#[derive(Clone, Debug)]
pub struct SymptomChecker {
    taxonomy: Arc<Taxonomy>,
    profiles: Arc<ProfileStore>,
    policy: ScoringPolicy,
}

impl SymptomChecker {
    /// Creates a checker from catalog data.
    ///
    /// Consistency findings (for example a profile symptom that no region lists) are logged as
    /// warnings; they do not prevent construction.
    pub fn from_catalog(data: &CatalogData, policy: ScoringPolicy) -> Self {
        let checker = Self {
            taxonomy: Arc::new(Taxonomy::new(data.regions.iter().cloned())),
            profiles: Arc::new(ProfileStore::from_catalog(&data.conditions)),
            policy,
        };
        checker.consistency().log();
        checker
    }

    /// Creates a checker over the compiled-in tables with the default policy.
    pub fn builtin() -> CheckerResult<Self> {
        Ok(Self::from_catalog(
            &builtin::catalog()?,
            ScoringPolicy::default(),
        ))
    }

    /// Creates a checker from startup configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::Catalog`] if the configured catalog file cannot be read or parsed.
    pub fn load(config: &CoreConfig) -> CheckerResult<Self> {
        let data = match config.catalog_path() {
            Some(path) => {
                tracing::info!("loading symptom catalog from {}", path.display());
                Catalog::read_file(path)?
            }
            None => {
                tracing::info!("using built-in symptom catalog");
                builtin::catalog()?
            }
        };
        Ok(Self::from_catalog(&data, config.policy()))
    }

    /// Regions in presentation order.
    pub fn regions(&self) -> impl ExactSizeIterator<Item = &BodyRegion> + '_ {
        self.taxonomy.regions()
    }

    /// Symptoms of one region.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::UnknownRegion`] if the region is not catalogued.
    pub fn symptoms_for(&self, region: &str) -> CheckerResult<&[Symptom]> {
        self.taxonomy.symptoms_for(region)
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// The read-only condition profile table.
    pub fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Rank conditions for `selection` under this checker's policy.
    pub fn score(&self, selection: &SymptomSelection) -> Vec<ScoredCondition> {
        score_with_policy(selection, &self.profiles, &self.policy)
    }

    pub fn consistency(&self) -> ConsistencyReport {
        check_consistency(&self.taxonomy, &self.profiles)
    }

    /// The active catalog, e.g. for exporting to YAML.
    pub fn catalog(&self) -> CatalogData {
        CatalogData {
            regions: self.taxonomy.region_data().to_vec(),
            conditions: self.profiles.to_catalog(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_checker_loads() {
        let checker = SymptomChecker::builtin().expect("built-in checker");
        assert_eq!(checker.regions().len(), 5);
        assert_eq!(checker.profiles().len(), 5);
        assert_eq!(checker.policy(), ScoringPolicy::default());
    }

    #[test]
    fn test_symptoms_for_unknown_region() {
        let checker = SymptomChecker::builtin().expect("built-in checker");
        let err = checker.symptoms_for("Tail").expect_err("no such region");
        assert_eq!(err.to_string(), "unknown body region: Tail");
        assert!(matches!(err, CheckerError::UnknownRegion(ref r) if r == "Tail"));
    }

    #[test]
    fn test_load_uses_builtin_without_catalog_path() {
        let checker = SymptomChecker::load(&CoreConfig::default()).expect("load");
        assert!(checker.profiles().get("Migraine").is_some());
    }

    #[test]
    fn test_load_reads_catalog_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.yaml");
        std::fs::write(
            &path,
            "regions:\n  - name: Systemic\n    symptoms: [Fever]\nconditions:\n  - name: Flu\n    symptoms:\n      Fever: 0.9\n",
        )
        .expect("write catalog");

        let config = CoreConfig::new(Some(path), ScoringPolicy::new(10.0, 1).unwrap());
        let checker = SymptomChecker::load(&config).expect("load catalog file");
        assert_eq!(checker.profiles().len(), 1);
        assert_eq!(checker.policy().max_results(), 1);

        let results = checker.score(&["Fever"].into_iter().collect());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].condition.as_str(), "Flu");
        assert_eq!(results[0].confidence.percent(), 100.0);
    }

    #[test]
    fn test_load_reports_bad_catalog_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "regions: []\n").expect("write catalog");

        let config = CoreConfig::new(Some(path), ScoringPolicy::default());
        let err = SymptomChecker::load(&config).expect_err("missing conditions key");
        assert!(matches!(err, CheckerError::Catalog(_)));
    }

    #[test]
    fn test_catalog_export_round_trips() {
        let checker = SymptomChecker::builtin().expect("built-in checker");
        let yaml = Catalog::render(&checker.catalog()).expect("render");
        let reparsed = Catalog::parse(&yaml).expect("parse");
        let again = SymptomChecker::from_catalog(&reparsed, ScoringPolicy::default());
        assert_eq!(again.profiles(), checker.profiles());
        assert_eq!(again.taxonomy(), checker.taxonomy());
    }

    #[test]
    fn test_checker_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SymptomChecker>();
    }
}
