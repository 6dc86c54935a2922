//! Matching engine.
//!
//! Scores every condition profile against a symptom selection and returns a short ranked list.
//!
//! For a condition with weights `W`:
//! - `match = Σ W[s]` over selected symptoms present in `W`
//! - `max = Σ W[s]` over all of `W`
//! - `confidence = min(100, match / max * 100)`; conditions with `max == 0` are skipped
//!
//! The ranked list keeps conditions with confidence strictly above the policy threshold, sorted by
//! confidence descending then condition name ascending, truncated to the policy limit.
//!
//! Scoring never fails. Unknown symptoms match nothing and an empty selection yields an empty
//! list without touching the profiles.

use crate::constants::{DEFAULT_MAX_RESULTS, DEFAULT_MIN_CONFIDENCE};
use crate::profiles::{ConditionProfile, ProfileStore};
use crate::selection::SymptomSelection;
use crate::{CheckerError, CheckerResult};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use symcheck_types::ConditionName;

/// Threshold and size limit applied after scoring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoringPolicy {
    min_confidence: f64,
    max_results: usize,
}

impl ScoringPolicy {
    /// Create a policy.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::InvalidInput`] if `min_confidence` is not a finite value in
    /// `[0, 100)` or `max_results` is zero.
    pub fn new(min_confidence: f64, max_results: usize) -> CheckerResult<Self> {
        if !min_confidence.is_finite() || !(0.0..100.0).contains(&min_confidence) {
            return Err(CheckerError::InvalidInput(format!(
                "minimum confidence must be in [0, 100), got {min_confidence}"
            )));
        }
        if max_results == 0 {
            return Err(CheckerError::InvalidInput(
                "maximum results must be at least 1".into(),
            ));
        }
        Ok(Self {
            min_confidence,
            max_results,
        })
    }

    /// Results must score strictly above this percentage.
    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Percentage of a profile's attainable weight covered by a selection, in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// Builds a confidence from raw scores. `max_score` must be positive.
    fn from_scores(match_score: f64, max_score: f64) -> Self {
        let percent = (match_score / max_score) * 100.0;
        Self(percent.clamp(0.0, 100.0))
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    /// Confidence as a proportion in `[0, 1]`, e.g. for a progress bar.
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// One ranked condition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoredCondition {
    pub condition: ConditionName,
    pub confidence: Confidence,
}

/// Unfiltered confidence of one profile against a selection.
///
/// Returns `None` when the profile has no attainable weight.
pub fn confidence_for(
    profile: &ConditionProfile,
    selection: &SymptomSelection,
) -> Option<Confidence> {
    let (match_score, max_score) = profile.tally(selection);
    if max_score <= 0.0 {
        return None;
    }
    Some(Confidence::from_scores(match_score, max_score))
}

/// Rank conditions for a selection using the default policy (`> 5%`, top 5).
pub fn score(selection: &SymptomSelection, profiles: &ProfileStore) -> Vec<ScoredCondition> {
    score_with_policy(selection, profiles, &ScoringPolicy::default())
}

/// Rank conditions for a selection using an explicit policy.
pub fn score_with_policy(
    selection: &SymptomSelection,
    profiles: &ProfileStore,
    policy: &ScoringPolicy,
) -> Vec<ScoredCondition> {
    if selection.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<ScoredCondition> = profiles
        .iter()
        .filter_map(|(condition, profile)| {
            confidence_for(profile, selection).map(|confidence| ScoredCondition {
                condition: condition.clone(),
                confidence,
            })
        })
        .filter(|scored| scored.confidence.percent() > policy.min_confidence())
        .collect();

    ranked.sort_by(rank_order);
    ranked.truncate(policy.max_results());

    tracing::debug!(
        selected = selection.len(),
        conditions = profiles.len(),
        returned = ranked.len(),
        "scored symptom selection"
    );

    ranked
}

fn rank_order(a: &ScoredCondition, b: &ScoredCondition) -> Ordering {
    b.confidence
        .percent()
        .total_cmp(&a.confidence.percent())
        .then_with(|| a.condition.cmp(&b.condition))
}

#[cfg(test)]
mod tests {
    use super::*;
    use symcheck_types::Weight;

    fn profile(weights: &[(&str, f64)]) -> ConditionProfile {
        ConditionProfile::new(
            weights
                .iter()
                .map(|(s, w)| ((*s).into(), Weight::new(*w).unwrap())),
        )
    }

    fn store(entries: Vec<(&str, ConditionProfile)>) -> ProfileStore {
        ProfileStore::new(
            entries
                .into_iter()
                .map(|(name, p)| (ConditionName::new(name).unwrap(), p)),
        )
    }

    fn migraine_only() -> ProfileStore {
        store(vec![(
            "Migraine",
            profile(&[
                ("Severe headache", 0.95),
                ("Blurred vision", 0.6),
                ("Dizziness", 0.4),
            ]),
        )])
    }

    fn selection(symptoms: &[&str]) -> SymptomSelection {
        symptoms.iter().copied().collect()
    }

    #[test]
    fn test_single_symptom_confidence() {
        let results = score(&selection(&["Severe headache"]), &migraine_only());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].condition.as_str(), "Migraine");
        let expected = 0.95 / (0.95 + 0.6 + 0.4) * 100.0;
        assert!((results[0].confidence.percent() - expected).abs() < 1e-9);
        assert_eq!(results[0].confidence.to_string(), "48.7%");
    }

    #[test]
    fn test_empty_selection_returns_nothing() {
        assert!(score(&SymptomSelection::new(), &migraine_only()).is_empty());
    }

    #[test]
    fn test_full_match_is_exactly_one_hundred() {
        let results = score(
            &selection(&["Severe headache", "Blurred vision", "Dizziness"]),
            &migraine_only(),
        );
        assert_eq!(results[0].confidence.percent(), 100.0);
        assert_eq!(results[0].confidence.fraction(), 1.0);
    }

    #[test]
    fn test_empty_profile_is_excluded() {
        let profiles = store(vec![
            ("Empty", ConditionProfile::default()),
            ("Flu", profile(&[("Fever", 1.0)])),
        ]);
        let results = score(&selection(&["Fever"]), &profiles);
        let names: Vec<&str> = results.iter().map(|r| r.condition.as_str()).collect();
        assert_eq!(names, vec!["Flu"]);
        assert!(confidence_for(&ConditionProfile::default(), &selection(&["Fever"])).is_none());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // a alone covers 5% of the profile
        let profiles = store(vec![(
            "Edge",
            profile(&[("a", 0.05), ("b", 0.5), ("c", 0.45)]),
        )]);
        let raw = confidence_for(profiles.get("Edge").unwrap(), &selection(&["a"])).unwrap();
        assert!((raw.percent() - 5.0).abs() < 1e-9);

        let policy = ScoringPolicy::new(raw.percent(), 5).unwrap();
        assert!(score_with_policy(&selection(&["a"]), &profiles, &policy).is_empty());
    }

    #[test]
    fn test_default_policy_drops_exactly_five_percent() {
        let profiles = store(vec![(
            "Edge",
            profile(&[("a", 0.1), ("b", 1.0), ("c", 0.9)]),
        )]);
        let raw = confidence_for(profiles.get("Edge").unwrap(), &selection(&["a"])).unwrap();
        assert_eq!(raw.percent(), 5.0);
        assert!(score(&selection(&["a"]), &profiles).is_empty());
        assert_eq!(score(&selection(&["a", "c"]), &profiles).len(), 1);
    }

    #[test]
    fn test_low_confidence_dropped() {
        let profiles = store(vec![("Wide", profile(&[("a", 0.04), ("b", 1.0)]))]);
        assert!(score(&selection(&["a"]), &profiles).is_empty());
        assert_eq!(score(&selection(&["b"]), &profiles).len(), 1);
    }

    #[test]
    fn test_ties_break_by_name_ascending() {
        let profiles = store(vec![
            ("Zeta", profile(&[("x", 0.5), ("y", 0.5)])),
            ("Alpha", profile(&[("x", 0.3), ("z", 0.3)])),
            ("Mid", profile(&[("x", 1.0)])),
        ]);
        let results = score(&selection(&["x"]), &profiles);
        let names: Vec<&str> = results.iter().map(|r| r.condition.as_str()).collect();
        assert_eq!(names, vec!["Mid", "Alpha", "Zeta"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let profiles = store(
            ["A", "B", "C", "D", "E", "F", "G"]
                .iter()
                .map(|name| (*name, profile(&[("shared", 0.5)])))
                .collect(),
        );
        let results = score(&selection(&["shared"]), &profiles);
        assert_eq!(results.len(), 5);
        let names: Vec<&str> = results.iter().map(|r| r.condition.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E"]);

        let policy = ScoringPolicy::new(5.0, 2).unwrap();
        assert_eq!(score_with_policy(&selection(&["shared"]), &profiles, &policy).len(), 2);
    }

    #[test]
    fn test_policy_rejects_bad_values() {
        assert!(matches!(
            ScoringPolicy::new(100.0, 5),
            Err(CheckerError::InvalidInput(_))
        ));
        assert!(matches!(
            ScoringPolicy::new(-1.0, 5),
            Err(CheckerError::InvalidInput(_))
        ));
        assert!(matches!(
            ScoringPolicy::new(f64::NAN, 5),
            Err(CheckerError::InvalidInput(_))
        ));
        assert!(matches!(
            ScoringPolicy::new(5.0, 0),
            Err(CheckerError::InvalidInput(msg)) if msg.contains("at least 1")
        ));
        assert_eq!(ScoringPolicy::default(), ScoringPolicy::new(5.0, 5).unwrap());
    }

    #[test]
    fn test_scored_condition_serializes_flat() {
        let results = score(
            &selection(&["Severe headache", "Blurred vision", "Dizziness"]),
            &migraine_only(),
        );
        let json = serde_json::to_value(&results).expect("serialize");
        assert_eq!(json[0]["condition"], "Migraine");
        assert_eq!(json[0]["confidence"], 100.0);
    }
}
