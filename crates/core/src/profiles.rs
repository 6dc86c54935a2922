//! Condition profile store.
//!
//! A profile maps each characteristic symptom of a condition to a weight in `(0, 1]`. Weights are
//! not normalised and need not sum to any particular value.

use crate::selection::SymptomSelection;
use std::collections::{BTreeMap, BTreeSet};
use symcheck_catalog::ConditionData;
use symcheck_types::{ConditionName, Symptom, Weight};

/// Weighted symptom set for one condition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConditionProfile {
    weights: BTreeMap<Symptom, Weight>,
}

impl ConditionProfile {
    /// Creates a profile. A symptom given twice keeps its last weight.
    pub fn new(weights: impl IntoIterator<Item = (Symptom, Weight)>) -> Self {
        Self {
            weights: weights.into_iter().collect(),
        }
    }

    pub fn weight(&self, symptom: &str) -> Option<Weight> {
        self.weights.get(symptom).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symptom, Weight)> + '_ {
        self.weights.iter().map(|(s, w)| (s, *w))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of every weight: the score of a perfect match.
    pub fn max_score(&self) -> f64 {
        self.weights.values().map(|w| w.value()).sum()
    }

    /// Sum of the weights of selected symptoms that belong to this profile.
    pub fn match_score(&self, selection: &SymptomSelection) -> f64 {
        self.tally(selection).0
    }

    /// `(match_score, max_score)` in a single pass.
    ///
    /// Both sums accumulate in the same order, so selecting every profile symptom yields two
    /// bit-identical totals.
    pub(crate) fn tally(&self, selection: &SymptomSelection) -> (f64, f64) {
        self.weights
            .iter()
            .fold((0.0, 0.0), |(matched, max), (symptom, weight)| {
                let w = weight.value();
                if selection.contains(symptom.as_str()) {
                    (matched + w, max + w)
                } else {
                    (matched, max + w)
                }
            })
    }
}

/// Read-only table of every condition profile, keyed by condition name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileStore {
    profiles: BTreeMap<ConditionName, ConditionProfile>,
}

impl ProfileStore {
    pub fn new(profiles: impl IntoIterator<Item = (ConditionName, ConditionProfile)>) -> Self {
        Self {
            profiles: profiles.into_iter().collect(),
        }
    }

    /// Builds the store from catalog condition entries.
    pub fn from_catalog(conditions: &[ConditionData]) -> Self {
        Self::new(conditions.iter().map(|c| {
            (
                c.condition.clone(),
                ConditionProfile::new(c.weights.iter().cloned()),
            )
        }))
    }

    pub fn get(&self, condition: &str) -> Option<&ConditionProfile> {
        self.profiles.get(condition)
    }

    /// Profiles ordered by condition name.
    pub fn iter(&self) -> impl Iterator<Item = (&ConditionName, &ConditionProfile)> + '_ {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Every symptom referenced by at least one profile.
    pub fn symptoms(&self) -> BTreeSet<&Symptom> {
        self.profiles
            .values()
            .flat_map(|p| p.weights.keys())
            .collect()
    }

    pub(crate) fn to_catalog(&self) -> Vec<ConditionData> {
        self.profiles
            .iter()
            .map(|(name, profile)| ConditionData {
                condition: name.clone(),
                weights: profile.iter().map(|(s, w)| (s.clone(), w)).collect(),
            })
            .collect()
    }
}
