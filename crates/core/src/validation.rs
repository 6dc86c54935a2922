//! Catalog consistency checks.
//!
//! Every symptom referenced by a condition profile should appear in exactly one body region.
//! Nothing enforces this at scoring time. These checks report violations so they can be logged and
//! reviewed; they never modify the taxonomy or the profiles.

use crate::profiles::ProfileStore;
use crate::taxonomy::Taxonomy;
use serde::Serialize;
use std::collections::BTreeMap;
use symcheck_types::{BodyRegion, ConditionName, Symptom};

/// Findings from [`check_consistency`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ConsistencyReport {
    /// Profile symptoms that no region lists, with the condition referencing them. These can
    /// never be selected through the taxonomy, so the condition cannot reach 100%.
    pub unlisted_profile_symptoms: Vec<(ConditionName, Symptom)>,

    /// Symptoms listed by more than one region.
    pub multi_region_symptoms: Vec<(Symptom, Vec<BodyRegion>)>,

    /// Taxonomy symptoms that no profile references. Selecting them never changes a score.
    pub unreferenced_symptoms: Vec<Symptom>,
}

impl ConsistencyReport {
    /// `true` when every profile symptom sits in exactly one region.
    ///
    /// Unreferenced taxonomy symptoms are informational and do not affect this.
    pub fn is_consistent(&self) -> bool {
        self.unlisted_profile_symptoms.is_empty() && self.multi_region_symptoms.is_empty()
    }

    /// Emit one `warn!` per violation and a `debug!` summary of unreferenced symptoms.
    pub fn log(&self) {
        for (condition, symptom) in &self.unlisted_profile_symptoms {
            tracing::warn!(
                condition = %condition,
                symptom = %symptom,
                "profile symptom is not listed in any body region and cannot be selected"
            );
        }
        for (symptom, regions) in &self.multi_region_symptoms {
            let regions: Vec<&str> = regions.iter().map(|r| r.as_str()).collect();
            tracing::warn!(
                symptom = %symptom,
                regions = ?regions,
                "symptom is listed in more than one body region"
            );
        }
        if !self.unreferenced_symptoms.is_empty() {
            tracing::debug!(
                count = self.unreferenced_symptoms.len(),
                "taxonomy symptoms not referenced by any condition profile"
            );
        }
    }
}

/// Cross-check a taxonomy against a profile store.
pub fn check_consistency(taxonomy: &Taxonomy, profiles: &ProfileStore) -> ConsistencyReport {
    let mut unlisted_profile_symptoms = Vec::new();
    for (condition, profile) in profiles.iter() {
        for (symptom, _) in profile.iter() {
            if !taxonomy.contains_symptom(symptom.as_str()) {
                unlisted_profile_symptoms.push((condition.clone(), symptom.clone()));
            }
        }
    }

    let mut listing: BTreeMap<&Symptom, Vec<BodyRegion>> = BTreeMap::new();
    for region in taxonomy.region_data() {
        for symptom in &region.symptoms {
            listing
                .entry(symptom)
                .or_default()
                .push(region.region.clone());
        }
    }
    let multi_region_symptoms = listing
        .into_iter()
        .filter(|(_, regions)| regions.len() > 1)
        .map(|(symptom, regions)| (symptom.clone(), regions))
        .collect();

    let referenced = profiles.symptoms();
    let unreferenced_symptoms = taxonomy
        .symptoms()
        .filter(|s| !referenced.contains(s))
        .cloned()
        .collect();

    ConsistencyReport {
        unlisted_profile_symptoms,
        multi_region_symptoms,
        unreferenced_symptoms,
    }
}
