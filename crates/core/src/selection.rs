//! Caller-owned symptom selection.
//!
//! The matching engine only reads a `SymptomSelection`. Front ends own the value for the length of
//! a session and mutate it as the user picks and unpicks symptoms.

use crate::taxonomy::Taxonomy;
use serde::Serialize;
use std::collections::BTreeSet;
use symcheck_types::Symptom;

/// A set of reported symptoms. Iteration is in sorted order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymptomSelection {
    symptoms: BTreeSet<Symptom>,
}

impl SymptomSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a symptom. Returns `false` if it was already selected.
    pub fn insert(&mut self, symptom: impl Into<Symptom>) -> bool {
        self.symptoms.insert(symptom.into())
    }

    /// Removes a symptom. Returns `false` if it was not selected.
    pub fn remove(&mut self, symptom: &str) -> bool {
        self.symptoms.remove(symptom)
    }

    pub fn clear(&mut self) {
        self.symptoms.clear();
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.symptoms.contains(symptom)
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symptom> + '_ {
        self.symptoms.iter()
    }

    /// Selected symptoms that belong to `region_symptoms`, in region order.
    ///
    /// This is what a region view shows as already ticked.
    pub fn selected_in<'a>(&self, region_symptoms: &'a [Symptom]) -> Vec<&'a Symptom> {
        region_symptoms
            .iter()
            .filter(|s| self.symptoms.contains(*s))
            .collect()
    }

    /// Replaces the choice made for one region, leaving other regions untouched.
    ///
    /// Every symptom of `region_symptoms` not in `chosen` is removed, then `chosen` is added.
    /// Chosen symptoms outside `region_symptoms` are ignored.
    pub fn apply_region_choice<I, S>(&mut self, region_symptoms: &[Symptom], chosen: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Symptom>,
    {
        let chosen: BTreeSet<Symptom> = chosen
            .into_iter()
            .map(Into::into)
            .filter(|s| region_symptoms.contains(s))
            .collect();

        for symptom in region_symptoms {
            if !chosen.contains(symptom) {
                self.symptoms.remove(symptom);
            }
        }
        self.symptoms.extend(chosen);
    }

    /// Selected symptoms that no region of `taxonomy` lists.
    ///
    /// The engine accepts these silently; callers that want strict input reject them here.
    pub fn unrecognised<'a>(&'a self, taxonomy: &Taxonomy) -> Vec<&'a Symptom> {
        self.symptoms
            .iter()
            .filter(|s| !taxonomy.contains_symptom(s.as_str()))
            .collect()
    }
}

impl<S: Into<Symptom>> FromIterator<S> for SymptomSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            symptoms: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<Symptom>> Extend<S> for SymptomSelection {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.symptoms.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a SymptomSelection {
    type Item = &'a Symptom;
    type IntoIter = std::collections::btree_set::Iter<'a, Symptom>;

    fn into_iter(self) -> Self::IntoIter {
        self.symptoms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symcheck_catalog::RegionData;
    use symcheck_types::BodyRegion;

    fn head() -> Vec<Symptom> {
        vec!["Severe headache".into(), "Dizziness".into(), "Blurred vision".into()]
    }

    #[test]
    fn test_insert_is_set_semantics() {
        let mut selection = SymptomSelection::new();
        assert!(selection.insert("Fever"));
        assert!(!selection.insert("Fever"));
        assert_eq!(selection.len(), 1);
        assert!(selection.remove("Fever"));
        assert!(!selection.remove("Fever"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_apply_region_choice_replaces_only_that_region() {
        let mut selection: SymptomSelection = ["Fever", "Dizziness"].into_iter().collect();

        selection.apply_region_choice(&head(), ["Severe headache", "Blurred vision"]);

        let selected: Vec<&str> = selection.iter().map(|s| s.as_str()).collect();
        assert_eq!(selected, vec!["Blurred vision", "Fever", "Severe headache"]);
    }

    #[test]
    fn test_apply_region_choice_empty_clears_region() {
        let mut selection: SymptomSelection =
            ["Fever", "Dizziness", "Severe headache"].into_iter().collect();

        selection.apply_region_choice(&head(), Vec::<Symptom>::new());

        let selected: Vec<&str> = selection.iter().map(|s| s.as_str()).collect();
        assert_eq!(selected, vec!["Fever"]);
    }

    #[test]
    fn test_apply_region_choice_ignores_symptoms_outside_region() {
        let mut selection = SymptomSelection::new();
        selection.apply_region_choice(&head(), ["Dizziness", "Fever"]);
        assert!(selection.contains("Dizziness"));
        assert!(!selection.contains("Fever"));
    }

    #[test]
    fn test_selected_in_keeps_region_order() {
        let selection: SymptomSelection =
            ["Blurred vision", "Fever", "Severe headache"].into_iter().collect();
        let region = head();
        let ticked: Vec<&str> = selection
            .selected_in(&region)
            .into_iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(ticked, vec!["Severe headache", "Blurred vision"]);
    }

    #[test]
    fn test_unrecognised_lists_symptoms_outside_taxonomy() {
        let taxonomy = Taxonomy::new(vec![RegionData {
            region: BodyRegion::new("Head/Neck").unwrap(),
            symptoms: head(),
        }]);
        let selection: SymptomSelection =
            ["Dizziness", "Joint stiffness", "zzz"].into_iter().collect();
        let unknown: Vec<&str> = selection
            .unrecognised(&taxonomy)
            .into_iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(unknown, vec!["Joint stiffness", "zzz"]);
    }
}
