//! Body region → symptom taxonomy.
//!
//! The taxonomy only constrains what a caller may offer for selection. The matching engine never
//! consults it.

use crate::{CheckerError, CheckerResult};
use symcheck_catalog::RegionData;
use symcheck_types::{BodyRegion, Symptom};

/// Ordered catalog of body regions and the symptoms recognised within each.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Taxonomy {
    regions: Vec<RegionData>,
}

impl Taxonomy {
    /// Creates a taxonomy from regions in presentation order.
    pub fn new(regions: impl IntoIterator<Item = RegionData>) -> Self {
        Self {
            regions: regions.into_iter().collect(),
        }
    }

    /// Regions in presentation order.
    pub fn regions(&self) -> impl ExactSizeIterator<Item = &BodyRegion> + '_ {
        self.regions.iter().map(|r| &r.region)
    }

    /// Symptoms recognised in `region`, in presentation order.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::UnknownRegion`] if `region` is not catalogued. Matching is exact.
    pub fn symptoms_for(&self, region: &str) -> CheckerResult<&[Symptom]> {
        self.regions
            .iter()
            .find(|r| r.region.as_str() == region)
            .map(|r| r.symptoms.as_slice())
            .ok_or_else(|| CheckerError::UnknownRegion(region.to_string()))
    }

    /// Every region listing `symptom`. Normally zero or one.
    pub fn regions_of(&self, symptom: &str) -> Vec<&BodyRegion> {
        self.regions
            .iter()
            .filter(|r| r.symptoms.iter().any(|s| s.as_str() == symptom))
            .map(|r| &r.region)
            .collect()
    }

    pub fn contains_symptom(&self, symptom: &str) -> bool {
        self.regions
            .iter()
            .any(|r| r.symptoms.iter().any(|s| s.as_str() == symptom))
    }

    /// All listed symptoms, region by region.
    pub fn symptoms(&self) -> impl Iterator<Item = &Symptom> + '_ {
        self.regions.iter().flat_map(|r| r.symptoms.iter())
    }

    pub(crate) fn region_data(&self) -> &[RegionData] {
        &self.regions
    }
}
