//! Symptom catalog wire model and translation helpers.
//!
//! This module provides both domain-level carriers and the wire model for a catalog file.
//!
//! Responsibilities:
//! - Define public domain-level types consumed by `symcheck-core`
//! - Define a strict wire model for serialisation/deserialisation
//! - Provide translation helpers between domain primitives and the wire model
//! - Reject structurally invalid catalogs (blank names, duplicates, bad weights)
//!
//! Notes:
//! - Region symptom order is preserved; it is the order a UI presents them in
//! - Condition symptom order is not significant; it renders in the order held
//! - A symptom may appear only once per condition, whether repeated as a YAML key or after trimming

use crate::{CatalogError, CatalogResult};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use symcheck_types::{BodyRegion, ConditionName, NonEmptyText, Symptom, Weight};

// ============================================================================
// Public domain-level types
// ============================================================================

/// Domain-level carrier for a whole catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogData {
    /// Body regions in presentation order.
    pub regions: Vec<RegionData>,

    /// Condition profiles in file order.
    pub conditions: Vec<ConditionData>,
}

/// A body region and the symptoms recognised within it.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionData {
    pub region: BodyRegion,
    pub symptoms: Vec<Symptom>,
}

/// A condition and the weight of each characteristic symptom.
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionData {
    pub condition: ConditionName,
    pub weights: Vec<(Symptom, Weight)>,
}

// ============================================================================
// Public Catalog operations
// ============================================================================

/// Catalog operations.
///
/// This is a zero-sized type used for namespacing catalog-related operations.
/// All methods are associated functions.
pub struct Catalog;

impl Catalog {
    /// Parse a catalog from YAML text.
    ///
    /// This uses `serde_path_to_error` to surface a best-effort "path" (e.g.
    /// `conditions[0].symptoms.Fever`) to the failing field when the YAML does not match the wire
    /// schema.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if:
    /// - the YAML does not match the wire schema or has unknown keys,
    /// - a region, condition or symptom name is blank,
    /// - a region or condition name appears twice,
    /// - a symptom appears twice within one region,
    /// - a condition has no symptoms or a weight outside `(0, 1]`.
    pub fn parse(yaml_text: &str) -> CatalogResult<CatalogData> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        let wire = match serde_path_to_error::deserialize::<_, CatalogWire>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(CatalogError::Translation(format!(
                    "Catalog schema mismatch at {path}: {source}"
                )));
            }
        };

        wire_to_domain(wire)
    }

    /// Read and parse a catalog file from disk.
    pub fn read_file(path: impl AsRef<Path>) -> CatalogResult<CatalogData> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    /// Render a catalog as YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if serialization fails.
    pub fn render(data: &CatalogData) -> CatalogResult<String> {
        let wire = domain_to_wire(data);
        serde_yaml::to_string(&wire)
            .map_err(|e| CatalogError::Translation(format!("Failed to serialize catalog: {e}")))
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct CatalogWire {
    pub regions: Vec<RegionWire>,
    pub conditions: Vec<ConditionWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct RegionWire {
    pub name: String,
    pub symptoms: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConditionWire {
    pub name: String,
    #[serde(
        deserialize_with = "unique_weights",
        serialize_with = "weights_as_map"
    )]
    pub symptoms: Vec<(String, f64)>,
}

/// Read a `symptom: weight` map, refusing repeated keys instead of keeping the last one.
fn unique_weights<'de, D>(deserializer: D) -> Result<Vec<(String, f64)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct WeightsVisitor;

    impl<'de> Visitor<'de> for WeightsVisitor {
        type Value = Vec<(String, f64)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of symptom names to weights")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut seen = HashSet::new();
            let mut weights = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((symptom, weight)) = map.next_entry::<String, f64>()? {
                if !seen.insert(symptom.clone()) {
                    return Err(de::Error::custom(format!(
                        "duplicate symptom key '{symptom}'"
                    )));
                }
                weights.push((symptom, weight));
            }
            Ok(weights)
        }
    }

    deserializer.deserialize_map(WeightsVisitor)
}

fn weights_as_map<S>(weights: &[(String, f64)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(weights.iter().map(|(symptom, weight)| (symptom, weight)))
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn non_empty(value: &str, what: &str) -> CatalogResult<NonEmptyText> {
    NonEmptyText::new(value)
        .map_err(|_| CatalogError::InvalidInput(format!("{what} name cannot be empty")))
}

/// Convert the wire catalog to domain types, enforcing structural rules.
fn wire_to_domain(wire: CatalogWire) -> CatalogResult<CatalogData> {
    let mut seen_regions = HashSet::new();
    let mut regions = Vec::with_capacity(wire.regions.len());

    for region in wire.regions {
        let label = non_empty(&region.name, "region")?;
        if !seen_regions.insert(label.clone()) {
            return Err(CatalogError::InvalidInput(format!(
                "duplicate region: {label}"
            )));
        }

        let mut seen_symptoms = HashSet::new();
        let mut symptoms = Vec::with_capacity(region.symptoms.len());
        for symptom in region.symptoms {
            let symptom = Symptom::from(non_empty(&symptom, "symptom")?);
            if !seen_symptoms.insert(symptom.clone()) {
                return Err(CatalogError::InvalidInput(format!(
                    "symptom '{symptom}' listed twice in region {label}"
                )));
            }
            symptoms.push(symptom);
        }

        regions.push(RegionData {
            region: BodyRegion::from(label),
            symptoms,
        });
    }

    let mut seen_conditions = HashSet::new();
    let mut conditions = Vec::with_capacity(wire.conditions.len());

    for condition in wire.conditions {
        let name = non_empty(&condition.name, "condition")?;
        if !seen_conditions.insert(name.clone()) {
            return Err(CatalogError::InvalidInput(format!(
                "duplicate condition: {name}"
            )));
        }
        if condition.symptoms.is_empty() {
            return Err(CatalogError::InvalidInput(format!(
                "condition {name} has no symptoms"
            )));
        }

        let mut seen_symptoms = HashSet::new();
        let mut weights = Vec::with_capacity(condition.symptoms.len());
        for (symptom, weight) in condition.symptoms {
            let symptom = Symptom::from(non_empty(&symptom, "symptom")?);
            if !seen_symptoms.insert(symptom.clone()) {
                return Err(CatalogError::InvalidInput(format!(
                    "symptom '{symptom}' listed twice in condition {name}"
                )));
            }
            let weight = Weight::new(weight).map_err(|e| {
                CatalogError::InvalidInput(format!("condition {name}, symptom '{symptom}': {e}"))
            })?;
            weights.push((symptom, weight));
        }

        conditions.push(ConditionData {
            condition: ConditionName::from(name),
            weights,
        });
    }

    Ok(CatalogData {
        regions,
        conditions,
    })
}

fn domain_to_wire(data: &CatalogData) -> CatalogWire {
    CatalogWire {
        regions: data
            .regions
            .iter()
            .map(|r| RegionWire {
                name: r.region.to_string(),
                symptoms: r.symptoms.iter().map(|s| s.to_string()).collect(),
            })
            .collect(),
        conditions: data
            .conditions
            .iter()
            .map(|c| ConditionWire {
                name: c.condition.to_string(),
                symptoms: c
                    .weights
                    .iter()
                    .map(|(s, w)| (s.to_string(), w.value()))
                    .collect(),
            })
            .collect(),
    }
}
