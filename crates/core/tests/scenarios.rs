use symcheck_core::{score, SymptomChecker, SymptomSelection};

fn builtin() -> SymptomChecker {
    SymptomChecker::builtin().expect("built-in checker")
}

fn names(selection: &SymptomSelection) -> Vec<(String, f64)> {
    score(selection, builtin().profiles())
        .into_iter()
        .map(|r| (r.condition.to_string(), r.confidence.percent()))
        .collect()
}

#[test]
fn foot_tingling_matches_nothing() {
    let selection: SymptomSelection = ["Foot tingling"].into_iter().collect();
    assert!(names(&selection).is_empty());
}

#[test]
fn empty_selection_matches_nothing() {
    assert!(names(&SymptomSelection::new()).is_empty());
}

#[test]
fn nonsense_symptoms_are_ignored() {
    let selection: SymptomSelection = ["", "headache", "SEVERE HEADACHE"].into_iter().collect();
    assert!(names(&selection).is_empty());
}

#[test]
fn shared_symptom_ranks_by_share_of_profile() {
    // Dizziness: Anxiety 0.5 / 2.4, Migraine 0.4 / 1.95
    let selection: SymptomSelection = ["Dizziness"].into_iter().collect();
    let ranked = names(&selection);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].0, "Anxiety Disorder");
    assert!((ranked[0].1 - 0.5 / 2.4 * 100.0).abs() < 1e-9);
    assert_eq!(ranked[1].0, "Migraine");
    assert!((ranked[1].1 - 0.4 / 1.95 * 100.0).abs() < 1e-9);
}

#[test]
fn fatigue_and_shortness_of_breath() {
    let selection: SymptomSelection = ["Fatigue", "Shortness of breath"].into_iter().collect();
    let ranked = names(&selection);
    let order: Vec<&str> = ranked.iter().map(|(n, _)| n.as_str()).collect();
    // Anxiety 1.1/2.4, Pneumonia 0.8/2.4, Rheumatoid 0.5/2.2
    assert_eq!(
        order,
        vec!["Anxiety Disorder", "Pneumonia", "Rheumatoid Arthritis"]
    );
}

#[test]
fn rheumatoid_arthritis_cannot_reach_full_confidence_through_taxonomy() {
    let checker = builtin();
    let mut selection = SymptomSelection::new();
    for region in checker.regions() {
        let symptoms = checker.symptoms_for(region.as_str()).expect("listed region");
        selection.extend(symptoms.iter().cloned());
    }

    let ranked = checker.score(&selection);
    let ra = ranked
        .iter()
        .find(|r| r.condition.as_str() == "Rheumatoid Arthritis")
        .expect("still ranked");
    assert!((ra.confidence.percent() - 1.4 / 2.2 * 100.0).abs() < 1e-9);

    // Supplying the unlisted symptom directly is accepted by the engine.
    selection.insert("Joint stiffness");
    let ranked = checker.score(&selection);
    let ra = ranked
        .iter()
        .find(|r| r.condition.as_str() == "Rheumatoid Arthritis")
        .expect("ranked");
    assert_eq!(ra.confidence.percent(), 100.0);
}

#[test]
fn selecting_every_listed_symptom_returns_at_most_five() {
    let checker = builtin();
    let selection: SymptomSelection = checker.taxonomy().symptoms().cloned().collect();
    let ranked = checker.score(&selection);
    assert_eq!(ranked.len(), 5);
    let full: Vec<&str> = ranked
        .iter()
        .filter(|r| r.confidence.percent() == 100.0)
        .map(|r| r.condition.as_str())
        .collect();
    assert_eq!(
        full,
        vec![
            "Anxiety Disorder",
            "Irritable Bowel Syndrome (IBS)",
            "Migraine",
            "Pneumonia"
        ]
    );
}

#[test]
fn repeated_calls_are_identical() {
    let checker = builtin();
    let selection: SymptomSelection = ["Fever", "Bloating", "Dizziness"].into_iter().collect();
    assert_eq!(checker.score(&selection), checker.score(&selection));
}
