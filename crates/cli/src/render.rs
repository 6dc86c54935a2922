//! Plain-text rendering of symptom selections and ranked conditions.

use symcheck_core::{Confidence, ScoredCondition, SymptomSelection};

/// Width of a confidence bar in characters.
pub const BAR_WIDTH: usize = 30;

pub const NO_MATCH: &str =
    "No known conditions match your current symptom profile with high confidence.";

pub const NOTHING_SELECTED: &str = "Please select symptoms to see a prediction.";

/// A bar whose filled share is `confidence / 100`.
pub fn bar(confidence: Confidence, width: usize) -> String {
    let filled = ((confidence.fraction() * width as f64).round() as usize).min(width);
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

/// One line per ranked condition: name, bar and percentage.
pub fn ranked_lines(results: &[ScoredCondition]) -> Vec<String> {
    let name_width = results
        .iter()
        .map(|r| r.condition.as_str().chars().count())
        .max()
        .unwrap_or(0);

    results
        .iter()
        .map(|r| {
            format!(
                "{:<name_width$}  [{}]  {:>6}",
                r.condition.as_str(),
                bar(r.confidence, BAR_WIDTH),
                r.confidence.to_string(),
            )
        })
        .collect()
}

/// Ranked results, or the no-match message when empty.
pub fn results(results: &[ScoredCondition]) -> String {
    if results.is_empty() {
        return NO_MATCH.to_string();
    }
    ranked_lines(results).join("\n")
}

/// Count and sorted list of the selected symptoms.
pub fn selection_summary(selection: &SymptomSelection) -> String {
    if selection.is_empty() {
        return NOTHING_SELECTED.to_string();
    }
    let names: Vec<&str> = selection.iter().map(|s| s.as_str()).collect();
    format!(
        "Total Symptoms Selected: {}\n  {}",
        selection.len(),
        names.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use symcheck_core::SymptomChecker;

    fn scored(symptoms: &[&str]) -> Vec<ScoredCondition> {
        let checker = SymptomChecker::builtin().expect("built-in checker");
        checker.score(&symptoms.iter().copied().collect())
    }

    #[test]
    fn test_bar_is_proportional() {
        let full = &scored(&["Severe headache", "Blurred vision", "Dizziness"])[0];
        assert_eq!(bar(full.confidence, 10), "##########");

        let partial = &scored(&["Severe headache"])[0];
        // 48.7% of 10
        assert_eq!(bar(partial.confidence, 10), "#####-----");
    }

    #[test]
    fn test_ranked_lines_show_percentage() {
        let lines = ranked_lines(&scored(&["Severe headache"]));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Migraine"));
        assert!(lines[0].ends_with("48.7%"));
    }

    #[test]
    fn test_names_are_aligned() {
        let lines = ranked_lines(&scored(&["Dizziness"]));
        assert_eq!(lines.len(), 2);
        let bar_col: Vec<usize> = lines.iter().map(|l| l.find('[').unwrap()).collect();
        assert_eq!(bar_col[0], bar_col[1]);
    }

    #[test]
    fn test_empty_results_message() {
        assert_eq!(results(&[]), NO_MATCH);
        assert_eq!(results(&scored(&["Foot tingling"])), NO_MATCH);
    }

    #[test]
    fn test_selection_summary() {
        assert_eq!(selection_summary(&SymptomSelection::new()), NOTHING_SELECTED);
        let selection: SymptomSelection = ["Fever", "Bloating"].into_iter().collect();
        assert_eq!(
            selection_summary(&selection),
            "Total Symptoms Selected: 2\n  Bloating, Fever"
        );
    }
}
