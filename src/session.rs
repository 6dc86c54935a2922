//! Interactive symptom selection session.
//!
//! A line-oriented rendition of the checker UI: pick a body region, tick symptoms in it, and see
//! the ranked conditions after every change. The session owns the running selection; the
//! checker only ever sees a snapshot of it.

use std::io::{BufRead, Write};
use symcheck_cli::render;
use symcheck_core::constants::DISCLAIMER;
use symcheck_core::{BodyRegion, CheckerError, CheckerResult, SymptomChecker, SymptomSelection};

const HELP: &str = "Commands:
  regions              list body regions
  region <n|name>      show the symptoms of a region
  pick <n>[,<n>...]    select symptoms of the shown region (replaces its previous picks)
  pick                 clear the picks of the shown region
  clear                clear every selected symptom
  show                 show the current selection and prediction
  help                 show this message
  quit                 leave the session";

/// Result of handling one input line.
#[derive(Debug, PartialEq)]
pub enum Step {
    Continue(String),
    Quit,
}

pub struct Session<'a> {
    checker: &'a SymptomChecker,
    selection: SymptomSelection,
    region: BodyRegion,
}

impl<'a> Session<'a> {
    /// Start a session showing the first region.
    ///
    /// # Errors
    ///
    /// Returns [`CheckerError::InvalidInput`] if the catalog has no body regions.
    pub fn new(checker: &'a SymptomChecker) -> CheckerResult<Self> {
        let region = checker
            .regions()
            .next()
            .cloned()
            .ok_or_else(|| CheckerError::InvalidInput("catalog has no body regions".into()))?;
        Ok(Self {
            checker,
            selection: SymptomSelection::new(),
            region,
        })
    }

    pub fn selection(&self) -> &SymptomSelection {
        &self.selection
    }

    pub fn region(&self) -> &BodyRegion {
        &self.region
    }

    pub fn handle(&mut self, line: &str) -> Step {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            "" => Step::Continue(String::new()),
            "quit" | "exit" => Step::Quit,
            "help" => Step::Continue(HELP.to_string()),
            "regions" => Step::Continue(self.regions_text()),
            "region" => Step::Continue(self.switch_region(arg)),
            "pick" => Step::Continue(self.pick(arg)),
            "clear" => {
                self.selection.clear();
                Step::Continue(self.prediction_text())
            }
            "show" => Step::Continue(format!(
                "{}\n\n{}",
                self.region_text(),
                self.prediction_text()
            )),
            other => Step::Continue(format!(
                "Unknown command '{other}'. Type 'help' for commands."
            )),
        }
    }

    fn regions_text(&self) -> String {
        self.checker
            .regions()
            .enumerate()
            .map(|(i, region)| {
                let marker = if *region == self.region { "*" } else { " " };
                format!("{marker} {}. {}", i + 1, region)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn switch_region(&mut self, arg: &str) -> String {
        let checker = self.checker;
        let by_number = arg
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| checker.regions().nth(i));

        let found = by_number
            .or_else(|| checker.regions().find(|r| r.as_str() == arg))
            .cloned()
            .ok_or_else(|| CheckerError::UnknownRegion(arg.to_string()));

        match found {
            Ok(region) => {
                self.region = region;
                self.region_text()
            }
            Err(e) => e.to_string(),
        }
    }

    fn region_text(&self) -> String {
        let symptoms = match self.checker.symptoms_for(self.region.as_str()) {
            Ok(symptoms) => symptoms,
            Err(e) => return format!("{e}"),
        };

        let mut lines = vec![format!("Symptoms for {}:", self.region)];
        for (i, symptom) in symptoms.iter().enumerate() {
            let mark = if self.selection.contains(symptom.as_str()) {
                "x"
            } else {
                " "
            };
            lines.push(format!("  [{mark}] {}. {}", i + 1, symptom));
        }
        lines.join("\n")
    }

    fn pick(&mut self, arg: &str) -> String {
        let checker = self.checker;
        let symptoms = match checker.symptoms_for(self.region.as_str()) {
            Ok(symptoms) => symptoms,
            Err(e) => return format!("{e}"),
        };

        let mut chosen = Vec::new();
        for token in arg.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| symptoms.get(i))
            {
                Some(symptom) => chosen.push(symptom.clone()),
                None => {
                    return format!(
                        "'{token}' is not a symptom number for {} (1-{})",
                        self.region,
                        symptoms.len()
                    )
                }
            }
        }

        self.selection.apply_region_choice(symptoms, chosen);
        format!("{}\n\n{}", self.region_text(), self.prediction_text())
    }

    fn prediction_text(&self) -> String {
        if self.selection.is_empty() {
            return render::selection_summary(&self.selection);
        }
        let results = self.checker.score(&self.selection);
        format!(
            "{}\n\nLikely conditions (based on symptom match):\n{}",
            render::selection_summary(&self.selection),
            render::results(&results)
        )
    }
}

/// Drive a session over line-oriented input until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    checker: &SymptomChecker,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    let mut session = Session::new(checker)?;

    writeln!(output, "Interactive Symptom Checker")?;
    writeln!(output, "{HELP}\n")?;
    writeln!(output, "{}\n", session.region_text())?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match session.handle(&line) {
            Step::Continue(text) if text.is_empty() => {}
            Step::Continue(text) => writeln!(output, "{text}\n")?,
            Step::Quit => break,
        }
    }

    writeln!(output, "\n{DISCLAIMER}")?;
    tracing::debug!(selected = session.selection().len(), "session ended");
    Ok(())
}
