use clap::{Parser, Subcommand};
use std::path::PathBuf;
use symcheck_cli::{config_from_env, init_tracing, render};
use symcheck_core::constants::DISCLAIMER;
use symcheck_core::{Catalog, CheckerError, SymptomChecker, SymptomSelection};

#[derive(Parser)]
#[command(name = "symcheck")]
#[command(about = "Rule-based symptom checker CLI")]
struct Cli {
    /// YAML catalog to use instead of the built-in tables (overrides SYMCHECK_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List body regions
    Regions,
    /// List the symptoms of one body region
    Symptoms {
        /// Region label, e.g. "Head/Neck"
        region: String,
    },
    /// List conditions and their symptom weights
    Conditions,
    /// Rank conditions for a set of symptoms
    Score {
        /// Selected symptoms, exactly as listed by `symptoms`
        symptoms: Vec<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
        /// Accept symptoms that no body region lists
        #[arg(long)]
        allow_unlisted: bool,
    },
    /// Report taxonomy/profile inconsistencies
    Check,
    /// Print the active catalog as YAML
    Export,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("symcheck=warn")?;

    let config = config_from_env()?.with_catalog_path(cli.catalog);
    let checker = SymptomChecker::load(&config)?;
    tracing::info!(
        catalog = ?config.catalog_path(),
        min_confidence = checker.policy().min_confidence(),
        max_results = checker.policy().max_results(),
        conditions = checker.profiles().len(),
        "catalog loaded"
    );

    match cli.command {
        Some(Commands::Regions) => {
            for region in checker.regions() {
                println!("{}", region);
            }
        }
        Some(Commands::Symptoms { region }) => {
            for symptom in checker.symptoms_for(&region)? {
                println!("{}", symptom);
            }
        }
        Some(Commands::Conditions) => {
            for (condition, profile) in checker.profiles().iter() {
                println!("{}", condition);
                for (symptom, weight) in profile.iter() {
                    println!("  {:<24} {:.2}", symptom.as_str(), weight.value());
                }
            }
        }
        Some(Commands::Score {
            symptoms,
            json,
            allow_unlisted,
        }) => {
            let selection: SymptomSelection = symptoms.into_iter().collect();

            if !allow_unlisted {
                let unknown: Vec<&str> = selection
                    .unrecognised(checker.taxonomy())
                    .into_iter()
                    .map(|s| s.as_str())
                    .collect();
                if !unknown.is_empty() {
                    return Err(CheckerError::InvalidInput(format!(
                        "unrecognised symptoms: {} (use --allow-unlisted to score anyway)",
                        unknown.join(", ")
                    ))
                    .into());
                }
            }

            let results = checker.score(&selection);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("{}", render::selection_summary(&selection));
                println!();
                println!("{}", render::results(&results));
                println!();
                println!("{}", DISCLAIMER);
            }
        }
        Some(Commands::Check) => {
            let report = checker.consistency();
            if report.is_consistent() {
                println!("Catalog is consistent.");
            }
            for (condition, symptom) in &report.unlisted_profile_symptoms {
                println!(
                    "Unlisted: '{}' (used by {}) is not in any body region",
                    symptom, condition
                );
            }
            for (symptom, regions) in &report.multi_region_symptoms {
                let regions: Vec<&str> = regions.iter().map(|r| r.as_str()).collect();
                println!(
                    "Duplicate: '{}' is listed in {}",
                    symptom,
                    regions.join(", ")
                );
            }
            for symptom in &report.unreferenced_symptoms {
                println!("Unused: '{}' is not referenced by any condition", symptom);
            }
        }
        Some(Commands::Export) => {
            print!("{}", Catalog::render(&checker.catalog())?);
        }
        None => {
            println!("Use 'symcheck --help' for commands");
        }
    }

    Ok(())
}
