mod session;

use std::io;
use symcheck_core::SymptomChecker;

/// Main entry point for the interactive symptom checker
///
/// Loads the catalog once, then runs a line-oriented session on stdin/stdout until `quit` or end
/// of input.
///
/// # Environment Variables
/// - `SYMCHECK_CATALOG`: YAML catalog file (default: built-in tables)
/// - `SYMCHECK_MIN_CONFIDENCE`: confidence a condition must exceed to be shown (default: 5)
/// - `SYMCHECK_MAX_RESULTS`: maximum number of conditions shown (default: 5)
/// - `RUST_LOG`: tracing filter, logs go to stderr
fn main() -> anyhow::Result<()> {
    symcheck_cli::init_tracing("symcheck=info").map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let config = symcheck_cli::config_from_env()?;
    let checker = SymptomChecker::load(&config)?;
    tracing::info!(
        regions = checker.regions().len(),
        conditions = checker.profiles().len(),
        "symptom checker ready"
    );

    session::run(&checker, io::stdin().lock(), io::stdout())
}
