//! Terminal front-end support for symcheck.
//!
//! Shared by the `symcheck` command and the `symcheck-run` interactive session:
//! - process bootstrap (`.env`, tracing, configuration from the environment)
//! - plain-text rendering of ranked results

pub mod render;

use symcheck_core::constants::{CATALOG_ENV, MAX_RESULTS_ENV, MIN_CONFIDENCE_ENV};
use symcheck_core::{CheckerResult, CoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Load `.env` and install a stderr tracing subscriber.
///
/// `RUST_LOG` takes precedence; `default_directive` (e.g. `"symcheck=info"`) is added on top.
pub fn init_tracing(default_directive: &str) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_directive.parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Resolve [`CoreConfig`] from the process environment. Call once at startup.
pub fn config_from_env() -> CheckerResult<CoreConfig> {
    CoreConfig::from_env_values(
        std::env::var(CATALOG_ENV).ok(),
        std::env::var(MIN_CONFIDENCE_ENV).ok(),
        std::env::var(MAX_RESULTS_ENV).ok(),
    )
}
