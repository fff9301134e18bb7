//! Menagerie server entry point.
//!
//! Connects to SurrealDB, applies migrations, and optionally runs the
//! one-shot seed import when a seed file path is passed as the first
//! argument.

use std::path::PathBuf;
use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use menagerie_db::import::{import_zoo, load_seed_file};
use menagerie_db::{DbConfig, DbManager, run_migrations};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("menagerie=info")),
        )
        .json()
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "startup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = DbConfig::from_env();
    let manager = DbManager::connect(&config).await?;
    let db = manager.db();

    run_migrations(&db).await?;
    info!("migrations applied");

    if let Some(path) = std::env::args().nth(1).map(PathBuf::from) {
        info!(path = %path.display(), "running seed import");
        let zones = load_seed_file(&path)?;
        let mut rng = StdRng::from_os_rng();
        let summary = import_zoo(&db, &zones, &mut rng).await?;
        info!(
            zones = summary.zones,
            enclosures = summary.enclosures,
            animals = summary.animals,
            "seed import finished"
        );
    }

    info!("menagerie ready");
    Ok(())
}
