//! Administrative commands for a Taskboard deployment.
//!
//! ```text
//! taskboard-admin [--config taskboard.toml] <migrate|seed|check>
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use taskboard::config::{ConfigLoadError, DEFAULT_CONFIG_FILE, TaskboardConfig};
use taskboard::database::{self, BlockingError, DatabaseSetupError, PgPool};
use taskboard::task::{
    adapters::{ReferenceDefaultStatus, postgres::PostgresReferenceData},
    domain::{StatusName, TaskDomainError},
    ports::{DefaultStatusError, DefaultStatusProvider, ReferenceDataError, ReferenceDataRepository},
    services::{ReferenceDataService, ReferenceSeedError},
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const FALLBACK_LOG_FILTER: &str = "info";

/// Taskboard deployment administration.
#[derive(Debug, Parser)]
#[command(name = "taskboard-admin", version, about)]
struct Cli {
    /// Configuration file; missing files are ignored.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Apply pending schema migrations.
    Migrate,
    /// Insert the configured priorities and statuses that are missing.
    Seed,
    /// Verify the statuses the task lifecycle depends on are present.
    Check,
}

#[derive(Debug, Error)]
enum AdminError {
    #[error(transparent)]
    Config(#[from] ConfigLoadError),
    #[error(transparent)]
    Database(#[from] DatabaseSetupError),
    #[error(transparent)]
    Blocking(#[from] BlockingError),
    #[error(transparent)]
    Seed(#[from] ReferenceSeedError),
    #[error(transparent)]
    DefaultStatus(#[from] DefaultStatusError),
    #[error(transparent)]
    ReferenceData(#[from] ReferenceDataError),
    #[error(transparent)]
    InvalidStatus(#[from] TaskDomainError),
    #[error("required status '{0}' is not present in the status table")]
    MissingStatus(StatusName),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let loaded = TaskboardConfig::load(&cli.config);
    init_tracing(
        loaded
            .as_ref()
            .map_or(FALLBACK_LOG_FILTER, |config| config.logging.filter.as_str()),
    );

    let outcome = match loaded {
        Ok(config) => run(cli.command, &config).await,
        Err(err) => Err(err.into()),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, command = ?cli.command, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

async fn run(command: Command, config: &TaskboardConfig) -> Result<(), AdminError> {
    let pool = database::build_pool(&config.database)?;
    match command {
        Command::Migrate => migrate(&pool).await,
        Command::Seed => seed(pool, config).await,
        Command::Check => check(pool, config).await,
    }
}

async fn migrate(pool: &PgPool) -> Result<(), AdminError> {
    let applied = database::run_blocking(pool, |connection| {
        database::apply_migrations(connection).map_err(AdminError::from)
    })
    .await?;
    tracing::info!(count = applied.len(), "migrations applied");
    Ok(())
}

async fn seed(pool: PgPool, config: &TaskboardConfig) -> Result<(), AdminError> {
    let service = ReferenceDataService::new(Arc::new(PostgresReferenceData::new(pool)));
    let report = service.seed(&config.seed).await?;
    tracing::info!(
        priorities_added = report.priorities_added,
        statuses_added = report.statuses_added,
        "seed finished"
    );
    Ok(())
}

async fn check(pool: PgPool, config: &TaskboardConfig) -> Result<(), AdminError> {
    let reference_data = Arc::new(PostgresReferenceData::new(pool));
    let provider =
        ReferenceDefaultStatus::new(Arc::clone(&reference_data), config.default_status_name()?);
    let default_status = provider.default_status().await?;

    let completed = StatusName::completed();
    if reference_data.find_status_by_name(&completed).await?.is_none() {
        return Err(AdminError::MissingStatus(completed));
    }
    tracing::info!(default_status = %default_status, "reference data is complete");
    Ok(())
}
