//!
//! # Application Factory
//!
//! Constructs a fully configured application state in one synchronous pass:
//! build defaults, apply exactly one override source, ensure the instance
//! directory, hand off to the data-access collaborator, return. No retries,
//! no partial state on failure.
//!
//! The returned [`AppState`] is passed explicitly to every component that
//! needs it (route handlers receive its pieces as `web::Data`); nothing in
//! the crate reads ambient process-global state.

use log::info;
use sqlx::SqlitePool;
use std::path::Path;

use crate::config::{AppConfig, ConfigOverride};
use crate::db;
use crate::error::AppError;

/// Conventional instance directory when the caller does not choose one.
pub const DEFAULT_INSTANCE_PATH: &str = "instance";

/// Everything a running application needs: the resolved configuration and
/// the database pool. Owned for the lifetime of the process and cheap to
/// clone into the per-worker `App` instances.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub pool: SqlitePool,
}

/// Bootstraps the application against the conventional `instance/` path.
pub async fn bootstrap(overrides: Option<ConfigOverride>) -> Result<AppState, AppError> {
    bootstrap_at(Path::new(DEFAULT_INSTANCE_PATH), overrides).await
}

/// Bootstraps the application for a specific instance directory.
///
/// When `overrides` is given, the instance `config.toml` is skipped
/// entirely; the two override sources are mutually exclusive per call.
/// A missing config file is tolerated silently, but any directory-creation
/// failure other than "already exists" aborts the bootstrap.
pub async fn bootstrap_at(
    instance_path: &Path,
    overrides: Option<ConfigOverride>,
) -> Result<AppState, AppError> {
    let mut config = AppConfig::for_instance(instance_path);
    match overrides {
        Some(overrides) => config.apply(overrides),
        None => config.load_instance_file()?,
    }

    config.ensure_instance_dir()?;

    let pool = db::init(&config).await?;

    info!(
        "application bootstrapped; instance at {}, database at {}",
        config.instance_path.display(),
        config.database.display()
    );
    Ok(AppState { config, pool })
}
