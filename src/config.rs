//!
//! # Application Configuration
//!
//! Settings live in a typed struct rather than an open-ended key/value map:
//! every setting has a named, typed field, and overrides are applied through
//! an explicit step that can only touch known keys.
//!
//! Configuration goes through two phases. Defaults are written when the
//! struct is constructed for an instance path, then exactly one override
//! source is applied: either `config.toml` from the instance directory or a
//! caller-supplied [`ConfigOverride`]. The two sources are mutually
//! exclusive per construction, never merged with each other.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::AppError;

/// Placeholder secret used when nothing overrides it. Convenient during
/// development, unsafe for production; real deployments must replace it
/// through `config.toml` or a caller-supplied override.
pub const DEFAULT_SECRET_KEY: &str = "dev";

/// Filename of the SQLite database inside the instance directory.
pub const DATABASE_FILENAME: &str = "hearth.sqlite";

/// Filename of the optional instance configuration file.
pub const INSTANCE_CONFIG_FILENAME: &str = "config.toml";

/// The full set of application settings.
///
/// Owned by the application state for the lifetime of the process and
/// treated as read-only once bootstrap completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Secret used to sign authentication tokens.
    pub secret_key: String,
    /// Path of the SQLite database file.
    pub database: PathBuf,
    /// Marks the instance as running under a test harness.
    pub testing: bool,
    /// Local, non-version-controlled directory for runtime data.
    pub instance_path: PathBuf,
}

/// A partial configuration: every field is optional, and only `Some` fields
/// overwrite the corresponding default when applied.
///
/// Deserializable so the instance `config.toml` maps onto it directly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigOverride {
    pub secret_key: Option<String>,
    pub database: Option<PathBuf>,
    pub testing: Option<bool>,
}

impl AppConfig {
    /// Builds the default configuration for an instance directory: the
    /// placeholder secret and a database file located inside that directory.
    pub fn for_instance(instance_path: impl Into<PathBuf>) -> Self {
        let instance_path = instance_path.into();
        let database = instance_path.join(DATABASE_FILENAME);
        Self {
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            database,
            testing: false,
            instance_path,
        }
    }

    /// Applies an override on top of the current values. Fields set in the
    /// override win; unset fields leave the existing value untouched.
    pub fn apply(&mut self, overrides: ConfigOverride) {
        if let Some(secret_key) = overrides.secret_key {
            self.secret_key = secret_key;
        }
        if let Some(database) = overrides.database {
            self.database = database;
        }
        if let Some(testing) = overrides.testing {
            self.testing = testing;
        }
    }

    /// Loads `config.toml` from the instance directory, if present, and
    /// applies it as an override.
    ///
    /// A missing file is not an error: the defaults stand. A file that
    /// exists but cannot be read or parsed aborts startup.
    pub fn load_instance_file(&mut self) -> Result<(), AppError> {
        let path = self.instance_config_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no instance config at {}, using defaults", path.display());
                return Ok(());
            }
            Err(err) => {
                return Err(AppError::Io(format!(
                    "failed to read {}: {}",
                    path.display(),
                    err
                )))
            }
        };
        let overrides: ConfigOverride = toml::from_str(&raw)?;
        self.apply(overrides);
        Ok(())
    }

    /// Ensures the instance directory exists.
    ///
    /// Only the "already exists" condition is tolerated. Any other failure
    /// (permissions, read-only filesystem) propagates and aborts startup.
    pub fn ensure_instance_dir(&self) -> Result<(), AppError> {
        if let Err(err) = fs::create_dir_all(&self.instance_path) {
            if err.kind() != io::ErrorKind::AlreadyExists {
                return Err(AppError::Io(format!(
                    "failed to create instance directory {}: {}",
                    self.instance_path.display(),
                    err
                )));
            }
        }
        Ok(())
    }

    /// Path of the optional instance configuration file.
    pub fn instance_config_path(&self) -> PathBuf {
        self.instance_path.join(INSTANCE_CONFIG_FILENAME)
    }
}
