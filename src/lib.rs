#![doc = "The `hearth` library crate."]
#![doc = ""]
#![doc = "This crate contains the application factory, typed configuration,"]
#![doc = "data-access setup, authentication helpers, routing configuration, and"]
#![doc = "error handling for the Hearth starter service. It is used by the main"]
#![doc = "binary (`main.rs`) to construct and run the application."]

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod routes;

pub use app::{bootstrap, bootstrap_at, AppState};
pub use config::{AppConfig, ConfigOverride};
pub use error::AppError;
