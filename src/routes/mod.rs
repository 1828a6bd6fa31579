//!
//! # Route Registration
//!
//! Route and handler registration is a separate step from configuration
//! assembly: [`config`] wires handlers onto any `App`, whether the state
//! came from a full bootstrap or was assembled by hand in a test.

pub mod auth;
pub mod hello;

use actix_web::web;

/// Registers the application's HTTP surface: the illustrative `/hello`
/// endpoint and the authentication route group under `/auth`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(hello::hello).service(
        web::scope("/auth")
            .service(auth::register)
            .service(auth::login),
    );
}
