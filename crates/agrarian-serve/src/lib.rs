//! Agrarian Serve - demo HTTP service for the private CI/CD pipeline.
//!
//! This crate provides a tiny JSON API whose only purpose is to prove that a
//! build went through the pipeline and came up healthy. Every response is
//! assembled from fixed constants, the wall clock and the `ENVIRONMENT`
//! variable.
//!
//! # Architecture
//!
//! - **Config**: Startup configuration loaded from the environment
//! - **Routes**: `/`, `/health`, `/info` plus the API documentation pages
//! - **Error**: Uniform `{"message", "timestamp"}` envelope for HTTP errors

pub mod clock;
mod config;
mod error;
mod openapi;
mod routes;

pub use self::config::Config;
pub use self::error::ApiError;
pub use self::openapi::ApiDoc;
pub use self::routes::{app, cors_layer, router};

/// Human-readable application title.
pub const APP_TITLE: &str = "Demo Agrarian Application";

/// Machine name reported by `/info`.
pub const APP_NAME: &str = "demo-agrarian-app";

/// Version reported by every endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identifier the pipeline looks for to confirm a deployment.
pub const PIPELINE: &str = "private-ci-cd-pipeline";
