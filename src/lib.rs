//! gantry — deployment bootstrap and developer tooling for a containerized
//! web service.
//!
//! Two binaries share this library:
//! - `gantry`: developer CLI wrapping the formatter, linter, environment
//!   sync, and migration tools.
//! - `gantry-entrypoint`: the container entry process, which applies
//!   pending database migrations and then execs the application.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod tools;
pub mod ui;
