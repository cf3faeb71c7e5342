//! Core module for the grade average engine and supporting functionality

pub mod average;
pub mod config;
pub mod error;
pub mod history;
pub mod impact;
pub mod models;
pub mod report;
pub mod roster;
pub mod scale;

/// Returns the current version of the `GradePoint` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
