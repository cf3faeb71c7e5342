//! Shared library for `GradePoint`
//! Contains the grade average engine and configuration used by the CLI.

pub mod core;

pub use self::core::*;
