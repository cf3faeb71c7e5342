//! CLI command handlers for `GradePoint`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod compute;
pub mod config;
pub mod convert;
pub mod scales;
