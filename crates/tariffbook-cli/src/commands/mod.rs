//! CLI subcommands.

pub mod clean;
pub mod config;
pub mod scan;
