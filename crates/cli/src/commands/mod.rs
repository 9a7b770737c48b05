//! CLI subcommands

pub mod kinds;
pub mod metrics;
pub mod selector;
