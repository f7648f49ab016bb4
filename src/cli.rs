//! Command-line interface definitions and argument parsing.
//!
//! This module provides the CLI structure for wmconf using [`clap`],
//! including the conversion into a [`LookupRequest`](crate::lookup::LookupRequest).

mod args;

pub use args::{Cli, DEFAULT_CONFIG_DIR};
