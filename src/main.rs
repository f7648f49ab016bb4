//! # wmconf
//!
//! A command-line lookup tool for Webmin-style `key=value` configuration
//! files.
//!
//! Reads either the core server configuration (`miniserv.conf`) or a
//! per-module `config` file and prints every directive or a single named
//! directive's value. With `--describe`, values are replaced by the
//! human-readable descriptions stored in the module's `config.info`
//! metadata file under the installation root.
//!
//! ## Usage
//!
//! ```bash
//! # Print every core directive
//! wmconf
//!
//! # Print one directive of the "cron" module
//! wmconf --module cron --option interval
//!
//! # Describe every option the module exposes
//! wmconf --module cron --describe
//! ```

mod cli;
mod lookup;
mod text;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> ExitCode {
    init_tracing();

    let request = Cli::parse().into_request();
    match request.run() {
        Ok(output) => {
            for line in output {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", text::bold(format!("{}: {err}", text::error("Error"))));
            ExitCode::FAILURE
        }
    }
}

/// Installs the tracing subscriber, tolerating one already being set.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
