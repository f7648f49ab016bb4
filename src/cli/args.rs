use std::path::PathBuf;

use clap::Parser;

use crate::lookup::LookupRequest;

/// Default configuration directory, matching a standard Webmin install.
pub const DEFAULT_CONFIG_DIR: &str = "/etc/webmin";

/// Command-line interface definition.
#[derive(Parser, Debug)]
#[command(
    name = "wmconf",
    author,
    version,
    about = "Lookup tool for Webmin-style key=value configuration files"
)]
pub struct Cli {
    /// Directory holding the core and per-module configuration files.
    #[arg(
        short = 'c',
        long = "config",
        env = "WEBMIN_CONFIG",
        value_name = "DIR",
        default_value = DEFAULT_CONFIG_DIR,
        help = "Optional. Configuration directory holding miniserv.conf and per-module config files."
    )]
    pub config: PathBuf,

    /// Read a module's config file instead of the core miniserv.conf.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "NAME",
        help = "Optional. Read <DIR>/<NAME>/config instead of the core <DIR>/miniserv.conf."
    )]
    pub module: Option<String>,

    /// Restrict output to a single directive.
    #[arg(
        short = 'o',
        long = "option",
        value_name = "KEY",
        help = "Optional. Print only the directive bound to this key."
    )]
    pub option: Option<String>,

    /// Print metadata descriptions instead of configured values.
    #[arg(
        short = 'd',
        long = "describe",
        help = "Print human-readable descriptions from the module's config.info; requires --module."
    )]
    pub describe: bool,
}

impl Cli {
    /// Converts parsed arguments into a lookup request.
    pub fn into_request(self) -> LookupRequest {
        LookupRequest {
            config_dir: self.config,
            module: self.module,
            option: self.option,
            describe: self.describe,
        }
    }
}
