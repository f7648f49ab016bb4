//! Configuration lookup.
//!
//! Implements the four steps of a lookup: locating the installation root,
//! loading a config file into lines, resolving a directive's value, and
//! resolving human-readable option descriptions.
//!
//! Each step returns a [`LookupError`] on failure; nothing is retried or
//! cached, and no state outlives a single [`LookupRequest::run`] call.

mod describe;
mod error;
mod loader;
mod request;
mod root;
mod value;

pub use describe::{describe_all, describe_option};
pub use error::LookupError;
pub use loader::load_lines;
pub use request::LookupRequest;
pub use root::resolve_root;
pub use value::resolve_value;

/// Core server configuration file, relative to the configuration directory.
pub const MINISERV_CONF: &str = "miniserv.conf";

/// Per-module configuration file, relative to `<config dir>/<module>`.
pub const MODULE_CONFIG: &str = "config";

/// Per-module metadata file, relative to `<installation root>/<module>`.
pub const CONFIG_INFO: &str = "config.info";
