use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for configuration lookups.
///
/// Every variant is fatal at the point of detection; the binary prints the
/// message and exits non-zero.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The target config or metadata file is missing or unreadable.
    #[error("failed to read {}: {source}", path.display())]
    ConfigNotFound { path: PathBuf, source: io::Error },

    /// The core configuration has no `root=` binding.
    #[error("no root= directive in {}; installation root is indeterminate", path.display())]
    RootIndeterminate { path: PathBuf },

    /// The resolved installation root is not an existing directory.
    #[error("installation root {} is not a directory", path.display())]
    RootInvalid { path: PathBuf },

    /// The requested key is absent from the config file.
    #[error("option {key} not found in {}", path.display())]
    OptionNotFound { key: String, path: PathBuf },

    /// The requested key is absent from the module's metadata file.
    #[error("option {key} is not recognized by module {module}")]
    OptionUnrecognized { key: String, module: String },

    /// The metadata file contains zero parseable entries.
    #[error("module {module} has no described options")]
    NoOptionsForModule { module: String },

    /// `--describe` was requested without a module.
    #[error("--describe requires --module: the core configuration has no metadata file")]
    UsageError,
}
