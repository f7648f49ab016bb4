use std::path::PathBuf;

use super::{
    describe_all, describe_option, load_lines, resolve_root, resolve_value, LookupError,
    CONFIG_INFO, MINISERV_CONF, MODULE_CONFIG,
};

/// A single configuration lookup, fully described by the caller.
///
/// The configuration directory is always explicit here; nothing below this
/// type consults the environment. Nothing is cached between runs.
#[derive(Debug)]
pub struct LookupRequest {
    /// Directory holding `miniserv.conf` and per-module config files.
    pub config_dir: PathBuf,
    /// Module whose config (or metadata) should be read; `None` selects the
    /// core configuration.
    pub module: Option<String>,
    /// Restrict output to the directive bound to this key.
    pub option: Option<String>,
    /// Print metadata descriptions instead of configured values.
    pub describe: bool,
}

impl LookupRequest {
    /// Runs the lookup and returns the lines to print, in output order.
    pub fn run(&self) -> Result<Vec<String>, LookupError> {
        if self.describe {
            self.run_describe()
        } else {
            self.run_values()
        }
    }

    /// Description mode: read `<root>/<module>/config.info`.
    ///
    /// The usage check comes first so that a bad invocation never touches
    /// the filesystem.
    fn run_describe(&self) -> Result<Vec<String>, LookupError> {
        let module = self.module.as_deref().ok_or(LookupError::UsageError)?;

        let root = resolve_root(&self.config_dir)?;
        let lines = load_lines(&root.join(module), CONFIG_INFO)?;

        match self.option.as_deref() {
            Some(key) => {
                let entry =
                    describe_option(&lines, key).ok_or_else(|| LookupError::OptionUnrecognized {
                        key: key.to_owned(),
                        module: module.to_owned(),
                    })?;
                Ok(vec![entry])
            }
            None => {
                let entries = describe_all(&lines);
                if entries.is_empty() {
                    return Err(LookupError::NoOptionsForModule {
                        module: module.to_owned(),
                    });
                }
                Ok(entries)
            }
        }
    }

    /// Value mode: read the core or module config and print directives.
    fn run_values(&self) -> Result<Vec<String>, LookupError> {
        let (dir, file) = match self.module.as_deref() {
            Some(module) => (self.config_dir.join(module), MODULE_CONFIG),
            None => (self.config_dir.clone(), MINISERV_CONF),
        };

        let lines = load_lines(&dir, file)?;

        match self.option.as_deref() {
            Some(key) => {
                let value = resolve_value(key, &lines).ok_or_else(|| LookupError::OptionNotFound {
                    key: key.to_owned(),
                    path: dir.join(file),
                })?;
                Ok(vec![value.to_owned()])
            }
            None => Ok(lines),
        }
    }
}
