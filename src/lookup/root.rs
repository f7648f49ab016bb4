use std::path::{Path, PathBuf};

use super::{load_lines, resolve_value, LookupError, MINISERV_CONF};

/// Discovers the installation root from the core configuration file.
///
/// Scans `<config_dir>/miniserv.conf` for `root=` bindings (last one wins)
/// and verifies that the resolved path exists as a directory. Only
/// description lookups need the root; value lookups never call this.
pub fn resolve_root(config_dir: &Path) -> Result<PathBuf, LookupError> {
    let lines = load_lines(config_dir, MINISERV_CONF)?;

    let root = resolve_value("root", &lines).ok_or_else(|| LookupError::RootIndeterminate {
        path: config_dir.join(MINISERV_CONF),
    })?;

    let root = PathBuf::from(root);
    if !root.is_dir() {
        return Err(LookupError::RootInvalid { path: root });
    }

    tracing::debug!(root = %root.display(), "resolved installation root");
    Ok(root)
}
