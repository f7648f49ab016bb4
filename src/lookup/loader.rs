use std::fs;
use std::path::Path;

use super::LookupError;

/// Reads `dir/file` into an ordered sequence of lines.
///
/// Trailing line terminators (`\n` or `\r\n`) are stripped; no other
/// structure is imposed. The whole file is read in one pass and the handle
/// released before returning.
pub fn load_lines(dir: &Path, file: &str) -> Result<Vec<String>, LookupError> {
    let path = dir.join(file);
    tracing::debug!(path = %path.display(), "loading config file");

    let contents = fs::read_to_string(&path).map_err(|source| LookupError::ConfigNotFound {
        path: path.clone(),
        source,
    })?;

    Ok(contents.lines().map(str::to_owned).collect())
}
