use crate::conf::error::ConfigError;
use glob::glob;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Manifest files under `root` matching `pattern`, in path order.
///
/// Directories are ignored, as are entries the walker cannot read. A pattern
/// that matches nothing gives an empty list; only a malformed pattern fails.
pub fn discover(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, ConfigError> {
    let resolved = resolve_glob(root, pattern);
    let entries = glob(&resolved).map_err(|source| ConfigError::Glob {
        pattern: resolved.clone(),
        source,
    })?;

    let files: BTreeSet<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::debug!(path = %err.path().display(), "skipping unreadable entry");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();

    Ok(files.into_iter().collect())
}

pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    root.join(pattern).to_string_lossy().into_owned()
}
