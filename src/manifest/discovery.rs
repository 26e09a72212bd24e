use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MANIFEST_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

fn is_hidden(name: &str) -> bool {
    name.starts_with('.') && name != "." && name != ".."
}

/// Manifest files under `root`, sorted by path. A file path is returned as
/// is; a directory is walked recursively, skipping hidden entries.
pub fn discover_manifests(root: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        return Err(ConfigError::read_error(root, "path does not exist"));
    }

    let mut manifests = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(&e.file_name().to_string_lossy()))
    {
        let entry = entry.map_err(|e| ConfigError::DirectoryScan {
            path: root.to_path_buf(),
            source: e,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| MANIFEST_EXTENSIONS.contains(&ext));
        if matches {
            manifests.push(entry.path().to_path_buf());
        }
    }

    manifests.sort();
    Ok(manifests)
}
