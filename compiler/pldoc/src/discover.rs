//! Source file discovery.
//!
//! Roots are walked recursively. Hidden files and directories (a leading
//! `.`) below a root are skipped. A root that is itself a file is kept only
//! when its extension matches.

use std::fs;
use std::path::{Path, PathBuf};

use crate::DriverError;

/// All files under `roots` whose name ends in `.<ext>`, sorted and without
/// duplicates.
pub fn discover(roots: &[PathBuf], ext: &str) -> Result<Vec<PathBuf>, DriverError> {
    let suffix = format!(".{ext}");
    let mut files = Vec::new();
    for root in roots {
        let meta = fs::metadata(root).map_err(|source| DriverError::Walk {
            path: root.clone(),
            source,
        })?;
        if meta.is_dir() {
            discover_recursive(root, &suffix, &mut files)?;
        } else if has_suffix(root, &suffix) {
            files.push(root.clone());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn discover_recursive(dir: &Path, suffix: &str, files: &mut Vec<PathBuf>) -> Result<(), DriverError> {
    let walk_error = |source| DriverError::Walk {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(walk_error)? {
        let entry = entry.map_err(walk_error)?;
        let path = entry.path();

        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        if path.is_dir() {
            discover_recursive(&path, suffix, files)?;
        } else if has_suffix(&path, suffix) {
            files.push(path);
        }
    }
    Ok(())
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(suffix))
}
