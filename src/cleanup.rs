//! Build-artifact cleanup
//!
//! Before a package is installed its stale build artifacts are removed:
//! the `build` and `dist` directories and any `*.egg-info` entry. Removal is
//! recursive and tolerant of the targets not existing.

use crate::error::Result;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Fixed-name artifact directories removed before every install.
const ARTIFACT_DIRS: &[&str] = &["build", "dist"];

/// Suffix matched against directory entries in place of the shell's
/// `*.egg-info` glob.
const EGG_INFO_SUFFIX: &str = ".egg-info";

/// Remove stale build artifacts from a package directory.
///
/// Absence of any target is not an error; a pristine checkout cleans as a
/// no-op. The package directory itself must exist.
pub fn clean_package_dir(dir: &Path) -> Result<()> {
    for name in ARTIFACT_DIRS {
        remove_if_present(&dir.join(name))?;
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().ends_with(EGG_INFO_SUFFIX) {
            remove_if_present(&entry.path())?;
        }
    }

    Ok(())
}

/// Remove a file or directory tree, treating "not found" as success.
fn remove_if_present(path: &Path) -> Result<()> {
    // symlink_metadata so a dangling symlink is removed, not followed
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => {
            debug!("Removing artifact directory {}", path.display());
            fs::remove_dir_all(path)?;
        }
        Ok(_) => {
            debug!("Removing artifact {}", path.display());
            fs::remove_file(path)?;
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
