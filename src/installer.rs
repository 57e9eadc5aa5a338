//! Sequential install orchestration
//!
//! The one real behavior of this tool: for an ordered package list, print a
//! banner, clean stale artifacts, and run the packaging tool in each package
//! directory in turn. The first failure aborts the rest of the list; the
//! working directory is restored on every exit path by the guards.

use crate::cleanup;
use crate::error::{InstallerError, Result};
use crate::packages::{banner, PackageEntry};
use crate::runner::InstallTool;
use crate::workdir::WorkdirGuard;
use log::{error, info};
use std::path::Path;

/// Install `packages` in listed order from `root`, fail-fast.
///
/// Each package directory is entered, cleaned of `build`/`dist`/`*.egg-info`
/// leftovers, handed to `tool`, and left again. A non-zero tool exit aborts
/// the remaining list with [`InstallerError::InstallFailed`] carrying the
/// failing package and the tool's exit code. The process working directory
/// is back where it started when this returns, success or not.
pub fn run(root: &Path, packages: &[PackageEntry], tool: &dyn InstallTool) -> Result<()> {
    if !root.is_dir() {
        return Err(InstallerError::workspace(format!(
            "root directory {} does not exist",
            root.display()
        )));
    }

    info!(
        "Installing {} package(s) from {}",
        packages.len(),
        root.display()
    );

    let _root_guard = WorkdirGuard::enter(root)?;

    for entry in packages {
        print!("{}", banner(entry.name()));

        let package_dir = Path::new(entry.name());
        if !package_dir.is_dir() {
            return Err(InstallerError::workspace(format!(
                "package directory '{}' not found under {}",
                entry.name(),
                root.display()
            )));
        }

        {
            let _package_guard = WorkdirGuard::enter(package_dir)?;

            cleanup::clean_package_dir(Path::new("."))?;

            let output = tool.install(entry.name())?;
            if !output.success {
                let code = output.exit_code.unwrap_or(-1);
                error!(
                    "Install of package {} failed with exit code {}",
                    entry.name(),
                    code
                );
                return Err(InstallerError::install_failed(entry.name(), code));
            }
        }

        info!("Package {} installed", entry.name());
        println!();
    }

    Ok(())
}
