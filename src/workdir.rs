//! Working-directory guard
//!
//! The process current working directory is the one piece of mutable state
//! this tool touches, so it is treated as an acquired resource: every change
//! of directory goes through [`WorkdirGuard`], which restores the previous
//! directory when dropped. The starting directory is also recorded globally
//! so the signal path can restore it before terminating (see
//! `process_guard::init_signal_handlers`).

use crate::error::{InstallerError, Result};
use log::warn;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Directory the process started in, recorded once at startup.
static ORIGINAL_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Record the process's starting directory. Call once at startup, before any
/// directory change. Subsequent calls return the first recorded value.
pub fn record_original_dir() -> Result<PathBuf> {
    let current = env::current_dir()?;
    Ok(ORIGINAL_DIR.get_or_init(|| current).clone())
}

/// Restore the recorded starting directory. Best-effort: failure is logged
/// and never escalated, the primary exit status must survive.
pub fn restore_original_dir() {
    if let Some(dir) = ORIGINAL_DIR.get() {
        if let Err(e) = env::set_current_dir(dir) {
            warn!(
                "Failed to restore working directory to {}: {}",
                dir.display(),
                e
            );
        }
    }
}

/// RAII guard over a directory change.
///
/// `enter` changes into `target` and remembers where the process was; `Drop`
/// changes back. Guards nest: the installer holds one for the root directory
/// and a shorter-lived one per package.
#[derive(Debug)]
pub struct WorkdirGuard {
    previous: PathBuf,
}

impl WorkdirGuard {
    /// Change into `target`, returning a guard that restores the previous
    /// directory on drop.
    pub fn enter(target: &Path) -> Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(target).map_err(|e| {
            InstallerError::workspace(format!("cannot enter directory {}: {}", target.display(), e))
        })?;
        Ok(Self { previous })
    }

    /// The directory this guard will restore on drop.
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        // Best-effort, same policy as restore_original_dir
        if let Err(e) = env::set_current_dir(&self.previous) {
            warn!(
                "Failed to restore working directory to {}: {}",
                self.previous.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Single test: the working directory is process-global, so nesting and
    // restoration are exercised in one place rather than racing across tests.
    #[test]
    fn test_guard_enters_and_restores_nested() {
        let outer = TempDir::new().unwrap();
        let inner = outer.path().join("inner");
        std::fs::create_dir(&inner).unwrap();

        let before = env::current_dir().unwrap();
        {
            let outer_guard = WorkdirGuard::enter(outer.path()).unwrap();
            assert_eq!(outer_guard.previous(), before.as_path());
            let outer_cwd = env::current_dir().unwrap();
            {
                let _inner_guard = WorkdirGuard::enter(Path::new("inner")).unwrap();
                assert_eq!(
                    env::current_dir().unwrap().file_name().unwrap(),
                    "inner"
                );
            }
            // inner guard restored the outer directory
            assert_eq!(env::current_dir().unwrap(), outer_cwd);

            // entering a missing directory fails without moving us
            assert!(WorkdirGuard::enter(Path::new("no-such-subdir")).is_err());
            assert_eq!(env::current_dir().unwrap(), outer_cwd);
        }
        assert_eq!(env::current_dir().unwrap(), before);
    }
}
