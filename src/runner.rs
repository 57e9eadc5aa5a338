//! Packaging tool invocation
//!
//! The external packaging tool is an opaque collaborator: we run its install
//! command in the package directory and read back success or failure. All
//! invocations go through [`ToolCommand`] so every child is spawned in its
//! own process group and registered for cleanup.

use crate::error::{InstallerError, Result};
use crate::process_guard::{ChildRegistry, CommandProcessGroup};
use log::info;
use std::process::Command;
use std::sync::atomic::{AtomicBool, Ordering};

/// Command line run in each package directory when none is given.
pub const DEFAULT_TOOL: &str = "python setup.py install";

/// Process-global dry-run flag. When set, tool invocations are logged and
/// skipped, and reported as successful.
static DRY_RUN: AtomicBool = AtomicBool::new(false);

pub fn enable_dry_run() {
    DRY_RUN.store(true, Ordering::SeqCst);
}

pub fn disable_dry_run() {
    DRY_RUN.store(false, Ordering::SeqCst);
}

pub fn is_dry_run() -> bool {
    DRY_RUN.load(Ordering::SeqCst)
}

/// Result of one tool invocation.
#[derive(Debug, Clone, Copy)]
pub struct ToolOutput {
    /// Exit code (None if the tool was terminated by a signal).
    pub exit_code: Option<i32>,
    /// Whether the tool exited successfully (exit code 0).
    pub success: bool,
}

/// Seam between the installer and the external packaging tool. The
/// production implementation spawns a subprocess; tests substitute a
/// recording fake.
pub trait InstallTool {
    /// Run the tool's install step for `package`, with the package directory
    /// as the current working directory. Returns the tool's verdict; spawn
    /// or wait failures are errors, a non-zero exit is not.
    fn install(&self, package: &str) -> Result<ToolOutput>;
}

/// Production [`InstallTool`]: a fixed argv run in the current directory.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    argv: Vec<String>,
}

impl ToolCommand {
    /// Parse a whitespace-separated command line. Shell quoting is not
    /// interpreted; pass a wrapper script for anything more elaborate.
    pub fn from_command_line(line: &str) -> Result<Self> {
        let argv: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        if argv.is_empty() {
            return Err(InstallerError::tool("empty tool command line"));
        }
        Ok(Self { argv })
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}

impl InstallTool for ToolCommand {
    fn install(&self, package: &str) -> Result<ToolOutput> {
        if is_dry_run() {
            info!(
                "[DRY RUN] Skipping '{}' for package {}",
                self.argv.join(" "),
                package
            );
            return Ok(ToolOutput {
                exit_code: Some(0),
                success: true,
            });
        }

        info!("Running '{}' for package {}", self.argv.join(" "), package);

        // stdio is inherited: the tool's own output is the user-visible
        // progress and error report
        let mut child = Command::new(&self.argv[0])
            .args(&self.argv[1..])
            .in_new_process_group()
            .spawn()
            .map_err(|e| {
                InstallerError::tool(format!("failed to spawn '{}': {}", self.argv[0], e))
            })?;
        let pid = child.id();

        // Register so the signal path can reap the tool if we are killed
        if let Ok(mut registry) = ChildRegistry::global().lock() {
            registry.register(pid);
        }

        let status = child.wait().map_err(|e| {
            InstallerError::tool(format!("failed waiting for '{}': {}", self.argv[0], e))
        })?;

        if let Ok(mut registry) = ChildRegistry::global().lock() {
            registry.unregister(pid);
        }

        Ok(ToolOutput {
            exit_code: status.code(),
            success: status.success(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_command_line_splits_argv() {
        let tool = ToolCommand::from_command_line("python setup.py install").unwrap();
        assert_eq!(tool.argv(), ["python", "setup.py", "install"]);
    }

    #[test]
    fn test_from_command_line_rejects_empty() {
        assert!(ToolCommand::from_command_line("").is_err());
        assert!(ToolCommand::from_command_line("   ").is_err());
    }

    #[test]
    fn test_install_survives_poisoned_registry() {
        // Poison the global registry mutex, then run a real tool: the
        // registry bookkeeping is skipped, the install still completes
        let registry = ChildRegistry::global();
        let _ = std::thread::spawn(move || {
            let _guard = registry.lock().unwrap();
            panic!("poison the registry");
        })
        .join();
        assert!(ChildRegistry::global().lock().is_err());

        let tool = ToolCommand::from_command_line("sh -c true").unwrap();
        let output = tool.install("util").unwrap();
        assert!(output.success);
        assert_eq!(output.exit_code, Some(0));
    }

    #[test]
    fn test_dry_run_skips_spawn() {
        // A tool that cannot exist: dry-run must succeed without spawning it
        let tool = ToolCommand::from_command_line("/nonexistent/packaging-tool install").unwrap();

        enable_dry_run();
        let output = tool.install("util");
        disable_dry_run();

        let output = output.unwrap();
        assert!(output.success);
        assert_eq!(output.exit_code, Some(0));
    }
}
