//! seqinstall library
//!
//! Sequential, fail-fast installation of a framework's sub-packages: for an
//! ordered list of package directories, clean stale build artifacts and run
//! the external packaging tool in each, stopping at the first failure and
//! restoring the working directory on every exit path.

pub mod cleanup;
pub mod cli;
pub mod error;
pub mod installer;
pub mod packages;
pub mod process_guard;
pub mod runner;
pub mod workdir;

// Re-export main types for convenience
pub use error::{InstallerError, Result};
pub use packages::{banner, default_packages, PackageEntry, DEFAULT_PACKAGES};
pub use process_guard::{ChildRegistry, CommandProcessGroup, ProcessGuard};
pub use runner::{
    disable_dry_run, enable_dry_run, is_dry_run, InstallTool, ToolCommand, ToolOutput,
    DEFAULT_TOOL,
};
pub use workdir::WorkdirGuard;
