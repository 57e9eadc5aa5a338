use clap::Parser;
use std::path::PathBuf;

use crate::runner::DEFAULT_TOOL;

/// seqinstall - install each sub-package in order, stopping at the first failure
#[derive(Parser)]
#[command(name = "seqinstall")]
#[command(about = "Sequential, fail-fast installer for the framework's sub-packages")]
#[command(version)]
pub struct Cli {
    /// Dry-run mode: print banners and clean artifacts without invoking the
    /// packaging tool.
    #[arg(long)]
    pub dry_run: bool,

    /// Root directory containing the package subdirectories.
    ///
    /// Defaults to the directory containing this executable, so a bare
    /// invocation installs the packages that ship next to it.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Packaging tool command line run in each package directory
    /// (whitespace-separated, no shell quoting).
    #[arg(long, default_value = DEFAULT_TOOL)]
    pub tool: String,

    /// Packages to install, in order. Defaults to the built-in list.
    pub packages: Vec<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
