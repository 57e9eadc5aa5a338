//! seqinstall - Main entry point
//!
//! Installs the framework's sub-packages in order by running the external
//! packaging tool in each package directory, fail-fast.

use anyhow::Context;
use log::{debug, error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use seqinstall::cli::Cli;
use seqinstall::error::InstallerError;
use seqinstall::packages::{self, PackageEntry};
use seqinstall::process_guard::{self, ProcessGuard};
use seqinstall::runner::{self, ToolCommand};
use seqinstall::{installer, workdir};

/// Initialize the logger with appropriate settings
fn init_logger() {
    use env_logger::Builder;
    use std::io::Write;

    Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env() // RUST_LOG overrides
        .init();
}

fn main() -> ExitCode {
    init_logger();
    debug!("seqinstall starting up");

    // Signal handlers first: they reap the packaging tool and restore the
    // working directory if we are interrupted mid-install
    if let Err(e) = process_guard::init_signal_handlers() {
        log::warn!("Failed to initialize signal handlers: {}", e);
        // Continue anyway, cleanup still happens via Drop
    }
    let _guard = ProcessGuard::new();

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            let code = err
                .downcast_ref::<InstallerError>()
                .map(InstallerError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    workdir::record_original_dir().context("failed to record starting directory")?;

    if cli.dry_run {
        runner::enable_dry_run();
        info!("Dry-run mode enabled, the packaging tool will not be invoked");
    }

    let root = match cli.root {
        Some(root) => root,
        None => default_root().context("failed to resolve default root directory")?,
    };

    let package_list: Vec<PackageEntry> = if cli.packages.is_empty() {
        packages::default_packages()
    } else {
        cli.packages.iter().cloned().map(PackageEntry::new).collect()
    };

    let tool = ToolCommand::from_command_line(&cli.tool)?;

    installer::run(&root, &package_list, &tool)?;

    info!("All {} package(s) installed", package_list.len());
    Ok(())
}

/// Without `--root`, packages are expected next to the executable itself,
/// matching the original on-disk layout of the framework checkout.
fn default_root() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate own executable")?;
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir().context("cannot read current directory"),
    }
}
