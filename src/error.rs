//! Error handling for seqinstall
//!
//! Centralized error types using thiserror. All fallible operations in the
//! crate return these types for consistency.

use thiserror::Error;

/// Main error type for seqinstall
#[derive(Error, Debug)]
pub enum InstallerError {
    /// IO errors (directory listing, artifact removal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Workspace errors (root or package directory missing or inaccessible)
    #[error("Workspace error: {0}")]
    Workspace(String),

    /// Packaging tool errors (tool could not be spawned or waited on)
    #[error("Tool error: {0}")]
    Tool(String),

    /// The packaging tool ran and reported failure for a package.
    /// An exit code of -1 means the tool was terminated by a signal.
    #[error("Install of package '{package}' failed with exit code {exit_code}")]
    InstallFailed { package: String, exit_code: i32 },
}

/// Result type alias for seqinstall operations
pub type Result<T> = std::result::Result<T, InstallerError>;

impl InstallerError {
    /// Create a workspace error
    pub fn workspace(msg: impl Into<String>) -> Self {
        Self::Workspace(msg.into())
    }

    /// Create a packaging tool error
    pub fn tool(msg: impl Into<String>) -> Self {
        Self::Tool(msg.into())
    }

    /// Create an install failure for a package
    pub fn install_failed(package: impl Into<String>, exit_code: i32) -> Self {
        Self::InstallFailed {
            package: package.into(),
            exit_code,
        }
    }

    /// Process exit code for this error.
    ///
    /// A failed install propagates the tool's own exit code when it fits in
    /// the exit-status range; everything else maps to 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InstallFailed { exit_code, .. } => match u8::try_from(*exit_code) {
                Ok(code) if code != 0 => code,
                _ => 1,
            },
            _ => 1,
        }
    }
}
