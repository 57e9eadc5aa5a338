//! Package entries and the install banner
//!
//! A package is a subdirectory of the root directory containing a descriptor
//! the external packaging tool knows how to build. Order is significant:
//! later packages may depend on earlier ones already being installed into the
//! active environment.

use std::fmt;

/// The built-in install order used when no packages are given on the
/// command line. Each name is a subdirectory of the root directory.
pub const DEFAULT_PACKAGES: &[&str] = &["util", "comm", "core", "client"];

/// One entry of the ordered install list: a directory name relative to the
/// root directory. Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry(String);

impl PackageEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Directory name of this package, relative to the root directory.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The built-in list as entries, in install order.
pub fn default_packages() -> Vec<PackageEntry> {
    DEFAULT_PACKAGES.iter().copied().map(PackageEntry::new).collect()
}

/// Banner printed before a package's install step: the title line, a rule of
/// dashes exactly as long as the title, and a trailing blank line.
pub fn banner(name: &str) -> String {
    let title = format!("Install package {}", name);
    let rule = "-".repeat(title.len());
    format!("{}\n{}\n\n", title, rule)
}
