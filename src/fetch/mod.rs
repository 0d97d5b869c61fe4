//! Retrieving remote templates into the target's dependency store.
//!
//! The installer is a capability interface so tests can materialize remote
//! templates without a package manager on PATH. The production
//! implementation shells out to npm with lifecycle scripts suppressed:
//! provenance was already verified, but install-time code execution stays
//! off regardless.

use std::path::Path;

use crate::error::{Result, ScaffoldError};
use crate::shell::{self, CommandOptions};

/// Installs a named package into a directory without running its
/// lifecycle scripts.
pub trait PackageInstaller {
    /// Install `package` into `target`'s dependency store.
    ///
    /// On failure, partial files are left in place; there is no rollback.
    fn install(&self, package: &str, target: &Path) -> Result<()>;
}

/// Installer backed by the npm CLI.
#[derive(Debug, Default)]
pub struct NpmInstaller;

impl NpmInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl PackageInstaller for NpmInstaller {
    fn install(&self, package: &str, target: &Path) -> Result<()> {
        let command = format!("npm install {} --ignore-scripts", package);
        let result = shell::execute(&command, &CommandOptions::captured_in(target))?;

        if result.success {
            tracing::debug!(package, duration = ?result.duration, "template fetched");
            Ok(())
        } else {
            Err(ScaffoldError::FetchFailed {
                template: package.to_string(),
                output: result.combined_output(),
            })
        }
    }
}
