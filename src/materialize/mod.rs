//! Project materialization.
//!
//! Copies a verified template into the target directory and normalizes the
//! result: scaffolding-only files (lockfile, dependency cache) are removed,
//! the manifest is rewritten through the script policy, and a fresh ignore
//! file is written. There is no transactional guarantee; a failing step
//! leaves the directory in whatever partial state it produced.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;
use crate::template::{PackageManifest, ScriptPolicy, MANIFEST_FILE};

/// Placeholder manifest written before fetch so the dependency store has a
/// package file to attach to. Overwritten by the template copy.
pub const PLACEHOLDER_MANIFEST: &str = r#"{"name": "my-csp-app"}"#;

/// Lockfile removed from the materialized project.
pub const LOCKFILE: &str = "package-lock.json";

/// Dependency cache directory removed from the materialized project.
pub const DEPENDENCY_CACHE: &str = "node_modules";

/// Directory names listed in the generated ignore file.
pub const IGNORE_ENTRIES: [&str; 4] = [".build", "build", "web_modules", DEPENDENCY_CACHE];

/// Copies a template into a target directory and cleans the result.
#[derive(Debug)]
pub struct Materializer {
    policy: ScriptPolicy,
}

impl Materializer {
    /// Create a materializer with the given script policy.
    pub fn new(policy: ScriptPolicy) -> Self {
        Self { policy }
    }

    /// Ensure the target directory exists and holds a placeholder manifest.
    ///
    /// Idempotent; runs before any fetch so the installer has a directory
    /// to work in.
    pub fn prepare_target(&self, target: &Path) -> Result<()> {
        fs::create_dir_all(target)?;
        fs::write(target.join(MANIFEST_FILE), PLACEHOLDER_MANIFEST)?;
        Ok(())
    }

    /// Copy the template into the target and normalize the result.
    pub fn materialize(&self, template_path: &Path, target: &Path) -> Result<()> {
        tracing::debug!(template = %template_path.display(), target = %target.display(), "copying template");
        copy_recursive(template_path, target)?;
        self.clean_project(target)
    }

    /// Strip scaffolding-only files and rewrite the manifest and ignore file.
    fn clean_project(&self, target: &Path) -> Result<()> {
        remove_file_if_present(&target.join(LOCKFILE))?;
        remove_dir_if_present(&target.join(DEPENDENCY_CACHE))?;

        let manifest_path = target.join(MANIFEST_FILE);
        let manifest = PackageManifest::read(&manifest_path)?;
        manifest.clean(&self.policy).write(&manifest_path)?;

        fs::write(target.join(".gitignore"), IGNORE_ENTRIES.join("\n"))?;
        Ok(())
    }
}

/// Recursively copy a directory tree, overwriting on name collision.
fn copy_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let dest = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&dest)?;
            copy_recursive(&entry.path(), &dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}

fn remove_file_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

fn remove_dir_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
