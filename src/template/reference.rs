//! Template reference classification.

use std::path::{Path, PathBuf};

/// A classified template reference.
///
/// Derived once from the resolved options and consumed read-only afterwards.
#[derive(Debug, Clone)]
pub struct TemplateReference {
    raw: String,
    is_local: bool,
    resolved_path: PathBuf,
}

impl TemplateReference {
    /// Classify a raw template reference as local or registry-hosted.
    ///
    /// A reference is local iff it starts with a relative-path marker (`.`).
    /// Local references resolve against the current directory; registry
    /// references resolve to where the fetcher will place the package inside
    /// the target's dependency store.
    pub fn classify(raw: &str, current_dir: &Path, target_dir: &Path) -> Self {
        let is_local = raw.starts_with('.');
        let resolved_path = if is_local {
            current_dir.join(raw)
        } else {
            target_dir.join("node_modules").join(raw)
        };

        Self {
            raw: raw.to_string(),
            is_local,
            resolved_path,
        }
    }

    /// The reference string as the user supplied it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the reference points at the local filesystem.
    pub fn is_local(&self) -> bool {
        self.is_local
    }

    /// Where the template contents live (or will live, once fetched).
    pub fn resolved_path(&self) -> &Path {
        &self.resolved_path
    }

    /// Path of the template's manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.resolved_path.join(super::MANIFEST_FILE)
    }
}
