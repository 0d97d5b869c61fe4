//! Template references, manifests, and the manifest rewrite policy.
//!
//! A template is a package containing a project skeleton and a `package.json`
//! declaring its scripts and dependencies. A reference to one is either a
//! local filesystem path (starts with `.`) or a registry package name.
//! Templates must carry the [`verify::MARKER_KEYWORD`] keyword before the
//! tool will scaffold from them.

pub mod manifest;
pub mod policy;
pub mod reference;
pub mod verify;

pub use manifest::{CleanManifest, PackageManifest, MANIFEST_FILE};
pub use policy::ScriptPolicy;
pub use reference::TemplateReference;
pub use verify::{verify_template, MARKER_KEYWORD};
