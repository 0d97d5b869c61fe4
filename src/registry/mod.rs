//! Package registry keyword lookups.
//!
//! The registry is a capability interface: the pipeline only needs a
//! query-by-name operation returning a template's declared keywords, so
//! tests substitute in-memory fakes and production wires up [`NpmRegistry`].

pub mod npm;

pub use npm::{NpmRegistry, DEFAULT_REGISTRY_URL};

use crate::error::Result;

/// Query-by-name access to a package registry.
pub trait RegistryClient {
    /// Fetch the declared keywords of the named package.
    ///
    /// A package the registry does not know is
    /// [`ScaffoldError::RegistryLookupFailed`](crate::ScaffoldError::RegistryLookupFailed);
    /// a registry that cannot be reached is
    /// [`ScaffoldError::RegistryUnavailable`](crate::ScaffoldError::RegistryUnavailable).
    fn keywords(&self, package: &str) -> Result<Vec<String>>;
}
