//! npm registry client.
//!
//! Queries `{registry}/{package}/latest` for a package's metadata and
//! extracts its keyword list. Only the keywords are consumed; the rest of
//! the document is ignored.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{Result, ScaffoldError};

use super::RegistryClient;

/// Default registry endpoint.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Keyword metadata returned by the registry for a package version.
#[derive(Debug, Deserialize)]
struct PackageMetadata {
    #[serde(default)]
    keywords: Vec<String>,
}

/// Registry client backed by the npm HTTP registry protocol.
pub struct NpmRegistry {
    client: Client,
    base_url: String,
}

impl NpmRegistry {
    /// Create a client for the given registry endpoint with a 30-second timeout.
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("csp-create/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The configured registry endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn package_url(&self, package: &str) -> String {
        format!("{}/{}/latest", self.base_url, package)
    }
}

impl RegistryClient for NpmRegistry {
    fn keywords(&self, package: &str) -> Result<Vec<String>> {
        let url = self.package_url(package);
        tracing::debug!(%url, "querying registry");

        let response = self.client.get(&url).send().map_err(|e| {
            ScaffoldError::RegistryUnavailable {
                package: package.to_string(),
                message: e.to_string(),
            }
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ScaffoldError::RegistryLookupFailed {
                package: package.to_string(),
            }),
            status if status.is_success() => {
                let metadata: PackageMetadata =
                    response
                        .json()
                        .map_err(|e| ScaffoldError::RegistryUnavailable {
                            package: package.to_string(),
                            message: format!("invalid registry response: {}", e),
                        })?;
                Ok(metadata.keywords)
            }
            status => Err(ScaffoldError::RegistryUnavailable {
                package: package.to_string(),
                message: format!("HTTP {} from {}", status, url),
            }),
        }
    }
}
