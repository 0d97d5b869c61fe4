//! Template provenance verification.
//!
//! Scaffolding from an arbitrary, unaudited package masquerading as a
//! template is the main supply-chain hazard this tool guards against. A
//! template is only trusted if its manifest declares the marker keyword:
//! locally by reading `package.json` at the resolved path, remotely by
//! querying the registry's declared keywords before anything is fetched.

use crate::error::{Result, ScaffoldError};
use crate::registry::RegistryClient;

use super::manifest::PackageManifest;
use super::reference::TemplateReference;

/// Keyword a template manifest must declare to authorize scaffolding.
pub const MARKER_KEYWORD: &str = "csp-template";

/// Verify that the referenced template is authorized for use.
///
/// Local references read keywords from the manifest on disk; registry
/// references ask the registry collaborator. Succeeds only when the keyword
/// list contains [`MARKER_KEYWORD`].
pub fn verify_template(
    reference: &TemplateReference,
    registry: &dyn RegistryClient,
) -> Result<()> {
    let keywords = if reference.is_local() {
        PackageManifest::read(&reference.manifest_path())?.keywords
    } else {
        registry.keywords(reference.raw())?
    };

    tracing::debug!(template = reference.raw(), ?keywords, "verifying template");

    if keywords.iter().any(|k| k == MARKER_KEYWORD) {
        Ok(())
    } else {
        Err(ScaffoldError::UntrustedTemplate {
            template: reference.raw().to_string(),
            marker: MARKER_KEYWORD.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct FakeRegistry {
        keywords: Vec<String>,
    }

    impl RegistryClient for FakeRegistry {
        fn keywords(&self, _package: &str) -> Result<Vec<String>> {
            Ok(self.keywords.clone())
        }
    }

    fn local_reference(dir: &Path) -> TemplateReference {
        TemplateReference::classify("./tmpl", dir.parent().unwrap(), Path::new("/unused"))
    }

    #[test]
    fn local_template_with_marker_passes() {
        let temp = TempDir::new().unwrap();
        let tmpl = temp.path().join("tmpl");
        fs::create_dir(&tmpl).unwrap();
        fs::write(
            tmpl.join("package.json"),
            r#"{"keywords": ["csp-template"]}"#,
        )
        .unwrap();

        let reference = local_reference(&tmpl);
        let registry = FakeRegistry { keywords: vec![] };
        assert!(verify_template(&reference, &registry).is_ok());
    }

    #[test]
    fn local_template_without_marker_is_untrusted() {
        let temp = TempDir::new().unwrap();
        let tmpl = temp.path().join("tmpl");
        fs::create_dir(&tmpl).unwrap();
        fs::write(tmpl.join("package.json"), r#"{"keywords": ["other"]}"#).unwrap();

        let reference = local_reference(&tmpl);
        let registry = FakeRegistry { keywords: vec![] };
        let err = verify_template(&reference, &registry).unwrap_err();
        assert!(matches!(err, ScaffoldError::UntrustedTemplate { .. }));
    }

    #[test]
    fn local_template_without_manifest_is_manifest_not_found() {
        let temp = TempDir::new().unwrap();
        let tmpl = temp.path().join("tmpl");
        fs::create_dir(&tmpl).unwrap();

        let reference = local_reference(&tmpl);
        let registry = FakeRegistry { keywords: vec![] };
        let err = verify_template(&reference, &registry).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestNotFound { .. }));
    }

    #[test]
    fn remote_template_uses_registry_keywords() {
        let reference =
            TemplateReference::classify("pkg", Path::new("/w"), Path::new("/w/app"));

        let trusted = FakeRegistry {
            keywords: vec!["csp-template".to_string()],
        };
        assert!(verify_template(&reference, &trusted).is_ok());

        let untrusted = FakeRegistry {
            keywords: vec!["just-a-lib".to_string()],
        };
        let err = verify_template(&reference, &untrusted).unwrap_err();
        assert!(matches!(err, ScaffoldError::UntrustedTemplate { .. }));
    }

    #[test]
    fn empty_keyword_list_is_untrusted() {
        let reference =
            TemplateReference::classify("pkg", Path::new("/w"), Path::new("/w/app"));
        let registry = FakeRegistry { keywords: vec![] };
        let err = verify_template(&reference, &registry).unwrap_err();
        assert!(matches!(err, ScaffoldError::UntrustedTemplate { .. }));
    }
}
