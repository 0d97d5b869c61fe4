//! Package manifest reading and rewriting.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, ScaffoldError};

use super::policy::ScriptPolicy;

/// File name of a package manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// The fields of a template manifest this tool cares about.
///
/// Everything else in the file is ignored on read and dropped on rewrite.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub scripts: Map<String, Value>,

    #[serde(default, rename = "webDependencies")]
    pub web_dependencies: Option<Value>,

    #[serde(default)]
    pub dependencies: Option<Value>,

    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: Option<Value>,
}

/// The normalized manifest written into a materialized project.
///
/// Field order here is the serialization order.
#[derive(Debug, Clone, Serialize)]
pub struct CleanManifest {
    pub scripts: Map<String, Value>,

    #[serde(rename = "webDependencies", skip_serializing_if = "Option::is_none")]
    pub web_dependencies: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Value>,

    #[serde(rename = "devDependencies", skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<Value>,
}

impl PackageManifest {
    /// Read and parse a manifest file.
    ///
    /// A missing file (or missing parent directory) is [`ScaffoldError::ManifestNotFound`];
    /// a file that exists but does not parse is a generic error.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScaffoldError::ManifestNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ScaffoldError::Io(e)
            }
        })?;

        let manifest = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(manifest)
    }

    /// Produce the normalized manifest according to the script policy.
    ///
    /// Dependency fields are carried over verbatim; absent fields stay absent.
    pub fn clean(&self, policy: &ScriptPolicy) -> CleanManifest {
        CleanManifest {
            scripts: policy.apply(&self.scripts),
            web_dependencies: self.web_dependencies.clone(),
            dependencies: self.dependencies.clone(),
            dev_dependencies: self.dev_dependencies.clone(),
        }
    }
}

impl CleanManifest {
    /// Serialize and write the manifest, replacing whatever is at `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .with_context(|| format!("Failed to serialize {}", path.display()))?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn read_missing_manifest_is_manifest_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        let err = PackageManifest::read(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestNotFound { .. }));
    }

    #[test]
    fn read_invalid_json_is_generic_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        fs::write(&path, "{not json").unwrap();
        let err = PackageManifest::read(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::Other(_)));
    }

    #[test]
    fn read_extracts_keywords_and_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        fs::write(
            &path,
            r#"{
                "name": "tmpl",
                "keywords": ["csp-template", "plugin"],
                "scripts": {"start": "x"},
                "dependencies": {"a": "1.0.0"}
            }"#,
        )
        .unwrap();

        let manifest = PackageManifest::read(&path).unwrap();
        assert_eq!(manifest.keywords, vec!["csp-template", "plugin"]);
        assert_eq!(manifest.scripts.get("start"), Some(&json!("x")));
        assert_eq!(manifest.dependencies, Some(json!({"a": "1.0.0"})));
        assert!(manifest.web_dependencies.is_none());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        fs::write(&path, r#"{"name": "bare"}"#).unwrap();

        let manifest = PackageManifest::read(&path).unwrap();
        assert!(manifest.keywords.is_empty());
        assert!(manifest.scripts.is_empty());
    }

    #[test]
    fn clean_drops_name_and_keywords() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        fs::write(
            &path,
            r#"{"name": "tmpl", "keywords": ["csp-template"], "scripts": {"start": "x"}}"#,
        )
        .unwrap();

        let clean = PackageManifest::read(&path)
            .unwrap()
            .clean(&ScriptPolicy::default());
        let value = serde_json::to_value(&clean).unwrap();
        assert!(value.get("name").is_none());
        assert!(value.get("keywords").is_none());
        assert_eq!(value["scripts"]["start"], json!("x"));
    }

    #[test]
    fn absent_dependency_fields_are_omitted_from_output() {
        let manifest = PackageManifest {
            scripts: Map::new(),
            ..Default::default()
        };
        let clean = manifest.clean(&ScriptPolicy::default());
        let json = serde_json::to_string(&clean).unwrap();
        assert!(!json.contains("webDependencies"));
        assert!(!json.contains("devDependencies"));
        assert!(!json.contains("\"dependencies\""));
    }

    #[test]
    fn write_round_trips_through_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");

        let mut scripts = Map::new();
        scripts.insert("start".to_string(), json!("dev"));
        let clean = CleanManifest {
            scripts,
            web_dependencies: None,
            dependencies: Some(json!({"a": "1.0.0"})),
            dev_dependencies: None,
        };
        clean.write(&path).unwrap();

        let reread = PackageManifest::read(&path).unwrap();
        assert_eq!(reread.scripts.get("start"), Some(&json!("dev")));
        assert_eq!(reread.dependencies, Some(json!({"a": "1.0.0"})));
    }
}
