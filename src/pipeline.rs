//! End-to-end scaffolding orchestration.
//!
//! Control flows strictly forward: classify, verify, prepare the target,
//! fetch (remote only), materialize, then the optional post steps. Any
//! failure aborts the run; nothing touches the target directory before
//! verification passes, and nothing is rolled back after it.

use crate::cli::Options;
use crate::error::{Result, ScaffoldError};
use crate::fetch::PackageInstaller;
use crate::materialize::Materializer;
use crate::registry::RegistryClient;
use crate::shell::{self, CommandOptions};
use crate::template::{verify_template, ScriptPolicy, TemplateReference};
use crate::ui::{Output, ProgressSpinner};

/// The scaffolding pipeline, parameterized over its collaborators.
pub struct Pipeline<'a> {
    registry: &'a dyn RegistryClient,
    installer: &'a dyn PackageInstaller,
    output: &'a Output,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline with the given collaborators.
    pub fn new(
        registry: &'a dyn RegistryClient,
        installer: &'a dyn PackageInstaller,
        output: &'a Output,
    ) -> Self {
        Self {
            registry,
            installer,
            output,
        }
    }

    /// Run the whole pipeline for the resolved options.
    pub fn run(&self, options: &Options) -> Result<()> {
        let current_dir = std::env::current_dir()?;
        let reference =
            TemplateReference::classify(&options.template, &current_dir, &options.target_dir);
        tracing::debug!(
            template = reference.raw(),
            is_local = reference.is_local(),
            resolved = %reference.resolved_path().display(),
            "classified template"
        );

        verify_template(&reference, self.registry)?;

        self.output.println(&format!(
            "  - Using template {}",
            self.output.highlight(reference.raw())
        ));
        self.output.println(&format!(
            "  - Creating a new project in {}",
            self.output.highlight(&options.target_dir.display().to_string())
        ));

        let materializer = Materializer::new(ScriptPolicy::default());
        materializer.prepare_target(&options.target_dir)?;

        if !reference.is_local() {
            self.fetch_template(&reference, options)?;
        }

        materializer.materialize(reference.resolved_path(), &options.target_dir)?;

        if options.git_init {
            self.run_post_step("git init", options)?;
        }

        if options.run_install {
            self.run_post_step("npm install", options)?;
        }

        Ok(())
    }

    fn fetch_template(&self, reference: &TemplateReference, options: &Options) -> Result<()> {
        let spinner = if self.output.mode().shows_spinners() {
            ProgressSpinner::new(&format!("Fetching template {}...", reference.raw()))
        } else {
            ProgressSpinner::hidden()
        };

        match self.installer.install(reference.raw(), &options.target_dir) {
            Ok(()) => {
                spinner.finish_success(&format!("Fetched template {}", reference.raw()));
                Ok(())
            }
            Err(e) => {
                spinner.finish_error(&format!("Failed to fetch template {}", reference.raw()));
                Err(e)
            }
        }
    }

    fn run_post_step(&self, command: &str, options: &Options) -> Result<()> {
        let result = shell::execute(command, &CommandOptions::captured_in(&options.target_dir))?;
        if result.success {
            self.output.success(command);
            Ok(())
        } else {
            self.output.error(&result.combined_output());
            Err(ScaffoldError::CommandFailed {
                command: command.to_string(),
                code: result.exit_code,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    struct FakeRegistry {
        keywords: Vec<String>,
    }

    impl RegistryClient for FakeRegistry {
        fn keywords(&self, _package: &str) -> crate::Result<Vec<String>> {
            Ok(self.keywords.clone())
        }
    }

    /// Installer that "fetches" by copying a fixture directory into the
    /// target's node_modules, the way npm would.
    struct FixtureInstaller {
        fixture: PathBuf,
    }

    impl PackageInstaller for FixtureInstaller {
        fn install(&self, package: &str, target: &Path) -> crate::Result<()> {
            let dest = target.join("node_modules").join(package);
            fs::create_dir_all(&dest).unwrap();
            for entry in fs::read_dir(&self.fixture).unwrap() {
                let entry = entry.unwrap();
                fs::copy(entry.path(), dest.join(entry.file_name())).unwrap();
            }
            Ok(())
        }
    }

    fn options_for(template: &str, target: &Path) -> Options {
        Options {
            template: template.to_string(),
            target_dir: target.to_path_buf(),
            git_init: false,
            skip_prompts: true,
            run_install: false,
        }
    }

    #[test]
    fn untrusted_remote_template_leaves_target_untouched() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("app");

        let registry = FakeRegistry { keywords: vec![] };
        let installer = FixtureInstaller {
            fixture: temp.path().to_path_buf(),
        };
        let output = Output::new(crate::ui::OutputMode::Quiet);
        let pipeline = Pipeline::new(&registry, &installer, &output);

        let err = pipeline.run(&options_for("pkg", &target)).unwrap_err();
        assert!(matches!(err, ScaffoldError::UntrustedTemplate { .. }));
        assert!(!target.exists());
    }

    #[test]
    fn remote_template_is_fetched_and_materialized() {
        let temp = TempDir::new().unwrap();
        let fixture = temp.path().join("fixture");
        fs::create_dir_all(&fixture).unwrap();
        fs::write(
            fixture.join("package.json"),
            r#"{"keywords": ["csp-template"], "scripts": {"start": "x"}}"#,
        )
        .unwrap();
        fs::write(fixture.join("plugin.js"), "code").unwrap();

        let target = temp.path().join("app");
        let registry = FakeRegistry {
            keywords: vec!["csp-template".to_string()],
        };
        let installer = FixtureInstaller { fixture };
        let output = Output::new(crate::ui::OutputMode::Quiet);
        let pipeline = Pipeline::new(&registry, &installer, &output);

        pipeline.run(&options_for("pkg", &target)).unwrap();

        assert!(target.join("plugin.js").exists());
        // The fetched copy in node_modules is stripped afterwards.
        assert!(!target.join("node_modules").exists());
        let manifest = fs::read_to_string(target.join("package.json")).unwrap();
        assert!(manifest.contains("\"start\""));
        assert!(!manifest.contains("keywords"));
    }
}
