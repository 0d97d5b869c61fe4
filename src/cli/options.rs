//! Resolved options record.

use std::path::PathBuf;

use crate::error::Result;

use super::args::Cli;
use super::prompts;

/// Normalized options consumed read-only by the pipeline.
#[derive(Debug, Clone)]
pub struct Options {
    /// Template reference: local path or registry package name.
    pub template: String,

    /// Directory the project is materialized into.
    pub target_dir: PathBuf,

    /// Run `git init` in the target after materialization.
    pub git_init: bool,

    /// Answer prompts with defaults instead of asking.
    pub skip_prompts: bool,

    /// Run `npm install` in the target after materialization.
    pub run_install: bool,
}

/// Turn parsed arguments into a complete options record.
///
/// Missing values are filled by prompting, or by defaults when `--yes` was
/// given or stdin is not a terminal.
pub fn resolve_options(cli: &Cli) -> Result<Options> {
    let interactive = !cli.yes && console::user_attended();

    let template = match &cli.template {
        Some(t) => t.clone(),
        None if interactive => prompts::prompt_for_template()?,
        None => prompts::DEFAULT_TEMPLATE.to_string(),
    };

    let git_init = if cli.git {
        true
    } else if interactive {
        prompts::prompt_for_git()?
    } else {
        false
    };

    let target_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    Ok(Options {
        template,
        target_dir,
        git_init,
        skip_prompts: cli.yes,
        run_install: cli.install,
    })
}
