//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::registry::DEFAULT_REGISTRY_URL;

/// csp-create - Scaffold a new CSP plugin project from a template package.
#[derive(Debug, Parser)]
#[command(name = "csp-create")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Template to scaffold from: a registry package name, or a local path
    /// starting with `.`
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Directory to create the project in (defaults to the current directory)
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Initialize a git repository in the new project
    #[arg(short, long)]
    pub git: bool,

    /// Skip prompts, accepting defaults
    #[arg(short, long)]
    pub yes: bool,

    /// Run npm install after scaffolding
    #[arg(short, long)]
    pub install: bool,

    /// Registry endpoint used for template keyword lookups
    #[arg(long, env = "CSP_REGISTRY", default_value = DEFAULT_REGISTRY_URL, value_name = "URL")]
    pub registry: String,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
