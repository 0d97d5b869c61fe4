//! csp-create - Scaffold a new CSP plugin project from a template package.
//!
//! The tool runs a single forward pipeline: resolve options, classify the
//! template reference as local or registry-hosted, verify the template's
//! provenance marker, fetch it when remote, then materialize it into the
//! target directory with a normalized manifest and ignore file.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, argument parsing, and prompts
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Package installer abstraction for remote templates
//! - [`materialize`] - Copying a template into the target and cleaning it
//! - [`pipeline`] - End-to-end scaffolding orchestration
//! - [`registry`] - Package registry keyword lookups
//! - [`shell`] - Shell command execution
//! - [`template`] - Template references, manifests, and script policy
//! - [`ui`] - Terminal output, theme, and spinners
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use csp_create::template::TemplateReference;
//!
//! let reference =
//!     TemplateReference::classify("./my-template", Path::new("/work"), Path::new("/work/app"));
//! assert!(reference.is_local());
//! ```

pub mod cli;
pub mod error;
pub mod fetch;
pub mod materialize;
pub mod pipeline;
pub mod registry;
pub mod shell;
pub mod template;
pub mod ui;

pub use error::{Result, ScaffoldError};
