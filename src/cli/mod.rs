//! Command-line interface, argument parsing, and prompts.

pub mod args;
pub mod options;
pub mod prompts;

pub use args::Cli;
pub use options::{resolve_options, Options};
