//! Interactive prompts for missing options.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

use crate::error::{Result, ScaffoldError};

/// Template offered when the user doesn't name one.
pub const DEFAULT_TEMPLATE: &str = "Typescript";

/// Templates offered in the selection prompt.
pub const TEMPLATE_CHOICES: [&str; 2] = ["Javascript", "Typescript"];

/// Convert dialoguer errors to ScaffoldError.
fn map_dialoguer_err(e: dialoguer::Error) -> ScaffoldError {
    ScaffoldError::Io(e.into())
}

/// Ask which project template to use.
pub fn prompt_for_template() -> Result<String> {
    let default_idx = TEMPLATE_CHOICES
        .iter()
        .position(|c| *c == DEFAULT_TEMPLATE)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Please choose which project template to use")
        .items(&TEMPLATE_CHOICES)
        .default(default_idx)
        .interact()
        .map_err(map_dialoguer_err)?;

    Ok(TEMPLATE_CHOICES[selection].to_string())
}

/// Ask whether to initialize a git repository.
pub fn prompt_for_git() -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Initialize a git repository?")
        .default(false)
        .interact()
        .map_err(map_dialoguer_err)
}
