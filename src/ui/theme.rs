//! Visual theme and styling.

use console::Style;

/// Terminal styles used across the tool's output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for highlighted names such as templates and paths (cyan).
    pub highlight: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            highlight: Style::new().cyan(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            highlight: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a success line with a leading check mark.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", self.success.apply_to("✓"), msg)
    }

    /// Format an error line with a leading cross.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), msg)
    }
}

/// Check whether colored output should be used.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}
