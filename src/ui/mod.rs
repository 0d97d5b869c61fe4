//! Terminal output, theme, and spinners.

pub mod output;
pub mod spinner;
pub mod theme;

pub use output::{Output, OutputMode};
pub use spinner::ProgressSpinner;
pub use theme::Theme;
