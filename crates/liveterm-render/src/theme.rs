//! Named collections of styles.
//!
//! A [`Theme`] maps style names to [`console::Style`] values. Live regions
//! and line printers look their styles up by the names in [`names`], so
//! swapping the theme changes how a spinner, its timer or a success line look
//! without touching any printer code.
//!
//! ```rust
//! use liveterm_render::{names, Theme};
//! use console::Style;
//!
//! let theme = Theme::semantic()
//!     .add(names::SPINNER, Style::new().magenta())
//!     .add(names::SUCCESS_TEXT, Style::new().dim());
//!
//! assert_eq!(theme.style_or_plain(names::SUCCESS_TEXT), Style::new().dim());
//! ```

use std::collections::HashMap;

use console::Style;

use crate::error::RenderError;

/// Style names used by the built-in printers.
pub mod names {
    /// The animated frame of a live region.
    pub const SPINNER: &str = "spinner";
    /// The message next to the frame.
    pub const MESSAGE: &str = "message";
    /// The elapsed-time suffix.
    pub const TIMER: &str = "timer";
    /// Label of a success line.
    pub const SUCCESS_LABEL: &str = "success.label";
    /// Message of a success line.
    pub const SUCCESS_TEXT: &str = "success.text";
    /// Label of a warning line.
    pub const WARNING_LABEL: &str = "warning.label";
    /// Message of a warning line.
    pub const WARNING_TEXT: &str = "warning.text";
    /// Label of an error line.
    pub const ERROR_LABEL: &str = "error.label";
    /// Message of an error line.
    pub const ERROR_TEXT: &str = "error.text";
}

/// A named collection of styles.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    name: Option<String>,
    styles: HashMap<String, Style>,
}

impl Theme {
    /// Creates an empty, unnamed theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// The default palette for live regions and semantic lines.
    ///
    /// | name            | look                 |
    /// |-----------------|----------------------|
    /// | `spinner`       | bright cyan          |
    /// | `message`       | bright white         |
    /// | `timer`         | gray                 |
    /// | `success.label` | black on green       |
    /// | `warning.label` | black on yellow      |
    /// | `error.label`   | bright white on red  |
    ///
    /// The `*.text` styles use the matching foreground color.
    pub fn semantic() -> Self {
        Self::named("semantic")
            .add(names::SPINNER, Style::new().cyan().bright())
            .add(names::MESSAGE, Style::new().white().bright())
            .add(names::TIMER, Style::new().black().bright())
            .add(names::SUCCESS_LABEL, Style::new().black().on_green())
            .add(names::SUCCESS_TEXT, Style::new().green())
            .add(names::WARNING_LABEL, Style::new().black().on_yellow())
            .add(names::WARNING_TEXT, Style::new().yellow())
            .add(names::ERROR_LABEL, Style::new().white().bright().on_red())
            .add(names::ERROR_TEXT, Style::new().red())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Adds or replaces a named style, returning the theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Looks a style up by name.
    pub fn style(&self, name: &str) -> Result<Style, RenderError> {
        self.styles
            .get(name)
            .cloned()
            .ok_or_else(|| RenderError::UnknownStyle(name.to_string()))
    }

    /// Looks a style up by name, falling back to an unstyled `Style`.
    pub fn style_or_plain(&self, name: &str) -> Style {
        self.styles.get(name).cloned().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_new_is_empty() {
        let theme = Theme::new();
        assert!(theme.is_empty());
        assert_eq!(theme.len(), 0);
        assert_eq!(theme.name(), None);
    }

    #[test]
    fn test_semantic_defines_all_names() {
        let theme = Theme::semantic();
        for name in [
            names::SPINNER,
            names::MESSAGE,
            names::TIMER,
            names::SUCCESS_LABEL,
            names::SUCCESS_TEXT,
            names::WARNING_LABEL,
            names::WARNING_TEXT,
            names::ERROR_LABEL,
            names::ERROR_TEXT,
        ] {
            assert!(theme.style(name).is_ok(), "missing {}", name);
        }
        assert_eq!(theme.len(), 9);
        assert_eq!(theme.name(), Some("semantic"));
    }

    #[test]
    fn test_add_replaces_existing() {
        let theme = Theme::new()
            .add("x", Style::new().dim())
            .add("x", Style::new().bold());
        assert_eq!(theme.len(), 1);
        assert_eq!(theme.style_or_plain("x"), Style::new().bold());
    }

    #[test]
    fn test_unknown_style() {
        let theme = Theme::new();
        assert!(matches!(
            theme.style("nope"),
            Err(RenderError::UnknownStyle(name)) if name == "nope"
        ));
        assert_eq!(theme.style_or_plain("nope"), Style::new());
    }
}
