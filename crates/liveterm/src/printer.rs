//! Printer capabilities.
//!
//! - [`LinePrinter`] renders one final line, such as the success line a
//!   spinner leaves behind. [`PrefixPrinter`] is the built-in implementation,
//!   and any `Fn(&str, &OutputContext) -> String` closure works too.
//! - [`LivePrinter`] is the uniform start/stop surface shared by printers
//!   that occupy the terminal for a while.

use console::Style;
use liveterm_render::{names, OutputContext, Theme};

use crate::error::LiveError;

/// Renders a single final line for a message.
pub trait LinePrinter: Send + Sync {
    /// Returns the line to print, without a trailing newline.
    fn render(&self, message: &str, ctx: &OutputContext) -> String;
}

impl<F> LinePrinter for F
where
    F: Fn(&str, &OutputContext) -> String + Send + Sync,
{
    fn render(&self, message: &str, ctx: &OutputContext) -> String {
        self(message, ctx)
    }
}

/// A printer that can be started and stopped without knowing its concrete type.
///
/// ```rust
/// use liveterm::{LivePrinter, Spinner};
/// use liveterm_render::{CaptureBuffer, OutputContext, OutputDestination};
/// use std::sync::Arc;
///
/// let buffer = CaptureBuffer::new();
/// let region = Spinner::new()
///     .with_context(Arc::new(OutputContext::new().with_raw_output(true)))
///     .with_output(OutputDestination::Capture(buffer.clone()))
///     .build();
///
/// let printer: &dyn LivePrinter = &region;
/// printer.generic_start().unwrap();
/// printer.generic_stop().unwrap();
/// assert_eq!(buffer.contents(), "Loading\n");
/// ```
pub trait LivePrinter {
    /// Starts the printer with whatever it is currently configured to show.
    fn generic_start(&self) -> Result<(), LiveError>;
    /// Stops the printer. Stopping a printer that is not running is a no-op.
    fn generic_stop(&self) -> Result<(), LiveError>;
}

/// The three kinds of final line a live region can finish with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Warning,
    Error,
}

impl Outcome {
    /// Label text, padded so the three labels line up.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => " SUCCESS ",
            Outcome::Warning => " WARNING ",
            Outcome::Error => "  ERROR  ",
        }
    }

    fn style_names(self) -> (&'static str, &'static str) {
        match self {
            Outcome::Success => (names::SUCCESS_LABEL, names::SUCCESS_TEXT),
            Outcome::Warning => (names::WARNING_LABEL, names::WARNING_TEXT),
            Outcome::Error => (names::ERROR_LABEL, names::ERROR_TEXT),
        }
    }
}

/// Prints `<label> <message>`, with the label and message styled separately.
///
/// When styling is off the label is reduced to `LABEL:` so the line still
/// reads well in logs. Continuation lines of a multi-line message are
/// indented under the message.
#[derive(Debug, Clone)]
pub struct PrefixPrinter {
    label: String,
    label_style: Style,
    message_style: Style,
}

impl PrefixPrinter {
    pub fn new(label: impl Into<String>, label_style: Style, message_style: Style) -> Self {
        Self {
            label: label.into(),
            label_style,
            message_style,
        }
    }

    /// Builds the printer for `outcome` with styles taken from `theme`.
    pub fn from_theme(outcome: Outcome, theme: &Theme) -> Self {
        let (label, text) = outcome.style_names();
        Self::new(
            outcome.label(),
            theme.style_or_plain(label),
            theme.style_or_plain(text),
        )
    }

    pub fn success() -> Self {
        Self::from_theme(Outcome::Success, &Theme::semantic())
    }

    pub fn warning() -> Self {
        Self::from_theme(Outcome::Warning, &Theme::semantic())
    }

    pub fn error() -> Self {
        Self::from_theme(Outcome::Error, &Theme::semantic())
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl LinePrinter for PrefixPrinter {
    fn render(&self, message: &str, ctx: &OutputContext) -> String {
        let styled = ctx.is_styling_enabled() && !ctx.is_raw_output();
        let label = if styled {
            ctx.paint(&self.label_style, &self.label)
        } else {
            format!("{}:", self.label.trim())
        };
        let indent = " ".repeat(console::measure_text_width(&label) + 1);

        let mut lines = message.split('\n');
        let first = lines.next().unwrap_or_default();
        let mut out = format!("{} {}", label, ctx.paint(&self.message_style, first));
        for line in lines {
            out.push('\n');
            out.push_str(&indent);
            out.push_str(&ctx.paint(&self.message_style, line));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> OutputContext {
        OutputContext::new().with_styling(false)
    }

    #[test]
    fn test_plain_prefix() {
        let ctx = plain();
        assert_eq!(PrefixPrinter::success().render("done", &ctx), "SUCCESS: done");
        assert_eq!(PrefixPrinter::warning().render("hmm", &ctx), "WARNING: hmm");
        assert_eq!(PrefixPrinter::error().render("boom", &ctx), "ERROR: boom");
    }

    #[test]
    fn test_styled_prefix_keeps_padded_label() {
        let ctx = OutputContext::new();
        let line = PrefixPrinter::success().render("done", &ctx);
        assert!(line.contains("\x1b["));
        assert_eq!(console::strip_ansi_codes(&line), " SUCCESS  done");
    }

    #[test]
    fn test_multiline_message_is_indented() {
        let ctx = plain();
        let line = PrefixPrinter::error().render("first\nsecond", &ctx);
        assert_eq!(line, "ERROR: first\n       second");
    }

    #[test]
    fn test_from_theme_uses_theme_styles() {
        let theme = Theme::new()
            .add(names::SUCCESS_LABEL, Style::new().magenta())
            .add(names::SUCCESS_TEXT, Style::new().magenta());
        let printer = PrefixPrinter::from_theme(Outcome::Success, &theme);
        let ctx = OutputContext::new();
        let expected = format!(
            "{} {}",
            Style::new().magenta().force_styling(true).apply_to(" SUCCESS "),
            Style::new().magenta().force_styling(true).apply_to("ok"),
        );
        assert_eq!(printer.render("ok", &ctx), expected);
    }

    #[test]
    fn test_closure_printer() {
        let printer = |message: &str, _ctx: &OutputContext| format!("[ok] {}", message);
        assert_eq!(printer.render("fine", &plain()), "[ok] fine");
    }

    #[test]
    fn test_labels_line_up() {
        let widths: Vec<usize> = [Outcome::Success, Outcome::Warning, Outcome::Error]
            .iter()
            .map(|o| o.label().len())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
