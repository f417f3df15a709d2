//! Spinner configuration.
//!
//! [`Spinner`] is an immutable configuration value. Every `with_*` method
//! consumes it and returns the modified value, so a configured spinner can be
//! cloned and varied freely:
//!
//! ```rust
//! use liveterm::Spinner;
//! use std::time::Duration;
//!
//! let base = Spinner::new().with_delay(Duration::from_millis(80));
//! let quiet = base.clone().with_remove_when_done(true);
//!
//! assert!(!base.remove_when_done());
//! assert!(quiet.remove_when_done());
//! assert_eq!(quiet.delay(), Duration::from_millis(80));
//! ```
//!
//! Configuration has no side effects. Nothing is drawn until the spinner is
//! turned into a [`LiveRegion`] and started, either in one step with
//! [`Spinner::start`] or with [`Spinner::build`] followed by
//! [`LiveRegion::start`].

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use console::Style;
use liveterm_render::{names, OutputContext, OutputDestination, Theme};

use crate::error::LiveError;
use crate::printer::{LinePrinter, Outcome, PrefixPrinter};
use crate::region::LiveRegion;
use crate::sequence::FrameSequence;

/// Text shown by a spinner that was not given any.
pub const DEFAULT_TEXT: &str = "Loading";

/// Configuration for a [`LiveRegion`].
#[derive(Clone)]
pub struct Spinner {
    pub(crate) text: String,
    pub(crate) sequence: FrameSequence,
    pub(crate) style: Style,
    pub(crate) message_style: Style,
    pub(crate) timer_style: Style,
    pub(crate) remove_when_done: bool,
    pub(crate) show_timer: bool,
    pub(crate) timer_rounding_factor: Duration,
    pub(crate) success_printer: Arc<dyn LinePrinter>,
    pub(crate) warning_printer: Arc<dyn LinePrinter>,
    pub(crate) fail_printer: Arc<dyn LinePrinter>,
    pub(crate) context: Option<Arc<OutputContext>>,
    pub(crate) output: OutputDestination,
}

impl Spinner {
    /// The default spinner, styled with [`Theme::semantic`].
    pub fn new() -> Self {
        Self::themed(&Theme::semantic())
    }

    /// A default spinner whose styles come from `theme`.
    ///
    /// Missing style names fall back to unstyled text.
    pub fn themed(theme: &Theme) -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            sequence: FrameSequence::default(),
            style: theme.style_or_plain(names::SPINNER),
            message_style: theme.style_or_plain(names::MESSAGE),
            timer_style: theme.style_or_plain(names::TIMER),
            remove_when_done: false,
            show_timer: false,
            timer_rounding_factor: Duration::from_secs(1),
            success_printer: Arc::new(PrefixPrinter::from_theme(Outcome::Success, theme)),
            warning_printer: Arc::new(PrefixPrinter::from_theme(Outcome::Warning, theme)),
            fail_printer: Arc::new(PrefixPrinter::from_theme(Outcome::Error, theme)),
            context: None,
            output: OutputDestination::Stdout,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Replaces the animation frames. An empty list keeps the current frames.
    pub fn with_sequence<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let frames = frames.into_iter().map(Into::into).collect();
        self.sequence = self.sequence.with_frames(frames);
        self
    }

    /// Replaces frames and delay at once.
    pub fn with_frame_sequence(mut self, sequence: FrameSequence) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.sequence = self.sequence.with_delay(delay);
        self
    }

    /// Style of the animated frame.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_message_style(mut self, style: Style) -> Self {
        self.message_style = style;
        self
    }

    /// Erase the region on stop instead of leaving the last frame on screen.
    pub fn with_remove_when_done(mut self, remove: bool) -> Self {
        self.remove_when_done = remove;
        self
    }

    /// Show the time elapsed since start after the message.
    pub fn with_show_timer(mut self, show: bool) -> Self {
        self.show_timer = show;
        self
    }

    pub fn with_timer_style(mut self, style: Style) -> Self {
        self.timer_style = style;
        self
    }

    /// Granularity of the elapsed-time display. Zero shows the raw duration.
    pub fn with_timer_rounding_factor(mut self, factor: Duration) -> Self {
        self.timer_rounding_factor = factor;
        self
    }

    pub fn with_success_printer(mut self, printer: impl LinePrinter + 'static) -> Self {
        self.success_printer = Arc::new(printer);
        self
    }

    pub fn with_warning_printer(mut self, printer: impl LinePrinter + 'static) -> Self {
        self.warning_printer = Arc::new(printer);
        self
    }

    pub fn with_fail_printer(mut self, printer: impl LinePrinter + 'static) -> Self {
        self.fail_printer = Arc::new(printer);
        self
    }

    /// Uses `ctx` instead of [`OutputContext::global`] to decide how to render.
    pub fn with_context(mut self, ctx: Arc<OutputContext>) -> Self {
        self.context = Some(ctx);
        self
    }

    pub fn with_output(mut self, output: OutputDestination) -> Self {
        self.output = output;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sequence(&self) -> &[String] {
        self.sequence.frames()
    }

    pub fn frame_sequence(&self) -> &FrameSequence {
        &self.sequence
    }

    pub fn delay(&self) -> Duration {
        self.sequence.delay()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn message_style(&self) -> &Style {
        &self.message_style
    }

    pub fn timer_style(&self) -> &Style {
        &self.timer_style
    }

    pub fn remove_when_done(&self) -> bool {
        self.remove_when_done
    }

    pub fn show_timer(&self) -> bool {
        self.show_timer
    }

    pub fn timer_rounding_factor(&self) -> Duration {
        self.timer_rounding_factor
    }

    pub fn output(&self) -> &OutputDestination {
        &self.output
    }

    /// The context this spinner renders with.
    pub fn context(&self) -> Arc<OutputContext> {
        self.context.clone().unwrap_or_else(OutputContext::global)
    }

    /// Turns the configuration into an idle region.
    pub fn build(self) -> LiveRegion {
        LiveRegion::new(self)
    }

    /// Builds a region and starts it.
    ///
    /// `text` replaces the configured text when given.
    pub fn start(self, text: Option<&str>) -> Result<LiveRegion, LiveError> {
        let region = self.build();
        region.start(text)?;
        Ok(region)
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Spinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spinner")
            .field("text", &self.text)
            .field("sequence", &self.sequence)
            .field("style", &self.style)
            .field("message_style", &self.message_style)
            .field("timer_style", &self.timer_style)
            .field("remove_when_done", &self.remove_when_done)
            .field("show_timer", &self.show_timer)
            .field("timer_rounding_factor", &self.timer_rounding_factor)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}
