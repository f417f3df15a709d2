//! Output enablement: whether to style text and whether to animate.
//!
//! An [`OutputContext`] holds the switches every live region consults when it
//! starts:
//!
//! - **styling**: emit ANSI styling at all
//! - **raw output**: print plain sequential lines, no cursor movement
//! - **interactive**: whether the output is a terminal, answered by a
//!   replaceable detector function
//!
//! [`OutputContext::render_mode`] folds these into a [`RenderMode`]. Only a
//! styled, non-raw, interactive context animates; everything else degrades to
//! [`RenderMode::Static`].
//!
//! Contexts are shared through `Arc`. Printers that are not given one use the
//! lazily-detected [`OutputContext::global`]. Switches can change at any time
//! and take effect the next time a region starts. To change them for a limited
//! scope, take a [`ContextGuard`]:
//!
//! ```rust
//! use liveterm_render::{OutputContext, RenderMode};
//! use std::sync::Arc;
//!
//! let ctx = Arc::new(OutputContext::new().with_terminal_detector(|| true));
//! assert_eq!(ctx.render_mode(), RenderMode::Animated);
//!
//! {
//!     let _guard = ctx.scoped();
//!     ctx.disable_styling();
//!     assert_eq!(ctx.render_mode(), RenderMode::Static);
//! }
//!
//! // Restored when the guard drops
//! assert!(ctx.is_styling_enabled());
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use console::Style;
use once_cell::sync::Lazy;

/// Decides whether output goes to an interactive terminal.
pub type TerminalDetector = fn() -> bool;

static GLOBAL: Lazy<Arc<OutputContext>> = Lazy::new(|| Arc::new(OutputContext::detect()));

/// How a live region renders, resolved from an [`OutputContext`] at start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Redraw in place from a background thread.
    Animated,
    /// Print plain lines once; no cursor movement, no background thread.
    Static,
}

/// Process- or test-scoped output switches.
pub struct OutputContext {
    styling: AtomicBool,
    raw_output: AtomicBool,
    detector: Mutex<TerminalDetector>,
}

impl OutputContext {
    /// Creates a context with styling on, raw output off, and terminal
    /// detection on stdout.
    pub fn new() -> Self {
        Self {
            styling: AtomicBool::new(true),
            raw_output: AtomicBool::new(false),
            detector: Mutex::new(stdout_is_terminal),
        }
    }

    /// Creates a context from the environment.
    ///
    /// Styling follows `console`'s color detection, which honours `NO_COLOR`,
    /// `CLICOLOR` and `CLICOLOR_FORCE`.
    pub fn detect() -> Self {
        let ctx = Self::new().with_styling(console::colors_enabled());
        tracing::debug!(
            styling = ctx.is_styling_enabled(),
            interactive = ctx.is_interactive(),
            "detected output context"
        );
        ctx
    }

    /// The shared process-wide context, detected on first use.
    pub fn global() -> Arc<OutputContext> {
        Arc::clone(&GLOBAL)
    }

    /// Sets the styling switch, returning `self` for chaining.
    pub fn with_styling(self, enabled: bool) -> Self {
        self.styling.store(enabled, Ordering::SeqCst);
        self
    }

    /// Sets the raw output switch, returning `self` for chaining.
    pub fn with_raw_output(self, raw: bool) -> Self {
        self.raw_output.store(raw, Ordering::SeqCst);
        self
    }

    /// Replaces the terminal detector, returning `self` for chaining.
    pub fn with_terminal_detector(self, detector: TerminalDetector) -> Self {
        self.set_terminal_detector(detector);
        self
    }

    pub fn enable_styling(&self) {
        self.styling.store(true, Ordering::SeqCst);
    }

    pub fn disable_styling(&self) {
        self.styling.store(false, Ordering::SeqCst);
    }

    pub fn set_raw_output(&self, raw: bool) {
        self.raw_output.store(raw, Ordering::SeqCst);
    }

    /// Overrides the detector used to decide whether output is interactive.
    ///
    /// ```rust
    /// use liveterm_render::OutputContext;
    ///
    /// let ctx = OutputContext::new();
    /// ctx.set_terminal_detector(|| false);
    /// assert!(!ctx.is_interactive());
    /// ```
    pub fn set_terminal_detector(&self, detector: TerminalDetector) {
        let mut guard = self.detector.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = detector;
    }

    pub fn is_styling_enabled(&self) -> bool {
        self.styling.load(Ordering::SeqCst)
    }

    pub fn is_raw_output(&self) -> bool {
        self.raw_output.load(Ordering::SeqCst)
    }

    pub fn is_interactive(&self) -> bool {
        let detector = *self.detector.lock().unwrap_or_else(PoisonError::into_inner);
        detector()
    }

    /// Resolves the switches into the mode a region should start in.
    pub fn render_mode(&self) -> RenderMode {
        if self.is_styling_enabled() && !self.is_raw_output() && self.is_interactive() {
            RenderMode::Animated
        } else {
            RenderMode::Static
        }
    }

    /// Applies `style` to `text` if styling is enabled, otherwise returns the
    /// text untouched.
    ///
    /// This ignores `console`'s own global color switch so that the context
    /// alone decides.
    pub fn paint(&self, style: &Style, text: &str) -> String {
        if self.is_styling_enabled() && !self.is_raw_output() {
            style.clone().force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Captures the current switches and restores them when the guard drops.
    pub fn scoped(self: &Arc<Self>) -> ContextGuard {
        let detector = *self.detector.lock().unwrap_or_else(PoisonError::into_inner);
        ContextGuard {
            ctx: Arc::clone(self),
            styling: self.is_styling_enabled(),
            raw_output: self.is_raw_output(),
            detector,
        }
    }
}

impl Default for OutputContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OutputContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputContext")
            .field("styling", &self.is_styling_enabled())
            .field("raw_output", &self.is_raw_output())
            .finish_non_exhaustive()
    }
}

/// Restores an [`OutputContext`]'s switches on drop.
#[must_use = "the previous switches are restored as soon as the guard is dropped"]
pub struct ContextGuard {
    ctx: Arc<OutputContext>,
    styling: bool,
    raw_output: bool,
    detector: TerminalDetector,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        self.ctx.styling.store(self.styling, Ordering::SeqCst);
        self.ctx.raw_output.store(self.raw_output, Ordering::SeqCst);
        self.ctx.set_terminal_detector(self.detector);
    }
}

fn stdout_is_terminal() -> bool {
    console::Term::stdout().is_term()
}
