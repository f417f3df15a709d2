//! # Liveterm - Live-Updating Terminal Regions
//!
//! Liveterm draws a line of terminal output that keeps changing while your
//! program runs, such as a spinner with a status message, and finishes it
//! with a final static line. It provides:
//!
//! - [`Spinner`]: value-style configuration (frames, delay, styles, timer,
//!   final-line printers)
//! - [`LiveRegion`]: the running controller, with a background redraw thread,
//!   thread-safe text updates and a stop that joins the thread
//! - [`LinePrinter`] / [`PrefixPrinter`]: how success, warning and failure
//!   lines look
//! - Graceful degradation: when output is not a styled interactive terminal,
//!   regions print plain lines instead of animating
//!
//! Rendering primitives (output context, erasable surface, themes) live in
//! [`liveterm_render`] and are re-exported here.
//!
//! ## Quick Start
//!
//! ```rust
//! use liveterm::Spinner;
//! use liveterm_render::{CaptureBuffer, OutputContext, OutputDestination};
//! use std::sync::Arc;
//!
//! let buffer = CaptureBuffer::new();
//! let region = Spinner::new()
//!     // Pretend stdout is a terminal so the region animates
//!     .with_context(Arc::new(OutputContext::new().with_terminal_detector(|| true)))
//!     .with_output(OutputDestination::Capture(buffer.clone()))
//!     .start(Some("Fetching index"))
//!     .unwrap();
//!
//! region.update_text("Unpacking");
//! region.success(Some("Installed")).unwrap();
//!
//! assert!(buffer.plain_contents().ends_with("SUCCESS  Installed\n"));
//! ```
//!
//! ## Output Modes
//!
//! A region decides how to render when it starts, by asking its
//! [`OutputContext`]:
//!
//! - styled, not raw, and a terminal: animate in place
//! - anything else: print the text as a plain line on start and on every
//!   update, no cursor movement
//!
//! Regions use [`OutputContext::global`] unless given their own context with
//! [`Spinner::with_context`], which keeps tests independent of the process
//! environment.

// Internal modules
mod error;
mod timer;

// Public submodules
pub mod printer;
pub mod region;
pub mod sequence;
pub mod spinner;

// Error type
pub use error::LiveError;

// Controller and configuration
pub use region::LiveRegion;
pub use sequence::{FrameSequence, DEFAULT_DELAY, DEFAULT_FRAMES};
pub use spinner::{Spinner, DEFAULT_TEXT};

// Printer capabilities
pub use printer::{LinePrinter, LivePrinter, Outcome, PrefixPrinter};

// Timer formatting
pub use timer::{format_elapsed, round_duration};

// Re-export the rendering layer
pub use liveterm_render;
pub use liveterm_render::{
    names, CaptureBuffer, OutputContext, OutputDestination, RenderError, RenderMode, Theme,
};
