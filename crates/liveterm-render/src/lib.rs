//! # Liveterm Render - Erasable, Styled Terminal Output
//!
//! `liveterm-render` provides the low-level pieces live terminal printers are
//! built from:
//!
//! - [`OutputContext`]: styling / raw-output / interactive switches, resolved
//!   into a [`RenderMode`] when a printer starts
//! - [`RenderSurface`]: write a block, then erase exactly that block
//! - [`Theme`]: named `console::Style` collections, with a default semantic palette
//! - [`CaptureBuffer`]: an in-memory sink for inspecting output in tests
//!
//! This crate is the rendering foundation for `liveterm`, but the pieces are
//! usable on their own.
//!
//! ## Quick Start
//!
//! ```rust
//! use liveterm_render::{names, CaptureBuffer, OutputContext, RenderSurface, Theme};
//!
//! let ctx = OutputContext::new().with_styling(false);
//! let theme = Theme::semantic();
//! let buffer = CaptureBuffer::new();
//! let mut surface = RenderSurface::new(buffer.clone());
//!
//! let spinner = theme.style_or_plain(names::SPINNER);
//! surface.draw(&ctx.paint(&spinner, "|")).unwrap();
//! surface.draw(&ctx.paint(&spinner, "/")).unwrap();
//! surface.erase().unwrap();
//! surface.write_plain("done").unwrap();
//!
//! assert!(buffer.plain_contents().ends_with("done\n"));
//! ```

mod capture;
mod error;
pub mod output;
pub mod surface;
pub mod theme;
mod util;

pub use capture::CaptureBuffer;
pub use error::RenderError;
pub use output::{ContextGuard, OutputContext, RenderMode, TerminalDetector};
pub use surface::{OutputDestination, RenderSurface};
pub use theme::{names, Theme};
pub use util::display_rows;
