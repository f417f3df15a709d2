//! Error types for rendering operations.
//!
//! This module provides [`RenderError`], the error type returned by the render
//! surface and by theme lookups.

use thiserror::Error;

/// Error type for rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to, flushing, or moving the cursor on the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A style name was looked up that the theme does not define.
    #[error("unknown style: {0}")]
    UnknownStyle(String),
}
