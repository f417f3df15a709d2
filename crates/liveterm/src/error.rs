//! Error types for live printers.

use thiserror::Error;

/// Error returned by live-region operations.
#[derive(Debug, Error)]
pub enum LiveError {
    /// `start` was called on a region that is already running.
    #[error("live region is already active")]
    AlreadyActive,

    /// A frame sequence was built without any frames.
    #[error("frame sequence must contain at least one frame")]
    EmptySequence,

    /// The background redraw thread could not be spawned.
    #[error("failed to spawn redraw thread: {0}")]
    Spawn(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LiveError::AlreadyActive.to_string(),
            "live region is already active"
        );
        assert!(LiveError::EmptySequence.to_string().contains("at least one"));
    }

    #[test]
    fn test_from_io_error() {
        let err: LiveError = std::io::Error::other("no threads left").into();
        assert!(matches!(err, LiveError::Spawn(_)));
        assert!(err.to_string().contains("no threads left"));
    }
}
