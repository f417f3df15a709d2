//! Frame sequences for animated regions.

use std::time::Duration;

use crate::error::LiveError;

/// Delay between frames of the default spinner.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

/// Frames of the default spinner.
pub const DEFAULT_FRAMES: [&str; 4] = ["▀ ", " ▀", " ▄", "▄ "];

/// An ordered, cyclic list of frames and the delay between them.
///
/// ```rust
/// use liveterm::FrameSequence;
/// use std::time::Duration;
///
/// let seq = FrameSequence::new(["a", "b"], Duration::from_millis(50)).unwrap();
/// assert_eq!(seq.next(0), ("a", 1));
/// assert_eq!(seq.next(1), ("b", 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<String>,
    delay: Duration,
}

impl FrameSequence {
    /// Creates a sequence. At least one frame is required.
    pub fn new<I, S>(frames: I, delay: Duration) -> Result<Self, LiveError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let frames: Vec<String> = frames.into_iter().map(Into::into).collect();
        if frames.is_empty() {
            return Err(LiveError::EmptySequence);
        }
        Ok(Self { frames, delay })
    }

    /// Returns the frame at `index` (modulo length) and the index that follows it.
    pub fn next(&self, index: usize) -> (&str, usize) {
        let current = index % self.frames.len();
        (&self.frames[current], (current + 1) % self.frames.len())
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; a sequence cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn with_frames(mut self, frames: Vec<String>) -> Self {
        if !frames.is_empty() {
            self.frames = frames;
        }
        self
    }
}

impl Default for FrameSequence {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES.iter().map(|f| f.to_string()).collect(),
            delay: DEFAULT_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_sequence() {
        let seq = FrameSequence::default();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.delay(), Duration::from_millis(200));
        assert_eq!(seq.next(0).0, "▀ ");
    }

    #[test]
    fn test_empty_rejected() {
        let frames: Vec<String> = Vec::new();
        assert!(matches!(
            FrameSequence::new(frames, DEFAULT_DELAY),
            Err(LiveError::EmptySequence)
        ));
    }

    #[test]
    fn test_wraps_after_last_frame() {
        let seq = FrameSequence::new(["a", "b", "c"], DEFAULT_DELAY).unwrap();
        let mut index = 0;
        let mut seen = Vec::new();
        for _ in 0..7 {
            let (frame, next) = seq.next(index);
            seen.push(frame.to_string());
            index = next;
        }
        assert_eq!(seen, ["a", "b", "c", "a", "b", "c", "a"]);
    }

    #[test]
    fn test_single_frame_repeats() {
        let seq = FrameSequence::new(["*"], DEFAULT_DELAY).unwrap();
        assert_eq!(seq.next(0), ("*", 0));
        assert_eq!(seq.next(5), ("*", 0));
    }

    #[test]
    fn test_with_frames_ignores_empty() {
        let seq = FrameSequence::default().with_frames(Vec::new());
        assert_eq!(seq.len(), 4);
    }

    proptest! {
        #[test]
        fn prop_next_stays_in_bounds(len in 1usize..16, index in 0usize..10_000) {
            let frames: Vec<String> = (0..len).map(|i| i.to_string()).collect();
            let seq = FrameSequence::new(frames, DEFAULT_DELAY).unwrap();
            let (frame, next) = seq.next(index);
            prop_assert!(next < len);
            prop_assert_eq!(frame, (index % len).to_string());
            prop_assert_eq!(next, (index % len + 1) % len);
        }
    }
}
