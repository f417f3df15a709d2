//! In-memory output sink.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// A cloneable, thread-safe byte buffer that implements [`Write`].
///
/// Every clone shares the same storage, so one clone can be handed to a
/// [`RenderSurface`](crate::RenderSurface) while another is kept to inspect
/// what was written.
///
/// ```rust
/// use liveterm_render::CaptureBuffer;
/// use std::io::Write;
///
/// let buffer = CaptureBuffer::new();
/// let mut writer = buffer.clone();
/// write!(writer, "hello").unwrap();
/// assert_eq!(buffer.contents(), "hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    data: Arc<Mutex<Vec<u8>>>,
    columns: Option<usize>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretends the buffer is a terminal of the given width, so surfaces
    /// account for line wrapping.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// The simulated terminal width, if any.
    pub fn columns(&self) -> Option<usize> {
        self.columns
    }

    /// Everything written so far, decoded lossily.
    pub fn contents(&self) -> String {
        let data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&data).into_owned()
    }

    /// Everything written so far with ANSI escape codes removed.
    pub fn plain_contents(&self) -> String {
        console::strip_ansi_codes(&self.contents()).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn clear(&self) {
        self.data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
