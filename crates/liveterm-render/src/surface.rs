//! Erasable terminal output.
//!
//! A [`RenderSurface`] writes a block of text and remembers how many terminal
//! rows it occupied, so the next [`draw`](RenderSurface::draw) or
//! [`erase`](RenderSurface::erase) can wipe exactly that block before
//! continuing. Cursor movement and line clearing are emitted as `crossterm`
//! commands queued into the sink and flushed once per operation.
//!
//! The surface is not synchronized. Whoever owns it must make sure only one
//! writer uses it at a time.
//!
//! ```rust
//! use liveterm_render::{CaptureBuffer, RenderSurface};
//!
//! let buffer = CaptureBuffer::new();
//! let mut surface = RenderSurface::new(buffer.clone());
//!
//! surface.draw("working").unwrap();
//! surface.draw("still working").unwrap();
//! surface.finish().unwrap();
//!
//! // The first frame was erased before the second was written
//! assert_eq!(buffer.plain_contents(), "workingstill working\n");
//! assert!(buffer.contents().contains("\x1b[2K"));
//! ```

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::capture::CaptureBuffer;
use crate::error::RenderError;
use crate::util::display_rows;

/// Where a printer sends its output.
#[derive(Clone, Default)]
pub enum OutputDestination {
    /// Write to standard output
    #[default]
    Stdout,
    /// Write to standard error
    Stderr,
    /// Write into an in-memory buffer
    Capture(CaptureBuffer),
    /// Write to a caller-provided writer, such as a file or socket
    Writer(Arc<Mutex<dyn Write + Send>>),
}

impl fmt::Debug for OutputDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputDestination::Stdout => f.write_str("Stdout"),
            OutputDestination::Stderr => f.write_str("Stderr"),
            OutputDestination::Capture(buffer) => f.debug_tuple("Capture").field(buffer).finish(),
            OutputDestination::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

/// Adapts a shared writer to the surface's owned sink.
struct SharedWriter(Arc<Mutex<dyn Write + Send>>);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).flush()
    }
}

#[derive(Debug, Clone, Copy)]
enum Columns {
    Stdout,
    Stderr,
    Fixed(usize),
    Unknown,
}

impl Columns {
    fn get(self) -> Option<usize> {
        let size = match self {
            Columns::Stdout => console::Term::stdout().size_checked(),
            Columns::Stderr => console::Term::stderr().size_checked(),
            Columns::Fixed(cols) => return Some(cols),
            Columns::Unknown => return None,
        };
        size.map(|(_rows, cols)| cols as usize)
    }
}

/// Write-then-erase output over any [`Write`] sink.
pub struct RenderSurface {
    sink: Box<dyn Write + Send>,
    columns: Columns,
    /// Rows occupied by the last drawn block; 0 when nothing is erasable.
    rows: usize,
}

impl RenderSurface {
    /// Wraps an arbitrary writer. Line wrapping is not accounted for unless
    /// a width is given with [`with_columns`](Self::with_columns).
    pub fn new<W: Write + Send + 'static>(sink: W) -> Self {
        Self {
            sink: Box::new(sink),
            columns: Columns::Unknown,
            rows: 0,
        }
    }

    /// A surface on standard output, sized by the terminal.
    pub fn stdout() -> Self {
        Self {
            columns: Columns::Stdout,
            ..Self::new(std::io::stdout())
        }
    }

    /// A surface on standard error, sized by the terminal.
    pub fn stderr() -> Self {
        Self {
            columns: Columns::Stderr,
            ..Self::new(std::io::stderr())
        }
    }

    /// Builds the surface for a destination.
    pub fn for_destination(destination: &OutputDestination) -> Self {
        match destination {
            OutputDestination::Stdout => Self::stdout(),
            OutputDestination::Stderr => Self::stderr(),
            OutputDestination::Capture(buffer) => {
                let surface = Self::new(buffer.clone());
                match buffer.columns() {
                    Some(cols) => surface.with_columns(cols),
                    None => surface,
                }
            }
            OutputDestination::Writer(writer) => Self::new(SharedWriter(Arc::clone(writer))),
        }
    }

    /// Fixes the terminal width used to count wrapped rows.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Columns::Fixed(columns);
        self
    }

    /// Rows the currently displayed block occupies.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Replaces the previously drawn block with `block`.
    ///
    /// The block is written without a trailing newline so the cursor stays on
    /// its last row, ready to be erased.
    pub fn draw(&mut self, block: &str) -> Result<(), RenderError> {
        self.queue_erase()?;
        self.rows = display_rows(block, self.columns.get());
        self.sink.write_all(block.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }

    /// Removes the previously drawn block and leaves the cursor at column 0
    /// of its first row.
    pub fn erase(&mut self) -> Result<(), RenderError> {
        self.queue_erase()?;
        self.sink.flush()?;
        Ok(())
    }

    /// Writes a line that will never be erased.
    pub fn write_plain(&mut self, text: &str) -> Result<(), RenderError> {
        writeln!(self.sink, "{}", text)?;
        self.sink.flush()?;
        Ok(())
    }

    /// Keeps the current block on screen and moves below it.
    pub fn finish(&mut self) -> Result<(), RenderError> {
        if self.rows > 0 {
            self.rows = 0;
            writeln!(self.sink)?;
            self.sink.flush()?;
        }
        Ok(())
    }

    fn queue_erase(&mut self) -> Result<(), RenderError> {
        if self.rows == 0 {
            return Ok(());
        }
        queue!(self.sink, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        for _ in 1..self.rows {
            queue!(self.sink, MoveUp(1), Clear(ClearType::CurrentLine))?;
        }
        self.rows = 0;
        Ok(())
    }
}

impl fmt::Debug for RenderSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderSurface")
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .finish_non_exhaustive()
    }
}
