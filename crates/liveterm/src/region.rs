//! The live region controller.
//!
//! A [`LiveRegion`] owns one line of terminal output that is redrawn in place
//! while the caller keeps working. Starting an animated region draws the first
//! frame immediately and spawns a worker thread that redraws on every frame
//! delay. The worker waits on a channel rather than sleeping, so
//! [`LiveRegion::update_text`] can ask for an immediate redraw and
//! [`LiveRegion::stop`] never waits out a long delay.
//!
//! ```text
//!              start                       stop / success / warning / fail
//!   Idle ─────────────────▶ Active ───────────────────────────────────▶ Idle
//!                     (Animated | Static)
//! ```
//!
//! When the [`OutputContext`] does not allow animation (styling off, raw
//! output, or not a terminal) the region prints its text as a plain line on
//! start and on every text update, and runs no worker.

use std::fmt;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use liveterm_render::{OutputContext, RenderMode, RenderSurface};

use crate::error::LiveError;
use crate::printer::{LinePrinter, LivePrinter, Outcome};
use crate::spinner::Spinner;
use crate::timer::timer_suffix;

const WORKER_NAME: &str = "liveterm-region";

/// Shortest wait between frames; a zero delay would spin the worker.
const MIN_FRAME_DELAY: Duration = Duration::from_millis(1);

enum Signal {
    /// Redraw the current frame, typically after a text change.
    Redraw,
    Stop,
}

/// What happens to the live line when animation halts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ending {
    Keep,
    Erase,
}

struct RegionState {
    text: String,
    active: bool,
    mode: RenderMode,
    /// Index of the frame currently on screen.
    frame: usize,
    started_at: Option<Instant>,
    redraw_tx: Option<Sender<Signal>>,
}

struct Shared {
    config: Spinner,
    ctx: Arc<OutputContext>,
    state: Mutex<RegionState>,
    surface: Mutex<RenderSurface>,
}

struct Worker {
    tx: Sender<Signal>,
    handle: JoinHandle<()>,
}

/// A running (or runnable) spinner.
///
/// All methods take `&self`, so a region can be shared between threads
/// (for example behind an `Arc`) and updated from anywhere. Dropping an
/// active region stops it.
pub struct LiveRegion {
    shared: Arc<Shared>,
    /// Serializes start/stop and holds the worker while animating.
    lifecycle: Mutex<Option<Worker>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl LiveRegion {
    /// Creates an idle region from a configuration snapshot.
    pub fn new(config: Spinner) -> Self {
        let ctx = config.context();
        let surface = RenderSurface::for_destination(config.output());
        let state = RegionState {
            text: config.text().to_string(),
            active: false,
            mode: RenderMode::Static,
            frame: 0,
            started_at: None,
            redraw_tx: None,
        };
        Self {
            shared: Arc::new(Shared {
                config,
                ctx,
                state: Mutex::new(state),
                surface: Mutex::new(surface),
            }),
            lifecycle: Mutex::new(None),
        }
    }

    /// The configuration this region was built from.
    pub fn config(&self) -> &Spinner {
        &self.shared.config
    }

    /// The current message.
    pub fn text(&self) -> String {
        lock(&self.shared.state).text.clone()
    }

    pub fn is_active(&self) -> bool {
        lock(&self.shared.state).active
    }

    /// How the region is rendering, or `None` while idle.
    pub fn render_mode(&self) -> Option<RenderMode> {
        let state = lock(&self.shared.state);
        state.active.then_some(state.mode)
    }

    /// Starts the region, replacing the message with `text` when given.
    ///
    /// Fails with [`LiveError::AlreadyActive`] if the region is running; the
    /// running region is left untouched.
    pub fn start(&self, text: Option<&str>) -> Result<(), LiveError> {
        let mut lifecycle = lock(&self.lifecycle);

        let (mode, channel) = {
            let mut state = lock(&self.shared.state);
            if state.active {
                return Err(LiveError::AlreadyActive);
            }
            if let Some(text) = text {
                state.text = text.to_string();
            }
            state.mode = self.shared.ctx.render_mode();
            state.active = true;
            state.frame = 0;
            state.started_at = Some(Instant::now());

            let channel = match state.mode {
                RenderMode::Animated => {
                    let (tx, rx) = mpsc::channel();
                    state.redraw_tx = Some(tx.clone());
                    Some((tx, rx))
                }
                RenderMode::Static => None,
            };
            (state.mode, channel)
        };
        tracing::debug!(?mode, "live region started");

        let Some((tx, rx)) = channel else {
            let text = self.text();
            if let Err(err) = lock(&self.shared.surface).write_plain(&text) {
                tracing::debug!(error = %err, "failed to print static region");
            }
            return Ok(());
        };

        self.shared.redraw(false);

        let shared = Arc::clone(&self.shared);
        let spawned = thread::Builder::new()
            .name(WORKER_NAME.to_string())
            .spawn(move || shared.run(rx));

        match spawned {
            Ok(handle) => {
                *lifecycle = Some(Worker { tx, handle });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to spawn live region worker");
                {
                    let mut state = lock(&self.shared.state);
                    state.active = false;
                    state.redraw_tx = None;
                }
                if let Err(err) = lock(&self.shared.surface).erase() {
                    tracing::debug!(error = %err, "failed to erase live region");
                }
                Err(LiveError::Spawn(err))
            }
        }
    }

    /// Replaces the message.
    ///
    /// Safe to call at any time and from any thread. Before start it sets the
    /// initial text. While animating, the new text is drawn right away without
    /// advancing the frame; in static mode it is printed as a new plain line.
    /// This never waits for the worker.
    pub fn update_text(&self, text: impl Into<String>) {
        let mut state = lock(&self.shared.state);
        state.text = text.into();
        if let Some(tx) = &state.redraw_tx {
            // The worker may already be gone; stop will draw the final text.
            let _ = tx.send(Signal::Redraw);
        } else if state.active && state.mode == RenderMode::Static {
            // State stays locked so the line cannot land after a concurrent stop.
            if let Err(err) = lock(&self.shared.surface).write_plain(&state.text) {
                tracing::debug!(error = %err, "failed to print static update");
            }
        }
    }

    /// Stops the region.
    ///
    /// The final frame is redrawn with the text current at this moment and
    /// left on screen, or erased when the spinner was configured with
    /// [`Spinner::with_remove_when_done`]. Once this returns nothing else is
    /// written by the region. Stopping an idle region does nothing.
    pub fn stop(&self) -> Result<(), LiveError> {
        let ending = if self.shared.config.remove_when_done() {
            Ending::Erase
        } else {
            Ending::Keep
        };
        let mut lifecycle = lock(&self.lifecycle);
        self.halt(&mut lifecycle, ending);
        Ok(())
    }

    /// Stops the region and prints a success line.
    ///
    /// Uses `message` when given, otherwise the current text.
    pub fn success(&self, message: Option<&str>) -> Result<(), LiveError> {
        self.conclude(Outcome::Success, message)
    }

    /// Stops the region and prints a warning line.
    pub fn warning(&self, message: Option<&str>) -> Result<(), LiveError> {
        self.conclude(Outcome::Warning, message)
    }

    /// Stops the region and prints an error line.
    pub fn fail(&self, message: Option<&str>) -> Result<(), LiveError> {
        self.conclude(Outcome::Error, message)
    }

    fn conclude(&self, outcome: Outcome, message: Option<&str>) -> Result<(), LiveError> {
        let mut lifecycle = lock(&self.lifecycle);
        self.halt(&mut lifecycle, Ending::Erase);

        let message = message.map_or_else(|| self.text(), str::to_string);
        let printer: &dyn LinePrinter = match outcome {
            Outcome::Success => self.shared.config.success_printer.as_ref(),
            Outcome::Warning => self.shared.config.warning_printer.as_ref(),
            Outcome::Error => self.shared.config.fail_printer.as_ref(),
        };
        let line = printer.render(&message, &self.shared.ctx);
        if let Err(err) = lock(&self.shared.surface).write_plain(&line) {
            tracing::debug!(error = %err, ?outcome, "failed to print final line");
        }
        Ok(())
    }

    /// Joins the worker and finalizes the live line. The caller holds the
    /// lifecycle lock.
    fn halt(&self, lifecycle: &mut Option<Worker>, ending: Ending) {
        if let Some(worker) = lifecycle.take() {
            let _ = worker.tx.send(Signal::Stop);
            if worker.handle.join().is_err() {
                tracing::warn!("live region worker panicked");
            }
        }

        let (line, mode) = {
            let mut state = lock(&self.shared.state);
            if !state.active {
                return;
            }
            state.active = false;
            state.redraw_tx = None;
            (self.shared.line(&state), state.mode)
        };

        if mode == RenderMode::Animated {
            let mut surface = lock(&self.shared.surface);
            let result = match ending {
                Ending::Erase => surface.erase(),
                Ending::Keep => surface.draw(&line).and_then(|_| surface.finish()),
            };
            if let Err(err) = result {
                tracing::debug!(error = %err, "failed to finalize live region");
            }
        }
        tracing::debug!(?ending, "live region stopped");
    }
}

impl Shared {
    fn run(&self, rx: Receiver<Signal>) {
        let delay = tick_delay(self.config.delay());
        loop {
            match rx.recv_timeout(delay) {
                Ok(Signal::Redraw) => self.redraw(false),
                Err(RecvTimeoutError::Timeout) => self.redraw(true),
                Ok(Signal::Stop) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    }

    fn redraw(&self, advance: bool) {
        let line = {
            let mut state = lock(&self.state);
            if advance {
                state.frame = self.config.sequence.next(state.frame).1;
            }
            self.line(&state)
        };
        if let Err(err) = lock(&self.surface).draw(&line) {
            tracing::debug!(error = %err, "live region redraw failed");
        }
    }

    /// `<frame> <text>[ (elapsed)]`, styled through the context.
    fn line(&self, state: &RegionState) -> String {
        let (frame, _) = self.config.sequence.next(state.frame);
        let mut line = format!(
            "{} {}",
            self.ctx.paint(&self.config.style, frame),
            self.ctx.paint(&self.config.message_style, &state.text)
        );
        if self.config.show_timer() {
            if let Some(started) = state.started_at {
                let suffix = timer_suffix(started.elapsed(), self.config.timer_rounding_factor());
                line.push_str(&self.ctx.paint(&self.config.timer_style, &suffix));
            }
        }
        line
    }
}

fn tick_delay(delay: Duration) -> Duration {
    delay.max(MIN_FRAME_DELAY)
}

impl Default for LiveRegion {
    fn default() -> Self {
        Self::new(Spinner::default())
    }
}

impl Drop for LiveRegion {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

impl LivePrinter for LiveRegion {
    fn generic_start(&self) -> Result<(), LiveError> {
        self.start(None)
    }

    fn generic_stop(&self) -> Result<(), LiveError> {
        self.stop()
    }
}

impl fmt::Debug for LiveRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = lock(&self.shared.state);
        f.debug_struct("LiveRegion")
            .field("text", &state.text)
            .field("active", &state.active)
            .field("mode", &state.mode)
            .field("frame", &state.frame)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liveterm_render::{CaptureBuffer, OutputDestination};

    fn animated() -> Arc<OutputContext> {
        Arc::new(OutputContext::new().with_terminal_detector(|| true))
    }

    fn region(ctx: Arc<OutputContext>, delay: Duration) -> (CaptureBuffer, LiveRegion) {
        let buffer = CaptureBuffer::new();
        let region = Spinner::new()
            .with_delay(delay)
            .with_context(ctx)
            .with_output(OutputDestination::Capture(buffer.clone()))
            .build();
        (buffer, region)
    }

    #[test]
    fn test_starts_idle() {
        let (buffer, region) = region(animated(), Duration::from_secs(3600));
        assert!(!region.is_active());
        assert_eq!(region.render_mode(), None);
        assert_eq!(region.text(), "Loading");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_animated_start_draws_first_frame() {
        let (buffer, region) = region(animated(), Duration::from_secs(3600));
        region.start(Some("working")).unwrap();
        assert!(region.is_active());
        assert_eq!(region.render_mode(), Some(RenderMode::Animated));
        assert_eq!(buffer.plain_contents(), "▀  working");
        region.stop().unwrap();
        assert!(!region.is_active());
    }

    #[test]
    fn test_static_start_has_no_worker() {
        let ctx = Arc::new(OutputContext::new().with_terminal_detector(|| false));
        let (_buffer, region) = region(ctx, Duration::from_millis(1));
        region.start(None).unwrap();
        assert_eq!(region.render_mode(), Some(RenderMode::Static));
        assert!(lock(&region.lifecycle).is_none());
        region.stop().unwrap();
    }

    #[test]
    fn test_stop_joins_worker() {
        let (_buffer, region) = region(animated(), Duration::from_millis(5));
        region.start(None).unwrap();
        assert!(lock(&region.lifecycle).is_some());
        region.stop().unwrap();
        assert!(lock(&region.lifecycle).is_none());
        assert!(lock(&region.shared.state).redraw_tx.is_none());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (buffer, region) = region(animated(), Duration::from_secs(3600));
        region.start(None).unwrap();
        region.stop().unwrap();
        let after_first = buffer.contents();
        region.stop().unwrap();
        assert_eq!(buffer.contents(), after_first);
    }

    #[test]
    fn test_restart_after_stop() {
        let (buffer, region) = region(animated(), Duration::from_secs(3600));
        region.start(Some("one")).unwrap();
        region.stop().unwrap();
        region.start(Some("two")).unwrap();
        region.stop().unwrap();
        assert!(buffer.plain_contents().ends_with("two\n"));
    }

    #[test]
    fn test_update_before_start_sets_initial_text() {
        let (buffer, region) = region(animated(), Duration::from_secs(3600));
        region.update_text("prepared");
        region.start(None).unwrap();
        region.stop().unwrap();
        assert!(buffer.plain_contents().contains("prepared"));
    }

    #[test]
    fn test_drop_stops_worker() {
        let (buffer, region) = region(animated(), Duration::from_secs(3600));
        region.start(Some("dropped")).unwrap();
        drop(region);
        assert!(buffer.plain_contents().ends_with("dropped\n"));
    }

    #[test]
    fn test_line_with_timer() {
        let buffer = CaptureBuffer::new();
        let region = Spinner::new()
            .with_delay(Duration::from_secs(3600))
            .with_show_timer(true)
            .with_context(animated())
            .with_output(OutputDestination::Capture(buffer.clone()))
            .build();
        region.start(Some("timed")).unwrap();
        region.stop().unwrap();
        assert!(buffer.plain_contents().ends_with("timed (0s)\n"));
    }

    #[test]
    fn test_tick_delay_has_floor() {
        assert_eq!(tick_delay(Duration::ZERO), MIN_FRAME_DELAY);
        assert_eq!(tick_delay(Duration::from_micros(10)), MIN_FRAME_DELAY);
        assert_eq!(tick_delay(Duration::from_millis(80)), Duration::from_millis(80));
    }

    #[test]
    fn test_zero_delay_does_not_spin() {
        let (buffer, region) = region(animated(), Duration::ZERO);
        region.start(Some("z")).unwrap();
        std::thread::sleep(Duration::from_millis(30));
        region.stop().unwrap();

        // At most one frame per millisecond, plus the first and final draws
        let draws = buffer.plain_contents().matches(" z").count();
        assert!(draws >= 2);
        assert!(draws < 500, "worker spun: {} draws", draws);
    }

    #[test]
    fn test_static_update_after_stop_prints_nothing() {
        let ctx = Arc::new(OutputContext::new().with_raw_output(true));
        let (buffer, region) = region(ctx, Duration::from_millis(1));
        region.start(Some("one")).unwrap();
        region.stop().unwrap();
        region.update_text("late");
        assert_eq!(buffer.contents(), "one\n");
    }
}
