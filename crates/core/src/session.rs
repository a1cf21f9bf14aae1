//! Capture session state machine
//!
//! A [`TracingSession`] records exactly one trace:
//!
//! ```text
//! Empty --begin()--> Open --end()--> Closed
//! ```
//!
//! Points can only be appended while Open, and the trace can only be read
//! once Closed. A session never returns to Empty: calling `begin()` a second
//! time is an error even after `end()`.

use crate::clock::{Clock, SystemClock};
use crate::trace::Trace;
use thiserror::Error;

/// Lifecycle misuse of a [`TracingSession`]
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SessionError {
    /// `begin()` called on a session that already holds a trace
    #[error("attempted to reuse an expired tracing session")]
    Reused,

    /// Trace requested before `begin()`
    #[error("tracing session has no trace")]
    NoTrace,

    /// Trace requested while capture is still in progress
    #[error("tracing session is locked: capture still in progress")]
    Locked,

    /// Point appended outside of an open capture
    #[error("tracing session is not capturing")]
    NotCapturing,
}

/// Observable state of a [`TracingSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No trace allocated yet
    Empty,
    /// Capturing points
    Open,
    /// Finalized; the trace can be read
    Closed,
}

/// Single-use wrapper around the capture of one [`Trace`]
#[derive(Debug)]
pub struct TracingSession<C: Clock = SystemClock> {
    clock: C,
    trace: Option<Trace>,
    locked: bool,
}

impl TracingSession<SystemClock> {
    /// Create an empty session reading the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TracingSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TracingSession<C> {
    /// Create an empty session reading `clock`
    pub fn with_clock(clock: C) -> Self {
        TracingSession {
            clock,
            trace: None,
            locked: false,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        match (&self.trace, self.locked) {
            (None, _) => SessionState::Empty,
            (Some(_), true) => SessionState::Open,
            (Some(_), false) => SessionState::Closed,
        }
    }

    /// Start capturing: Empty -> Open
    ///
    /// The new trace takes its id and date from the session's clock.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        if self.trace.is_some() {
            return Err(SessionError::Reused);
        }
        self.trace = Some(Trace::new(&self.clock));
        self.locked = true;
        Ok(())
    }

    /// Append a point sampled now
    pub fn move_to(&mut self, x: f32, y: f32) -> Result<(), SessionError> {
        let now = self.clock.now_millis();
        self.move_to_at(x, y, now)
    }

    /// Append a point sampled at the absolute time `timestamp_ms`
    pub fn move_to_at(&mut self, x: f32, y: f32, timestamp_ms: i64) -> Result<(), SessionError> {
        match (&mut self.trace, self.locked) {
            (Some(trace), true) => {
                trace.append_point_at(x, y, timestamp_ms);
                Ok(())
            }
            _ => Err(SessionError::NotCapturing),
        }
    }

    /// Finish capturing: Open -> Closed
    ///
    /// Ending an already closed session does nothing.
    pub fn end(&mut self) -> Result<(), SessionError> {
        if self.trace.is_none() {
            return Err(SessionError::NoTrace);
        }
        self.locked = false;
        Ok(())
    }

    /// Borrow the finalized trace
    pub fn trace(&self) -> Result<&Trace, SessionError> {
        match (&self.trace, self.locked) {
            (None, _) => Err(SessionError::NoTrace),
            (Some(_), true) => Err(SessionError::Locked),
            (Some(trace), false) => Ok(trace),
        }
    }

    /// Consume the session and take the finalized trace
    pub fn into_trace(self) -> Result<Trace, SessionError> {
        self.trace()?;
        self.trace.ok_or(SessionError::NoTrace)
    }
}
