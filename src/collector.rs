//! Headless capture driver.
//!
//! Turns a stream of touch events into committed traces:
//!
//! - `touch_start` opens a fresh [`TracingSession`] and records the first sample
//! - `touch_move` records a sample only once the pointer has moved at least
//!   the touch tolerance along either axis since the last recorded sample
//! - `touch_up` records the last accepted position at the release time,
//!   closes the session and adds the trace to the repository under the
//!   current tag
//!
//! Tags rotate through `"0"`, `"1"`, ... `"<tag_cycle - 1>"` so each gesture
//! is labelled with the class the user was asked to draw. A fixed tag can be
//! pinned instead.

use crate::config::CollectorConfig;
use crate::error::{Error, Result};
use pathcollector_core::{Clock, SessionError, SessionState, SystemClock, TracingSession};
use pathcollector_storage::{PushReport, TraceKey, TraceRepository};
use tracing::{debug, info};

/// A trace handed to the repository by `touch_up`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed {
    /// Where the trace was stored
    pub key: TraceKey,
    /// False if the tag already held a trace with this id
    pub inserted: bool,
    /// Number of recorded points
    pub points: usize,
}

/// Feeds touch events into sessions and commits finished traces.
pub struct TraceCollector<R, C: Clock + Clone = SystemClock> {
    repository: R,
    clock: C,
    session: Option<TracingSession<C>>,
    last: (f32, f32),
    touch_tolerance: f32,
    tag_cycle: u32,
    tag_number: u32,
    pinned_tag: Option<String>,
}

impl<R: TraceRepository> TraceCollector<R, SystemClock> {
    /// Create a collector reading the system clock.
    pub fn new(repository: R, config: &CollectorConfig) -> Self {
        Self::with_clock(repository, config, SystemClock)
    }
}

impl<R: TraceRepository, C: Clock + Clone> TraceCollector<R, C> {
    /// Create a collector reading `clock`.
    pub fn with_clock(repository: R, config: &CollectorConfig, clock: C) -> Self {
        TraceCollector {
            repository,
            clock,
            session: None,
            last: (0.0, 0.0),
            touch_tolerance: config.touch_tolerance,
            tag_cycle: config.tag_cycle.max(1),
            tag_number: 0,
            pinned_tag: None,
        }
    }

    /// Store every gesture under `tag` instead of rotating.
    pub fn pin_tag(&mut self, tag: impl Into<String>) {
        self.pinned_tag = Some(tag.into());
    }

    /// Tag the next committed gesture will be stored under.
    pub fn current_tag(&self) -> String {
        match &self.pinned_tag {
            Some(tag) => tag.clone(),
            None => self.tag_number.to_string(),
        }
    }

    /// True between `touch_start` and `touch_up`.
    pub fn is_capturing(&self) -> bool {
        matches!(&self.session, Some(session) if session.state() == SessionState::Open)
    }

    /// Begin a gesture at `(x, y)`, sampled at `timestamp_ms`.
    ///
    /// An unfinished gesture is discarded.
    pub fn touch_start(&mut self, x: f32, y: f32, timestamp_ms: i64) -> Result<()> {
        if self.is_capturing() {
            debug!("Discarding unfinished gesture");
        }

        let mut session = TracingSession::with_clock(self.clock.clone());
        session.begin()?;
        session.move_to_at(x, y, timestamp_ms)?;
        self.session = Some(session);
        self.last = (x, y);
        Ok(())
    }

    /// Move the pointer; returns true if the sample was recorded.
    pub fn touch_move(&mut self, x: f32, y: f32, timestamp_ms: i64) -> Result<bool> {
        let session = self
            .session
            .as_mut()
            .ok_or(Error::Session(SessionError::NotCapturing))?;

        let dx = (x - self.last.0).abs();
        let dy = (y - self.last.1).abs();
        if dx < self.touch_tolerance && dy < self.touch_tolerance {
            return Ok(false);
        }

        session.move_to_at(x, y, timestamp_ms)?;
        self.last = (x, y);
        Ok(true)
    }

    /// Release the pointer and commit the gesture.
    pub fn touch_up(&mut self, timestamp_ms: i64) -> Result<Committed> {
        let mut session = self
            .session
            .take()
            .ok_or(Error::Session(SessionError::NotCapturing))?;

        session.move_to_at(self.last.0, self.last.1, timestamp_ms)?;
        session.end()?;
        let trace = session.into_trace()?;

        let tag = self.current_tag();
        let key = TraceKey::new(tag.as_str(), trace.id());
        let points = trace.len();
        let inserted = self.repository.add_trace(trace, &tag);
        if inserted {
            info!("Captured trace {} with {} points", key, points);
        } else {
            debug!("Trace {} already captured, dropped", key);
        }

        if self.pinned_tag.is_none() {
            self.tag_number = (self.tag_number + 1) % self.tag_cycle;
        }

        Ok(Committed {
            key,
            inserted,
            points,
        })
    }

    /// Flush the repository.
    pub fn push(&mut self) -> Result<PushReport> {
        Ok(self.repository.push()?)
    }

    /// Borrow the repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Mutably borrow the repository.
    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    /// Give back the repository.
    pub fn into_repository(self) -> R {
        self.repository
    }
}
