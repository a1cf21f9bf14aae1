//! Gesture traces
//!
//! A [`Trace`] is the unit of capture and storage. Its id is the
//! millisecond timestamp at which capture started; it is also the sort key
//! for traces captured under the same tag. The capture `date` is read
//! separately and is kept verbatim even when it disagrees with the id.

use crate::clock::Clock;
use crate::point::Point;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Trace identifier: milliseconds since the Unix epoch at capture start
pub type TraceId = i64;

/// `strftime` pattern for the capture date (`yyyy-MM-dd`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An ordered sequence of timestamped points
///
/// The id is fixed at construction. Points can only be appended, and each
/// stores its time as an offset from the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    id: TraceId,
    date: NaiveDate,
    points: Vec<Point>,
}

impl Trace {
    /// Start an empty trace at the clock's current time and date
    pub fn new(clock: &impl Clock) -> Self {
        Trace {
            id: clock.now_millis(),
            date: clock.today(),
            points: Vec::new(),
        }
    }

    /// Create an empty trace with an explicit id and date
    pub fn with_id(id: TraceId, date: NaiveDate) -> Self {
        Trace {
            id,
            date,
            points: Vec::new(),
        }
    }

    /// Rebuild a trace from already-decoded parts
    ///
    /// Point times are taken as offsets and stored unchanged.
    pub fn from_parts(id: TraceId, date: NaiveDate, points: Vec<Point>) -> Self {
        Trace { id, date, points }
    }

    /// Trace id (capture start in epoch milliseconds)
    pub fn id(&self) -> TraceId {
        self.id
    }

    /// Capture date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Capture date as `yyyy-MM-dd`
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Points in capture order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no point has been recorded
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Offset of the last point, or 0 for an empty trace
    pub fn duration_ms(&self) -> i64 {
        self.points.last().map(|p| p.t).unwrap_or(0)
    }

    /// Append a point sampled at the absolute time `timestamp_ms`
    pub fn append_point_at(&mut self, x: f32, y: f32, timestamp_ms: i64) {
        self.points.push(Point::new(x, y, timestamp_ms - self.id));
    }

    /// Append a point sampled now according to `clock`
    pub fn append_point(&mut self, x: f32, y: f32, clock: &impl Clock) {
        self.append_point_at(x, y, clock.now_millis());
    }
}
