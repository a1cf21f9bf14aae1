//! Core types for PathCollector
//!
//! This crate defines the data model shared by every other crate:
//! - [`Point`]: one timestamped sample of a gesture
//! - [`Trace`]: an ordered sequence of points plus its id and capture date
//! - [`Clock`]: the time source traces and sessions read from
//! - [`TracingSession`]: the single-use state machine that gates capture

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod point;
pub mod session;
pub mod trace;

pub use clock::{Clock, FixedClock, SystemClock};
pub use point::Point;
pub use session::{SessionError, SessionState, TracingSession};
pub use trace::{Trace, TraceId, DATE_FORMAT};
