//! Public types for the PathCollector API.
//!
//! Re-exports from the internal crates.

// Trace model
pub use pathcollector_core::{Point, Trace, TraceId, DATE_FORMAT};

// Clocks
pub use pathcollector_core::{Clock, FixedClock, SystemClock};

// Capture session
pub use pathcollector_core::{SessionError, SessionState, TracingSession};

// Markup
pub use pathcollector_wire::{decode_trace, encode_trace, MalformedTraceError, TraceMarkup};

// Repository
pub use pathcollector_storage::{
    FileTraceRepository, MemoryTraceRepository, PullReport, PushFailure, PushReport,
    RepositoryError, SharedRepository, TraceKey, TraceRepository, TraceStore, TRACE_EXTENSION,
};
