//! Convenient imports for PathCollector.
//!
//! ```
//! use pathcollector::prelude::*;
//!
//! let mut session = TracingSession::new();
//! session.begin()?;
//! session.move_to(1.0, 2.0)?;
//! session.end()?;
//! assert_eq!(session.trace()?.len(), 1);
//! # Ok::<(), pathcollector::Error>(())
//! ```

// Capture
pub use crate::collector::{Committed, TraceCollector};
pub use crate::config::CollectorConfig;

// Error handling
pub use crate::error::{Error, Result};

// Evaluation
pub use crate::evaluation::{Classifier, ClassifierTestSuite, RandomClassifier};

// Core types
pub use crate::types::{Point, Trace, TraceId, TracingSession};

// Markup
pub use crate::types::TraceMarkup;

// Repository
pub use crate::types::{FileTraceRepository, MemoryTraceRepository, TraceRepository};
