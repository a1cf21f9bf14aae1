//! # PathCollector
//!
//! Capture, store and evaluate freehand gesture traces.
//!
//! A trace is an ordered list of timestamped 2D points recorded while a
//! pointer is down. Traces are grouped under string tags and persisted as
//! one markup file per trace in a `<root>/<tag>/<id>.trc` directory tree.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pathcollector::prelude::*;
//!
//! # fn main() -> pathcollector::Result<()> {
//! let config = CollectorConfig::new("./traces");
//! let mut repository = FileTraceRepository::new(&config.root);
//! repository.pull()?;
//!
//! let mut collector = TraceCollector::new(repository, &config);
//! collector.touch_start(0.0, 0.0, 1_000)?;
//! collector.touch_move(10.0, 0.0, 1_005)?;
//! let committed = collector.touch_up(1_012)?;
//! println!("stored {}", committed.key);
//!
//! let report = collector.push()?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Layers
//!
//! - [`TracingSession`] - single-use capture lifecycle for one [`Trace`]
//! - [`TraceMarkup`] - text encoding of a trace
//! - [`TraceRepository`] - tagged in-memory store with `pull` / `push`
//! - [`TraceCollector`] - turns touch events into committed traces
//! - [`ClassifierTestSuite`] - scores a [`Classifier`] against stored traces

#![warn(missing_docs)]
#![warn(clippy::all)]

mod collector;
mod config;
mod error;
mod evaluation;
mod types;

pub mod prelude;

pub use collector::{Committed, TraceCollector};
pub use config::{CollectorConfig, DEFAULT_TAG_CYCLE, DEFAULT_TOUCH_TOLERANCE};
pub use error::{Error, Result};
pub use evaluation::{Classifier, ClassifierTestSuite, EvaluationReport, RandomClassifier};

// Re-export types
pub use types::*;
