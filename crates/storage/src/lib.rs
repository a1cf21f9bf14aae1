//! Storage layer for PathCollector
//!
//! This crate implements the tagged trace repository:
//! - [`TraceStore`]: tag -> id -> trace map with first-write-wins inserts
//! - [`TraceRepository`]: `add_trace` / `pull` / `push` interface
//! - [`FileTraceRepository`]: `<root>/<tag>/<id>.trc` directory tree
//! - [`MemoryTraceRepository`]: in-process implementation for tests
//! - [`SharedRepository`]: mutex-guarded handle for multi-threaded callers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod file;
pub mod memory;
pub mod report;
pub mod repository;
pub mod shared;
pub mod store;

pub use error::{RepositoryError, Result};
pub use file::{FileTraceRepository, TRACE_EXTENSION};
pub use memory::MemoryTraceRepository;
pub use report::{PullReport, PushFailure, PushReport};
pub use repository::TraceRepository;
pub use shared::SharedRepository;
pub use store::{TraceKey, TraceStore};
