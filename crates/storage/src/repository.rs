//! Repository interface
//!
//! A repository owns a [`TraceStore`] and synchronizes it with some
//! durable backing store. Implementations:
//! - [`FileTraceRepository`](crate::FileTraceRepository): one file per trace in a directory tree
//! - [`MemoryTraceRepository`](crate::MemoryTraceRepository): in-process double

use crate::error::Result;
use crate::report::{PullReport, PushReport};
use crate::store::{TraceKey, TraceStore};
use pathcollector_core::Trace;

/// Tagged trace store with pull/push synchronization
pub trait TraceRepository {
    /// Traces currently held in memory
    fn store(&self) -> &TraceStore;

    /// Mutable access to the in-memory store
    fn store_mut(&mut self) -> &mut TraceStore;

    /// Add `trace` under `tag`
    ///
    /// A trace whose id already exists under `tag` is dropped. Returns
    /// `true` if the trace was inserted.
    fn add_trace(&mut self, trace: Trace, tag: &str) -> bool {
        self.store_mut().insert(tag, trace)
    }

    /// Load every stored trace into memory
    fn pull(&mut self) -> Result<PullReport>;

    /// Persist every in-memory trace that is not stored yet
    ///
    /// Stored traces are never overwritten.
    fn push(&mut self) -> Result<PushReport>;

    /// In-memory traces not known to be persisted
    fn pending(&self) -> Vec<TraceKey>;
}
