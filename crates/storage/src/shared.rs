//! Thread-safe repository handle
//!
//! The bare repositories take `&mut self` for every mutation. When the
//! capture thread and a shutdown hook need the same repository, wrap it in
//! a [`SharedRepository`]: every operation runs under one mutex, which also
//! serializes the check-then-create sequence of `push`.

use crate::error::Result;
use crate::report::{PullReport, PushReport};
use crate::repository::TraceRepository;
use crate::store::{TraceKey, TraceStore};
use parking_lot::{Mutex, MutexGuard};
use pathcollector_core::Trace;
use std::sync::Arc;

/// Cloneable, mutex-guarded handle to a repository
#[derive(Debug)]
pub struct SharedRepository<R> {
    inner: Arc<Mutex<R>>,
}

impl<R> Clone for SharedRepository<R> {
    fn clone(&self) -> Self {
        SharedRepository {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: TraceRepository> SharedRepository<R> {
    /// Wrap `repository`
    pub fn new(repository: R) -> Self {
        SharedRepository {
            inner: Arc::new(Mutex::new(repository)),
        }
    }

    /// Lock the repository for a sequence of operations
    pub fn lock(&self) -> MutexGuard<'_, R> {
        self.inner.lock()
    }

    /// See [`TraceRepository::add_trace`]
    pub fn add_trace(&self, trace: Trace, tag: &str) -> bool {
        self.inner.lock().add_trace(trace, tag)
    }

    /// See [`TraceRepository::pull`]
    pub fn pull(&self) -> Result<PullReport> {
        self.inner.lock().pull()
    }

    /// See [`TraceRepository::push`]
    pub fn push(&self) -> Result<PushReport> {
        self.inner.lock().push()
    }

    /// See [`TraceRepository::pending`]
    pub fn pending(&self) -> Vec<TraceKey> {
        self.inner.lock().pending()
    }

    /// Run `f` against the in-memory store
    pub fn with_store<T>(&self, f: impl FnOnce(&TraceStore) -> T) -> T {
        f(self.inner.lock().store())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTraceRepository;
    use chrono::NaiveDate;
    use std::thread;

    #[test]
    fn test_concurrent_adds_dedup() {
        let shared = SharedRepository::new(MemoryTraceRepository::new());
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    (0..100)
                        .filter(|id| shared.add_trace(Trace::with_id(*id, date), "a"))
                        .count()
                })
            })
            .collect();
        let inserted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(inserted, 100);
        assert_eq!(shared.with_store(|store| store.tag_len("a")), 100);
    }

    #[test]
    fn test_push_through_handle() {
        let shared = SharedRepository::new(MemoryTraceRepository::new());
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        shared.add_trace(Trace::with_id(1, date), "a");

        let report = shared.push().unwrap();
        assert_eq!(report.written.len(), 1);
        assert!(shared.pending().is_empty());
        assert_eq!(shared.lock().backing().len(), 1);
    }
}
