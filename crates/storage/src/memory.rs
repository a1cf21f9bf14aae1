//! In-process trace repository
//!
//! Keeps its "backing store" in a second [`TraceStore`]. Same contract as
//! the file repository: `pull` merges the backing store into memory,
//! `push` copies over only what the backing store does not hold yet.

use crate::error::Result;
use crate::report::{PullReport, PushReport};
use crate::repository::TraceRepository;
use crate::store::{TraceKey, TraceStore};

/// Repository whose backing store lives in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryTraceRepository {
    store: TraceStore,
    backing: TraceStore,
}

impl MemoryTraceRepository {
    /// Create an empty repository with an empty backing store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository whose backing store already holds `backing`
    pub fn with_backing(backing: TraceStore) -> Self {
        MemoryTraceRepository {
            store: TraceStore::new(),
            backing,
        }
    }

    /// What has been persisted so far
    pub fn backing(&self) -> &TraceStore {
        &self.backing
    }
}

impl TraceRepository for MemoryTraceRepository {
    fn store(&self) -> &TraceStore {
        &self.store
    }

    fn store_mut(&mut self) -> &mut TraceStore {
        &mut self.store
    }

    fn pull(&mut self) -> Result<PullReport> {
        let mut report = PullReport {
            tags: self.backing.tags().count(),
            ..Default::default()
        };
        for (tag, trace) in self.backing.iter() {
            if self.store.insert(tag, trace.clone()) {
                report.loaded += 1;
            } else {
                report.duplicates += 1;
            }
        }
        Ok(report)
    }

    fn push(&mut self) -> Result<PushReport> {
        let mut report = PushReport::default();
        for (tag, trace) in self.store.iter() {
            let key = TraceKey::new(tag, trace.id());
            if self.backing.insert(tag, trace.clone()) {
                report.written.push(key);
            } else {
                report.existing.push(key);
            }
        }
        Ok(report)
    }

    fn pending(&self) -> Vec<TraceKey> {
        self.store
            .keys()
            .filter(|key| !self.backing.contains(&key.tag, key.id))
            .collect()
    }
}
