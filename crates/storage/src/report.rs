//! Outcomes of `pull` and `push`

use crate::store::TraceKey;
use std::io;

/// Summary of a `pull`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PullReport {
    /// Tag directories visited
    pub tags: usize,
    /// Traces added to memory
    pub loaded: usize,
    /// Traces whose id was already present under their tag
    pub duplicates: usize,
}

impl PullReport {
    /// Human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Pulled {} traces from {} tags ({} already in memory)",
            self.loaded, self.tags, self.duplicates
        )
    }
}

/// A trace that could not be written during `push`
#[derive(Debug)]
pub struct PushFailure {
    /// Trace that stayed pending
    pub key: TraceKey,
    /// Why the write failed
    pub error: io::Error,
}

/// Summary of a `push`
///
/// A push never stops at the first failing file; every trace ends up in
/// exactly one of the three lists.
#[derive(Debug, Default)]
pub struct PushReport {
    /// Traces written to new files
    pub written: Vec<TraceKey>,
    /// Traces skipped because their file already existed
    pub existing: Vec<TraceKey>,
    /// Traces that could not be written
    pub failed: Vec<PushFailure>,
}

impl PushReport {
    /// True if no write failed
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Keys of the traces that failed to write
    pub fn failed_keys(&self) -> impl Iterator<Item = &TraceKey> {
        self.failed.iter().map(|failure| &failure.key)
    }

    /// Human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Pushed {} traces ({} already stored, {} failed)",
            self.written.len(),
            self.existing.len(),
            self.failed.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_push_report_is_complete() {
        let report = PushReport::default();
        assert!(report.is_complete());
        assert_eq!(report.summary(), "Pushed 0 traces (0 already stored, 0 failed)");
    }

    #[test]
    fn test_failed_keys() {
        let report = PushReport {
            failed: vec![PushFailure {
                key: TraceKey::new("a", 1),
                error: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            }],
            ..Default::default()
        };
        assert!(!report.is_complete());
        assert_eq!(report.failed_keys().cloned().collect::<Vec<_>>(), vec![TraceKey::new("a", 1)]);
    }
}
