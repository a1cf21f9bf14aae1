//! Shared fixtures for repository sync tests.

pub use chrono::NaiveDate;
pub use pathcollector::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary repository root, removed on drop.
pub struct TestRoot {
    dir: TempDir,
}

impl TestRoot {
    pub fn new() -> Self {
        TestRoot {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A fresh repository over this root with nothing in memory.
    pub fn repo(&self) -> FileTraceRepository {
        FileTraceRepository::new(self.path())
    }

    pub fn file(&self, tag: &str, id: TraceId) -> PathBuf {
        self.path().join(tag).join(format!("{}.{}", id, TRACE_EXTENSION))
    }

    pub fn write_raw(&self, tag: &str, name: &str, contents: &str) {
        let dir = self.path().join(tag);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(name), contents).unwrap();
    }
}

pub fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

/// Trace starting at `id` with points at the given (x, y, offset) triples.
pub fn trace(id: TraceId, points: &[(f32, f32, i64)]) -> Trace {
    let mut trace = Trace::with_id(id, date());
    for &(x, y, offset) in points {
        trace.append_point_at(x, y, id + offset);
    }
    trace
}
