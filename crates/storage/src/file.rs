//! File-backed trace repository
//!
//! ## Layout
//!
//! ```text
//! <root>/
//!   <tag>/
//!     <id>.trc
//! ```
//!
//! The directory tree is the source of truth; the in-memory store is a
//! cache filled by `pull` and flushed by `push`.
//!
//! ## Policies
//!
//! - `pull` is all-or-nothing. Traces are staged first and merged into
//!   memory only if every listed file was read and decoded.
//! - `push` never overwrites. Files are opened with exclusive create, so the
//!   existence check and the creation happen in one filesystem call.
//! - `push` isolates failures per file: a failed write is reported and the
//!   trace stays pending for the next push.
//! - Writes go straight to the final path. A crash mid-write can leave a
//!   truncated file, which a later `pull` reports as malformed.

use crate::error::{RepositoryError, Result};
use crate::report::{PullReport, PushFailure, PushReport};
use crate::repository::TraceRepository;
use crate::store::{TraceKey, TraceStore};
use pathcollector_core::{Trace, TraceId};
use pathcollector_wire::{decode_trace, encode_trace};
use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// Extension of trace files
pub const TRACE_EXTENSION: &str = "trc";

/// Repository stored as one file per trace under `<root>/<tag>/`
#[derive(Debug)]
pub struct FileTraceRepository {
    root: PathBuf,
    store: TraceStore,
    persisted: BTreeSet<TraceKey>,
}

impl FileTraceRepository {
    /// Create an empty repository rooted at `root`
    ///
    /// Nothing is touched on disk until `pull` or `push`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileTraceRepository {
            root: root.into(),
            store: TraceStore::new(),
            persisted: BTreeSet::new(),
        }
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding trace `id` under `tag`
    pub fn trace_path(&self, tag: &str, id: TraceId) -> PathBuf {
        self.root
            .join(tag)
            .join(format!("{}.{}", id, TRACE_EXTENSION))
    }

    /// Read and decode every trace file, without touching memory
    fn load_all(&self) -> Result<(usize, Vec<(String, Trace)>)> {
        let root_entries = match list_dir(&self.root) {
            Ok(entries) => entries,
            Err(_) if !self.root.is_dir() => {
                debug!("Repository root {} is not a directory", self.root.display());
                return Ok((0, Vec::new()));
            }
            Err(source) => {
                return Err(RepositoryError::Read {
                    path: self.root.clone(),
                    source,
                })
            }
        };

        let mut tags = 0;
        let mut loaded = Vec::new();

        for dir in root_entries {
            if !dir.is_dir() {
                warn!("Ignoring file outside any tag directory: {}", dir.display());
                continue;
            }
            let tag = match dir.file_name().and_then(|name| name.to_str()) {
                Some(tag) => tag.to_string(),
                None => {
                    warn!("Skipping tag directory with non UTF-8 name: {}", dir.display());
                    continue;
                }
            };
            tags += 1;

            let files = list_dir(&dir).map_err(|source| RepositoryError::Read {
                path: dir.clone(),
                source,
            })?;

            for file in files.into_iter().filter(|path| !path.is_dir()) {
                let text = fs::read_to_string(&file).map_err(|source| RepositoryError::Read {
                    path: file.clone(),
                    source,
                })?;
                let trace = decode_trace(&text).map_err(|source| RepositoryError::Malformed {
                    path: file.clone(),
                    source,
                })?;
                debug!("Loaded trace {} from {}", trace.id(), file.display());
                loaded.push((tag.clone(), trace));
            }
        }

        Ok((tags, loaded))
    }

    /// Write one trace unless its file already exists
    fn write_trace(&self, dir: &Path, trace: &Trace) -> io::Result<bool> {
        let path = dir.join(format!("{}.{}", trace.id(), TRACE_EXTENSION));
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(e),
        };

        if let Err(e) = file
            .write_all(encode_trace(trace).as_bytes())
            .and_then(|_| file.flush())
        {
            // Leave no partial file behind, or the next push would skip it
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(e);
        }

        Ok(true)
    }
}

impl TraceRepository for FileTraceRepository {
    fn store(&self) -> &TraceStore {
        &self.store
    }

    fn store_mut(&mut self) -> &mut TraceStore {
        &mut self.store
    }

    fn pull(&mut self) -> Result<PullReport> {
        let (tags, loaded) = self.load_all()?;

        let mut report = PullReport {
            tags,
            ..Default::default()
        };
        for (tag, trace) in loaded {
            self.persisted.insert(TraceKey::new(tag.as_str(), trace.id()));
            if self.store.insert(&tag, trace) {
                report.loaded += 1;
            } else {
                report.duplicates += 1;
            }
        }

        info!("{} from {}", report.summary(), self.root.display());
        Ok(report)
    }

    fn push(&mut self) -> Result<PushReport> {
        fs::create_dir_all(&self.root).map_err(|source| RepositoryError::CreateRoot {
            path: self.root.clone(),
            source,
        })?;

        let mut report = PushReport::default();

        for tag in self.store.tags() {
            let dir = self.root.join(tag);
            let prepared = if is_valid_tag(tag) {
                fs::create_dir_all(&dir)
            } else {
                Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("tag {:?} is not a single directory name", tag),
                ))
            };

            if let Err(e) = prepared {
                warn!("Cannot prepare tag directory {}: {}", dir.display(), e);
                for trace in self.store.traces(tag) {
                    report.failed.push(PushFailure {
                        key: TraceKey::new(tag, trace.id()),
                        error: io::Error::new(e.kind(), e.to_string()),
                    });
                }
                continue;
            }

            for trace in self.store.traces(tag) {
                let key = TraceKey::new(tag, trace.id());
                match self.write_trace(&dir, trace) {
                    Ok(true) => {
                        debug!("Wrote trace {}", key);
                        self.persisted.insert(key.clone());
                        report.written.push(key);
                    }
                    Ok(false) => {
                        debug!("Trace {} already stored, skipping", key);
                        self.persisted.insert(key.clone());
                        report.existing.push(key);
                    }
                    Err(error) => {
                        warn!("Failed to write trace {}: {}", key, error);
                        report.failed.push(PushFailure { key, error });
                    }
                }
            }
        }

        info!("{} to {}", report.summary(), self.root.display());
        Ok(report)
    }

    fn pending(&self) -> Vec<TraceKey> {
        self.store
            .keys()
            .filter(|key| !self.persisted.contains(key))
            .collect()
    }
}

/// Entries of `dir`, sorted by path
fn list_dir(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<io::Result<Vec<_>>>()?;
    paths.sort();
    Ok(paths)
}

/// A tag must name exactly one directory directly under the root
fn is_valid_tag(tag: &str) -> bool {
    let mut components = Path::new(tag).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == tag
    )
}
