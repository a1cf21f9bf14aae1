//! In-memory tagged trace store
//!
//! Two-level ordered map: tag -> trace id -> trace. Within a tag ids are
//! unique and the first trace inserted under an id is the one kept. Tags
//! are independent, so the same id may appear under several tags.

use pathcollector_core::{Trace, TraceId};
use std::collections::BTreeMap;
use std::fmt;

/// Address of one stored trace
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TraceKey {
    /// Tag the trace is stored under
    pub tag: String,
    /// Trace id
    pub id: TraceId,
}

impl TraceKey {
    /// Build a key from a tag and an id
    pub fn new(tag: impl Into<String>, id: TraceId) -> Self {
        TraceKey {
            tag: tag.into(),
            id,
        }
    }
}

impl fmt::Display for TraceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.tag, self.id)
    }
}

/// Tag -> id -> trace map
///
/// Iteration is ordered by tag, then by id (capture order).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceStore {
    tags: BTreeMap<String, BTreeMap<TraceId, Trace>>,
}

impl TraceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `trace` under `tag` unless that tag already holds its id
    ///
    /// Returns `true` if the trace was inserted. A duplicate is dropped and
    /// the existing entry is left untouched.
    pub fn insert(&mut self, tag: &str, trace: Trace) -> bool {
        let traces = self.tags.entry(tag.to_string()).or_default();
        match traces.entry(trace.id()) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(trace);
                true
            }
        }
    }

    /// Look up one trace
    pub fn get(&self, tag: &str, id: TraceId) -> Option<&Trace> {
        self.tags.get(tag).and_then(|traces| traces.get(&id))
    }

    /// True if `tag` holds a trace with `id`
    pub fn contains(&self, tag: &str, id: TraceId) -> bool {
        self.get(tag, id).is_some()
    }

    /// Traces under `tag`, ordered by id
    pub fn traces<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a Trace> + 'a {
        self.tags.get(tag).into_iter().flat_map(|traces| traces.values())
    }

    /// All tags, in order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    /// Number of traces under `tag`
    pub fn tag_len(&self, tag: &str) -> usize {
        self.tags.get(tag).map(BTreeMap::len).unwrap_or(0)
    }

    /// Total number of traces across all tags
    pub fn len(&self) -> usize {
        self.tags.values().map(BTreeMap::len).sum()
    }

    /// True if no trace is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every `(tag, trace)` pair, ordered by tag then id
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Trace)> {
        self.tags
            .iter()
            .flat_map(|(tag, traces)| traces.values().map(move |trace| (tag.as_str(), trace)))
    }

    /// Every key, ordered by tag then id
    pub fn keys(&self) -> impl Iterator<Item = TraceKey> + '_ {
        self.iter().map(|(tag, trace)| TraceKey::new(tag, trace.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trace(id: TraceId, points: usize) -> Trace {
        let mut trace = Trace::with_id(id, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        for i in 0..points {
            trace.append_point_at(i as f32, i as f32, id + i as i64);
        }
        trace
    }

    #[test]
    fn test_insert_new_tag() {
        let mut store = TraceStore::new();
        assert!(store.insert("a", trace(1, 0)));
        assert_eq!(store.tags().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let mut store = TraceStore::new();
        assert!(store.insert("a", trace(1, 1)));
        assert!(!store.insert("a", trace(1, 5)));

        assert_eq!(store.tag_len("a"), 1);
        assert_eq!(store.get("a", 1).unwrap().len(), 1);
    }

    #[test]
    fn test_same_id_under_two_tags() {
        let mut store = TraceStore::new();
        assert!(store.insert("a", trace(1, 1)));
        assert!(store.insert("b", trace(1, 2)));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a", 1).unwrap().len(), 1);
        assert_eq!(store.get("b", 1).unwrap().len(), 2);
    }

    #[test]
    fn test_iteration_order() {
        let mut store = TraceStore::new();
        store.insert("b", trace(30, 0));
        store.insert("a", trace(20, 0));
        store.insert("a", trace(10, 0));

        let keys: Vec<String> = store.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["a/10", "a/20", "b/30"]);
        let ids: Vec<TraceId> = store.traces("a").map(Trace::id).collect();
        assert_eq!(ids, vec![10, 20]);
    }

    #[test]
    fn test_missing_tag() {
        let store = TraceStore::new();
        assert_eq!(store.traces("nope").count(), 0);
        assert_eq!(store.tag_len("nope"), 0);
        assert!(store.get("nope", 1).is_none());
        assert!(store.is_empty());
    }
}
