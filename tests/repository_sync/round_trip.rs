//! Push then pull reproduces the store.

use crate::common::*;

#[test]
fn push_then_pull_reproduces_store() {
    let root = TestRoot::new();
    let mut repo = root.repo();
    repo.add_trace(trace(1000, &[(0.0, 0.0, 0), (10.0, 0.0, 5)]), "0");
    repo.add_trace(trace(2000, &[(1.5, -2.25, 0)]), "0");
    repo.add_trace(trace(3000, &[]), "circle");

    let report = repo.push().unwrap();
    assert!(report.is_complete());
    assert_eq!(report.written.len(), 3);

    let mut fresh = root.repo();
    let pulled = fresh.pull().unwrap();
    assert_eq!(pulled.tags, 2);
    assert_eq!(pulled.loaded, 3);
    assert_eq!(fresh.store(), repo.store());
}

#[test]
fn pull_missing_root_is_empty() {
    let root = TestRoot::new();
    let mut repo = FileTraceRepository::new(root.path().join("never-created"));

    let report = repo.pull().unwrap();
    assert_eq!(report, PullReport::default());
    assert!(repo.store().is_empty());
}

#[test]
fn date_and_id_preserved_even_when_they_disagree() {
    let root = TestRoot::new();
    let mut repo = root.repo();
    // 2021-06-01T00:00:00Z, stored with an unrelated calendar date
    let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
    let mut original = Trace::with_id(1_622_505_600_000, date);
    original.append_point_at(3.0, 4.0, 1_622_505_600_250);
    repo.add_trace(original.clone(), "a");
    repo.push().unwrap();

    let mut fresh = root.repo();
    fresh.pull().unwrap();
    assert_eq!(fresh.store().get("a", 1_622_505_600_000), Some(&original));
}

#[test]
fn shared_repository_syncs_across_threads() {
    let root = TestRoot::new();
    let shared = SharedRepository::new(root.repo());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                shared.add_trace(trace(i * 10, &[(0.0, 0.0, 0)]), "t");
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let report = shared.push().unwrap();
    assert_eq!(report.written.len(), 4);
    assert!(shared.pending().is_empty());
    assert!(root.file("t", 30).is_file());
}
