//! First write wins within a tag.

use crate::common::*;

#[test]
fn duplicate_add_keeps_first() {
    let root = TestRoot::new();
    let mut repo = root.repo();

    assert!(repo.add_trace(trace(7, &[(1.0, 1.0, 0)]), "x"));
    assert!(!repo.add_trace(trace(7, &[(2.0, 2.0, 0)]), "x"));

    let kept = repo.store().get("x", 7).unwrap();
    assert_eq!(kept.points()[0].x, 1.0);
    assert_eq!(repo.store().len(), 1);
}

#[test]
fn pull_does_not_replace_memory() {
    let root = TestRoot::new();
    let mut disk = root.repo();
    disk.add_trace(trace(7, &[(1.0, 1.0, 0)]), "x");
    disk.push().unwrap();

    let mut repo = root.repo();
    repo.add_trace(trace(7, &[(2.0, 2.0, 0)]), "x");
    let report = repo.pull().unwrap();

    assert_eq!(report.loaded, 0);
    assert_eq!(report.duplicates, 1);
    assert_eq!(repo.store().get("x", 7).unwrap().points()[0].x, 2.0);
}

#[test]
fn pulling_twice_is_idempotent() {
    let root = TestRoot::new();
    let mut disk = root.repo();
    disk.add_trace(trace(1, &[]), "a");
    disk.add_trace(trace(1, &[]), "b");
    disk.push().unwrap();

    let mut repo = root.repo();
    repo.pull().unwrap();
    let second = repo.pull().unwrap();

    assert_eq!(second.loaded, 0);
    assert_eq!(second.duplicates, 2);
    assert_eq!(repo.store().len(), 2);
}
