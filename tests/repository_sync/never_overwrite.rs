//! Push never replaces a stored file.

use crate::common::*;

#[test]
fn existing_file_is_not_overwritten() {
    let root = TestRoot::new();

    let mut first = root.repo();
    first.add_trace(trace(1, &[(1.0, 1.0, 0)]), "a");
    first.push().unwrap();
    let before = std::fs::read_to_string(root.file("a", 1)).unwrap();

    let mut second = root.repo();
    second.add_trace(trace(1, &[(99.0, 99.0, 0), (98.0, 98.0, 1)]), "a");
    let report = second.push().unwrap();

    assert!(report.written.is_empty());
    assert_eq!(report.existing, vec![TraceKey::new("a", 1)]);
    assert_eq!(std::fs::read_to_string(root.file("a", 1)).unwrap(), before);
}

#[test]
fn same_id_in_another_tag_is_written() {
    let root = TestRoot::new();
    let mut repo = root.repo();
    repo.add_trace(trace(5, &[]), "a");
    repo.push().unwrap();

    repo.add_trace(trace(5, &[]), "b");
    let report = repo.push().unwrap();

    assert_eq!(report.written, vec![TraceKey::new("b", 5)]);
    assert!(root.file("a", 5).is_file());
    assert!(root.file("b", 5).is_file());
}

#[test]
fn second_push_writes_nothing_new() {
    let root = TestRoot::new();
    let mut repo = root.repo();
    repo.add_trace(trace(1, &[]), "a");
    repo.add_trace(trace(2, &[]), "a");
    assert_eq!(repo.pending().len(), 2);

    repo.push().unwrap();
    assert!(repo.pending().is_empty());

    let report = repo.push().unwrap();
    assert!(report.written.is_empty());
    assert_eq!(report.existing.len(), 2);
}
