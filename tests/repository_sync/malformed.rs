//! Strict pull on bad files.

use crate::common::*;

#[test]
fn non_numeric_id_is_malformed() {
    let err = Trace::from_markup(r#"<trace ms="abc" date="2020-01-01"></trace>"#).unwrap_err();
    assert_eq!(err, MalformedTraceError::InvalidId("abc".to_string()));
}

#[test]
fn malformed_file_aborts_pull_without_partial_load() {
    let root = TestRoot::new();
    let mut disk = root.repo();
    disk.add_trace(trace(1, &[]), "a");
    disk.push().unwrap();
    root.write_raw("b", "2.trc", "<trace ms=\"2\" date=\"2020-01-01\">");

    let mut repo = root.repo();
    let err = repo.pull().unwrap_err();

    assert!(matches!(err, RepositoryError::Malformed { ref path, .. } if path.ends_with("b/2.trc")));
    assert!(Error::from(err).is_malformed());
    assert!(repo.store().is_empty());
}

#[test]
fn files_directly_in_root_are_ignored() {
    let root = TestRoot::new();
    std::fs::write(root.path().join("stray.trc"), "not markup").unwrap();
    root.write_raw("a", "1.trc", &trace(1, &[(1.0, 2.0, 3)]).to_markup());

    let mut repo = root.repo();
    let report = repo.pull().unwrap();

    assert_eq!(report.loaded, 1);
    assert_eq!(repo.store().get("a", 1).unwrap().points()[0], Point::new(1.0, 2.0, 3));
}
