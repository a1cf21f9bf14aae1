//! Touch events to files on disk.

use crate::common::*;

#[test]
fn session_scenario_survives_disk() {
    let clock = FixedClock::new(1000, date());
    let mut session = TracingSession::with_clock(&clock);
    session.begin().unwrap();
    session.move_to(0.0, 0.0).unwrap();
    clock.set(1005);
    session.move_to(10.0, 0.0).unwrap();
    clock.set(1012);
    session.move_to(10.0, 10.0).unwrap();
    session.end().unwrap();
    let trace = session.into_trace().unwrap();

    let root = TestRoot::new();
    let mut repo = root.repo();
    repo.add_trace(trace, "0");
    repo.push().unwrap();

    let mut fresh = root.repo();
    fresh.pull().unwrap();
    let loaded = fresh.store().get("0", 1000).unwrap();
    let offsets: Vec<i64> = loaded.points().iter().map(|p| p.t).collect();
    assert_eq!(offsets, vec![0, 5, 12]);
    assert_eq!(loaded.points()[2], Point::new(10.0, 10.0, 12));
}

#[test]
fn collector_rotates_tags_on_disk() {
    let root = TestRoot::new();
    let clock = FixedClock::new(0, date());
    let config = CollectorConfig::new(root.path()).with_tag_cycle(2);
    let mut collector = TraceCollector::with_clock(root.repo(), &config, &clock);

    for start in [100, 200, 300] {
        clock.set(start);
        collector.touch_start(0.0, 0.0, start).unwrap();
        collector.touch_move(20.0, 0.0, start + 8).unwrap();
        collector.touch_up(start + 16).unwrap();
    }
    let report = collector.push().unwrap();

    assert_eq!(report.written.len(), 3);
    assert!(root.file("0", 100).is_file());
    assert!(root.file("1", 200).is_file());
    assert!(root.file("0", 300).is_file());

    let mut fresh = root.repo();
    fresh.pull().unwrap();
    let suite = ClassifierTestSuite::from_store(fresh.store());
    assert_eq!(suite.len(), 3);
}
