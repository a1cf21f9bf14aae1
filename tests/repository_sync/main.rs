//! Repository Sync Integration Tests
//!
//! Tests for pull/push against a real directory tree: round trips,
//! never-overwrite, dedup, tag isolation, capture-to-disk, malformed files.

mod common;

mod capture;
mod dedup;
mod malformed;
mod never_overwrite;
mod round_trip;
