//! Classifier evaluation.
//!
//! Traces stored under a numeric tag are labelled examples: the tag is the
//! class the gesture was drawn as. [`ClassifierTestSuite`] collects those
//! examples from a [`TraceStore`] and scores any [`Classifier`] against them.
//!
//! ```
//! use pathcollector::{ClassifierTestSuite, RandomClassifier, TraceStore};
//!
//! let suite = ClassifierTestSuite::from_store(&TraceStore::new());
//! let report = suite.run(&mut RandomClassifier::seeded(10, 7));
//! assert_eq!(report.passed_percentage(), 0.0);
//! ```

use pathcollector_core::Trace;
use pathcollector_storage::TraceStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

/// Assigns a class to a trace.
pub trait Classifier {
    /// Predicted class for `trace`
    fn classify(&mut self, trace: &Trace) -> u32;
}

/// Baseline that guesses uniformly among `classes` classes.
#[derive(Debug, Clone)]
pub struct RandomClassifier {
    rng: StdRng,
    classes: u32,
}

impl RandomClassifier {
    /// Guess among `0..classes` using OS entropy.
    pub fn new(classes: u32) -> Self {
        RandomClassifier {
            rng: StdRng::from_entropy(),
            classes: classes.max(1),
        }
    }

    /// Reproducible classifier.
    pub fn seeded(classes: u32, seed: u64) -> Self {
        RandomClassifier {
            rng: StdRng::seed_from_u64(seed),
            classes: classes.max(1),
        }
    }
}

impl Classifier for RandomClassifier {
    fn classify(&mut self, _trace: &Trace) -> u32 {
        self.rng.gen_range(0..self.classes)
    }
}

/// Outcome of one evaluation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationReport {
    /// Correct predictions
    pub passed: usize,
    /// Wrong predictions
    pub failed: usize,
}

impl EvaluationReport {
    /// Number of cases scored
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Share of correct predictions in percent, 0 for an empty run
    pub fn passed_percentage(&self) -> f64 {
        percentage(self.passed, self.total())
    }

    /// Share of wrong predictions in percent, 0 for an empty run
    pub fn failed_percentage(&self) -> f64 {
        percentage(self.failed, self.total())
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}

/// Labelled traces to score classifiers against.
#[derive(Debug, Clone, Default)]
pub struct ClassifierTestSuite {
    cases: Vec<(u32, Trace)>,
}

impl ClassifierTestSuite {
    /// Empty suite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every trace in `store` whose tag parses as a class number.
    ///
    /// Traces under other tags are skipped.
    pub fn from_store(store: &TraceStore) -> Self {
        let mut suite = Self::new();
        for tag in store.tags() {
            let label = match tag.parse::<u32>() {
                Ok(label) => label,
                Err(_) => {
                    warn!("Skipping tag {:?}: not a class number", tag);
                    continue;
                }
            };
            for trace in store.traces(tag) {
                suite.add_case(label, trace.clone());
            }
        }
        debug!("Loaded {} evaluation cases", suite.len());
        suite
    }

    /// Add a labelled trace.
    pub fn add_case(&mut self, label: u32, trace: Trace) {
        self.cases.push((label, trace));
    }

    /// Number of cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// True if there is nothing to score.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Classify each case once and count the hits.
    pub fn run(&self, classifier: &mut impl Classifier) -> EvaluationReport {
        let mut report = EvaluationReport::default();
        for (label, trace) in &self.cases {
            if classifier.classify(trace) == *label {
                report.passed += 1;
            } else {
                report.failed += 1;
            }
        }
        report
    }
}
