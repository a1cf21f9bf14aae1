//! Output formatting for text and JSON modes.

use pathcollector::{EvaluationReport, PushReport, Trace, TraceMarkup, TraceStore};
use serde_json::{json, Value};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

fn render(value: Value) -> String {
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

/// Every tag with its trace ids and point counts.
pub fn format_list(store: &TraceStore, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => {
            if store.is_empty() {
                return "(empty)".to_string();
            }
            let mut lines = Vec::new();
            for tag in store.tags() {
                lines.push(format!("{} ({} traces)", tag, store.tag_len(tag)));
                for trace in store.traces(tag) {
                    lines.push(format!(
                        "  {}  {}  {} points",
                        trace.id(),
                        trace.formatted_date(),
                        trace.len()
                    ));
                }
            }
            lines.join("\n")
        }
        OutputMode::Json => {
            let tags: serde_json::Map<String, Value> = store
                .tags()
                .map(|tag| {
                    let traces: Vec<Value> = store
                        .traces(tag)
                        .map(|trace| {
                            json!({
                                "id": trace.id(),
                                "date": trace.formatted_date(),
                                "points": trace.len(),
                            })
                        })
                        .collect();
                    (tag.to_string(), Value::Array(traces))
                })
                .collect();
            render(json!({ "tags": tags }))
        }
    }
}

/// One trace, as markup or JSON.
pub fn format_trace(tag: &str, trace: &Trace, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => trace.to_markup(),
        OutputMode::Json => render(json!({ "tag": tag, "trace": trace })),
    }
}

/// Outcome of a push.
pub fn format_push(report: &PushReport, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => {
            let mut lines = vec![report.summary()];
            for failure in &report.failed {
                lines.push(format!("  failed {}: {}", failure.key, failure.error));
            }
            lines.join("\n")
        }
        OutputMode::Json => {
            let keys = |keys: &[pathcollector::TraceKey]| -> Vec<String> {
                keys.iter().map(|k| k.to_string()).collect()
            };
            let failed: Vec<Value> = report
                .failed
                .iter()
                .map(|f| json!({ "key": f.key.to_string(), "error": f.error.to_string() }))
                .collect();
            render(json!({
                "written": keys(&report.written),
                "existing": keys(&report.existing),
                "failed": failed,
            }))
        }
    }
}

/// Score of the random baseline.
pub fn format_evaluation(report: &EvaluationReport, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!(
            "Random classifier: {}% success",
            report.passed_percentage()
        ),
        OutputMode::Json => render(json!({
            "classifier": "random",
            "passed": report.passed,
            "failed": report.failed,
            "total": report.total(),
            "success_percentage": report.passed_percentage(),
        })),
    }
}

/// One-line error message.
pub fn format_error(error: &pathcollector::Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("(error) {}", error),
        OutputMode::Json => json!({ "error": error.to_string() }).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pathcollector::{PushFailure, TraceKey};
    use std::io;

    fn store() -> TraceStore {
        let date = chrono_date();
        let mut store = TraceStore::new();
        let mut trace = Trace::with_id(1000, date);
        trace.append_point_at(0.0, 0.0, 1000);
        trace.append_point_at(10.0, 0.0, 1005);
        store.insert("0", trace);
        store.insert("1", Trace::with_id(2000, date));
        store
    }

    fn chrono_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
    }

    #[test]
    fn test_list_human() {
        let text = format_list(&store(), OutputMode::Human);
        assert_eq!(
            text,
            "0 (1 traces)\n  1000  2020-01-01  2 points\n1 (1 traces)\n  2000  2020-01-01  0 points"
        );
        assert_eq!(format_list(&TraceStore::new(), OutputMode::Human), "(empty)");
    }

    #[test]
    fn test_list_json() {
        let value: Value = serde_json::from_str(&format_list(&store(), OutputMode::Json)).unwrap();
        assert_eq!(value["tags"]["0"][0]["id"], 1000);
        assert_eq!(value["tags"]["0"][0]["points"], 2);
        assert_eq!(value["tags"]["1"][0]["date"], "2020-01-01");
    }

    #[test]
    fn test_trace_human_is_markup() {
        let store = store();
        let trace = store.get("0", 1000).unwrap();
        let text = format_trace("0", trace, OutputMode::Human);
        assert!(text.starts_with("<trace ms=\"1000\" date=\"2020-01-01\">"));
    }

    #[test]
    fn test_push_json() {
        let report = PushReport {
            written: vec![TraceKey::new("0", 1)],
            existing: vec![TraceKey::new("0", 2)],
            failed: vec![PushFailure {
                key: TraceKey::new("1", 3),
                error: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            }],
        };
        let value: Value = serde_json::from_str(&format_push(&report, OutputMode::Json)).unwrap();
        assert_eq!(value["written"][0], "0/1");
        assert_eq!(value["existing"][0], "0/2");
        assert_eq!(value["failed"][0]["key"], "1/3");
        assert!(format_push(&report, OutputMode::Human).contains("failed 1/3: denied"));
    }

    #[test]
    fn test_evaluation_human() {
        let report = EvaluationReport {
            passed: 1,
            failed: 3,
        };
        assert_eq!(
            format_evaluation(&report, OutputMode::Human),
            "Random classifier: 25% success"
        );
    }
}
