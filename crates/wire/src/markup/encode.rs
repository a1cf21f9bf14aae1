//! Trace encoding
//!
//! Layout, one element per line:
//!
//! ```text
//! <trace ms="1000" date="2020-01-01">
//! <point x="0.0" y="0.0" t="0"/>
//! </trace>
//! ```
//!
//! Finite coordinates decode to the identical `f32`. Non-finite ones are
//! written as `NaN`, `inf` or `-inf` and decode to the same class of value,
//! but a trace holding a `NaN` never compares equal to itself.

use pathcollector_core::Trace;
use std::fmt::Write;

/// Encode a trace as markup
pub fn encode_trace(trace: &Trace) -> String {
    let mut out = String::with_capacity(64 + trace.len() * 40);

    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        r#"<trace ms="{}" date="{}">"#,
        trace.id(),
        trace.formatted_date()
    );
    for point in trace.points() {
        let _ = writeln!(
            out,
            r#"<point x="{}" y="{}" t="{}"/>"#,
            format_coordinate(point.x),
            format_coordinate(point.y),
            point.t
        );
    }
    out.push_str("</trace>");

    out
}

/// Format a coordinate so it parses back to the same `f32`
///
/// Whole numbers keep a decimal point ("10.0" rather than "10").
fn format_coordinate(value: f32) -> String {
    let s = value.to_string();
    if !value.is_finite() || s.contains('.') || s.contains('e') || s.contains('E') {
        s
    } else {
        format!("{}.0", s)
    }
}
