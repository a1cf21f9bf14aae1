//! Wire encoding for PathCollector traces
//!
//! Traces are stored as small markup documents:
//!
//! ```text
//! <trace ms="<integer>" date="<yyyy-MM-dd>">
//! <point x="<float>" y="<float>" t="<integer>"/>
//! ...
//! </trace>
//! ```
//!
//! - `ms` is the trace id (capture start, epoch milliseconds)
//! - `date` is the capture day, kept independently of `ms`
//! - each point's `t` is its offset in milliseconds from `ms`
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use pathcollector_core::Trace;
//! use pathcollector_wire::TraceMarkup;
//!
//! let mut trace = Trace::with_id(1000, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
//! trace.append_point_at(3.0, 4.0, 1010);
//!
//! let text = trace.to_markup();
//! assert_eq!(Trace::from_markup(&text).unwrap(), trace);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod markup;

pub use markup::{decode_trace, encode_trace, MalformedTraceError, TraceMarkup};
