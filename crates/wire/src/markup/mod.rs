//! Markup encoding for traces
//!
//! - [`encode_trace`] writes the canonical layout
//! - [`decode_trace`] accepts any well-formed document whose root is
//!   `<trace>` and collects `<point>` elements at any depth

mod decode;
mod encode;
mod error;
mod parser;

pub use decode::decode_trace;
pub use encode::encode_trace;
pub use error::MalformedTraceError;

use pathcollector_core::Trace;

/// Markup conversions on [`Trace`]
pub trait TraceMarkup: Sized {
    /// Encode as markup
    fn to_markup(&self) -> String;

    /// Decode from markup
    fn from_markup(text: &str) -> Result<Self, MalformedTraceError>;
}

impl TraceMarkup for Trace {
    fn to_markup(&self) -> String {
        encode_trace(self)
    }

    fn from_markup(text: &str) -> Result<Self, MalformedTraceError> {
        decode_trace(text)
    }
}
