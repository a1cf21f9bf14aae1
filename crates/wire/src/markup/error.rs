//! Trace decoding errors

use thiserror::Error;

/// A trace document that could not be decoded
///
/// Every variant is fatal for the document: the decoder never returns a
/// partially built trace.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MalformedTraceError {
    /// Input ended inside markup
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// Input is not well-formed markup
    #[error("invalid markup at byte {offset}: {message}")]
    Syntax {
        /// Byte offset of the problem
        offset: usize,
        /// What was wrong
        message: String,
    },

    /// Document element is not `<trace>`
    #[error("unexpected root element <{0}>, expected <trace>")]
    UnexpectedRoot(String),

    /// Root has no `ms` attribute
    #[error("trace has no ms attribute")]
    MissingId,

    /// `ms` attribute is not an integer
    #[error("invalid trace ms: {0:?}")]
    InvalidId(String),

    /// Root has no `date` attribute
    #[error("trace has no date attribute")]
    MissingDate,

    /// `date` attribute is not `yyyy-MM-dd`
    #[error("invalid trace date: {0:?}")]
    InvalidDate(String),

    /// A point lacks one of x, y, t
    #[error("point {index} has no {attribute} attribute")]
    MissingPointAttribute {
        /// Position of the point in document order
        index: usize,
        /// Attribute name
        attribute: &'static str,
    },

    /// A point attribute does not parse as a number
    #[error("point {index} has invalid {attribute}: {value:?}")]
    InvalidPointAttribute {
        /// Position of the point in document order
        index: usize,
        /// Attribute name
        attribute: &'static str,
        /// Raw attribute value
        value: String,
    },
}

impl MalformedTraceError {
    pub(crate) fn syntax(offset: usize, message: impl Into<String>) -> Self {
        MalformedTraceError::Syntax {
            offset,
            message: message.into(),
        }
    }
}
