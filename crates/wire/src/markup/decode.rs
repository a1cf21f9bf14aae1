//! Trace decoding
//!
//! Decoding is all-or-nothing: every attribute is validated before the
//! [`Trace`] is assembled. The `date` attribute must be exactly
//! `yyyy-MM-dd` with zero-padded fields.

use super::error::MalformedTraceError;
use super::parser::{parse_document, Element};
use chrono::NaiveDate;
use pathcollector_core::{Point, Trace, DATE_FORMAT};

/// Decode a trace from markup
pub fn decode_trace(text: &str) -> Result<Trace, MalformedTraceError> {
    let root = parse_document(text)?;
    if root.name != "trace" {
        return Err(MalformedTraceError::UnexpectedRoot(root.name));
    }

    let id = match root.attribute("ms") {
        None => return Err(MalformedTraceError::MissingId),
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| MalformedTraceError::InvalidId(raw.to_string()))?,
    };

    let date = match root.attribute("date") {
        None => return Err(MalformedTraceError::MissingDate),
        Some(raw) if is_day_format(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| MalformedTraceError::InvalidDate(raw.to_string()))?,
        Some(raw) => return Err(MalformedTraceError::InvalidDate(raw.to_string())),
    };

    let points = root
        .descendants("point")
        .into_iter()
        .enumerate()
        .map(|(index, element)| decode_point(index, element))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Trace::from_parts(id, date, points))
}

/// `dddd-dd-dd`; chrono alone accepts unpadded and space-prefixed fields
fn is_day_format(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn decode_point(index: usize, element: &Element) -> Result<Point, MalformedTraceError> {
    let x = point_attribute::<f32>(index, element, "x")?;
    let y = point_attribute::<f32>(index, element, "y")?;
    let t = point_attribute::<i64>(index, element, "t")?;
    Ok(Point::new(x, y, t))
}

fn point_attribute<T: std::str::FromStr>(
    index: usize,
    element: &Element,
    attribute: &'static str,
) -> Result<T, MalformedTraceError> {
    let raw = element
        .attribute(attribute)
        .ok_or(MalformedTraceError::MissingPointAttribute { index, attribute })?;
    raw.parse::<T>()
        .map_err(|_| MalformedTraceError::InvalidPointAttribute {
            index,
            attribute,
            value: raw.to_string(),
        })
}
