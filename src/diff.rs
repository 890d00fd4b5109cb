use crate::error::DiffError;
use crate::format::FormatKind;
use crate::instant::Instant;
use crate::span::{Span, Unit};
use std::fmt;

/// Result of a diff: a number for the unit formats, text for the breakdowns.
#[derive(Debug, Clone, PartialEq)]
pub enum DiffValue {
    Number(f64),
    Text(String),
}

impl DiffValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DiffValue::Number(n) => Some(*n),
            DiffValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DiffValue::Number(_) => None,
            DiffValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for DiffValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffValue::Number(n) => write!(f, "{}", n),
            DiffValue::Text(s) => f.write_str(s),
        }
    }
}

impl Span {
    pub fn render(&self, kind: FormatKind) -> DiffValue {
        tracing::trace!(millis = self.millis(), format = kind.tag(), "rendering span");
        match kind {
            FormatKind::Sec => DiffValue::Number(self.seconds()),
            FormatKind::Min => DiffValue::Number(self.whole(Unit::Minute)),
            FormatKind::Hr => DiffValue::Number(self.whole(Unit::Hour)),
            FormatKind::Day => DiffValue::Number(self.whole(Unit::Day)),
            FormatKind::Wk => DiffValue::Number(self.whole(Unit::Week)),
            FormatKind::Mon => DiffValue::Number(self.whole(Unit::Month)),
            FormatKind::Yr => DiffValue::Number(self.whole(Unit::Year)),
            FormatKind::Dhms => DiffValue::Text(self.dhms()),
            FormatKind::Detail => DiffValue::Text(self.detail()),
        }
    }
}

/// Difference between two timestamps rendered as `format`.
///
/// Argument order does not matter. Unparseable timestamps are not an error;
/// they yield `NaN` (or its textual equivalent). Only an unknown `format`
/// tag fails.
pub fn diff(timestamp1: &str, timestamp2: &str, format: &str) -> Result<DiffValue, DiffError> {
    let kind = format.parse::<FormatKind>()?;
    Ok(diff_with(timestamp1, timestamp2, kind))
}

pub fn diff_with(timestamp1: &str, timestamp2: &str, kind: FormatKind) -> DiffValue {
    Span::between(Instant::parse(timestamp1), Instant::parse(timestamp2)).render(kind)
}
