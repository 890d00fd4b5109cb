//! Absolute difference between two timestamps, rendered as seconds, a whole
//! count of some larger unit, or an English breakdown.
//!
//! ```
//! use timediff::{diff, DiffValue};
//!
//! let v = diff("2024-01-01T00:00:00Z", "2024-01-03T01:02:03Z", "dhms").unwrap();
//! assert_eq!(v, DiffValue::Text("2 Days, 1 Hour, 2 Minutes, 3 Seconds".into()));
//! ```

mod diff;
mod error;
mod format;
mod instant;
pub mod logging;
mod span;

pub use crate::diff::{diff, diff_with, DiffValue};
pub use crate::error::DiffError;
pub use crate::format::FormatKind;
pub use crate::instant::Instant;
pub use crate::span::{Span, Unit};
