use crate::instant::Instant;
use std::fmt;

const SECOND: f64 = 1000.;
const MINUTE: f64 = 60.;
const HOUR: f64 = 60.;
const DAY: f64 = 24.;
const WEEK: f64 = 7.;
const MONTH: f64 = 30.;
const YEAR: f64 = 365.;

/// Whole units a [`Span`] can be counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Unit::Second => "Second",
            Unit::Minute => "Minute",
            Unit::Hour => "Hour",
            Unit::Day => "Day",
            Unit::Week => "Week",
            Unit::Month => "Month",
            Unit::Year => "Year",
        })
    }
}

/// Absolute distance between two instants, in milliseconds.
///
/// Kept as `f64` so an invalid instant on either side turns into `NaN` and
/// flows through every count and breakdown instead of failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    millis: f64,
}

impl Span {
    pub fn between(a: Instant, b: Instant) -> Self {
        let millis = match (a.millis(), b.millis()) {
            (Some(a), Some(b)) => (a - b).abs() as f64,
            _ => f64::NAN,
        };
        Self { millis }
    }

    pub fn from_millis(millis: f64) -> Self {
        Self {
            millis: millis.abs(),
        }
    }

    pub fn millis(&self) -> f64 {
        self.millis
    }

    pub fn is_valid(&self) -> bool {
        !self.millis.is_nan()
    }

    /// Fractional seconds, not floored.
    pub fn seconds(&self) -> f64 {
        self.millis / SECOND
    }

    /// Floored count of `unit`s.
    ///
    /// Each step floors the previous one, so a week is seven whole days, a
    /// month thirty and a year 365.
    pub fn whole(&self, unit: Unit) -> f64 {
        let secs = self.seconds().floor();
        let mins = (secs / MINUTE).floor();
        let hours = (mins / HOUR).floor();
        let days = (hours / DAY).floor();
        match unit {
            Unit::Second => secs,
            Unit::Minute => mins,
            Unit::Hour => hours,
            Unit::Day => days,
            Unit::Week => (days / WEEK).floor(),
            Unit::Month => (days / MONTH).floor(),
            Unit::Year => (days / YEAR).floor(),
        }
    }

    /// `"2 Days, 1 Hour, 2 Minutes, 3 Seconds"`. Never empty: with nothing
    /// else to show the seconds component is kept even at zero.
    pub fn dhms(&self) -> String {
        let days = self.whole(Unit::Day);
        let hours = self.whole(Unit::Hour) % DAY;
        let mins = self.whole(Unit::Minute) % HOUR;
        let secs = self.whole(Unit::Second) % MINUTE;

        let mut parts = Vec::new();
        push_nonzero(&mut parts, days, Unit::Day);
        push_nonzero(&mut parts, hours, Unit::Hour);
        push_nonzero(&mut parts, mins, Unit::Minute);
        push_nonzero(&mut parts, secs, Unit::Second);
        if parts.is_empty() {
            parts.push(format(secs, Unit::Second));
        }
        parts.join(", ")
    }

    /// Years down to seconds. Days left over are `days % 365 % 30`, so this
    /// is empty for anything under a second.
    pub fn detail(&self) -> String {
        let days = self.whole(Unit::Day);
        let components = [
            (self.whole(Unit::Year), Unit::Year),
            (self.whole(Unit::Month) % 12., Unit::Month),
            (days % YEAR % MONTH, Unit::Day),
            (self.whole(Unit::Hour) % DAY, Unit::Hour),
            (self.whole(Unit::Minute) % HOUR, Unit::Minute),
            (self.whole(Unit::Second) % MINUTE, Unit::Second),
        ];

        let mut parts = Vec::new();
        for (n, unit) in components.iter() {
            push_nonzero(&mut parts, *n, *unit);
        }
        parts.join(", ")
    }
}

fn push_nonzero(parts: &mut Vec<String>, n: f64, unit: Unit) {
    // NaN fails this too
    if n > 0. {
        parts.push(format(n, unit));
    }
}

fn format(n: f64, unit: Unit) -> String {
    let mut word = unit.to_string();
    if n != 1. {
        word += "s"
    }
    format!("{} {}", n, word)
}

#[cfg(test)]
mod tests {
    use super::*;

    const S: f64 = 1000.;
    const M: f64 = 60. * S;
    const H: f64 = 60. * M;
    const D: f64 = 24. * H;

    #[test]
    fn between_is_symmetric() {
        let a = Instant::from_millis(1_000);
        let b = Instant::from_millis(61_500);
        assert_eq!(Span::between(a, b), Span::between(b, a));
        assert_eq!(Span::between(a, b).millis(), 60_500.);
    }

    #[test]
    fn invalid_instant_gives_nan() {
        let span = Span::between(Instant::INVALID, Instant::from_millis(0));
        assert!(!span.is_valid());
        assert!(span.seconds().is_nan());
        assert!(span.whole(Unit::Year).is_nan());
    }

    #[test]
    fn whole_units_floor() {
        let span = Span::from_millis(400. * D + 5. * H + 59. * M + 59.9 * S);
        assert_eq!(span.whole(Unit::Second), 400. * 86_400. + 5. * 3600. + 59. * 60. + 59.);
        assert_eq!(span.whole(Unit::Hour), 400. * 24. + 5.);
        assert_eq!(span.whole(Unit::Day), 400.);
        assert_eq!(span.whole(Unit::Week), 57.);
        assert_eq!(span.whole(Unit::Month), 13.);
        assert_eq!(span.whole(Unit::Year), 1.);
    }

    #[test]
    fn seconds_keep_fraction() {
        assert_eq!(Span::from_millis(1500.).seconds(), 1.5);
    }

    #[test]
    fn unit_names() {
        assert_eq!(Unit::Week.to_string(), "Week");
        assert_eq!(format(3., Unit::Week), "3 Weeks");
        assert_eq!(format(1., Unit::Month), "1 Month");
    }

    #[test]
    fn singular_only_for_one() {
        assert_eq!(format(1., Unit::Hour), "1 Hour");
        assert_eq!(format(0., Unit::Hour), "0 Hours");
        assert_eq!(format(2., Unit::Hour), "2 Hours");
    }

    #[test]
    fn dhms_skips_zero_components() {
        assert_eq!(Span::from_millis(D + 3. * S).dhms(), "1 Day, 3 Seconds");
        assert_eq!(Span::from_millis(2. * H).dhms(), "2 Hours");
        assert_eq!(Span::from_millis(999.).dhms(), "0 Seconds");
    }

    #[test]
    fn dhms_of_invalid_span() {
        let span = Span::between(Instant::INVALID, Instant::INVALID);
        assert_eq!(span.dhms(), "NaN Seconds");
        assert_eq!(span.detail(), "");
    }

    #[test]
    fn detail_uses_fixed_months_and_years() {
        // 800 days: 2 years, 26 months (2 after mod 12), 800 % 365 % 30 = 10 days
        let span = Span::from_millis(800. * D + M);
        assert_eq!(span.detail(), "2 Years, 2 Months, 10 Days, 1 Minute");
    }

    #[test]
    fn detail_empty_below_one_second() {
        assert_eq!(Span::from_millis(0.).detail(), "");
        assert_eq!(Span::from_millis(999.).detail(), "");
        assert_eq!(Span::from_millis(1000.).detail(), "1 Second");
    }
}
