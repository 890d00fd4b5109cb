use crate::error::DiffError;
use std::fmt;
use std::str::FromStr;

/// Output shape requested from [`crate::diff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Sec,
    Min,
    Hr,
    Day,
    Wk,
    Mon,
    Yr,
    Dhms,
    Detail,
}

impl FormatKind {
    pub const ALL: [FormatKind; 9] = [
        FormatKind::Sec,
        FormatKind::Min,
        FormatKind::Hr,
        FormatKind::Day,
        FormatKind::Wk,
        FormatKind::Mon,
        FormatKind::Yr,
        FormatKind::Dhms,
        FormatKind::Detail,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            FormatKind::Sec => "sec",
            FormatKind::Min => "min",
            FormatKind::Hr => "hr",
            FormatKind::Day => "day",
            FormatKind::Wk => "wk",
            FormatKind::Mon => "mon",
            FormatKind::Yr => "yr",
            FormatKind::Dhms => "dhms",
            FormatKind::Detail => "detail",
        }
    }

    pub fn tags() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.tag()).collect()
    }

    /// True for the kinds that render as a number rather than a string.
    pub fn is_numeric(self) -> bool {
        !matches!(self, FormatKind::Dhms | FormatKind::Detail)
    }
}

impl Default for FormatKind {
    fn default() -> Self {
        FormatKind::Sec
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FormatKind {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.tag() == s)
            .ok_or_else(|| DiffError::InvalidFormat {
                given: s.to_owned(),
                accepted: Self::tags(),
            })
    }
}
