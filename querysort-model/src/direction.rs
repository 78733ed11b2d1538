use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Sort direction.
///
/// Only the exact lowercase spellings `asc` and `desc` are recognized.
/// Anything else coming from request input goes through
/// [`SortDirection::normalize`] and becomes the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Every recognized direction, ascending first.
    pub const ALL: [SortDirection; 2] = [SortDirection::Asc, SortDirection::Desc];

    /// Request-facing spelling (`asc` / `desc`).
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// SQL keyword for an `ORDER BY` term.
    pub const fn sql_keyword(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub const fn is_descending(self) -> bool {
        matches!(self, SortDirection::Desc)
    }

    /// Exact, case-sensitive match against the request spelling.
    pub fn parse_exact(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.as_str() == raw)
    }

    /// Map untrusted input onto a direction, falling back to the default.
    pub fn normalize(raw: &str) -> Self {
        Self::parse_exact(raw).unwrap_or_default()
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_exact(s)
            .ok_or_else(|| ModelError::InvalidDirection(s.to_string()))
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
