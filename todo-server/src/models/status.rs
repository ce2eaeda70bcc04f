//! Allowed todo status values

use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Status a stored todo may carry.
///
/// Stored as plain text; matching is exact (case-sensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Open,
    InProgress,
    Done,
}

impl Status {
    const ALL: [Status; 3] = [Status::Open, Status::InProgress, Status::Done];

    /// Text stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// All accepted status strings, in declaration order.
    pub fn allowed() -> Vec<&'static str> {
        Self::ALL.iter().map(Status::as_str).collect()
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "status" });
        }

        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidVariant {
                field: "status",
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
