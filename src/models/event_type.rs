use serde::Serialize;
use std::fmt;

/// Kind of a clock event.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClockType {
    In,
    Out,
}

impl ClockType {
    /// Parse the free-text word given to the `clock` command.
    ///
    /// `in` and `back` clock in; `out`, `leave`, `break` and `lunch` clock out.
    pub fn from_command(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "in" | "back" => Some(Self::In),
            "out" | "leave" | "break" | "lunch" => Some(Self::Out),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClockType::In => "in",
            ClockType::Out => "out",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(ClockType::In),
            "out" => Some(ClockType::Out),
            _ => None,
        }
    }
}

impl fmt::Display for ClockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
