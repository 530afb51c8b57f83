use super::timestamp::{format_utc, parse_utc};
use crate::shared::error::AuditError;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Caller-supplied instant separating "known good" releases from newer ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cutoff(DateTime<Utc>);

impl Cutoff {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn instant(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// True when `instant` is strictly after the cutoff
    pub fn is_exceeded_by(&self, instant: &DateTime<Utc>) -> bool {
        *instant > self.0
    }
}

impl FromStr for Cutoff {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_utc(s).map(Cutoff).ok_or_else(|| AuditError::InvalidCutoff {
            value: s.to_string(),
            details: "expected an RFC 3339 date-time with a timezone".to_string(),
        })
    }
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_utc(&self.0))
    }
}
