//! Timestamp value object for analysis records.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// UTC instant at which a ranking or sweep was produced.
///
/// Serializes as a full-precision RFC 3339 string; displays to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn now_lies_between_surrounding_clock_reads() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.into_inner() >= before && ts.into_inner() <= after);
    }

    #[test]
    fn keeps_sub_second_precision_when_serialized() {
        let ts = Timestamp::from(Utc.timestamp_opt(1_705_314_600, 123_000_000).unwrap());

        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();

        assert_eq!(back, ts);
    }

    #[test]
    fn displays_to_the_second() {
        let ts = Timestamp::from(Utc.timestamp_opt(1_705_314_600, 123_000_000).unwrap());
        assert_eq!(ts.to_string(), "2024-01-15T10:30:00Z");
    }

    #[test]
    fn orders_chronologically() {
        let earlier = Timestamp::from(Utc.timestamp_opt(1_000, 0).unwrap());
        let later = Timestamp::from(Utc.timestamp_opt(2_000, 0).unwrap());
        assert!(earlier < later);
    }
}
