//! Wire-format date, timestamp and time-spent values.
//!
//! Both APIs send dates as `YYYY-MM-DD` and timestamps as RFC 3339. Timestamps
//! are always written back in UTC with a `Z` suffix, whatever offset they were
//! read with. Time-spent fields travel as `"HH:MM"`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::FreshError;

/// Date-only wire format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date, formatted as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(pub NaiveDate);

impl Date {
    /// Parses a `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Result<Self, FreshError> {
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Date)
            .map_err(|e| FreshError::validation(format!("invalid date {:?}: {}", s, e)))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Date {
    type Err = FreshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

/// A point in time, always rendered as RFC 3339 in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub DateTime<Utc>);

impl Time {
    /// Parses an RFC 3339 timestamp, or a bare date taken as midnight UTC.
    pub fn parse(s: &str) -> Result<Self, FreshError> {
        if let Ok(t) = DateTime::parse_from_rfc3339(s) {
            return Ok(Time(t.with_timezone(&Utc)));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(|d| Time(d.and_time(NaiveTime::MIN).and_utc()))
            .map_err(|e| FreshError::validation(format!("invalid time {:?}: {}", s, e)))
    }

    /// Returns the current time.
    pub fn now() -> Self {
        Time(Utc::now())
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl FromStr for Time {
    type Err = FreshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Time::parse(s)
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(t: DateTime<Utc>) -> Self {
        Time(t)
    }
}

/// Time spent on a task, in minutes. Serialized as `"HH:MM"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpent(pub u32);

impl TimeSpent {
    /// Parses `"HH:MM"` or a bare minute count such as `"360"`.
    pub fn parse(s: &str) -> Result<Self, FreshError> {
        let invalid = || FreshError::validation(format!("invalid time spent {:?}", s));

        match s.split_once(':') {
            Some((h, m)) => {
                let hours: u32 = h.trim().parse().map_err(|_| invalid())?;
                let minutes: u32 = m.trim().parse().map_err(|_| invalid())?;
                if minutes >= 60 {
                    return Err(invalid());
                }
                hours
                    .checked_mul(60)
                    .and_then(|h| h.checked_add(minutes))
                    .map(TimeSpent)
                    .ok_or_else(invalid)
            }
            None => s.trim().parse().map(TimeSpent).map_err(|_| invalid()),
        }
    }

    /// Total minutes.
    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TimeSpent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for TimeSpent {
    type Err = FreshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSpent::parse(s)
    }
}

/// Implements string-based serde for a type with `Display` + `FromStr`.
macro_rules! string_serde {
    ($ty:ty, $expecting:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct StrVisitor;

                impl<'de> Visitor<'de> for StrVisitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str($expecting)
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                        v.parse().map_err(E::custom)
                    }

                    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                        self.visit_str(&v.to_string())
                    }
                }

                deserializer.deserialize_any(StrVisitor)
            }
        }
    };
}

string_serde!(Date, "a date string formatted as YYYY-MM-DD");
string_serde!(Time, "an RFC 3339 timestamp string");
string_serde!(TimeSpent, "a time spent string formatted as HH:MM");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_round_trip() {
        for s in ["2020-01-02", "2022-02-02", "2023-03-02"] {
            assert_eq!(Date::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_parse_date_rejects_timestamp() {
        assert!(Date::parse("2023-03-02T00:00:00Z").is_err());
    }

    #[test]
    fn test_parse_time_normalizes_to_utc() {
        let cases = [
            ("2020-01-02T03:04:05Z", "2020-01-02T03:04:05Z"),
            ("2020-01-02T03:04:05+08:00", "2020-01-01T19:04:05Z"),
        ];
        for (input, want) in cases {
            assert_eq!(Time::parse(input).unwrap().to_string(), want);
        }
    }

    #[test]
    fn test_parse_time_accepts_bare_date() {
        assert_eq!(
            Time::parse("2021-06-30").unwrap().to_string(),
            "2021-06-30T00:00:00Z"
        );
    }

    #[test]
    fn test_parse_time_spent() {
        let cases = [("09:00", 540), ("08:00", 480), ("360", 360), ("01:30", 90)];
        for (input, want) in cases {
            assert_eq!(TimeSpent::parse(input).unwrap().minutes(), want, "{}", input);
        }
        assert!(TimeSpent::parse("1:75").is_err());
        assert!(TimeSpent::parse("abc").is_err());
    }

    #[test]
    fn test_time_spent_display() {
        assert_eq!(TimeSpent(540).to_string(), "09:00");
        assert_eq!(TimeSpent(125).to_string(), "02:05");
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Row {
            due: Date,
            at: Time,
            spent: TimeSpent,
            closed: Option<Time>,
        }

        let row: Row = serde_json::from_str(
            r#"{"due":"2024-05-01","at":"2024-05-01T10:00:00+02:00","spent":"01:15","closed":null}"#,
        )
        .unwrap();
        assert_eq!(row.spent.minutes(), 75);
        assert_eq!(row.closed, None);

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"due":"2024-05-01","at":"2024-05-01T08:00:00Z","spent":"01:15","closed":null}"#
        );
    }
}
