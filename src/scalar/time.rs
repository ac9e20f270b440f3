//! Timestamps.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Datetime layout used by older endpoints (`2014-01-01 09:30:00.000000`).
/// Carries no offset and is read as UTC.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// An absolute instant that decodes from epoch seconds (number or numeric
/// string) or from [`DATETIME_FORMAT`], and encodes as epoch seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub DateTime<Utc>);

impl Time {
    /// Build from seconds since the Unix epoch. `None` when out of range.
    pub fn from_unix(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    /// Seconds since the Unix epoch.
    pub fn unix(self) -> i64 {
        self.0.timestamp()
    }

    /// The current instant, to the resolution of the system clock.
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<Time> for DateTime<Utc> {
    fn from(value: Time) -> Self {
        value.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.unix())
    }
}

#[derive(Clone, Copy)]
struct TimeVisitor;

impl TimeVisitor {
    fn from_secs<E: de::Error>(self, secs: i64) -> Result<Time, E> {
        Time::from_unix(secs).ok_or_else(|| E::invalid_value(Unexpected::Signed(secs), &self))
    }
}

impl<'de> Visitor<'de> for TimeVisitor {
    type Value = Time;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("epoch seconds or a `YYYY-MM-DD HH:MM:SS.ffffff` datetime string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Time, E> {
        self.from_secs(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Time, E> {
        let secs = i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))?;
        self.from_secs(secs)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Time, E> {
        if !v.is_finite() {
            return Err(E::invalid_value(Unexpected::Float(v), &self));
        }
        self.from_secs(v.trunc() as i64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Time, E> {
        if let Ok(naive) = NaiveDateTime::parse_from_str(v, DATETIME_FORMAT) {
            return Ok(Time(naive.and_utc()));
        }
        match v.parse::<i64>() {
            Ok(secs) => self.from_secs(secs),
            Err(_) => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<Time, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_accepted_forms_encode_to_epoch_seconds() {
        for raw in [
            json!(1388565000),
            json!(1388565000.7),
            json!("1388565000"),
            json!("2014-01-01 08:30:00.000000"),
        ] {
            let decoded = decode(raw.clone()).unwrap();
            assert_eq!(serde_json::to_value(decoded).unwrap(), json!(1388565000), "input {raw}");
        }
    }

    #[test]
    fn test_datetime_string_is_utc() {
        let t = decode(json!("2014-01-01 00:00:00.123456")).unwrap();
        assert_eq!(t.unix(), 1388534400);
        assert_eq!(t.0.timestamp_subsec_micros(), 123456);
    }

    #[test]
    fn test_rejects_unparseable() {
        assert!(decode(json!("last tuesday")).is_err());
        assert!(decode(json!("2014-01-01T00:00:00Z")).is_err());
        assert!(decode(json!(true)).is_err());
        assert!(decode(json!(i64::MAX)).is_err());
    }

    #[test]
    fn test_from_unix() {
        let t = Time::from_unix(0).unwrap();
        assert_eq!(t, Time::default());
        assert_eq!(t.unix(), 0);
    }
}
