//! Integer identifiers and counts.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A 64-bit integer that decodes from a JSON number (fractional values are
/// truncated towards zero) or a base-10 string, and encodes as a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int(pub i64);

impl Int {
    /// The wrapped value.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Int> for i64 {
    fn from(value: Int) -> Self {
        value.0
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Int {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct IntVisitor;

impl<'de> Visitor<'de> for IntVisitor {
    type Value = Int;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a string holding a base-10 integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Int, E> {
        Ok(Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Int, E> {
        i64::try_from(v)
            .map(Int)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Int, E> {
        if !v.is_finite() {
            return Err(E::invalid_value(Unexpected::Float(v), &self));
        }
        Ok(Int(v.trunc() as i64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Int, E> {
        v.parse::<i64>()
            .map(Int)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Int {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IntVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<Int, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_decode_accepted_forms() {
        assert_eq!(decode(json!("5")).unwrap(), Int(5));
        assert_eq!(decode(json!(5)).unwrap(), Int(5));
        assert_eq!(decode(json!(-12)).unwrap(), Int(-12));
        assert_eq!(decode(json!("-12")).unwrap(), Int(-12));
    }

    #[test]
    fn test_floats_truncate_towards_zero() {
        assert_eq!(decode(json!(5.9)).unwrap(), Int(5));
        assert_eq!(decode(json!(-5.9)).unwrap(), Int(-5));
        assert_eq!(decode(json!(42.0)).unwrap(), Int(42));
    }

    #[test]
    fn test_encodes_as_string() {
        assert_eq!(serde_json::to_value(Int(5)).unwrap(), json!("5"));
        assert_eq!(serde_json::to_value(decode(json!(9.0)).unwrap()).unwrap(), json!("9"));
    }

    #[test]
    fn test_rejects_other_kinds() {
        assert!(decode(json!(false)).is_err());
        assert!(decode(json!("5.5")).is_err());
        assert!(decode(json!("")).is_err());
        assert!(decode(json!(u64::MAX)).is_err());
        assert!(decode(json!({"id": 1})).is_err());
    }
}
