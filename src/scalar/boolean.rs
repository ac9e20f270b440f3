//! Boolean flags.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A boolean that decodes from a JSON boolean, a number (nonzero is true) or
/// a string holding either boolean text or an integer literal, and encodes
/// as the string `"1"` or `"0"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bool(pub bool);

impl Bool {
    /// The wrapped value.
    pub fn value(self) -> bool {
        self.0
    }
}

impl From<bool> for Bool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Bool> for bool {
    fn from(value: Bool) -> Self {
        value.0
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "1" } else { "0" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if self.0 { "1" } else { "0" })
    }
}

/// Boolean text in the spellings the API has been seen to use.
fn parse_bool_text(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

struct BoolVisitor;

impl<'de> Visitor<'de> for BoolVisitor {
    type Value = Bool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, a number, or a string holding a boolean or integer")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Bool, E> {
        Ok(Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Bool, E> {
        Ok(Bool(v != 0))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Bool, E> {
        Ok(Bool(v != 0))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Bool, E> {
        if !v.is_finite() {
            return Err(E::invalid_value(Unexpected::Float(v), &self));
        }
        Ok(Bool(v.trunc() != 0.0))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Bool, E> {
        if let Some(b) = parse_bool_text(v) {
            return Ok(Bool(b));
        }
        v.parse::<i64>()
            .map(|i| Bool(i != 0))
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BoolVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<Bool, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_truth_table_round_trips_to_canonical() {
        let cases = [
            (json!(true), "1"),
            (json!(false), "0"),
            (json!("1"), "1"),
            (json!("0"), "0"),
            (json!(1), "1"),
            (json!(0), "0"),
            (json!("true"), "1"),
            (json!("false"), "0"),
        ];
        for (raw, expected) in cases {
            let decoded = decode(raw.clone()).unwrap();
            assert_eq!(serde_json::to_value(decoded).unwrap(), json!(expected), "input {raw}");
        }
    }

    #[test]
    fn test_nonzero_is_true() {
        assert_eq!(decode(json!("7")).unwrap(), Bool(true));
        assert_eq!(decode(json!(-1)).unwrap(), Bool(true));
        assert_eq!(decode(json!(2.0)).unwrap(), Bool(true));
        assert_eq!(decode(json!(0.4)).unwrap(), Bool(false));
    }

    #[test]
    fn test_rejects_unrecognised() {
        assert!(decode(json!("yes")).is_err());
        assert!(decode(json!([true])).is_err());
        assert!(decode(json!(null)).is_err());
    }
}
