//! Decimal amounts (credits, unit prices).

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A decimal value that decodes from a JSON number or a numeric string and
/// always encodes as a string with two fraction digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Float64(pub f64);

impl Float64 {
    /// The wrapped value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Float64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Float64> for f64 {
    fn from(value: Float64) -> Self {
        value.0
    }
}

impl fmt::Display for Float64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Float64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct Float64Visitor;

impl<'de> Visitor<'de> for Float64Visitor {
    type Value = Float64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a string holding a decimal number")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Float64, E> {
        Ok(Float64(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Float64, E> {
        Ok(Float64(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Float64, E> {
        Ok(Float64(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Float64, E> {
        match v.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Ok(Float64(parsed)),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Float64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(Float64Visitor)
    }
}
