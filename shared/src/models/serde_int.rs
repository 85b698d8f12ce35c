//! Lenient integer fields
//!
//! Accepts JSON integers and floats with no fractional part (`30`, `30.0`),
//! rejects everything else with serde's usual "invalid type" message.
//!
//! ```ignore
//! #[serde(default, deserialize_with = "serde_int::deserialize")]
//! pub quantity: Option<i32>,
//! ```

use std::fmt;

use serde::Deserializer;
use serde::de::{self, Unexpected, Visitor};

struct IntegralVisitor;

impl<'de> Visitor<'de> for IntegralVisitor {
    type Value = Option<i32>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        i32::try_from(v)
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i32::try_from(v)
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        let in_range = v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX);
        if v.fract() == 0.0 && in_range {
            Ok(Some(v as i32))
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }
}

/// `Option<i32>` from an integer or an integral float
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(IntegralVisitor)
}
