//! Serde helpers for custom serialization.

use serde::{Deserialize, Deserializer};

/// Decodes `null` as the type's default value instead of failing.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serialization and deserialization for an `f64` carried as a JSON string.
///
/// Serializes as a string (`1.5` -> `"1.5"`). Accepts either a string or a
/// plain JSON number when deserializing; `null` reads as `0`. Non-finite
/// values are rejected both ways.
pub mod float_as_string {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer, ser};
    use std::fmt;

    /// Serialize an `f64` as its shortest string representation.
    ///
    /// # Errors
    /// Fails for `NaN` and infinite values, which have no JSON form.
    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !value.is_finite() {
            return Err(ser::Error::custom(format!(
                "unsupported value: {value} is not a finite number"
            )));
        }
        serializer.serialize_str(&value.to_string())
    }

    /// Deserialize an `f64` from a string or a number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FloatVisitor)
    }

    struct FloatVisitor;

    impl Visitor<'_> for FloatVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a string containing a number")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
            value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|parsed| parsed.is_finite())
                .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
        }

        fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_none<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
            Ok(value as f64)
        }
    }
}
