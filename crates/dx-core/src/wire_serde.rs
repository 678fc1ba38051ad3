//! Serde helpers for the diagnosis backend's wire format.
//!
//! The backend receives form values as strings (`"21"`, `"2022"`) but some
//! endpoints echo them back as JSON numbers. Use with
//! `#[serde(with = "wire_serde::number_as_string")]` on numeric fields.
//!
//! # Example
//! ```ignore
//! use dx_core::wire_serde;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     #[serde(with = "wire_serde::number_as_string")]
//!     pub age: u32,
//! }
//! ```

/// Serialize a number as its decimal string; accept either a string or a
/// JSON number when deserializing.
pub mod number_as_string {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer, de};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Number(i64),
        Text(String),
    }

    pub fn serialize<T: Display, S: Serializer>(value: &T, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(d: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let text = match StringOrNumber::deserialize(d)? {
            StringOrNumber::Number(n) => n.to_string(),
            StringOrNumber::Text(s) => s.trim().to_string(),
        };
        text.parse::<T>()
            .map_err(|e| de::Error::custom(format!("invalid number '{text}': {e}")))
    }
}
