//! JSON support for [`Secret`].
//!
//! A secret serializes as a bare JSON string holding its hint, so a `Secret`
//! field inside a larger struct shows up as `"field": "*****"`. Parsing
//! accepts only JSON strings.
//!
//! Two entry points exist for the parse direction:
//!
//! - `serde::Deserialize` builds a brand new secret with the default hint.
//! - [`Secret::unmarshal_json`] fills an existing secret and keeps its hint.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::{error::ParseError, secret::Secret};

impl Secret {
    /// Returns the hint encoded as a JSON string literal, quotes included.
    #[must_use]
    pub fn marshal_json(&self) -> Vec<u8> {
        JsonValue::String(self.hint().to_owned())
            .to_string()
            .into_bytes()
    }

    /// Decodes a JSON string literal and stores it as the new secret value.
    ///
    /// The current hint carries over, as with [`Secret::unmarshal_text`]. On
    /// error `self` is left untouched.
    pub fn unmarshal_json(&mut self, bytes: &[u8]) -> Result<(), ParseError> {
        let value: String = serde_json::from_slice(bytes)?;
        self.unmarshal_text(&value);
        Ok(())
    }
}

impl Serialize for Secret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.hint())
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Secret::new)
    }
}
