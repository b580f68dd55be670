//! Serde integration for [`NullBytes`].
//!
//! `serde_json`'s raw-value machinery plays the role of the embedding
//! codec: it isolates one scalar token's exact byte span and hands it to
//! the raw adapter. The `null` literal is pre-stripped to the empty span
//! here, so the adapter's empty-input convention fires at this call site.

use serde::{ser::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::null_bytes::NullBytes;

impl Serialize for NullBytes {
    /// A null holder serializes as `null`; a valid holder emits its bytes
    /// as one raw token. Unlike the raw adapter, this boundary fails if the
    /// held bytes are not one well-formed JSON token.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.valid {
            return serializer.serialize_none();
        }
        let token = std::str::from_utf8(&self.bytes).map_err(S::Error::custom)?;
        let raw = RawValue::from_string(token.to_string()).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NullBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Box<RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();
        let mut held = NullBytes::default();
        if token == "null" {
            held.decode_json_token(&[]);
        } else {
            held.decode_json_token(token.as_bytes());
        }
        Ok(held)
    }
}
