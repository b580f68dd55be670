//! [`NullBytes`] — the nullable byte-sequence holder.

use nullable_driver::{convert, ConversionError, DriverValue, Scan, ToDriverValue};

use crate::codec::{JsonTokenDecode, JsonTokenEncode, TextDecode, TextEncode, NULL_TOKEN};

/// A nullable byte sequence.
///
/// `valid == false` means logically null: whatever stale bytes remain in
/// `bytes` are never observable through any adapter. The default value is
/// the null holder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NullBytes {
    pub bytes: Vec<u8>,
    pub valid: bool,
}

impl NullBytes {
    /// Creates a holder with exactly the given state, no inference.
    pub fn new(bytes: Vec<u8>, valid: bool) -> Self {
        Self { bytes, valid }
    }

    /// Creates a holder that is null if `bytes` is empty.
    ///
    /// Emptiness and absence are collapsed here as a convenience; the
    /// explicit [`new`](Self::new) constructor and the decode adapters keep
    /// them distinct.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        let valid = !bytes.is_empty();
        Self::new(bytes, valid)
    }

    /// Creates a holder from an optional reference.
    ///
    /// `None` and an empty slice both yield the null holder with cleared
    /// bytes; anything else yields a valid holder owning a copy.
    pub fn from_opt_ref(bytes: Option<&[u8]>) -> Self {
        match bytes {
            Some(b) if !b.is_empty() => Self::new(b.to_vec(), true),
            _ => Self::new(Vec::new(), false),
        }
    }

    /// Replaces the held bytes and marks the holder valid unconditionally.
    pub fn set_valid(&mut self, bytes: Vec<u8>) {
        self.bytes = bytes;
        self.valid = true;
    }

    /// Returns the held bytes if valid, else `None`.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        if !self.valid {
            return None;
        }
        Some(&self.bytes)
    }

    /// Returns `true` iff the holder is null.
    ///
    /// The predicate for generic omit-if-empty serialization policies.
    pub fn is_empty(&self) -> bool {
        !self.valid
    }

    /// Captures the raw bytes of one structured-encoding scalar token.
    ///
    /// An empty span marks the holder null and clears the held bytes.
    /// Non-empty input is copied verbatim with no validation or unescaping;
    /// any JSON type's raw text, string quotes included, is accepted as an
    /// opaque token.
    pub fn decode_json_token(&mut self, raw: &[u8]) {
        self.bytes.clear();
        if raw.is_empty() {
            self.valid = false;
            return;
        }
        self.bytes.extend_from_slice(raw);
        self.valid = true;
    }

    /// Emits one structured-encoding scalar token.
    ///
    /// A null holder emits the `null` literal regardless of stale bytes; a
    /// valid holder emits its bytes verbatim, with no wrapping or escaping.
    pub fn encode_json_token(&self) -> Vec<u8> {
        if !self.valid {
            return NULL_TOKEN.to_vec();
        }
        self.bytes.clone()
    }

    /// Decodes from plain text.
    ///
    /// Empty input only flips the flag; the held bytes keep their prior
    /// value. Non-empty input is copied verbatim.
    pub fn decode_text(&mut self, text: &[u8]) {
        if text.is_empty() {
            self.valid = false;
            return;
        }
        self.bytes.clear();
        self.bytes.extend_from_slice(text);
        self.valid = true;
    }

    /// Encodes to plain text, `None` when null.
    pub fn encode_text(&self) -> Option<Vec<u8>> {
        if !self.valid {
            return None;
        }
        Some(self.bytes.clone())
    }
}

impl JsonTokenDecode for NullBytes {
    fn decode_json_token(&mut self, raw: &[u8]) {
        self.decode_json_token(raw);
    }
}

impl JsonTokenEncode for NullBytes {
    fn encode_json_token(&self) -> Vec<u8> {
        self.encode_json_token()
    }
}

impl TextDecode for NullBytes {
    fn decode_text(&mut self, text: &[u8]) {
        self.decode_text(text);
    }
}

impl TextEncode for NullBytes {
    fn encode_text(&self) -> Option<Vec<u8>> {
        self.encode_text()
    }
}

impl Scan for NullBytes {
    /// Decodes from an untyped driver value.
    ///
    /// The absence marker yields a null holder with empty (allocated)
    /// bytes. Any other value marks the holder valid before coercion, so
    /// after a coercion failure the flag is `true` and the held bytes are
    /// unspecified.
    fn scan(&mut self, value: DriverValue) -> Result<(), ConversionError> {
        if value.is_null() {
            self.bytes = Vec::new();
            self.valid = false;
            return Ok(());
        }
        self.valid = true;
        self.bytes = convert::to_bytes(value)?;
        Ok(())
    }
}

impl ToDriverValue for NullBytes {
    fn to_driver_value(&self) -> DriverValue {
        if !self.valid {
            return DriverValue::Null;
        }
        DriverValue::Bytes(self.bytes.clone())
    }
}

impl From<Option<Vec<u8>>> for NullBytes {
    fn from(opt: Option<Vec<u8>>) -> Self {
        match opt {
            Some(bytes) => Self::from_vec(bytes),
            None => Self::new(Vec::new(), false),
        }
    }
}

impl From<NullBytes> for Option<Vec<u8>> {
    fn from(held: NullBytes) -> Self {
        if !held.valid {
            return None;
        }
        Some(held.bytes)
    }
}
