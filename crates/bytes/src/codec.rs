//! Codec trait pairs for the structured and plain-text boundaries.

/// The literal token a structured encoding uses for an absent value.
pub const NULL_TOKEN: &[u8; 4] = b"null";

/// Captures the raw bytes of one structured-encoding scalar token.
///
/// The caller's tokenizer isolates the token first; the adapter receives
/// exactly that byte span and performs no parsing of surrounding syntax.
/// An empty span means the token was the (pre-stripped) null literal.
/// Total: any non-empty byte content is accepted as an opaque token.
pub trait JsonTokenDecode {
    fn decode_json_token(&mut self, raw: &[u8]);
}

/// Emits one structured-encoding scalar token.
///
/// A null holder emits [`NULL_TOKEN`]; otherwise the held bytes are emitted
/// verbatim, so the holder must already contain one well-formed token.
pub trait JsonTokenEncode {
    fn encode_json_token(&self) -> Vec<u8>;
}

/// Decodes from a plain-text representation.
///
/// Empty input marks the holder null without touching the held bytes.
/// Total: no charset or format validation.
pub trait TextDecode {
    fn decode_text(&mut self, text: &[u8]);
}

/// Encodes to a plain-text representation.
///
/// `None` signals absence, distinguishable from `Some` of an empty value.
pub trait TextEncode {
    fn encode_text(&self) -> Option<Vec<u8>>;
}
