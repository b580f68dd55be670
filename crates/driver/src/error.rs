//! Driver conversion error type.

use thiserror::Error;

/// The driver returned a value that cannot be interpreted as a byte
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert driver value of kind `{kind}` to a byte sequence")]
pub struct ConversionError {
    /// Kind tag of the rejected value, as reported by
    /// [`DriverValue::kind`](crate::DriverValue::kind).
    pub kind: &'static str,
}
