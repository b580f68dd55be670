//! Best-effort coercion of driver values into byte sequences.

use crate::{ConversionError, DriverValue};

/// Coerces a driver value into a raw byte sequence.
///
/// Scalar kinds all have a defined rendering: byte sequences pass through,
/// text becomes its UTF-8 bytes, numbers and booleans become their decimal
/// or literal ASCII text. The absence marker and composite values have no
/// byte rendering and are rejected.
pub fn to_bytes(value: DriverValue) -> Result<Vec<u8>, ConversionError> {
    match value {
        DriverValue::Bytes(bytes) => Ok(bytes),
        DriverValue::Text(text) => Ok(text.into_bytes()),
        DriverValue::Integer(n) => Ok(n.to_string().into_bytes()),
        DriverValue::Float(n) => Ok(n.to_string().into_bytes()),
        DriverValue::Bool(true) => Ok(b"true".to_vec()),
        DriverValue::Bool(false) => Ok(b"false".to_vec()),
        rejected @ (DriverValue::Null | DriverValue::Array(_)) => Err(ConversionError {
            kind: rejected.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::to_bytes;
    use crate::DriverValue;

    #[test]
    fn scalar_kinds_coerce_to_bytes() {
        let cases: Vec<(DriverValue, &[u8])> = vec![
            (DriverValue::Bytes(b"\x00\xff".to_vec()), b"\x00\xff"),
            (DriverValue::Text("héllo".to_string()), "héllo".as_bytes()),
            (DriverValue::Integer(42), b"42"),
            (DriverValue::Integer(-7), b"-7"),
            (DriverValue::Float(0.25), b"0.25"),
            (DriverValue::Bool(true), b"true"),
            (DriverValue::Bool(false), b"false"),
        ];
        for (value, expected) in cases {
            assert_eq!(to_bytes(value).unwrap(), expected);
        }
    }

    #[test]
    fn null_and_composite_kinds_are_rejected() {
        let err = to_bytes(DriverValue::Null).unwrap_err();
        assert_eq!(err.kind, "null");

        let err = to_bytes(DriverValue::Array(vec![DriverValue::Integer(1)])).unwrap_err();
        assert_eq!(err.kind, "array");
        assert_eq!(
            err.to_string(),
            "cannot convert driver value of kind `array` to a byte sequence"
        );
    }
}
