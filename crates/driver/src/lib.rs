//! Storage-driver boundary for nullable scalar holders.
//!
//! A relational driver hands rows back as untyped values and accepts untyped
//! values for parameters. This crate models that exchange:
//!
//! - [`DriverValue`] - the untyped value, with [`DriverValue::Null`] as the
//!   absence marker (SQL `NULL`)
//! - [`convert::to_bytes`] - best-effort coercion of a driver value into a
//!   raw byte sequence
//! - [`Scan`] / [`ToDriverValue`] - the decode/encode trait pair a nullable
//!   holder implements to ride the driver boundary
//!
//! # Example
//!
//! ```
//! use nullable_driver::{convert, DriverValue};
//!
//! let bytes = convert::to_bytes(DriverValue::Integer(42)).unwrap();
//! assert_eq!(bytes, b"42");
//!
//! assert!(convert::to_bytes(DriverValue::Null).is_err());
//! ```

pub mod convert;
mod error;
mod value;

pub use error::ConversionError;
pub use value::DriverValue;

/// Decodes a holder in place from an untyped driver value.
///
/// The absence marker maps to the holder's null state. Any other value is
/// coerced through [`convert::to_bytes`]; a coercion failure propagates to
/// the caller unswallowed.
pub trait Scan {
    fn scan(&mut self, value: DriverValue) -> Result<(), ConversionError>;
}

/// Encodes a holder as a driver-native value.
///
/// A null holder yields the absence marker, never raw bytes.
pub trait ToDriverValue {
    fn to_driver_value(&self) -> DriverValue;
}
