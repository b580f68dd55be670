//! Nullable byte-sequence holder.
//!
//! [`NullBytes`] holds a raw byte sequence plus a validity flag and adapts
//! that one piece of state to three serialization boundaries:
//!
//! - a structured (JSON-like) encoding, where a scalar token is captured and
//!   emitted as opaque bytes ([`JsonTokenDecode`] / [`JsonTokenEncode`])
//! - a plain-text encoding, where absence is distinguishable from an encoded
//!   empty value ([`TextDecode`] / [`TextEncode`])
//! - a relational-storage driver, where absence is the driver's `NULL`
//!   marker ([`Scan`] / [`ToDriverValue`])
//!
//! # Example
//!
//! ```
//! use nullable_bytes::NullBytes;
//!
//! let held = NullBytes::from_vec(b"{\"a\":1}".to_vec());
//! assert_eq!(held.encode_json_token(), b"{\"a\":1}");
//!
//! let absent = NullBytes::from_vec(Vec::new());
//! assert_eq!(absent.encode_json_token(), b"null");
//! assert_eq!(absent.encode_text(), None);
//! ```

mod codec;
mod null_bytes;
mod serde_impl;

pub use codec::{JsonTokenDecode, JsonTokenEncode, TextDecode, TextEncode, NULL_TOKEN};
pub use null_bytes::NullBytes;
pub use nullable_driver::{convert, ConversionError, DriverValue, Scan, ToDriverValue};
