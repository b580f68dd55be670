//! Property tests for the adapter round-trips.

use nullable_bytes::{DriverValue, NullBytes, Scan, ToDriverValue};
use proptest::prelude::*;

proptest! {
    #[test]
    fn structured_roundtrip_for_nonempty_payloads(
        data in proptest::collection::vec(any::<u8>(), 1..128)
    ) {
        let held = NullBytes::new(data.clone(), true);
        let mut back = NullBytes::default();
        back.decode_json_token(&held.encode_json_token());
        prop_assert!(back.valid);
        prop_assert_eq!(back.bytes, data);
    }

    #[test]
    fn text_roundtrip_for_nonempty_payloads(
        data in proptest::collection::vec(any::<u8>(), 1..128)
    ) {
        let held = NullBytes::new(data.clone(), true);
        let mut back = NullBytes::default();
        back.decode_text(&held.encode_text().expect("valid holder encodes text"));
        prop_assert!(back.valid);
        prop_assert_eq!(back.bytes, data);
    }

    #[test]
    fn storage_roundtrip_for_arbitrary_payloads(
        data in proptest::collection::vec(any::<u8>(), 0..128)
    ) {
        let held = NullBytes::new(data.clone(), true);
        let mut back = NullBytes::default();
        back.scan(held.to_driver_value()).unwrap();
        prop_assert!(back.valid);
        prop_assert_eq!(back.bytes, data);
    }

    #[test]
    fn is_empty_always_mirrors_the_flag(
        data in proptest::collection::vec(any::<u8>(), 0..32),
        valid in any::<bool>()
    ) {
        let held = NullBytes::new(data, valid);
        prop_assert_eq!(held.is_empty(), !held.valid);
    }

    #[test]
    fn scan_never_yields_bytes_for_the_absence_marker(
        stale in proptest::collection::vec(any::<u8>(), 0..32)
    ) {
        let mut held = NullBytes::new(stale, true);
        held.scan(DriverValue::Null).unwrap();
        prop_assert!(!held.valid);
        prop_assert!(held.bytes.is_empty());
        prop_assert_eq!(held.to_driver_value(), DriverValue::Null);
    }
}
