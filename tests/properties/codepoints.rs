//! Property tests for code-point key encoding.

use proptest::prelude::*;
use unicode_normalization::UnicodeNormalization;

use emojicon::codepoints::encode;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `encode` never panics on arbitrary input.
    #[test]
    fn property_encode_never_panics(input in "(?s).{0,64}") {
        let _ = encode(&input);
    }

    /// PROPERTY: a successful encoding is well-formed: lowercase hex
    /// segments joined by `-`, one per NFC scalar value, in order.
    #[test]
    fn property_encode_key_shape(input in "\\PC{1,16}") {
        let nfc: Vec<char> = input.nfc().collect();
        let key = encode(&input).expect("non-empty input encodes");
        let segments: Vec<&str> = key.split('-').collect();

        prop_assert_eq!(segments.len(), nfc.len());
        for (segment, c) in segments.iter().zip(&nfc) {
            prop_assert!(!segment.is_empty());
            prop_assert!(segment.chars().all(|d| d.is_ascii_hexdigit() && !d.is_ascii_uppercase()));
            let value = u32::from_str_radix(segment, 16).expect("hex segment parses");
            prop_assert_eq!(value, *c as u32);
        }
    }

    /// PROPERTY: encoding is idempotent under repeated NFC normalization.
    #[test]
    fn property_encode_stable_under_nfc(input in "\\PC{1,16}") {
        let normalized: String = input.nfc().collect();
        prop_assert_eq!(encode(&input).unwrap(), encode(&normalized).unwrap());
    }
}
