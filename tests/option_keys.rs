//! End-to-end tests for option key generation and validation.
//!
//! Golden vectors were produced with the original reference tool and pin
//! the exact cipher behavior; the property tests cover the full valid
//! input domain of both schemes.

use enigma_keys::{enigma2, enigma_c, layout, DecodedKey, KeyError};
use proptest::prelude::*;

// ============================================================================
// Golden vectors
// ============================================================================

#[test]
fn nettool_golden_vectors() {
    assert_eq!(
        enigma_c::generate_option_key("0003333016", 4).unwrap(),
        "5dabade112dd"
    );
    assert_eq!(
        enigma_c::generate_option_key("1234567890", 2).unwrap(),
        "5e0202020202"
    );
}

#[test]
fn enigma2_golden_vectors() {
    assert_eq!(
        enigma2::generate_option_key("6963", "0000607", 7).unwrap(),
        "6406257948597747"
    );
    assert_eq!(
        enigma2::generate_option_key("6963", "1234567", 0).unwrap(),
        "5247135901759934"
    );
}

#[test]
fn enigma2_golden_decode() {
    let decoded = enigma2::decode_option_key("6406257948597747").unwrap();
    assert_eq!(
        decoded,
        DecodedKey {
            product_code: "6963".to_string(),
            serial_number: "0000607".to_string(),
            option_number: 7,
        }
    );
}

#[test]
fn nettool_bypass_key() {
    assert!(enigma_c::check_option_key(0, "bladerules", "0000000000").unwrap());
    assert!(enigma_c::check_option_key(9, "bladerules", "9999999999").unwrap());
}

// ============================================================================
// Checksum sensitivity
// ============================================================================

/// One verified-failing substitution per position of a valid key.
///
/// A blind single-symbol flip can collide modulo 100 and still verify, so
/// the matrix pins substitutions known to fail the checksum.
#[test]
fn enigma2_single_symbol_flip_fails_checksum() {
    let key = "5247135901759934";
    let flips: [(usize, char); 16] = [
        (0, '0'),
        (1, '0'),
        (2, '0'),
        (3, '0'),
        (4, '0'),
        (5, '0'),
        (6, '0'),
        (7, '0'),
        (8, '1'),
        (9, '0'),
        (10, '0'),
        (11, '0'),
        (12, '0'),
        (13, '0'),
        (14, '0'),
        (15, '0'),
    ];
    for (position, replacement) in flips {
        let mut tampered: Vec<char> = key.chars().collect();
        assert_ne!(tampered[position], replacement);
        tampered[position] = replacement;
        let tampered: String = tampered.into_iter().collect();
        assert_eq!(
            enigma2::decrypt(&tampered),
            Err(KeyError::ChecksumMismatch),
            "flip at position {position} should fail"
        );
        assert!(!enigma2::check_option_key(0, &tampered).unwrap());
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn nettool_roundtrip(serial in "[0-9]{10}", option in 0u8..=9) {
        let key = enigma_c::generate_option_key(&serial, option).unwrap();
        prop_assert_eq!(key.chars().count(), enigma_c::KEY_LENGTH);
        prop_assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

        let plaintext = layout::nettool_plaintext(&serial, option).unwrap();
        prop_assert_eq!(enigma_c::decrypt(&key).unwrap(), plaintext);
    }

    #[test]
    fn nettool_check_accepts_matching_key(serial in "[0-9]{10}", option in 0u8..=9) {
        // A verifiable key carries reversed-serial + 2-digit option.
        let reversed: String = serial.chars().rev().collect();
        let key = enigma_c::encrypt(&format!("{reversed}{option:02}")).unwrap();
        prop_assert!(enigma_c::check_option_key(option, &key, &serial).unwrap());
    }

    #[test]
    fn enigma2_roundtrip(
        product in "[0-9]{4}",
        serial in "[0-9]{7}",
        option in 0u16..=999,
    ) {
        let key = enigma2::generate_option_key(&product, &serial, option).unwrap();
        prop_assert_eq!(key.chars().count(), layout::KEY_LENGTH);
        prop_assert!(key.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));

        let decoded = enigma2::decode_option_key(&key).unwrap();
        prop_assert_eq!(decoded.product_code, product);
        prop_assert_eq!(decoded.serial_number, serial);
        prop_assert_eq!(decoded.option_number, option);

        prop_assert!(enigma2::check_option_key(option, &key).unwrap());
    }

    #[test]
    fn enigma2_rejects_wrong_option(
        serial in "[0-9]{7}",
        option in 0u16..=998,
    ) {
        let key = enigma2::generate_option_key("6963", &serial, option).unwrap();
        prop_assert!(!enigma2::check_option_key(option + 1, &key).unwrap());
    }
}
