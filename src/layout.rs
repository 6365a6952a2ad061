//! Field layout and packing for option key plaintexts.
//!
//! Both ciphers operate on fixed-width character records; this module owns
//! the offsets and the pack/unpack helpers.
//!
//! # Enigma2 record layout (16 characters)
//!
//! ```text
//! Offset  Size  Field
//!      0     2  checksum      (output-only; placeholder on encode)
//!      2     4  product code  (4 decimal digits)
//!      6     7  serial number (7 decimal digits)
//!     13     3  option number (3 decimal digits, zero padded)
//! ```
//!
//! The EnigmaC (NetTool) plaintext is the 12-character string
//! `serial(10) + option_digit + "0"` reversed end to end.

use crate::error::KeyError;

/// Width of the embedded checksum field.
pub const CHECK_SUM_SIZE: usize = 2;
/// Width of the product code field.
pub const PRODUCT_CODE_SIZE: usize = 4;
/// Width of an Enigma2 serial number.
pub const SERIAL_NUMBER_SIZE_ENIGMA2: usize = 7;
/// Width of an EnigmaC (NetTool) serial number.
pub const SERIAL_NUMBER_SIZE_ENIGMA_C: usize = 10;
/// Width of the option number field.
pub const OPTION_CODE_SIZE: usize = 3;
/// Total width of an Enigma2 key and its plaintext record.
pub const KEY_LENGTH: usize =
    CHECK_SUM_SIZE + PRODUCT_CODE_SIZE + SERIAL_NUMBER_SIZE_ENIGMA2 + OPTION_CODE_SIZE;

/// Offset of the product code field.
pub const PRODUCT_LOCATION: usize = CHECK_SUM_SIZE;
/// Offset of the serial number field.
pub const SERIAL_LOCATION: usize = CHECK_SUM_SIZE + PRODUCT_CODE_SIZE;
/// Offset of the option number field.
pub const OPTION_LOCATION: usize = CHECK_SUM_SIZE + PRODUCT_CODE_SIZE + SERIAL_NUMBER_SIZE_ENIGMA2;

/// Checks that `value` is exactly `expected` ASCII decimal digits.
pub(crate) fn validate_digits(value: &str, expected: usize) -> Result<(), KeyError> {
    let got = value.chars().count();
    if got != expected {
        return Err(KeyError::InvalidLength { expected, got });
    }
    for (position, symbol) in value.chars().enumerate() {
        if !symbol.is_ascii_digit() {
            return Err(KeyError::InvalidSymbol { position, symbol });
        }
    }
    Ok(())
}

/// Builds the reversed EnigmaC plaintext for a NetTool serial and option.
///
/// Packs `serial + option + "0"` and reverses the whole string, matching
/// the layout the NetTool firmware expects before encryption.
pub fn nettool_plaintext(serial: &str, option: u8) -> Result<String, KeyError> {
    validate_digits(serial, SERIAL_NUMBER_SIZE_ENIGMA_C)?;
    if option > 9 {
        return Err(KeyError::OptionOutOfRange {
            value: option as u32,
            max: 9,
        });
    }
    Ok(format!("{serial}{option}0").chars().rev().collect())
}

/// Builds the 16-character Enigma2 plaintext record.
///
/// The two checksum positions are filled with `"00"` placeholders; the
/// encoder overwrites them with the derived checksum digits.
pub fn enigma2_record(product_code: &str, serial: &str, option: u16) -> Result<String, KeyError> {
    validate_digits(product_code, PRODUCT_CODE_SIZE)?;
    validate_digits(serial, SERIAL_NUMBER_SIZE_ENIGMA2)?;
    if option > 999 {
        return Err(KeyError::OptionOutOfRange {
            value: option as u32,
            max: 999,
        });
    }
    Ok(format!("00{product_code}{serial}{option:03}"))
}

/// Fields unpacked from a decrypted Enigma2 record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedKey {
    /// 4-digit product code.
    pub product_code: String,
    /// 7-digit serial number.
    pub serial_number: String,
    /// Option number parsed from the 3-digit field.
    pub option_number: u16,
}

impl DecodedKey {
    /// Unpacks a decrypted 16-character record into its fields.
    ///
    /// The record must already have passed checksum verification; the two
    /// checksum positions are skipped, not interpreted.
    pub fn from_record(record: &str) -> Result<Self, KeyError> {
        let got = record.chars().count();
        if got != KEY_LENGTH {
            return Err(KeyError::InvalidLength {
                expected: KEY_LENGTH,
                got,
            });
        }
        if let Some((position, symbol)) = record.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
            return Err(KeyError::InvalidSymbol { position, symbol });
        }
        let product_code = record[PRODUCT_LOCATION..PRODUCT_LOCATION + PRODUCT_CODE_SIZE].to_string();
        let serial_number =
            record[SERIAL_LOCATION..SERIAL_LOCATION + SERIAL_NUMBER_SIZE_ENIGMA2].to_string();
        let option_field = &record[OPTION_LOCATION..OPTION_LOCATION + OPTION_CODE_SIZE];
        let option_number = option_field.parse::<u16>().map_err(|_| {
            // first non-digit character in the option field
            let (position, symbol) = option_field
                .chars()
                .enumerate()
                .find(|(_, c)| !c.is_ascii_digit())
                .map(|(i, c)| (OPTION_LOCATION + i, c))
                .unwrap_or((OPTION_LOCATION, '?'));
            KeyError::InvalidSymbol { position, symbol }
        })?;
        Ok(DecodedKey {
            product_code,
            serial_number,
            option_number,
        })
    }
}

/// Formats a key in 4-character display groups, e.g. `5dab ade1 12dd`.
pub fn format_grouped(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    chars
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_widths_sum_to_key_length() {
        assert_eq!(
            CHECK_SUM_SIZE + PRODUCT_CODE_SIZE + SERIAL_NUMBER_SIZE_ENIGMA2 + OPTION_CODE_SIZE,
            KEY_LENGTH
        );
        assert_eq!(KEY_LENGTH, 16);
    }

    #[test]
    fn test_nettool_plaintext_reverses() {
        let plain = nettool_plaintext("1234567890", 2).unwrap();
        assert_eq!(plain, "020987654321");
    }

    #[test]
    fn test_nettool_plaintext_rejects_bad_serial() {
        assert_eq!(
            nettool_plaintext("12345", 0),
            Err(KeyError::InvalidLength {
                expected: 10,
                got: 5
            })
        );
        assert!(matches!(
            nettool_plaintext("12345678x0", 0),
            Err(KeyError::InvalidSymbol {
                position: 8,
                symbol: 'x'
            })
        ));
    }

    #[test]
    fn test_nettool_plaintext_rejects_bad_option() {
        assert_eq!(
            nettool_plaintext("1234567890", 10),
            Err(KeyError::OptionOutOfRange { value: 10, max: 9 })
        );
    }

    #[test]
    fn test_enigma2_record_packing() {
        let record = enigma2_record("6963", "1234567", 7).unwrap();
        assert_eq!(record, "0069631234567007");
    }

    #[test]
    fn test_enigma2_record_rejects_wide_option() {
        assert_eq!(
            enigma2_record("6963", "1234567", 1000),
            Err(KeyError::OptionOutOfRange {
                value: 1000,
                max: 999
            })
        );
    }

    #[test]
    fn test_decoded_key_from_record() {
        let decoded = DecodedKey::from_record("9069630000607007").unwrap();
        assert_eq!(decoded.product_code, "6963");
        assert_eq!(decoded.serial_number, "0000607");
        assert_eq!(decoded.option_number, 7);
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped("5dabade112dd"), "5dab ade1 12dd");
        assert_eq!(format_grouped("6406257948597747"), "6406 2579 4859 7747");
    }
}
