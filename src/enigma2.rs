//! Enigma2C cipher — 16-character alphanumeric option keys.
//!
//! Ports the `Enigma2C` functions from the original Python key tool to Rust.
//! The cipher works over the fixed record layout in [`crate::layout`]
//! (2-digit checksum, 4-digit product code, 7-digit serial, 3-digit option)
//! with two independent rotors: one over the 10 digit symbols and one over
//! the 26 uppercase letter symbols.
//!
//! A weighted polynomial checksum is derived from the record, embedded in the
//! first two positions, and used to seed the substitution chain; decoding
//! recomputes it and rejects the key on mismatch rather than returning a
//! partially decoded record.

use crate::error::KeyError;
use crate::layout::{self, DecodedKey, KEY_LENGTH, OPTION_CODE_SIZE, OPTION_LOCATION};
use crate::rotor::{
    ENIGMA2_D_ROTOR_10, ENIGMA2_D_ROTOR_26, ENIGMA2_E_ROTOR_10, ENIGMA2_E_ROTOR_26,
};

/// Bias added before subtracting the running sum so the rotor index never
/// goes negative. The running sum over a full record stays well below this.
pub const MAX_CHECK_SUM: u32 = 26000;

/// One symbol classified into its alphabet.
#[derive(Clone, Copy)]
enum Symbol {
    /// Digit `0-9`, value 0-9.
    Digit(u32),
    /// Letter `A-Z`, value 0-25.
    Letter(u32),
}

impl Symbol {
    fn classify(symbol: char, position: usize) -> Result<Self, KeyError> {
        if symbol.is_ascii_digit() {
            Ok(Symbol::Digit(symbol as u32 - '0' as u32))
        } else if symbol.is_ascii_uppercase() {
            Ok(Symbol::Letter(symbol as u32 - 'A' as u32))
        } else {
            Err(KeyError::InvalidSymbol { position, symbol })
        }
    }

    fn value(self) -> u32 {
        match self {
            Symbol::Digit(v) | Symbol::Letter(v) => v,
        }
    }
}

fn digit_char(value: u32) -> char {
    (b'0' + value as u8) as char
}

fn letter_char(value: u32) -> char {
    (b'A' + value as u8) as char
}

/// Collects the record into classified symbols, enforcing width and alphabet.
fn record_symbols(record: &str) -> Result<Vec<Symbol>, KeyError> {
    let chars: Vec<char> = record.chars().collect();
    if chars.len() != KEY_LENGTH {
        return Err(KeyError::InvalidLength {
            expected: KEY_LENGTH,
            got: chars.len(),
        });
    }
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| Symbol::classify(c, i))
        .collect()
}

/// Encrypts a 16-character plaintext record into an option key.
///
/// The first two positions of the input are placeholders; they are
/// overwritten with the derived checksum (ones digit first) before the
/// substitution pass runs over the whole record.
pub fn encrypt(record: &str) -> Result<String, KeyError> {
    let mut symbols = record_symbols(record)?;

    // Weighted checksum over the payload positions, seeded at 1.
    let mut checksum: u32 = 1;
    for (i, symbol) in symbols.iter().enumerate().skip(layout::CHECK_SUM_SIZE) {
        let t = symbol.value();
        checksum += i as u32 + t + i as u32 * t;
    }
    let checksum = 100 - (checksum % 100);
    symbols[0] = Symbol::Digit(checksum % 10);
    symbols[1] = Symbol::Digit((checksum / 10) % 10);

    // Substitution pass; the running sum reads the pre-substitution value.
    let mut output = String::with_capacity(KEY_LENGTH);
    let mut running_sum: u32 = 0;
    for (i, symbol) in symbols.iter().enumerate() {
        let t = symbol.value();
        match symbol {
            Symbol::Digit(_) => {
                let index = ((t + MAX_CHECK_SUM - running_sum) % 10) as usize;
                output.push(digit_char(ENIGMA2_E_ROTOR_10[index] as u32));
            }
            Symbol::Letter(_) => {
                let index = ((t + MAX_CHECK_SUM - running_sum) % 26) as usize;
                output.push(letter_char(ENIGMA2_E_ROTOR_26[index] as u32));
            }
        }
        running_sum += i as u32 + t + i as u32 * t;
    }
    Ok(output)
}

/// Decrypts a 16-character option key back to its plaintext record.
///
/// Returns [`KeyError::ChecksumMismatch`] when the recomputed checksum does
/// not verify; no partially decoded record is ever returned. The decoded
/// record keeps the embedded checksum digits in its first two positions.
pub fn decrypt(key: &str) -> Result<String, KeyError> {
    let symbols = record_symbols(key)?;
    let mut output = String::with_capacity(KEY_LENGTH);
    let mut checksum: u32 = 0;
    let mut position_1_digit: Option<u32> = None;
    for (i, symbol) in symbols.iter().enumerate() {
        let t = match symbol {
            Symbol::Digit(v) => {
                let t = (ENIGMA2_D_ROTOR_10[*v as usize] as u32 + checksum) % 10;
                output.push(digit_char(t));
                if i == 1 {
                    position_1_digit = Some(t);
                }
                t
            }
            Symbol::Letter(v) => {
                let t = (ENIGMA2_D_ROTOR_26[*v as usize] as u32 + checksum) % 26;
                output.push(letter_char(t));
                t
            }
        };
        checksum += i as u32 + t + i as u32 * t;
    }
    // Position 1 holds the checksum tens digit; a letter there can never
    // come from a validly encoded record.
    let tens = position_1_digit.ok_or(KeyError::ChecksumMismatch)?;
    checksum += 8 * tens;
    if checksum % 100 != 0 {
        return Err(KeyError::ChecksumMismatch);
    }
    Ok(output)
}

/// Generates an option key for a product code, 7-digit serial and option.
pub fn generate_option_key(
    product_code: &str,
    serial: &str,
    option: u16,
) -> Result<String, KeyError> {
    let record = layout::enigma2_record(product_code, serial, option)?;
    encrypt(&record)
}

/// Decrypts a key and unpacks its product, serial and option fields.
pub fn decode_option_key(key: &str) -> Result<DecodedKey, KeyError> {
    let record = decrypt(key)?;
    DecodedKey::from_record(&record)
}

/// Checks an option key against an expected option number.
///
/// A checksum failure is `Ok(false)`; length and alphabet violations remain
/// errors. Otherwise the 3-digit option field is parsed and compared.
pub fn check_option_key(option: u16, key: &str) -> Result<bool, KeyError> {
    let record = match decrypt(key) {
        Ok(record) => record,
        Err(KeyError::ChecksumMismatch) => return Ok(false),
        Err(err) => return Err(err),
    };
    let option_field = &record[OPTION_LOCATION..OPTION_LOCATION + OPTION_CODE_SIZE];
    match option_field.parse::<u16>() {
        Ok(decoded_option) => Ok(decoded_option == option),
        Err(_) => Ok(false),
    }
}
