//! EnigmaC cipher — 12-symbol hex option keys for the NetTool 10/100.
//!
//! Ports the `EnigmaC` functions from the original Python key tool to Rust.
//! The cipher substitutes each hex symbol through a position-rotated 16-entry
//! rotor and chains the result through a running XOR state, so every output
//! symbol depends on all prior outputs.
//!
//! Encryption and decryption are pure functions of their inputs and the
//! constant rotor table; no state survives a call.

use crate::error::KeyError;
use crate::layout::{self, SERIAL_NUMBER_SIZE_ENIGMA_C};
use crate::rotor::{ENIGMA_C_INVERSE, ENIGMA_C_ROTOR};

/// Length of an EnigmaC key and its plaintext, in hex symbols.
pub const KEY_LENGTH: usize = 12;

/// Factory bypass literal; validates against any serial/option pair.
pub const BYPASS_KEY: &str = "bladerules";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Converts one hex symbol (case-insensitive) to its value.
fn hex_value(symbol: char, position: usize) -> Result<u32, KeyError> {
    symbol
        .to_digit(16)
        .ok_or(KeyError::InvalidSymbol { position, symbol })
}

/// Collects the key into chars, enforcing the 12-symbol width.
fn key_symbols(key: &str) -> Result<Vec<char>, KeyError> {
    let symbols: Vec<char> = key.chars().collect();
    if symbols.len() != KEY_LENGTH {
        return Err(KeyError::InvalidLength {
            expected: KEY_LENGTH,
            got: symbols.len(),
        });
    }
    Ok(symbols)
}

/// Encrypts a 12-symbol hex plaintext into an option key.
///
/// Output is always 12 lowercase hex symbols.
pub fn encrypt(plaintext: &str) -> Result<String, KeyError> {
    let symbols = key_symbols(plaintext)?;
    let mut output = String::with_capacity(KEY_LENGTH);
    let mut state: u32 = 0;
    for (i, &symbol) in symbols.iter().enumerate() {
        let value = hex_value(symbol, i)?;
        let rotor = ENIGMA_C_ROTOR[(value as usize + i) % 16] as u32;
        state = rotor ^ state;
        output.push(HEX_DIGITS[state as usize] as char);
    }
    Ok(output)
}

/// Decrypts a 12-symbol option key back to its hex plaintext.
///
/// Inverts [`encrypt`] position by position: the previous undecoded symbol
/// is the XOR feedback, and the precomputed inverse rotor replaces the
/// original's linear search over the table.
pub fn decrypt(ciphertext: &str) -> Result<String, KeyError> {
    let symbols = key_symbols(ciphertext)?;
    let mut output = String::with_capacity(KEY_LENGTH);
    let mut xor_value: u32 = 0;
    for (i, &symbol) in symbols.iter().enumerate() {
        let cipher_value = hex_value(symbol, i)?;
        let rotor_output = cipher_value ^ xor_value;
        let rotor_index = ENIGMA_C_INVERSE[rotor_output as usize] as usize;
        let plain_value = (rotor_index + 16 - i) % 16;
        output.push(HEX_DIGITS[plain_value] as char);
        xor_value = cipher_value;
    }
    Ok(output)
}

/// Generates a NetTool option key for a 10-digit serial and option number.
pub fn generate_option_key(serial: &str, option: u8) -> Result<String, KeyError> {
    let plaintext = layout::nettool_plaintext(serial, option)?;
    encrypt(&plaintext)
}

/// Checks an option key against an expected serial and option number.
///
/// The bypass literal validates unconditionally, before any input
/// validation. Otherwise the key is decrypted; the reversed first 10
/// symbols must equal the serial and the last 2 symbols, parsed as a
/// decimal number, must equal the option. A decoded option field that is
/// not decimal can never match and yields `Ok(false)`.
pub fn check_option_key(option: u8, key: &str, serial: &str) -> Result<bool, KeyError> {
    if key == BYPASS_KEY {
        return Ok(true);
    }
    layout::validate_digits(serial, SERIAL_NUMBER_SIZE_ENIGMA_C)?;
    let plaintext = decrypt(key)?;
    let recovered_serial: String = plaintext[..SERIAL_NUMBER_SIZE_ENIGMA_C]
        .chars()
        .rev()
        .collect();
    if recovered_serial != serial {
        return Ok(false);
    }
    match plaintext[SERIAL_NUMBER_SIZE_ENIGMA_C..].parse::<u8>() {
        Ok(decoded_option) => Ok(decoded_option == option),
        Err(_) => Ok(false),
    }
}
