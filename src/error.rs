//! Error types for option key encoding, decoding and validation.

use thiserror::Error;

/// Errors produced while packing, encrypting or decrypting option keys.
///
/// The original tool aborted the whole process on malformed input; the
/// engine instead surfaces typed errors so it can be embedded without
/// terminating its host. A checksum mismatch on decode is the one
/// recoverable case: the key is well-formed but not valid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Input string has the wrong length for its field or key type.
    #[error("invalid length: expected {expected} characters, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// Input string contains a character outside the required alphabet.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { position: usize, symbol: char },

    /// Option number is outside the encodable range for the scheme.
    #[error("option number {value} out of range (0-{max})")]
    OptionOutOfRange { value: u32, max: u32 },

    /// Embedded checksum did not verify; the key is not valid.
    #[error("checksum mismatch: not a valid option key")]
    ChecksumMismatch,
}
