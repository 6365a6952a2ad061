//! Rotor tables for the EnigmaC and Enigma2C ciphers.
//!
//! Ports the rotor constants from the original Python key tool to Rust.
//! Every table is a fixed permutation of its index range and is never
//! mutated, so the tables can be shared freely across threads.
//!
//! The Enigma2 `D` tables are the exact inverses of the `E` tables; the
//! decoder indexes them directly instead of searching. For EnigmaC the
//! original decoder performed a linear search over the rotor; here the
//! inverse permutation is computed once at compile time instead.

/// EnigmaC rotor — permutation of the 16 hex symbol values.
pub(crate) const ENIGMA_C_ROTOR: [u8; 16] = [5, 4, 14, 11, 1, 8, 10, 13, 7, 3, 15, 0, 2, 12, 9, 6];

/// Inverse of [`ENIGMA_C_ROTOR`]: `ENIGMA_C_INVERSE[ENIGMA_C_ROTOR[i]] == i`.
pub(crate) const ENIGMA_C_INVERSE: [u8; 16] = invert16(ENIGMA_C_ROTOR);

/// Enigma2 encode rotor for the 10 digit symbols.
pub(crate) const ENIGMA2_E_ROTOR_10: [u8; 10] = [5, 4, 1, 8, 7, 3, 0, 2, 9, 6];

/// Enigma2 encode rotor for the 26 letter symbols.
pub(crate) const ENIGMA2_E_ROTOR_26: [u8; 26] = [
    16, 8, 25, 5, 23, 21, 18, 17, 2, 1, 7, 24, 15, 11, 9, 6, 3, 0, 19, 12, 22, 14, 10, 4, 20, 13,
];

/// Enigma2 decode rotor for the 10 digit symbols (inverse of the E table).
pub(crate) const ENIGMA2_D_ROTOR_10: [u8; 10] = [6, 2, 7, 5, 1, 0, 9, 4, 3, 8];

/// Enigma2 decode rotor for the 26 letter symbols (inverse of the E table).
pub(crate) const ENIGMA2_D_ROTOR_26: [u8; 26] = [
    17, 9, 8, 16, 23, 3, 15, 10, 1, 14, 22, 13, 19, 25, 21, 12, 0, 7, 6, 18, 24, 5, 20, 4, 11, 2,
];

const fn invert16(table: [u8; 16]) -> [u8; 16] {
    let mut inverse = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        inverse[table[i] as usize] = i as u8;
        i += 1;
    }
    inverse
}
