//! Option key calculator and validator for Fluke test-equipment products.
//!
//! Native Rust port of the Enigma key tool. Two independent cipher engines
//! produce and verify the short alphanumeric "option activation keys" that
//! unlock purchased features on a device, bound to its serial number:
//!
//! - **EnigmaC** ([`enigma_c`]) — 12-symbol hex keys for the NetTool 10/100
//!   (10-digit serial, single-digit option).
//! - **Enigma2C** ([`enigma2`]) — 16-character alphanumeric keys with an
//!   embedded checksum for the other product families (4-digit product code,
//!   7-digit serial, 3-digit option).
//!
//! Both engines are pure, deterministic transforms over fixed-width strings;
//! keys verify offline with no external authority. The ciphers are fixed,
//! publicly inspectable permutations, not secret-key cryptography.
//!
//! # Examples
//!
//! Generate and verify an EtherScope option key:
//!
//! ```
//! use enigma_keys::enigma2;
//!
//! let key = enigma2::generate_option_key("6963", "1234567", 0)?;
//! assert_eq!(key, "5247135901759934");
//!
//! let decoded = enigma2::decode_option_key(&key)?;
//! assert_eq!(decoded.serial_number, "1234567");
//! assert!(enigma2::check_option_key(0, &key)?);
//! # Ok::<(), enigma_keys::KeyError>(())
//! ```
//!
//! Generate a NetTool key and check it against a serial:
//!
//! ```
//! use enigma_keys::enigma_c;
//!
//! let key = enigma_c::generate_option_key("0003333016", 4)?;
//! assert_eq!(key, "5dabade112dd");
//! # Ok::<(), enigma_keys::KeyError>(())
//! ```

#![warn(missing_docs)]

pub mod enigma2;
pub mod enigma_c;
pub mod error;
pub mod layout;
pub mod products;

pub(crate) mod rotor;

pub use error::KeyError;
pub use layout::{format_grouped, DecodedKey};
