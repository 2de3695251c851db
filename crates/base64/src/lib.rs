//! Streaming base64 encoding, decoding and validation.
//!
//! Every component is a pull-based cursor over an input iterator and uses
//! O(1) extra memory, so neither the input nor the output has to be held in
//! memory at once:
//! - [`encode`] turns bytes into symbols,
//! - [`decode`] turns symbols into bytes,
//! - [`is_valid`] / [`validate`] check an encoded stream without decoding it.
//!
//! All of them take an [`Alphabet`]: standard, URL-safe, or custom 62nd,
//! 63rd and padding characters.
//!
//! Encoders and decoders are single-owner state machines. Distinct instances
//! can live on distinct threads; one instance is never shared.
//!
//! # Example
//!
//! ```
//! use base64_stream::{decode, encode, is_valid, Alphabet};
//!
//! let alphabet = Alphabet::new('-', '_', '.').unwrap();
//! let encoded: String = encode(b"Input strin", alphabet).collect();
//! assert_eq!(encoded, "SW5wdXQgc3RyaW4.");
//! assert!(is_valid(encoded.chars(), alphabet));
//!
//! let decoded: Result<Vec<u8>, _> = decode(encoded.chars(), alphabet).collect();
//! assert_eq!(decoded.unwrap(), b"Input strin");
//! ```

mod alphabet;
mod config;
mod constants;
mod decoder;
mod encoder;
mod from_base64;
mod symbol;
mod to_base64;
mod validate;

pub use alphabet::{Alphabet, Sextet};
pub use config::AlphabetConfig;
pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, PAD};
pub use decoder::{decode, Decoder};
pub use encoder::{encode, Encoder};
pub use from_base64::from_base64;
pub use symbol::{AsByte, AsSymbol};
pub use to_base64::to_base64;
pub use validate::{is_valid, validate, ValidationError};

use thiserror::Error;

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Base64Error {
    /// An alphabet character is outside the 7-bit range.
    #[error("alphabet symbol {0:?} is not 7-bit ASCII")]
    NonAsciiSymbol(char),
    /// An alphabet character is already used by another symbol.
    #[error("alphabet symbol {0:?} is used more than once")]
    DuplicateSymbol(char),
    /// The decoder met a symbol that is neither data nor padding.
    #[error("INVALID_BASE64_SYMBOL {symbol:?} at offset {offset}")]
    InvalidSymbol { symbol: char, offset: usize },
    /// The input failed validation.
    #[error(transparent)]
    Malformed(#[from] ValidationError),
    /// `front` or `pop_front` was called on an empty cursor.
    #[error("cursor is exhausted")]
    Exhausted,
}

impl Base64Error {
    /// True for alphabet configuration errors.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::NonAsciiSymbol(_) | Self::DuplicateSymbol(_))
    }

    /// True for caller mistakes rather than bad data.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}
