//! Well-formedness checks for encoded symbol streams.

use thiserror::Error;

use crate::{Alphabet, AsSymbol, Sextet};

/// Maximum number of padding symbols at the end of a stream.
const MAX_PADDING: usize = 2;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("INVALID_BASE64_SYMBOL {symbol:?} at offset {offset}")]
    InvalidSymbol { symbol: char, offset: usize },
    #[error("data symbol after padding at offset {offset}")]
    DataAfterPadding { offset: usize },
    #[error("more than two padding symbols at offset {offset}")]
    TooMuchPadding { offset: usize },
    #[error("Base64 string length must be a multiple of 4, got {0}")]
    InvalidLength(usize),
}

/// Checks a symbol stream and reports the first problem found.
///
/// A stream is well-formed when every symbol belongs to the alphabet or is
/// padding, padding only appears at the end and at most twice, and the
/// total length is a multiple of 4. The empty stream is well-formed.
///
/// # Example
///
/// ```
/// use base64_stream::{validate, Alphabet, ValidationError};
///
/// assert_eq!(validate("Zm8=".chars(), Alphabet::STANDARD), Ok(()));
/// assert_eq!(
///     validate("Zm8".chars(), Alphabet::STANDARD),
///     Err(ValidationError::InvalidLength(3))
/// );
/// ```
pub fn validate<I>(symbols: I, alphabet: Alphabet) -> Result<(), ValidationError>
where
    I: IntoIterator,
    I::Item: AsSymbol,
{
    let mut count = 0;
    let mut padding = 0;
    for item in symbols {
        match alphabet.lookup(item.as_symbol()) {
            Sextet::Value(_) if padding > 0 => {
                return Err(ValidationError::DataAfterPadding { offset: count })
            }
            Sextet::Value(_) => {}
            Sextet::Padding => {
                padding += 1;
                if padding > MAX_PADDING {
                    return Err(ValidationError::TooMuchPadding { offset: count });
                }
            }
            Sextet::Invalid(symbol) => {
                return Err(ValidationError::InvalidSymbol {
                    symbol,
                    offset: count,
                })
            }
        }
        count += 1;
    }
    if count % 4 != 0 {
        return Err(ValidationError::InvalidLength(count));
    }
    Ok(())
}

/// Returns true if the symbol stream is well-formed base64.
///
/// # Example
///
/// ```
/// use base64_stream::{is_valid, Alphabet};
///
/// assert!(is_valid("validstring=".chars(), Alphabet::STANDARD));
/// assert!(!is_valid("bad=padding".chars(), Alphabet::STANDARD));
/// ```
pub fn is_valid<I>(symbols: I, alphabet: Alphabet) -> bool
where
    I: IntoIterator,
    I::Item: AsSymbol,
{
    match validate(symbols, alphabet) {
        Ok(()) => true,
        Err(err) => {
            tracing::trace!(%err, "rejected base64 stream");
            false
        }
    }
}
