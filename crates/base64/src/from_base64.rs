//! Standard base64 decoding function.

use crate::{decode, validate, Alphabet, Base64Error};

/// Decodes a standard base64 string.
///
/// The whole string is validated first, so malformed input is rejected
/// before any byte is produced.
///
/// # Errors
///
/// Returns [`Base64Error::Malformed`] if the string is not well-formed
/// base64.
///
/// # Example
///
/// ```
/// use base64_stream::from_base64;
///
/// let decoded = from_base64("aGVsbG8gd29ybGQ=").unwrap();
/// assert_eq!(decoded, b"hello world");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    let alphabet = Alphabet::STANDARD;
    validate(encoded.chars(), alphabet)?;
    let mut buf = Vec::with_capacity(encoded.len() / 4 * 3);
    for byte in decode(encoded.chars(), alphabet) {
        buf.push(byte?);
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;

    #[test]
    fn test_empty() {
        assert_eq!(from_base64("").unwrap(), b"");
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(from_base64("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
    }

    #[test]
    fn test_rejects_missing_padding() {
        assert_eq!(
            from_base64("aGVsbG8gd29ybGQ"),
            Err(Base64Error::Malformed(ValidationError::InvalidLength(15)))
        );
    }

    #[test]
    fn test_reports_non_ascii_symbol_as_char() {
        assert_eq!(
            from_base64("Zm9vé==="),
            Err(Base64Error::Malformed(ValidationError::InvalidSymbol {
                symbol: 'é',
                offset: 4
            }))
        );
        assert_eq!(
            from_base64("€Zm9v"),
            Err(Base64Error::Malformed(ValidationError::InvalidSymbol {
                symbol: '€',
                offset: 0
            }))
        );
    }

    #[test]
    fn test_rejects_invalid_symbol() {
        assert!(matches!(
            from_base64("aGVs!!!!"),
            Err(Base64Error::Malformed(ValidationError::InvalidSymbol {
                symbol: '!',
                offset: 4
            }))
        ));
    }
}
