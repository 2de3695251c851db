//! Standard base64 encoding function.

use crate::{encode, Alphabet};

/// Encodes a byte slice to a standard base64 string.
///
/// # Arguments
///
/// * `uint8` - The bytes to encode.
///
/// # Returns
///
/// A base64-encoded string with standard padding.
///
/// # Example
///
/// ```
/// use base64_stream::to_base64;
///
/// let encoded = to_base64(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    let mut out = String::with_capacity(uint8.len().div_ceil(3) * 4);
    out.extend(encode(uint8, Alphabet::STANDARD));
    out
}
