//! Conversions from sequence items to bytes and symbols.
//!
//! The encoder and decoder accept any iterator whose items implement these
//! traits, so callers can feed `&[u8]`, `Vec<i8>`, `str::chars()`,
//! `str::bytes()` and so on without casting at every call site.

/// Items that carry a raw byte.
pub trait AsByte {
    fn as_byte(&self) -> u8;
}

/// Items that carry a base64 symbol.
///
/// Bytes are read as Latin-1 code points. Anything outside 7-bit ASCII is
/// never part of an alphabet.
pub trait AsSymbol {
    fn as_symbol(&self) -> char;
}

impl AsByte for u8 {
    #[inline]
    fn as_byte(&self) -> u8 {
        *self
    }
}

impl AsByte for i8 {
    #[inline]
    fn as_byte(&self) -> u8 {
        u8::from_ne_bytes(self.to_ne_bytes())
    }
}

impl<T: AsByte + ?Sized> AsByte for &T {
    #[inline]
    fn as_byte(&self) -> u8 {
        (**self).as_byte()
    }
}

impl AsSymbol for char {
    #[inline]
    fn as_symbol(&self) -> char {
        *self
    }
}

impl AsSymbol for u8 {
    #[inline]
    fn as_symbol(&self) -> char {
        char::from(*self)
    }
}

impl<T: AsSymbol + ?Sized> AsSymbol for &T {
    #[inline]
    fn as_symbol(&self) -> char {
        (**self).as_symbol()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_bytes_keep_bit_pattern() {
        assert_eq!((-1i8).as_byte(), 0xFF);
        assert_eq!(i8::MIN.as_byte(), 0x80);
        assert_eq!(5i8.as_byte(), 5);
    }

    #[test]
    fn test_references() {
        let byte = 7u8;
        assert_eq!((&&byte).as_byte(), 7);
        assert_eq!((&'x').as_symbol(), 'x');
    }

    #[test]
    fn test_bytes_as_latin1() {
        assert_eq!(b'A'.as_symbol(), 'A');
        assert_eq!(0xE9u8.as_symbol(), 'é');
    }
}
