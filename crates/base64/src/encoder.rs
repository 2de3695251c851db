//! Lazy byte-to-symbol encoder.

use std::fmt;
use std::iter::{Fuse, FusedIterator, Peekable};

use crate::{Alphabet, AsByte, Base64Error};

/// Creates an [`Encoder`] over a byte sequence.
///
/// # Example
///
/// ```
/// use base64_stream::{encode, Alphabet};
///
/// let encoded: String = encode(b"hello world", Alphabet::STANDARD).collect();
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// ```
pub fn encode<I>(bytes: I, alphabet: Alphabet) -> Encoder<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsByte,
{
    Encoder::new(bytes.into_iter(), alphabet)
}

/// Cursor producing base64 symbols one at a time.
///
/// Every three input bytes become four symbols; the last group is padded to
/// four symbols. Input is read left to right, at most one byte ahead of the
/// symbol being produced, so infinite inputs work.
///
/// Cloning an encoder saves its position: the clone resumes from the same
/// symbol with its own copy of the input iterator.
pub struct Encoder<I: Iterator> {
    input: Peekable<Fuse<I>>,
    alphabet: Alphabet,
    /// Byte consumed by the previous step.
    last: u8,
    /// Which of the four symbols of the current group comes next.
    pos: u8,
    /// Input ran out inside the current group.
    padding: bool,
}

impl<I> Encoder<I>
where
    I: Iterator,
    I::Item: AsByte,
{
    /// Creates an encoder positioned on the first symbol; no input is read yet.
    pub fn new(input: I, alphabet: Alphabet) -> Self {
        Self {
            input: input.fuse().peekable(),
            alphabet,
            last: 0,
            pos: 0,
            padding: false,
        }
    }

    /// The alphabet symbols are drawn from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns true once the input is exhausted and the last group is complete.
    pub fn is_empty(&mut self) -> bool {
        self.pos == 0 && self.input.peek().is_none()
    }

    /// Returns the current symbol without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`Base64Error::Exhausted`] if the encoder is empty.
    pub fn front(&mut self) -> Result<char, Base64Error> {
        if self.is_empty() {
            return Err(Base64Error::Exhausted);
        }
        if self.padding {
            return Ok(self.alphabet.pad());
        }
        let current = self.input.peek().map_or(0, AsByte::as_byte);
        let last = self.last;
        let sextet = match self.pos {
            0 => current >> 2,
            1 => ((last & 0b11) << 4) | (current >> 4),
            2 => ((last & 0b1111) << 2) | (current >> 6),
            _ => last & 0b11_1111,
        };
        Ok(self.alphabet.symbol(sextet))
    }

    /// Moves to the next symbol.
    ///
    /// # Errors
    ///
    /// Returns [`Base64Error::Exhausted`] if the encoder is empty.
    pub fn pop_front(&mut self) -> Result<(), Base64Error> {
        if self.is_empty() {
            return Err(Base64Error::Exhausted);
        }
        self.advance();
        Ok(())
    }

    fn advance(&mut self) {
        // The last symbol of a group is built from `last` alone.
        if self.pos < 3 && !self.padding {
            match self.input.next() {
                Some(byte) => self.last = byte.as_byte(),
                None => self.padding = true,
            }
        }
        self.pos = (self.pos + 1) & 0b11;
        if self.pos == 0 {
            self.padding = false;
        }
    }

    /// Number of symbols left when `pending` input bytes remain unread.
    fn remaining(&self, pending: usize) -> Option<usize> {
        let groups = |bytes: usize| bytes.div_ceil(3).checked_mul(4);
        if self.pos == 0 {
            return groups(pending);
        }
        let pos = self.pos as usize;
        groups(pending.saturating_sub(3 - pos))?.checked_add(4 - pos)
    }
}

impl<I> Iterator for Encoder<I>
where
    I: Iterator,
    I::Item: AsByte,
{
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let symbol = self.front().ok()?;
        self.advance();
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.input.size_hint();
        let lower = self.remaining(lower).unwrap_or(usize::MAX);
        let upper = upper.and_then(|upper| self.remaining(upper));
        (lower, upper)
    }
}

impl<I> Clone for Encoder<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            input: self.input.clone(),
            alphabet: self.alphabet,
            last: self.last,
            pos: self.pos,
            padding: self.padding,
        }
    }
}

impl<I: Iterator> fmt::Debug for Encoder<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoder")
            .field("alphabet", &self.alphabet)
            .field("pos", &self.pos)
            .field("padding", &self.padding)
            .finish_non_exhaustive()
    }
}

impl<I> FusedIterator for Encoder<I>
where
    I: Iterator,
    I::Item: AsByte,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_str(data: &[u8]) -> String {
        encode(data, Alphabet::STANDARD).collect()
    }

    #[test]
    fn test_empty() {
        let mut encoder = encode(b"", Alphabet::STANDARD);
        assert!(encoder.is_empty());
        assert_eq!(encoder.next(), None);
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(encode_str(b"f"), "Zg==");
    }

    #[test]
    fn test_two_bytes() {
        assert_eq!(encode_str(b"fo"), "Zm8=");
    }

    #[test]
    fn test_three_bytes() {
        assert_eq!(encode_str(b"foo"), "Zm9v");
    }

    #[test]
    fn test_various_lengths() {
        assert_eq!(encode_str(b"foob"), "Zm9vYg==");
        assert_eq!(encode_str(b"fooba"), "Zm9vYmE=");
        assert_eq!(encode_str(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_cursor_steps() {
        let mut encoder = encode(b"f", Alphabet::STANDARD);
        assert_eq!(encoder.front(), Ok('Z'));
        assert_eq!(encoder.front(), Ok('Z'));
        encoder.pop_front().unwrap();
        assert_eq!(encoder.front(), Ok('g'));
        encoder.pop_front().unwrap();
        assert_eq!(encoder.front(), Ok('='));
        encoder.pop_front().unwrap();
        assert_eq!(encoder.front(), Ok('='));
        encoder.pop_front().unwrap();
        assert!(encoder.is_empty());
        assert_eq!(encoder.front(), Err(Base64Error::Exhausted));
        assert_eq!(encoder.pop_front(), Err(Base64Error::Exhausted));
    }

    #[test]
    fn test_size_hint_is_exact_for_slices() {
        for len in 0..10 {
            let data = vec![0u8; len];
            let mut encoder = encode(&data, Alphabet::STANDARD);
            let mut expected = len.div_ceil(3) * 4;
            loop {
                assert_eq!(encoder.size_hint(), (expected, Some(expected)));
                if encoder.next().is_none() {
                    break;
                }
                expected -= 1;
            }
            assert_eq!(expected, 0);
        }
    }

    #[test]
    fn test_infinite_input() {
        let encoded: String = encode(std::iter::repeat(0u8), Alphabet::STANDARD)
            .take(10)
            .collect();
        assert_eq!(encoded, "AAAAAAAAAA");
    }

    #[test]
    fn test_clone_saves_position() {
        let mut encoder = encode(b"foobar", Alphabet::STANDARD);
        encoder.next();
        encoder.next();
        let saved = encoder.clone();
        let rest: String = encoder.collect();
        let replay: String = saved.collect();
        assert_eq!(rest, "9vYmFy");
        assert_eq!(replay, rest);
    }
}
