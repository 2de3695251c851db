//! Lazy symbol-to-byte decoder.

use std::fmt;
use std::iter::{Fuse, FusedIterator, Peekable};

use crate::{Alphabet, AsSymbol, Base64Error, Sextet};

/// Creates a [`Decoder`] over a symbol sequence.
///
/// The input is expected to be well-formed (see [`crate::is_valid`]); no
/// whitespace or line breaks are skipped. The first symbol is read
/// immediately.
///
/// # Example
///
/// ```
/// use base64_stream::{decode, Alphabet};
///
/// let decoded: Result<Vec<u8>, _> = decode("aGVsbG8=".chars(), Alphabet::STANDARD).collect();
/// assert_eq!(decoded.unwrap(), b"hello");
/// ```
pub fn decode<I>(symbols: I, alphabet: Alphabet) -> Decoder<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsSymbol,
{
    Decoder::new(symbols.into_iter(), alphabet)
}

/// Cursor producing decoded bytes one at a time.
///
/// Four symbols become three bytes. The byte stream ends at the end of the
/// input or at the first padding symbol, whatever follows it is ignored.
///
/// A symbol outside the alphabet stops decoding with
/// [`Base64Error::InvalidSymbol`]; no byte is produced from it. Used as an
/// [`Iterator`], the error is yielded once and iteration ends.
///
/// Cloning a decoder saves its position, like [`crate::Encoder`].
pub struct Decoder<I: Iterator> {
    input: Peekable<Fuse<I>>,
    alphabet: Alphabet,
    /// Symbol consumed by the previous step, `None` once the input ran out.
    last: Option<Sextet>,
    /// Which of the three bytes of the current group comes next.
    pos: u8,
    /// Number of symbols consumed so far.
    read: usize,
    failed: bool,
}

impl<I> Decoder<I>
where
    I: Iterator,
    I::Item: AsSymbol,
{
    /// Creates a decoder, eagerly reading the first symbol from `input`.
    pub fn new(input: I, alphabet: Alphabet) -> Self {
        let mut decoder = Self {
            input: input.fuse().peekable(),
            alphabet,
            last: None,
            pos: 0,
            read: 0,
            failed: false,
        };
        decoder.last = decoder.consume();
        decoder
    }

    /// The alphabet symbols are looked up in.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns true when no further byte can be produced.
    ///
    /// A pending invalid symbol does not count as the end: `front` reports it.
    pub fn is_empty(&mut self) -> bool {
        matches!(self.step(), Err(Base64Error::Exhausted))
    }

    /// Returns the current byte without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`Base64Error::Exhausted`] if the decoder is empty and
    /// [`Base64Error::InvalidSymbol`] if the byte depends on a symbol that is
    /// not in the alphabet.
    pub fn front(&mut self) -> Result<u8, Base64Error> {
        self.step()
    }

    /// Moves to the next byte.
    ///
    /// # Errors
    ///
    /// Same as [`Decoder::front`]; nothing is consumed on error.
    pub fn pop_front(&mut self) -> Result<(), Base64Error> {
        self.step()?;
        self.advance();
        Ok(())
    }

    fn step(&mut self) -> Result<u8, Base64Error> {
        if self.failed {
            return Err(Base64Error::Exhausted);
        }
        let last = match self.last {
            Some(Sextet::Value(value)) => value,
            Some(Sextet::Invalid(symbol)) => {
                return Err(Base64Error::InvalidSymbol {
                    symbol,
                    offset: self.read - 1,
                })
            }
            Some(Sextet::Padding) | None => return Err(Base64Error::Exhausted),
        };
        let alphabet = &self.alphabet;
        let current = match self.input.peek().map(|item| alphabet.lookup(item.as_symbol())) {
            Some(Sextet::Value(value)) => value,
            Some(Sextet::Invalid(symbol)) => {
                return Err(Base64Error::InvalidSymbol {
                    symbol,
                    offset: self.read,
                })
            }
            Some(Sextet::Padding) | None => return Err(Base64Error::Exhausted),
        };
        Ok(match self.pos {
            0 => (last << 2) | (current >> 4),
            1 => (last << 4) | (current >> 2),
            _ => (last << 6) | current,
        })
    }

    fn advance(&mut self) {
        self.last = self.consume();
        self.pos = (self.pos + 1) % 3;
        // Three bytes take four symbols: the next group's leader is read now.
        if self.pos == 0 {
            self.last = self.consume();
        }
    }

    fn consume(&mut self) -> Option<Sextet> {
        let item = self.input.next()?;
        self.read += 1;
        Some(self.alphabet.lookup(item.as_symbol()))
    }
}

impl<I> Iterator for Decoder<I>
where
    I: Iterator,
    I::Item: AsSymbol,
{
    type Item = Result<u8, Base64Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Ok(byte) => {
                self.advance();
                Some(Ok(byte))
            }
            Err(Base64Error::Exhausted) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        // Every byte consumes at least one unread symbol.
        (0, self.input.size_hint().1)
    }
}

impl<I> Clone for Decoder<I>
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
            read: self.read,
            failed: self.failed,
        }
    }
}

impl<I: Iterator> fmt::Debug for Decoder<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("alphabet", &self.alphabet)
            .field("last", &self.last)
            .field("pos", &self.pos)
            .field("read", &self.read)
            .finish_non_exhaustive()
    }
}

impl<I> FusedIterator for Decoder<I>
where
    I: Iterator,
    I::Item: AsSymbol,
{
}
