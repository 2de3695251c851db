//! Two-way mapping between sextets and base64 symbols.

use std::fmt;

use crate::constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, FIXED_SYMBOLS, PAD};
use crate::{AlphabetConfig, Base64Error};

/// Reverse table marker for values that are not part of the alphabet.
const INVALID: u8 = 0xFF;
/// Reverse table marker for the padding symbol.
const PADDING: u8 = 0x40;

/// Result of looking a symbol up in an [`Alphabet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sextet {
    /// A data symbol with its 6-bit value.
    Value(u8),
    /// The padding symbol.
    Padding,
    /// Anything else, including every non-ASCII character.
    Invalid(char),
}

/// A base64 alphabet: 64 data symbols plus a padding symbol.
///
/// Indices 0-61 are always `A-Z`, `a-z`, `0-9`. The 62nd, 63rd and padding
/// characters are configurable, must be 7-bit ASCII and must differ from
/// each other and from the fixed symbols.
///
/// # Example
///
/// ```
/// use base64_stream::{Alphabet, Sextet};
///
/// let alphabet = Alphabet::new('-', '_', '.').unwrap();
/// assert_eq!(alphabet.symbol(62), '-');
/// assert_eq!(alphabet.lookup('_'), Sextet::Value(63));
/// assert_eq!(alphabet.lookup('.'), Sextet::Padding);
/// assert_eq!(alphabet.lookup('+'), Sextet::Invalid('+'));
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    encode: [u8; 64],
    decode: [u8; 128],
    pad: u8,
}

impl Alphabet {
    /// RFC 4648 standard alphabet (`+`, `/`, `=`).
    pub const STANDARD: Alphabet =
        Alphabet::from_ascii(ALPHABET_BYTES[62], ALPHABET_BYTES[63], PAD as u8);

    /// RFC 4648 URL and filename safe alphabet (`-`, `_`, `=`).
    pub const URL_SAFE: Alphabet = Alphabet::from_ascii(
        ALPHABET_URL.as_bytes()[62],
        ALPHABET_URL.as_bytes()[63],
        PAD as u8,
    );

    /// Builds an alphabet from the 62nd, 63rd and padding characters.
    ///
    /// # Errors
    ///
    /// Returns [`Base64Error::NonAsciiSymbol`] if a character is outside the
    /// 7-bit range and [`Base64Error::DuplicateSymbol`] if it collides with a
    /// fixed symbol or with another configured character.
    pub fn new(char62: char, char63: char, pad: char) -> Result<Self, Base64Error> {
        let char62 = ascii(char62)?;
        let char63 = ascii(char63)?;
        let pad = ascii(pad)?;
        if let Some(err) = conflict(char62, char63, pad) {
            return Err(err);
        }
        tracing::trace!(
            char62 = %(char62 as char),
            char63 = %(char63 as char),
            pad = %(pad as char),
            "built base64 alphabet"
        );
        Ok(Self::build(char62, char63, pad))
    }

    /// Builds an alphabet in a const context.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid. Inside a `const` item this
    /// turns a bad configuration into a compile error.
    ///
    /// ```compile_fail
    /// use base64_stream::Alphabet;
    ///
    /// const BROKEN: Alphabet = Alphabet::from_ascii(b'A', b'/', b'=');
    /// let _ = BROKEN;
    /// ```
    pub const fn from_ascii(char62: u8, char63: u8, pad: u8) -> Self {
        if conflict(char62, char63, pad).is_some() {
            panic!("invalid base64 alphabet configuration");
        }
        Self::build(char62, char63, pad)
    }

    const fn build(char62: u8, char63: u8, pad: u8) -> Self {
        let fixed = ALPHABET.as_bytes();
        let mut encode = [0u8; 64];
        let mut i = 0;
        while i < FIXED_SYMBOLS {
            encode[i] = fixed[i];
            i += 1;
        }
        encode[62] = char62;
        encode[63] = char63;

        let mut decode = [INVALID; 128];
        let mut i = 0;
        while i < 64 {
            decode[encode[i] as usize] = i as u8;
            i += 1;
        }
        decode[pad as usize] = PADDING;

        Self {
            encode,
            decode,
            pad,
        }
    }

    /// Returns the symbol for a sextet. Only the low 6 bits are used.
    #[inline]
    pub fn symbol(&self, sextet: u8) -> char {
        self.encode[(sextet & 0x3f) as usize] as char
    }

    /// Looks a symbol up in the reverse table.
    #[inline]
    pub fn lookup(&self, symbol: char) -> Sextet {
        let code = symbol as u32;
        if code >= 128 {
            return Sextet::Invalid(symbol);
        }
        match self.decode[code as usize] {
            INVALID => Sextet::Invalid(symbol),
            PADDING => Sextet::Padding,
            value => Sextet::Value(value),
        }
    }

    /// The 62nd symbol.
    pub fn char62(&self) -> char {
        self.encode[62] as char
    }

    /// The 63rd symbol.
    pub fn char63(&self) -> char {
        self.encode[63] as char
    }

    /// The padding symbol.
    pub fn pad(&self) -> char {
        self.pad as char
    }

    /// Returns the configuration this alphabet was built from.
    pub fn config(&self) -> AlphabetConfig {
        AlphabetConfig {
            char62: self.char62(),
            char63: self.char63(),
            pad: self.pad(),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("char62", &self.char62())
            .field("char63", &self.char63())
            .field("pad", &self.pad())
            .finish()
    }
}

fn ascii(c: char) -> Result<u8, Base64Error> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(Base64Error::NonAsciiSymbol(c))
    }
}

/// Finds the first configured character that cannot be used.
const fn conflict(char62: u8, char63: u8, pad: u8) -> Option<Base64Error> {
    let configured = [char62, char63, pad];
    let mut i = 0;
    while i < configured.len() {
        let c = configured[i];
        if c >= 0x80 {
            return Some(Base64Error::NonAsciiSymbol(c as char));
        }
        if c.is_ascii_alphanumeric() {
            return Some(Base64Error::DuplicateSymbol(c as char));
        }
        let mut j = 0;
        while j < i {
            if configured[j] == c {
                return Some(Base64Error::DuplicateSymbol(c as char));
            }
            j += 1;
        }
        i += 1;
    }
    None
}
