//! Serializable alphabet configuration.

use serde::{Deserialize, Serialize};

use crate::constants::PAD;
use crate::{Alphabet, Base64Error};

/// The configurable characters of an [`Alphabet`].
///
/// Missing fields fall back to the RFC 4648 standard alphabet, so a partial
/// document only overrides what it names.
///
/// # Example
///
/// ```
/// use base64_stream::{Alphabet, AlphabetConfig};
///
/// let config = AlphabetConfig {
///     pad: '.',
///     ..AlphabetConfig::default()
/// };
/// let alphabet = config.build().unwrap();
/// assert_eq!(alphabet.char62(), '+');
/// assert_eq!(alphabet.pad(), '.');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphabetConfig {
    /// Symbol for sextet 62.
    pub char62: char,
    /// Symbol for sextet 63.
    pub char63: char,
    /// Padding symbol.
    pub pad: char,
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        Self {
            char62: '+',
            char63: '/',
            pad: PAD,
        }
    }
}

impl AlphabetConfig {
    /// URL and filename safe configuration (`-`, `_`, `=`).
    pub fn url_safe() -> Self {
        Self {
            char62: '-',
            char63: '_',
            pad: PAD,
        }
    }

    /// Validates the configuration and builds the lookup tables.
    pub fn build(&self) -> Result<Alphabet, Base64Error> {
        Alphabet::new(self.char62, self.char63, self.pad)
    }
}

impl TryFrom<AlphabetConfig> for Alphabet {
    type Error = Base64Error;

    fn try_from(config: AlphabetConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

impl From<Alphabet> for AlphabetConfig {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.config()
    }
}
