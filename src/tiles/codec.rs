use super::codes::{Code, BLANK, BLANK_SYMBOL};
use crate::error::Error;
use lazy_static::lazy_static;
use std::collections::HashMap;

const ASCII_LC: &str = "abcdefghijklmnopqrstuvwxyz";

lazy_static! {
    static ref CODEC: Codec = Codec::new();
}

#[derive(Debug, Clone)]
/// Translate from characters to tile codes.
/// The set of known tiles is closed:
/// - 1 .. 26: `a` .. `z` (either case)
/// - 64: Blank tile `?`
///
/// Only ASCII letters are folded to lower case, every other character is not a tile.
pub struct Codec {
    encoder: HashMap<char, Code>,
}

impl Default for Codec {
    fn default() -> Codec {
        Codec::new()
    }
}

impl Codec {
    /// Return a new `Codec` for "a".."z" and "?".
    pub fn new() -> Codec {
        let mut encoder = HashMap::new();
        for (i, ch) in ASCII_LC.chars().enumerate() {
            encoder.insert(ch, i as u8 + 1);
        }
        encoder.insert(BLANK_SYMBOL, BLANK);
        Codec { encoder }
    }

    /// The shared codec used by every [`TileBag`](crate::TileBag).
    pub fn standard() -> &'static Codec {
        &CODEC
    }

    /// Return the code for a single character, or `None` if it is not a tile.
    pub fn code_of(&self, ch: char) -> Option<Code> {
        self.encoder.get(&ch.to_ascii_lowercase()).copied()
    }

    /// Return the list of tile codes for `word`.
    /// ## Errors
    /// An [`Error::UnknownTile`] is returned for the first character that is not a tile.
    /// ## Examples
    /// ```
    /// use tile_filter::{Codec, Error};
    /// let codec = Codec::default();
    /// assert_eq!(codec.encode("azAZ?")?, vec![1, 26, 1, 26, 64]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn encode(&self, word: &str) -> Result<Vec<Code>, Error> {
        word.chars()
            .map(|ch| {
                self.code_of(ch).ok_or_else(|| Error::UnknownTile {
                    tile: ch,
                    line: word.to_string(),
                })
            })
            .collect()
    }
}
