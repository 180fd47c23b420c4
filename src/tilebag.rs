use crate::tiles::{Code, Codec, BLANK};
use crate::Error;
use lazy_static::lazy_static;
use multiset::HashMultiSet;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// The tiles available to draw from: 98 letters and two blanks (`?`).
pub const TILES: &str = "??AAAAAAAAABBCCDDDDEEEEEEEEEEEEFFGGGHHIIIIIIIIIJKLLLLMMNNNNNNOOOOOOOOPPQRRRRRRSSSSTTTTTTUUUUVVWWXYYZ";

lazy_static! {
    // TILES only contains letters and blanks, so it is safe to unwrap
    static ref STANDARD: TileBag = TileBag::from_tiles(TILES).unwrap();
}

/// Keeps track of the tiles
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Code>);

impl Deref for TileBag {
    type Target = HashMultiSet<Code>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for TileBag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<TileBag: {} tiles, {} blanks>", self.len(), self.blanks())
    }
}

impl FromStr for TileBag {
    type Err = Error;

    fn from_str(tiles: &str) -> Result<Self, Self::Err> {
        TileBag::from_tiles(tiles)
    }
}

impl TileBag {
    /// Create a bag from a tile literal, one tile per character.
    /// Letters are case insensitive, `?` is a blank.
    /// ## Errors
    /// An error is returned if the literal contains anything else.
    /// ## Examples
    /// ```
    /// use tile_filter::{Error, TileBag};
    /// let bag = TileBag::from_tiles("AAB?")?;
    /// assert_eq!(bag.count('a'), 2);
    /// assert_eq!(bag.blanks(), 1);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_tiles(tiles: &str) -> Result<TileBag, Error> {
        let mut bag = HashMultiSet::new();
        for code in Codec::standard().encode(tiles)? {
            bag.insert(code);
        }
        Ok(Self(bag))
    }

    /// The bag built from [`TILES`].
    pub fn standard() -> &'static TileBag {
        &STANDARD
    }

    /// Number of tiles for letter `ch` (either case), or 0 if it is not a tile.
    pub fn count(&self, ch: char) -> usize {
        Codec::standard()
            .code_of(ch)
            .map_or(0, |code| self.count_of(&code))
    }

    /// Number of blank tiles.
    pub fn blanks(&self) -> usize {
        self.count_of(&BLANK)
    }

    /// Check if `word` can be laid out with the tiles in the bag.
    ///
    /// The word is drawn letter by letter, ignoring ASCII case, from a copy of the bag.
    /// A letter that is no longer available uses up a blank instead.
    /// Drawing stops at the first letter that can not be covered.
    /// The bag itself is never changed.
    /// ## Errors
    /// An error is returned if a character is reached that is not a tile.
    /// ## Examples
    /// ```
    /// use tile_filter::{Error, TileBag};
    /// let bag = TileBag::standard();
    /// assert!(bag.can_draw("FIZZ")?);
    /// assert!(bag.can_draw("jjj")?);
    /// assert!(!bag.can_draw("jjjj")?);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn can_draw(&self, word: &str) -> Result<bool, Error> {
        let codec = Codec::standard();
        let mut tiles = self.0.clone();
        for ch in word.chars() {
            let code = codec.code_of(ch).ok_or_else(|| Error::UnknownTile {
                tile: ch,
                line: word.to_string(),
            })?;
            if !(tiles.remove(&code) || tiles.remove(&BLANK)) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
