//! Filter a wordlist down to the words that can be laid out with a fixed bag of letter tiles.
//! <br>
//! The bag holds the 100 tiles of a standard game: 98 letters and two blanks.
//! A blank can stand in for any letter that has run out.
//! Words are matched case insensitive, but passing words keep their original case.
//!
//! # How to use `tile_filter`
//! The `tile-filter` binary reads one candidate per line from standard input,
//! and prints the candidates that can be drawn from the bag, with surrounding whitespace removed.
//! Only the ASCII letters `a`..`z` (either case) and the blank symbol `?` are tiles.
//! Any other character in a candidate stops the run with an error.
//!
//! # Basic usage
//!  ```
//! # use tile_filter::{filter, Error, TileBag};
//! let bag = TileBag::standard();
//! assert!(bag.can_draw("fizz")?);
//! let words = filter(bag, &["fizz", "FIZZ", "jjjj"]).collect::<Result<Vec<_>, Error>>()?;
//! assert_eq!(words, &["fizz", "FIZZ"]);
//! # Ok::<(), Error>(())
//! ```
mod error;
mod filter;
mod tilebag;
mod tiles;

pub use crate::error::Error;
pub use crate::filter::{filter, run, Filter, Summary};
pub use crate::tilebag::{TileBag, TILES};
pub use crate::tiles::{Code, Codec, BLANK, BLANK_SYMBOL};
