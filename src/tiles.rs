//! Basic types for working with letter tiles.
mod codec;
mod codes;

pub use codec::Codec;
pub use codes::{Code, BLANK, BLANK_SYMBOL};
