/// Tile code used to represent a letter or a blank. See [`Codec`](crate::Codec).
pub type Code = u8;

/// code for BLANK tile
pub const BLANK: Code = 0x40;

/// Symbol used for a blank tile, both in the tile literal and in candidates
pub const BLANK_SYMBOL: char = '?';
