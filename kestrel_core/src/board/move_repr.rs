use std::fmt::{Debug, Display};

use super::Square;

/// A pseudo-legal move, packed into 16 bits: from-square (6 bits), to-square
/// (6 bits), and 4 reserved flag bits. No move in this crate ever sets the
/// flag bits -- there is no castling, en passant, or promotion -- but the
/// field is kept so the wire/file encodings have room to grow without a
/// layout change.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move(u16);

const FROM_SHIFT: u16 = 0;
const TO_SHIFT: u16 = 6;
const SQUARE_MASK: u16 = 0x3F;

impl Move {
    pub const NULL: Move = Move(0);

    pub fn new(from: Square, to: Square) -> Self {
        Self((from.get() as u16) << FROM_SHIFT | (to.get() as u16) << TO_SHIFT)
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub fn from(self) -> Square {
        Square::from_index_unchecked(((self.0 >> FROM_SHIFT) & SQUARE_MASK) as usize)
    }

    pub fn to(self) -> Square {
        Square::from_index_unchecked(((self.0 >> TO_SHIFT) & SQUARE_MASK) as usize)
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            f.write_str("0000")
        } else {
            write!(f, "{}{}", self.from(), self.to())
        }
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move({self})")
    }
}
