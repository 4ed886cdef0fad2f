use std::{
    fmt::{Debug, Display, Write},
    str::FromStr,
};

use paste::paste;
use seq_macro::seq;
use thiserror::Error;

/// Represents a square on the chessboard.
///
/// Internally, a square is an integer from 0-63 ordered so that bit 0 of a
/// [`crate::board::Bitboard`] is h1, bit 7 is a1, bit 56 is h8, and bit 63 is
/// a8: rank = index/8 + 1, and file (from h to a) = index % 8. This
/// orientation is load-bearing -- magic multipliers are computed per-square
/// against it, so it must never change without regenerating the magic files.
///
/// The public constructors and accessors on this type all speak the ordinary
/// a-to-h file numbering; the h1=0 storage is an implementation detail kept
/// internal to this module.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Construct a [`Square`] from the provided rank and file.
    ///
    /// Ranks are numbered 0-7 with 0 being rank 1 and 7 being rank 8.
    /// Files are numbered 0-7 with 0 being file A and 7 being file H.
    ///
    /// Returns [`None`] if either `rank` or `file` is greater than 7.
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank >= 8 || file >= 8 {
            None
        } else {
            Some(Self::new_unchecked(rank, file))
        }
    }

    /// Construct a [`Square`] from the provided rank and file, without
    /// checking that either is in range. Out-of-range values are truncated
    /// (via wrapping arithmetic) to a valid square, but will likely not be
    /// the square you wanted.
    pub const fn new_unchecked(rank: u8, file: u8) -> Self {
        let internal_file = 7 - (file % 8);
        Self((rank % 8).wrapping_mul(8).wrapping_add(internal_file) % 64)
    }

    /// Construct a [`Square`] from a raw h1=0 bit index.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Construct a [`Square`] from a raw h1=0 bit index, truncating
    /// out-of-range values into 0..64.
    pub const fn from_index_unchecked(index: usize) -> Self {
        Self((index % 64) as u8)
    }

    /// Returns the raw h1=0 bit index backing this square.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the raw h1=0 bit index backing this square, as a [`usize`].
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the rank of this square (0 = rank 1, 7 = rank 8).
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Returns the file of this square (0 = file A, 7 = file H).
    pub const fn file(self) -> u8 {
        7 - (self.0 % 8)
    }

    /// Returns an iterator over every square on the board.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Shifts this square's raw index by `delta`. Used for pawn push/capture
    /// destinations, where the caller already knows (from a blocker/empty
    /// mask) that the result stays on the board.
    pub const fn offset(self, delta: i8) -> Self {
        Self((self.0 as i8).wrapping_add(delta) as u8)
    }
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("invalid square")]
pub struct ParseSquareError;

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char((self.file() + b'a') as char)?;
        f.write_char((self.rank() + b'1') as char)
    }
}

impl Debug for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file = chars.next().ok_or(ParseSquareError)?;
        let rank = chars.next().ok_or(ParseSquareError)?;
        if chars.next().is_some() {
            return Err(ParseSquareError);
        }

        let file = (file as i32) - ('a' as i32);
        let rank = (rank as i32) - ('1' as i32);
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Ok(Square::new_unchecked(rank as u8, file as u8))
        } else {
            Err(ParseSquareError)
        }
    }
}

/// Named square aliases, e.g. `Square::E4`.
#[allow(clippy::eq_op, clippy::char_lit_as_u8)]
impl Square {
    seq!(RANK in 1..=8 {
        seq!(FILE in 'A'..='H' {
            paste! {
                pub const [<FILE RANK>]: Square = Square::new_unchecked(RANK - 1, FILE as u8 - b'A');
            }
        });
    });
}
