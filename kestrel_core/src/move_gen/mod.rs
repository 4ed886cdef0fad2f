//! Move generation: lookup/magic tables and the pseudo-legal generator built
//! on top of them.

pub mod bitboard_utils;
pub mod lookups;
pub mod magic;

mod generate;

#[cfg(test)]
pub(crate) mod test_support;

pub use generate::{generate_pseudo_legal_moves, in_check, MoveVec, MAX_MOVES};
pub use lookups::Tables;
pub use magic::{AttackIndex, MagicEntry, Magics};
