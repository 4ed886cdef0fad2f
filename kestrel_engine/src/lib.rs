//! Minimax search with alpha-beta pruning over `kestrel_core` positions.
//!
//! This crate owns the only evaluation-dependent logic in the engine: a
//! material + piece-square evaluator and a classical two-sided minimax
//! search built on it. It depends on nothing but `kestrel_core` and knows
//! nothing about UCI or magic-number generation.

pub mod evaluate;
pub mod piece_tables;
pub mod search;
pub mod search_result;

#[cfg(test)]
pub(crate) mod test_support;

pub use evaluate::evaluate;
pub use search::search;
pub use search_result::SearchResult;
