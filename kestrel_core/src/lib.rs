//! Board representation, magic-hashed sliding attack tables, and
//! pseudo-legal move generation for the kestrel chess engine.
//!
//! This crate is pure data and algorithms: the only I/O it performs is
//! reading a magic-number file ([`move_gen::Magics::load`]) and parsing FEN
//! strings ([`board::parse_fen`]). Search and evaluation live in
//! `kestrel_engine`; the UCI loop lives in `kestrel_uci`.

pub mod board;
pub mod error;
pub mod move_gen;

#[cfg(test)]
pub(crate) mod test_utils;
