//! Lookup tables for leaper pieces (knight, king), plus the ray-attack
//! generation helpers the magic-table builder needs.
//!
//! Unlike the ancestor this module is adapted from, [`Tables`] is not a
//! lazily-initialized global singleton -- callers build one explicitly at
//! startup and thread a `&Tables` through move generation and search. This
//! keeps the engine core free of process-wide mutable state, at the cost of
//! one extra parameter on most of this crate's public functions.

use num_traits::FromPrimitive;

use crate::board::{Bitboard, Square};

use super::bitboard_utils::{king_moves, knight_attacks, unblocked_ray_attacks, Direction};

/// Leaper-piece attack tables, built once at startup and then immutable for
/// the lifetime of the engine.
pub struct Tables {
    knight_moves: [Bitboard; 64],
    king_moves: [Bitboard; 64],
}

impl Tables {
    pub fn new() -> Self {
        Self {
            knight_moves: gen_knight_moves(),
            king_moves: gen_king_moves(),
        }
    }

    /// All knight moves originating from `square`.
    pub fn knight_moves(&self, square: Square) -> Bitboard {
        self.knight_moves[square.index()]
    }

    /// All king moves originating from `square`.
    pub fn king_moves(&self, square: Square) -> Bitboard {
        self.king_moves[square.index()]
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a knight move lookup table, indexable by square index.
pub fn gen_knight_moves() -> [Bitboard; 64] {
    let mut moves = [Bitboard::EMPTY; 64];
    for (i, moves_from_square) in moves.iter_mut().enumerate() {
        *moves_from_square = knight_attacks(Bitboard::from_index(i as u8));
    }
    moves
}

/// Generates a king move lookup table, indexable by square index.
pub fn gen_king_moves() -> [Bitboard; 64] {
    let mut moves = [Bitboard::EMPTY; 64];
    for (i, moves_from_square) in moves.iter_mut().enumerate() {
        *moves_from_square = king_moves(Bitboard::from_index(i as u8));
    }
    moves
}

/// Generates a ray attack table: indexable by square, then by [`Direction`],
/// giving the (unblocked) ray in that direction from that square. Feeds both
/// the blocker-mask computation and the magic-table builder.
pub fn gen_ray_attacks() -> [[Bitboard; 8]; 64] {
    let mut attacks = [[Bitboard::EMPTY; 8]; 64];

    for (i, attacks_from_square) in attacks.iter_mut().enumerate() {
        let base = Bitboard::from_index(i as u8);

        for (dir, attacks_in_dir) in attacks_from_square.iter_mut().enumerate() {
            let dir_enum = Direction::from_usize(dir).unwrap();
            *attacks_in_dir = unblocked_ray_attacks(base, dir_enum);
        }
    }

    attacks
}
