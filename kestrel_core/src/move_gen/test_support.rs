//! Test-only fixtures shared across `move_gen` and (via `pub(crate)`) the
//! rest of the crate's test modules: a real, searched-in-process
//! [`AttackIndex`] so tests don't need an on-disk magic file.
//!
//! The search here uses the same sparse "AND of three random draws"
//! candidate technique the offline `magicgen` tool uses, which converges in
//! at most a few hundred attempts per square in practice -- this is not a
//! toy shortcut, it's the standard approach. The result is cached for the
//! lifetime of the test binary since nothing about it is mutable.

use std::sync::OnceLock;

use crate::board::{Bitboard, Square};

use super::{
    bitboard_utils::{
        bishop_attack_blocker_mask, bishop_attacks, nth_blocker_arrangement_for_mask,
        rook_attack_blocker_mask, rook_attacks,
    },
    lookups::gen_ray_attacks,
    magic::{AttackIndex, MagicEntry, Magics},
};

struct Xorshift(u64);

impl Xorshift {
    fn next_u64(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn next_sparse_u64(&mut self) -> u64 {
        self.next_u64() & self.next_u64() & self.next_u64()
    }
}

fn find_magic(
    square: Square,
    mask: Bitboard,
    ray_attacks: &[[Bitboard; 8]; 64],
    slow_attacks: impl Fn(Bitboard, Square, &[[Bitboard; 8]; 64]) -> Bitboard,
    seed_offset: u64,
) -> MagicEntry {
    let bits = mask.pop_count();
    let shift = 64 - bits;
    let size = 1usize << bits;

    let mut rng = Xorshift(
        0x2545F4914F6CDD1Du64 ^ ((square.index() as u64 + 1) * seed_offset).wrapping_add(seed_offset),
    );
    loop {
        let candidate = rng.next_sparse_u64();

        let mut table = vec![None; size];
        let mut ok = true;
        for n in 0..size {
            let occ = nth_blocker_arrangement_for_mask(n, mask);
            let attacks = slow_attacks(occ, square, ray_attacks);
            let index = (occ.0.wrapping_mul(candidate) >> shift) as usize;
            match table[index] {
                None => table[index] = Some(attacks),
                Some(existing) if existing == attacks => {}
                Some(_) => {
                    ok = false;
                    break;
                }
            }
        }
        if ok {
            return MagicEntry { magic: candidate, shift };
        }
    }
}

fn search_magics() -> Magics {
    let ray_attacks = gen_ray_attacks();

    let mut rook = [MagicEntry { magic: 0, shift: 64 }; 64];
    let mut bishop = [MagicEntry { magic: 0, shift: 64 }; 64];

    for square in Square::all() {
        let rook_mask = rook_attack_blocker_mask(square, &ray_attacks);
        rook[square.index()] = find_magic(square, rook_mask, &ray_attacks, rook_attacks, 0x9E3779B97F4A7C15);

        let bishop_mask = bishop_attack_blocker_mask(square, &ray_attacks);
        bishop[square.index()] =
            find_magic(square, bishop_mask, &ray_attacks, bishop_attacks, 0xC2B2AE3D27D4EB4F);
    }

    Magics::from_entries(rook, bishop)
}

static ATTACK_INDEX: OnceLock<AttackIndex> = OnceLock::new();

/// A real [`AttackIndex`] built from in-process-searched magics, shared
/// across this test binary's tests. Not a pattern used in the engine itself
/// (see the module docs on [`AttackIndex`]) -- this is purely a fixture.
pub(crate) fn attack_index_for_tests() -> &'static AttackIndex {
    ATTACK_INDEX.get_or_init(|| AttackIndex::new(&search_magics()))
}
