//! Test-only fixture: a real, in-process-searched [`AttackIndex`] so this
//! crate's tests don't depend on a `magicgen`-produced magic file on disk.
//!
//! Duplicates the same sparse "AND of three random draws" candidate search
//! `kestrel_core`'s own tests and `magicgen` use (see
//! `kestrel_core::move_gen::magic`'s test module) rather than depending on
//! `kestrel_core` being built with `cfg(test)`, which a downstream crate
//! cannot observe. The result is cached for the test binary's lifetime since
//! nothing about it is mutable.

use std::sync::OnceLock;

use kestrel_core::{
    board::{Bitboard, Square},
    move_gen::{
        bitboard_utils::{
            bishop_attack_blocker_mask, bishop_attacks, nth_blocker_arrangement_for_mask,
            rook_attack_blocker_mask, rook_attacks,
        },
        lookups::gen_ray_attacks,
        AttackIndex, MagicEntry, Magics,
    },
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

    let mut rng = Xorshift(seed_offset ^ (square.index() as u64 + 1).wrapping_mul(0x9E3779B97F4A7C15));
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

pub(crate) fn attack_index_for_tests() -> &'static AttackIndex {
    ATTACK_INDEX.get_or_init(|| AttackIndex::new(&search_magics()))
}
