//! Offline search for rook/bishop magic multipliers.
//!
//! Ported from the teacher's `find_magics` tool: the same sparse-candidate
//! generation (`rand()&rand()&rand()`), the same acceptance test, and the
//! same classic per-square target-bit tables. Differs in two ways the
//! teacher's one-shot tool didn't need: the search is anytime (it keeps
//! biasing toward fewer bits until Ctrl-C cuts it off) and the result is
//! written in the two-line whitespace format
//! `kestrel_core::move_gen::Magics::load` reads, not printed as Rust source.

use std::{
    io::Write,
    sync::atomic::{AtomicBool, Ordering},
};

use rand::{thread_rng, Rng};

use kestrel_core::{
    board::{Bitboard, Square},
    move_gen::{
        bitboard_utils::{
            bishop_attack_blocker_mask, bishop_attacks, nth_blocker_arrangement_for_mask,
            rook_attack_blocker_mask, rook_attacks,
        },
        lookups::gen_ray_attacks,
    },
};

/// Draws spent searching one target bit-count before accepting it as final
/// for that square. Matches the teacher's `find_magics` search_limit.
const ATTEMPTS_PER_TARGET: usize = 1_000_000;

/// Classic rook target bit-counts (Chess Programming Wiki magic bitboards);
/// copied verbatim from the teacher's `find_magics`.
#[rustfmt::skip]
const ROOK_TARGET_BITS: [u32; 64] = [
    12, 11, 11, 11, 11, 11, 11, 12,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    12, 11, 11, 11, 11, 11, 11, 12,
];

#[rustfmt::skip]
const BISHOP_TARGET_BITS: [u32; 64] = [
    6, 5, 5, 5, 5, 5, 5, 6,
    5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 7, 7, 7, 7, 5, 5,
    5, 5, 7, 9, 9, 7, 5, 5,
    5, 5, 7, 9, 9, 7, 5, 5,
    5, 5, 7, 7, 7, 7, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5,
    6, 5, 5, 5, 5, 5, 5, 6,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MagicType {
    Bishop,
    Rook,
}

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

extern "C" fn handle_sigint(_signum: libc::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// No crate in the pack pulls in a signal-handling abstraction (`ctrlc` et
/// al.), so this reaches for `libc::signal` directly; the handler only flips
/// a flag, nothing unsafe happens on the signal-handling side itself.
fn install_interrupt_handler() {
    unsafe {
        libc::signal(libc::SIGINT, handle_sigint as libc::sighandler_t);
    }
}

fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

fn random_u64_few_bits(r: &mut (impl Rng + ?Sized)) -> u64 {
    r.next_u64() & r.next_u64() & r.next_u64()
}

fn get_magic_index(board: Bitboard, magic: u64, num_bits: u32) -> usize {
    ((board.0.wrapping_mul(magic)) >> (64 - num_bits)) as usize
}

fn is_magic(
    all_blocker_arrangements: &[Bitboard],
    attacks_for_blocker_arrangements: &[Bitboard],
    num_bits: u32,
    magic: u64,
) -> bool {
    let mut used_table = vec![None; 1 << num_bits];

    for (&blockers, &attacks) in all_blocker_arrangements.iter().zip(attacks_for_blocker_arrangements) {
        let index = get_magic_index(blockers, magic, num_bits);
        match used_table[index] {
            None => used_table[index] = Some(attacks),
            Some(existing) if existing == attacks => {}
            Some(_) => return false,
        }
    }

    true
}

fn try_attempts(
    target_bits: u32,
    attempts: usize,
    rng: &mut impl Rng,
    blocker_arrangements: &[Bitboard],
    attacks: &[Bitboard],
) -> Option<u64> {
    for _ in 0..attempts {
        let candidate = random_u64_few_bits(rng);
        if is_magic(blocker_arrangements, attacks, target_bits, candidate) {
            return Some(candidate);
        }
    }
    None
}

struct Found {
    magic: u64,
    bits: u32,
}

/// Anytime search for one square. Phase 1 finds a magic at `initial_bits`
/// (the classic per-square table, always satisfiable within a handful of
/// draws, so this phase ignores the interrupt flag to guarantee every
/// square ends up with a usable entry). Phase 2 then keeps biasing toward
/// fewer bits -- R' = 64 - (bits_used - 1) -- for as long as each attempt
/// succeeds and no interrupt has arrived, keeping the best (smallest-table)
/// magic found so far.
fn search_square(
    square: Square,
    magic_type: MagicType,
    initial_bits: u32,
    ray_attacks: &[[Bitboard; 8]; 64],
    rng: &mut impl Rng,
) -> Found {
    let mask = match magic_type {
        MagicType::Bishop => bishop_attack_blocker_mask(square, ray_attacks),
        MagicType::Rook => rook_attack_blocker_mask(square, ray_attacks),
    };

    let blocker_arrangements: Vec<Bitboard> = (0..1u64 << mask.pop_count())
        .map(|n| nth_blocker_arrangement_for_mask(n as usize, mask))
        .collect();
    let attacks: Vec<Bitboard> = blocker_arrangements
        .iter()
        .map(|&occ| match magic_type {
            MagicType::Bishop => bishop_attacks(occ, square, ray_attacks),
            MagicType::Rook => rook_attacks(occ, square, ray_attacks),
        })
        .collect();

    let mut bits = initial_bits;
    let mut magic = loop {
        if let Some(found) = try_attempts(bits, ATTEMPTS_PER_TARGET, rng, &blocker_arrangements, &attacks) {
            break found;
        }
        // Should not happen for the classic tables above; widen the search
        // rather than loop forever on an unsatisfiable target.
        bits += 1;
    };
    let mut best = Found { magic, bits };

    while !interrupted() && best.bits > 0 {
        let next_bits = best.bits - 1;
        match try_attempts(next_bits, ATTEMPTS_PER_TARGET, rng, &blocker_arrangements, &attacks) {
            Some(candidate) => {
                magic = candidate;
                best = Found { magic, bits: next_bits };
            }
            None => break,
        }
    }

    best
}

fn run_family(
    magic_type: MagicType,
    target_bits: &[u32; 64],
    ray_attacks: &[[Bitboard; 8]; 64],
    rng: &mut impl Rng,
) -> (Vec<u64>, Vec<u32>) {
    let mut magics = Vec::with_capacity(64);
    let mut shifts = Vec::with_capacity(64);

    for (i, &bits) in target_bits.iter().enumerate() {
        let square = Square::from_index_unchecked(i);
        let found = search_square(square, magic_type, bits, ray_attacks, rng);
        magics.push(found.magic);
        shifts.push(64 - found.bits);
    }

    (magics, shifts)
}

fn write_family_file(path: &str, magics: &[u64], shifts: &[u32]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    let magic_line = magics.iter().map(u64::to_string).collect::<Vec<_>>().join(" ");
    let shift_line = shifts.iter().map(u32::to_string).collect::<Vec<_>>().join(" ");
    writeln!(file, "{magic_line}")?;
    writeln!(file, "{shift_line}")?;
    Ok(())
}

fn main() {
    install_interrupt_handler();

    let mut args = std::env::args().skip(1);
    let rook_path = args.next().unwrap_or_else(|| "rook-magics.out".to_string());
    let bishop_path = args.next().unwrap_or_else(|| "bishop-magics.out".to_string());

    let ray_attacks = gen_ray_attacks();
    let mut rng = thread_rng();

    eprintln!("searching rook magics (Ctrl-C stops refinement and keeps the best found so far)...");
    let (rook_magics, rook_shifts) = run_family(MagicType::Rook, &ROOK_TARGET_BITS, &ray_attacks, &mut rng);
    write_family_file(&rook_path, &rook_magics, &rook_shifts).expect("failed to write rook magic file");
    eprintln!("wrote {rook_path}");

    if interrupted() {
        eprintln!("interrupted; bishop search will take the first valid magic per square without refining");
    }

    eprintln!("searching bishop magics...");
    let (bishop_magics, bishop_shifts) = run_family(MagicType::Bishop, &BISHOP_TARGET_BITS, &ray_attacks, &mut rng);
    write_family_file(&bishop_path, &bishop_magics, &bishop_shifts).expect("failed to write bishop magic file");
    eprintln!("wrote {bishop_path}");
}
