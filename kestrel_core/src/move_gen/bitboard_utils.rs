//! Bitboard utility functions used to build the lookup and magic tables.
//! Nothing in this module should be called from move generation directly --
//! it is deliberately slow (loops, masking) in exchange for being easy to
//! check against the blocker-mask / magic-index scheme it feeds.

use num_derive::{FromPrimitive, ToPrimitive};

use crate::board::{Bitboard, Square};

/// A ray direction radiating from a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Direction {
    East = 0,
    North = 1,
    NorthEast = 2,
    NorthWest = 3,
    West = 4,
    South = 5,
    SouthWest = 6,
    SouthEast = 7,
}

/// All knight attacks from a bitboard of knights.
///
/// Built out of repeated [`Bitboard`] step calls rather than hand-tuned raw
/// shift amounts -- this square mapping's h1=0 origin runs the opposite way
/// from a conventional a1=0 board, so "two ranks then one file" is easiest to
/// get right by composing the already-verified step primitives.
pub fn knight_attacks(b: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;

    attacks |= b.step_north().step_north().step_east();
    attacks |= b.step_north().step_north().step_west();
    attacks |= b.step_south().step_south().step_east();
    attacks |= b.step_south().step_south().step_west();
    attacks |= b.step_east().step_east().step_north();
    attacks |= b.step_east().step_east().step_south();
    attacks |= b.step_west().step_west().step_north();
    attacks |= b.step_west().step_west().step_south();

    attacks
}

/// All king moves from a bitboard of kings.
pub fn king_moves(b: Bitboard) -> Bitboard {
    let mut attacks = b.step_east() | b.step_west();
    let tmp = b | attacks;
    attacks |= tmp.step_north() | tmp.step_south();

    attacks
}

pub(super) fn unblocked_ray_attacks(b: Bitboard, dir: Direction) -> Bitboard {
    let step_fn = match dir {
        Direction::East => Bitboard::step_east,
        Direction::North => Bitboard::step_north,
        Direction::NorthEast => Bitboard::step_north_east,
        Direction::NorthWest => Bitboard::step_north_west,
        Direction::West => Bitboard::step_west,
        Direction::South => Bitboard::step_south,
        Direction::SouthWest => Bitboard::step_south_west,
        Direction::SouthEast => Bitboard::step_south_east,
    };

    let mut attacks = step_fn(b);
    loop {
        let new_attacks = attacks | step_fn(attacks);
        if new_attacks == attacks {
            break;
        }
        attacks = new_attacks;
    }

    attacks
}

/// Rays in directions whose square index increases as they travel (east,
/// north, northeast, northwest) stop at the nearest blocker by scanning from
/// the low end with [`Bitboard::lsb`].
fn positive_ray_attacks(
    occupied: Bitboard,
    square: Square,
    dir: Direction,
    ray_attacks: &[[Bitboard; 8]; 64],
) -> Bitboard {
    let attacks = ray_attacks[square.index()][dir as usize];
    let blocker = attacks & occupied;
    let block_square = (blocker | Bitboard(0x8000_0000_0000_0000)).lsb();
    attacks ^ ray_attacks[block_square as usize][dir as usize]
}

/// Rays in directions whose square index decreases as they travel (west,
/// south, southwest, southeast) stop at the nearest blocker by scanning from
/// the high end with [`Bitboard::msb`].
fn negative_ray_attacks(
    occupied: Bitboard,
    square: Square,
    dir: Direction,
    ray_attacks: &[[Bitboard; 8]; 64],
) -> Bitboard {
    let attacks = ray_attacks[square.index()][dir as usize];
    let blocker = attacks & occupied;
    let block_square = (blocker | Bitboard(1)).msb();
    attacks ^ ray_attacks[block_square as usize][dir as usize]
}

fn diagonal_attacks(
    occupied: Bitboard,
    square: Square,
    ray_attacks: &[[Bitboard; 8]; 64],
) -> Bitboard {
    positive_ray_attacks(occupied, square, Direction::NorthEast, ray_attacks)
        | negative_ray_attacks(occupied, square, Direction::SouthWest, ray_attacks)
}

fn antidiagonal_attacks(
    occupied: Bitboard,
    square: Square,
    ray_attacks: &[[Bitboard; 8]; 64],
) -> Bitboard {
    positive_ray_attacks(occupied, square, Direction::NorthWest, ray_attacks)
        | negative_ray_attacks(occupied, square, Direction::SouthEast, ray_attacks)
}

fn file_attacks(occupied: Bitboard, square: Square, ray_attacks: &[[Bitboard; 8]; 64]) -> Bitboard {
    positive_ray_attacks(occupied, square, Direction::North, ray_attacks)
        | negative_ray_attacks(occupied, square, Direction::South, ray_attacks)
}

fn rank_attacks(occupied: Bitboard, square: Square, ray_attacks: &[[Bitboard; 8]; 64]) -> Bitboard {
    // East (`step_east` is `>>1`) travels toward decreasing indices, the
    // opposite of the teacher's a1=0 board where East increases the index --
    // so East scans from the high end and West from the low end here.
    negative_ray_attacks(occupied, square, Direction::East, ray_attacks)
        | positive_ray_attacks(occupied, square, Direction::West, ray_attacks)
}

/// Rook attacks from `square`, stopping at (and including) the first blocker
/// in `occupied` in each direction.
pub fn rook_attacks(
    occupied: Bitboard,
    square: Square,
    ray_attacks: &[[Bitboard; 8]; 64],
) -> Bitboard {
    file_attacks(occupied, square, ray_attacks) | rank_attacks(occupied, square, ray_attacks)
}

/// Bishop attacks from `square`, stopping at (and including) the first
/// blocker in `occupied` in each direction.
pub fn bishop_attacks(
    occupied: Bitboard,
    square: Square,
    ray_attacks: &[[Bitboard; 8]; 64],
) -> Bitboard {
    diagonal_attacks(occupied, square, ray_attacks)
        | antidiagonal_attacks(occupied, square, ray_attacks)
}

/// Queen attacks from `square`: the union of [`rook_attacks`] and
/// [`bishop_attacks`].
pub fn queen_attacks(
    occupied: Bitboard,
    square: Square,
    ray_attacks: &[[Bitboard; 8]; 64],
) -> Bitboard {
    rook_attacks(occupied, square, ray_attacks) | bishop_attacks(occupied, square, ray_attacks)
}

/// The squares from which a piece could block a rook on `square`. The last
/// square in each direction never affects the attack pattern (the ray
/// already stops there), so it is excluded from the mask.
pub fn rook_attack_blocker_mask(square: Square, ray_attacks: &[[Bitboard; 8]; 64]) -> Bitboard {
    let vertical_mask = (ray_attacks[square.index()][Direction::North as usize]
        | ray_attacks[square.index()][Direction::South as usize])
        .without(Bitboard::RANK_1 | Bitboard::RANK_8);
    let horizontal_mask = (ray_attacks[square.index()][Direction::East as usize]
        | ray_attacks[square.index()][Direction::West as usize])
        .without(Bitboard::A_FILE | Bitboard::H_FILE);

    vertical_mask | horizontal_mask
}

/// The squares from which a piece could block a bishop on `square`, for the
/// same reason as [`rook_attack_blocker_mask`].
pub fn bishop_attack_blocker_mask(square: Square, ray_attacks: &[[Bitboard; 8]; 64]) -> Bitboard {
    let board_edge = Bitboard::RANK_1 | Bitboard::RANK_8 | Bitboard::A_FILE | Bitboard::H_FILE;

    (ray_attacks[square.index()][Direction::NorthEast as usize]
        | ray_attacks[square.index()][Direction::NorthWest as usize]
        | ray_attacks[square.index()][Direction::SouthWest as usize]
        | ray_attacks[square.index()][Direction::SouthEast as usize])
        .without(board_edge)
}

/// Scatters the low bits of `n` across the set bits of `mask` (parallel bits
/// deposit). Iterating `n` over `0..1 << mask.pop_count()` enumerates every
/// blocker arrangement for that mask exactly once.
pub fn nth_blocker_arrangement_for_mask(mut n: usize, mask: Bitboard) -> Bitboard {
    let mut result = 0u64;
    for square in mask.bits() {
        result |= ((n & 1) as u64) << square.get();
        n >>= 1;
    }
    Bitboard(result)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::move_gen::lookups::gen_ray_attacks;

    #[test]
    fn knight_attacks_from_center() {
        assert_eq!(
            knight_attacks(Bitboard::from_square(Square::D4)),
            "
                . . . . . . . .
                . . . . . . . .
                . . # . # . . .
                . # . . . # . .
                . . . . . . . .
                . # . . . # . .
                . . # . # . . .
                . . . . . . . .
            "
            .parse()
            .unwrap()
        );
    }

    #[test]
    fn knight_attacks_from_corner() {
        assert_eq!(
            knight_attacks(Bitboard::from_square(Square::A1)),
            "
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . # . . . . . .
                . . # . . . . .
                . . . . . . . .
            "
            .parse()
            .unwrap()
        );

        assert_eq!(
            knight_attacks(Bitboard::from_square(Square::H8)),
            "
                . . . . . . . .
                . . . . . # . .
                . . . . . . # .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
            "
            .parse()
            .unwrap()
        );
    }

    #[test]
    fn king_moves_from_center() {
        assert_eq!(
            king_moves(Bitboard::from_square(Square::D4)),
            "
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . # # # . . .
                . . # . # . . .
                . . # # # . . .
                . . . . . . . .
                . . . . . . . .
            "
            .parse()
            .unwrap()
        );
    }

    #[test]
    fn king_moves_from_edge() {
        assert_eq!(
            king_moves(Bitboard::from_square(Square::E1)),
            "
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . # # # . .
                . . . # . # . .
            "
            .parse()
            .unwrap()
        );
    }

    #[test]
    fn rook_attacks_stop_at_blockers() {
        let ray_attacks = gen_ray_attacks();
        let occupied = "
                . . . . . . . .
                . . . . # . . .
                . . . . . . . .
                . . . . # . . .
                . . # . # . . .
                . . . . . . . .
                . . . # . . . .
                . . . . # . . .
        "
        .parse()
        .unwrap();
        assert_eq!(
            rook_attacks(occupied, Square::E4, &ray_attacks),
            "
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . # . . .
                . . # # . # # #
                . . . . # . . .
                . . . . # . . .
                . . . . # . . .
            "
            .parse()
            .unwrap(),
        );
    }

    #[test]
    fn bishop_attacks_stop_at_blockers() {
        let ray_attacks = gen_ray_attacks();
        let occupied = "
                . . . . . . . .
                . # . . . . . .
                . . . . . . . .
                . . . # . . . .
                . . . # # . . .
                . . . . . . . .
                . . # . . . . .
                . . . . . . . .
        "
        .parse()
        .unwrap();
        assert_eq!(
            bishop_attacks(occupied, Square::E4, &ray_attacks),
            "
                . . . . . . . .
                . . . . . . . #
                . . . . . . # .
                . . . # . # . .
                . . . . . . . .
                . . . # . # . .
                . . # . . . # .
                . . . . . . . #
            "
            .parse()
            .unwrap(),
        );
    }

    #[test]
    fn rook_blocker_mask_excludes_edges() {
        let ray_attacks = gen_ray_attacks();
        assert_eq!(
            rook_attack_blocker_mask(Square::A1, &ray_attacks),
            "
                . . . . . . . .
                # . . . . . . .
                # . . . . . . .
                # . . . . . . .
                # . . . . . . .
                # . . . . . . .
                # . . . . . . .
                . # # # # # # .
            "
            .parse()
            .unwrap()
        );
    }

    #[test]
    fn bishop_blocker_mask_excludes_edges() {
        let ray_attacks = gen_ray_attacks();
        assert_eq!(
            bishop_attack_blocker_mask(Square::D3, &ray_attacks),
            "
                . . . . . . . .
                . . . . . . . .
                . . . . . . # .
                . # . . . # . .
                . . # . # . . .
                . . . . . . . .
                . . # . # . . .
                . . . . . . . .
            "
            .parse()
            .unwrap()
        );
    }

    #[test]
    fn nth_blocker_arrangement_scatters_bits() {
        let mask = Bitboard(0b1100_1010);
        assert_eq!(nth_blocker_arrangement_for_mask(0, mask), Bitboard(0));
        assert_eq!(
            nth_blocker_arrangement_for_mask(0b1111, mask),
            Bitboard(0b1100_1010)
        );
        assert_eq!(
            nth_blocker_arrangement_for_mask(0b0001, mask),
            Bitboard(0b0000_0010)
        );
    }
}
