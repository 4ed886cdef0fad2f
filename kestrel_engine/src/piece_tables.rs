//! Piece-square tables: one 8x8 bonus table per non-king piece type, each
//! written rank-8-first, a-file-first so the source reads like a diagram of
//! the board from White's side.
//!
//! Values are small relative to material (see
//! [`kestrel_core::board::PieceType::material_value`]): a few points either
//! side of zero, enough to break ties between otherwise materially equal
//! moves without ever outweighing a pawn.

use kestrel_core::board::{PieceType, Square};

#[rustfmt::skip]
pub const PAWN: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [3, 3, 3, 3, 3, 3, 3, 3],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [0, 0, 1, 3, 3, 1, 0, 0],
    [0, 0, 0, 2, 2, 0, 0, 0],
    [1, -1, -2, 0, 0, -2, -1, 1],
    [1, 2, 2, -3, -3, 2, 2, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

#[rustfmt::skip]
pub const KNIGHT: [[i32; 8]; 8] = [
    [-5, -4, -3, -3, -3, -3, -4, -5],
    [-4, -2, 0, 0, 0, 0, -2, -4],
    [-3, 0, 1, 2, 2, 1, 0, -3],
    [-3, 1, 2, 3, 3, 2, 1, -3],
    [-3, 0, 2, 3, 3, 2, 0, -3],
    [-3, 1, 1, 2, 2, 1, 1, -3],
    [-4, -2, 0, 1, 1, 0, -2, -4],
    [-5, -4, -3, -3, -3, -3, -4, -5],
];

#[rustfmt::skip]
pub const BISHOP: [[i32; 8]; 8] = [
    [-2, -1, -1, -1, -1, -1, -1, -2],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 1, 2, 2, 1, 0, -1],
    [-1, 1, 1, 2, 2, 1, 1, -1],
    [-1, 0, 2, 2, 2, 2, 0, -1],
    [-1, 2, 2, 2, 2, 2, 2, -1],
    [-1, 1, 0, 0, 0, 0, 1, -1],
    [-2, -1, -1, -1, -1, -1, -1, -2],
];

#[rustfmt::skip]
pub const ROOK: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [0, 0, 0, 1, 1, 0, 0, 0],
];

#[rustfmt::skip]
pub const QUEEN: [[i32; 8]; 8] = [
    [-2, -1, -1, -1, -1, -1, -1, -2],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [-1, 0, 1, 1, 1, 1, 0, -1],
    [0, 0, 1, 1, 1, 1, 0, -1],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [-1, 1, 1, 1, 1, 1, 0, -1],
    [-1, 0, 1, 0, 0, 0, 0, -1],
    [-2, -1, -1, -1, -1, -1, -1, -2],
];

/// Looks up the bonus for `piece_type` standing on `square`, indexed per
/// §4.6's mirror convention (`table[7 - s/8][7 - s%8]`) since index 0 is h1
/// but the tables above are written rank-8-first, a-file-first.
pub fn piece_square_value(piece_type: PieceType, square: Square) -> i32 {
    let index = square.index();
    let row = 7 - index / 8;
    let col = 7 - index % 8;

    let table = match piece_type {
        PieceType::Pawn => &PAWN,
        PieceType::Knight => &KNIGHT,
        PieceType::Bishop => &BISHOP,
        PieceType::Rook => &ROOK,
        PieceType::Queen => &QUEEN,
        PieceType::King => return 0,
    };
    table[row][col]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn central_pawn_push_square_is_rewarded() {
        assert!(piece_square_value(PieceType::Pawn, Square::E4) > 0);
    }

    #[test]
    fn knight_in_the_corner_is_penalized() {
        assert!(piece_square_value(PieceType::Knight, Square::A1) < 0);
    }

    #[test]
    fn king_has_no_piece_square_bonus() {
        assert_eq!(piece_square_value(PieceType::King, Square::E1), 0);
    }
}
