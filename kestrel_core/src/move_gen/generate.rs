//! Pseudo-legal move generation for the side to move.
//!
//! No castling, en passant, or promotion: every emitted [`Move`] is a plain
//! from/to pair. Generated moves may leave the mover's own king in check --
//! filtering that out is [`crate::search`]'s job (see the `in_check` check
//! around each candidate move), not this module's.

use arrayvec::ArrayVec;

use crate::board::{Bitboard, Board, Color, Move, PieceType, Square};

use super::{lookups::Tables, magic::AttackIndex};

/// Upper bound on pseudo-legal moves from any reachable position. Generous
/// rather than tight, since (unlike the teacher's fully legal generator)
/// there is no promotion fan-out to push the real maximum toward 218.
pub const MAX_MOVES: usize = 128;

pub type MoveVec = ArrayVec<Move, MAX_MOVES>;

/// Generates every pseudo-legal move for `board.to_move`.
pub fn generate_pseudo_legal_moves(board: &Board, tables: &Tables, attack_index: &AttackIndex) -> MoveVec {
    let mut moves = MoveVec::new();

    let own_pieces = match board.to_move {
        Color::White => board.white_pieces,
        Color::Black => board.black_pieces,
    };
    let enemy_pieces = match board.to_move {
        Color::White => board.black_pieces,
        Color::Black => board.white_pieces,
    };

    generate_leaper_moves(board, tables, own_pieces, &mut moves);
    generate_slider_moves(board, attack_index, own_pieces, &mut moves);
    generate_pawn_moves(board, enemy_pieces, &mut moves);

    moves
}

fn generate_leaper_moves(board: &Board, tables: &Tables, own_pieces: Bitboard, moves: &mut MoveVec) {
    let (knights, king) = match board.to_move {
        Color::White => (board.white_knights, board.white_king),
        Color::Black => (board.black_knights, board.black_king),
    };

    for from in knights.bits() {
        for to in (tables.knight_moves(from) & !own_pieces).bits() {
            moves.push(Move::new(from, to));
        }
    }

    for from in king.bits() {
        for to in (tables.king_moves(from) & !own_pieces).bits() {
            moves.push(Move::new(from, to));
        }
    }
}

fn generate_slider_moves(
    board: &Board,
    attack_index: &AttackIndex,
    own_pieces: Bitboard,
    moves: &mut MoveVec,
) {
    let (bishops, rooks, queens) = match board.to_move {
        Color::White => (board.white_bishops, board.white_rooks, board.white_queens),
        Color::Black => (board.black_bishops, board.black_rooks, board.black_queens),
    };
    let occupied = board.all_pieces;

    for from in bishops.bits() {
        for to in (attack_index.bishop_attacks(occupied, from) & !own_pieces).bits() {
            moves.push(Move::new(from, to));
        }
    }

    for from in rooks.bits() {
        for to in (attack_index.rook_attacks(occupied, from) & !own_pieces).bits() {
            moves.push(Move::new(from, to));
        }
    }

    for from in queens.bits() {
        let attacks = attack_index.rook_attacks(occupied, from) | attack_index.bishop_attacks(occupied, from);
        for to in (attacks & !own_pieces).bits() {
            moves.push(Move::new(from, to));
        }
    }
}

fn generate_pawn_moves(board: &Board, enemy_pieces: Bitboard, moves: &mut MoveVec) {
    let empty = board.empty_squares;

    match board.to_move {
        Color::White => {
            let pawns = board.white_pawns;

            let single_targets = pawns.step_north() & empty;
            for to in single_targets.bits() {
                moves.push(Move::new(to.offset(-8), to));
            }

            let double_targets =
                (pawns & Bitboard::RANK_2).step_north().step_north() & empty & empty.step_north();
            for to in double_targets.bits() {
                moves.push(Move::new(to.offset(-16), to));
            }

            let ne_targets = pawns.step_north_east() & enemy_pieces;
            for to in ne_targets.bits() {
                moves.push(Move::new(to.offset(-7), to));
            }

            let nw_targets = pawns.step_north_west() & enemy_pieces;
            for to in nw_targets.bits() {
                moves.push(Move::new(to.offset(-9), to));
            }
        }
        Color::Black => {
            let pawns = board.black_pawns;

            let single_targets = pawns.step_south() & empty;
            for to in single_targets.bits() {
                moves.push(Move::new(to.offset(8), to));
            }

            let double_targets =
                (pawns & Bitboard::RANK_7).step_south().step_south() & empty & empty.step_south();
            for to in double_targets.bits() {
                moves.push(Move::new(to.offset(16), to));
            }

            let se_targets = pawns.step_south_east() & enemy_pieces;
            for to in se_targets.bits() {
                moves.push(Move::new(to.offset(9), to));
            }

            let sw_targets = pawns.step_south_west() & enemy_pieces;
            for to in sw_targets.bits() {
                moves.push(Move::new(to.offset(7), to));
            }
        }
    }
}

/// True if `color`'s king is attacked in the current position: generates the
/// opponent's pseudo-legal moves and checks whether any lands on the king's
/// square. Simple and O(moves) rather than a direct attack query, per the
/// core's design note on `in_check`.
pub fn in_check(board: &Board, tables: &Tables, attack_index: &AttackIndex, color: Color) -> bool {
    let king_square = match board.king_square(color) {
        Some(square) => square,
        None => return false,
    };

    let mut opponent_board = board.clone();
    opponent_board.to_move = color.flip();

    generate_pseudo_legal_moves(&opponent_board, tables, attack_index)
        .iter()
        .any(|mv| mv.to() == king_square)
}
