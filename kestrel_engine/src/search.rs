//! Minimax search with alpha-beta pruning.
//!
//! Deliberately two-sided (explicit White-maximizes / Black-minimizes
//! branches with a shared alpha-beta window) rather than negamax: white's
//! score and black's score are the same signed quantity throughout, which
//! keeps the "which side is improving" question answerable by looking at
//! one `match` instead of tracking a sign flip across the recursion.

use kestrel_core::{
    board::{Board, Color},
    move_gen::{generate_pseudo_legal_moves, in_check, AttackIndex, Tables},
};

use crate::{evaluate::evaluate, search_result::SearchResult};

/// Sentinel "infinite" score, comfortably beyond any reachable material +
/// piece-square total, with enough headroom that summing a few of them
/// during alpha-beta comparisons never overflows `i32`.
pub const INF: i32 = 1_000_000_000;

/// Runs alpha-beta minimax from `board` for `side_to_move`, to `depth` plies.
///
/// `board` is left exactly as given on return: every `make_move` performed
/// during the search is matched by an `unmake_move` before this function
/// returns.
pub fn search(
    board: &mut Board,
    attack_index: &AttackIndex,
    tables: &Tables,
    depth: u32,
    side_to_move: Color,
) -> SearchResult {
    assert!(depth >= 1, "search depth must be at least 1");

    let moves = generate_pseudo_legal_moves(board, tables, attack_index);

    let mut alpha = -INF;
    let mut beta = INF;
    let mut best_move = None;
    let mut best_score = sentinel_for(side_to_move);

    for mv in moves.iter().copied() {
        let undo = board.make_move(mv);
        if in_check(board, tables, attack_index, side_to_move) {
            board.unmake_move(undo);
            continue;
        }

        let score = minimax(board, attack_index, tables, depth - 1, side_to_move.flip(), alpha, beta);
        board.unmake_move(undo);

        if best_move.is_none() || improves(side_to_move, score, best_score) {
            best_score = score;
            best_move = Some(mv);
        }

        match side_to_move {
            Color::White => {
                alpha = alpha.max(best_score);
                if alpha >= beta {
                    break;
                }
            }
            Color::Black => {
                beta = beta.min(best_score);
                if beta <= alpha {
                    break;
                }
            }
        }
    }

    SearchResult {
        best_move,
        score: best_score,
    }
}

fn minimax(
    board: &mut Board,
    attack_index: &AttackIndex,
    tables: &Tables,
    depth: u32,
    side_to_move: Color,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if depth == 0 {
        return evaluate(board);
    }

    let moves = generate_pseudo_legal_moves(board, tables, attack_index);
    let mut best = sentinel_for(side_to_move);

    for mv in moves.iter().copied() {
        let undo = board.make_move(mv);
        if in_check(board, tables, attack_index, side_to_move) {
            board.unmake_move(undo);
            continue;
        }

        let score = minimax(board, attack_index, tables, depth - 1, side_to_move.flip(), alpha, beta);
        board.unmake_move(undo);

        if improves(side_to_move, score, best) {
            best = score;
        }

        match side_to_move {
            Color::White => {
                alpha = alpha.max(best);
                if alpha >= beta {
                    break;
                }
            }
            Color::Black => {
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
        }
    }

    best
}

const fn sentinel_for(side_to_move: Color) -> i32 {
    match side_to_move {
        Color::White => -INF,
        Color::Black => INF,
    }
}

fn improves(side_to_move: Color, candidate: i32, incumbent: i32) -> bool {
    match side_to_move {
        Color::White => candidate > incumbent,
        Color::Black => candidate < incumbent,
    }
}
