//! `bench` subcommand: a fixed-depth pseudo-legal perft from the starting
//! position, used as a quick move-generation/search smoke test. Grounded in
//! the teacher's `perft` crate and its `main.rs`'s `bench` argument handling,
//! adapted to this core's pseudo-legal-plus-in-check-filter legality model
//! instead of the teacher's fully-legal generator.

use std::time::{Duration, Instant};

use kestrel_core::{
    board::Board,
    move_gen::{generate_pseudo_legal_moves, in_check, AttackIndex, Tables},
};

const BENCH_DEPTH: u32 = 4;

fn perft(board: &mut Board, tables: &Tables, attack_index: &AttackIndex, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_pseudo_legal_moves(board, tables, attack_index);
    let mut nodes = 0;

    for mv in moves.iter().copied() {
        let side = board.to_move;
        let undo = board.make_move(mv);
        if !in_check(board, tables, attack_index, side) {
            nodes += perft(board, tables, attack_index, depth - 1);
        }
        board.unmake_move(undo);
    }

    nodes
}

/// Runs perft from the starting position to [`BENCH_DEPTH`], returning the
/// node count and elapsed wall-clock time.
pub fn run(tables: &Tables, attack_index: &AttackIndex) -> (u64, Duration) {
    let mut board = Board::starting_position();
    let start = Instant::now();
    let nodes = perft(&mut board, tables, attack_index, BENCH_DEPTH);
    (nodes, start.elapsed())
}
