//! The synchronous UCI command loop.

use std::io::{BufRead, Write};

use kestrel_core::{
    board::Board,
    move_gen::{AttackIndex, Tables},
};

use crate::{bench, command::{parse_line, Command}};

/// Reads commands from `input` until `quit` or EOF, writing responses to
/// `output`. EOF is treated the same as an explicit `quit`, per the
/// teacher's `read_message` convention.
pub fn main_loop<R: BufRead, W: Write>(mut input: R, mut output: W, tables: &Tables, attack_index: &AttackIndex) {
    let mut board = Board::starting_position();
    let mut line = String::new();

    loop {
        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => return,
            Ok(_) => {}
            Err(_) => return,
        }

        let Some(command) = parse_line(line.trim_end_matches(['\r', '\n'])) else {
            continue;
        };

        match command {
            Command::Uci => {
                let _ = writeln!(output, "id name kestrel");
                let _ = writeln!(output, "id author the kestrel project");
                let _ = writeln!(output, "uciok");
            }

            Command::Position(new_board) => board = new_board,

            Command::Go { depth, turn_override } => {
                let side_to_move = turn_override.unwrap_or(board.to_move);
                let result = kestrel_engine::search(&mut board, attack_index, tables, depth, side_to_move);
                match result.best_move {
                    Some(mv) => {
                        let _ = writeln!(output, "bestmove {mv}");
                    }
                    None => {
                        let _ = writeln!(output, "bestmove 0000");
                    }
                }
            }

            Command::Bench => {
                let (nodes, elapsed) = bench::run(tables, attack_index);
                let nps = if elapsed.as_millis() > 0 {
                    nodes * 1000 / elapsed.as_millis() as u64
                } else {
                    0
                };
                let _ = writeln!(output, "info string nodes {nodes} time {} nps {nps}", elapsed.as_millis());
            }

            Command::Quit => return,

            Command::Unknown(line) => {
                let _ = writeln!(output, "Unknown command: {line}");
            }
        }
    }
}
