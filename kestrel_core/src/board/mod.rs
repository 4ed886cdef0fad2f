//! Board representation: squares, bitboards, pieces, moves, and the
//! [`Board`] struct tying them together with FEN ingestion.

mod bitboard;
mod board;
mod fen;
mod move_repr;
mod piece;
mod square;

pub use bitboard::{Bitboard, ParseBitboardError};
pub use board::{Board, UndoInfo};
pub use fen::{parse_fen, ParseFenError, STARTING_FEN};
pub use move_repr::Move;
pub use piece::{Color, Piece, PieceType};
pub use square::{ParseSquareError, Square};
