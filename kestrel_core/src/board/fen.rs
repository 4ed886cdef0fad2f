use thiserror::Error;

use super::{Board, Color, Piece, Square};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFenError {
    #[error("FEN must have at least a piece placement and an active color field")]
    TooFewFields,
    #[error("piece placement must describe 8 ranks, found {found}")]
    WrongRankCount { found: usize },
    #[error("rank {rank} describes {found} files, expected 8")]
    WrongFileCount { rank: usize, found: usize },
    #[error("'{0}' is not a recognized piece character")]
    UnknownPieceChar(char),
    #[error("'{0}' is not a recognized active color field")]
    UnknownActiveColor(String),
}

/// Parses the piece-placement and active-color fields of a FEN string (the
/// only two fields this engine's [`Board`] tracks). Castling rights, the en
/// passant target, and the move counters are accepted in the input -- a
/// well-formed FEN always has six whitespace-separated fields -- but
/// discarded, since there is no castling or en passant to track and no
/// notion of game length in this crate's search.
pub fn parse_fen(fen: &str) -> Result<Board, ParseFenError> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or(ParseFenError::TooFewFields)?;
    let active_color = fields.next().ok_or(ParseFenError::TooFewFields)?;

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ParseFenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_from_top, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_from_top as u8;
        let mut file = 0u8;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as u8;
                continue;
            }
            let piece = Piece::try_from_fen_char(c).ok_or(ParseFenError::UnknownPieceChar(c))?;
            let square = Square::new(rank, file).ok_or(ParseFenError::WrongFileCount {
                rank: rank_from_top,
                found: file as usize + 1,
            })?;
            board.place(piece, square);
            file += 1;
        }
        if file != 8 {
            return Err(ParseFenError::WrongFileCount {
                rank: rank_from_top,
                found: file as usize,
            });
        }
    }

    board.to_move = match active_color {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(ParseFenError::UnknownActiveColor(other.to_string())),
    };

    Ok(board)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starting_position_has_expected_piece_counts() {
        let board = parse_fen(STARTING_FEN).unwrap();
        assert_eq!(board.white_pawns.pop_count(), 8);
        assert_eq!(board.black_pawns.pop_count(), 8);
        assert_eq!(board.white_rooks.pop_count(), 2);
        assert_eq!(board.white_king.pop_count(), 1);
        assert_eq!(board.all_pieces.pop_count(), 32);
        assert_eq!(board.to_move, Color::White);
    }

    #[test]
    fn placement_order_matches_square_mapping() {
        // The piece placement field lists rank 8 first, a-file first within
        // a rank; this must land on the same squares Square::new(rank, file)
        // and FromStr agree on (Square::A8/Square::H8 for the first rank).
        let board = parse_fen("k7/8/8/8/8/8/8/7K w - - 0 1").unwrap();
        assert_eq!(board.piece_at(Square::A8), Some(Piece::try_from_fen_char('k').unwrap()));
        assert_eq!(board.piece_at(Square::H1), Some(Piece::try_from_fen_char('K').unwrap()));
    }

    #[test]
    fn active_color_black() {
        let board = parse_fen("8/8/8/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(board.to_move, Color::Black);
    }

    #[test]
    fn rejects_wrong_rank_count() {
        assert_eq!(
            parse_fen("8/8/8 w - - 0 1"),
            Err(ParseFenError::WrongRankCount { found: 3 })
        );
    }

    #[test]
    fn rejects_wrong_file_count_in_a_rank() {
        assert!(matches!(
            parse_fen("7/8/8/8/8/8/8/8 w - - 0 1"),
            Err(ParseFenError::WrongFileCount { rank: 0, .. })
        ));
    }

    #[test]
    fn rejects_unknown_piece_char() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/7x w - - 0 1"),
            Err(ParseFenError::UnknownPieceChar('x'))
        );
    }

    #[test]
    fn rejects_missing_active_color_field() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8"),
            Err(ParseFenError::TooFewFields)
        );
    }

    #[test]
    fn rejects_unknown_active_color() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/8 x - - 0 1"),
            Err(ParseFenError::UnknownActiveColor("x".to_string()))
        );
    }
}
