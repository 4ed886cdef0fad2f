use super::{Bitboard, Color, Move, Piece, PieceType, Square};

/// The full board state: one bitboard per (color, piece type) pair, plus the
/// four aggregate bitboards callers need on every move-generation and
/// evaluation hot path. The aggregates are kept as explicit fields rather
/// than derived on the fly so [`Board::piece_at`] and move generation never
/// need to re-OR twelve bitboards together just to ask "is this square
/// occupied".
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    pub white_pawns: Bitboard,
    pub white_knights: Bitboard,
    pub white_bishops: Bitboard,
    pub white_rooks: Bitboard,
    pub white_queens: Bitboard,
    pub white_king: Bitboard,

    pub black_pawns: Bitboard,
    pub black_knights: Bitboard,
    pub black_bishops: Bitboard,
    pub black_rooks: Bitboard,
    pub black_queens: Bitboard,
    pub black_king: Bitboard,

    pub white_pieces: Bitboard,
    pub black_pieces: Bitboard,
    pub all_pieces: Bitboard,
    pub empty_squares: Bitboard,

    pub to_move: Color,
}

/// Everything [`Board::unmake_move`] needs to reverse a [`Board::make_move`]:
/// the move itself (from/to are not otherwise recoverable once the board has
/// moved on) and whatever was captured, since there is no en passant in this
/// generator the capture always sits on the move's destination square.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UndoInfo {
    mv: Move,
    captured: Option<Piece>,
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            white_pawns: Bitboard::EMPTY,
            white_knights: Bitboard::EMPTY,
            white_bishops: Bitboard::EMPTY,
            white_rooks: Bitboard::EMPTY,
            white_queens: Bitboard::EMPTY,
            white_king: Bitboard::EMPTY,
            black_pawns: Bitboard::EMPTY,
            black_knights: Bitboard::EMPTY,
            black_bishops: Bitboard::EMPTY,
            black_rooks: Bitboard::EMPTY,
            black_queens: Bitboard::EMPTY,
            black_king: Bitboard::EMPTY,
            white_pieces: Bitboard::EMPTY,
            black_pieces: Bitboard::EMPTY,
            all_pieces: Bitboard::EMPTY,
            empty_squares: Bitboard::ALL,
            to_move: Color::White,
        }
    }

    pub fn starting_position() -> Self {
        super::fen::parse_fen(super::fen::STARTING_FEN).expect("starting FEN is well-formed")
    }

    fn bitboard(&self, piece: Piece) -> Bitboard {
        match (piece.color(), piece.piece_type()) {
            (Color::White, PieceType::Pawn) => self.white_pawns,
            (Color::White, PieceType::Knight) => self.white_knights,
            (Color::White, PieceType::Bishop) => self.white_bishops,
            (Color::White, PieceType::Rook) => self.white_rooks,
            (Color::White, PieceType::Queen) => self.white_queens,
            (Color::White, PieceType::King) => self.white_king,
            (Color::Black, PieceType::Pawn) => self.black_pawns,
            (Color::Black, PieceType::Knight) => self.black_knights,
            (Color::Black, PieceType::Bishop) => self.black_bishops,
            (Color::Black, PieceType::Rook) => self.black_rooks,
            (Color::Black, PieceType::Queen) => self.black_queens,
            (Color::Black, PieceType::King) => self.black_king,
        }
    }

    fn bitboard_mut(&mut self, piece: Piece) -> &mut Bitboard {
        match (piece.color(), piece.piece_type()) {
            (Color::White, PieceType::Pawn) => &mut self.white_pawns,
            (Color::White, PieceType::Knight) => &mut self.white_knights,
            (Color::White, PieceType::Bishop) => &mut self.white_bishops,
            (Color::White, PieceType::Rook) => &mut self.white_rooks,
            (Color::White, PieceType::Queen) => &mut self.white_queens,
            (Color::White, PieceType::King) => &mut self.white_king,
            (Color::Black, PieceType::Pawn) => &mut self.black_pawns,
            (Color::Black, PieceType::Knight) => &mut self.black_knights,
            (Color::Black, PieceType::Bishop) => &mut self.black_bishops,
            (Color::Black, PieceType::Rook) => &mut self.black_rooks,
            (Color::Black, PieceType::Queen) => &mut self.black_queens,
            (Color::Black, PieceType::King) => &mut self.black_king,
        }
    }

    /// Returns the piece standing on `square`, if any. Checks white first,
    /// then black, so an (illegally) doubly-occupied square would report the
    /// white occupant -- this never happens on a board reached only through
    /// [`Board::make`]/[`Board::undo`].
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        for &piece_type in &PieceType::ALL {
            if self.bitboard(piece_type.white()).get(square) {
                return Some(piece_type.white());
            }
            if self.bitboard(piece_type.black()).get(square) {
                return Some(piece_type.black());
            }
        }
        None
    }

    /// Adds `piece` to `square`, keeping the aggregate bitboards in sync.
    /// Does not check whether `square` is already occupied -- callers
    /// assembling a position from scratch are expected to place onto empty
    /// squares only.
    pub fn place(&mut self, piece: Piece, square: Square) {
        self.bitboard_mut(piece).set(square);
        match piece.color() {
            Color::White => self.white_pieces.set(square),
            Color::Black => self.black_pieces.set(square),
        }
        self.all_pieces.set(square);
        self.empty_squares.clear(square);
    }

    fn remove(&mut self, piece: Piece, square: Square) {
        self.bitboard_mut(piece).clear(square);
        match piece.color() {
            Color::White => self.white_pieces.clear(square),
            Color::Black => self.black_pieces.clear(square),
        }
        self.all_pieces.clear(square);
        self.empty_squares.set(square);
    }

    /// Applies `mv` to the bitboards, without touching [`Board::to_move`].
    /// Panics (in debug builds) if there is no piece on the source square --
    /// a pseudo-legal move generator should never offer such a move.
    pub fn make(&mut self, mv: Move) -> Option<Piece> {
        let from = mv.from();
        let to = mv.to();
        let moving = self.piece_at(from);
        debug_assert!(
            moving.is_some(),
            "make({mv}) called with no piece on the source square"
        );
        let Some(moving) = moving else {
            return None;
        };

        let captured = self.piece_at(to);
        if let Some(captured) = captured {
            debug_assert!(
                captured.color() != moving.color(),
                "make({mv}) would capture its own side's piece"
            );
            self.remove(captured, to);
        }

        self.remove(moving, from);
        self.place(moving, to);
        captured
    }

    /// Reverses a prior [`Board::make`] call given the capture it returned.
    pub fn undo(&mut self, mv: Move, captured: Option<Piece>) {
        let from = mv.from();
        let to = mv.to();
        let moving = self.piece_at(to);
        debug_assert!(
            moving.is_some(),
            "undo({mv}) called but destination square is empty"
        );
        let Some(moving) = moving else {
            return;
        };

        self.remove(moving, to);
        self.place(moving, from);
        if let Some(captured) = captured {
            self.place(captured, to);
        }
    }

    /// Applies `mv` and flips [`Board::to_move`], returning the [`UndoInfo`]
    /// needed to reverse it.
    pub fn make_move(&mut self, mv: Move) -> UndoInfo {
        let captured = self.make(mv);
        self.to_move = self.to_move.flip();
        UndoInfo { mv, captured }
    }

    /// Reverses a [`Board::make_move`] call, including the side-to-move flip.
    pub fn unmake_move(&mut self, undo: UndoInfo) {
        self.undo(undo.mv, undo.captured);
        self.to_move = self.to_move.flip();
    }

    /// Returns the square `color`'s king sits on, or `None` if it has none.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
        .bits()
        .next()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board {{")?;
        for rank in (0..8).rev() {
            write!(f, "  ")?;
            for file in 0..8 {
                let square = Square::new_unchecked(rank, file);
                let c = self
                    .piece_at(square)
                    .map(|p| p.as_fen_char())
                    .unwrap_or('.');
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  to_move: {:?}", self.to_move)?;
        write!(f, "}}")
    }
}
