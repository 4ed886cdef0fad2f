use std::fmt::{Debug, Display};

/// The kind of a piece, independent of color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    /// Non-king, non-pawn-push sliding/leaping types that own a piece-square
    /// table (§4.6 -- king PST is out of scope).
    pub const PST_TYPES: [PieceType; 5] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
    ];

    pub const fn white(self) -> Piece {
        Piece::new(Color::White, self)
    }

    pub const fn black(self) -> Piece {
        Piece::new(Color::Black, self)
    }

    pub const fn with_color(self, color: Color) -> Piece {
        Piece::new(color, self)
    }

    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }

    pub const fn material_value(self) -> i32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight | PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 99_999,
        }
    }

    pub const fn as_uppercase_char(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    pub const fn as_lowercase_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }
}

/// A player in a chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }

    /// Maps White to Black and vice versa.
    pub const fn flip(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// A (type, color) pair standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    piece_type: PieceType,
    color: Color,
}

impl Piece {
    pub const fn new(color: Color, piece_type: PieceType) -> Self {
        Self { piece_type, color }
    }

    pub const fn piece_type(self) -> PieceType {
        self.piece_type
    }

    pub const fn color(self) -> Color {
        self.color
    }

    pub const fn as_fen_char(self) -> char {
        match self.color {
            Color::White => self.piece_type.as_uppercase_char(),
            Color::Black => self.piece_type.as_lowercase_char(),
        }
    }

    pub fn try_from_fen_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        let piece_type = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };

        Some(Self::new(color, piece_type))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_fen_char().to_string())
    }
}
