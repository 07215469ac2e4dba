//! Moves packed into a `u32`, carrying enough to be undone without a lookup.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

// bits  0-5   origin square
// bits  6-11  destination square
// bits 12-15  moved piece (Piece::index)
// bits 16-19  captured piece (Piece::index), NO_CAPTURE when nothing is taken
// bits 20-21  move kind
// bits 22-23  promotion piece
const SQUARE_MASK: u32 = 0x3F;
const DEST_SHIFT: u32 = 6;
const PIECE_SHIFT: u32 = 12;
const CAPTURED_SHIFT: u32 = 16;
const KIND_SHIFT: u32 = 20;
const PROMO_SHIFT: u32 = 22;
const NIBBLE: u32 = 0xF;
const NO_CAPTURE: u32 = 0xF;

/// Bits that make up a move's identity: squares, mover, and promotion choice.
const IDENTITY_MASK: u32 = 0xFFFF | 0b11 << PROMO_SHIFT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal = 0,
    Promotion = 1,
    EnPassant = 2,
    Castling = 3,
}

/// Piece a pawn may become on the last rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
}

impl PromotionPiece {
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    /// Lowercase suffix letter in coordinate notation.
    pub fn from_char(c: char) -> Option<PromotionPiece> {
        PromotionPiece::ALL.into_iter().find(|p| p.kind().to_char() == c)
    }
}

#[derive(Clone, Copy)]
pub struct Move(u32);

impl Move {
    /// Placeholder that is never legal.
    pub const NULL: Move = Move(NO_CAPTURE << CAPTURED_SHIFT);

    const fn pack(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        kind: MoveKind,
        promotion: PromotionPiece,
    ) -> Move {
        let captured = match captured {
            Some(p) => p.index() as u32,
            None => NO_CAPTURE,
        };
        Move(
            from.index() as u32
                | (to.index() as u32) << DEST_SHIFT
                | (piece.index() as u32) << PIECE_SHIFT
                | captured << CAPTURED_SHIFT
                | (kind as u32) << KIND_SHIFT
                | (promotion as u32) << PROMO_SHIFT,
        )
    }

    /// A quiet move or ordinary capture.
    pub const fn normal(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Move {
        Move::pack(from, to, piece, captured, MoveKind::Normal, PromotionPiece::Knight)
    }

    pub const fn promotion(
        from: Square,
        to: Square,
        pawn: Piece,
        captured: Option<Piece>,
        promotion: PromotionPiece,
    ) -> Move {
        Move::pack(from, to, pawn, captured, MoveKind::Promotion, promotion)
    }

    /// An en-passant capture; the captured pawn is the opponent's.
    pub const fn en_passant(from: Square, to: Square, pawn: Piece) -> Move {
        let victim = Piece::new(PieceKind::Pawn, pawn.color().flip());
        Move::pack(from, to, pawn, Some(victim), MoveKind::EnPassant, PromotionPiece::Knight)
    }

    /// Castling, written as the king's own move.
    pub const fn castle(king_from: Square, king_to: Square, king: Piece) -> Move {
        Move::pack(king_from, king_to, king, None, MoveKind::Castling, PromotionPiece::Knight)
    }

    #[inline]
    pub const fn origin(self) -> Square {
        Square::from_index_unchecked((self.0 & SQUARE_MASK) as u8)
    }

    #[inline]
    pub const fn target(self) -> Square {
        Square::from_index_unchecked((self.0 >> DEST_SHIFT & SQUARE_MASK) as u8)
    }

    #[inline]
    pub fn piece(self) -> Piece {
        Piece::from_index((self.0 >> PIECE_SHIFT & NIBBLE) as u8)
            .expect("moves are packed from a valid piece")
    }

    #[inline]
    pub fn captured(self) -> Option<Piece> {
        Piece::from_index((self.0 >> CAPTURED_SHIFT & NIBBLE) as u8)
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        match self.0 >> KIND_SHIFT & 0b11 {
            0 => MoveKind::Normal,
            1 => MoveKind::Promotion,
            2 => MoveKind::EnPassant,
            _ => MoveKind::Castling,
        }
    }

    /// Chosen piece for promotions, `None` otherwise.
    #[inline]
    pub const fn promotion_piece(self) -> Option<PromotionPiece> {
        if !matches!(self.kind(), MoveKind::Promotion) {
            return None;
        }
        Some(match self.0 >> PROMO_SHIFT & 0b11 {
            0 => PromotionPiece::Knight,
            1 => PromotionPiece::Bishop,
            2 => PromotionPiece::Rook,
            _ => PromotionPiece::Queen,
        })
    }

    #[inline]
    pub const fn color(self) -> Color {
        if (self.0 >> PIECE_SHIFT & NIBBLE) < 6 { Color::White } else { Color::Black }
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.0 >> CAPTURED_SHIFT & NIBBLE != NO_CAPTURE
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind(), MoveKind::Promotion)
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind(), MoveKind::EnPassant)
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind(), MoveKind::Castling)
    }

    pub const fn is_null(self) -> bool {
        self.0 & 0xFFF == 0
    }

    /// Square of the piece removed by this move, if any. Differs from `target()`
    /// only for en passant.
    #[inline]
    pub fn capture_square(self) -> Option<Square> {
        match self.kind() {
            MoveKind::EnPassant => Some(self.target().offset(-self.color().push_delta())),
            _ if self.is_capture() => Some(self.target()),
            _ => None,
        }
    }

    /// Coordinate notation: origin, destination, optional promotion letter.
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.0 & IDENTITY_MASK == other.0 & IDENTITY_MASK
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.0 & IDENTITY_MASK).hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("0000");
        }
        write!(f, "{}{}", self.origin(), self.target())?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "{}", promo.kind().to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self} {:?} {:?}", self.piece(), self.kind())?;
        if let Some(captured) = self.captured() {
            write!(f, " x{captured:?}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn fits_in_four_bytes() {
        assert_eq!(std::mem::size_of::<Move>(), 4);
    }

    #[test]
    fn fields_unpack() {
        let mv = Move::normal(Square::G8, Square::F6, Piece::BLACK_KNIGHT, Some(Piece::WHITE_BISHOP));
        assert_eq!(mv.origin(), Square::G8);
        assert_eq!(mv.target(), Square::F6);
        assert_eq!(mv.piece(), Piece::BLACK_KNIGHT);
        assert_eq!(mv.captured(), Some(Piece::WHITE_BISHOP));
        assert_eq!(mv.color(), Color::Black);
        assert_eq!(mv.kind(), MoveKind::Normal);
        assert!(mv.is_capture());
        assert_eq!(mv.promotion_piece(), None);
        assert_eq!(mv.capture_square(), Some(Square::F6));
    }

    #[test]
    fn en_passant_takes_behind_target() {
        let white = Move::en_passant(Square::E5, Square::D6, Piece::WHITE_PAWN);
        assert_eq!(white.captured(), Some(Piece::BLACK_PAWN));
        assert_eq!(white.capture_square(), Some(Square::D5));

        let black = Move::en_passant(Square::B4, Square::C3, Piece::BLACK_PAWN);
        assert_eq!(black.captured(), Some(Piece::WHITE_PAWN));
        assert_eq!(black.capture_square(), Some(Square::C4));
    }

    #[test]
    fn castling_is_not_a_capture() {
        let mv = Move::castle(Square::E1, Square::C1, Piece::WHITE_KING);
        assert!(mv.is_castle());
        assert!(!mv.is_capture());
        assert_eq!(mv.capture_square(), None);
        assert_eq!(mv.to_string(), "e1c1");
    }

    #[test]
    fn promotion_text() {
        let mv = Move::promotion(Square::B2, Square::A1, Piece::BLACK_PAWN, Some(Piece::WHITE_ROOK), PromotionPiece::Knight);
        assert_eq!(mv.to_uci(), "b2a1n");
        assert_eq!(mv.promotion_piece(), Some(PromotionPiece::Knight));
        assert_eq!(PromotionPiece::from_char('q'), Some(PromotionPiece::Queen));
        assert_eq!(PromotionPiece::from_char('k'), None);
    }

    #[test]
    fn equality_ignores_capture_metadata() {
        let plain = Move::normal(Square::D1, Square::D7, Piece::WHITE_QUEEN, None);
        let taking = Move::normal(Square::D1, Square::D7, Piece::WHITE_QUEEN, Some(Piece::BLACK_PAWN));
        let other_mover = Move::normal(Square::D1, Square::D7, Piece::WHITE_ROOK, None);
        assert_eq!(plain, taking);
        assert_ne!(plain, other_mover);

        let set: HashSet<Move> = [plain, taking, other_mover].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn promotion_choices_are_distinct_moves() {
        let set: HashSet<Move> = PromotionPiece::ALL
            .into_iter()
            .map(|p| Move::promotion(Square::E7, Square::E8, Piece::WHITE_PAWN, None, p))
            .collect();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn every_mover_decodes() {
        for piece in Piece::all() {
            let mv = Move::normal(Square::A2, Square::A3, piece, None);
            assert_eq!(mv.piece(), piece);
            assert_eq!(mv.color(), piece.color());
        }
    }

    #[test]
    #[should_panic(expected = "valid piece")]
    fn corrupt_mover_is_rejected() {
        Move(0xF << PIECE_SHIFT).piece();
    }

    #[test]
    fn null_move() {
        assert!(Move::NULL.is_null());
        assert!(!Move::NULL.is_capture());
        assert_eq!(Move::NULL.to_string(), "0000");
    }
}
