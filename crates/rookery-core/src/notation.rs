//! Coordinate move text (`e2e4`, `e7e8q`) resolved against a position.

use crate::chess_move::{Move, PromotionPiece};
use crate::error::MoveParseError;
use crate::movegen::generate_legal_moves;
use crate::position::Position;
use crate::square::Square;

impl Position {
    /// Resolve coordinate notation to the legal move it names, recovering the
    /// moved and captured pieces and the move kind.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let malformed = || MoveParseError::Malformed {
            text: text.to_string(),
        };
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(malformed());
        }

        let from = Square::from_algebraic(&text[..2]).ok_or_else(malformed)?;
        let to = Square::from_algebraic(&text[2..4]).ok_or_else(malformed)?;
        let promotion = match text[4..].chars().next() {
            Some(c) => Some(PromotionPiece::from_char(c.to_ascii_lowercase()).ok_or_else(malformed)?),
            None => None,
        };

        let piece = self.piece_on(from).ok_or(MoveParseError::EmptyOrigin { square: from })?;
        if piece.color() != self.side_to_move() {
            return Err(MoveParseError::NotSideToMove { square: from });
        }

        generate_legal_moves(self)
            .iter()
            .copied()
            .find(|mv| mv.origin() == from && mv.target() == to && mv.promotion_piece() == promotion)
            .ok_or_else(|| MoveParseError::Illegal {
                text: text.to_string(),
            })
    }
}
