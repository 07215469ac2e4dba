//! Error types for snapshot parsing, position validation, and move text.

use crate::color::Color;
use crate::square::Square;

/// A FEN snapshot that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("expected 4 or 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },
    /// `rank` counts from the top of the board, as written in FEN.
    #[error("rank {rank} describes {length} squares, expected 8")]
    BadRankLength { rank: usize, length: usize },
    #[error("invalid piece character '{character}'")]
    InvalidPieceChar { character: char },
    #[error("invalid side to move \"{found}\"")]
    InvalidColor { found: String },
    #[error("invalid castling character '{character}'")]
    InvalidCastlingChar { character: char },
    #[error("invalid en passant square \"{found}\"")]
    InvalidEnPassant { found: String },
    #[error("invalid {field} \"{found}\"")]
    InvalidMoveCounter { field: &'static str, found: String },
    #[error("invalid position: {source}")]
    InvalidPosition {
        #[from]
        source: PositionError,
    },
}

/// Structural problems found by [`Position::validate`](crate::Position::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("expected 1 king for {color:?}, found {count}")]
    InvalidKingCount { color: Color, count: u32 },
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    #[error("two piece bitboards claim the same square")]
    OverlappingPieces,
    #[error("white and black occupancy overlap")]
    InconsistentSides,
    #[error("occupancy does not match the piece bitboards")]
    InconsistentOccupied,
    #[error("the side not to move is in check")]
    OpponentInCheck,
    #[error("en passant target {square} has no double-pushed pawn behind it")]
    EnPassantWithoutPawn { square: Square },
}

/// Coordinate move text that does not name a legal move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("malformed move text \"{text}\"")]
    Malformed { text: String },
    #[error("no piece on {square}")]
    EmptyOrigin { square: Square },
    #[error("piece on {square} belongs to the side not to move")]
    NotSideToMove { square: Square },
    #[error("{text} is not legal in this position")]
    Illegal { text: String },
}

#[cfg(test)]
mod tests {
    use super::{FenError, MoveParseError, PositionError};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn messages() {
        assert_eq!(
            FenError::WrongFieldCount { found: 3 }.to_string(),
            "expected 4 or 6 FEN fields, found 3"
        );
        assert_eq!(
            PositionError::InvalidKingCount { color: Color::Black, count: 0 }.to_string(),
            "expected 1 king for Black, found 0"
        );
        assert_eq!(
            MoveParseError::EmptyOrigin { square: Square::D4 }.to_string(),
            "no piece on d4"
        );
    }

    #[test]
    fn position_error_is_the_source() {
        let err: FenError = PositionError::PawnsOnBackRank.into();
        assert_eq!(err.to_string(), "invalid position: pawns found on back rank");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("pawns found on back rank"));
    }
}
