//! Side colors.

use std::fmt;
use std::ops::Not;

use crate::bitboard::Bitboard;
use crate::square::Rank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const COUNT: usize = 2;
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Square-index delta of a single pawn push.
    #[inline]
    pub const fn push_delta(self) -> i8 {
        match self {
            Color::White => 8,
            Color::Black => -8,
        }
    }

    /// Rank a pawn of this color lands on after a double push.
    #[inline]
    pub const fn double_push_rank(self) -> Bitboard {
        match self {
            Color::White => Bitboard::RANK_4,
            Color::Black => Bitboard::RANK_5,
        }
    }

    /// Rank on which this color's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> Bitboard {
        match self {
            Color::White => Bitboard::RANK_8,
            Color::Black => Bitboard::RANK_1,
        }
    }

    /// Rank of the en-passant target square when this color is to move.
    #[inline]
    pub const fn en_passant_rank(self) -> Rank {
        match self {
            Color::White => Rank::SIXTH,
            Color::Black => Rank::THIRD,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "w",
            Color::Black => "b",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use crate::bitboard::Bitboard;
    use crate::square::Rank;

    #[test]
    fn flip_and_not_agree() {
        for color in Color::ALL {
            assert_eq!(!color, color.flip());
            assert_eq!(color.flip().flip(), color);
        }
    }

    #[test]
    fn pawn_geometry() {
        assert_eq!(Color::White.push_delta(), 8);
        assert_eq!(Color::Black.push_delta(), -8);
        assert_eq!(Color::Black.promotion_rank(), Bitboard::RANK_1);
        assert_eq!(Color::White.double_push_rank(), Bitboard::RANK_4);
        assert_eq!(Color::White.en_passant_rank(), Rank::SIXTH);
        assert_eq!(Color::Black.en_passant_rank(), Rank::THIRD);
    }

    #[test]
    fn display_matches_fen_field() {
        assert_eq!(Color::White.to_string(), "w");
        assert_eq!(Color::Black.to_string(), "b");
    }
}
