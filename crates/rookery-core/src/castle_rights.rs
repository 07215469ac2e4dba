//! Castling rights and the fixed geometry of the four castling moves.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];
}

/// Four independent flags: `K` = 1, `Q` = 2, `k` = 4, `q` = 8.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);

    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    pub const WHITE_BOTH: CastleRights = CastleRights(0b0011);
    pub const BLACK_BOTH: CastleRights = CastleRights(0b1100);

    /// Raw 4-bit value, usable as a table index.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// The single flag for `color` castling toward `side`.
    #[inline]
    pub const fn flag(color: Color, side: CastleSide) -> CastleRights {
        let shift = color.index() * 2
            + match side {
                CastleSide::KingSide => 0,
                CastleSide::QueenSide => 1,
            };
        CastleRights(1 << shift)
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::flag(color, side))
    }

    /// Parse the FEN castling field (`"KQkq"`, `"Kq"`, `"-"`, ...).
    pub fn from_fen(field: &str) -> Result<CastleRights, FenError> {
        if field == "-" {
            return Ok(CastleRights::NONE);
        }
        field.chars().try_fold(CastleRights::NONE, |rights, c| {
            let flag = match c {
                'K' => Self::WHITE_KING,
                'Q' => Self::WHITE_QUEEN,
                'k' => Self::BLACK_KING,
                'q' => Self::BLACK_QUEEN,
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            Ok(rights.insert(flag))
        })
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (flag, c) in [
            (Self::WHITE_KING, 'K'),
            (Self::WHITE_QUEEN, 'Q'),
            (Self::BLACK_KING, 'k'),
            (Self::BLACK_QUEEN, 'q'),
        ] {
            if self.contains(flag) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}

/// Squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingPath {
    pub right: CastleRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook.
    pub must_be_empty: Bitboard,
    /// King origin, transit, and destination.
    pub must_be_safe: Bitboard,
}

const fn span(from: Square, to: Square) -> Bitboard {
    let (lo, hi) = if from.index() < to.index() {
        (from.index(), to.index())
    } else {
        (to.index(), from.index())
    };
    Bitboard::new((u64::MAX >> (63 - hi)) & (u64::MAX << lo))
}

const fn build_path(
    right: CastleRights,
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    rook_to: Square,
) -> CastlingPath {
    let between = span(king_from, rook_from).inner()
        & !king_from.bitboard().inner()
        & !rook_from.bitboard().inner();
    CastlingPath {
        right,
        king_from,
        king_to,
        rook_from,
        rook_to,
        must_be_empty: Bitboard::new(between),
        must_be_safe: span(king_from, king_to),
    }
}

/// Indexed by `[color][side]`.
static PATHS: [[CastlingPath; 2]; 2] = [
    [
        build_path(CastleRights::WHITE_KING, Square::E1, Square::G1, Square::H1, Square::F1),
        build_path(CastleRights::WHITE_QUEEN, Square::E1, Square::C1, Square::A1, Square::D1),
    ],
    [
        build_path(CastleRights::BLACK_KING, Square::E8, Square::G8, Square::H8, Square::F8),
        build_path(CastleRights::BLACK_QUEEN, Square::E8, Square::C8, Square::A8, Square::D8),
    ],
];

impl CastlingPath {
    #[inline]
    pub fn get(color: Color, side: CastleSide) -> &'static CastlingPath {
        &PATHS[color.index()][side as usize]
    }

    /// The path whose king destination is `king_to`, if any.
    pub fn by_king_destination(color: Color, king_to: Square) -> Option<&'static CastlingPath> {
        PATHS[color.index()].iter().find(|path| path.king_to == king_to)
    }
}

/// Rights lost when a move starts or ends on a square.
static REVOKED_BY_SQUARE: [CastleRights; 64] = {
    let mut table = [CastleRights::NONE; 64];
    table[Square::E1.index()] = CastleRights::WHITE_BOTH;
    table[Square::H1.index()] = CastleRights::WHITE_KING;
    table[Square::A1.index()] = CastleRights::WHITE_QUEEN;
    table[Square::E8.index()] = CastleRights::BLACK_BOTH;
    table[Square::H8.index()] = CastleRights::BLACK_KING;
    table[Square::A8.index()] = CastleRights::BLACK_QUEEN;
    table
};

#[inline]
pub(crate) fn revoked_by(sq: Square) -> CastleRights {
    REVOKED_BY_SQUARE[sq.index()]
}
