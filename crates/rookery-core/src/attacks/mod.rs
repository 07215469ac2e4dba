//! Attack queries for every piece type, plus between/line geometry.

mod obstruction;
#[cfg(test)]
pub(crate) mod reference;
mod tables;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::piece::PieceKind;
use crate::square::Square;

use self::tables::{GEOMETRY, KING, KNIGHT, PAWN};

#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT[sq.index()]
}

#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING[sq.index()]
}

/// Squares a pawn of `color` on `sq` captures on.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN[color.index()][sq.index()]
}

#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    Bitboard::new(obstruction::rook(sq.index(), occupied.inner()))
}

#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    Bitboard::new(obstruction::bishop(sq.index(), occupied.inner()))
}

#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

/// Attacks of a bishop, rook, or queen. Other kinds yield the empty set.
#[inline]
pub fn slider_attacks(kind: PieceKind, sq: Square, occupied: Bitboard) -> Bitboard {
    match kind {
        PieceKind::Bishop => bishop_attacks(sq, occupied),
        PieceKind::Rook => rook_attacks(sq, occupied),
        PieceKind::Queen => queen_attacks(sq, occupied),
        _ => Bitboard::EMPTY,
    }
}

/// Rook squares that appear once the first blocker on each line is removed:
/// everything past it up to and including the second blocker.
#[inline]
pub fn rook_xray(sq: Square, occupied: Bitboard) -> Bitboard {
    let direct = rook_attacks(sq, occupied);
    direct ^ rook_attacks(sq, occupied ^ (direct & occupied))
}

/// Diagonal counterpart of [`rook_xray`].
#[inline]
pub fn bishop_xray(sq: Square, occupied: Bitboard) -> Bitboard {
    let direct = bishop_attacks(sq, occupied);
    direct ^ bishop_attacks(sq, occupied ^ (direct & occupied))
}

/// Squares strictly between two aligned squares; empty when not aligned.
#[inline]
pub fn between(a: Square, b: Square) -> Bitboard {
    GEOMETRY.between[a.index()][b.index()]
}

/// The full edge-to-edge line through two aligned squares; empty when not aligned.
#[inline]
pub fn line(a: Square, b: Square) -> Bitboard {
    GEOMETRY.line[a.index()][b.index()]
}
