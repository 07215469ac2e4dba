//! Check and pin analysis for the side to move.

use crate::attacks::{
    between, bishop_attacks, bishop_xray, king_attacks, knight_attacks, line, pawn_attacks,
    rook_attacks, rook_xray,
};
use crate::bitboard::Bitboard;
use crate::piece::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Everything the generator needs to emit only legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    /// Squares the enemy attacks, with our king lifted off the board so it
    /// cannot hide behind itself.
    pub danger: Bitboard,
    /// Destinations that answer the current check: everything when not in
    /// check, the checker and the squares between when in single check,
    /// nothing in double check.
    pub active: Bitboard,
    /// Union of `between(king, pinner) | pinner` over rank and file pins.
    pub orthogonal_pins: Bitboard,
    /// Same, for diagonal pins.
    pub diagonal_pins: Bitboard,
    /// Our pawns that may take en passant without exposing the king.
    pub en_passant_capturers: Bitboard,
    pub checkers: Bitboard,
    pub king: Square,
}

impl Analysis {
    pub fn new(position: &Position) -> Analysis {
        let us = position.side_to_move();
        let them = !us;
        let king = position.king_square(us);
        let occupied = position.occupied();
        let ours = position.side(us);
        let orthogonal = position.pieces_of(PieceKind::Rook, them) | position.pieces_of(PieceKind::Queen, them);
        let diagonal = position.pieces_of(PieceKind::Bishop, them) | position.pieces_of(PieceKind::Queen, them);

        let without_king = occupied.without(king);
        let mut danger = position.pieces_of(PieceKind::Pawn, them).pawn_captures(them)
            | king_attacks(position.king_square(them));
        for sq in position.pieces_of(PieceKind::Knight, them) {
            danger |= knight_attacks(sq);
        }
        for sq in diagonal {
            danger |= bishop_attacks(sq, without_king);
        }
        for sq in orthogonal {
            danger |= rook_attacks(sq, without_king);
        }

        let checkers = position.attackers_to(king, occupied) & position.side(them);
        let active = match checkers.lsb() {
            None => Bitboard::FULL,
            Some(checker) if !checkers.has_several() => between(king, checker) | checkers,
            Some(_) => Bitboard::EMPTY,
        };

        let pins = |pinners: Bitboard| {
            pinners.fold(Bitboard::EMPTY, |pins, pinner| {
                let segment = between(king, pinner).with(pinner);
                if (segment & ours).is_nonempty() { pins | segment } else { pins }
            })
        };
        let orthogonal_pins = pins(rook_xray(king, occupied) & orthogonal);
        let diagonal_pins = pins(bishop_xray(king, occupied) & diagonal);

        let mut en_passant_capturers = Bitboard::EMPTY;
        if let Some(target) = position.en_passant() {
            let captured = target.offset(-us.push_delta());
            for from in pawn_attacks(them, target) & position.pieces_of(PieceKind::Pawn, us) {
                let after = occupied.without(from).without(captured).with(target);
                let exposed = (rook_attacks(king, after) & orthogonal) | (bishop_attacks(king, after) & diagonal);
                if exposed.is_empty() {
                    en_passant_capturers |= from.bitboard();
                }
            }
        }

        Analysis {
            danger,
            active,
            orthogonal_pins,
            diagonal_pins,
            en_passant_capturers,
            checkers,
            king,
        }
    }

    #[inline]
    pub fn pins(&self) -> Bitboard {
        self.orthogonal_pins | self.diagonal_pins
    }

    #[inline]
    pub fn is_pinned(&self, sq: Square) -> bool {
        self.pins().contains(sq)
    }

    /// Squares a piece on `sq` may move to as far as pins are concerned.
    #[inline]
    pub fn pin_mask(&self, sq: Square) -> Bitboard {
        if self.is_pinned(sq) {
            self.pins() & line(self.king, sq)
        } else {
            Bitboard::FULL
        }
    }
}
