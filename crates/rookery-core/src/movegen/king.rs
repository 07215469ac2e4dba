//! King move and castling generation.

use crate::attacks::king_attacks;
use crate::castle_rights::{CastleSide, CastlingPath};
use crate::chess_move::Move;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;

use super::MoveList;
use super::analysis::Analysis;
use super::mode::GenType;

/// Generate legal king moves, castling included.
pub(super) fn gen_king<G: GenType>(position: &Position, analysis: &Analysis, list: &mut MoveList) {
    let us = position.side_to_move();
    let king = Piece::new(PieceKind::King, us);
    let from = analysis.king;
    let occupied = position.occupied();

    let destinations = G::destinations(!occupied, position.side(!us)) & !analysis.danger;
    for to in king_attacks(from) & destinations {
        list.push(Move::normal(from, to, king, position.piece_on(to)));
    }

    if !G::QUIETS || analysis.checkers.is_nonempty() {
        return;
    }

    let rights = position.castling();
    let rooks = position.pieces_of(PieceKind::Rook, us);
    for side in CastleSide::ALL {
        let path = CastlingPath::get(us, side);
        if rights.contains(path.right)
            && path.king_from == from
            && rooks.contains(path.rook_from)
            && (occupied & path.must_be_empty).is_empty()
            && (analysis.danger & path.must_be_safe).is_empty()
        {
            list.push(Move::castle(path.king_from, path.king_to, king));
        }
    }
}
