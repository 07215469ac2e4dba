//! Sliding piece (bishop, rook, queen) move generation.

use crate::attacks::slider_attacks;
use crate::chess_move::Move;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;

use super::MoveList;
use super::analysis::Analysis;
use super::mode::GenType;

/// Generate legal slider moves, bishops first, then rooks, then queens.
pub(super) fn gen_sliders<G: GenType>(position: &Position, analysis: &Analysis, list: &mut MoveList) {
    let us = position.side_to_move();
    let occupied = position.occupied();
    let destinations = G::destinations(!occupied, position.side(!us)) & analysis.active;

    for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
        let piece = Piece::new(kind, us);
        for from in position.pieces(piece) {
            let targets = slider_attacks(kind, from, occupied) & destinations & analysis.pin_mask(from);
            for to in targets {
                list.push(Move::normal(from, to, piece, position.piece_on(to)));
            }
        }
    }
}
