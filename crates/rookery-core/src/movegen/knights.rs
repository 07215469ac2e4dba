//! Knight move generation.

use crate::attacks::knight_attacks;
use crate::chess_move::Move;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;

use super::MoveList;
use super::analysis::Analysis;
use super::mode::GenType;

/// Generate legal knight moves.
pub(super) fn gen_knights<G: GenType>(position: &Position, analysis: &Analysis, list: &mut MoveList) {
    let us = position.side_to_move();
    let knight = Piece::new(PieceKind::Knight, us);
    let destinations = G::destinations(!position.occupied(), position.side(!us)) & analysis.active;

    // A pinned knight can never stay on its pin line.
    for from in position.pieces(knight) & !analysis.pins() {
        for to in knight_attacks(from) & destinations {
            list.push(Move::normal(from, to, knight, position.piece_on(to)));
        }
    }
}
