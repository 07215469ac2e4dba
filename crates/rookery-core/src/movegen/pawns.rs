//! Pawn move generation.

use crate::attacks::pawn_attacks;
use crate::chess_move::{Move, PromotionPiece};
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

use super::MoveList;
use super::analysis::Analysis;
use super::mode::GenType;

/// Generate legal pawn moves.
pub(super) fn gen_pawns<G: GenType>(position: &Position, analysis: &Analysis, list: &mut MoveList) {
    let us = position.side_to_move();
    let pawn = Piece::new(PieceKind::Pawn, us);
    let pawns = position.pieces(pawn);
    let empty = !position.occupied();
    let enemy = position.side(!us);
    let push = us.push_delta();
    let promotion_rank = us.promotion_rank();
    let active = analysis.active;

    let allowed = |from: Square, to: Square| analysis.pin_mask(from).contains(to);

    if G::QUIETS {
        let single = pawns.forward(us) & empty;
        let double = single.forward(us) & empty & us.double_push_rank();

        for to in single & active {
            let from = to.offset(-push);
            if !allowed(from, to) {
                continue;
            }
            if promotion_rank.contains(to) {
                push_promotions(list, from, to, pawn, None);
            } else {
                list.push(Move::normal(from, to, pawn, None));
            }
        }

        for to in double & active {
            let from = to.offset(-2 * push);
            if allowed(from, to) {
                list.push(Move::normal(from, to, pawn, None));
            }
        }
    }

    if G::CAPTURES {
        for from in pawns {
            for to in pawn_attacks(us, from) & enemy & active {
                if !allowed(from, to) {
                    continue;
                }
                let captured = position.piece_on(to);
                if promotion_rank.contains(to) {
                    push_promotions(list, from, to, pawn, captured);
                } else {
                    list.push(Move::normal(from, to, pawn, captured));
                }
            }
        }

        if let Some(target) = position.en_passant() {
            // Taking the pawn that just double-pushed resolves a check it gives.
            let victim = target.offset(-push);
            if active.contains(target) || active.contains(victim) {
                for from in analysis.en_passant_capturers {
                    list.push(Move::en_passant(from, target, pawn));
                }
            }
        }
    }
}

fn push_promotions(list: &mut MoveList, from: Square, to: Square, pawn: Piece, captured: Option<Piece>) {
    for promotion in PromotionPiece::ALL {
        list.push(Move::promotion(from, to, pawn, captured, promotion));
    }
}
