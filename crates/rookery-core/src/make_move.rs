//! In-place move execution and its exact inverse.

use crate::castle_rights::{CastlingPath, revoked_by};
use crate::chess_move::Move;
use crate::color::Color;
use crate::history::StateSnapshot;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::zobrist;

impl Move {
    /// The piece standing on the destination once the move is played.
    #[inline]
    fn landed(self) -> Piece {
        match self.promotion_piece() {
            Some(promo) => Piece::new(promo.kind(), self.color()),
            None => self.piece(),
        }
    }

    #[inline]
    fn rook_path(self) -> Option<&'static CastlingPath> {
        if self.is_castle() {
            CastlingPath::by_king_destination(self.color(), self.target())
        } else {
            None
        }
    }
}

impl Position {
    /// Play a legal move for the side to move, updating both hashes incrementally.
    ///
    /// The move must come from the generator for this exact position; anything
    /// else leaves the position in an unspecified state.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_PLIES`](crate::MAX_PLIES) moves are stacked.
    pub fn make_move(&mut self, mv: Move) {
        let us = self.side_to_move();
        let from = mv.origin();
        let to = mv.target();
        let old_castling = self.castling();
        debug_assert_eq!(self.piece_on(from), Some(mv.piece()), "{mv:?} in {self:?}");

        self.history.push(StateSnapshot {
            castling: old_castling,
            en_passant: self.en_passant(),
            hash: self.hash(),
            pawn_hash: self.pawn_hash(),
            halfmove_clock: self.halfmove_clock(),
            fullmove_number: self.fullmove_number(),
        });

        if let Some(ep) = self.en_passant() {
            self.xor_hash(zobrist::en_passant(ep));
            self.set_en_passant(None);
        }
        self.xor_hash(zobrist::side_to_move());

        if let (Some(victim), Some(sq)) = (mv.captured(), mv.capture_square()) {
            self.toggle(victim, sq);
        }
        self.toggle(mv.piece(), from);
        self.toggle(mv.landed(), to);
        if let Some(path) = mv.rook_path() {
            let rook = Piece::new(PieceKind::Rook, us);
            self.toggle(rook, path.rook_from);
            self.toggle(rook, path.rook_to);
        }

        let castling = old_castling.remove(revoked_by(from)).remove(revoked_by(to));
        if castling != old_castling {
            self.xor_hash(zobrist::castling(old_castling) ^ zobrist::castling(castling));
            self.set_castling(castling);
        }

        let pawn_move = mv.piece().kind() == PieceKind::Pawn;
        if pawn_move && from.index().abs_diff(to.index()) == 16 {
            let ep = from.offset(us.push_delta());
            self.xor_hash(zobrist::en_passant(ep));
            self.set_en_passant(Some(ep));
        }

        self.refresh_occupancy();

        let halfmove_clock = if pawn_move || mv.is_capture() {
            0
        } else {
            self.halfmove_clock().saturating_add(1)
        };
        let fullmove_number = match us {
            Color::White => self.fullmove_number(),
            Color::Black => self.fullmove_number().saturating_add(1),
        };
        self.set_counters(halfmove_clock, fullmove_number);
        self.set_side_to_move(!us);
    }

    /// Take back `mv`, which must be the last move made on this position.
    ///
    /// # Panics
    ///
    /// Panics if no move has been made.
    pub fn undo_move(&mut self, mv: Move) {
        let snapshot = self
            .history
            .pop()
            .expect("undo_move called without a matching make_move");
        let us = mv.color();
        self.set_side_to_move(us);

        if let Some(path) = mv.rook_path() {
            let rook = Piece::new(PieceKind::Rook, us);
            self.toggle(rook, path.rook_to);
            self.toggle(rook, path.rook_from);
        }
        self.toggle(mv.landed(), mv.target());
        self.toggle(mv.piece(), mv.origin());
        if let (Some(victim), Some(sq)) = (mv.captured(), mv.capture_square()) {
            self.toggle(victim, sq);
        }
        self.refresh_occupancy();

        self.set_castling(snapshot.castling);
        self.set_en_passant(snapshot.en_passant);
        self.set_hashes(snapshot.hash, snapshot.pawn_hash);
        self.set_counters(snapshot.halfmove_clock, snapshot.fullmove_number);
    }
}
