//! The position: twelve piece bitboards, derived occupancy, game metadata,
//! incremental hashes, and the undo history.

use std::fmt;

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::PositionError;
use crate::history::History;
use crate::piece::{Piece, PieceKind};
use crate::square::{File, Rank, Square};
use crate::zobrist;

#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    /// Indexed by [`Piece::index`].
    pieces: [Bitboard; Piece::COUNT],
    /// Square-to-piece view of `pieces`, kept in step by [`Position::toggle`].
    mailbox: [Option<Piece>; Square::COUNT],
    /// Derived from `pieces`, indexed by [`Color::index`].
    sides: [Bitboard; Color::COUNT],
    occupied: Bitboard,
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
    hash: u64,
    pawn_hash: u64,
    pub(crate) history: History,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Position {
    /// A board with no pieces, White to move, no rights, counters at `0 1`.
    pub(crate) fn empty() -> Position {
        Position {
            pieces: [Bitboard::EMPTY; Piece::COUNT],
            mailbox: [None; Square::COUNT],
            sides: [Bitboard::EMPTY; Color::COUNT],
            occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
            pawn_hash: 0,
            history: History::default(),
        }
    }

    pub fn starting_position() -> Position {
        let mut position = Position::empty();
        for (index, kind) in (0u8..).zip(BACK_RANK) {
            let Some(file) = File::new(index) else { continue };
            for (color, home, pawns) in [
                (Color::White, Rank::FIRST, Rank::new(1)),
                (Color::Black, Rank::EIGHTH, Rank::new(6)),
            ] {
                position.put(Piece::new(kind, color), Square::new(file, home));
                if let Some(rank) = pawns {
                    position.put(Piece::new(PieceKind::Pawn, color), Square::new(file, rank));
                }
            }
        }
        position.castling = CastleRights::ALL;
        position.refresh_derived();
        position
    }

    // --- Raw mutation, used by the FEN loader and make/undo ---

    /// XOR `piece` on `sq` into its bitboard, the mailbox, and both hashes.
    /// Aggregates are left stale until [`Position::refresh_occupancy`].
    #[inline]
    pub(crate) fn toggle(&mut self, piece: Piece, sq: Square) {
        let slot = &mut self.pieces[piece.index()];
        *slot ^= sq.bitboard();
        self.mailbox[sq.index()] = slot.contains(sq).then_some(piece);
        let key = zobrist::piece_square(piece, sq);
        self.hash ^= key;
        if piece.kind() == PieceKind::Pawn {
            self.pawn_hash ^= key;
        }
    }

    /// Place a piece and bring aggregates up to date.
    pub(crate) fn put(&mut self, piece: Piece, sq: Square) {
        self.toggle(piece, sq);
        self.refresh_occupancy();
    }

    /// Recompute the color unions and occupancy from the twelve slots.
    #[inline]
    pub(crate) fn refresh_occupancy(&mut self) {
        let (white, black) = self.pieces.split_at(PieceKind::COUNT);
        let union = |slots: &[Bitboard]| slots.iter().fold(Bitboard::EMPTY, |acc, &bb| acc | bb);
        self.sides = [union(white), union(black)];
        self.occupied = self.sides[0] | self.sides[1];
    }

    /// Recompute occupancy and both hashes from scratch.
    pub(crate) fn refresh_derived(&mut self) {
        self.refresh_occupancy();
        self.hash = zobrist::hash_from_scratch(self);
        self.pawn_hash = zobrist::pawn_hash_from_scratch(self);
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    pub(crate) fn set_counters(&mut self, halfmove_clock: u16, fullmove_number: u16) {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
    }

    pub(crate) fn set_hashes(&mut self, hash: u64, pawn_hash: u64) {
        self.hash = hash;
        self.pawn_hash = pawn_hash;
    }

    #[inline]
    pub(crate) fn xor_hash(&mut self, key: u64) {
        self.hash ^= key;
    }

    // --- Accessors ---

    #[inline]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.index()]
    }

    /// Pieces of one kind and color.
    #[inline]
    pub fn pieces_of(&self, kind: PieceKind, color: Color) -> Bitboard {
        self.pieces[Piece::new(kind, color).index()]
    }

    /// Pieces of one kind, both colors.
    #[inline]
    pub fn kind(&self, kind: PieceKind) -> Bitboard {
        self.pieces_of(kind, Color::White) | self.pieces_of(kind, Color::Black)
    }

    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Zobrist hash of pieces, side to move, castling rights, and en-passant file.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Zobrist hash of the pawns only.
    #[inline]
    pub fn pawn_hash(&self) -> u64 {
        self.pawn_hash
    }

    /// Number of moves applied since the position was loaded.
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Hashes of the earlier positions in this line, most recent first. Together
    /// with the half-move clock this is what repetition detection needs.
    pub fn previous_hashes(&self) -> impl Iterator<Item = u64> + '_ {
        self.history.hashes()
    }

    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.mailbox[sq.index()]
    }

    pub fn king_square(&self, color: Color) -> Square {
        self.pieces_of(PieceKind::King, color)
            .lsb()
            .expect("validated positions have one king per side")
    }

    // --- Attack queries ---

    /// Pieces of either color attacking `sq`, with sliders seeing through `occupied`.
    pub fn attackers_to(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        let diagonal = self.kind(PieceKind::Bishop) | self.kind(PieceKind::Queen);
        let orthogonal = self.kind(PieceKind::Rook) | self.kind(PieceKind::Queen);
        (pawn_attacks(Color::Black, sq) & self.pieces_of(PieceKind::Pawn, Color::White))
            | (pawn_attacks(Color::White, sq) & self.pieces_of(PieceKind::Pawn, Color::Black))
            | (knight_attacks(sq) & self.kind(PieceKind::Knight))
            | (king_attacks(sq) & self.kind(PieceKind::King))
            | (bishop_attacks(sq, occupied) & diagonal)
            | (rook_attacks(sq, occupied) & orthogonal)
    }

    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        (self.attackers_to(sq, self.occupied) & self.side(by)).is_nonempty()
    }

    /// Enemy pieces giving check to the side to move.
    pub fn checkers(&self) -> Bitboard {
        let us = self.side_to_move;
        self.attackers_to(self.king_square(us), self.occupied) & self.side(!us)
    }

    pub fn is_in_check(&self) -> bool {
        self.checkers().is_nonempty()
    }

    // --- Validation ---

    /// Check the structural invariants every loaded position must satisfy.
    pub fn validate(&self) -> Result<(), PositionError> {
        for color in Color::ALL {
            let count = self.pieces_of(PieceKind::King, color).count();
            if count != 1 {
                return Err(PositionError::InvalidKingCount { color, count });
            }
        }

        if (self.kind(PieceKind::Pawn) & (Bitboard::RANK_1 | Bitboard::RANK_8)).is_nonempty() {
            return Err(PositionError::PawnsOnBackRank);
        }

        let mut seen = Bitboard::EMPTY;
        for bb in self.pieces {
            if (seen & bb).is_nonempty() {
                return Err(PositionError::OverlappingPieces);
            }
            seen |= bb;
        }

        if (self.sides[0] & self.sides[1]).is_nonempty() {
            return Err(PositionError::InconsistentSides);
        }
        if self.occupied != seen || self.occupied != self.sides[0] | self.sides[1] {
            return Err(PositionError::InconsistentOccupied);
        }

        if let Some(square) = self.en_passant {
            let us = self.side_to_move;
            // The pushed pawn stands one rank past the target, its origin one rank before.
            let ok = square.rank() == us.en_passant_rank() && {
                let pushed = square.offset(-us.push_delta());
                let origin = square.offset(us.push_delta());
                self.pieces_of(PieceKind::Pawn, !us).contains(pushed)
                    && !self.occupied.contains(square)
                    && !self.occupied.contains(origin)
            };
            if !ok {
                return Err(PositionError::EnPassantWithoutPawn { square });
            }
        }

        let them = !self.side_to_move;
        if self.is_square_attacked(self.king_square(them), self.side_to_move) {
            return Err(PositionError::OpponentInCheck);
        }

        Ok(())
    }

    /// 8x8 diagram, rank 8 at the top.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{self}\")")
    }
}

pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.0;
        for rank in (0..8u8).rev().filter_map(Rank::new) {
            write!(f, "{rank} ")?;
            for file in (0..8u8).filter_map(File::new) {
                let c = position
                    .piece_on(Square::new(file, rank))
                    .map_or('.', Piece::fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move, hash {:016x}", position.side_to_move, position.hash)
    }
}
