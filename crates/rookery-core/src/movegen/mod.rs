//! Legal move generation.

mod analysis;
mod king;
mod knights;
mod mode;
mod pawns;
mod sliders;

use crate::chess_move::Move;
use crate::position::Position;

use self::king::gen_king;
use self::knights::gen_knights;
use self::pawns::gen_pawns;
use self::sliders::gen_sliders;

pub use self::analysis::Analysis;
pub use self::mode::{All, Captures, GenMode, GenType, Quiets};

/// Stack-allocated buffer for generated moves. Capacity 256 covers the theoretical max of 218.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; 256],
    len: u16,
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; 256],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < self.moves.len());
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// An empty list means checkmate or stalemate.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter().map(|mv| mv.to_string())).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Generate the legal moves selected by `G`, grouped by piece type: pawns,
/// knights, bishops, rooks, queens, king.
pub fn generate<G: GenType>(position: &Position) -> MoveList {
    let mut list = MoveList::new();
    let analysis = Analysis::new(position);

    // In double check only the king may move.
    if !analysis.checkers.has_several() {
        gen_pawns::<G>(position, &analysis, &mut list);
        gen_knights::<G>(position, &analysis, &mut list);
        gen_sliders::<G>(position, &analysis, &mut list);
    }
    gen_king::<G>(position, &analysis, &mut list);

    list
}

pub fn generate_moves(position: &Position, mode: GenMode) -> MoveList {
    match mode {
        GenMode::All => generate::<All>(position),
        GenMode::Captures => generate::<Captures>(position),
        GenMode::Quiets => generate::<Quiets>(position),
    }
}

/// Generate all legal moves for the side to move.
pub fn generate_legal_moves(position: &Position) -> MoveList {
    generate::<All>(position)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::chess_move::PromotionPiece;
    use crate::piece::{Piece, PieceKind};
    use crate::square::Square;

    fn load(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    fn from_square(moves: &MoveList, sq: Square) -> Vec<Move> {
        moves.iter().copied().filter(|m| m.origin() == sq).collect()
    }

    #[test]
    fn starting_position_20_moves() {
        let moves = generate_legal_moves(&Position::starting_position());
        assert_eq!(moves.len(), 20, "got {moves:?}");
        assert!(moves.contains(Move::normal(Square::G1, Square::F3, Piece::WHITE_KNIGHT, None)));
        assert!(moves.contains(Move::normal(Square::E2, Square::E4, Piece::WHITE_PAWN, None)));
    }

    #[test]
    fn grouped_by_piece_type() {
        let moves = generate_legal_moves(&Position::starting_position());
        let kinds: Vec<PieceKind> = moves.iter().map(|m| m.piece().kind()).collect();
        let mut sorted = kinds.clone();
        sorted.sort_by_key(|k| k.index());
        assert_eq!(kinds, sorted);
    }

    #[test]
    fn pinned_knight_zero_moves() {
        let position = load("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let moves = generate_legal_moves(&position);
        assert!(from_square(&moves, Square::E2).is_empty(), "pinned knight moved: {moves:?}");
    }

    #[test]
    fn pinned_rook_slides_along_pin() {
        let position = load("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1");
        let moves = generate_legal_moves(&position);
        let targets: HashSet<Square> = from_square(&moves, Square::E2).iter().map(|m| m.target()).collect();
        let expected: HashSet<Square> =
            [Square::E3, Square::E4, Square::E5, Square::E6, Square::E7, Square::E8].into();
        assert_eq!(targets, expected);
    }

    #[test]
    fn pinned_pawn_may_capture_pinner() {
        let position = load("4k3/8/8/8/8/2b5/3P4/4K3 w - - 0 1");
        let moves = generate_legal_moves(&position);
        let pawn_moves = from_square(&moves, Square::D2);
        assert_eq!(pawn_moves.len(), 1);
        assert_eq!(pawn_moves[0].target(), Square::C3);
        assert_eq!(pawn_moves[0].captured(), Some(Piece::BLACK_BISHOP));
    }

    #[test]
    fn double_check_king_only() {
        let position = load("4r1k1/8/8/8/8/5n2/8/4K3 w - - 0 1");
        let moves = generate_legal_moves(&position);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert_eq!(mv.piece(), Piece::WHITE_KING, "in double check, got {mv:?}");
        }
    }

    #[test]
    fn single_check_block_or_capture() {
        // Rook a1 checks along the first rank; the bishop on b2 can block on c1
        // and the knight on b3 can take on a1.
        let position = load("4k3/8/8/8/8/1N6/1B6/r3K3 w - - 0 1");
        let moves = generate_legal_moves(&position);
        for mv in moves.iter().filter(|m| m.piece() != Piece::WHITE_KING) {
            assert!(
                [Square::A1, Square::B1, Square::C1, Square::D1].contains(&mv.target()),
                "{mv:?} ignores the check"
            );
        }
        assert!(moves.contains(Move::normal(Square::B2, Square::C1, Piece::WHITE_BISHOP, None)));
        assert!(moves.contains(Move::normal(Square::B3, Square::A1, Piece::WHITE_KNIGHT, None)));
        assert!(!moves.iter().any(|m| m.target() == Square::F1));
    }

    #[test]
    fn castling_not_through_check() {
        // Bishop a6 covers f1.
        let position = load("4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1");
        let castles: Vec<Move> = generate_legal_moves(&position).iter().copied().filter(|m| m.is_castle()).collect();
        assert_eq!(castles, vec![Move::castle(Square::E1, Square::C1, Piece::WHITE_KING)]);
    }

    #[test]
    fn castling_queen_side_ignores_attacked_b_file() {
        // Only the king's path must be safe; b1 may be attacked.
        let position = load("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        let moves = generate_legal_moves(&position);
        assert!(moves.contains(Move::castle(Square::E1, Square::C1, Piece::WHITE_KING)));
    }

    #[test]
    fn castling_blocked_or_in_check() {
        let blocked = load("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1");
        let castles = generate_legal_moves(&blocked).iter().filter(|m| m.is_castle()).count();
        assert_eq!(castles, 1);

        let in_check = load("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1");
        assert!(!generate_legal_moves(&in_check).iter().any(|m| m.is_castle()));
    }

    #[test]
    fn castling_needs_the_rook() {
        // Rights claim a rook on h1 that is not there.
        let mut position = load("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        position.toggle(Piece::WHITE_ROOK, Square::H1);
        position.refresh_derived();
        let castles: Vec<Move> = generate_legal_moves(&position).iter().copied().filter(|m| m.is_castle()).collect();
        assert_eq!(castles, vec![Move::castle(Square::E1, Square::C1, Piece::WHITE_KING)]);
    }

    #[test]
    fn en_passant_legal() {
        let position = load("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let moves = generate_legal_moves(&position);
        let ep: Vec<Move> = moves.iter().copied().filter(|m| m.is_en_passant()).collect();
        assert_eq!(ep, vec![Move::en_passant(Square::E5, Square::D6, Piece::WHITE_PAWN)]);
    }

    #[test]
    fn en_passant_discovered_check_illegal() {
        let position = load("4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1");
        let moves = generate_legal_moves(&position);
        assert!(!moves.iter().any(|m| m.is_en_passant()), "{moves:?}");
    }

    #[test]
    fn en_passant_answers_pawn_check() {
        // The pawn on d5 just arrived with check; taking it en passant is legal.
        let position = load("8/8/8/3pP3/4K3/8/8/7k w - d6 0 1");
        let moves = generate_legal_moves(&position);
        assert!(moves.contains(Move::en_passant(Square::E5, Square::D6, Piece::WHITE_PAWN)));
        for mv in moves.iter().filter(|m| m.piece() != Piece::WHITE_KING) {
            assert_eq!(mv.capture_square(), Some(Square::D5), "{mv:?}");
        }
    }

    #[test]
    fn promotion_generates_4_moves() {
        let position = load("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let moves = generate_legal_moves(&position);
        let promotions: HashSet<PromotionPiece> = moves.iter().filter_map(|m| m.promotion_piece()).collect();
        assert_eq!(promotions.len(), 4);
        assert_eq!(moves.iter().filter(|m| m.is_promotion()).count(), 4);
    }

    #[test]
    fn modes_partition_all() {
        for fen in [
            crate::STARTING_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1",
        ] {
            let position = load(fen);
            let all: HashSet<Move> = generate_moves(&position, GenMode::All).iter().copied().collect();
            let captures = generate_moves(&position, GenMode::Captures);
            let quiets = generate_moves(&position, GenMode::Quiets);
            assert!(captures.iter().all(|m| m.is_capture()), "{fen}");
            assert!(quiets.iter().all(|m| !m.is_capture()), "{fen}");
            let union: HashSet<Move> = captures.iter().chain(quiets.iter()).copied().collect();
            assert_eq!(union.len(), captures.len() + quiets.len(), "{fen}");
            assert_eq!(union, all, "{fen}");
        }
    }

    #[test]
    fn checkmate_and_stalemate_are_empty() {
        let mate = load("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(mate.is_in_check());
        assert!(generate_legal_moves(&mate).is_empty());

        let stalemate = load("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(!stalemate.is_in_check());
        assert!(generate_legal_moves(&stalemate).is_empty());
    }
}
