//! Square-by-square ray walking, used to check the table-driven attacks.

use crate::bitboard::Bitboard;
use crate::square::Square;

const ROOK_STEPS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_STEPS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn walk(sq: Square, occupied: Bitboard, steps: &[(i8, i8)]) -> Bitboard {
    let mut result = Bitboard::EMPTY;
    for &(dr, df) in steps {
        let mut rank = sq.rank().index() as i8 + dr;
        let mut file = sq.file().index() as i8 + df;
        while (0..8).contains(&rank) && (0..8).contains(&file) {
            let Some(target) = Square::from_index((rank * 8 + file) as u8) else {
                break;
            };
            result = result.with(target);
            if occupied.contains(target) {
                break;
            }
            rank += dr;
            file += df;
        }
    }
    result
}

pub(crate) fn rook(sq: Square, occupied: Bitboard) -> Bitboard {
    walk(sq, occupied, &ROOK_STEPS)
}

pub(crate) fn bishop(sq: Square, occupied: Bitboard) -> Bitboard {
    walk(sq, occupied, &BISHOP_STEPS)
}

/// Deterministic 64-bit LCG for sampling occupancies.
pub(crate) struct Lcg(u64);

impl Lcg {
    pub(crate) fn new(seed: u64) -> Lcg {
        Lcg(seed)
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0
    }

    /// Sparse boards are closer to real positions than uniform noise.
    pub(crate) fn sparse(&mut self) -> Bitboard {
        Bitboard::new(self.next_u64() & self.next_u64() & self.next_u64())
    }
}
