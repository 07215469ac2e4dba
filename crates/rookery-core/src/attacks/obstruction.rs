//! Sliding attacks by obstruction difference.
//!
//! Every line through a square is split into the part below the square and the
//! part above it. The nearest blocker below is the most significant occupied bit
//! of the lower half, the nearest blocker above is the least significant occupied
//! bit of the upper half, and `2 * upper_blocker - lower_blocker` sets exactly the
//! bits from one blocker to the other. Masking that with the line yields the
//! attacks, blockers included.

use super::tables::ray;

#[derive(Clone, Copy)]
pub(super) struct LineHalves {
    lower: u64,
    upper: u64,
}

impl LineHalves {
    #[inline]
    const fn attacks(self, occupied: u64) -> u64 {
        let below = self.lower & occupied;
        let above = self.upper & occupied;
        // With nothing below, bit 0 stands in as the blocker. The span then starts
        // at a1, the lowest square, so it covers the whole lower half.
        let nearest_below = 0x8000_0000_0000_0000u64 >> (below | 1).leading_zeros();
        let nearest_above = above & above.wrapping_neg();
        let span = nearest_above.wrapping_mul(2).wrapping_sub(nearest_below);
        (self.lower | self.upper) & span
    }
}

/// Line kinds in table order.
const FILE: usize = 0;
const RANK: usize = 1;
const DIAGONAL: usize = 2;
const ANTI_DIAGONAL: usize = 3;

/// Upward step for each line kind. Every one of these increases the square index.
const UPWARD: [(i8, i8); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

const fn compute_lines() -> [[LineHalves; 4]; 64] {
    let mut table = [[LineHalves { lower: 0, upper: 0 }; 4]; 64];
    let mut sq = 0;
    while sq < 64 {
        let mut kind = 0;
        while kind < 4 {
            let (dr, df) = UPWARD[kind];
            table[sq][kind] = LineHalves {
                lower: ray(sq, -dr, -df),
                upper: ray(sq, dr, df),
            };
            kind += 1;
        }
        sq += 1;
    }
    table
}

static LINES: [[LineHalves; 4]; 64] = compute_lines();

#[inline]
pub(super) fn rook(sq: usize, occupied: u64) -> u64 {
    let lines = &LINES[sq];
    lines[FILE].attacks(occupied) | lines[RANK].attacks(occupied)
}

#[inline]
pub(super) fn bishop(sq: usize, occupied: u64) -> u64 {
    let lines = &LINES[sq];
    lines[DIAGONAL].attacks(occupied) | lines[ANTI_DIAGONAL].attacks(occupied)
}
