//! Compile-time geometry tables.

use crate::bitboard::Bitboard;

/// The eight compass directions as (rank, file) steps.
const DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (0, 1),
    (1, 1),
    (1, -1),
    (-1, 0),
    (0, -1),
    (-1, -1),
    (-1, 1),
];

#[inline]
const fn on_board(rank: i8, file: i8) -> bool {
    rank >= 0 && rank < 8 && file >= 0 && file < 8
}

/// Squares reached from `sq` by each single step in `deltas`.
const fn step_table<const N: usize>(deltas: [(i8, i8); N]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        let mut bits = 0u64;
        let mut d = 0;
        while d < N {
            let rank = (sq / 8) as i8 + deltas[d].0;
            let file = (sq % 8) as i8 + deltas[d].1;
            if on_board(rank, file) {
                bits |= 1 << (rank * 8 + file);
            }
            d += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

/// Squares from `sq` (exclusive) to the edge along one direction.
pub(super) const fn ray(sq: usize, dr: i8, df: i8) -> u64 {
    let mut bits = 0u64;
    let mut rank = (sq / 8) as i8 + dr;
    let mut file = (sq % 8) as i8 + df;
    while on_board(rank, file) {
        bits |= 1 << (rank * 8 + file);
        rank += dr;
        file += df;
    }
    bits
}

pub(super) struct Geometry {
    pub between: [[Bitboard; 64]; 64],
    pub line: [[Bitboard; 64]; 64],
}

/// Walk every ray once. Each square met along a ray gets the squares already
/// passed as its `between` entry and the full two-sided line as its `line` entry.
const fn compute_geometry() -> Geometry {
    let mut between = [[Bitboard::EMPTY; 64]; 64];
    let mut line = [[Bitboard::EMPTY; 64]; 64];
    let mut from = 0;
    while from < 64 {
        let mut d = 0;
        while d < 8 {
            let (dr, df) = DIRECTIONS[d];
            let full = ray(from, dr, df) | ray(from, -dr, -df) | 1 << from;
            let mut passed = 0u64;
            let mut rank = (from / 8) as i8 + dr;
            let mut file = (from % 8) as i8 + df;
            while on_board(rank, file) {
                let to = (rank * 8 + file) as usize;
                between[from][to] = Bitboard::new(passed);
                line[from][to] = Bitboard::new(full);
                passed |= 1 << to;
                rank += dr;
                file += df;
            }
            d += 1;
        }
        from += 1;
    }
    Geometry { between, line }
}

pub(super) static KNIGHT: [Bitboard; 64] = step_table([
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
]);

pub(super) static KING: [Bitboard; 64] = step_table(DIRECTIONS);

/// Indexed by `[color][square]`.
pub(super) static PAWN: [[Bitboard; 64]; 2] = [
    step_table([(1, -1), (1, 1)]),
    step_table([(-1, -1), (-1, 1)]),
];

pub(super) static GEOMETRY: Geometry = compute_geometry();
