//! 64-bit square sets. Bit `i` is square `i` in a1 = 0 .. h8 = 63 order.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::color::Color;
use crate::square::Square;

/// A set of squares packed into a `u64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(u64::MAX);

    pub const RANK_1: Bitboard = Bitboard(0xFF);
    pub const RANK_2: Bitboard = Bitboard(0xFF << 8);
    pub const RANK_3: Bitboard = Bitboard(0xFF << 16);
    pub const RANK_4: Bitboard = Bitboard(0xFF << 24);
    pub const RANK_5: Bitboard = Bitboard(0xFF << 32);
    pub const RANK_6: Bitboard = Bitboard(0xFF << 40);
    pub const RANK_7: Bitboard = Bitboard(0xFF << 48);
    pub const RANK_8: Bitboard = Bitboard(0xFF << 56);

    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_H: Bitboard = Bitboard(0x0101_0101_0101_0101 << 7);

    /// Wrap a raw mask.
    #[inline]
    pub const fn new(bits: u64) -> Bitboard {
        Bitboard(bits)
    }

    /// The raw mask.
    #[inline]
    pub const fn inner(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_nonempty(self) -> bool {
        self.0 != 0
    }

    /// `true` when two or more squares are set.
    #[inline]
    pub const fn has_several(self) -> bool {
        self.0 & self.0.wrapping_sub(1) != 0
    }

    /// Number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 >> sq.index() & 1 == 1
    }

    #[inline]
    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | 1 << sq.index())
    }

    #[inline]
    pub const fn without(self, sq: Square) -> Bitboard {
        Bitboard(self.0 & !(1 << sq.index()))
    }

    /// Lowest set square.
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        Some(Square::from_index_unchecked(self.0.trailing_zeros() as u8))
    }

    /// Highest set square.
    #[inline]
    pub const fn msb(self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        Some(Square::from_index_unchecked(63 - self.0.leading_zeros() as u8))
    }

    /// Split off the lowest set square.
    #[inline]
    pub const fn pop_lsb(self) -> Option<(Square, Bitboard)> {
        match self.lsb() {
            Some(sq) => Some((sq, Bitboard(self.0 & (self.0 - 1)))),
            None => None,
        }
    }

    /// Shift every square one rank toward the opponent of `color`.
    #[inline]
    pub const fn forward(self, color: Color) -> Bitboard {
        match color {
            Color::White => Bitboard(self.0 << 8),
            Color::Black => Bitboard(self.0 >> 8),
        }
    }

    /// Shift every square one rank back toward `color`'s home rank.
    #[inline]
    pub const fn backward(self, color: Color) -> Bitboard {
        self.forward(color.flip())
    }

    /// Squares attacked by pawns of `color` standing on this set.
    #[inline]
    pub const fn pawn_captures(self, color: Color) -> Bitboard {
        let west = self.0 & !Self::FILE_A.0;
        let east = self.0 & !Self::FILE_H.0;
        match color {
            Color::White => Bitboard(west << 7 | east << 9),
            Color::Black => Bitboard(west >> 9 | east >> 7),
        }
    }
}

macro_rules! bit_op {
    ($op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl $op_trait for Bitboard {
            type Output = Bitboard;

            #[inline]
            fn $op_fn(self, rhs: Bitboard) -> Bitboard {
                Bitboard(self.0 $op rhs.0)
            }
        }

        impl $assign_trait for Bitboard {
            #[inline]
            fn $assign_fn(&mut self, rhs: Bitboard) {
                self.0 = self.0 $op rhs.0;
            }
        }
    };
}

bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
bit_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let (sq, rest) = self.pop_lsb()?;
        *self = rest;
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Bitboard {}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bitboard({:#018x})", self.0)?;
        for rank in (0..8u8).rev() {
            let row = (self.0 >> (rank * 8)) as u8;
            for file in 0..8 {
                let mark = if row >> file & 1 == 1 { 'x' } else { '.' };
                write!(f, "{mark}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
