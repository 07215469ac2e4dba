//! Which slice of the legal moves to generate.

use crate::bitboard::Bitboard;

/// Compile-time generation mode.
pub trait GenType {
    const CAPTURES: bool;
    const QUIETS: bool;

    /// Destination squares a non-pawn move may land on under this mode.
    #[inline]
    fn destinations(empty: Bitboard, enemy: Bitboard) -> Bitboard {
        let mut set = Bitboard::EMPTY;
        if Self::CAPTURES {
            set |= enemy;
        }
        if Self::QUIETS {
            set |= empty;
        }
        set
    }
}

/// Every legal move.
pub struct All;
impl GenType for All {
    const CAPTURES: bool = true;
    const QUIETS: bool = true;
}

/// Moves that take a piece, en passant included.
pub struct Captures;
impl GenType for Captures {
    const CAPTURES: bool = true;
    const QUIETS: bool = false;
}

/// Everything that is not a capture: pushes, quiet promotions, castling.
pub struct Quiets;
impl GenType for Quiets {
    const CAPTURES: bool = false;
    const QUIETS: bool = true;
}

/// Runtime counterpart of [`GenType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenMode {
    #[default]
    All,
    Captures,
    Quiets,
}
