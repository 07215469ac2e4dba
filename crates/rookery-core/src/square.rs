//! Board coordinates: files, ranks, and squares.

use std::fmt;

use crate::bitboard::Bitboard;

/// A file, `a` = 0 through `h` = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct File(u8);

impl File {
    pub const A: File = File(0);
    pub const H: File = File(7);

    /// `None` unless `index < 8`.
    #[inline]
    pub const fn new(index: u8) -> Option<File> {
        if index < 8 { Some(File(index)) } else { None }
    }

    /// Parse `'a'..='h'`.
    pub fn from_char(c: char) -> Option<File> {
        let offset = (c as u32).checked_sub('a' as u32)?;
        File::new(u8::try_from(offset).ok()?)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        char::from(b'a' + self.0)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank, `1` = 0 through `8` = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    pub const FIRST: Rank = Rank(0);
    pub const THIRD: Rank = Rank(2);
    pub const SIXTH: Rank = Rank(5);
    pub const EIGHTH: Rank = Rank(7);

    /// `None` unless `index < 8`.
    #[inline]
    pub const fn new(index: u8) -> Option<Rank> {
        if index < 8 { Some(Rank(index)) } else { None }
    }

    /// Parse `'1'..='8'`.
    pub fn from_char(c: char) -> Option<Rank> {
        let offset = (c as u32).checked_sub('1' as u32)?;
        Rank::new(u8::try_from(offset).ok()?)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        char::from(b'1' + self.0)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One of the 64 squares, numbered `rank * 8 + file`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 64;

    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(rank.0 * 8 + file.0)
    }

    /// `None` unless `index < 64`.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Caller guarantees `index < 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse two-character coordinates such as `"e4"`.
    pub fn from_algebraic(text: &str) -> Option<Square> {
        let mut chars = text.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(file, rank))
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> File {
        File(self.0 & 7)
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank(self.0 >> 3)
    }

    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1 << self.0)
    }

    /// Move by a signed index delta. Caller guarantees the result stays on the board.
    #[inline]
    pub(crate) const fn offset(self, delta: i8) -> Square {
        Square::from_index_unchecked((self.0 as i8 + delta) as u8)
    }

    /// All squares from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

macro_rules! named_squares {
    ($($name:ident),* $(,)?) => {
        impl Square {
            named_squares!(@each 0u8; $($name),*);
        }
    };
    (@each $idx:expr; $head:ident $(, $tail:ident)*) => {
        pub const $head: Square = Square($idx);
        named_squares!(@each $idx + 1; $($tail),*);
    };
    (@each $idx:expr;) => {};
}

named_squares!(
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
);

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
