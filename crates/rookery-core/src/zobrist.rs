//! Zobrist keys and from-scratch hashing.
//!
//! Castling is keyed per flag, so the key for a rights set is the XOR of the
//! keys of its flags and a change of rights costs two lookups.

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

pub(crate) struct Keys {
    piece_square: [[u64; 64]; 12],
    black_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

const SEED: u64 = 0x726f_6f6b_6572_7921;

/// One xorshift64 step.
const fn next(state: u64) -> u64 {
    let mut x = state;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    x
}

const fn generate() -> Keys {
    let mut state = SEED;

    let mut piece_square = [[0u64; 64]; 12];
    let mut piece = 0;
    while piece < 12 {
        let mut sq = 0;
        while sq < 64 {
            state = next(state);
            piece_square[piece][sq] = state;
            sq += 1;
        }
        piece += 1;
    }

    state = next(state);
    let black_to_move = state;

    let mut flags = [0u64; 4];
    let mut f = 0;
    while f < 4 {
        state = next(state);
        flags[f] = state;
        f += 1;
    }
    let mut castling = [0u64; 16];
    let mut rights = 0;
    while rights < 16 {
        let mut f = 0;
        while f < 4 {
            if rights >> f & 1 == 1 {
                castling[rights] ^= flags[f];
            }
            f += 1;
        }
        rights += 1;
    }

    let mut en_passant_file = [0u64; 8];
    let mut file = 0;
    while file < 8 {
        state = next(state);
        en_passant_file[file] = state;
        file += 1;
    }

    Keys {
        piece_square,
        black_to_move,
        castling,
        en_passant_file,
    }
}

static KEYS: Keys = generate();

#[inline]
pub(crate) fn piece_square(piece: Piece, sq: Square) -> u64 {
    KEYS.piece_square[piece.index()][sq.index()]
}

#[inline]
pub(crate) fn side_to_move() -> u64 {
    KEYS.black_to_move
}

#[inline]
pub(crate) fn castling(rights: CastleRights) -> u64 {
    KEYS.castling[rights.bits() as usize]
}

#[inline]
pub(crate) fn en_passant(sq: Square) -> u64 {
    KEYS.en_passant_file[sq.file().index()]
}

fn pieces_hash(position: &Position, pieces: impl Iterator<Item = Piece>) -> u64 {
    pieces
        .flat_map(|piece| position.pieces(piece).map(move |sq| piece_square(piece, sq)))
        .fold(0, |hash, key| hash ^ key)
}

/// Full position hash recomputed from the twelve bitboards and the metadata.
pub fn hash_from_scratch(position: &Position) -> u64 {
    let mut hash = pieces_hash(position, Piece::all());
    if position.side_to_move() == Color::Black {
        hash ^= side_to_move();
    }
    hash ^= castling(position.castling());
    if let Some(sq) = position.en_passant() {
        hash ^= en_passant(sq);
    }
    hash
}

/// Hash of the pawn structure alone.
pub fn pawn_hash_from_scratch(position: &Position) -> u64 {
    let pawns = Color::ALL.into_iter().map(|c| Piece::new(PieceKind::Pawn, c));
    pieces_hash(position, pawns)
}
