//! Core chess types: position representation, legal move generation, and
//! reversible move application.

pub mod attacks;
mod bitboard;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod history;
mod make_move;
mod movegen;
mod notation;
mod perft;
mod piece;
mod position;
mod square;
pub mod zobrist;

pub use bitboard::Bitboard;
pub use castle_rights::{CastleRights, CastleSide, CastlingPath};
pub use chess_move::{Move, MoveKind, PromotionPiece};
pub use color::Color;
pub use error::{FenError, MoveParseError, PositionError};
pub use fen::STARTING_FEN;
pub use history::MAX_PLIES;
pub use movegen::{
    All, Analysis, Captures, GenMode, GenType, MoveList, Quiets, generate, generate_legal_moves,
    generate_moves,
};
pub use perft::{divide, perft};
pub use piece::{Piece, PieceKind};
pub use position::{Position, PrettyPosition};
pub use square::{File, Rank, Square};
