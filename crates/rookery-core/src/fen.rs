//! FEN parsing and serialization for [`Position`].

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::{File, Rank, Square};

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Load a position from FEN. The two move counters may be omitted.
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        parse(fen).inspect_err(|error| debug!(fen, %error, "rejected FEN"))
    }

    pub fn to_fen(&self) -> String {
        self.to_string()
    }
}

fn parse(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 4 && fields.len() != 6 {
        return Err(FenError::WrongFieldCount { found: fields.len() });
    }

    let mut position = Position::empty();
    parse_placement(&mut position, fields[0])?;

    let side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidColor {
                found: other.to_string(),
            });
        }
    };
    position.set_side_to_move(side_to_move);
    position.set_castling(CastleRights::from_fen(fields[2])?);

    let en_passant = match fields[3] {
        "-" => None,
        text => {
            let invalid = || FenError::InvalidEnPassant {
                found: text.to_string(),
            };
            let sq = Square::from_algebraic(text).ok_or_else(invalid)?;
            if sq.rank() != side_to_move.en_passant_rank() {
                return Err(invalid());
            }
            Some(sq)
        }
    };
    position.set_en_passant(en_passant);

    let (halfmove_clock, fullmove_number) = match fields.get(4..6) {
        Some(&[halfmove, fullmove]) => (
            parse_counter("halfmove clock", halfmove)?,
            parse_counter("fullmove number", fullmove)?,
        ),
        _ => (0, 1),
    };
    position.set_counters(halfmove_clock, fullmove_number);

    position.refresh_derived();
    position.validate()?;
    Ok(position)
}

fn parse_placement(position: &mut Position, placement: &str) -> Result<(), FenError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::WrongRankCount { found: rows.len() });
    }

    for (row, (text, rank)) in rows.iter().zip((0..8u8).rev().filter_map(Rank::new)).enumerate() {
        let mut file = 0usize;
        for c in text.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file += skip as usize;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let Some(f) = u8::try_from(file).ok().and_then(File::new) else {
                return Err(FenError::BadRankLength {
                    rank: row,
                    length: file + 1,
                });
            };
            position.toggle(piece, Square::new(f, rank));
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRankLength { rank: row, length: file });
        }
    }
    Ok(())
}

fn parse_counter(field: &'static str, text: &str) -> Result<u16, FenError> {
    text.parse().map_err(|_| FenError::InvalidMoveCounter {
        field,
        found: text.to_string(),
    })
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        Position::from_fen(fen)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev().filter_map(Rank::new) {
            let mut empty = 0;
            for file in (0..8u8).filter_map(File::new) {
                match self.piece_on(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank != Rank::FIRST {
                f.write_str("/")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => f.write_str(" -")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
