//! Per-ply record of the state a move cannot be undone from.

use crate::castle_rights::CastleRights;
use crate::square::Square;

/// Longest line of play a single position will track: a full game that runs
/// until the 75-move rule ends it.
pub const MAX_PLIES: usize = 17_697;

/// Everything `undo_move` restores verbatim instead of recomputing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StateSnapshot {
    pub castling: CastleRights,
    pub en_passant: Option<Square>,
    pub hash: u64,
    pub pawn_hash: u64,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct History {
    entries: Vec<StateSnapshot>,
}

impl History {
    /// # Panics
    ///
    /// Panics if the stack already holds [`MAX_PLIES`] entries.
    #[inline]
    pub fn push(&mut self, snapshot: StateSnapshot) {
        assert!(
            self.entries.len() < MAX_PLIES,
            "history exceeded {MAX_PLIES} plies"
        );
        self.entries.push(snapshot);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<StateSnapshot> {
        self.entries.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Position hashes before each recorded move, most recent first.
    pub fn hashes(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().rev().map(|entry| entry.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(hash: u64) -> StateSnapshot {
        StateSnapshot {
            castling: CastleRights::ALL,
            en_passant: None,
            hash,
            pawn_hash: 0,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[test]
    fn last_in_first_out() {
        let mut history = History::default();
        history.push(snapshot(1));
        history.push(snapshot(2));
        assert_eq!(history.hashes().collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(history.pop().map(|s| s.hash), Some(2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.pop().map(|s| s.hash), Some(1));
        assert_eq!(history.pop(), None);
    }

    #[test]
    #[should_panic(expected = "history exceeded")]
    fn bounded() {
        let mut history = History::default();
        for ply in 0..=MAX_PLIES as u64 {
            history.push(snapshot(ply));
        }
    }
}
