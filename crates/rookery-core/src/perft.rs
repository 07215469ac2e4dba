//! Perft (performance test) for move generation correctness verification.

use tracing::debug;

use crate::chess_move::Move;
use crate::movegen::generate_legal_moves;
use crate::position::Position;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(position: &mut Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(position);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for &mv in &moves {
        position.make_move(mv);
        nodes += perft(position, depth - 1);
        position.undo_move(mv);
    }
    nodes
}

/// Per-root-move leaf counts, sorted by coordinate notation.
pub fn divide(position: &mut Position, depth: usize) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let moves = generate_legal_moves(position);
    let mut results: Vec<(Move, u64)> = moves
        .iter()
        .map(|&mv| {
            position.make_move(mv);
            let nodes = perft(position, depth - 1);
            position.undo_move(mv);
            debug!(%mv, nodes, "divide");
            (mv, nodes)
        })
        .collect();
    results.sort_by_cached_key(|(mv, _)| mv.to_string());
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    // --- Position 1: Starting position ---

    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&mut Position::starting_position(), 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&mut Position::starting_position(), 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&mut Position::starting_position(), 3), 8_902);
    }

    #[test]
    fn perft_startpos_depth_4() {
        assert_eq!(perft(&mut Position::starting_position(), 4), 197_281);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_5() {
        assert_eq!(perft(&mut Position::starting_position(), 5), 4_865_609);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_6() {
        assert_eq!(perft(&mut Position::starting_position(), 6), 119_060_324);
    }

    // --- Position 2: Kiwipete ---

    fn kiwipete() -> Position {
        load("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
    }

    #[test]
    fn perft_kiwipete_depth_1() {
        assert_eq!(perft(&mut kiwipete(), 1), 48);
    }

    #[test]
    fn perft_kiwipete_depth_2() {
        assert_eq!(perft(&mut kiwipete(), 2), 2_039);
    }

    #[test]
    fn perft_kiwipete_depth_3() {
        assert_eq!(perft(&mut kiwipete(), 3), 97_862);
    }

    #[test]
    #[ignore] // slow
    fn perft_kiwipete_depth_4() {
        assert_eq!(perft(&mut kiwipete(), 4), 4_085_603);
    }

    // --- Position 3 ---

    fn position3() -> Position {
        load("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1")
    }

    #[test]
    fn perft_pos3_depth_1() {
        assert_eq!(perft(&mut position3(), 1), 14);
    }

    #[test]
    fn perft_pos3_depth_2() {
        assert_eq!(perft(&mut position3(), 2), 191);
    }

    #[test]
    fn perft_pos3_depth_3() {
        assert_eq!(perft(&mut position3(), 3), 2_812);
    }

    #[test]
    fn perft_pos3_depth_4() {
        assert_eq!(perft(&mut position3(), 4), 43_238);
    }

    #[test]
    #[ignore] // slow
    fn perft_pos3_depth_5() {
        assert_eq!(perft(&mut position3(), 5), 674_624);
    }

    // --- Position 4 ---

    fn position4() -> Position {
        load("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1")
    }

    #[test]
    fn perft_pos4_depth_1() {
        assert_eq!(perft(&mut position4(), 1), 6);
    }

    #[test]
    fn perft_pos4_depth_2() {
        assert_eq!(perft(&mut position4(), 2), 264);
    }

    #[test]
    fn perft_pos4_depth_3() {
        assert_eq!(perft(&mut position4(), 3), 9_467);
    }

    #[test]
    #[ignore] // slow
    fn perft_pos4_depth_4() {
        assert_eq!(perft(&mut position4(), 4), 422_333);
    }

    // --- Position 5 ---

    fn position5() -> Position {
        load("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8")
    }

    #[test]
    fn perft_pos5_depth_1() {
        assert_eq!(perft(&mut position5(), 1), 44);
    }

    #[test]
    fn perft_pos5_depth_2() {
        assert_eq!(perft(&mut position5(), 2), 1_486);
    }

    #[test]
    fn perft_pos5_depth_3() {
        assert_eq!(perft(&mut position5(), 3), 62_379);
    }

    #[test]
    #[ignore] // slow
    fn perft_pos5_depth_4() {
        assert_eq!(perft(&mut position5(), 4), 2_103_487);
    }

    #[test]
    fn perft_leaves_position_untouched() {
        let mut position = kiwipete();
        let before = position.clone();
        perft(&mut position, 3);
        assert_eq!(position, before);
        assert_eq!(position.ply(), 0);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut position = kiwipete();
        let results = divide(&mut position, 2);
        assert_eq!(results.len(), 48);
        assert_eq!(results.iter().map(|(_, n)| n).sum::<u64>(), 2_039);
        let names: Vec<String> = results.iter().map(|(mv, _)| mv.to_string()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn depth_0() {
        assert_eq!(perft(&mut Position::starting_position(), 0), 1);
        assert!(divide(&mut Position::starting_position(), 0).is_empty());
    }
}
