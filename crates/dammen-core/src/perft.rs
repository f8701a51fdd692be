//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::legal_moves;

/// Count the number of leaf nodes at the given depth, `side` to move.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(board: &Board, side: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        let child = board.make_move(mv);
        nodes += perft(&child, side.flip(), depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(move_text, node_count)` pairs sorted alphabetically.
pub fn divide(board: &Board, side: Color, depth: usize) -> Vec<(String, u64)> {
    let moves = legal_moves(board, side);
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .map(|mv| {
            let child = board.make_move(mv);
            let count = if depth <= 1 {
                1
            } else {
                perft(&child, side.flip(), depth - 1)
            };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_startpos_depth_1() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Color::Red, 1), 9);
        assert_eq!(perft(&board, Color::Black, 1), 9);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Color::Red, 2), 81);
    }

    #[test]
    fn perft_depth_0() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Color::Red, 0), 1);
    }

    #[test]
    fn perft_no_pieces() {
        assert_eq!(perft(&Board::empty(), Color::Red, 3), 0);
    }

    #[test]
    fn divide_startpos_depth_2() {
        let board = Board::starting_position();
        let results = divide(&board, Color::Red, 2);
        assert_eq!(results.len(), 9);
        for (_, count) in &results {
            assert_eq!(*count, 9);
        }
        assert_eq!(results[0].0, "b4-a5");
    }

    #[test]
    fn perft_single_capture_position() {
        // One red man facing one black man: the capture is forced, after
        // which Black has nothing left.
        let board: Board = "........../........../........../........../........../....b...../...r....../........../........../.........."
            .parse()
            .unwrap();
        assert_eq!(perft(&board, Color::Red, 1), 1);
        assert_eq!(perft(&board, Color::Red, 2), 0);
        assert_eq!(divide(&board, Color::Red, 1), vec![("d4xf6".to_string(), 1)]);
    }
}
