//! "Perft": count the leaves of the move tree at a fixed depth.
//!
//! Used to verify move generation against known counts and to benchmark
//! the engine. A forced pass is not a ply here (the board hands the turn
//! back on its own), and a finished game counts as a single leaf.
//!
//! From the 8x8 opening no pass can occur in the first eight plies, so
//! those counts match the published Othello tables:
//! 4, 12, 56, 244, 1396, 8200, 55092, 390216.

use rustc_hash::FxHashMap;

use crate::board::Board;
use crate::core::ConfigError;

/// Leaves below `board` at `depth` plies.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 || board.is_game_over() {
        return 1;
    }

    board
        .legal_moves()
        .iter()
        .filter_map(|&square| {
            let mut child = board.copy();
            child.play(square).ok()?;
            Some(perft(&child, depth - 1))
        })
        .sum()
}

/// Same count as [`perft`], sharing work between transpositions.
pub fn perft_memoized(board: &Board, depth: u32) -> u64 {
    let mut memo = FxHashMap::default();
    perft_with(board, depth, &mut memo)
}

fn perft_with(board: &Board, depth: u32, memo: &mut FxHashMap<(Board, u32), u64>) -> u64 {
    if depth == 0 || board.is_game_over() {
        return 1;
    }
    if let Some(&count) = memo.get(&(board.clone(), depth)) {
        return count;
    }

    let mut count = 0;
    for &square in board.legal_moves() {
        let mut child = board.copy();
        if child.play(square).is_ok() {
            count += perft_with(&child, depth - 1, memo);
        }
    }

    memo.insert((board.clone(), depth), count);
    count
}

/// Perft from the opening of a `size`x`size` board.
pub fn run_perft(size: usize, depth: u32) -> Result<u64, ConfigError> {
    Ok(perft(&Board::new(size)?, depth))
}
