//! Winning line analysis

use super::{Cell, Player};

/// Winning line indices on the 3x3 board.
///
/// The scan order below is part of the contract: should two lines ever be
/// complete at once (possible in principle because a fade can reopen and
/// refill cells), the first matching line in this order decides the winner.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The mark holding a completed line, scanning in fixed order
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        for line in &WINNING_LINES {
            let first = cells[line[0]];
            if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
                return first.to_player();
            }
        }
        None
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Count (ours, theirs, empty) cells of a line from one player's
    /// perspective
    pub fn line_counts(cells: &[Cell; 9], line: &[usize; 3], player: Player) -> (u8, u8, u8) {
        let mine = player.to_cell();
        let mut counts = (0, 0, 0);
        for &idx in line {
            match cells[idx] {
                Cell::Empty => counts.2 += 1,
                c if c == mine => counts.0 += 1,
                _ => counts.1 += 1,
            }
        }
        counts
    }
}
