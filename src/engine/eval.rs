//! Static positional evaluator for non-terminal search leaves

use crate::game::{Cell, LineAnalyzer, Player, WINNING_LINES};

/// Index of the center cell
pub(crate) const CENTER: usize = 4;

const CENTER_BONUS: i32 = 4;
const OFFENSIVE_THREAT: i32 = 10;
/// Penalty for an opponent threat; at least as large as the offensive bonus
/// so the engine values defense over symmetric attack.
const DEFENSIVE_THREAT: i32 = 12;
const FORK_POTENTIAL: i32 = 2;

/// Score a position from `perspective`'s point of view.
///
/// Static and non-recursive: center occupancy plus, per winning line, a bonus
/// for two-of-ours-plus-empty (an open threat), a larger penalty for the
/// opponent holding the same pattern, and a small bonus for
/// one-of-ours-plus-two-empty (room to fork). Only invoked when the search
/// runs out of depth without reaching a terminal state.
pub fn evaluate(cells: &[Cell; 9], perspective: Player) -> i32 {
    let mut score = 0;

    match cells[CENTER] {
        c if c == perspective.to_cell() => score += CENTER_BONUS,
        Cell::Empty => {}
        _ => score -= CENTER_BONUS,
    }

    for line in &WINNING_LINES {
        let (ours, theirs, empty) = LineAnalyzer::line_counts(cells, line, perspective);
        if ours == 2 && empty == 1 {
            score += OFFENSIVE_THREAT;
        } else if theirs == 2 && empty == 1 {
            score -= DEFENSIVE_THREAT;
        } else if ours == 1 && empty == 2 {
            score += FORK_POTENTIAL;
        }
    }

    score
}
