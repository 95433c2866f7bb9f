//! Depth-limited minimax search with alpha-beta pruning
//!
//! Every recursive call operates on its own copied [`BoardState`], so there
//! is no undo logic and sibling branches share no mutable state. Terminal
//! scores are biased by remaining depth: a win found sooner outscores the
//! same win found later, and a loss further in the future outscores an
//! immediate one. The bias matters in this variant because a completed line
//! can dissolve once the line-completing piece fades out of its owner's
//! queue, so delaying a loss may escape it entirely.

use crate::engine::eval::evaluate;
use crate::game::{BoardState, Player};

/// Base score for a terminal win/loss; the remaining depth is added on top.
/// The magnitude is a tunable tie-breaker, not a contract, as long as it
/// dwarfs every heuristic score.
pub const WIN_SCORE: i32 = 100;

/// Alpha-beta bounds outside any reachable score
pub(crate) const INF: i32 = i32::MAX;

/// Empty cells in center-first preference order. Trying strong cells early
/// tightens the alpha-beta window sooner, which keeps the deepest profiles
/// within interactive time.
const ORDERED_CELLS: [usize; 9] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

/// Score `state` from `engine`'s point of view, looking `depth` plies ahead.
///
/// The side to move is `state.to_move`; the node maximizes when that side is
/// the engine and minimizes otherwise. Prunes a branch as soon as
/// `beta <= alpha`.
pub fn search(state: &BoardState, engine: Player, depth: u8, mut alpha: i32, mut beta: i32) -> i32 {
    if let Some(winner) = state.winner() {
        let bias = WIN_SCORE + i32::from(depth);
        return if winner == engine { bias } else { -bias };
    }

    if depth == 0 {
        return evaluate(&state.cells, engine);
    }

    let maximizing = state.to_move == engine;
    let mut best = if maximizing { -INF } else { INF };

    for pos in ORDERED_CELLS {
        if !state.is_empty(pos) {
            continue;
        }
        let child = state
            .place(pos)
            .expect("placement on a pre-filtered empty cell should not fail");
        let score = search(&child, engine, depth - 1, alpha, beta);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}
