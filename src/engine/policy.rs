//! Top-level move selection: pre-search shortcuts, error rolls, full search

use rand::{Rng, prelude::IndexedRandom};

use crate::engine::difficulty::Difficulty;
use crate::engine::eval::CENTER;
use crate::engine::search::{INF, search};
use crate::game::{BoardState, Player};

const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Empty cells where `player` would complete a line by placing now,
/// in ascending order.
///
/// Each candidate is simulated through the full placement transition, so a
/// fading piece that sits on the would-be line is accounted for: if the
/// eviction breaks the line, the cell is not reported. (Scanning raw cells
/// for two-in-a-line would get this wrong whenever the player's queue is
/// full.)
pub fn winning_placements(state: &BoardState, player: Player) -> Vec<usize> {
    let probe = state.with_to_move(player);
    probe
        .empty_positions()
        .into_iter()
        .filter(|&pos| {
            probe
                .place(pos)
                .map(|child| child.winner() == Some(player))
                .unwrap_or(false)
        })
        .collect()
}

/// Select a move for the side on turn.
///
/// Decision ladder, each step short-circuiting on success:
/// 1. opening variety (first or second piece on the board): 40% center,
///    otherwise a random empty corner;
/// 2. blunder roll: a uniformly random empty cell, bypassing all lookahead;
/// 3. immediate win: a placement that completes a line right now;
/// 4. immediate block: occupy the opponent's winning cell, unless the lapse
///    roll fires (Easy only);
/// 5. full search: score every empty cell with [`search`] at the profile's
///    depth and draw uniformly from the tied maxima.
///
/// All randomness comes from the injected `rng`, so behavior is reproducible
/// under a seeded generator.
///
/// # Errors
///
/// Returns [`Error::GameOver`](crate::Error::GameOver) when a line is already
/// complete, and [`Error::NoLegalMove`](crate::Error::NoLegalMove) when no
/// empty cell exists (a caller contract violation; the fading board itself
/// never fills).
pub fn choose_move<R: Rng + ?Sized>(
    state: &BoardState,
    difficulty: Difficulty,
    rng: &mut R,
) -> crate::Result<usize> {
    if state.winner().is_some() {
        return Err(crate::Error::GameOver);
    }
    let legal = state.empty_positions();
    if legal.is_empty() {
        return Err(crate::Error::NoLegalMove);
    }

    let engine = state.to_move;
    let profile = difficulty.profile();

    // 1. Opening variety
    if profile.opening_variety && state.occupied_count() <= 1 {
        if state.is_empty(CENTER) && rng.random_bool(0.4) {
            return Ok(CENTER);
        }
        let open_corners: Vec<usize> = CORNERS
            .iter()
            .copied()
            .filter(|&pos| state.is_empty(pos))
            .collect();
        if let Some(&corner) = open_corners.choose(rng) {
            return Ok(corner);
        }
    }

    // 2. Blunder roll
    if profile.blunder_probability > 0.0 && rng.random_bool(profile.blunder_probability) {
        return Ok(*legal.choose(rng).expect("legal moves are non-empty"));
    }

    // 3. Immediate win
    if let Some(&pos) = winning_placements(state, engine).first() {
        return Ok(pos);
    }

    // 4. Immediate block
    let lapsed = profile.lapse_probability > 0.0 && rng.random_bool(profile.lapse_probability);
    if !lapsed {
        if let Some(&pos) = winning_placements(state, engine.opponent()).first() {
            return Ok(pos);
        }
    }

    // 5. Full search over every candidate, keeping all tied maxima
    let mut best_score = -INF;
    let mut best_moves: Vec<usize> = Vec::new();
    for &pos in &legal {
        let child = state
            .place(pos)
            .expect("placement on a pre-filtered empty cell should not fail");
        let score = search(&child, engine, profile.max_depth, -INF, INF);
        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(pos);
        } else if score == best_score {
            best_moves.push(pos);
        }
    }

    Ok(*best_moves.choose(rng).expect("legal moves are non-empty"))
}
