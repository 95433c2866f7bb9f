//! Difficulty ladder check: every tier against Hardest
//!
//! Plays a small seeded match between each difficulty tier (as X) and the
//! Hardest tier (as O) and prints the resulting score lines. Higher tiers
//! should lose less often and leave more games unresolved at the move cap.
//!
//! Run with: `cargo run --example difficulty_ladder`

use fadetac::{Difficulty, Game, Player, Result, ScoreBoard, choose_move};
use rand::{SeedableRng, rngs::StdRng};

const GAMES: usize = 30;
const MOVE_CAP: usize = 60;
const SEED: u64 = 1;

fn play_match(x: Difficulty, o: Difficulty, rng: &mut StdRng) -> Result<ScoreBoard> {
    let mut score = ScoreBoard::new();

    for _ in 0..GAMES {
        let mut game = Game::new();
        while !game.is_over() {
            if game.moves.len() >= MOVE_CAP {
                game.abandon();
                break;
            }
            let difficulty = match game.state().to_move {
                Player::X => x,
                Player::O => o,
            };
            let pos = choose_move(game.state(), difficulty, rng)?;
            game.play(pos)?;
        }
        if let Some(outcome) = game.outcome {
            score.record(outcome);
        }
    }

    Ok(score)
}

fn main() -> Result<()> {
    println!("difficulty ladder: {GAMES} games per pairing, X tier vs Hardest O, seed {SEED}\n");

    let mut rng = StdRng::seed_from_u64(SEED);
    for tier in Difficulty::ALL {
        let score = play_match(tier, Difficulty::Hardest, &mut rng)?;
        println!(
            "{:>7} (X) vs hardest (O): X {:2} | O {:2} | unresolved {:2}",
            tier.name(),
            score.x_wins,
            score.o_wins,
            score.unresolved
        );
    }

    println!("\nhigher X tiers should concede fewer O wins.");
    Ok(())
}
