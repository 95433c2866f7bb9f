//! Decision engine for fading tic-tac-toe
//!
//! Fading tic-tac-toe is the 3x3 game with one twist: each side may have at
//! most three pieces on the board. Placing a fourth piece removes that side's
//! oldest surviving piece, so the board keeps shifting and the game never
//! fills up.
//!
//! This crate provides:
//! - Board state model with the bounded FIFO piece queues and the fade rule
//! - Winning-line detection and a static positional evaluator
//! - Depth-limited minimax search with alpha-beta pruning
//! - A difficulty policy (search depth, blunder/lapse rolls, opening variety)
//!   that selects the engine's move
//! - A game session layer with move history and score tallying

pub mod engine;
pub mod error;
pub mod game;

pub use engine::{Difficulty, DifficultyProfile, choose_move, search};
pub use error::{Error, Result};
pub use game::{BoardState, Cell, Game, GameOutcome, Move, MoveQueue, Player, ScoreBoard};
