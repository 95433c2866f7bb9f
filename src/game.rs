//! Fading tic-tac-toe game model

pub mod board;
pub mod lines;
pub mod session;

pub use board::{BoardState, Cell, MoveQueue, Player};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use session::{Game, GameOutcome, Move, ScoreBoard};
