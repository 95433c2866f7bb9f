//! Move-selection engine: evaluator, adversarial search, difficulty policy

pub mod difficulty;
pub mod eval;
pub mod policy;
pub mod search;

pub use difficulty::{Difficulty, DifficultyProfile};
pub use eval::evaluate;
pub use policy::choose_move;
pub use search::{WIN_SCORE, search};
