//! Error types for the fadetac crate

use thiserror::Error;

use crate::game::Player;

/// Main error type for the fadetac crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid move: position {position} is already occupied")]
    CellOccupied { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("no legal move available")]
    NoLegalMove,

    #[error("queue for {player} has {len} entries (at most 3 allowed)")]
    QueueTooLong { player: Player, len: usize },

    #[error("position {position} appears more than once in the queue for {player}")]
    DuplicateQueueEntry { player: Player, position: usize },

    #[error("queue for {player} lists position {position}, but that cell does not hold {player}")]
    QueueCellMismatch { player: Player, position: usize },

    #[error("cell {position} holds {player} but is missing from that side's queue")]
    StrayMark { player: Player, position: usize },

    #[error("invalid difficulty '{input}'. Expected one of: {expected}")]
    ParseDifficulty { input: String, expected: String },

    #[error("invalid player '{input}' (expected 'X' or 'O')")]
    ParsePlayer { input: String },

    #[error("invalid board encoding '{encoding}': {reason}")]
    InvalidEncoding { encoding: String, reason: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
