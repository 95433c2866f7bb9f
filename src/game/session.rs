//! Game session management: move history, outcome, running score

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game.
///
/// There is no draw-by-full-board in the fading variant; a game that reaches
/// a caller-imposed move cap is abandoned with `Unresolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Unresolved,
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: BoardState,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
    state: BoardState,
}

impl Game {
    /// Create a new game from the standard initial position (X first)
    pub fn new() -> Self {
        Self::from_initial(BoardState::new())
    }

    /// Create a new game with a chosen first player
    pub fn new_with_first_player(first_player: Player) -> Self {
        Self::from_initial(BoardState::new_with_player(first_player))
    }

    /// Start a game from an arbitrary (already validated) position
    pub fn from_initial(initial: BoardState) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: initial.winner().map(GameOutcome::Win),
            state: initial,
        }
    }

    /// Play a move for the side on turn, applying the fade rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`](crate::Error::GameOver) once the game has
    /// an outcome, or a placement error for an occupied/out-of-range cell.
    pub fn play(&mut self, position: usize) -> crate::Result<()> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let mover = self.state.to_move;
        let next = self.state.place(position)?;

        self.moves.push(Move {
            position,
            player: mover,
        });
        if let Some(winner) = next.winner() {
            self.outcome = Some(GameOutcome::Win(winner));
        }
        self.state = next;
        Ok(())
    }

    /// Mark the game abandoned (e.g. a self-play move cap was reached)
    pub fn abandon(&mut self) {
        if self.outcome.is_none() {
            self.outcome = Some(GameOutcome::Unresolved);
        }
    }

    /// Current board state
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Win(player)) => Some(player),
            _ => None,
        }
    }

    /// Replay the move history from the initial position.
    ///
    /// The placement transition is deterministic, so this always reproduces
    /// the current state; it exists for history inspection and as a
    /// consistency check in tests.
    ///
    /// # Errors
    ///
    /// Returns error if the recorded history is invalid for the initial
    /// position, which indicates corrupted game data.
    pub fn replay(&self) -> crate::Result<Vec<BoardState>> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = self.initial;
        states.push(state);
        for m in &self.moves {
            state = state.place(m.position)?;
            states.push(state);
        }
        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Running win tally across games. The engine itself is stateless between
/// calls; the score lives with the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub x_wins: usize,
    pub o_wins: usize,
    pub unresolved: usize,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Unresolved => self.unresolved += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.unresolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_history_and_outcome() {
        let mut game = Game::new();
        // X wins on the top row before any piece fades
        for pos in [0, 3, 1, 4, 2] {
            game.play(pos).unwrap();
        }

        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Player::X));
        assert_eq!(game.moves.len(), 5);
        assert_eq!(game.moves[0].player, Player::X);
        assert_eq!(game.moves[1].player, Player::O);

        let err = game.play(5);
        assert!(matches!(err, Err(crate::Error::GameOver)));
    }

    #[test]
    fn test_win_after_fade() {
        let mut game = Game::new();
        // X: 0, 4, 2 then 6 (0 fades). O plays non-blocking cells. X's final
        // pieces 4, 2, 6 complete the anti-diagonal.
        for pos in [0, 1, 4, 3, 2, 5] {
            game.play(pos).unwrap();
        }
        assert!(!game.is_over());

        game.play(6).unwrap();
        assert_eq!(game.winner(), Some(Player::X));
        assert!(game.state().is_empty(0));
    }

    #[test]
    fn test_replay_reproduces_state() {
        let mut game = Game::new();
        for pos in [0, 1, 4, 3, 2, 5, 6] {
            game.play(pos).unwrap();
        }

        let states = game.replay().unwrap();
        assert_eq!(states.len(), 8);
        assert_eq!(states.last().unwrap(), game.state());
    }

    #[test]
    fn test_scoreboard_tally() {
        let mut score = ScoreBoard::new();
        score.record(GameOutcome::Win(Player::X));
        score.record(GameOutcome::Win(Player::O));
        score.record(GameOutcome::Win(Player::O));
        score.record(GameOutcome::Unresolved);

        assert_eq!(score.x_wins, 1);
        assert_eq!(score.o_wins, 2);
        assert_eq!(score.unresolved, 1);
        assert_eq!(score.games(), 4);
    }
}
