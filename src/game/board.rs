//! Board state representation and the fade placement transition

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the 3x3 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

impl std::str::FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            _ => Err(crate::Error::ParsePlayer {
                input: s.to_string(),
            }),
        }
    }
}

/// Bounded FIFO of the cell indices one side currently occupies.
///
/// Insertion order is placement order; the front entry is the oldest piece
/// and the one that fades when a fourth piece is placed. Stored inline so the
/// whole queue is `Copy` and can be duplicated per search node. Serialized
/// only as part of a [`BoardState`], which validates on deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveQueue {
    slots: [u8; MoveQueue::CAPACITY],
    len: u8,
}

impl MoveQueue {
    /// Maximum pieces one side may have on the board
    pub const CAPACITY: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from placement-ordered positions.
    ///
    /// # Errors
    ///
    /// Returns error if more than [`CAPACITY`](Self::CAPACITY) positions are
    /// given, a position is out of range, or a position repeats.
    pub fn from_positions(positions: &[usize], player: Player) -> crate::Result<Self> {
        if positions.len() > Self::CAPACITY {
            return Err(crate::Error::QueueTooLong {
                player,
                len: positions.len(),
            });
        }

        let mut queue = Self::new();
        for &pos in positions {
            if pos >= 9 {
                return Err(crate::Error::InvalidPosition { position: pos });
            }
            if queue.contains(pos) {
                return Err(crate::Error::DuplicateQueueEntry {
                    player,
                    position: pos,
                });
            }
            queue.slots[queue.len as usize] = pos as u8;
            queue.len += 1;
        }

        Ok(queue)
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == Self::CAPACITY
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.iter().any(|p| p == pos)
    }

    /// The oldest surviving position (the next to fade once the queue is full)
    pub fn oldest(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[0] as usize)
        }
    }

    /// Positions in placement order, oldest first
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots[..self.len()].iter().map(|&p| p as usize)
    }

    pub fn positions(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Push a position, evicting and returning the oldest one when full.
    ///
    /// Only the placement transition calls this; the queue is never mutated
    /// through any other path.
    pub(crate) fn push_evicting(&mut self, pos: usize) -> Option<usize> {
        let evicted = if self.is_full() {
            let oldest = self.slots[0];
            self.slots.copy_within(1.., 0);
            self.len -= 1;
            Some(oldest as usize)
        } else {
            None
        };

        self.slots[self.len as usize] = pos as u8;
        self.len += 1;
        evicted
    }
}

/// Complete board state: cells, both piece queues, and whose turn it is.
///
/// This type implements `Copy` (18 bytes), so the search duplicates it per
/// node instead of undoing moves.
///
/// Serde goes through [`BoardSnapshot`], so deserializing an untrusted
/// snapshot runs the same invariant validation as
/// [`from_parts`](Self::from_parts) and surfaces the typed errors instead of
/// admitting an inconsistent board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot", into = "BoardSnapshot")]
pub struct BoardState {
    pub cells: [Cell; 9],
    queues: [MoveQueue; 2],
    pub to_move: Player,
}

/// Serde mirror of [`BoardState`] carrying the queues as plain position
/// lists in placement order.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoardSnapshot {
    cells: [Cell; 9],
    x_queue: Vec<usize>,
    o_queue: Vec<usize>,
    to_move: Player,
}

impl From<BoardState> for BoardSnapshot {
    fn from(state: BoardState) -> Self {
        BoardSnapshot {
            cells: state.cells,
            x_queue: state.queues[0].positions(),
            o_queue: state.queues[1].positions(),
            to_move: state.to_move,
        }
    }
}

impl TryFrom<BoardSnapshot> for BoardState {
    type Error = crate::Error;

    fn try_from(snapshot: BoardSnapshot) -> crate::Result<Self> {
        BoardState::from_parts(
            snapshot.cells,
            &snapshot.x_queue,
            &snapshot.o_queue,
            snapshot.to_move,
        )
    }
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first
    pub fn new_with_player(first_player: Player) -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            queues: [MoveQueue::new(); 2],
            to_move: first_player,
        }
    }

    /// Assemble a board from raw cells plus both placement-ordered queues.
    ///
    /// This is the entry point for callers that keep their own board
    /// representation (a UI layer, a test fixture) and hand the engine a
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns error unless the board invariant holds: every non-empty cell
    /// appears in exactly its own side's queue, every queued position holds
    /// that side's mark, and neither queue exceeds three entries or repeats a
    /// position.
    pub fn from_parts(
        cells: [Cell; 9],
        x_queue: &[usize],
        o_queue: &[usize],
        to_move: Player,
    ) -> crate::Result<Self> {
        let queues = [
            MoveQueue::from_positions(x_queue, Player::X)?,
            MoveQueue::from_positions(o_queue, Player::O)?,
        ];

        for player in [Player::X, Player::O] {
            for pos in queues[player.index()].iter() {
                if cells[pos] != player.to_cell() {
                    return Err(crate::Error::QueueCellMismatch {
                        player,
                        position: pos,
                    });
                }
            }
        }

        for (pos, cell) in cells.iter().enumerate() {
            if let Some(player) = cell.to_player() {
                if !queues[player.index()].contains(pos) {
                    return Err(crate::Error::StrayMark {
                        player,
                        position: pos,
                    });
                }
            }
        }

        Ok(BoardState {
            cells,
            queues,
            to_move,
        })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.queues[0].len() + self.queues[1].len()
    }

    /// The piece queue for one side, oldest placement first
    pub fn queue(&self, player: Player) -> &MoveQueue {
        &self.queues[player.index()]
    }

    /// The cell that disappears when `player` places their next piece, if
    /// their queue is already full. UI layers use this to mark the fading
    /// piece.
    pub fn fading_cell(&self, player: Player) -> Option<usize> {
        let queue = self.queue(player);
        if queue.is_full() { queue.oldest() } else { None }
    }

    /// Same position with a different side to move.
    ///
    /// Used to probe hypothetical placements for the side that is not on
    /// turn, e.g. when looking for opponent threats to block.
    #[must_use = "with_to_move returns a new board state; the original is unchanged"]
    pub fn with_to_move(&self, player: Player) -> Self {
        let mut state = *self;
        state.to_move = player;
        state
    }

    /// Apply the placement transition for the side to move and return the
    /// resulting board.
    ///
    /// If the mover already has three pieces, their oldest piece fades: it is
    /// popped from the front of the queue and its cell reverts to empty
    /// before the new mark is set. This is the only way cells change state.
    ///
    /// # Errors
    ///
    /// Returns error if `pos` is out of range or already occupied.
    #[must_use = "place returns a new board state; the original is unchanged"]
    pub fn place(&self, pos: usize) -> crate::Result<BoardState> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::CellOccupied { position: pos });
        }

        let mover = self.to_move;
        let mut next = *self;
        if let Some(faded) = next.queues[mover.index()].push_evicting(pos) {
            next.cells[faded] = Cell::Empty;
        }
        next.cells[pos] = mover.to_cell();
        next.to_move = mover.opponent();
        Ok(next)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        super::lines::LineAnalyzer::winner(&self.cells)
    }

    /// Check if the game is over.
    ///
    /// Unlike the classic game there is no draw by exhaustion: at most six
    /// cells are ever occupied, so the board never fills. Terminal means a
    /// completed line.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Encode the full state as a string key, e.g. `"XX.O....._O|x:0,1|o:3"`.
    ///
    /// The suffix carries both queues in placement order so the encoding
    /// round-trips through [`from_encoding`](Self::from_encoding).
    pub fn encode(&self) -> String {
        let cells: String = self.cells.iter().map(|&c| c.to_char()).collect();
        let fmt_queue = |q: &MoveQueue| {
            q.iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        format!(
            "{}_{}|x:{}|o:{}",
            cells,
            self.to_move,
            fmt_queue(&self.queues[0]),
            fmt_queue(&self.queues[1]),
        )
    }

    /// Parse a state produced by [`encode`](Self::encode).
    ///
    /// # Errors
    ///
    /// Returns error if the layout does not match, a cell character or queue
    /// entry is invalid, or the decoded parts violate the board invariant.
    pub fn from_encoding(encoding: &str) -> crate::Result<Self> {
        let invalid = |reason: &str| crate::Error::InvalidEncoding {
            encoding: encoding.to_string(),
            reason: reason.to_string(),
        };

        let mut sections = encoding.split('|');
        let head = sections.next().ok_or_else(|| invalid("missing board"))?;
        let x_part = sections
            .next()
            .and_then(|s| s.strip_prefix("x:"))
            .ok_or_else(|| invalid("missing 'x:' queue section"))?;
        let o_part = sections
            .next()
            .and_then(|s| s.strip_prefix("o:"))
            .ok_or_else(|| invalid("missing 'o:' queue section"))?;
        if sections.next().is_some() {
            return Err(invalid("trailing sections"));
        }

        let (board_part, player_part) = head
            .split_once('_')
            .ok_or_else(|| invalid("missing '_' player separator"))?;
        if board_part.len() != 9 {
            return Err(invalid("board part must be exactly 9 characters"));
        }

        let mut cells = [Cell::Empty; 9];
        for (i, c) in board_part.chars().enumerate() {
            cells[i] =
                Cell::from_char(c).ok_or_else(|| invalid(&format!("invalid cell '{c}'")))?;
        }
        let to_move: Player = player_part
            .parse()
            .map_err(|_| invalid("player must be 'X' or 'O'"))?;

        let parse_queue = |part: &str| -> crate::Result<Vec<usize>> {
            if part.is_empty() {
                return Ok(Vec::new());
            }
            part.split(',')
                .map(|entry| {
                    entry
                        .parse::<usize>()
                        .map_err(|_| invalid(&format!("invalid queue entry '{entry}'")))
                })
                .collect()
        };

        Self::from_parts(cells, &parse_queue(x_part)?, &parse_queue(o_part)?, to_move)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
