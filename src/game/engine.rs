//! Round engine: applies validated moves and tracks the round status.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::action::{Move, MoveError};
use super::rules;
use super::types::{Board, Cell, Player};

/// Status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// The round is ongoing.
    InProgress,
    /// The round ended with a winner.
    Won(Player),
    /// The round ended with a full board and no winner.
    Draw,
}

impl Status {
    /// Returns the winning player, if the round has one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// True once the round has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// A single round, from empty board to win or draw.
///
/// Applying a move never mutates the receiver: [`Game::play`] returns
/// the successor state and the caller replaces its own. A rejected move
/// therefore leaves the round exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: Status,
    history: Vec<Move>,
}

impl Game {
    /// Creates a round with an empty board. X moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: Status::InProgress,
            history: Vec::new(),
        }
    }

    /// Applies a move and returns the successor state.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] when the round has already ended.
    /// - [`MoveError::WrongPlayer`] when the mover is not the player to
    ///   move.
    /// - [`MoveError::Occupied`] when the target cell holds a mark.
    #[instrument(skip(self, mov), fields(player = %mov.player, position = %mov.position))]
    pub fn play(&self, mov: Move) -> Result<Game, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if mov.player != self.to_move {
            return Err(MoveError::WrongPlayer(mov.player));
        }
        if !self.board.is_empty(mov.position) {
            return Err(MoveError::Occupied(mov.position));
        }

        let mut next = self.clone();
        next.board.set(mov.position, Cell::Occupied(mov.player));
        next.history.push(mov);

        if let Some(winner) = rules::check_winner(&next.board, mov.position) {
            next.status = Status::Won(winner);
        } else if rules::is_full(&next.board) {
            next.status = Status::Draw;
        } else {
            next.to_move = next.to_move.opponent();
        }

        debug_assert!(next.marks_balanced(), "mark counts out of balance");
        debug_assert!(
            next.history_matches_board(),
            "history inconsistent with board"
        );
        debug!(status = ?next.status, moves = next.move_count(), "move applied");
        Ok(next)
    }

    /// Re-applies a recorded move sequence from the initial state.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Game, MoveError> {
        let mut game = Game::new();
        for mov in moves {
            game = game.play(*mov)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Returns the round status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the moves applied so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the number of moves applied so far.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// X and O mark counts never differ by more than one.
    fn marks_balanced(&self) -> bool {
        let x = self.count_marks(Player::X);
        let o = self.count_marks(Player::O);
        x.abs_diff(o) <= 1
    }

    /// Every applied move is on the board and vice versa.
    fn history_matches_board(&self) -> bool {
        let filled = self
            .board
            .cells()
            .iter()
            .filter(|cell| **cell != Cell::Empty)
            .count();
        filled == self.history.len()
    }

    fn count_marks(&self, player: Player) -> usize {
        self.board
            .cells()
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
