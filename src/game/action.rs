//! First-class move events for the game engine.
//!
//! Moves are domain events, not side effects: they carry the player's
//! intent and can be validated, logged, and replayed independently of
//! the state they apply to.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::types::Player;

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position receiving the player's mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error raised when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    Occupied(Position),

    /// The mover is not the player to move.
    #[display("it is not player {}'s turn", _0)]
    WrongPlayer(Player),

    /// The round has already ended.
    #[display("the round is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
