//! Draw detection.

use strum::IntoEnumIterator;
use tracing::instrument;

use super::super::position::Position;
use super::super::types::Board;

/// Checks whether every cell on the board holds a mark.
///
/// A full board with no winner ends the round in a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    Position::iter().all(|position| !board.is_empty(position))
}
