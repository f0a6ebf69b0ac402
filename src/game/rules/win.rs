//! Win detection over the lines through the most recent move.

use tracing::instrument;

use super::super::position::Position;
use super::super::types::{Board, Cell, Player};

const ROWS: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
];

const COLUMNS: [[Position; 3]; 3] = [
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
];

const MAIN_DIAGONAL: [Position; 3] = [Position::TopLeft, Position::Center, Position::BottomRight];
const ANTI_DIAGONAL: [Position; 3] = [Position::TopRight, Position::Center, Position::BottomLeft];

/// Checks whether the move just played at `last` completed a line.
///
/// Only the row and column through `last` are scanned, plus a diagonal
/// when `last` lies on it; no other line can have changed since the
/// previous move was checked.
///
/// Returns `Some(player)` when the player holds three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, last: Position) -> Option<Player> {
    if let Some(player) = line_owner(board, ROWS[last.row() as usize - 1]) {
        return Some(player);
    }
    if let Some(player) = line_owner(board, COLUMNS[last.column() as usize - 1]) {
        return Some(player);
    }
    if last.on_main_diagonal()
        && let Some(player) = line_owner(board, MAIN_DIAGONAL)
    {
        return Some(player);
    }
    if last.on_anti_diagonal()
        && let Some(player) = line_owner(board, ANTI_DIAGONAL)
    {
        return Some(player);
    }
    None
}

/// Returns the player holding all three cells of `line`, if any.
fn line_owner(board: &Board, line: [Position; 3]) -> Option<Player> {
    let [a, b, c] = line;
    let cell = board.get(a);
    if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
        match cell {
            Cell::Occupied(player) => Some(player),
            Cell::Empty => None,
        }
    } else {
        None
    }
}
