//! Parsing of free-form text typed at the prompts.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::game::{Position, BOARD_SIZE};

/// Error raised when a line of input is not a usable move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// The input was not two comma-separated integers.
    #[display("Input must be two numbers in format row,col e.g. 1,2")]
    Format,

    /// A coordinate fell outside the board.
    #[display("Input is a number between 1 and {} (inclusive)", BOARD_SIZE)]
    Range,
}

/// Parses a move coordinate such as `(2,3)` or `2,3`.
///
/// Leading and trailing parentheses are stripped before parsing; the
/// remainder must be exactly two comma-separated integers, each in
/// `1..=3`. Whitespace around the line and around each number is
/// tolerated.
///
/// # Errors
///
/// [`InputError::Format`] when the input is not two parsable integers,
/// [`InputError::Range`] when either coordinate is off the board.
#[instrument]
pub fn parse_move(raw: &str) -> Result<Position, InputError> {
    let body = raw.trim().trim_matches(|c| c == '(' || c == ')');
    let mut parts = body.split(',').map(str::trim);
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Format);
    };
    let row: i64 = row.parse().map_err(|_| InputError::Format)?;
    let col: i64 = col.parse().map_err(|_| InputError::Format)?;
    let (Ok(row), Ok(col)) = (u8::try_from(row), u8::try_from(col)) else {
        return Err(InputError::Range);
    };
    Position::from_coords(row, col).ok_or(InputError::Range)
}

/// Interprets a replay-prompt answer.
///
/// `y` and `n` (case-insensitive) answer the prompt; anything else
/// returns `None` and the caller asks again.
#[instrument]
pub fn parse_replay(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_coordinates() {
        assert_eq!(parse_move("2,2"), Ok(Position::Center));
        assert_eq!(parse_move("1,3"), Ok(Position::TopRight));
    }

    #[test]
    fn parses_parenthesised_coordinates() {
        assert_eq!(parse_move("(2,2)"), Ok(Position::Center));
        assert_eq!(parse_move("((3,1))"), Ok(Position::BottomLeft));
        assert_eq!(parse_move(" (1,1) "), Ok(Position::TopLeft));
    }

    #[test]
    fn tolerates_inner_whitespace() {
        assert_eq!(parse_move("1, 2"), Ok(Position::TopCenter));
        assert_eq!(parse_move(" 3 , 3 "), Ok(Position::BottomRight));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(parse_move("a,b"), Err(InputError::Format));
        assert_eq!(parse_move(""), Err(InputError::Format));
        assert_eq!(parse_move("1"), Err(InputError::Format));
        assert_eq!(parse_move("1,"), Err(InputError::Format));
        assert_eq!(parse_move("1,2,3"), Err(InputError::Format));
        assert_eq!(parse_move("one,two"), Err(InputError::Format));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert_eq!(parse_move("5,1"), Err(InputError::Range));
        assert_eq!(parse_move("0,2"), Err(InputError::Range));
        assert_eq!(parse_move("2,4"), Err(InputError::Range));
        assert_eq!(parse_move("-1,2"), Err(InputError::Range));
    }

    #[test]
    fn replay_answers() {
        assert_eq!(parse_replay("y"), Some(true));
        assert_eq!(parse_replay("Y\n"), Some(true));
        assert_eq!(parse_replay("n"), Some(false));
        assert_eq!(parse_replay("N"), Some(false));
        assert_eq!(parse_replay("yes"), None);
        assert_eq!(parse_replay(""), None);
    }
}
