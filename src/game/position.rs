//! Board squares addressed as 1-indexed (row, column) pairs.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use super::types::BOARD_SIZE;

/// One of the nine board squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Position {
    /// Row 1, column 1.
    TopLeft,
    /// Row 1, column 2.
    TopCenter,
    /// Row 1, column 3.
    TopRight,
    /// Row 2, column 1.
    MiddleLeft,
    /// Row 2, column 2.
    Center,
    /// Row 2, column 3.
    MiddleRight,
    /// Row 3, column 1.
    BottomLeft,
    /// Row 3, column 2.
    BottomCenter,
    /// Row 3, column 3.
    BottomRight,
}

impl Position {
    /// Creates a position from 1-indexed board coordinates.
    ///
    /// Returns `None` when either coordinate falls outside `1..=3`.
    pub fn from_coords(row: u8, col: u8) -> Option<Self> {
        let size = BOARD_SIZE as u8;
        if !(1..=size).contains(&row) || !(1..=size).contains(&col) {
            return None;
        }
        Self::from_index((row as usize - 1) * BOARD_SIZE + (col as usize - 1))
    }

    /// 1-indexed row of this position.
    pub fn row(self) -> u8 {
        (self.index() / BOARD_SIZE) as u8 + 1
    }

    /// 1-indexed column of this position.
    pub fn column(self) -> u8 {
        (self.index() % BOARD_SIZE) as u8 + 1
    }

    /// True when the position lies on the top-left to bottom-right diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row() == self.column()
    }

    /// True when the position lies on the top-right to bottom-left diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        (self.row() + self.column()) as usize == BOARD_SIZE + 1
    }

    /// Row-major board index (0-8).
    pub(crate) fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row(), self.column())
    }
}
