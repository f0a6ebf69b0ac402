//! Naughts and crosses - two-player console tic-tac-toe.
//!
//! # Architecture
//!
//! - **game**: board, moves, win/draw rules, and the round engine
//! - **console**: coordinate parsing and the prompt/replay loop over any
//!   reader and writer
//! - **cli**: the clap-derived command-line surface
//!
//! # Example
//!
//! ```
//! use naughts_and_crosses::{Game, Move, Player, Position};
//!
//! let game = Game::new();
//! let game = game.play(Move::new(Player::X, Position::Center))?;
//! assert_eq!(game.current_player(), Player::O);
//! # Ok::<(), naughts_and_crosses::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod console;
mod game;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - console interaction
pub use console::{parse_move, parse_replay, InputError, Session};

// Crate-level exports - game types
pub use game::{
    check_winner, is_full, Board, Cell, Game, Move, MoveError, Player, Position, Status,
    BOARD_SIZE,
};
