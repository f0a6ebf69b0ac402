//! Console interaction: input parsing and the interactive session loop.

mod input;
mod session;

pub use input::{parse_move, parse_replay, InputError};
pub use session::Session;
