//! The interactive session: prompts, rendering, and the replay loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, instrument};

use crate::game::{Game, Move, MoveError, Player, Position, Status};

use super::input;

/// A console session over any line-oriented reader and writer.
///
/// The session holds no game state between rounds; every round starts
/// from a fresh [`Game`]. Reads block until a line arrives, and end of
/// input at any prompt ends the session cleanly.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading moves from `input` and writing to
    /// `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Plays rounds until a player declines a replay or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "NAUGHTS AND CROSSES")?;
            writeln!(self.output)?;
            writeln!(self.output, "NEW GAME")?;

            let Some(game) = self.play_round()? else {
                return Ok(());
            };
            match game.status() {
                Status::Won(player) => writeln!(self.output, "The winner is: {player}")?,
                Status::Draw => writeln!(self.output, "No winner.")?,
                // play_round only returns once the round has ended
                Status::InProgress => {}
            }

            if !self.prompt_replay()? {
                writeln!(self.output, "Thanks for playing. Bye.")?;
                return Ok(());
            }
            debug!("starting a new round");
        }
    }

    /// Plays one round to its terminal state. Returns `None` when input
    /// ends mid-round.
    fn play_round(&mut self) -> io::Result<Option<Game>> {
        let mut game = Game::new();
        write!(self.output, "{}", game.board().render())?;

        while game.status() == Status::InProgress {
            let player = game.current_player();
            let Some(position) = self.prompt_move(player)? else {
                return Ok(None);
            };
            match game.play(Move::new(player, position)) {
                Ok(next) => {
                    write!(self.output, "{}", next.board().render())?;
                    game = next;
                }
                Err(err @ MoveError::Occupied(_)) => {
                    debug!(%err, "move rejected");
                    writeln!(self.output, "That cell is occupied.")?;
                }
                Err(err) => {
                    debug!(%err, "move rejected");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
        Ok(Some(game))
    }

    /// Prompts `player` until a parsable on-board move arrives. Returns
    /// `None` on end of input.
    fn prompt_move(&mut self, player: Player) -> io::Result<Option<Position>> {
        loop {
            write!(self.output, "Player {player} make a valid move(row,column): ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match input::parse_move(&line) {
                Ok(position) => return Ok(Some(position)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Prompts for a replay answer until one parses. End of input counts
    /// as declining.
    fn prompt_replay(&mut self) -> io::Result<bool> {
        loop {
            write!(self.output, "Would you like to play again (y/n)?")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            if let Some(again) = input::parse_replay(&line) {
                return Ok(again);
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
