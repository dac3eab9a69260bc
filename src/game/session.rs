//! Text-mode driver: prompts for moves, re-prompts on bad input and prints
//! the board after every move and every collapse.

use crate::core::{GameError, Result};
use crate::game::board::Mark;
use crate::game::round::{Game, GameResult, RoundEvent};
use std::io::{BufRead, Write};
use tracing::warn;

/// Supplies one raw move token per call. `Ok(None)` means input is exhausted.
pub trait MoveSource {
    fn next_move(&mut self, player: Mark) -> std::io::Result<Option<String>>;
}

/// Reads one move per line.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> MoveSource for LineSource<R> {
    fn next_move(&mut self, _player: Mark) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Replays a fixed list of tokens.
pub struct ScriptedMoves<I> {
    moves: I,
}

impl<I> ScriptedMoves<I>
where
    I: Iterator<Item = String>,
{
    pub fn new<T>(moves: T) -> Self
    where
        T: IntoIterator<IntoIter = I, Item = String>,
    {
        Self { moves: moves.into_iter() }
    }
}

impl<I> MoveSource for ScriptedMoves<I>
where
    I: Iterator<Item = String>,
{
    fn next_move(&mut self, _player: Mark) -> std::io::Result<Option<String>> {
        Ok(self.moves.next())
    }
}

/// Couples a [`Game`] with an input source and an output sink.
pub struct Session<S, W> {
    game: Game,
    source: S,
    out: W,
}

impl<S: MoveSource, W: Write> Session<S, W> {
    pub fn new(game: Game, source: S, out: W) -> Self {
        Self { game, source, out }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gives back the output sink, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Plays until the game is over and returns its result.
    pub fn run(&mut self) -> Result<GameResult> {
        loop {
            if let Some(result) = self.game.result() {
                return Ok(result);
            }
            self.turn()?;
        }
    }

    /// Prompts the current player until one move is accepted.
    fn turn(&mut self) -> Result<()> {
        let player = self.game.current_player();
        let report = loop {
            write!(self.out, "Player {}: ", player)?;
            self.out.flush()?;
            let token = self.source.next_move(player)?.ok_or(GameError::InputClosed)?;
            match self.game.play(&token) {
                Ok(report) => break report,
                Err(GameError::Move(e)) => writeln!(self.out, "{}", e)?,
                Err(e) => {
                    warn!(error = %e, "aborting game");
                    return Err(e);
                }
            }
        };

        write!(self.out, "{}", report.provisional)?;
        match report.event {
            RoundEvent::Continue => {}
            RoundEvent::EarlyWin { winner, .. } => self.announce(GameResult::Winner(winner))?,
            RoundEvent::Collapsed { board, result, .. } => {
                writeln!(self.out, "Collapsed:")?;
                write!(self.out, "{}", board)?;
                if let Some(result) = result {
                    self.announce(result)?;
                }
            }
        }
        Ok(())
    }

    fn announce(&mut self, result: GameResult) -> Result<()> {
        match result {
            GameResult::Winner(mark) => writeln!(self.out, "The winner is Player {}!", mark)?,
            GameResult::Draw => writeln!(self.out, "Draw.")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::round::GameConfig;
    use std::io::Cursor;

    fn scripted(tokens: &[&str]) -> ScriptedMoves<std::vec::IntoIter<String>> {
        ScriptedMoves::new(tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_line_source_strips_newlines() -> std::io::Result<()> {
        let mut source = LineSource::new(Cursor::new("3,5\r\n4\n"));
        assert_eq!(source.next_move(Mark::X)?, Some("3,5".to_string()));
        assert_eq!(source.next_move(Mark::O)?, Some("4".to_string()));
        assert_eq!(source.next_move(Mark::X)?, None);
        Ok(())
    }

    #[test]
    fn test_reprompts_after_bad_input() -> Result<()> {
        let game = Game::new(GameConfig::default().with_seed(3))?;
        let mut session = Session::new(game, scripted(&["0", "0", "3", "1", "4", "2"]), Vec::new());
        assert_eq!(session.run()?, GameResult::Winner(Mark::X));
        let transcript = String::from_utf8(session.into_output()).expect("utf-8 transcript");
        assert!(transcript.contains("Cell 0 is occupied. Please enter only the unoccupied cells."));
        assert_eq!(transcript.matches("Player o: ").count(), 3);
        assert!(transcript.ends_with("The winner is Player x!\n"));
        Ok(())
    }

    #[test]
    fn test_input_closed_mid_game() -> Result<()> {
        let game = Game::new(GameConfig::default().with_seed(3))?;
        let mut session = Session::new(game, scripted(&["4"]), Vec::new());
        assert!(matches!(session.run(), Err(GameError::InputClosed)));
        Ok(())
    }
}
