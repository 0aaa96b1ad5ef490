//! Interactive board session.
//!
//! Reads one command per line, updates the selection, and writes results to
//! the output. Runs synchronously until `quit` or end of input.

use std::io::{BufRead, Write};

use horsy_core::{KnightMoveEngine, Square};
use tracing::{debug, info, warn};

use crate::command::{BoardOption, Command, parse_command};
use crate::error::BoardError;
use crate::render::BoardView;
use crate::selection::{ClickOutcome, Selection};

const HELP: &str = "\
commands:
  <square> | select <square>   select a square, or release it if already selected
  moves <square>               list knight moves from a square
  board                        print the board
  clear                        release the selection
  set board on|off             print the board after each selection
  set labels on|off            draw axis labels
  help                         show this text
  quit                         leave";

/// Options adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board after each click.
    pub show_board: bool,
    /// Draw axis labels around the board.
    pub show_labels: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            show_labels: true,
        }
    }
}

/// A board session holding the selection and its options.
#[derive(Debug, Default)]
pub struct Session {
    selection: Selection,
    lookup: KnightMoveEngine,
    config: SessionConfig,
}

impl Session {
    /// Create a session with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with the given options.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Return the current options.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Return the current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Process commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<(), BoardError> {
        info!("horsy session started");

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut output)?,
                Err(e) => {
                    warn!(error = %e, "command error");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        info!("horsy session finished");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<(), BoardError> {
        match cmd {
            Command::Select(square) => self.handle_select(square, output)?,
            Command::Moves(square) => self.handle_moves(square, output)?,
            Command::Board => self.write_board(output)?,
            Command::Clear => {
                self.selection.clear();
                writeln!(output, "cleared")?;
            }
            Command::Set(option) => self.handle_set(option, output)?,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Unknown(keyword) => {
                warn!(%keyword, "unknown command, ignoring");
                writeln!(output, "unknown command: {keyword}")?;
            }
            Command::Empty | Command::Quit => {}
        }
        Ok(())
    }

    fn handle_select<W: Write>(
        &mut self,
        square: Square,
        output: &mut W,
    ) -> Result<(), BoardError> {
        match self.selection.click(square) {
            ClickOutcome::Selected(sq) => {
                writeln!(output, "selected {sq}: {}", self.selection.highlighted())?;
            }
            ClickOutcome::Deselected(sq) => writeln!(output, "deselected {sq}")?,
        }
        if self.config.show_board {
            self.write_board(output)?;
        }
        Ok(())
    }

    fn handle_moves<W: Write>(
        &mut self,
        square: Square,
        output: &mut W,
    ) -> Result<(), BoardError> {
        self.lookup.set_square(square);
        let targets = self.lookup.moves()?;
        writeln!(output, "moves {square}: {targets}")?;
        Ok(())
    }

    fn handle_set<W: Write>(
        &mut self,
        option: BoardOption,
        output: &mut W,
    ) -> Result<(), BoardError> {
        let (name, flag) = match option {
            BoardOption::ShowBoard(flag) => {
                self.config.show_board = flag;
                ("board", flag)
            }
            BoardOption::ShowLabels(flag) => {
                self.config.show_labels = flag;
                ("labels", flag)
            }
        };
        writeln!(output, "{name} {}", if flag { "on" } else { "off" })?;
        Ok(())
    }

    fn write_board<W: Write>(&self, output: &mut W) -> Result<(), BoardError> {
        writeln!(output, "{}", BoardView::new(&self.selection, self.config.show_labels))?;
        Ok(())
    }
}
