//! Board command parsing.

use horsy_core::Square;

use crate::error::BoardError;

/// A session option adjustable with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardOption {
    /// Print the board after every click.
    ShowBoard(bool),
    /// Draw axis labels around the board.
    ShowLabels(bool),
}

/// A parsed board command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<square>` or `select <square>` -- click a square.
    Select(Square),
    /// `moves <square>` -- list knight targets without touching the selection.
    Moves(Square),
    /// `board` -- print the board.
    Board,
    /// `clear` -- drop the current selection.
    Clear,
    /// `set <option> <on|off>` -- change a session option.
    Set(BoardOption),
    /// `help` -- list commands.
    Help,
    /// `quit` -- leave the session.
    Quit,
    /// Blank input.
    Empty,
    /// Unrecognized keyword.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, BoardError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&keyword) = tokens.first() else {
        return Ok(Command::Empty);
    };

    match keyword.to_ascii_lowercase().as_str() {
        "select" => Ok(Command::Select(parse_square_arg(&tokens[1..], "select")?)),
        "moves" => Ok(Command::Moves(parse_square_arg(&tokens[1..], "moves")?)),
        "board" => Ok(Command::Board),
        "clear" => Ok(Command::Clear),
        "set" => parse_set(&tokens[1..]),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => match keyword.parse::<Square>() {
            Ok(square) => Ok(Command::Select(square)),
            Err(_) => Ok(Command::Unknown(keyword.to_string())),
        },
    }
}

fn parse_square_arg(tokens: &[&str], command: &'static str) -> Result<Square, BoardError> {
    let arg = tokens
        .first()
        .ok_or(BoardError::MissingArgument { command })?;
    Ok(arg.parse::<Square>()?)
}

/// Parse `set <option> <on|off>`.
fn parse_set(tokens: &[&str]) -> Result<Command, BoardError> {
    let (Some(name), Some(value)) = (tokens.first(), tokens.get(1)) else {
        return Err(BoardError::MissingArgument { command: "set" });
    };

    let invalid = || BoardError::InvalidOption {
        name: name.to_string(),
        value: value.to_string(),
    };

    let flag = match value.to_ascii_lowercase().as_str() {
        "on" | "true" => true,
        "off" | "false" => false,
        _ => return Err(invalid()),
    };

    match name.to_ascii_lowercase().as_str() {
        "board" => Ok(Command::Set(BoardOption::ShowBoard(flag))),
        "labels" => Ok(Command::Set(BoardOption::ShowLabels(flag))),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use horsy_core::Square;

    use super::{BoardOption, Command, parse_command};
    use crate::error::BoardError;

    #[test]
    fn bare_square_selects() {
        assert_eq!(parse_command("e4").unwrap(), Command::Select(Square::E4));
        assert_eq!(parse_command("  A1 ").unwrap(), Command::Select(Square::A1));
    }

    #[test]
    fn select_and_moves() {
        assert_eq!(
            parse_command("select D4").unwrap(),
            Command::Select(Square::D4)
        );
        assert_eq!(parse_command("MOVES h8").unwrap(), Command::Moves(Square::H8));
    }

    #[test]
    fn keywords() {
        assert_eq!(parse_command("board").unwrap(), Command::Board);
        assert_eq!(parse_command("clear").unwrap(), Command::Clear);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("").unwrap(), Command::Empty);
        assert_eq!(parse_command("   ").unwrap(), Command::Empty);
    }

    #[test]
    fn unknown_keyword() {
        assert_eq!(
            parse_command("castle").unwrap(),
            Command::Unknown("castle".to_string())
        );
        assert_eq!(parse_command("Z9").unwrap(), Command::Unknown("Z9".to_string()));
    }

    #[test]
    fn missing_square_argument() {
        let err = parse_command("moves").unwrap_err();
        assert!(matches!(err, BoardError::MissingArgument { command: "moves" }));
    }

    #[test]
    fn invalid_square_argument() {
        let err = parse_command("select I9").unwrap_err();
        assert!(matches!(err, BoardError::InvalidSquare { .. }));
        assert_eq!(err.to_string(), "invalid square notation: \"I9\"");
    }

    #[test]
    fn set_options() {
        assert_eq!(
            parse_command("set board off").unwrap(),
            Command::Set(BoardOption::ShowBoard(false))
        );
        assert_eq!(
            parse_command("set labels ON").unwrap(),
            Command::Set(BoardOption::ShowLabels(true))
        );
        assert!(matches!(
            parse_command("set labels maybe"),
            Err(BoardError::InvalidOption { .. })
        ));
        assert!(matches!(
            parse_command("set colour on"),
            Err(BoardError::InvalidOption { .. })
        ));
        assert!(matches!(
            parse_command("set board"),
            Err(BoardError::MissingArgument { command: "set" })
        ));
    }
}
