//! Board front-end errors.

use horsy_core::{EngineError, SquareError};

/// Errors that can occur while handling board commands.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// A command was given without its required argument.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
    },

    /// A square argument could not be parsed.
    #[error("{source}")]
    InvalidSquare {
        /// The underlying notation error.
        #[from]
        source: SquareError,
    },

    /// The move engine rejected a request.
    #[error("{source}")]
    Engine {
        /// The underlying engine error.
        #[from]
        source: EngineError,
    },

    /// A `set` command named an unknown option or gave a bad value.
    #[error("invalid option: {name} {value}")]
    InvalidOption {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
