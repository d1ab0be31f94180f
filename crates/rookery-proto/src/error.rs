//! Line-protocol errors.

use rookery_core::{EngineError, ParseMoveError, PlacementError};
use rookery_session::SessionError;

/// Errors that can occur while parsing or dispatching a protocol command.
#[derive(Debug, thiserror::Error)]
pub enum ProtoError {
    /// A command was given without one of its required arguments.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
        /// Name of the absent argument.
        argument: &'static str,
    },

    /// `setoption` was not of the form `setoption name <Name> value <v>`.
    #[error("malformed setoption command")]
    MalformedOption,

    /// `setoption` named an option this server does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// An option value could not be parsed for its option.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: &'static str,
        /// The value as given.
        value: String,
    },

    /// A move or square in algebraic form could not be parsed.
    #[error("invalid move text: {0}")]
    Move(#[from] ParseMoveError),

    /// A move descriptor in JSON form could not be parsed.
    #[error("invalid move descriptor: {0}")]
    Json(#[from] serde_json::Error),

    /// A move descriptor names a square the board cannot hold.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A starting placement for `new` could not be parsed.
    #[error("invalid placement: {0}")]
    Placement(#[from] PlacementError),

    /// The session layer rejected the request.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// An I/O error occurred while reading input or writing a response.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
