//! Line-protocol command parsing.

use serde::Deserialize;

use rookery_core::{Board, Coordinate, EngineError, Move};
use rookery_session::SessionId;

use crate::error::ProtoError;

/// A runtime option settable with `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtoOption {
    /// Cap on simultaneously open sessions.
    MaxSessions(usize),
    /// Whether `play` also applies the reply it returns.
    AutoReply(bool),
}

/// A parsed protocol command.
#[derive(Debug)]
pub enum Command {
    /// `new [placement]` -- open a session, on the starting layout by default.
    New(Option<Board>),
    /// `play <id> <move>` -- submit a move and get the reply.
    Play { id: SessionId, mv: Move },
    /// `moves <id> <square>` -- list the moves of one piece.
    Moves { id: SessionId, square: Coordinate },
    /// `show <id>` -- print a session's board.
    Show(SessionId),
    /// `close <id>` -- end a session.
    Close(SessionId),
    /// `setoption name <Name> value <v>` -- adjust a runtime option.
    SetOption(ProtoOption),
    /// `isready` -- synchronization ping.
    IsReady,
    /// `quit` -- exit the server.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ProtoError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "new" => parse_new(&tokens[1..]),
        "play" => parse_play(&tokens[1..]),
        "moves" => {
            let id = session_arg(&tokens[1..], "moves")?;
            let square = required(&tokens[1..], 1, "moves", "square")?.parse()?;
            Ok(Command::Moves { id, square })
        }
        "show" => Ok(Command::Show(session_arg(&tokens[1..], "show")?)),
        "close" => Ok(Command::Close(session_arg(&tokens[1..], "close")?)),
        "setoption" => parse_setoption(&tokens[1..]),
        "isready" => Ok(Command::IsReady),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// A JSON move descriptor as sent on the wire. Axes are read as `i64` so a
/// value past the range of [`Coordinate`] is reported as off the board.
#[derive(Debug, Deserialize)]
struct WireMove {
    from: WireSquare,
    to: WireSquare,
}

#[derive(Debug, Deserialize)]
struct WireSquare {
    x: i64,
    y: i64,
}

impl WireSquare {
    fn coordinate(&self) -> Result<Coordinate, EngineError> {
        match (i8::try_from(self.x), i8::try_from(self.y)) {
            (Ok(x), Ok(y)) => Ok(Coordinate::new(x, y)),
            _ => Err(EngineError::OutOfBounds {
                x: self.x,
                y: self.y,
            }),
        }
    }
}

/// Parse a move given either as `e2e4` or as a JSON descriptor
/// (`{"from":{"x":4,"y":6},"to":{"x":4,"y":4}}`).
///
/// Descriptor squares that fit a [`Coordinate`] are passed through even when
/// off the board; the session rejects those before touching its board.
pub fn parse_move(text: &str) -> Result<Move, ProtoError> {
    let text = text.trim();
    if text.starts_with('{') {
        let wire: WireMove = serde_json::from_str(text)?;
        Ok(Move::new(wire.from.coordinate()?, wire.to.coordinate()?))
    } else {
        Ok(text.parse()?)
    }
}

fn parse_new(tokens: &[&str]) -> Result<Command, ProtoError> {
    match tokens.first() {
        None => Ok(Command::New(None)),
        Some(placement) => Ok(Command::New(Some(placement.parse()?))),
    }
}

/// `play <id> <move>`. The move may span several tokens when it is JSON
/// with spaces in it.
fn parse_play(tokens: &[&str]) -> Result<Command, ProtoError> {
    let id = session_arg(tokens, "play")?;
    if tokens.len() < 2 {
        return Err(ProtoError::MissingArgument {
            command: "play",
            argument: "move",
        });
    }
    let mv = parse_move(&tokens[1..].join(" "))?;
    Ok(Command::Play { id, mv })
}

/// `setoption name <Name> value <v>`. Option names match case-insensitively.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ProtoError> {
    let (name, value) = match tokens {
        ["name", name, "value", value] => (*name, *value),
        _ => return Err(ProtoError::MalformedOption),
    };

    let option = if name.eq_ignore_ascii_case("maxsessions") {
        let max = value.parse().map_err(|_| ProtoError::InvalidOptionValue {
            name: "MaxSessions",
            value: value.to_string(),
        })?;
        ProtoOption::MaxSessions(max)
    } else if name.eq_ignore_ascii_case("autoreply") {
        let enabled = value.parse().map_err(|_| ProtoError::InvalidOptionValue {
            name: "AutoReply",
            value: value.to_string(),
        })?;
        ProtoOption::AutoReply(enabled)
    } else {
        return Err(ProtoError::UnknownOption {
            name: name.to_string(),
        });
    };

    Ok(Command::SetOption(option))
}

fn session_arg(tokens: &[&str], command: &'static str) -> Result<SessionId, ProtoError> {
    Ok(required(tokens, 0, command, "session id")?.parse()?)
}

fn required<'a>(
    tokens: &[&'a str],
    index: usize,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, ProtoError> {
    tokens
        .get(index)
        .copied()
        .ok_or(ProtoError::MissingArgument { command, argument })
}
