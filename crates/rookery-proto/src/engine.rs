//! Event-driven line-protocol server.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use tracing::{debug, info, warn};

use rookery_core::Board;
use rookery_session::{Registry, RegistryConfig};

use crate::command::{Command, ProtoOption, parse_command};
use crate::error::ProtoError;

/// Events processed by the main server loop.
enum ServerEvent {
    Line(Result<Command, ProtoError>),
    InputClosed,
}

/// Whether the loop keeps running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The protocol server, holding the session registry and the response sink.
///
/// Input is read on its own thread and handed to the loop over a channel;
/// commands are dispatched on the calling thread, one at a time.
pub struct Server<W: Write> {
    registry: Registry,
    out: W,
}

impl Server<io::Stdout> {
    /// Create a server answering on stdout.
    pub fn new() -> Self {
        Self::with_output(RegistryConfig::default(), io::stdout())
    }
}

impl Default for Server<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Server<W> {
    pub fn with_output(config: RegistryConfig, out: W) -> Self {
        Self {
            registry: Registry::with_config(config),
            out,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Give back the response sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the event loop on stdin until `quit` or input closes.
    pub fn run(mut self) -> Result<(), ProtoError> {
        self.run_with(io::BufReader::new(io::stdin()))
    }

    /// Run the event loop on `input` until `quit` or input closes.
    pub fn run_with<R>(&mut self, input: R) -> Result<(), ProtoError>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<ServerEvent>();

        std::thread::spawn(move || {
            for line in input.lines() {
                match line {
                    Ok(line) => {
                        let trimmed = line.trim();
                        if trimmed.is_empty() {
                            continue;
                        }
                        debug!(cmd = %trimmed, "received command");
                        if tx.send(ServerEvent::Line(parse_command(trimmed))).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "input read failed");
                        break;
                    }
                }
            }
            let _ = tx.send(ServerEvent::InputClosed);
        });

        for event in &rx {
            match event {
                ServerEvent::Line(cmd) => {
                    if self.handle(cmd)? == Flow::Quit {
                        break;
                    }
                }
                ServerEvent::InputClosed => break,
            }
        }

        info!(open = self.registry.len(), "rookery shutting down");
        Ok(())
    }

    /// Handle one parsed line.
    ///
    /// Command failures are answered with an `error` line and the loop goes
    /// on. Only a failure to write the response is returned.
    pub fn handle(&mut self, cmd: Result<Command, ProtoError>) -> Result<Flow, ProtoError> {
        let outcome = cmd.and_then(|cmd| self.dispatch(cmd));
        match outcome {
            Ok(flow) => Ok(flow),
            Err(e @ ProtoError::Io { .. }) => Err(e),
            Err(e) => {
                warn!(error = %e, "command failed");
                writeln!(self.out, "error {e}")?;
                self.out.flush()?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Parse and handle one line of text.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow, ProtoError> {
        self.handle(parse_command(line))
    }

    fn dispatch(&mut self, cmd: Command) -> Result<Flow, ProtoError> {
        match cmd {
            Command::New(board) => self.handle_new(board)?,
            Command::Play { id, mv } => {
                let reply = self.registry.play(id, mv)?;
                writeln!(self.out, "reply {}", serde_json::to_string(&reply)?)?;
            }
            Command::Moves { id, square } => {
                let moves = self.registry.legal_moves(id, square)?;
                write!(self.out, "moves")?;
                for mv in &moves {
                    write!(self.out, " {mv}")?;
                }
                writeln!(self.out)?;
            }
            Command::Show(id) => {
                let board = self.registry.board(id)?;
                writeln!(self.out, "{}", board.pretty())?;
                writeln!(self.out, "placement {board}")?;
            }
            Command::Close(id) => {
                self.registry.close(id)?;
                writeln!(self.out, "closed {id}")?;
            }
            Command::SetOption(option) => self.handle_setoption(option),
            Command::IsReady => writeln!(self.out, "readyok")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(word) => {
                if !word.is_empty() {
                    debug!(cmd = %word, "ignoring unknown command");
                }
            }
        }
        self.out.flush()?;
        Ok(Flow::Continue)
    }

    fn handle_new(&mut self, board: Option<Board>) -> Result<(), ProtoError> {
        let id = match board {
            Some(board) => self.registry.create_from(board)?,
            None => self.registry.create()?,
        };
        writeln!(self.out, "session {id}")?;
        Ok(())
    }

    fn handle_setoption(&mut self, option: ProtoOption) {
        match option {
            ProtoOption::MaxSessions(max) => self.registry.set_max_sessions(max),
            ProtoOption::AutoReply(enabled) => self.registry.set_auto_apply_reply(enabled),
        }
        debug!(?option, "option set");
    }
}
