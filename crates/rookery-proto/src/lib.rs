//! Line protocol for rookery: one command per line in, one response per line out.

pub mod command;
pub mod engine;
pub mod error;

pub use command::{Command, ProtoOption, parse_command, parse_move};
pub use engine::{Flow, Server};
pub use error::ProtoError;
