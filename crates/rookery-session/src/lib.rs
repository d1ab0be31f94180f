//! Game sessions for rookery: one board per session, one lock per session.

pub mod config;
pub mod error;
pub mod game;
pub mod registry;

pub use config::RegistryConfig;
pub use error::SessionError;
pub use game::Game;
pub use registry::{Registry, SessionId};
