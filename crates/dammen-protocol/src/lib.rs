//! Line protocol handling for dammen.

pub mod command;
pub mod engine;
pub mod error;

pub use command::{Command, EngineOption, GoParams, PositionSpec, parse_command};
pub use engine::{EngineConfig, ProtocolEngine};
pub use error::ProtocolError;
