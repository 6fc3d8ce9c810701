//! # Hexdeck Core
//!
//! Core types for Hexdeck: the byte-command value type and its hex codec,
//! the error taxonomy shared by all layers, and the session event channel
//! that carries operator-visible diagnostics.

pub mod command;
pub mod error;
pub mod event;
pub mod hex;

pub use command::ByteCommand;
pub use error::{ConfigError, ConnectionError, DeviceError, Error, HexError, Result};
pub use event::{EventDispatcher, SessionEvent};
