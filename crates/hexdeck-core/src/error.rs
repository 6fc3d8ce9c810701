//! Error handling for Hexdeck
//!
//! Provides error types for all layers of the application:
//! - Hex errors (byte-token decoding)
//! - Config errors (command-file parsing)
//! - Connection errors (port enumeration and open)
//! - Device errors (session state and writes)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Hex decoding error type
///
/// Raised when a hex string cannot be decoded into a byte command. Decoding
/// is strict: a malformed token fails the whole string rather than producing
/// a sentinel byte.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// The hex string contained no tokens
    #[error("empty hex string")]
    Empty,

    /// A token is not a valid byte in base 16
    #[error("invalid hex token '{token}'")]
    InvalidToken {
        /// The token that failed to parse.
        token: String,
    },
}

/// Command-file error type
///
/// Represents errors raised while parsing a command file. Every variant that
/// originates from a specific input line carries its 1-based line number so
/// the operator can locate the problem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A command line was found before any section header
    #[error("line {line}: command line appears before any [SECTION] header")]
    CommandOutsideSection {
        /// The offending line number.
        line: usize,
    },

    /// A section header repeats a name already in use
    #[error("line {line}: duplicate section [{name}]")]
    DuplicateSection {
        /// The repeated section name.
        name: String,
        /// The offending line number.
        line: usize,
    },

    /// A command line does not fit the section's grammar
    #[error("line {line}: {reason}")]
    MalformedLine {
        /// The offending line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A hex token in a command line failed to decode
    #[error("line {line}: invalid hex token '{token}'")]
    InvalidHex {
        /// The offending line number.
        line: usize,
        /// The token that failed to decode.
        token: String,
    },

    /// A command line carries no hex payload
    #[error("line {line}: empty hex payload")]
    EmptyHex {
        /// The offending line number.
        line: usize,
    },

    /// The command file could not be read
    #[error("failed to read command file {path}: {reason}")]
    FileRead {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O failure.
        reason: String,
    },
}

/// Connection error type
///
/// Represents errors raised while enumerating or opening serial ports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// Port enumeration is unavailable or failed
    #[error("failed to enumerate serial ports: {reason}")]
    EnumerationFailed {
        /// The reason enumeration failed.
        reason: String,
    },

    /// The named port does not exist on this system
    #[error("port not found: {port}")]
    PortNotFound {
        /// The port that was not found.
        port: String,
    },

    /// The port exists but could not be opened
    #[error("failed to open port {port}: {reason}")]
    FailedToOpen {
        /// The port that failed to open.
        port: String,
        /// The reason the open failed.
        reason: String,
    },

    /// The connection parameters are invalid
    #[error("invalid connection parameters: {reason}")]
    InvalidParameters {
        /// The reason the parameters are invalid.
        reason: String,
    },
}

/// Device error type
///
/// Represents errors raised by the device session around command dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// No device connection is open
    #[error("device not connected")]
    NotConnected,

    /// A write to the device failed
    #[error("write failed: {reason}")]
    WriteFailed {
        /// The reason the write failed.
        reason: String,
    },
}

/// Main error type for Hexdeck
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Hex decoding error
    #[error(transparent)]
    Hex(#[from] HexError),

    /// Command-file error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Connection error
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// Device error
    #[error(transparent)]
    Device(#[from] DeviceError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a command-file error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is a connection error
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Error::Connection(_))
    }

    /// Check if this is a device error
    pub fn is_device_error(&self) -> bool {
        matches!(self, Error::Device(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
