//! Connection parameters and the transport abstraction.

use std::fmt;

use hexdeck_core::error::{ConnectionError, DeviceError};
use hexdeck_core::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parity setting for a serial connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerialParity {
    /// No parity bit
    #[default]
    None,
    /// Even parity
    Even,
    /// Odd parity
    Odd,
}

impl SerialParity {
    /// One-letter symbol used in the conventional `8N1` framing notation.
    pub fn symbol(&self) -> char {
        match self {
            SerialParity::None => 'N',
            SerialParity::Even => 'E',
            SerialParity::Odd => 'O',
        }
    }
}

impl fmt::Display for SerialParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerialParity::None => write!(f, "none"),
            SerialParity::Even => write!(f, "even"),
            SerialParity::Odd => write!(f, "odd"),
        }
    }
}

/// Parameters for opening a device connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParams {
    /// Port name (e.g., "/dev/ttyUSB0", "COM3")
    pub port: String,

    /// Baud rate in bits per second
    pub baud_rate: u32,

    /// Data bits per character (5 to 8)
    pub data_bits: u8,

    /// Stop bits (1 or 2)
    pub stop_bits: u8,

    /// Parity checking mode
    pub parity: SerialParity,

    /// Hardware flow control
    pub flow_control: bool,

    /// Open and write timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ConnectionParams {
    fn default() -> Self {
        Self {
            port: String::new(),
            baud_rate: 115_200,
            data_bits: 8,
            stop_bits: 1,
            parity: SerialParity::None,
            flow_control: false,
            timeout_ms: 1_000,
        }
    }
}

impl ConnectionParams {
    /// Create parameters for the given port with the default framing.
    pub fn new(port: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            ..Self::default()
        }
    }

    /// Set the baud rate.
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Set the open and write timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Check the parameters for values no serial port accepts.
    pub fn validate(&self) -> std::result::Result<(), ConnectionError> {
        if self.port.is_empty() {
            return Err(ConnectionError::InvalidParameters {
                reason: "port name is empty".to_string(),
            });
        }
        if self.baud_rate == 0 {
            return Err(ConnectionError::InvalidParameters {
                reason: "baud rate must be greater than zero".to_string(),
            });
        }
        if !(5..=8).contains(&self.data_bits) {
            return Err(ConnectionError::InvalidParameters {
                reason: format!("invalid data bits: {}", self.data_bits),
            });
        }
        if !(1..=2).contains(&self.stop_bits) {
            return Err(ConnectionError::InvalidParameters {
                reason: format!("invalid stop bits: {}", self.stop_bits),
            });
        }
        if self.timeout_ms == 0 {
            return Err(ConnectionError::InvalidParameters {
                reason: "timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} ({}{}{})",
            self.port,
            self.baud_rate,
            self.data_bits,
            self.parity.symbol(),
            self.stop_bits
        )
    }
}

/// Transport over which byte commands reach a device.
///
/// Implementations are synchronous with a single outstanding operation.
/// There is no receive direction: dispatch is fire-and-forget.
pub trait Communicator: Send {
    /// Open the connection described by `params`.
    fn connect(&mut self, params: &ConnectionParams) -> Result<()>;

    /// Close the connection. Closing an unconnected transport is a no-op.
    fn disconnect(&mut self) -> Result<()>;

    /// True while the connection is open.
    fn is_connected(&self) -> bool;

    /// Write `data` to the device, returning the number of bytes written.
    fn send(&mut self, data: &[u8]) -> Result<usize>;

    /// Parameters of the current connection, if any.
    fn connection_params(&self) -> Option<&ConnectionParams>;
}

/// Communicator that accepts every connection and discards all writes.
///
/// Backs dry-run mode and tests.
#[derive(Debug, Default)]
pub struct NoOpCommunicator {
    params: Option<ConnectionParams>,
}

impl NoOpCommunicator {
    /// Create a disconnected no-op communicator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Communicator for NoOpCommunicator {
    fn connect(&mut self, params: &ConnectionParams) -> Result<()> {
        params.validate()?;
        debug!(port = %params.port, "no-op transport connected");
        self.params = Some(params.clone());
        Ok(())
    }

    fn disconnect(&mut self) -> Result<()> {
        self.params = None;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.params.is_some()
    }

    fn send(&mut self, data: &[u8]) -> Result<usize> {
        if !self.is_connected() {
            return Err(DeviceError::NotConnected.into());
        }
        debug!(bytes = data.len(), "no-op transport discarded write");
        Ok(data.len())
    }

    fn connection_params(&self) -> Option<&ConnectionParams> {
        self.params.as_ref()
    }
}
