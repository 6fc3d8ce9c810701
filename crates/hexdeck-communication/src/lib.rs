//! # Hexdeck Communication
//!
//! Serial transport for Hexdeck:
//! - Port enumeration and discovery, filtered to USB-serial devices
//! - The `Communicator` trait with serial and no-op implementations
//! - `DeviceSession`, the single owner of the active device connection

pub mod communicator;
pub mod serial;
pub mod session;

pub use communicator::{Communicator, ConnectionParams, NoOpCommunicator, SerialParity};
pub use serial::{list_ports, SerialCommunicator, SerialPortInfo};
pub use session::DeviceSession;
