//! The device session: one connection, one event stream.

use hexdeck_core::error::DeviceError;
use hexdeck_core::{ByteCommand, EventDispatcher, Result, SessionEvent};
use tracing::{info, warn};

use crate::communicator::{Communicator, ConnectionParams};

/// Owns the active device connection and the diagnostic event stream.
///
/// There is exactly one session per running application. Connecting replaces
/// any previous connection wholesale. A failed write is published and
/// returned but does not tear the session down, so later commands stay
/// sendable.
pub struct DeviceSession {
    communicator: Box<dyn Communicator>,
    events: EventDispatcher,
}

impl DeviceSession {
    /// Create a session around a transport.
    pub fn new(communicator: Box<dyn Communicator>) -> Self {
        Self {
            communicator,
            events: EventDispatcher::default(),
        }
    }

    /// Event stream fed by connection changes and command dispatches.
    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    /// Open a connection, replacing any previous one.
    pub fn connect(&mut self, params: &ConnectionParams) -> Result<()> {
        if self.communicator.is_connected() {
            self.communicator.disconnect()?;
            let _ = self.events.publish(SessionEvent::Disconnected);
        }

        self.communicator.connect(params)?;
        info!(params = %params, "device connected");
        let _ = self
            .events
            .publish(SessionEvent::Connected(params.port.clone()));
        Ok(())
    }

    /// Close the connection if one is open.
    pub fn disconnect(&mut self) -> Result<()> {
        if !self.communicator.is_connected() {
            return Ok(());
        }

        self.communicator.disconnect()?;
        info!("device disconnected");
        let _ = self.events.publish(SessionEvent::Disconnected);
        Ok(())
    }

    /// True while a device connection is open.
    pub fn is_connected(&self) -> bool {
        self.communicator.is_connected()
    }

    /// Parameters of the current connection, if any.
    pub fn connection_params(&self) -> Option<&ConnectionParams> {
        self.communicator.connection_params()
    }

    /// Send a labelled byte command to the device as a single write.
    ///
    /// Publishes `CommandSent` or `CommandFailed` and returns the number of
    /// bytes written.
    pub fn send_command(&mut self, label: &str, command: &ByteCommand) -> Result<usize> {
        if !self.communicator.is_connected() {
            let err = DeviceError::NotConnected;
            let _ = self.events.publish(SessionEvent::CommandFailed {
                label: label.to_string(),
                reason: err.to_string(),
            });
            return Err(err.into());
        }

        match self.communicator.send(command.as_bytes()) {
            Ok(written) => {
                info!(label, bytes = written, payload = %command, "command sent");
                let _ = self.events.publish(SessionEvent::CommandSent {
                    label: label.to_string(),
                    bytes: written,
                });
                Ok(written)
            }
            Err(err) => {
                warn!(label, error = %err, "command dispatch failed");
                let _ = self.events.publish(SessionEvent::CommandFailed {
                    label: label.to_string(),
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }
}
