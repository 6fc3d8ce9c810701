//! Session event channel
//!
//! Provides:
//! - Event types for connection changes, command dispatch, and model loads
//! - An event dispatcher for publishing events to subscribers
//!
//! This is the operator-visible diagnostic channel: the console subscribes
//! and drains it after each action. Publishing is synchronous; no runtime
//! is required.

use tokio::sync::broadcast;

/// Session event types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A device connection was opened
    Connected(String),
    /// The device connection was closed
    Disconnected,
    /// A command was written to the device
    CommandSent {
        /// The control label the operator activated.
        label: String,
        /// Number of bytes written.
        bytes: usize,
    },
    /// A command dispatch failed
    CommandFailed {
        /// The control label the operator activated.
        label: String,
        /// Why the dispatch failed.
        reason: String,
    },
    /// A command file was parsed and the model replaced
    ModelLoaded {
        /// Where the model came from (file path or "<inline>").
        source: String,
        /// Number of sections in the new model.
        sections: usize,
        /// Number of commands across all sections.
        commands: usize,
    },
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEvent::Connected(port) => write!(f, "Connected to {}", port),
            SessionEvent::Disconnected => write!(f, "Disconnected"),
            SessionEvent::CommandSent { label, bytes } => {
                write!(f, "Sent '{}' ({} bytes)", label, bytes)
            }
            SessionEvent::CommandFailed { label, reason } => {
                write!(f, "Failed to send '{}': {}", label, reason)
            }
            SessionEvent::ModelLoaded {
                source,
                sections,
                commands,
            } => {
                write!(
                    f,
                    "Loaded {} ({} sections, {} commands)",
                    source, sections, commands
                )
            }
        }
    }
}

/// Event dispatcher for publishing events to subscribers
#[derive(Clone)]
pub struct EventDispatcher {
    /// Broadcast sender channel for session events.
    tx: broadcast::Sender<SessionEvent>,
}

impl EventDispatcher {
    /// Create a new event dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Size of the broadcast buffer (default 100)
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size);
        Self { tx }
    }

    /// Create a new event dispatcher with default buffer size
    pub fn default_with_buffer() -> Self {
        Self::new(100)
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of subscribers the event reached. Publishing with
    /// no subscribers is not an error worth surfacing to callers; they may
    /// ignore the result.
    pub fn publish(
        &self,
        event: SessionEvent,
    ) -> Result<usize, broadcast::error::SendError<SessionEvent>> {
        self.tx.send(event)
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::default_with_buffer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_subscriber() {
        let dispatcher = EventDispatcher::new(8);
        let mut rx = dispatcher.subscribe();

        dispatcher
            .publish(SessionEvent::Connected("/dev/ttyUSB0".to_string()))
            .unwrap();

        match rx.try_recv().unwrap() {
            SessionEvent::Connected(port) => assert_eq!(port, "/dev/ttyUSB0"),
            other => panic!("unexpected event: {}", other),
        }
    }

    #[test]
    fn test_publish_without_subscribers_is_harmless() {
        let dispatcher = EventDispatcher::default();
        assert_eq!(dispatcher.subscriber_count(), 0);
        assert!(dispatcher.publish(SessionEvent::Disconnected).is_err());
    }

    #[test]
    fn test_event_display() {
        let event = SessionEvent::CommandSent {
            label: "Reset".to_string(),
            bytes: 3,
        };
        assert_eq!(event.to_string(), "Sent 'Reset' (3 bytes)");

        let event = SessionEvent::CommandFailed {
            label: "Reset".to_string(),
            reason: "device not connected".to_string(),
        };
        assert_eq!(
            event.to_string(),
            "Failed to send 'Reset': device not connected"
        );
    }
}
