//! Byte command value type
//!
//! A `ByteCommand` is the decoded payload behind a deck control: the exact
//! byte sequence transmitted to the device in a single write when the
//! control is activated.

use serde::{Deserialize, Serialize};

/// An ordered sequence of bytes sent to the device as one write.
///
/// Values are produced by [`crate::hex::decode`] from the space-separated
/// hex tokens in a command file. The `Display` impl renders the canonical
/// form used in logs and the console echo: uppercase two-digit tokens
/// separated by single spaces (`"AA 01 FF"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteCommand(Vec<u8>);

impl ByteCommand {
    /// Create a byte command from raw bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The bytes to transmit
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes in the command
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the command carries no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for ByteCommand {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Display for ByteCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_canonical_form() {
        let cmd = ByteCommand::new(vec![0xAA, 0x01, 0xFF]);
        assert_eq!(cmd.to_string(), "AA 01 FF");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(ByteCommand::default().to_string(), "");
    }

    #[test]
    fn test_accessors() {
        let cmd = ByteCommand::from(vec![1, 2, 3]);
        assert_eq!(cmd.as_bytes(), &[1, 2, 3]);
        assert_eq!(cmd.len(), 3);
        assert!(!cmd.is_empty());
    }

    #[test]
    fn test_serializes_as_byte_array() {
        let cmd = ByteCommand::new(vec![170, 187]);
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, "[170,187]");
    }
}
