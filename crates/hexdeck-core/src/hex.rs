//! Hex string decoding
//!
//! Converts the space-separated hex tokens of a command file into a
//! [`ByteCommand`]. Decoding is strict: every token must parse as a byte in
//! base 16, and a malformed token fails the whole string with the offending
//! token attached (the parser adds the line number).

use crate::command::ByteCommand;
use crate::error::HexError;

/// Decode a space-separated hex string into a byte command.
///
/// Tokens are separated by single spaces and parsed as base-16 bytes,
/// either case. A doubled separator yields an empty token, which fails
/// like any other bad token. Values that do not fit a byte (`100`),
/// tokens with non-hex characters (`ZZ`, `0x41`), and blank input are
/// all rejected.
pub fn decode(input: &str) -> Result<ByteCommand, HexError> {
    if input.trim().is_empty() {
        return Err(HexError::Empty);
    }
    let mut bytes = Vec::new();
    for token in input.split(' ') {
        let value = u8::from_str_radix(token, 16).map_err(|_| HexError::InvalidToken {
            token: token.to_string(),
        })?;
        bytes.push(value);
    }
    Ok(ByteCommand::new(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_simple() {
        let cmd = decode("AA 01 FF").unwrap();
        assert_eq!(cmd.as_bytes(), &[0xAA, 0x01, 0xFF]);
    }

    #[test]
    fn test_decode_lowercase_and_single_digit() {
        let cmd = decode("aa 1 f").unwrap();
        assert_eq!(cmd.as_bytes(), &[0xAA, 0x01, 0x0F]);
    }

    #[test]
    fn test_decode_rejects_doubled_separator() {
        let err = decode("AA  BB").unwrap_err();
        assert_eq!(
            err,
            HexError::InvalidToken {
                token: String::new()
            }
        );
    }

    #[test]
    fn test_decode_splits_on_single_spaces_only() {
        assert!(decode("AA\tBB").is_err());
        assert!(decode(" AA").is_err());
    }

    #[test]
    fn test_decode_rejects_non_hex_token() {
        let err = decode("AA ZZ").unwrap_err();
        assert_eq!(
            err,
            HexError::InvalidToken {
                token: "ZZ".to_string()
            }
        );
    }

    #[test]
    fn test_decode_rejects_out_of_range_token() {
        let err = decode("100").unwrap_err();
        assert_eq!(
            err,
            HexError::InvalidToken {
                token: "100".to_string()
            }
        );
    }

    #[test]
    fn test_decode_rejects_prefixed_token() {
        assert!(decode("0x41").is_err());
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("").unwrap_err(), HexError::Empty);
        assert_eq!(decode("   ").unwrap_err(), HexError::Empty);
    }

    #[test]
    fn test_decode_display_decode_is_idempotent() {
        let first = decode("aa 1 ff").unwrap();
        let second = decode(&first.to_string()).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        // Round trip: any byte sequence survives display + decode unchanged.
        #[test]
        fn prop_display_decode_round_trip(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
            let cmd = ByteCommand::new(bytes);
            let decoded = decode(&cmd.to_string()).unwrap();
            prop_assert_eq!(cmd, decoded);
        }
    }
}
