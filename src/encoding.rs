//! Decoding of the 16-bit text encoding the broker exports in.

use crate::error::{Result, StatementError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteOrder {
    Little,
    Big,
}

/// Decodes UTF-16 bytes into a `String`.
///
/// A leading byte-order mark selects the byte order and is dropped. Input
/// without a mark is read as little-endian.
pub fn decode_utf16(bytes: &[u8]) -> Result<String> {
    let (order, body) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (ByteOrder::Little, rest),
        [0xFE, 0xFF, rest @ ..] => (ByteOrder::Big, rest),
        _ => (ByteOrder::Little, bytes),
    };

    if body.len() % 2 != 0 {
        return Err(StatementError::Encoding(format!(
            "odd number of bytes ({})",
            body.len()
        )));
    }

    let units = body.chunks_exact(2).map(|pair| match order {
        ByteOrder::Little => u16::from_le_bytes([pair[0], pair[1]]),
        ByteOrder::Big => u16::from_be_bytes([pair[0], pair[1]]),
    });

    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| StatementError::Encoding(e.to_string()))
}
