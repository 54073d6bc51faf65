// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

use wirecast_type::error::diagnostic::{decode as diagnostic, value};
use wirecast_type::{Result, Type, Value, return_error};

use super::{ByteOrder, LENGTH_SIZE, decode_length, encode_length};

/// Encode text as a 4-byte byte count (not characters) followed by the raw
/// UTF-8 bytes, no terminator.
pub(crate) fn encode(val: &Value, order: ByteOrder, out: &mut Vec<u8>) -> Result<()> {
    let Value::Utf8(text) = val else {
        return_error!(value::kind_mismatch(Type::Utf8, val.kind()));
    };
    let bytes = text.as_bytes();
    encode_length(bytes.len(), order, out)?;
    out.extend_from_slice(bytes);
    Ok(())
}

/// Decode a length-prefixed UTF-8 string at `offset`. The claimed byte
/// count is checked against the remaining buffer before allocation, and the
/// payload must be valid UTF-8.
pub(crate) fn decode(buf: &[u8], offset: usize, order: ByteOrder) -> Result<(Value, usize)> {
    let len = decode_length(buf, offset, order)?;
    let start = offset + LENGTH_SIZE;
    let remaining = buf.len().saturating_sub(start);
    if remaining < len {
        return_error!(diagnostic::buffer_exhausted(len, remaining));
    }
    let Ok(text) = std::str::from_utf8(&buf[start..start + len]) else {
        return_error!(diagnostic::invalid_utf8(start));
    };
    Ok((Value::Utf8(text.to_string()), LENGTH_SIZE + len))
}

#[cfg(test)]
mod tests {
    use wirecast_type::Value;

    use crate::codec::ByteOrder;

    fn utf8(text: &str) -> Value {
        Value::Utf8(text.to_string())
    }

    #[test]
    fn test_non_ascii_length_counts_bytes() {
        let mut out = Vec::new();
        super::encode(&utf8("hodør"), ByteOrder::Big, &mut out).unwrap();
        // 5 characters, 6 UTF-8 bytes
        assert_eq!(&out[..4], [0, 0, 0, 6]);
        assert_eq!(&out[4..], "hodør".as_bytes());

        let (val, consumed) = super::decode(&out, 0, ByteOrder::Big).unwrap();
        assert_eq!(val, utf8("hodør"));
        assert_eq!(consumed, out.len());
    }

    #[test]
    fn test_empty_string_is_four_zero_bytes() {
        let mut out = Vec::new();
        super::encode(&utf8(""), ByteOrder::Big, &mut out).unwrap();
        assert_eq!(out, [0, 0, 0, 0]);

        let (val, consumed) = super::decode(&out, 0, ByteOrder::Big).unwrap();
        assert_eq!(val, utf8(""));
        assert_eq!(consumed, 4);
    }

    #[test]
    fn test_kind_mismatch_fails_fast() {
        let mut out = Vec::new();
        let err = super::encode(&Value::Int(42), ByteOrder::Big, &mut out).unwrap_err();
        assert_eq!(err.code(), "VALUE_003");
        assert!(out.is_empty());
    }

    #[test]
    fn test_malformed_payload_is_a_decode_error() {
        let buf = [0, 0, 0, 2, 0xC3, 0x28];
        let err = super::decode(&buf, 0, ByteOrder::Big).unwrap_err();
        assert_eq!(err.code(), "DECODE_002");
    }

    #[test]
    fn test_claimed_length_checked_against_remaining() {
        let buf = [0x7F, 0xFF, 0xFF, 0xFF, b'h', b'i'];
        let err = super::decode(&buf, 0, ByteOrder::Big).unwrap_err();
        assert_eq!(err.code(), "DECODE_001");
    }

    #[test]
    fn test_little_endian_prefix() {
        let mut out = Vec::new();
        super::encode(&utf8("hi"), ByteOrder::Little, &mut out).unwrap();
        assert_eq!(out, [2, 0, 0, 0, b'h', b'i']);
    }
}
