// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

use wirecast_type::error::diagnostic::{decode as diagnostic, value};
use wirecast_type::{Result, Type, Value, return_error};

use super::{ByteOrder, LENGTH_SIZE, ScalarCodec, decode_length, encode_length};

/// Encode a sequence as a 4-byte element count followed by the packed
/// fixed-width elements, all in the definition's byte order.
pub(crate) fn encode(
    element: &ScalarCodec,
    val: &Value,
    order: ByteOrder,
    out: &mut Vec<u8>,
) -> Result<()> {
    let Value::Array(items) = val else {
        return_error!(value::kind_mismatch(Type::Array, val.kind()));
    };
    encode_length(items.len(), order, out)?;
    for item in items {
        element.encode(item, order, out)?;
    }
    Ok(())
}

/// Decode a length-prefixed sequence at `offset`. The claimed element count
/// is checked against the remaining buffer before anything is allocated.
pub(crate) fn decode(
    element: &ScalarCodec,
    buf: &[u8],
    offset: usize,
    order: ByteOrder,
) -> Result<(Value, usize)> {
    let count = decode_length(buf, offset, order)?;
    let start = offset + LENGTH_SIZE;
    let remaining = buf.len().saturating_sub(start);
    let needed = match count.checked_mul(element.size()) {
        Some(needed) if needed <= remaining => needed,
        _ => return_error!(diagnostic::buffer_exhausted(count.saturating_mul(element.size()), remaining)),
    };
    let mut items = Vec::with_capacity(count);
    let mut cursor = start;
    for _ in 0..count {
        let (item, consumed) = element.decode(buf, cursor, order)?;
        items.push(item);
        cursor += consumed;
    }
    Ok((Value::Array(items), LENGTH_SIZE + needed))
}
