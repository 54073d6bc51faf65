// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use wirecast_type::error::diagnostic::{decode, value};
use wirecast_type::{Result, Type, return_error};

pub(crate) use scalar::ScalarCodec;

pub(crate) mod array;
pub(crate) mod scalar;
pub(crate) mod utf8;

/// Byte order used for every multi-byte encoding of one definition.
///
/// Always threaded down from the owning schema or definition; codecs never
/// assume an order of their own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    #[default]
    Big,
    Little,
}

/// Width of the unsigned length prefix in front of arrays and strings.
pub(crate) const LENGTH_SIZE: usize = 4;

/// Process-wide scalar codec table, built once and shared by reference from
/// every field that resolves to one of its entries.
static SCALAR_CODECS: Lazy<HashMap<Type, ScalarCodec>> = Lazy::new(|| {
    [
        Type::Bool,
        Type::Int8,
        Type::Int16,
        Type::Int32,
        Type::Uint8,
        Type::Uint16,
        Type::Uint32,
        Type::Float32,
        Type::Float64,
    ]
    .into_iter()
    .map(|ty| (ty, ScalarCodec::new(ty)))
    .collect()
});

/// Look up the shared codec for a scalar tag. `None` for the
/// variable-length tags, which have no fixed-width codec.
pub(crate) fn scalar_codec(ty: Type) -> Option<&'static ScalarCodec> {
    SCALAR_CODECS.get(&ty)
}

pub(crate) fn encode_length(len: usize, order: ByteOrder, out: &mut Vec<u8>) -> Result<()> {
    let Ok(len) = u32::try_from(len) else {
        return_error!(value::sequence_too_long(len));
    };
    match order {
        ByteOrder::Big => out.extend_from_slice(&len.to_be_bytes()),
        ByteOrder::Little => out.extend_from_slice(&len.to_le_bytes()),
    }
    Ok(())
}

pub(crate) fn decode_length(buf: &[u8], offset: usize, order: ByteOrder) -> Result<usize> {
    let Some(bytes) = buf.get(offset..offset + LENGTH_SIZE) else {
        return_error!(decode::buffer_exhausted(LENGTH_SIZE, buf.len().saturating_sub(offset)));
    };
    let bytes: [u8; LENGTH_SIZE] = bytes.try_into().unwrap();
    let len = match order {
        ByteOrder::Big => u32::from_be_bytes(bytes),
        ByteOrder::Little => u32::from_le_bytes(bytes),
    };
    Ok(len as usize)
}

#[cfg(test)]
mod tests {
    use wirecast_type::Type;

    use super::{ByteOrder, encode_length, scalar_codec};

    #[test]
    fn test_table_holds_every_scalar_tag() {
        for ty in [
            Type::Bool,
            Type::Int8,
            Type::Int16,
            Type::Int32,
            Type::Uint8,
            Type::Uint16,
            Type::Uint32,
            Type::Float32,
            Type::Float64,
        ] {
            let codec = scalar_codec(ty).unwrap();
            assert_eq!(Some(codec.size()), ty.size());
        }
        assert!(scalar_codec(Type::Utf8).is_none());
        assert!(scalar_codec(Type::Array).is_none());
    }

    #[test]
    fn test_table_is_shared_by_reference() {
        let a = scalar_codec(Type::Uint32).unwrap() as *const _;
        let b = scalar_codec(Type::Uint32).unwrap() as *const _;
        assert_eq!(a, b);
    }

    #[test]
    fn test_length_prefix_orders() {
        let mut big = Vec::new();
        encode_length(5, ByteOrder::Big, &mut big).unwrap();
        assert_eq!(big, [0x00, 0x00, 0x00, 0x05]);

        let mut little = Vec::new();
        encode_length(5, ByteOrder::Little, &mut little).unwrap();
        assert_eq!(little, [0x05, 0x00, 0x00, 0x00]);
    }
}
