// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// All wire type tags. The set is closed: a peer that does not know a tag
/// cannot decode the stream, so tags are never extended at runtime.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    /// A boolean: true or false.
    Bool,
    /// A 1-byte signed integer
    Int8,
    /// A 2-byte signed integer
    Int16,
    /// A 4-byte signed integer
    Int32,
    /// A 1-byte unsigned integer
    Uint8,
    /// A 2-byte unsigned integer
    Uint16,
    /// A 4-byte unsigned integer
    Uint32,
    /// A 4-byte floating point
    Float32,
    /// An 8-byte floating point
    Float64,
    /// A length-prefixed UTF-8 encoded text
    #[serde(rename = "string")]
    Utf8,
    /// A length-prefixed sequence of one scalar type
    Array,
}

impl Type {
    /// Encoded width in bytes for scalar tags, `None` for the
    /// variable-length tags.
    pub fn size(&self) -> Option<usize> {
        match self {
            Type::Bool => Some(1),
            Type::Int8 => Some(1),
            Type::Int16 => Some(2),
            Type::Int32 => Some(4),
            Type::Uint8 => Some(1),
            Type::Uint16 => Some(2),
            Type::Uint32 => Some(4),
            Type::Float32 => Some(4),
            Type::Float64 => Some(8),
            Type::Utf8 => None,
            Type::Array => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, Type::Utf8 | Type::Array)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Type::Bool)
    }

    pub fn is_signed_integer(&self) -> bool {
        matches!(self, Type::Int8 | Type::Int16 | Type::Int32)
    }

    pub fn is_unsigned_integer(&self) -> bool {
        matches!(self, Type::Uint8 | Type::Uint16 | Type::Uint32)
    }

    pub fn is_integer(&self) -> bool {
        self.is_signed_integer() || self.is_unsigned_integer()
    }

    pub fn is_floating_point(&self) -> bool {
        matches!(self, Type::Float32 | Type::Float64)
    }

    pub fn is_utf8(&self) -> bool {
        matches!(self, Type::Utf8)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Bool => f.write_str("bool"),
            Type::Int8 => f.write_str("int8"),
            Type::Int16 => f.write_str("int16"),
            Type::Int32 => f.write_str("int32"),
            Type::Uint8 => f.write_str("uint8"),
            Type::Uint16 => f.write_str("uint16"),
            Type::Uint32 => f.write_str("uint32"),
            Type::Float32 => f.write_str("float32"),
            Type::Float64 => f.write_str("float64"),
            Type::Utf8 => f.write_str("string"),
            Type::Array => f.write_str("array"),
        }
    }
}

impl FromStr for Type {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bool" | "boolean" => Ok(Type::Bool),
            "int8" => Ok(Type::Int8),
            "int16" => Ok(Type::Int16),
            "int32" => Ok(Type::Int32),
            "uint8" => Ok(Type::Uint8),
            "uint16" => Ok(Type::Uint16),
            "uint32" => Ok(Type::Uint32),
            "float32" => Ok(Type::Float32),
            "float64" => Ok(Type::Float64),
            "string" | "utf8" => Ok(Type::Utf8),
            "array" => Ok(Type::Array),
            _ => Err(()),
        }
    }
}
