// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod r#type;

/// A record value as it crosses the encode/decode boundary.
///
/// Values are dynamically typed: the owning definition's field tag decides
/// how a value is packed, and the scalar codec enforces range at encode
/// time. `Int` carries every integer tag (the widest is uint32), `Float`
/// carries both float tags (float32 is widened on decode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Utf8(String),
    Array(Vec<Value>),
}

/// One structured record: the unit a definition encodes and decodes.
pub type Record = HashMap<String, Value>;

impl Value {
    /// Name of the value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Utf8(_) => "string",
            Value::Array(_) => "array",
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(value) => Display::fmt(value, f),
            Value::Int(value) => Display::fmt(value, f),
            Value::Float(value) => Display::fmt(value, f),
            Value::Utf8(value) => write!(f, "\"{}\"", value),
            Value::Array(values) => {
                f.write_str("[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    Display::fmt(value, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Utf8(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Utf8(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(values)
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Value::Array(values.iter().cloned().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(-1i8), Value::Int(-1));
        assert_eq!(Value::from(4294967295u32), Value::Int(4294967295));
        assert_eq!(Value::from(0.5f64), Value::Float(0.5));
        assert_eq!(Value::from("hodor"), Value::Utf8("hodor".to_string()));
        assert_eq!(
            Value::from(&[1i32, 2, 3][..]),
            Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Bool(false).kind(), "bool");
        assert_eq!(Value::Int(0).kind(), "integer");
        assert_eq!(Value::Float(0.0).kind(), "float");
        assert_eq!(Value::Utf8(String::new()).kind(), "string");
        assert_eq!(Value::Array(vec![]).kind(), "array");
    }

    #[test]
    fn test_display() {
        let value = Value::Array(vec![Value::Int(1), Value::Utf8("x".to_string())]);
        assert_eq!(value.to_string(), "[1, \"x\"]");
    }

    #[test]
    fn test_serde_untagged() {
        let value: Value = serde_json::from_str("[1, 2.5, \"x\", true]").unwrap();
        assert_eq!(
            value,
            Value::Array(vec![
                Value::Int(1),
                Value::Float(2.5),
                Value::Utf8("x".to_string()),
                Value::Bool(true),
            ])
        );
        assert_eq!(serde_json::to_string(&value).unwrap(), "[1,2.5,\"x\",true]");
    }
}
