// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

use serde::{Deserialize, Serialize};
use wirecast_type::error::diagnostic::schema;
use wirecast_type::{Result, Type, Value, return_error};

use crate::codec::{self, ByteOrder, ScalarCodec};

/// One field of a definition as it appears in a schema document:
/// `{"key": "health", "type": "int16"}`, with `value_type` naming the
/// element tag for array fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub key: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<Type>,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>, ty: Type) -> Self {
        Self {
            key: key.into(),
            ty,
            value_type: None,
        }
    }

    pub fn array(key: impl Into<String>, value_type: Type) -> Self {
        Self {
            key: key.into(),
            ty: Type::Array,
            value_type: Some(value_type),
        }
    }
}

/// A validated field: a record key bound to its resolved codec.
///
/// Construction is the single validation point. A field that exists is
/// correct, and encode/decode trust the binding for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Field {
    key: String,
    pub(crate) codec: FieldCodec,
}

/// The codec a field resolved to. Scalar and array fields borrow the
/// process-wide codec singletons.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FieldCodec {
    Scalar(&'static ScalarCodec),
    Array(&'static ScalarCodec),
    Utf8,
}

impl Field {
    pub fn new(key: impl Into<String>, ty: Type) -> Result<Self> {
        Self::resolve(key.into(), ty, None)
    }

    pub fn array(key: impl Into<String>, value_type: Type) -> Result<Self> {
        Self::resolve(key.into(), Type::Array, Some(value_type))
    }

    pub fn from_spec(spec: &FieldSpec) -> Result<Self> {
        Self::resolve(spec.key.clone(), spec.ty, spec.value_type)
    }

    fn resolve(key: String, ty: Type, value_type: Option<Type>) -> Result<Self> {
        if key.is_empty() {
            return_error!(schema::field_key_required());
        }
        let codec = match ty {
            Type::Array => {
                let Some(element) = value_type else {
                    return_error!(schema::array_element_type_required(&key));
                };
                match codec::scalar_codec(element) {
                    Some(element) => FieldCodec::Array(element),
                    None => return_error!(schema::invalid_array_element_type(&key, element)),
                }
            }
            Type::Utf8 => {
                if let Some(element) = value_type {
                    return_error!(schema::unexpected_element_type(&key, element));
                }
                FieldCodec::Utf8
            }
            scalar => {
                if let Some(element) = value_type {
                    return_error!(schema::unexpected_element_type(&key, element));
                }
                match codec::scalar_codec(scalar) {
                    Some(codec) => FieldCodec::Scalar(codec),
                    None => unreachable!("every remaining tag is scalar"),
                }
            }
        };
        Ok(Self { key, codec })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The field's type tag.
    pub fn ty(&self) -> Type {
        match self.codec {
            FieldCodec::Scalar(codec) => codec.ty(),
            FieldCodec::Array(_) => Type::Array,
            FieldCodec::Utf8 => Type::Utf8,
        }
    }

    /// The element tag for array fields.
    pub fn value_type(&self) -> Option<Type> {
        match self.codec {
            FieldCodec::Array(element) => Some(element.ty()),
            _ => None,
        }
    }

    pub fn to_spec(&self) -> FieldSpec {
        FieldSpec {
            key: self.key.clone(),
            ty: self.ty(),
            value_type: self.value_type(),
        }
    }
}

impl FieldCodec {
    pub(crate) fn encode(&self, val: &Value, order: ByteOrder, out: &mut Vec<u8>) -> Result<()> {
        match self {
            FieldCodec::Scalar(codec) => codec.encode(val, order, out),
            FieldCodec::Array(element) => codec::array::encode(element, val, order, out),
            FieldCodec::Utf8 => codec::utf8::encode(val, order, out),
        }
    }

    pub(crate) fn decode(&self, buf: &[u8], offset: usize, order: ByteOrder) -> Result<(Value, usize)> {
        match self {
            FieldCodec::Scalar(codec) => codec.decode(buf, offset, order),
            FieldCodec::Array(element) => codec::array::decode(element, buf, offset, order),
            FieldCodec::Utf8 => codec::utf8::decode(buf, offset, order),
        }
    }
}
