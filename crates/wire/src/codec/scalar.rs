// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

use wirecast_type::error::diagnostic::{decode, value};
use wirecast_type::{Result, Type, Value, return_error};

use super::ByteOrder;

/// Fixed-width codec for one scalar tag. Stateless; the process holds one
/// instance per tag in the shared table and every field borrows it.
#[derive(Debug)]
pub(crate) struct ScalarCodec {
    ty: Type,
    size: usize,
}

impl ScalarCodec {
    pub(crate) fn new(ty: Type) -> Self {
        let Some(size) = ty.size() else {
            unreachable!("variable-length tag in scalar table")
        };
        Self { ty, size }
    }

    pub(crate) fn ty(&self) -> Type {
        self.ty
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Append the value's fixed-width encoding. Integers are range-checked
    /// against the tag, never truncated or wrapped.
    pub(crate) fn encode(&self, val: &Value, order: ByteOrder, out: &mut Vec<u8>) -> Result<()> {
        match self.ty {
            Type::Bool => {
                let Value::Bool(v) = val else {
                    return_error!(value::kind_mismatch(self.ty, val.kind()));
                };
                out.push(*v as u8);
            }
            Type::Int8 => {
                let v = self.expect_int(val)?;
                match i8::try_from(v) {
                    Ok(v) => put(out, order, v.to_be_bytes(), v.to_le_bytes()),
                    Err(_) => return_error!(value::integer_out_of_range(self.ty, v)),
                }
            }
            Type::Int16 => {
                let v = self.expect_int(val)?;
                match i16::try_from(v) {
                    Ok(v) => put(out, order, v.to_be_bytes(), v.to_le_bytes()),
                    Err(_) => return_error!(value::integer_out_of_range(self.ty, v)),
                }
            }
            Type::Int32 => {
                let v = self.expect_int(val)?;
                match i32::try_from(v) {
                    Ok(v) => put(out, order, v.to_be_bytes(), v.to_le_bytes()),
                    Err(_) => return_error!(value::integer_out_of_range(self.ty, v)),
                }
            }
            Type::Uint8 => {
                let v = self.expect_int(val)?;
                match u8::try_from(v) {
                    Ok(v) => put(out, order, v.to_be_bytes(), v.to_le_bytes()),
                    Err(_) => return_error!(value::integer_out_of_range(self.ty, v)),
                }
            }
            Type::Uint16 => {
                let v = self.expect_int(val)?;
                match u16::try_from(v) {
                    Ok(v) => put(out, order, v.to_be_bytes(), v.to_le_bytes()),
                    Err(_) => return_error!(value::integer_out_of_range(self.ty, v)),
                }
            }
            Type::Uint32 => {
                let v = self.expect_int(val)?;
                match u32::try_from(v) {
                    Ok(v) => put(out, order, v.to_be_bytes(), v.to_le_bytes()),
                    Err(_) => return_error!(value::integer_out_of_range(self.ty, v)),
                }
            }
            Type::Float32 => {
                let v = self.expect_float(val)?;
                let narrowed = v as f32;
                // A finite f64 that rounds to infinity does not fit float32.
                if v.is_finite() && narrowed.is_infinite() {
                    return_error!(value::float32_out_of_range(v));
                }
                put(out, order, narrowed.to_be_bytes(), narrowed.to_le_bytes());
            }
            Type::Float64 => {
                let v = self.expect_float(val)?;
                put(out, order, v.to_be_bytes(), v.to_le_bytes());
            }
            Type::Utf8 | Type::Array => {
                unreachable!("variable-length tag in scalar codec")
            }
        }
        Ok(())
    }

    /// Decode one fixed-width value at `offset`, returning it with the
    /// consumed byte count. Any NaN payload decodes as NaN; bit patterns
    /// are not canonicalized.
    pub(crate) fn decode(&self, buf: &[u8], offset: usize, order: ByteOrder) -> Result<(Value, usize)> {
        let Some(bytes) = buf.get(offset..offset + self.size) else {
            return_error!(decode::buffer_exhausted(self.size, buf.len().saturating_sub(offset)));
        };
        let val = match self.ty {
            Type::Bool => Value::Bool(bytes[0] != 0),
            Type::Int8 => Value::Int(bytes[0] as i8 as i64),
            Type::Int16 => {
                let bytes: [u8; 2] = bytes.try_into().unwrap();
                Value::Int(match order {
                    ByteOrder::Big => i16::from_be_bytes(bytes),
                    ByteOrder::Little => i16::from_le_bytes(bytes),
                } as i64)
            }
            Type::Int32 => {
                let bytes: [u8; 4] = bytes.try_into().unwrap();
                Value::Int(match order {
                    ByteOrder::Big => i32::from_be_bytes(bytes),
                    ByteOrder::Little => i32::from_le_bytes(bytes),
                } as i64)
            }
            Type::Uint8 => Value::Int(bytes[0] as i64),
            Type::Uint16 => {
                let bytes: [u8; 2] = bytes.try_into().unwrap();
                Value::Int(match order {
                    ByteOrder::Big => u16::from_be_bytes(bytes),
                    ByteOrder::Little => u16::from_le_bytes(bytes),
                } as i64)
            }
            Type::Uint32 => {
                let bytes: [u8; 4] = bytes.try_into().unwrap();
                Value::Int(match order {
                    ByteOrder::Big => u32::from_be_bytes(bytes),
                    ByteOrder::Little => u32::from_le_bytes(bytes),
                } as i64)
            }
            Type::Float32 => {
                let bytes: [u8; 4] = bytes.try_into().unwrap();
                Value::Float(match order {
                    ByteOrder::Big => f32::from_be_bytes(bytes),
                    ByteOrder::Little => f32::from_le_bytes(bytes),
                } as f64)
            }
            Type::Float64 => {
                let bytes: [u8; 8] = bytes.try_into().unwrap();
                Value::Float(match order {
                    ByteOrder::Big => f64::from_be_bytes(bytes),
                    ByteOrder::Little => f64::from_le_bytes(bytes),
                })
            }
            Type::Utf8 | Type::Array => {
                unreachable!("variable-length tag in scalar codec")
            }
        };
        Ok((val, self.size))
    }

    fn expect_int(&self, val: &Value) -> Result<i64> {
        match val {
            Value::Int(v) => Ok(*v),
            other => return_error!(value::kind_mismatch(self.ty, other.kind())),
        }
    }

    fn expect_float(&self, val: &Value) -> Result<f64> {
        match val {
            Value::Float(v) => Ok(*v),
            // Integers are accepted for float fields, as every schema
            // language this format interoperates with does.
            Value::Int(v) => Ok(*v as f64),
            other => return_error!(value::kind_mismatch(self.ty, other.kind())),
        }
    }
}

fn put<const N: usize>(out: &mut Vec<u8>, order: ByteOrder, be: [u8; N], le: [u8; N]) {
    match order {
        ByteOrder::Big => out.extend_from_slice(&be),
        ByteOrder::Little => out.extend_from_slice(&le),
    }
}
