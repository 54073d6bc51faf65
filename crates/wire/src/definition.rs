// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

use wirecast_type::error::diagnostic::value;
use wirecast_type::{Record, Result, return_error};

use crate::codec::ByteOrder;
use crate::field::{Field, FieldSpec};

/// An ordered group of fields describing one record shape and its byte
/// layout. Field order is the wire contract: there are no per-field tags,
/// so both peers must walk the same fields in the same order.
///
/// Definitions are grouped into a [`crate::Schema`], which assigns `id` and
/// `key`; standalone definitions (no id prefix) leave both unset.
#[derive(Debug, Clone)]
pub struct Definition {
    pub(crate) fields: Vec<Field>,
    pub(crate) id: Option<u64>,
    pub(crate) key: Option<String>,
    pub(crate) order: ByteOrder,
}

impl Definition {
    /// A standalone big-endian definition.
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            id: None,
            key: None,
            order: ByteOrder::default(),
        }
    }

    /// Build a standalone definition from field specs, validating each.
    pub fn from_specs(specs: &[FieldSpec]) -> Result<Self> {
        let fields = specs.iter().map(Field::from_spec).collect::<Result<Vec<_>>>()?;
        Ok(Self::new(fields))
    }

    /// Switch the byte order used for every multi-byte encoding of this
    /// definition.
    pub fn with_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn to_specs(&self) -> Vec<FieldSpec> {
        self.fields.iter().map(Field::to_spec).collect()
    }

    /// Encode a record: each field's value in declared order, no
    /// separators, no padding, no record-length prefix. A record missing a
    /// defined key fails fast.
    pub fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.encode_into(record, &mut out)?;
        Ok(out)
    }

    pub(crate) fn encode_into(&self, record: &Record, out: &mut Vec<u8>) -> Result<()> {
        for field in &self.fields {
            let Some(val) = record.get(field.key()) else {
                return_error!(value::missing_field(field.key()));
            };
            field.codec.encode(val, self.order, out)?;
        }
        Ok(())
    }

    /// Decode a record from the start of `buf`.
    pub fn decode(&self, buf: &[u8]) -> Result<Record> {
        self.decode_at(buf, 0).map(|(record, _)| record)
    }

    /// Decode a record at `offset`, returning it with the number of bytes
    /// consumed. The cursor advances by each field codec's reported count,
    /// fixed for scalars and prefix-driven for arrays and strings.
    pub fn decode_at(&self, buf: &[u8], offset: usize) -> Result<(Record, usize)> {
        let mut record = Record::with_capacity(self.fields.len());
        let mut cursor = offset;
        for field in &self.fields {
            let (val, consumed) = field.codec.decode(buf, cursor, self.order)?;
            record.insert(field.key().to_string(), val);
            cursor += consumed;
        }
        Ok((record, cursor - offset))
    }
}
