// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};
use wirecast_type::error::diagnostic::{lookup, schema};
use wirecast_type::{Record, Result, Type, Value, return_error};

use crate::codec::{ByteOrder, ScalarCodec, scalar_codec};
use crate::definition::Definition;
use crate::field::{Field, FieldSpec};

/// A registry multiplexing many definitions over one byte stream.
///
/// Every packet is prefixed with the definition's numeric id, encoded with
/// the schema's id codec (one unsigned byte unless constructed with a wider
/// tag), so the decoder can dispatch without being told the type. Ids start
/// at 1 and only ever grow; the key to id mapping is part of the wire
/// contract and both peers must issue the same `define` calls in the same
/// order.
///
/// Build once, then share: `define` takes `&mut self` while encode/decode
/// take `&self`, so the borrow checker enforces the single-writer,
/// many-reader discipline.
#[derive(Debug, Clone)]
pub struct Schema {
    id_type: Type,
    id_codec: &'static ScalarCodec,
    order: ByteOrder,
    definitions: HashMap<String, Arc<Definition>>,
    definitions_by_id: HashMap<u64, Arc<Definition>>,
    next_id: u64,
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl Schema {
    /// A big-endian schema with the default 1-byte unsigned id codec
    /// (ids 1–255).
    pub fn new() -> Self {
        match Self::with_id_type(Type::Uint8) {
            Ok(schema) => schema,
            Err(_) => unreachable!("uint8 is a valid id type"),
        }
    }

    /// A schema whose id prefix uses the given unsigned integer tag. The
    /// tag's width bounds how many definitions the schema can hold.
    pub fn with_id_type(id_type: Type) -> Result<Self> {
        if !id_type.is_unsigned_integer() {
            return_error!(schema::invalid_id_type(id_type));
        }
        let Some(id_codec) = scalar_codec(id_type) else {
            unreachable!("unsigned integer tags are scalar")
        };
        Ok(Self {
            id_type,
            id_codec,
            order: ByteOrder::default(),
            definitions: HashMap::new(),
            definitions_by_id: HashMap::new(),
            next_id: 1,
        })
    }

    /// Switch the byte order used for the id prefix and for definitions
    /// created through [`Schema::define`] from here on.
    pub fn with_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    pub fn id_type(&self) -> Type {
        self.id_type
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn definition(&self, key: &str) -> Option<&Arc<Definition>> {
        self.definitions.get(key)
    }

    pub fn definition_by_id(&self, id: u64) -> Option<&Arc<Definition>> {
        self.definitions_by_id.get(&id)
    }

    /// Iterate the registered definitions in unspecified order.
    pub fn iter_definitions(&self) -> impl Iterator<Item = &Arc<Definition>> {
        self.definitions_by_id.values()
    }

    /// Register a new packet shape under `key` and assign it the next id.
    ///
    /// Ids start at 1, strictly increment, and are never reused or
    /// renumbered; id stability across the lifetime of a connection is
    /// what lets peers keep decoding while one side keeps defining.
    /// Redefining an existing key is rejected: replacing the shape behind a
    /// live id would silently fork the wire contract.
    pub fn define(&mut self, key: impl Into<String>, specs: &[FieldSpec]) -> Result<Arc<Definition>> {
        let key = key.into();
        if self.definitions.contains_key(&key) {
            return_error!(schema::definition_already_exists(&key));
        }
        let id = self.next_id;
        if id > id_capacity(self.id_type) {
            return_error!(schema::definition_capacity_exhausted(
                self.id_type,
                id_capacity(self.id_type)
            ));
        }
        let fields = specs.iter().map(Field::from_spec).collect::<Result<Vec<_>>>()?;
        let definition = Arc::new(Definition {
            fields,
            id: Some(id),
            key: Some(key.clone()),
            order: self.order,
        });
        self.next_id += 1;
        self.definitions.insert(key.clone(), Arc::clone(&definition));
        self.definitions_by_id.insert(id, Arc::clone(&definition));
        debug!(key = %key, id, "defined packet");
        Ok(definition)
    }

    /// Encode a record under a defined key: the definition's id through the
    /// id codec, then the record bytes.
    pub fn encode(&self, key: &str, record: &Record) -> Result<Vec<u8>> {
        let Some(definition) = self.definitions.get(key) else {
            return_error!(lookup::key_not_defined(key));
        };
        let Some(id) = definition.id() else {
            unreachable!("schema-owned definitions always carry an id")
        };
        let mut out = Vec::new();
        self.id_codec.encode(&Value::Int(id as i64), self.order, &mut out)?;
        definition.encode_into(record, &mut out)?;
        trace!(key = %key, id, bytes = out.len(), "encoded packet");
        Ok(out)
    }

    /// Decode a packet: read the id from the front of the buffer, dispatch
    /// to the definition it names, decode the rest. An id this schema never
    /// assigned means the peer was built against a different schema.
    pub fn decode(&self, buf: &[u8]) -> Result<Record> {
        let (id, consumed) = self.id_codec.decode(buf, 0, self.order)?;
        let Value::Int(id) = id else {
            unreachable!("unsigned id codecs decode to integers")
        };
        let id = id as u64;
        let Some(definition) = self.definitions_by_id.get(&id) else {
            return_error!(lookup::id_not_defined(id));
        };
        let (record, bytes) = definition.decode_at(buf, consumed)?;
        trace!(id, bytes = consumed + bytes, "decoded packet");
        Ok(record)
    }
}

fn id_capacity(id_type: Type) -> u64 {
    match id_type {
        Type::Uint8 => u8::MAX as u64,
        Type::Uint16 => u16::MAX as u64,
        Type::Uint32 => u32::MAX as u64,
        _ => unreachable!("id types are unsigned integer tags"),
    }
}
