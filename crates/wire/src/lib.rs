// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

//! Schema-driven binary codec for structured key/value records.
//!
//! A [`Schema`] holds an ordered registry of packet [`Definition`]s. Each
//! definition lists typed fields; encoding walks the fields in declared
//! order and packs each value with no per-field tags, separators or
//! padding, so two peers sharing the same schema agree on every byte.
//! Every packet a schema encodes is prefixed with the definition's numeric
//! id, which is how the decoder dispatches without being told the type.
//!
//! ```
//! use wirecast::{FieldSpec, Schema, Type, Value};
//!
//! let mut schema = Schema::new();
//! schema
//!     .define("spawn", &[
//!         FieldSpec::new("entity_id", Type::Uint32),
//!         FieldSpec::new("x", Type::Float64),
//!         FieldSpec::new("y", Type::Float64),
//!         FieldSpec::new("health", Type::Int16),
//!     ])
//!     .unwrap();
//!
//! let record = wirecast::Record::from([
//!     ("entity_id".to_string(), Value::from(1u32)),
//!     ("x".to_string(), Value::from(0.5)),
//!     ("y".to_string(), Value::from(-1.5)),
//!     ("health".to_string(), Value::from(100i16)),
//! ]);
//!
//! let packet = schema.encode("spawn", &record).unwrap();
//! assert_eq!(schema.decode(&packet).unwrap(), record);
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use codec::ByteOrder;
pub use definition::Definition;
pub use field::{Field, FieldSpec};
pub use schema::Schema;
pub use spec::{DefinitionSpec, SchemaSpec};
pub use wirecast_type::{Diagnostic, Error, Record, Result, Type, Value};

mod codec;
mod definition;
mod field;
mod schema;
mod spec;
