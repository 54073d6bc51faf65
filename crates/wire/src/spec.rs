// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

//! Declarative schema documents. Peers that cannot share `define` calls
//! (different languages, different processes) share one spec document and
//! build identical schemas from it; ids are assigned in declaration order.

use serde::{Deserialize, Serialize};
use wirecast_type::error::diagnostic::schema as diagnostic;
use wirecast_type::{Result, Type, return_error};

use crate::codec::ByteOrder;
use crate::field::FieldSpec;
use crate::schema::Schema;

/// One named packet shape in a schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionSpec {
    pub key: String,
    pub fields: Vec<FieldSpec>,
}

/// A whole schema as data: id codec tag, byte order, and the definitions
/// in id order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSpec {
    #[serde(default = "default_id_type")]
    pub id_type: Type,
    #[serde(default)]
    pub order: ByteOrder,
    pub definitions: Vec<DefinitionSpec>,
}

fn default_id_type() -> Type {
    Type::Uint8
}

impl Schema {
    /// Build a schema from a spec document, defining every packet in
    /// declaration order so ids match on every peer that loads the same
    /// document.
    pub fn from_spec(spec: &SchemaSpec) -> Result<Self> {
        let mut schema = Self::with_id_type(spec.id_type)?.with_order(spec.order);
        for definition in &spec.definitions {
            schema.define(definition.key.clone(), &definition.fields)?;
        }
        Ok(schema)
    }

    /// Build a schema from a JSON spec document.
    pub fn from_json(text: &str) -> Result<Self> {
        let spec: SchemaSpec = match serde_json::from_str(text) {
            Ok(spec) => spec,
            Err(err) => return_error!(diagnostic::invalid_spec_document(err.to_string())),
        };
        Self::from_spec(&spec)
    }

    /// The schema as a spec document, definitions in id order. Loading the
    /// result on another peer reproduces this schema exactly.
    pub fn to_spec(&self) -> SchemaSpec {
        let mut keys: Vec<_> = self
            .iter_definitions()
            .map(|definition| (definition.id(), definition))
            .collect();
        keys.sort_by_key(|(id, _)| *id);
        SchemaSpec {
            id_type: self.id_type(),
            order: self.order(),
            definitions: keys
                .into_iter()
                .map(|(_, definition)| DefinitionSpec {
                    key: definition.key().unwrap_or_default().to_string(),
                    fields: definition.to_specs(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use wirecast_type::{Record, Type, Value};

    use super::{DefinitionSpec, SchemaSpec};
    use crate::codec::ByteOrder;
    use crate::field::FieldSpec;
    use crate::schema::Schema;

    const DOCUMENT: &str = r#"{
        "id_type": "uint8",
        "order": "big",
        "definitions": [
            {
                "key": "spawn",
                "fields": [
                    {"key": "entity_id", "type": "uint32"},
                    {"key": "x", "type": "float64"},
                    {"key": "y", "type": "float64"},
                    {"key": "health", "type": "int16"}
                ]
            },
            {
                "key": "chat",
                "fields": [
                    {"key": "entity_id", "type": "uint32"},
                    {"key": "text", "type": "string"}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_from_json_assigns_ids_in_declaration_order() {
        let schema = Schema::from_json(DOCUMENT).unwrap();
        assert_eq!(schema.definition("spawn").unwrap().id(), Some(1));
        assert_eq!(schema.definition("chat").unwrap().id(), Some(2));
    }

    #[test]
    fn test_loaded_schema_encodes() {
        let schema = Schema::from_json(DOCUMENT).unwrap();
        let record = Record::from([
            ("entity_id".to_string(), Value::Int(9)),
            ("text".to_string(), Value::Utf8("hello".to_string())),
        ]);
        let packet = schema.encode("chat", &record).unwrap();
        assert_eq!(packet[0], 2);
        assert_eq!(schema.decode(&packet).unwrap(), record);
    }

    #[test]
    fn test_malformed_document_rejected() {
        let err = Schema::from_json("{\"definitions\": 42}").unwrap_err();
        assert_eq!(err.code(), "SCHEMA_008");
    }

    #[test]
    fn test_spec_round_trip() {
        let spec = SchemaSpec {
            id_type: Type::Uint16,
            order: ByteOrder::Little,
            definitions: vec![DefinitionSpec {
                key: "spawn".to_string(),
                fields: vec![
                    FieldSpec::new("entity_id", Type::Uint32),
                    FieldSpec::array("points", Type::Float32),
                ],
            }],
        };
        let schema = Schema::from_spec(&spec).unwrap();
        assert_eq!(schema.to_spec(), spec);
    }

    #[test]
    fn test_defaults_apply() {
        let schema = Schema::from_json(r#"{"definitions": []}"#).unwrap();
        assert_eq!(schema.id_type(), Type::Uint8);
        assert_eq!(schema.order(), ByteOrder::Big);
    }
}
