// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

//! Definition-time diagnostics: invalid field specs, registry misuse.

use crate::Type;
use crate::error::diagnostic::Diagnostic;

/// A field spec with an empty key
pub fn field_key_required() -> Diagnostic {
    Diagnostic {
        code: "SCHEMA_001".to_string(),
        message: "field key is required".to_string(),
        label: Some("empty field key".to_string()),
        help: Some("every field must name the record key it encodes".to_string()),
        notes: vec![],
    }
}

/// An array field spec without an element type
pub fn array_element_type_required(key: &str) -> Diagnostic {
    Diagnostic {
        code: "SCHEMA_002".to_string(),
        message: format!("array field '{}' is missing its element type", key),
        label: Some("no value_type given".to_string()),
        help: Some("array fields must carry a value_type naming a scalar tag, e.g. float64".to_string()),
        notes: vec![],
    }
}

/// An array field spec whose element type is not a scalar tag
pub fn invalid_array_element_type(key: &str, element: Type) -> Diagnostic {
    Diagnostic {
        code: "SCHEMA_003".to_string(),
        message: format!("array field '{}' has invalid element type '{}'", key, element),
        label: Some("element type must be a scalar tag".to_string()),
        help: Some("arrays hold fixed-width scalars only; nested arrays and strings are not part of the wire format".to_string()),
        notes: vec![],
    }
}

/// A non-array field spec carrying a stray element type
pub fn unexpected_element_type(key: &str, ty: Type) -> Diagnostic {
    Diagnostic {
        code: "SCHEMA_004".to_string(),
        message: format!("field '{}' of type '{}' does not take a value_type", key, ty),
        label: Some("value_type only applies to array fields".to_string()),
        help: Some("drop the value_type, or change the field type to array".to_string()),
        notes: vec![],
    }
}

/// `define` called with a key the schema already holds
pub fn definition_already_exists(key: &str) -> Diagnostic {
    Diagnostic {
        code: "SCHEMA_005".to_string(),
        message: format!("definition '{}' already exists in this schema", key),
        label: Some("duplicate definition key".to_string()),
        help: Some("definition ids are part of the wire contract and are never reassigned; define a new key instead".to_string()),
        notes: vec![],
    }
}

/// The next definition id does not fit the schema's id codec
pub fn definition_capacity_exhausted(id_type: Type, capacity: u64) -> Diagnostic {
    Diagnostic {
        code: "SCHEMA_006".to_string(),
        message: format!("schema cannot hold more than {} definitions with id type '{}'", capacity, id_type),
        label: Some("definition id would overflow the id codec".to_string()),
        help: Some("construct the schema with a wider unsigned id type, e.g. uint16".to_string()),
        notes: vec![],
    }
}

/// Schema constructed with an id type that is not an unsigned integer tag
pub fn invalid_id_type(id_type: Type) -> Diagnostic {
    Diagnostic {
        code: "SCHEMA_007".to_string(),
        message: format!("'{}' cannot be used as a schema id type", id_type),
        label: Some("id type must be an unsigned integer tag".to_string()),
        help: Some("use uint8, uint16 or uint32".to_string()),
        notes: vec![],
    }
}

/// A schema spec document that does not parse
pub fn invalid_spec_document(reason: impl Into<String>) -> Diagnostic {
    Diagnostic {
        code: "SCHEMA_008".to_string(),
        message: format!("schema spec document does not parse: {}", reason.into()),
        label: Some("malformed schema spec".to_string()),
        help: Some("the document must deserialize into a SchemaSpec: id_type, order and a list of definitions".to_string()),
        notes: vec![],
    }
}
