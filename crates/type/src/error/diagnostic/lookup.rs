// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

//! Registry lookup diagnostics. An unknown id on decode usually means the
//! two peers were built against different schema revisions.

use crate::error::diagnostic::Diagnostic;

/// Encode requested for a key the schema never defined
pub fn key_not_defined(key: &str) -> Diagnostic {
    Diagnostic {
        code: "LOOKUP_001".to_string(),
        message: format!("key '{}' is not defined in schema", key),
        label: Some("unknown definition key".to_string()),
        help: Some("define the key on this schema before encoding records with it".to_string()),
        notes: vec![],
    }
}

/// Decoded packet carries an id the schema never assigned
pub fn id_not_defined(id: u64) -> Diagnostic {
    Diagnostic {
        code: "LOOKUP_002".to_string(),
        message: format!("id '{}' is not defined in schema", id),
        label: Some("unknown definition id".to_string()),
        help: Some("both peers must define the same packets in the same order; this packet was produced by a schema this side does not have".to_string()),
        notes: vec![],
    }
}
