// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

//! Decode-time diagnostics for truncated or corrupt buffers.

use crate::error::diagnostic::Diagnostic;

/// Buffer ends before the bytes a codec (or a length prefix) claims
pub fn buffer_exhausted(needed: usize, remaining: usize) -> Diagnostic {
    Diagnostic {
        code: "DECODE_001".to_string(),
        message: format!("buffer exhausted: needed {} bytes, {} remaining", needed, remaining),
        label: Some("truncated or corrupt input".to_string()),
        help: Some("length prefixes are checked against the remaining buffer before anything is allocated; a mismatch means the packet was cut short or the schemas disagree".to_string()),
        notes: vec![],
    }
}

/// String payload that is not valid UTF-8
pub fn invalid_utf8(offset: usize) -> Diagnostic {
    Diagnostic {
        code: "DECODE_002".to_string(),
        message: format!("string payload at offset {} is not valid UTF-8", offset),
        label: Some("malformed UTF-8 payload".to_string()),
        help: None,
        notes: vec![],
    }
}
