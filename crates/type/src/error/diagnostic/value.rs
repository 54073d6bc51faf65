// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

//! Encode-time value diagnostics: range violations and kind mismatches.

use crate::Type;
use crate::error::diagnostic::{Diagnostic, util::value_range};

/// Integer outside the representable range of its tag
pub fn integer_out_of_range(ty: Type, value: i64) -> Diagnostic {
    Diagnostic {
        code: "VALUE_001".to_string(),
        message: format!("{} is out of range for type '{}'", value, ty),
        label: Some(format!("valid range is {}", value_range(ty))),
        help: Some("values are never truncated or wrapped; pick a wider integer tag or fix the value".to_string()),
        notes: vec![],
    }
}

/// Finite float that overflows float32's finite range
pub fn float32_out_of_range(value: f64) -> Diagnostic {
    Diagnostic {
        code: "VALUE_002".to_string(),
        message: format!("{} is out of range for type 'float32'", value),
        label: Some(format!("valid range is {}", value_range(Type::Float32))),
        help: Some("use float64 for values of this magnitude".to_string()),
        notes: vec!["infinities and NaN are encoded transparently; only finite overflow fails".to_string()],
    }
}

/// Record value of the wrong kind for the field's tag
pub fn kind_mismatch(expected: Type, found: &str) -> Diagnostic {
    Diagnostic {
        code: "VALUE_003".to_string(),
        message: format!("expected a {} value for type '{}', found {}", category(expected), expected, found),
        label: Some("value kind does not match the field type".to_string()),
        help: None,
        notes: vec![],
    }
}

/// Record missing a key the definition requires
pub fn missing_field(key: &str) -> Diagnostic {
    Diagnostic {
        code: "VALUE_004".to_string(),
        message: format!("record is missing field '{}'", key),
        label: Some("every defined field must be present".to_string()),
        help: Some("fields are positional on the wire; absent values cannot be skipped or defaulted".to_string()),
        notes: vec![],
    }
}

/// Sequence longer than a 4-byte length prefix can carry
pub fn sequence_too_long(len: usize) -> Diagnostic {
    Diagnostic {
        code: "VALUE_005".to_string(),
        message: format!("sequence of length {} exceeds the 4-byte length prefix", len),
        label: Some("length prefix is an unsigned 32-bit count".to_string()),
        help: None,
        notes: vec![],
    }
}

fn category(ty: Type) -> &'static str {
    match ty {
        Type::Bool => "bool",
        Type::Utf8 => "string",
        Type::Array => "array",
        Type::Float32 | Type::Float64 => "numeric",
        _ => "integer",
    }
}
