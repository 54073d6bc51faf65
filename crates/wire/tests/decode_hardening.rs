// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

//! Decode-side hardening: corrupt, truncated and hostile buffers must fail
//! with a diagnostic, never panic, wrap or over-allocate.

use wirecast::{FieldSpec, Record, Schema, Type, Value};

fn chat_schema() -> Schema {
    let mut schema = Schema::new();
    schema
        .define("chat", &[
            FieldSpec::new("entity_id", Type::Uint32),
            FieldSpec::new("text", Type::Utf8),
            FieldSpec::array("tail", Type::Uint16),
        ])
        .unwrap();
    schema
}

#[test]
fn test_empty_buffer() {
    let err = chat_schema().decode(&[]).unwrap_err();
    assert_eq!(err.code(), "DECODE_001");
}

#[test]
fn test_truncated_scalar() {
    // id ok, entity_id cut short
    let err = chat_schema().decode(&[0x01, 0x00, 0x00]).unwrap_err();
    assert_eq!(err.code(), "DECODE_001");
}

#[test]
fn test_truncated_length_prefix() {
    let err = chat_schema()
        .decode(&[0x01, 0, 0, 0, 7, 0, 0])
        .unwrap_err();
    assert_eq!(err.code(), "DECODE_001");
}

#[test]
fn test_hostile_string_length_prefix() {
    // string claims 4 GiB of payload over an 8-byte buffer
    let buf = [0x01, 0, 0, 0, 7, 0xFF, 0xFF, 0xFF, 0xFF];
    let err = chat_schema().decode(&buf).unwrap_err();
    assert_eq!(err.code(), "DECODE_001");
}

#[test]
fn test_hostile_array_length_prefix() {
    let schema = chat_schema();
    let record = Record::from([
        ("entity_id".to_string(), Value::Int(1)),
        ("text".to_string(), Value::Utf8(String::new())),
        ("tail".to_string(), Value::Array(vec![])),
    ]);
    let mut packet = schema.encode("chat", &record).unwrap();
    let prefix_at = packet.len() - 4;
    // rewrite the trailing empty-array prefix to claim 2^32-1 elements
    packet[prefix_at..].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
    let err = schema.decode(&packet).unwrap_err();
    assert_eq!(err.code(), "DECODE_001");
}

#[test]
fn test_malformed_utf8_payload() {
    let buf = [0x01, 0, 0, 0, 7, 0, 0, 0, 2, 0xC3, 0x28, 0, 0, 0, 0];
    let err = chat_schema().decode(&buf).unwrap_err();
    assert_eq!(err.code(), "DECODE_002");
}

#[test]
fn test_decoded_values_survive_corrupt_tail() {
    // a packet valid through the string field but truncated in the array
    // must fail as a whole; partial records never escape
    let schema = chat_schema();
    let record = Record::from([
        ("entity_id".to_string(), Value::Int(5)),
        ("text".to_string(), Value::Utf8("ok".to_string())),
        ("tail".to_string(), Value::Array(vec![Value::Int(1), Value::Int(2)])),
    ]);
    let packet = schema.encode("chat", &record).unwrap();
    let err = schema.decode(&packet[..packet.len() - 1]).unwrap_err();
    assert_eq!(err.code(), "DECODE_001");
}
