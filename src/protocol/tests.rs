//! Tests for the provider protocol

use super::*;
use crate::error::Error;
use crate::schema::{ColumnDescriptor, TypeTag};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::io::{self, Cursor, Write};
use std::path::PathBuf;

// ============================================================================
// Request Reader
// ============================================================================

#[test]
fn test_read_request() {
    let reader = RequestReader::new();
    let request = reader
        .read_from(Cursor::new(r#"{"file": "/tmp/data.json"}"#))
        .unwrap();

    assert_eq!(request.path, PathBuf::from("/tmp/data.json"));
}

#[test]
fn test_read_request_ignores_extra_fields() {
    let reader = RequestReader::new();
    let request = reader
        .read_from(Cursor::new(r#"{"other": "x", "file": "data.json", "n": "1"}"#))
        .unwrap();

    assert_eq!(request.path, PathBuf::from("data.json"));
}

#[test]
fn test_read_request_custom_key() {
    let reader = RequestReader::new().with_path_key("source");
    assert_eq!(reader.path_key(), "source");

    let request = reader.parse(r#"{"source": "a.json"}"#).unwrap();
    assert_eq!(request.path, PathBuf::from("a.json"));

    let err = reader.parse(r#"{"file": "a.json"}"#).unwrap_err();
    assert!(err.to_string().contains("missing field 'source'"));
}

#[test]
fn test_read_request_invalid_json() {
    let err = RequestReader::new().parse("{file:").unwrap_err();
    assert!(matches!(err, Error::MalformedRequest { .. }));
    assert!(err.to_string().contains("invalid JSON"));
}

#[test]
fn test_read_request_empty_input() {
    let err = RequestReader::new()
        .read_from(Cursor::new(""))
        .unwrap_err();
    assert!(matches!(err, Error::MalformedRequest { .. }));
}

#[test]
fn test_read_request_invalid_utf8() {
    let err = RequestReader::new()
        .read_from(Cursor::new(b"{\xff}".to_vec()))
        .unwrap_err();
    assert!(matches!(err, Error::MalformedRequest { .. }));
    assert!(err.to_string().contains("invalid JSON"));
}

#[test]
fn test_read_request_utf8_path() {
    let request = RequestReader::new()
        .read_from(Cursor::new("{\"file\": \"/tmp/d\u{e9}j\u{e0}.json\"}"))
        .unwrap();
    assert_eq!(request.path, PathBuf::from("/tmp/d\u{e9}j\u{e0}.json"));
}

#[test]
fn test_read_request_not_an_object() {
    let err = RequestReader::new().parse(r#"["data.json"]"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed request: expected object, found array"
    );
}

#[test]
fn test_read_request_missing_field() {
    let err = RequestReader::new().parse(r#"{"path": "a.json"}"#).unwrap_err();
    assert_eq!(err.to_string(), "Malformed request: missing field 'file'");
}

#[test]
fn test_read_request_field_not_string() {
    let err = RequestReader::new().parse(r#"{"file": 12}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed request: field 'file' must be a string, found number"
    );
}

#[test]
fn test_read_request_stdin_failure() {
    struct Broken;

    impl io::Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "stdin closed"))
        }
    }

    let err = RequestReader::new().read_from(Broken).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

// ============================================================================
// Formatter
// ============================================================================

#[test]
fn test_spaced_separators() {
    let value = json!({"a": 1, "b": [1, 2, 3], "c": {}});
    assert_eq!(
        to_spaced_string(&value).unwrap(),
        r#"{"a": 1, "b": [1, 2, 3], "c": {}}"#
    );
}

#[test]
fn test_empty_containers() {
    assert_eq!(to_spaced_string(&json!([])).unwrap(), "[]");
    assert_eq!(to_spaced_string(&json!({})).unwrap(), "{}");
}

#[test]
fn test_non_ascii_is_escaped() {
    assert_eq!(to_spaced_string("caf\u{e9}").unwrap(), r#""caf\u00e9""#);
    // Outside the BMP: surrogate pair
    assert_eq!(to_spaced_string("\u{1f600}").unwrap(), r#""\ud83d\ude00""#);
    assert_eq!(to_spaced_string("a\u{7f}b").unwrap(), r#""a\u007fb""#);
}

#[test]
fn test_standard_escapes_kept() {
    assert_eq!(
        to_spaced_string("say \"hi\"\n\\").unwrap(),
        r#""say \"hi\"\n\\""#
    );
}

#[test]
fn test_formatter_output_parses_back() {
    let value = json!({"name": "Zoë", "list": [1.5, true, null, "日本"]});
    let text = to_spaced_string(&value).unwrap();

    assert!(text.is_ascii());
    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, value);
}

#[test]
fn test_numbers_written_as_parsed() {
    let value: Value = serde_json::from_str(r#"{"a": -0, "b": 1e400, "c": 123456789012345678901234567890}"#).unwrap();
    let text = to_spaced_string(&value).unwrap();
    assert_eq!(text, r#"{"a": -0, "b": 1e400, "c": 123456789012345678901234567890}"#);
}

// ============================================================================
// Response Writer
// ============================================================================

fn sample_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("age", TypeTag::Int),
        ColumnDescriptor::new("active", TypeTag::Boolean),
    ]
}

#[test]
fn test_render_response() {
    let rendered = ResponseWriter::new().render(&sample_columns()).unwrap();
    assert_eq!(
        rendered,
        r#"{"columns": "[{\"name\": \"age\", \"type\": \"int\"}, {\"name\": \"active\", \"type\": \"boolean\"}]"}"#
    );
}

#[test]
fn test_render_empty_columns() {
    let rendered = ResponseWriter::new().render(&[]).unwrap();
    assert_eq!(rendered, r#"{"columns": "[]"}"#);
}

#[test]
fn test_response_columns_value_is_a_string() {
    let rendered = ResponseWriter::new().render(&sample_columns()).unwrap();
    let response: Value = serde_json::from_str(&rendered).unwrap();

    let encoded = response["columns"].as_str().unwrap();
    let columns: Vec<ColumnDescriptor> = serde_json::from_str(encoded).unwrap();
    assert_eq!(columns, sample_columns());
}

#[test]
fn test_render_custom_key() {
    let writer = ResponseWriter::new().with_columns_key("schema");
    assert_eq!(writer.columns_key(), "schema");

    let rendered = writer.render(&[]).unwrap();
    assert_eq!(rendered, r#"{"schema": "[]"}"#);
}

#[test]
fn test_write_appends_newline() {
    let mut out = Vec::new();
    ResponseWriter::new()
        .write_to(&mut out, &sample_columns())
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("}\n"));
    assert_eq!(text.matches('\n').count(), 1);
}

#[test]
fn test_write_failure_is_io_error() {
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let err = ResponseWriter::new()
        .write_to(Broken, &sample_columns())
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
