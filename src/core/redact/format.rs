//! Output row rendering
//!
//! Redacted records are written as JSON with `", "` and `": "` separators and
//! non-ASCII text left unescaped; verdicts are written as `True` / `False`.

use crate::domain::{Result, ScrubError};
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Value};
use std::io;

/// JSON formatter with a space after every separator
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize redacted fields in their original order
pub fn render_redacted(fields: &Map<String, Value>) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    fields.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| ScrubError::Serialization(e.to_string()))
}

/// Text written to the `is_pii` column
pub fn render_verdict(is_pii: bool) -> &'static str {
    if is_pii {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_render_uses_spaced_separators() {
        let fields = object(json!({"name": "JXXX DXXX", "age": 34, "tags": ["a", "b"]}));
        assert_eq!(
            render_redacted(&fields).unwrap(),
            r#"{"name": "JXXX DXXX", "age": 34, "tags": ["a", "b"]}"#
        );
    }

    #[test]
    fn test_render_keeps_non_ascii() {
        let fields = object(json!({"city": "Bengaluru ಬೆಂಗಳೂರು"}));
        assert_eq!(
            render_redacted(&fields).unwrap(),
            r#"{"city": "Bengaluru ಬೆಂಗಳೂರು"}"#
        );
    }

    #[test]
    fn test_render_empty_object() {
        assert_eq!(render_redacted(&Map::new()).unwrap(), "{}");
    }

    #[test]
    fn test_render_verdict() {
        assert_eq!(render_verdict(true), "True");
        assert_eq!(render_verdict(false), "False");
    }
}
