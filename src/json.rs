//! The JSON encoding: a flat object whose values are always strings.
//!
//! Encoding goes through a hand-rolled `Serialize` over the ordered
//! entry list, so fields land in declaration order without pulling in
//! an order-preserving map. Decoding is lenient about bare number and
//! boolean scalars but rejects null, arrays, and nested objects.

use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::SlotcfgError;

struct OrderedEntries<'a>(&'a [(String, String)]);

impl Serialize for OrderedEntries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Writes the entries as a tab-indented object, no trailing newline.
pub(crate) fn encode(entries: &[(String, String)]) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    OrderedEntries(entries).serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde::ser::Error::custom)
}

pub(crate) fn decode(content: &str, path: &Path) -> Result<Vec<(String, String)>, SlotcfgError> {
    let object: Map<String, Value> =
        serde_json::from_str(content).map_err(|e| SlotcfgError::JsonError {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut entries = Vec::with_capacity(object.len());
    for (key, value) in object {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                return Err(SlotcfgError::NonScalarValue {
                    path: path.to_path_buf(),
                    key,
                });
            }
        };
        entries.push((key, text));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("/test/settings")
    }

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn encode_is_tab_indented_in_declaration_order() {
        let text = encode(&pairs(&[
            ("Number", "0"),
            ("Text", ""),
            ("Boolean", "false"),
        ]))
        .unwrap();
        assert_eq!(
            text,
            "{\n\t\"Number\": \"0\",\n\t\"Text\": \"\",\n\t\"Boolean\": \"false\"\n}"
        );
    }

    #[test]
    fn encode_escapes_quotes() {
        let text = encode(&pairs(&[("Motd", "say \"hi\"")])).unwrap();
        assert!(text.contains(r#""say \"hi\"""#));
    }

    #[test]
    fn decode_reads_string_values() {
        let entries = decode(r#"{"Host": "127.0.0.1", "Port": "8080"}"#, &path()).unwrap();
        assert_eq!(entries, pairs(&[("Host", "127.0.0.1"), ("Port", "8080")]));
    }

    #[test]
    fn decode_accepts_bare_scalars() {
        let entries = decode(r#"{"A": 1, "B": 1.5, "C": true}"#, &path()).unwrap();
        assert_eq!(entries, pairs(&[("A", "1"), ("B", "1.5"), ("C", "true")]));
    }

    #[test]
    fn decode_rejects_null() {
        let err = decode(r#"{"A": null}"#, &path()).unwrap_err();
        match err {
            SlotcfgError::NonScalarValue { key, .. } => assert_eq!(key, "A"),
            other => panic!("Expected NonScalarValue, got {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_nested_objects() {
        let err = decode(r#"{"A": {"nested": true}}"#, &path()).unwrap_err();
        assert!(matches!(err, SlotcfgError::NonScalarValue { .. }));
    }

    #[test]
    fn decode_rejects_non_object_document() {
        let err = decode(r#"["A", "B"]"#, &path()).unwrap_err();
        assert!(matches!(err, SlotcfgError::JsonError { .. }));
    }

    #[test]
    fn decode_rejects_syntax_errors() {
        let err = decode("{not json", &path()).unwrap_err();
        assert!(matches!(err, SlotcfgError::JsonError { .. }));
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let entries = decode(r#"{"A": "first", "A": "second"}"#, &path()).unwrap();
        assert_eq!(entries, pairs(&[("A", "second")]));
    }

    #[test]
    fn round_trip_preserves_entries() {
        // Decoded entries come back in key order, so declare them sorted.
        let original = pairs(&[("Debug", "true"), ("Port", "8080")]);
        let decoded = decode(&encode(&original).unwrap(), &path()).unwrap();
        assert_eq!(decoded, original);
    }
}
