//! The native encoding: one `Name = Value` line per field.
//!
//! Lines split at the first space (everything before it is the key)
//! and the value starts two characters past the first `=`. There is no
//! escaping, so values may contain spaces and `=` but not newlines.

use std::path::Path;

use crate::error::SlotcfgError;

pub(crate) fn encode(entries: &[(String, String)]) -> String {
    let mut out = String::new();
    for (name, value) in entries {
        out.push_str(name);
        out.push_str(" = ");
        out.push_str(value);
        out.push('\n');
    }
    out
}

pub(crate) fn decode(content: &str, path: &Path) -> Result<Vec<(String, String)>, SlotcfgError> {
    let mut entries: Vec<(String, String)> = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let malformed = || SlotcfgError::MalformedLine {
            path: path.to_path_buf(),
            line: i + 1,
        };
        let Some(space) = line.find(' ') else {
            return Err(malformed());
        };
        let Some(eq) = line.find('=') else {
            return Err(malformed());
        };
        let Some(value) = line.get(eq + 2..) else {
            return Err(malformed());
        };
        let key = &line[..space];
        if entries.iter().any(|(k, _)| k == key) {
            return Err(SlotcfgError::DuplicateKey {
                path: path.to_path_buf(),
                key: key.to_string(),
            });
        }
        entries.push((key.to_string(), value.to_string()));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("/test/config")
    }

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn encode_writes_one_line_per_field() {
        let text = encode(&pairs(&[
            ("Number", "0"),
            ("Text", ""),
            ("Boolean", "false"),
        ]));
        assert_eq!(text, "Number = 0\nText = \nBoolean = false\n");
    }

    #[test]
    fn encode_of_nothing_is_empty() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn decode_splits_key_and_value() {
        let entries = decode("Name = Value\n", &path()).unwrap();
        assert_eq!(entries, pairs(&[("Name", "Value")]));
    }

    #[test]
    fn decode_keeps_empty_value() {
        let entries = decode("Text = \n", &path()).unwrap();
        assert_eq!(entries, pairs(&[("Text", "")]));
    }

    #[test]
    fn value_may_contain_spaces_and_equals() {
        let entries = decode("Motd = a = b\n", &path()).unwrap();
        assert_eq!(entries, pairs(&[("Motd", "a = b")]));
    }

    #[test]
    fn line_without_space_is_malformed() {
        let err = decode("Broken\n", &path()).unwrap_err();
        match err {
            SlotcfgError::MalformedLine { line, .. } => assert_eq!(line, 1),
            other => panic!("Expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn malformed_line_number_is_one_based() {
        let err = decode("Key = 1\nBad\n", &path()).unwrap_err();
        match err {
            SlotcfgError::MalformedLine { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn line_too_short_for_value_is_malformed() {
        let err = decode("Name =\n", &path()).unwrap_err();
        assert!(matches!(err, SlotcfgError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn interior_blank_line_is_malformed() {
        let err = decode("A = 1\n\nB = 2\n", &path()).unwrap_err();
        assert!(matches!(err, SlotcfgError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn duplicate_keys_rejected() {
        let err = decode("A = 1\nA = 2\n", &path()).unwrap_err();
        match err {
            SlotcfgError::DuplicateKey { key, .. } => assert_eq!(key, "A"),
            other => panic!("Expected DuplicateKey, got {other:?}"),
        }
    }

    #[test]
    fn empty_content_decodes_to_nothing() {
        assert!(decode("", &path()).unwrap().is_empty());
    }

    #[test]
    fn round_trip_preserves_entries() {
        let original = pairs(&[("Port", "8080"), ("Host", "127.0.0.1"), ("Debug", "true")]);
        let decoded = decode(&encode(&original), &path()).unwrap();
        assert_eq!(decoded, original);
    }
}
