//! The XML encoding: a `<config>` root holding one self-closing
//! `<field name=".." value=".."/>` element per field.
//!
//! The document shape is fixed, so decoding uses a small cursor
//! scanner instead of an XML library: declaration and comments are
//! skipped, attributes may appear in either order, and only the five
//! standard entities are resolved. Anything else in the document is a
//! decode error.

use std::path::Path;

use crate::error::SlotcfgError;

const DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

pub(crate) fn encode(entries: &[(String, String)]) -> String {
    let mut out = String::from(DECLARATION);
    out.push_str("\n<config>\n");
    for (name, value) in entries {
        out.push_str("\t<field name=\"");
        out.push_str(&escape(name));
        out.push_str("\" value=\"");
        out.push_str(&escape(value));
        out.push_str("\"/>\n");
    }
    out.push_str("</config>");
    out
}

pub(crate) fn decode(content: &str, path: &Path) -> Result<Vec<(String, String)>, SlotcfgError> {
    decode_entries(content).map_err(|reason| SlotcfgError::XmlError {
        path: path.to_path_buf(),
        reason,
    })
}

fn decode_entries(content: &str) -> Result<Vec<(String, String)>, String> {
    let mut scanner = Scanner { rest: content };

    scanner.skip_whitespace();
    if scanner.rest.starts_with("<?xml") {
        scanner.skip_through("?>")?;
        scanner.skip_whitespace();
    }
    scanner.expect("<config")?;
    scanner.skip_whitespace();
    scanner.expect(">")?;

    let mut entries = Vec::new();
    loop {
        scanner.skip_whitespace();
        if scanner.try_consume("<!--") {
            scanner.skip_through("-->")?;
            continue;
        }
        if scanner.try_consume("</config>") {
            break;
        }
        scanner.expect("<field")?;

        let mut name = None;
        let mut value = None;
        loop {
            scanner.skip_whitespace();
            if scanner.try_consume("/>") {
                break;
            }
            let (attr, raw) = scanner.attribute()?;
            match attr {
                "name" => name = Some(unescape(raw)?),
                "value" => value = Some(unescape(raw)?),
                other => return Err(format!("unexpected attribute '{other}' on field element")),
            }
        }
        let name = name.ok_or("field element without a name attribute")?;
        let value = value.ok_or("field element without a value attribute")?;
        entries.push((name, value));
    }

    scanner.skip_whitespace();
    if !scanner.rest.is_empty() {
        return Err("content after closing </config>".to_string());
    }
    Ok(entries)
}

struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn try_consume(&mut self, token: &str) -> bool {
        if let Some(after) = self.rest.strip_prefix(token) {
            self.rest = after;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &str) -> Result<(), String> {
        if self.try_consume(token) {
            Ok(())
        } else {
            Err(format!("expected '{token}' near '{}'", self.context()))
        }
    }

    /// Drops everything up to and including `token`.
    fn skip_through(&mut self, token: &str) -> Result<(), String> {
        match self.rest.find(token) {
            Some(pos) => {
                self.rest = &self.rest[pos + token.len()..];
                Ok(())
            }
            None => Err(format!("missing closing '{token}'")),
        }
    }

    /// Reads one `name="raw"` attribute; the raw text is returned
    /// unresolved.
    fn attribute(&mut self) -> Result<(&'a str, &'a str), String> {
        let len = self
            .rest
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(self.rest.len());
        if len == 0 {
            return Err(format!("expected an attribute near '{}'", self.context()));
        }
        let name = &self.rest[..len];
        self.rest = &self.rest[len..];
        self.skip_whitespace();
        self.expect("=")?;
        self.skip_whitespace();
        self.expect("\"")?;
        let end = self
            .rest
            .find('"')
            .ok_or_else(|| format!("unterminated value of attribute '{name}'"))?;
        let raw = &self.rest[..end];
        self.rest = &self.rest[end + 1..];
        Ok((name, raw))
    }

    fn context(&self) -> &'a str {
        match self.rest.char_indices().nth(20) {
            Some((i, _)) => &self.rest[..i],
            None => self.rest,
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

fn unescape(raw: &str) -> Result<String, String> {
    if !raw.contains('&') {
        return Ok(raw.to_string());
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let semi = rest
            .find(';')
            .ok_or_else(|| format!("unterminated entity in '{raw}'"))?;
        let replacement = match &rest[..=semi] {
            "&amp;" => '&',
            "&lt;" => '<',
            "&gt;" => '>',
            "&quot;" => '"',
            "&apos;" => '\'',
            other => return Err(format!("unknown entity '{other}'")),
        };
        out.push(replacement);
        rest = &rest[semi + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("/test/settings.xml")
    }

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn encode_writes_declaration_root_and_fields() {
        let text = encode(&pairs(&[
            ("Number", "0"),
            ("Text", ""),
            ("Boolean", "false"),
        ]));
        assert_eq!(
            text,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <config>\n\
             \t<field name=\"Number\" value=\"0\"/>\n\
             \t<field name=\"Text\" value=\"\"/>\n\
             \t<field name=\"Boolean\" value=\"false\"/>\n\
             </config>"
        );
    }

    #[test]
    fn encode_escapes_attribute_text() {
        let text = encode(&pairs(&[("Motd", "a<b & \"c\"")]));
        assert!(text.contains("value=\"a&lt;b &amp; &quot;c&quot;\""));
    }

    #[test]
    fn decode_reads_fields_in_document_order() {
        let entries = decode(
            &encode(&pairs(&[("Port", "8080"), ("Debug", "true")])),
            &path(),
        )
        .unwrap();
        assert_eq!(entries, pairs(&[("Port", "8080"), ("Debug", "true")]));
    }

    #[test]
    fn round_trip_restores_escaped_text() {
        let original = pairs(&[("Motd", "a<b & \"c\" > d")]);
        let decoded = decode(&encode(&original), &path()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn declaration_is_optional() {
        let entries = decode("<config>\n\t<field name=\"A\" value=\"1\"/>\n</config>", &path())
            .unwrap();
        assert_eq!(entries, pairs(&[("A", "1")]));
    }

    #[test]
    fn comments_are_skipped() {
        let doc = "<config>\n\
                   \t<!-- first block -->\n\
                   \t<field name=\"A\" value=\"1\"/>\n\
                   \t<!-- trailing -->\n\
                   </config>";
        let entries = decode(doc, &path()).unwrap();
        assert_eq!(entries, pairs(&[("A", "1")]));
    }

    #[test]
    fn attribute_order_does_not_matter() {
        let doc = "<config><field value=\"1\" name=\"A\"/></config>";
        let entries = decode(doc, &path()).unwrap();
        assert_eq!(entries, pairs(&[("A", "1")]));
    }

    #[test]
    fn apostrophe_entity_resolves() {
        let doc = "<config><field name=\"A\" value=\"it&apos;s\"/></config>";
        let entries = decode(doc, &path()).unwrap();
        assert_eq!(entries, pairs(&[("A", "it's")]));
    }

    #[test]
    fn duplicate_names_are_kept_in_order() {
        let doc = "<config>\
                   <field name=\"A\" value=\"1\"/>\
                   <field name=\"A\" value=\"2\"/>\
                   </config>";
        let entries = decode(doc, &path()).unwrap();
        assert_eq!(entries, pairs(&[("A", "1"), ("A", "2")]));
    }

    #[test]
    fn missing_root_is_an_error() {
        let err = decode("<field name=\"A\" value=\"1\"/>", &path()).unwrap_err();
        match err {
            SlotcfgError::XmlError { reason, .. } => {
                assert!(reason.contains("<config"), "unexpected reason: {reason}");
            }
            other => panic!("Expected XmlError, got {other:?}"),
        }
    }

    #[test]
    fn unknown_element_is_an_error() {
        let err = decode("<config><item/></config>", &path()).unwrap_err();
        assert!(matches!(err, SlotcfgError::XmlError { .. }));
    }

    #[test]
    fn unterminated_field_is_an_error() {
        let err = decode("<config><field name=\"A\" value=\"1\"", &path()).unwrap_err();
        assert!(matches!(err, SlotcfgError::XmlError { .. }));
    }

    #[test]
    fn unknown_entity_is_an_error() {
        let doc = "<config><field name=\"A\" value=\"&bogus;\"/></config>";
        let err = decode(doc, &path()).unwrap_err();
        match err {
            SlotcfgError::XmlError { reason, .. } => {
                assert!(reason.contains("&bogus;"), "unexpected reason: {reason}");
            }
            other => panic!("Expected XmlError, got {other:?}"),
        }
    }

    #[test]
    fn missing_value_attribute_is_an_error() {
        let doc = "<config><field name=\"A\"/></config>";
        let err = decode(doc, &path()).unwrap_err();
        match err {
            SlotcfgError::XmlError { reason, .. } => {
                assert!(reason.contains("value"), "unexpected reason: {reason}");
            }
            other => panic!("Expected XmlError, got {other:?}"),
        }
    }

    #[test]
    fn trailing_content_is_an_error() {
        let doc = "<config></config><config></config>";
        let err = decode(doc, &path()).unwrap_err();
        assert!(matches!(err, SlotcfgError::XmlError { .. }));
    }
}
